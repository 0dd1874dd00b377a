//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn location_style(&self) -> ColoredString;
    fn location_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn command_style(&self) -> ColoredString;
    fn exit_visited_style(&self) -> ColoredString;
    fn exit_locked_style(&self) -> ColoredString;
    fn exit_unvisited_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn location_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
    fn location_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn command_style(&self) -> ColoredString {
        self.bold().green()
    }
    fn exit_visited_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn exit_locked_style(&self) -> ColoredString {
        self.italic().truecolor(200, 50, 50)
    }
    fn exit_unvisited_style(&self) -> ColoredString {
        self.italic().truecolor(220, 180, 40)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(75, 180, 255)
    }
}

impl GameStyle for String {
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn location_style(&self) -> ColoredString {
        self.as_str().location_style()
    }
    fn location_titlebar_style(&self) -> ColoredString {
        self.as_str().location_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn command_style(&self) -> ColoredString {
        self.as_str().command_style()
    }
    fn exit_visited_style(&self) -> ColoredString {
        self.as_str().exit_visited_style()
    }
    fn exit_locked_style(&self) -> ColoredString {
        self.as_str().exit_locked_style()
    }
    fn exit_unvisited_style(&self) -> ColoredString {
        self.as_str().exit_unvisited_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}

/// Wrap options for ordinary paragraphs at the current terminal width.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth())
}

/// Wrap options for list entries, indented under a heading.
pub fn indented_block() -> Options<'static> {
    Options::new(termwidth()).initial_indent("   ").subsequent_indent("     ")
}
