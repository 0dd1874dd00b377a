//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed at the end of the turn.

use crate::event_log::LogLine;
use crate::loader::config::HelpCommand;
use crate::rules::EndState;
use crate::style::{GameStyle, indented_block, normal_block};

use colored::Colorize;
use std::fmt::Write;
use textwrap::{fill, termwidth};
use variantly::Variantly;

const ICON_SUCCESS: &str = "\u{2611}"; // ✔
const ICON_FAILURE: &str = "\u{274C}"; // ✖
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_POSITIVE: &str = "➕";
const ICON_CELEBRATE: &str = "🎉"; // U+1F389
const ICON_ENGINE: &str = "⚙";

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Plain text of everything queued this turn, in push order.
    pub fn messages(&self) -> Vec<String> {
        self.items.iter().map(ViewItem::plain_text).collect()
    }

    /// Description text of the last location shown this turn, if any.
    pub fn last_location_description(&self) -> Option<&str> {
        self.items.iter().rev().find_map(|item| match item {
            ViewItem::LocationDescription { description, .. } => Some(description.as_str()),
            _ => None,
        })
    }

    /// Clears the buffer without displaying it.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        if self.has_section(Section::Environment) {
            println!("{:.>width$}\n", "scene".section_style(), width = self.width);
            self.location_description();
            self.location_items();
            self.location_commands();
        }
        if self.has_section(Section::DirectResult) {
            println!("{:.>width$}\n", "results".section_style(), width = self.width);
            self.item_detail();
            self.inventory();
            self.action_success();
            self.action_failure();
            self.errors();
        }
        if self.has_section(Section::WorldResponse) {
            println!("{:.>width$}\n", "responses".section_style(), width = self.width);
            self.points_awarded();
        }
        if self.has_section(Section::System) {
            println!("{:.>width$}\n", "game".section_style(), width = self.width);
            self.score();
            self.event_log();
            self.map();
            self.show_help();
            self.engine_message();
            self.ending();
        }

        // clear the buffer for the next turn
        self.items.clear();
        println!();
    }

    fn has_section(&self, section: Section) -> bool {
        self.items.iter().any(|item| item.section() == section)
    }

    // INDIVIDUAL VIEW ITEM HANDLERS START HERE -------------------------------
    fn location_description(&self) {
        if let Some(ViewItem::LocationDescription { name, description }) =
            self.items.iter().rev().find(|i| i.is_location_description())
        {
            println!("{:^width$}", name.location_titlebar_style(), width = self.width);
            println!("{}", fill(description, normal_block()).description_style());
            println!();
        }
    }

    fn location_items(&self) {
        if let Some(ViewItem::LocationItems(names)) = self.items.iter().find(|i| i.is_location_items()) {
            println!("{}:", "You see".subheading_style());
            for name in names {
                println!("   {}", name.item_style());
            }
            println!();
        }
    }

    fn location_commands(&self) {
        if let Some(ViewItem::LocationCommands(lines)) = self.items.iter().find(|i| i.is_location_commands()) {
            println!("{}:", "At this location, you can also".subheading_style());
            for line in lines {
                let styled = match (&line.destination, line.locked, line.visited) {
                    (Some(_), true, _) => line.command.exit_locked_style(),
                    (Some(_), false, true) => line.command.exit_visited_style(),
                    (Some(_), false, false) => line.command.exit_unvisited_style(),
                    (None, ..) => line.command.command_style(),
                };
                println!("   - {styled}");
            }
            println!();
        }
    }

    fn item_detail(&self) {
        for item in &self.items {
            if let ViewItem::ItemDescription { name, description } = item {
                println!("{}", name.item_style().underline());
                println!("{}", fill(description, normal_block()).description_style());
                println!();
            }
        }
    }

    fn inventory(&self) {
        if let Some(ViewItem::Inventory(lines)) = self.items.iter().find(|i| i.is_inventory()) {
            println!("{}:", "Inventory".subheading_style());
            if lines.is_empty() {
                println!("   {}", "Your inventory is empty.".italic().dimmed());
            } else {
                for line in lines {
                    let text = format!("{} - {}", line.name.item_style(), line.description.italic());
                    println!("{}", fill(&text, indented_block()));
                }
            }
            println!();
        }
    }

    fn action_success(&self) {
        for msg in self.items.iter().filter_map(ViewItem::action_success_ref) {
            println!(
                "{}",
                fill(format!("{} {}", ICON_SUCCESS.bright_green(), msg).as_str(), normal_block())
            );
        }
    }

    fn action_failure(&self) {
        for msg in self.items.iter().filter_map(ViewItem::action_failure_ref) {
            println!(
                "{}",
                fill(format!("{} {}", ICON_FAILURE.bright_red(), msg.denied_style()).as_str(), normal_block())
            );
        }
    }

    fn errors(&self) {
        for msg in self.items.iter().filter_map(ViewItem::error_ref) {
            println!(
                "{}",
                fill(format!("{} {}", ICON_ERROR.bright_red(), msg.error_style()).as_str(), normal_block())
            );
        }
    }

    fn points_awarded(&self) {
        for item in &self.items {
            if let ViewItem::PointsAwarded { amount, reason, total } = item {
                if *amount > 15 {
                    let text = format!("{reason} (+{amount} points!) Total score: {total}").bright_blue();
                    println!("{:<4}{}", ICON_CELEBRATE.bright_blue(), text);
                } else {
                    let text = format!("{reason} (+{amount} points) Total score: {total}").bright_green();
                    println!("{:<4}{}", ICON_POSITIVE.bright_green(), text);
                }
            }
        }
    }

    fn score(&self) {
        if let Some(ViewItem::Score {
            score,
            max_score,
            moves,
            move_limit,
        }) = self.items.iter().find(|i| i.is_score())
        {
            println!("{:10} {}/{}", "Score:", score, max_score);
            println!("{:10} {}/{}", "Moves:", moves, move_limit);
            println!();
        }
    }

    fn event_log(&self) {
        if let Some(ViewItem::EventLog(lines)) = self.items.iter().find(|i| i.is_event_log()) {
            println!("{}", "Your day so far".subheading_style());
            for line in lines {
                println!("{}", fill(&line.description, normal_block()).description_style());
                if let Some(command) = &line.next_command {
                    println!("   You choose: {}", command.command_style());
                }
            }
            println!();
        }
    }

    fn map(&self) {
        if let Some(ViewItem::Map(lines)) = self.items.iter().find(|i| i.is_map()) {
            println!("{}", "Campus map".subheading_style());
            for line in lines {
                let marker = if line.here { " (you are here)" } else { "" };
                println!("{}{}", line.name.location_style(), marker.bold());
                for exit in &line.exits {
                    let destination = exit.destination.as_deref().unwrap_or("???");
                    println!("   {} -> {}", exit.command.command_style(), destination.location_style());
                }
            }
            println!();
        }
    }

    fn show_help(&self) {
        if let Some(ViewItem::Help(commands)) = self.items.iter().find(|i| i.is_help()) {
            println!("{}", "Available commands:".bold().yellow());
            println!();
            for command in commands {
                let formatted_line = format!("{} - {}", command.command.command_style(), command.description.italic());
                println!("{}", fill(&formatted_line, normal_block()));
            }
            println!();
        }
    }

    fn engine_message(&self) {
        for msg in self.items.iter().filter_map(ViewItem::engine_message_ref) {
            println!("{}", fill(format!("{ICON_ENGINE:<4}{msg}").as_str(), normal_block()));
        }
    }

    fn ending(&self) {
        if let Some(ViewItem::Ending {
            ending,
            score,
            max_score,
            moves,
            move_limit,
            visited,
            max_visited,
        }) = self.items.iter().find(|i| i.is_ending())
        {
            println!("{:^width$}", ending_title(*ending).black().on_yellow(), width = self.width);
            println!("{}", fill(ending_message(*ending), normal_block()).description_style());
            println!("{:10} {}/{}", "Score:", score, max_score);
            println!("{:10} {}/{}", "Moves:", moves, move_limit);
            println!("{:10} {}/{}", "Visited:", visited, max_visited);
        }
    }
}

/// Subsections of the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    /// Location description and available commands.
    Environment,
    /// Direct results of the player's command.
    DirectResult,
    /// Consequences of a delivery.
    WorldResponse,
    /// Meta/game-system feedback (score, log, help, endings).
    System,
}

/// Row data for the location command listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub command: String,
    /// Name of the destination for movement commands; `None` for local actions.
    pub destination: Option<String>,
    pub locked: bool,
    pub visited: bool,
}

/// Row data for the inventory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLine {
    pub name: String,
    pub description: String,
}

/// One explored location on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLine {
    pub name: String,
    pub here: bool,
    pub exits: Vec<MapExit>,
}

/// A map exit; unexplored destinations stay unnamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapExit {
    pub command: String,
    pub destination: Option<String>,
}

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    EngineMessage(String),
    Ending {
        ending: EndState,
        score: u32,
        max_score: u32,
        moves: u32,
        move_limit: u32,
        visited: usize,
        max_visited: usize,
    },
    Error(String),
    EventLog(Vec<LogLine>),
    Help(Vec<HelpCommand>),
    Inventory(Vec<ItemLine>),
    ItemDescription {
        name: String,
        description: String,
    },
    LocationCommands(Vec<CommandLine>),
    LocationDescription {
        name: String,
        description: String,
    },
    LocationItems(Vec<String>),
    Map(Vec<MapLine>),
    PointsAwarded {
        amount: u32,
        reason: String,
        total: u32,
    },
    Score {
        score: u32,
        max_score: u32,
        moves: u32,
        move_limit: u32,
    },
}
impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::LocationDescription { .. } | ViewItem::LocationItems(_) | ViewItem::LocationCommands(_) => {
                Section::Environment
            },
            ViewItem::ActionSuccess(_)
            | ViewItem::ActionFailure(_)
            | ViewItem::Error(_)
            | ViewItem::ItemDescription { .. }
            | ViewItem::Inventory(_) => Section::DirectResult,
            ViewItem::PointsAwarded { .. } => Section::WorldResponse,
            ViewItem::Score { .. }
            | ViewItem::EventLog(_)
            | ViewItem::Map(_)
            | ViewItem::Help(_)
            | ViewItem::EngineMessage(_)
            | ViewItem::Ending { .. } => Section::System,
        }
    }

    /// Unstyled rendering, used by the replay driver and tests.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        match self {
            ViewItem::ActionFailure(msg)
            | ViewItem::ActionSuccess(msg)
            | ViewItem::EngineMessage(msg)
            | ViewItem::Error(msg) => out.push_str(msg),
            ViewItem::LocationDescription { description, .. } => out.push_str(description),
            ViewItem::LocationItems(names) => {
                let _ = write!(out, "You see: {}", names.join(", "));
            },
            ViewItem::LocationCommands(lines) => {
                out.push_str("At this location, you can also:");
                for line in lines {
                    let _ = write!(out, "\n- {}", line.command);
                }
            },
            ViewItem::ItemDescription { name, description } => {
                let _ = write!(out, "{name}: {description}");
            },
            ViewItem::Inventory(lines) => {
                if lines.is_empty() {
                    out.push_str("Your inventory is empty.");
                } else {
                    out.push_str("You are carrying:");
                    for line in lines {
                        let _ = write!(out, "\n  - {}: {}", line.name, line.description);
                    }
                }
            },
            ViewItem::PointsAwarded { amount, total, .. } => {
                let _ = write!(out, "Score increased by {amount}! Total score: {total}");
            },
            ViewItem::Score {
                score,
                moves,
                move_limit,
                ..
            } => {
                let _ = write!(out, "Your current score: {score} (moves: {moves}/{move_limit})");
            },
            ViewItem::EventLog(lines) => {
                let rendered: Vec<String> = lines
                    .iter()
                    .map(|line| match &line.next_command {
                        Some(command) => format!("{}\nYou choose: {command}", line.description),
                        None => line.description.clone(),
                    })
                    .collect();
                out.push_str(&rendered.join("\n"));
            },
            ViewItem::Map(lines) => {
                let rendered: Vec<String> = lines
                    .iter()
                    .map(|line| {
                        let exits: Vec<String> = line
                            .exits
                            .iter()
                            .map(|exit| format!("{} -> {}", exit.command, exit.destination.as_deref().unwrap_or("???")))
                            .collect();
                        format!("{}: {}", line.name, exits.join(", "))
                    })
                    .collect();
                out.push_str(&rendered.join("\n"));
            },
            ViewItem::Help(commands) => {
                out.push_str("Available commands:");
                for command in commands {
                    let _ = write!(out, "\n  {} - {}", command.command, command.description);
                }
            },
            ViewItem::Ending { ending, score, .. } => {
                let _ = write!(out, "{} Final score: {score}", ending_message(*ending));
            },
        }
        out
    }
}

/// Banner text for a terminal state.
pub fn ending_title(ending: EndState) -> &'static str {
    match ending {
        EndState::Won => " DEADLINE MET ",
        EndState::LostByMoveLimit => " DEADLINE MISSED ",
        EndState::SecretEnding => " SECRET ENDING ",
        EndState::Quit => " GAME OVER ",
        EndState::Continuing => "",
    }
}

/// Closing line for a terminal state.
pub fn ending_message(ending: EndState) -> &'static str {
    match ending {
        EndState::Won => "You made it back to your dorm with everything you need. You win!",
        EndState::LostByMoveLimit => "You ran out of moves before the deadline. You lose.",
        EndState::SecretEnding => {
            "Back home, you talk your whole project through with your unlikely companion. \
             Suddenly everything makes sense. You found the secret ending!"
        },
        EndState::Quit => "Thank you for playing! Goodbye.",
        EndState::Continuing => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_preserve_push_order() {
        let mut view = View::new();
        view.push(ViewItem::ActionSuccess("You picked up the usb_drive.".into()));
        view.push(ViewItem::ActionFailure("You cannot take whiteboard.".into()));
        assert_eq!(
            view.messages(),
            vec!["You picked up the usb_drive.", "You cannot take whiteboard."]
        );
    }

    #[test]
    fn last_location_description_prefers_latest() {
        let mut view = View::new();
        view.push(ViewItem::LocationDescription {
            name: "Dorm".into(),
            description: "First.".into(),
        });
        view.push(ViewItem::LocationDescription {
            name: "Hallway".into(),
            description: "Second.".into(),
        });
        assert_eq!(view.last_location_description(), Some("Second."));
        view.reset();
        assert_eq!(view.last_location_description(), None);
    }

    #[test]
    fn sections_classify_items() {
        assert_eq!(ViewItem::LocationItems(vec![]).section(), Section::Environment);
        assert_eq!(ViewItem::Inventory(vec![]).section(), Section::DirectResult);
        assert_eq!(
            ViewItem::PointsAwarded {
                amount: 30,
                reason: "delivered".into(),
                total: 30
            }
            .section(),
            Section::WorldResponse
        );
        assert_eq!(ViewItem::Help(vec![]).section(), Section::System);
    }

    #[test]
    fn empty_inventory_plain_text() {
        assert_eq!(ViewItem::Inventory(vec![]).plain_text(), "Your inventory is empty.");
    }

    #[test]
    fn points_plain_text_reports_total() {
        let item = ViewItem::PointsAwarded {
            amount: 40,
            reason: "Delivered lucky_mug".into(),
            total: 70,
        };
        assert_eq!(item.plain_text(), "Score increased by 40! Total score: 70");
    }

    #[test]
    fn flush_clears_buffer() {
        let mut view = View::new();
        view.push(ViewItem::EngineMessage("hello".into()));
        view.flush();
        assert!(view.items.is_empty());
    }

    #[test]
    fn ending_messages_do_not_name_world_items() {
        let world = crate::test_support::campus_world(30);
        for ending in [EndState::Won, EndState::LostByMoveLimit, EndState::SecretEnding, EndState::Quit] {
            let message = ending_message(ending);
            assert!(!message.is_empty());
            assert!(world.items.values().all(|item| !message.contains(item.name.replace('_', " ").as_str())));
        }
    }
}
