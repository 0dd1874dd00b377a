//! Command module
//!
//! Describes possible commands used during gameplay, and the input normalizer
//! that turns raw typed text into the canonical form they are parsed from.

use crate::location::Location;

use std::collections::BTreeMap;
use variantly::Variantly;

/// Keywords accepted at every location.
pub const SYSTEM_COMMANDS: [&str; 7] = ["look", "inventory", "score", "log", "map", "help", "quit"];

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Drop(String),
    Examine(String),
    Help,
    Inventory,
    Log,
    Look,
    Map,
    /// A key of the current location's command table.
    Mapped(String),
    Quit,
    Score,
    /// `None` for a bare `take`.
    Take(Option<String>),
    Unknown(String),
}

/// Parses a canonical input string into a `Command` in the context of the current location.
///
/// System keywords win over location keys, and location keys win over the generic
/// take/drop/examine forms.
pub fn parse_command(input: &str, location: &Location) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    match words.as_slice() {
        ["look"] => return Command::Look,
        ["inventory"] => return Command::Inventory,
        ["score"] => return Command::Score,
        ["log"] => return Command::Log,
        ["map"] => return Command::Map,
        ["help"] => return Command::Help,
        ["quit"] => return Command::Quit,
        _ => {},
    }
    if location.commands.contains_key(input) {
        return Command::Mapped(input.to_string());
    }
    match words.as_slice() {
        ["take"] => Command::Take(None),
        ["take", thing @ ..] => Command::Take(Some(thing.join(" "))),
        ["drop", thing, rest @ ..] => Command::Drop(join_name(thing, rest)),
        ["examine", thing, rest @ ..] => Command::Examine(join_name(thing, rest)),
        _ => Command::Unknown(input.to_string()),
    }
}

fn join_name(first: &str, rest: &[&str]) -> String {
    if rest.is_empty() {
        first.to_string()
    } else {
        format!("{first} {}", rest.join(" "))
    }
}

/// Lowercase, trim and collapse whitespace, then expand input shorthand.
///
/// A shorthand matching the whole input replaces it ("n" -> "go north");
/// otherwise a shorthand matching the first word replaces just that word
/// ("get mug" -> "take mug").
pub fn normalize_input(raw: &str, verbs: &BTreeMap<String, String>) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    if let Some(expanded) = verbs.get(&collapsed) {
        return expanded.clone();
    }
    match collapsed.split_once(' ') {
        Some((first, rest)) => match verbs.get(first) {
            Some(expanded) => format!("{expanded} {rest}"),
            None => collapsed,
        },
        None => collapsed,
    }
}

/// The validation gate: true if `input` is something the resolver knows how to handle here.
pub fn is_valid_command(input: &str, location: &Location) -> bool {
    !parse_command(input, location).is_unknown()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::CommandTarget;
    use std::collections::BTreeSet;

    fn quad() -> Location {
        let mut commands = BTreeMap::new();
        commands.insert("go north".to_string(), CommandTarget::MoveTo(4));
        commands.insert("buy coffee".to_string(), CommandTarget::Action("coffee".into()));
        commands.insert("take map".to_string(), CommandTarget::Action("map".into()));
        Location {
            id: 3,
            name: "Quad".into(),
            brief_description: "The quad.".into(),
            long_description: "The quad, at length.".into(),
            commands,
            items_present: BTreeSet::new(),
            visited: true,
            locked: false,
            key_id: None,
        }
    }

    fn verbs() -> BTreeMap<String, String> {
        [("n", "go north"), ("i", "inventory"), ("get", "take"), ("x", "examine")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn system_keywords_parse_everywhere() {
        let location = quad();
        assert_eq!(parse_command("look", &location), Command::Look);
        assert_eq!(parse_command("log", &location), Command::Log);
        assert_eq!(parse_command("quit", &location), Command::Quit);
    }

    #[test]
    fn location_keys_parse_as_mapped() {
        let location = quad();
        assert_eq!(parse_command("go north", &location), Command::Mapped("go north".into()));
        assert_eq!(parse_command("buy coffee", &location), Command::Mapped("buy coffee".into()));
        assert_eq!(parse_command("take map", &location), Command::Mapped("take map".into()));
    }

    #[test]
    fn verb_forms_parse_item_names() {
        let location = quad();
        assert_eq!(parse_command("take", &location), Command::Take(None));
        assert_eq!(parse_command("take usb_drive", &location), Command::Take(Some("usb_drive".into())));
        assert_eq!(parse_command("drop lucky mug", &location), Command::Drop("lucky mug".into()));
        assert_eq!(parse_command("examine duck", &location), Command::Examine("duck".into()));
    }

    #[test]
    fn anything_else_is_unknown() {
        let location = quad();
        assert!(parse_command("go south", &location).is_unknown());
        assert!(parse_command("drop", &location).is_unknown());
        assert!(!is_valid_command("dance", &location));
        assert!(is_valid_command("go north", &location));
    }

    #[test]
    fn normalize_collapses_and_lowercases() {
        assert_eq!(normalize_input("  Go   NORTH ", &BTreeMap::new()), "go north");
    }

    #[test]
    fn normalize_expands_whole_and_leading_shorthand() {
        let verbs = verbs();
        assert_eq!(normalize_input("N", &verbs), "go north");
        assert_eq!(normalize_input("i", &verbs), "inventory");
        assert_eq!(normalize_input("get  Mug", &verbs), "take mug");
        assert_eq!(normalize_input("x duck", &verbs), "examine duck");
        assert_eq!(normalize_input("north", &verbs), "north");
    }
}
