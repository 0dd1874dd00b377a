//! Location definitions.
//!
//! A location is a node in the world graph. Its `commands` map is the only
//! source of connectivity: each key leads either to another location or to a
//! local action.

use crate::item::ItemHolder;
use deadline_data::{CommandDef, ItemId, LocationDef, LocationId};
use std::collections::{BTreeMap, BTreeSet};
use variantly::Variantly;

/// What choosing a location command does. Decided when the world is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum CommandTarget {
    MoveTo(LocationId),
    Action(String),
}
impl From<&CommandDef> for CommandTarget {
    fn from(def: &CommandDef) -> Self {
        match def {
            CommandDef::MoveTo(id) => CommandTarget::MoveTo(*id),
            CommandDef::Action(action) => CommandTarget::Action(action.clone()),
        }
    }
}

/// Any place the player can stand.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub brief_description: String,
    pub long_description: String,
    pub commands: BTreeMap<String, CommandTarget>,
    pub items_present: BTreeSet<String>,
    pub visited: bool,
    pub locked: bool,
    pub key_id: Option<ItemId>,
}
impl Location {
    /// Builds the runtime location from its definition. Item names are taken as given;
    /// the loader canonicalizes them against the catalog.
    pub fn from_def(def: &LocationDef) -> Self {
        Self {
            id: def.id,
            name: def.name.clone(),
            brief_description: def.brief_description.clone(),
            long_description: def.long_description.clone(),
            commands: def
                .commands
                .iter()
                .map(|(key, target)| (key.clone(), CommandTarget::from(target)))
                .collect(),
            items_present: def.items.iter().cloned().collect(),
            visited: false,
            locked: def.locked,
            key_id: def.key_id.clone(),
        }
    }

    /// The description to show on arrival: long the first time, brief afterwards.
    pub fn arrival_description(&self) -> &str {
        if self.visited {
            &self.brief_description
        } else {
            &self.long_description
        }
    }

    pub fn target(&self, command: &str) -> Option<&CommandTarget> {
        self.commands.get(command)
    }

    /// Movement commands and where they lead.
    pub fn exits(&self) -> impl Iterator<Item = (&str, LocationId)> {
        self.commands
            .iter()
            .filter_map(|(key, target)| target.move_to_ref().map(|to| (key.as_str(), *to)))
    }
}
impl ItemHolder for Location {
    fn add_item(&mut self, item_name: &str) {
        self.items_present.insert(item_name.to_string());
    }

    fn remove_item(&mut self, item_name: &str) -> bool {
        self.items_present.remove(item_name)
    }

    fn contains_item(&self, item_name: &str) -> bool {
        self.items_present.contains(item_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def() -> LocationDef {
        let mut commands = BTreeMap::new();
        commands.insert("go north".to_string(), CommandDef::MoveTo(2));
        commands.insert("use whiteboard".to_string(), CommandDef::Action("whiteboard".into()));
        LocationDef {
            id: 5,
            name: "Lab".into(),
            brief_description: "The lab.".into(),
            long_description: "A long look at the lab.".into(),
            commands,
            items: vec!["laptop_charger".into()],
            locked: false,
            key_id: None,
        }
    }

    #[test]
    fn command_targets_are_tagged_at_load() {
        let location = Location::from_def(&def());
        assert_eq!(location.target("go north"), Some(&CommandTarget::MoveTo(2)));
        assert!(location.target("use whiteboard").is_some_and(CommandTarget::is_action));
        assert!(location.target("go south").is_none());
    }

    #[test]
    fn exits_only_lists_movement() {
        let location = Location::from_def(&def());
        let exits: Vec<_> = location.exits().collect();
        assert_eq!(exits, vec![("go north", 2)]);
    }

    #[test]
    fn arrival_description_switches_after_visit() {
        let mut location = Location::from_def(&def());
        assert_eq!(location.arrival_description(), "A long look at the lab.");
        location.visited = true;
        assert_eq!(location.arrival_description(), "The lab.");
    }

    #[test]
    fn item_holder_tracks_presence() {
        let mut location = Location::from_def(&def());
        assert!(location.contains_item("laptop_charger"));
        assert!(location.remove_item("laptop_charger"));
        assert!(!location.remove_item("laptop_charger"));
        location.add_item("lucky_mug");
        assert!(location.contains_item("lucky_mug"));
    }
}
