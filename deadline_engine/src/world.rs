//! Data structures representing the game world.
//!
//! This module defines [`GameWorld`], which owns every location, the item
//! catalog, the player, and the event log for a running game.

use crate::DEADLINE_VERSION;
use crate::alias::AliasTable;
use crate::event_log::EventLog;
use crate::item::{Item, ItemHolder};
use crate::loader::config::HelpCommand;
use crate::location::Location;
use crate::player::Player;
use crate::rules::WinRules;

use deadline_data::LocationId;
use log::info;
use std::collections::BTreeMap;
use thiserror::Error;
use variantly::Variantly;

/// Lookups that can only fail if the world data was malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("location {0} not found in world")]
    LocationNotFound(LocationId),
    #[error("item '{0}' not found in catalog")]
    ItemNotFound(String),
}

/// Where a catalog item currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum ItemPlace {
    Location(LocationId),
    Inventory,
    /// Neither held nor placed. Never true for a well-formed world.
    Nowhere,
}

/// Complete state of the running game.
///
/// Built once by the loader and then mutated turn by turn by the resolver.
#[derive(Debug, Clone, Default)]
pub struct GameWorld {
    pub title: String,
    pub intro: String,
    pub locations: BTreeMap<LocationId, Location>,
    /// Catalog keyed by item id.
    pub items: BTreeMap<String, Item>,
    pub player: Player,
    pub log: EventLog,
    pub rules: WinRules,
    pub aliases: AliasTable,
    pub help: Vec<HelpCommand>,
    pub version: String,
}
impl GameWorld {
    /// Create a new empty world with a default player.
    pub fn new_empty() -> GameWorld {
        let world = Self {
            version: DEADLINE_VERSION.to_string(),
            ..Self::default()
        };
        info!("new, empty 'GameWorld' created");
        world
    }

    /// Look up a location by id.
    /// # Errors
    /// - `WorldError::LocationNotFound` if no location has that id
    pub fn lookup(&self, id: LocationId) -> Result<&Location, WorldError> {
        self.locations.get(&id).ok_or(WorldError::LocationNotFound(id))
    }

    /// Look up a location by id for mutation.
    /// # Errors
    /// - `WorldError::LocationNotFound` if no location has that id
    pub fn lookup_mut(&mut self, id: LocationId) -> Result<&mut Location, WorldError> {
        self.locations.get_mut(&id).ok_or(WorldError::LocationNotFound(id))
    }

    /// The location the player occupies.
    /// # Errors
    /// - if the player's location id is not in the world
    pub fn player_location(&self) -> Result<&Location, WorldError> {
        self.lookup(self.player.location_id)
    }

    /// Mutable reference to the location the player occupies.
    /// # Errors
    /// - if the player's location id is not in the world
    pub fn player_location_mut(&mut self) -> Result<&mut Location, WorldError> {
        self.lookup_mut(self.player.location_id)
    }

    /// Case-insensitive exact match over the catalog.
    pub fn find_item_by_name(&self, name: &str) -> Option<&Item> {
        self.items.values().find(|item| item.name.eq_ignore_ascii_case(name))
    }

    pub fn item_by_id(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Resolve player-typed text to a catalog item: shorthand first, then the exact
    /// name, then the name with spaces read as underscores ("lucky mug").
    pub fn resolve_item_name(&self, input: &str) -> Option<&Item> {
        let canonical = self.aliases.canonical(input.trim());
        self.find_item_by_name(canonical)
            .or_else(|| self.find_item_by_name(&canonical.replace(' ', "_")))
    }

    /// Where the named item currently is.
    pub fn locate_item(&self, name: &str) -> ItemPlace {
        if self.player.contains_item(name) {
            return ItemPlace::Inventory;
        }
        self.locations
            .values()
            .find(|location| location.contains_item(name))
            .map_or(ItemPlace::Nowhere, |location| ItemPlace::Location(location.id))
    }

    /// Points available for delivering every required item home.
    pub fn max_score(&self) -> u32 {
        self.rules
            .required_items
            .iter()
            .filter_map(|name| self.find_item_by_name(name))
            .filter(|item| item.scores_at(self.rules.home))
            .map(|item| item.target_points)
            .sum()
    }

    pub fn visited_count(&self) -> usize {
        self.locations.values().filter(|location| location.visited).count()
    }
}
