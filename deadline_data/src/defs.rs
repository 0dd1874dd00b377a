use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Numeric identifier of a location in the world graph.
pub type LocationId = u32;

/// Stable identifier used to reference items (keys, catalog entries).
pub type ItemId = String;

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub locations: Vec<LocationDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub start_location: LocationId,
    pub rules: RulesDef,
}

/// Delivery rules: where items must end up and which ones matter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RulesDef {
    /// The location required items must be dropped in.
    pub home: LocationId,
    /// Item names that must all be present at `home` to win.
    pub required_items: Vec<String>,
    /// Item name that triggers the secret ending when dropped at `home`.
    #[serde(default)]
    pub secret_item: Option<String>,
}

/// Location definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDef {
    pub id: LocationId,
    pub name: String,
    pub brief_description: String,
    pub long_description: String,
    #[serde(default)]
    pub commands: BTreeMap<String, CommandDef>,
    /// Names of items initially placed here.
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub key_id: Option<ItemId>,
}

/// What a location command does when chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandDef {
    /// Walk to another location.
    MoveTo(LocationId),
    /// Perform a local action on the named item or feature.
    Action(String),
}

/// Item catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    #[serde(default = "default_can_take")]
    pub can_take: bool,
    pub target_position: LocationId,
    #[serde(default)]
    pub target_points: u32,
}

fn default_can_take() -> bool {
    true
}
