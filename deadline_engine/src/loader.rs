//! Loader utilities for building a `GameWorld` from serialized data.
//!
//! World content is loaded from `world.ron` (RON), while difficulty, shorthand
//! and help metadata are TOML-backed in `game.toml`.

pub mod config;
pub mod worlddef;

use crate::loader::config::{GameConfig, load_config};
use crate::loader::worlddef::{build_world_from_def, load_worlddef};
use crate::world::GameWorld;

use anyhow::{Context, Result, bail};
use deadline_data::WorldDef;
use log::info;
use std::path::Path;

/// Everything read from the data directory, before a difficulty has been chosen.
#[derive(Debug, Clone)]
pub struct GameData {
    pub worlddef: WorldDef,
    pub config: GameConfig,
}
impl GameData {
    /// Build a fresh world with the given move budget.
    ///
    /// # Errors
    /// - if the move budget is zero or the definition doesn't resolve
    pub fn build_world(&self, move_limit: u32) -> Result<GameWorld> {
        build_world_from_def(&self.worlddef, &self.config, move_limit).context("while building world from worlddef")
    }
}

/// Load and validate the world definition and game config from `data_dir`.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or failed validation. A
/// broken `game.toml` is not an error; defaults are used instead.
pub fn load_game_data(data_dir: &Path) -> Result<GameData> {
    let worlddef = load_worlddef(&data_dir.join("world.ron")).context("while loading worlddef from file")?;
    validate_worlddef(&worlddef)?;
    info!(
        "worlddef '{}' loaded: {} locations, {} items",
        worlddef.game.title,
        worlddef.locations.len(),
        worlddef.items.len()
    );
    let config = load_config(&data_dir.join("game.toml"));
    Ok(GameData { worlddef, config })
}

/// Validate a `WorldDef` and return a single aggregated error.
///
/// # Errors
/// - listing every validation problem found
pub fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = deadline_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::worlddef::parse_worlddef;

    #[test]
    fn shipped_data_loads_from_crate_data_dir() {
        let data = load_game_data(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))).unwrap();
        assert_eq!(data.config.default_difficulty, "normal");
        let world = data.build_world(30).unwrap();
        assert_eq!(world.title, "DEADLINE: A CAMPUS ERRAND");
    }

    #[test]
    fn validation_errors_are_aggregated() {
        let mut def = parse_worlddef(include_str!("../data/world.ron")).unwrap();
        def.game.start_location = 42;
        def.game.rules.home = 43;
        let err = validate_worlddef(&def).unwrap_err().to_string();
        assert!(err.starts_with("worlddef validation failed"));
        assert_eq!(err.lines().count(), 3);
    }

    #[test]
    fn missing_world_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_game_data(dir.path()).is_err());
    }
}
