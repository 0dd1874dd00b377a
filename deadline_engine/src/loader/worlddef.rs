//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use deadline_data::WorldDef;
use log::info;

use crate::item::Item;
use crate::loader::config::GameConfig;
use crate::location::Location;
use crate::player::Player;
use crate::rules::WinRules;
use crate::world::GameWorld;

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - on file IO error or RON parsing error
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    parse_worlddef(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Parse `WorldDef` RON text.
///
/// # Errors
/// - if the text is not a valid `WorldDef`
pub fn parse_worlddef(text: &str) -> Result<WorldDef> {
    Ok(ron::from_str(text)?)
}

/// Convert a validated `WorldDef` into a ready-to-play `GameWorld`.
///
/// Item names in location lists and rules are rewritten to the catalog's
/// spelling. The start location is marked visited and seeds the event log.
///
/// # Errors
/// - if `move_limit` is zero
/// - if a name or id in the definition doesn't resolve (an unvalidated `WorldDef`)
pub fn build_world_from_def(def: &WorldDef, config: &GameConfig, move_limit: u32) -> Result<GameWorld> {
    if move_limit == 0 {
        bail!("move limit must be positive");
    }
    let mut world = GameWorld::new_empty();
    world.title.clone_from(&def.game.title);
    world.intro.clone_from(&def.game.intro);

    for item_def in &def.items {
        let item = Item::from(item_def);
        world.items.insert(item.id.clone(), item);
    }

    for location_def in &def.locations {
        let mut location = Location::from_def(location_def);
        location.items_present = location_def
            .items
            .iter()
            .map(|name| canonical_item_name(&world, name))
            .collect::<Result<BTreeSet<_>>>()
            .with_context(|| format!("placing items in location {}", location_def.id))?;
        world.locations.insert(location.id, location);
    }

    let rules = &def.game.rules;
    world.rules = WinRules {
        home: rules.home,
        required_items: rules
            .required_items
            .iter()
            .map(|name| canonical_item_name(&world, name))
            .collect::<Result<_>>()
            .context("resolving required items")?,
        secret_item: rules
            .secret_item
            .as_deref()
            .map(|name| canonical_item_name(&world, name))
            .transpose()
            .context("resolving secret item")?,
    };

    world.aliases = config.aliases.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    world.help.clone_from(&config.help);

    let start = def.game.start_location;
    world.player = Player::new(start, move_limit);
    let start_location = world.lookup_mut(start).context("placing player at start location")?;
    start_location.visited = true;
    let opening = start_location.long_description.clone();
    world.log.append(start, opening, None);

    info!("{} locations added to GameWorld", world.locations.len());
    info!("{} items added to GameWorld", world.items.len());
    info!("player starts at location {start} with {move_limit} moves");
    Ok(world)
}

fn canonical_item_name(world: &GameWorld, name: &str) -> Result<String> {
    world
        .find_item_by_name(name)
        .map(|item| item.name.clone())
        .with_context(|| format!("unknown item '{name}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemHolder;

    const WORLD: &str = include_str!("../../data/world.ron");

    fn build(move_limit: u32) -> Result<GameWorld> {
        let def = parse_worlddef(WORLD)?;
        build_world_from_def(&def, &GameConfig::default(), move_limit)
    }

    #[test]
    fn shipped_world_builds() {
        let world = build(30).unwrap();
        assert_eq!(world.locations.len(), 6);
        assert_eq!(world.items.len(), 6);
        assert_eq!(world.player.location_id, 1);
        assert_eq!(world.player.move_limit, 30);
        assert!(world.lookup(4).unwrap().locked);
    }

    #[test]
    fn start_location_seeds_log_and_is_visited() {
        let world = build(30).unwrap();
        assert!(world.lookup(1).unwrap().visited);
        assert_eq!(world.visited_count(), 1);
        assert_eq!(world.log.visited_ids(), vec![1]);
        assert_eq!(world.log.last().and_then(|e| e.command.clone()), None);
    }

    #[test]
    fn names_are_canonicalized() {
        let mut def = parse_worlddef(WORLD).unwrap();
        def.locations[0].items = vec!["T_CARD".into()];
        def.game.rules.secret_item = Some("Rubber_Duck".into());
        let world = build_world_from_def(&def, &GameConfig::default(), 30).unwrap();
        assert!(world.lookup(1).unwrap().contains_item("t_card"));
        assert_eq!(world.rules.secret_item.as_deref(), Some("rubber_duck"));
    }

    #[test]
    fn zero_move_limit_is_rejected() {
        assert!(build(0).is_err());
    }

    #[test]
    fn unknown_placed_item_is_an_error() {
        let mut def = parse_worlddef(WORLD).unwrap();
        def.locations[0].items.push("stapler".into());
        assert!(build_world_from_def(&def, &GameConfig::default(), 30).is_err());
    }

    #[test]
    fn config_aliases_reach_the_world() {
        let world = build(30).unwrap();
        assert_eq!(world.aliases.canonical("mug"), "lucky_mug");
        assert!(!world.help.is_empty());
    }
}
