//! `turn::look` module
//!
//! Handlers that only report on the world: look, examine, inventory and map.
//! None of them cost a move.

use crate::item_search::{SearchError, SearchScope, find_item_match};
use crate::location::CommandTarget;
use crate::view::{CommandLine, ItemLine, MapExit, MapLine, View, ViewItem};
use crate::world::{GameWorld, WorldError};

use anyhow::Result;
use log::info;

/// Push the current location into the view and mark it visited.
///
/// With `full` the long description is always shown; otherwise the player sees
/// the long description on a first visit and the brief one afterwards.
///
/// # Errors
/// - if the player's location or a command destination is not in the world
pub fn describe_location(world: &mut GameWorld, view: &mut View, full: bool) -> Result<()> {
    let location = world.player_location()?;
    let description = if full {
        location.long_description.clone()
    } else {
        location.arrival_description().to_string()
    };
    view.push(ViewItem::LocationDescription {
        name: location.name.clone(),
        description,
    });

    if !location.items_present.is_empty() {
        view.push(ViewItem::LocationItems(location.items_present.iter().cloned().collect()));
    }

    let mut lines = Vec::new();
    for (command, target) in &location.commands {
        let line = match target {
            CommandTarget::MoveTo(id) => {
                let destination = world.lookup(*id)?;
                CommandLine {
                    command: command.clone(),
                    destination: Some(destination.name.clone()),
                    locked: destination.locked,
                    visited: destination.visited,
                }
            },
            CommandTarget::Action(_) => CommandLine {
                command: command.clone(),
                destination: None,
                locked: false,
                visited: false,
            },
        };
        lines.push(line);
    }
    view.push(ViewItem::LocationCommands(lines));

    world.player_location_mut()?.visited = true;
    Ok(())
}

/// Show the full description of the current location.
///
/// # Errors
/// - if the player's location is not in the world
pub fn look_handler(world: &mut GameWorld, view: &mut View) -> Result<()> {
    describe_location(world, view, true)?;
    info!("player looked around '{}'", world.player_location()?.name);
    Ok(())
}

/// Describe an item in the current location or the inventory.
///
/// # Errors
/// - if the player's location is not in the world
pub fn examine_handler(world: &mut GameWorld, view: &mut View, thing: &str) -> Result<()> {
    let scope = SearchScope::Nearby(world.player.location_id);
    match find_item_match(world, thing, scope) {
        Ok(name) => {
            let item = world
                .find_item_by_name(&name)
                .ok_or_else(|| WorldError::ItemNotFound(name.clone()))?;
            view.push(ViewItem::ItemDescription {
                name: item.name.clone(),
                description: item.description.clone(),
            });
        },
        Err(SearchError::NoMatchingName(input)) => {
            info!("nothing to examine matching '{input}'");
            view.push(ViewItem::ActionFailure(format!("There's no {input} here to examine.")));
        },
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// List what the player is carrying.
pub fn inv_handler(world: &GameWorld, view: &mut View) {
    let lines = world
        .player
        .inventory
        .iter()
        .map(|name| ItemLine {
            name: name.clone(),
            description: world
                .find_item_by_name(name)
                .map(|item| item.description.clone())
                .unwrap_or_default(),
        })
        .collect();
    view.push(ViewItem::Inventory(lines));
}

/// List visited locations and where their exits lead. Unvisited destinations stay unnamed.
///
/// # Errors
/// - if a command destination is not in the world
pub fn map_handler(world: &GameWorld, view: &mut View) -> Result<()> {
    let mut lines = Vec::new();
    for location in world.locations.values().filter(|location| location.visited) {
        let mut exits = Vec::new();
        for (command, to) in location.exits() {
            let destination = world.lookup(to)?;
            exits.push(MapExit {
                command: command.to_string(),
                destination: destination.visited.then(|| destination.name.clone()),
            });
        }
        lines.push(MapLine {
            name: location.name.clone(),
            here: location.id == world.player.location_id,
            exits,
        });
    }
    view.push(ViewItem::Map(lines));
    Ok(())
}
