//! `turn::action` module
//!
//! Dispatch for keys of the current location's command table.

use crate::location::CommandTarget;
use crate::turn::inventory::{drop_handler, take_handler};
use crate::turn::look::examine_handler;
use crate::turn::movement::move_to_handler;
use crate::turn::system::unknown_handler;
use crate::view::{View, ViewItem};
use crate::world::GameWorld;

use anyhow::Result;
use log::info;

/// Run a location command: movement for `MoveTo` targets, a local action otherwise.
///
/// # Errors
/// - if the player's location or the command's destination is not in the world
pub fn mapped_handler(world: &mut GameWorld, view: &mut View, key: &str) -> Result<()> {
    let Some(target) = world.player_location()?.target(key).cloned() else {
        unknown_handler(view, key);
        return Ok(());
    };
    match target {
        CommandTarget::MoveTo(destination_id) => move_to_handler(world, view, key, destination_id),
        CommandTarget::Action(action) => action_handler(world, view, key, &action),
    }
}

/// Perform a local action. `take`, `drop` and `examine` keys are routed through the
/// regular handlers, so they keep their move and scoring rules.
///
/// # Errors
/// - if the player's location is not in the world
pub fn action_handler(world: &mut GameWorld, view: &mut View, key: &str, action: &str) -> Result<()> {
    if let Some(thing) = key.strip_prefix("take ") {
        return take_handler(world, view, Some(thing));
    }
    if let Some(thing) = key.strip_prefix("drop ") {
        return drop_handler(world, view, thing);
    }
    if let Some(thing) = key.strip_prefix("examine ") {
        return examine_handler(world, view, thing);
    }
    world.player.consume_move();
    info!("player performed action '{action}' via '{key}'");
    let message = match key.strip_prefix("use ") {
        Some(thing) => format!("You used the {thing}."),
        None => format!("You performed the action: {key}"),
    };
    view.push(ViewItem::ActionSuccess(message));
    Ok(())
}
