//! `turn::movement` module
//!
//! Contains the handler for commands that change player location

use crate::item::ItemHolder;
use crate::turn::look::describe_location;
use crate::view::{View, ViewItem};
use crate::world::GameWorld;

use anyhow::{Context, Result};
use deadline_data::LocationId;
use log::info;

/// Move the player along a location command, unlocking the destination first if the
/// player carries its key. A locked door the player can't open still costs the move.
///
/// # Errors
/// - if the destination id is not in the world
pub fn move_to_handler(
    world: &mut GameWorld,
    view: &mut View,
    command: &str,
    destination_id: LocationId,
) -> Result<()> {
    world.player.consume_move();
    let (locked, key_id, dest_name) = {
        let destination = world
            .lookup(destination_id)
            .with_context(|| format!("resolving destination of '{command}'"))?;
        (destination.locked, destination.key_id.clone(), destination.name.clone())
    };

    if locked {
        let key = key_id
            .as_deref()
            .and_then(|id| world.item_by_id(id))
            .filter(|key| world.player.contains_item(&key.name))
            .map(|key| key.name.clone());
        let Some(key_name) = key else {
            info!("player denied entry to locked '{dest_name}' ({destination_id})");
            view.push(ViewItem::ActionFailure(format!(
                "{dest_name} is locked. You'll need the right key to get in."
            )));
            return Ok(());
        };
        world.lookup_mut(destination_id)?.locked = false;
        info!("'{dest_name}' ({destination_id}) unlocked with '{key_name}'");
        view.push(ViewItem::ActionSuccess(format!(
            "You unlock the way into {dest_name} with your {key_name}."
        )));
    }

    world.player.location_id = destination_id;
    info!("player moved to '{dest_name}' ({destination_id})");
    view.push(ViewItem::ActionSuccess(format!("You move to {dest_name}.")));
    describe_location(world, view, false)
}
