//! `turn::inventory` module
//!
//! Handlers that move items between the current location and the player.
//! Both always cost a move, successful or not.

use crate::item::ItemHolder;
use crate::item_search::{SearchError, SearchScope, find_item_match};
use crate::turn::system::push_ending;
use crate::view::{View, ViewItem};
use crate::world::{GameWorld, WorldError};

use anyhow::Result;
use log::info;

/// Names of the items in the current location that can be picked up.
pub fn takeable_here(world: &GameWorld) -> Vec<String> {
    world.player_location().map_or_else(
        |_| Vec::new(),
        |location| {
            location
                .items_present
                .iter()
                .filter(|name| world.find_item_by_name(name).is_some_and(|item| item.can_take))
                .cloned()
                .collect()
        },
    )
}

/// Pick up an item from the current location.
///
/// A bare `take` (no name) takes the only takeable item present, and is denied
/// when there is nothing or more than one thing to take.
///
/// # Errors
/// - if the player's location is not in the world
pub fn take_handler(world: &mut GameWorld, view: &mut View, thing: Option<&str>) -> Result<()> {
    world.player.consume_move();
    let location_id = world.player.location_id;

    let name = if let Some(thing) = thing {
        match find_item_match(world, thing, SearchScope::Location(location_id)) {
            Ok(name) => name,
            Err(SearchError::NoMatchingName(input)) => {
                info!("take failed: no '{input}' in location {location_id}");
                view.push(ViewItem::ActionFailure(format!("There's nothing here by the name '{input}'.")));
                return Ok(());
            },
            Err(err) => return Err(err.into()),
        }
    } else {
        let candidates = takeable_here(world);
        match candidates.as_slice() {
            [] => {
                view.push(ViewItem::ActionFailure("There's nothing here you can take.".to_string()));
                return Ok(());
            },
            [only] => only.clone(),
            several => {
                view.push(ViewItem::ActionFailure(format!(
                    "Take what? You could take: {}.",
                    several.join(", ")
                )));
                return Ok(());
            },
        }
    };

    let can_take = world
        .find_item_by_name(&name)
        .ok_or_else(|| WorldError::ItemNotFound(name.clone()))?
        .can_take;
    if !can_take {
        info!("take denied: '{name}' is fixed in place");
        view.push(ViewItem::ActionFailure(format!("You cannot take {name}.")));
        return Ok(());
    }

    world.player_location_mut()?.remove_item(&name);
    world.player.add_item(&name);
    info!("player took '{name}' from location {location_id}");
    view.push(ViewItem::ActionSuccess(format!("You picked up the {name}.")));
    Ok(())
}

/// Put down a carried item. Dropping it at its target location pays out its points,
/// after which the delivery endings are checked.
///
/// # Errors
/// - if the player's location is not in the world
pub fn drop_handler(world: &mut GameWorld, view: &mut View, thing: &str) -> Result<()> {
    world.player.consume_move();

    let name = match find_item_match(world, thing, SearchScope::Inventory) {
        Ok(name) => name,
        Err(SearchError::NoMatchingName(input)) => {
            info!("drop failed: '{input}' not in inventory");
            view.push(ViewItem::ActionFailure(format!("You aren't carrying any {input}.")));
            return Ok(());
        },
        Err(err) => return Err(err.into()),
    };

    let location_id = world.player.location_id;
    world.player.remove_item(&name);
    world.player_location_mut()?.add_item(&name);
    info!("player dropped '{name}' in location {location_id}");
    view.push(ViewItem::ActionSuccess(format!("You dropped the {name}.")));

    let item = world
        .find_item_by_name(&name)
        .ok_or_else(|| WorldError::ItemNotFound(name.clone()))?;
    if item.scores_at(location_id) && item.target_points > 0 {
        let points = item.target_points;
        world.player.award_points(points);
        info!("delivered '{name}' for {points} points (score {})", world.player.score);
        view.push(ViewItem::PointsAwarded {
            amount: points,
            reason: format!("Delivered the {name}"),
            total: world.player.score,
        });
    }

    if let Some(ending) = world.rules.evaluate_delivery(world) {
        world.player.end(ending);
        push_ending(world, view);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::EndState;
    use crate::test_support::campus_world;
    use crate::world::ItemPlace;

    #[test]
    fn take_moves_item_to_inventory() {
        let mut world = campus_world(30);
        let mut view = View::new();
        take_handler(&mut world, &mut view, Some("card")).unwrap();
        assert_eq!(world.locate_item("t_card"), ItemPlace::Inventory);
        assert_eq!(world.player.moves, 1);
        assert_eq!(view.messages(), vec!["You picked up the t_card."]);
    }

    #[test]
    fn take_missing_item_still_costs_a_move() {
        let mut world = campus_world(30);
        let mut view = View::new();
        take_handler(&mut world, &mut view, Some("lucky_mug")).unwrap();
        assert_eq!(world.locate_item("lucky_mug"), ItemPlace::Location(6));
        assert_eq!(world.player.moves, 1);
        assert!(view.items[0].is_action_failure());
    }

    #[test]
    fn scenery_cannot_be_taken() {
        let mut world = campus_world(30);
        world.player.location_id = 5;
        let mut view = View::new();
        take_handler(&mut world, &mut view, Some("whiteboard")).unwrap();
        assert_eq!(world.locate_item("whiteboard"), ItemPlace::Location(5));
        assert_eq!(view.messages(), vec!["You cannot take whiteboard."]);
    }

    #[test]
    fn bare_take_needs_a_single_candidate() {
        let mut world = campus_world(30);
        let mut view = View::new();
        take_handler(&mut world, &mut view, None).unwrap();
        assert_eq!(world.locate_item("t_card"), ItemPlace::Inventory);

        world.player.location_id = 5;
        take_handler(&mut world, &mut view, None).unwrap();
        assert!(view.messages()[1].starts_with("Take what?"));
        assert_eq!(world.locate_item("laptop_charger"), ItemPlace::Location(5));
        assert_eq!(world.player.moves, 2);
    }

    #[test]
    fn drop_at_target_awards_points_every_time() {
        let mut world = campus_world(30);
        world.lookup_mut(4).unwrap().remove_item("usb_drive");
        world.player.add_item("usb_drive");
        let mut view = View::new();
        drop_handler(&mut world, &mut view, "usb").unwrap();
        assert_eq!(world.player.score, 30);
        take_handler(&mut world, &mut view, Some("usb")).unwrap();
        drop_handler(&mut world, &mut view, "usb").unwrap();
        assert_eq!(world.player.score, 60);
    }

    #[test]
    fn drop_elsewhere_awards_nothing() {
        let mut world = campus_world(30);
        world.player.location_id = 2;
        world.lookup_mut(4).unwrap().remove_item("usb_drive");
        world.player.add_item("usb_drive");
        let mut view = View::new();
        drop_handler(&mut world, &mut view, "usb_drive").unwrap();
        assert_eq!(world.player.score, 0);
        assert_eq!(world.locate_item("usb_drive"), ItemPlace::Location(2));
    }

    #[test]
    fn drop_of_uncarried_item_fails() {
        let mut world = campus_world(30);
        let mut view = View::new();
        drop_handler(&mut world, &mut view, "mug").unwrap();
        assert_eq!(world.player.moves, 1);
        assert_eq!(view.messages(), vec!["You aren't carrying any mug."]);
    }

    #[test]
    fn final_delivery_wins() {
        let mut world = campus_world(30);
        for (from, name) in [(4, "usb_drive"), (5, "laptop_charger"), (6, "lucky_mug")] {
            world.lookup_mut(from).unwrap().remove_item(name);
            world.player.add_item(name);
        }
        let mut view = View::new();
        drop_handler(&mut world, &mut view, "usb_drive").unwrap();
        drop_handler(&mut world, &mut view, "laptop_charger").unwrap();
        assert!(world.player.ongoing());
        drop_handler(&mut world, &mut view, "lucky_mug").unwrap();
        assert_eq!(world.player.status, EndState::Won);
        assert_eq!(world.player.score, 100);
    }
}
