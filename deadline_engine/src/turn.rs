//! Turn resolution.
//!
//! [`resolve_turn`] interprets one parsed command against the world. [`take_turn`]
//! wraps it with everything the driver does around a turn: parsing, the move
//! limit checks before and after, and recording the event. The REPL and the
//! replay driver both go through `take_turn`, so a scripted game and a typed
//! one cannot drift apart.

pub mod action;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;

pub use action::*;
pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::rules::{EndState, move_limit_reached};
use crate::view::{View, ViewItem};
use crate::world::GameWorld;

use anyhow::Result;
use log::info;

/// What a single turn did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub end_state: EndState,
    pub move_consumed: bool,
}

/// Apply one command to the world, pushing its feedback into `view`.
///
/// Each handler consumes its own move where the command costs one. A game that
/// has already ended rejects every command and is left untouched.
///
/// # Errors
/// - only if the world data is inconsistent (a lookup by id fails)
pub fn resolve_turn(world: &mut GameWorld, view: &mut View, command: &Command) -> Result<TurnOutcome> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    if !world.player.ongoing() {
        game_over_handler(world, view);
        return Ok(TurnOutcome {
            end_state: world.player.status,
            move_consumed: false,
        });
    }

    let moves_before = world.player.moves;
    match command {
        Look => look_handler(world, view)?,
        Inventory => inv_handler(world, view),
        Score => score_handler(world, view),
        Log => log_handler(world, view),
        Map => map_handler(world, view)?,
        Help => help_handler(world, view),
        Quit => quit_handler(world, view),
        Take(thing) => take_handler(world, view, thing.as_deref())?,
        Drop(thing) => drop_handler(world, view, thing)?,
        Examine(thing) => examine_handler(world, view, thing)?,
        Mapped(key) => mapped_handler(world, view, key)?,
        Unknown(input) => unknown_handler(view, input),
    }

    Ok(TurnOutcome {
        end_state: world.player.status,
        move_consumed: world.player.moves > moves_before,
    })
}

/// Run one full turn for a canonical input string.
///
/// The move limit is checked before the command (an exhausted budget ends the
/// game without processing it) and again after a turn that left the game going,
/// so the loss is reported on the turn that spent the last move. Every processed
/// turn appends exactly one event to the log.
///
/// # Errors
/// - only if the world data is inconsistent (a lookup by id fails)
pub fn take_turn(world: &mut GameWorld, view: &mut View, input: &str) -> Result<TurnOutcome> {
    if !world.player.ongoing() {
        game_over_handler(world, view);
        return Ok(TurnOutcome {
            end_state: world.player.status,
            move_consumed: false,
        });
    }
    if move_limit_reached(&world.player) {
        end_by_move_limit(world, view);
        return Ok(TurnOutcome {
            end_state: world.player.status,
            move_consumed: false,
        });
    }

    let command = parse_command(input, world.player_location()?);
    info!("turn {}: '{input}' parsed as {command:?}", world.log.len());
    let outcome = resolve_turn(world, view, &command)?;

    let description = match view.last_location_description() {
        Some(text) => text.to_string(),
        None => world.player_location()?.brief_description.clone(),
    };
    world.log.append(world.player.location_id, description, Some(input));

    if world.player.ongoing() && move_limit_reached(&world.player) {
        end_by_move_limit(world, view);
    }

    Ok(TurnOutcome {
        end_state: world.player.status,
        ..outcome
    })
}

fn end_by_move_limit(world: &mut GameWorld, view: &mut View) {
    info!(
        "move limit reached ({}/{}), game lost",
        world.player.moves, world.player.move_limit
    );
    world.player.end(EndState::LostByMoveLimit);
    push_ending(world, view);
}

fn game_over_handler(world: &GameWorld, view: &mut View) {
    info!("command rejected: game already ended ({:?})", world.player.status);
    view.push(ViewItem::EngineMessage(
        "The game is over. No further commands are accepted.".to_string(),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::campus_world;

    #[test]
    fn info_turn_costs_nothing_but_is_logged() {
        let mut world = campus_world(30);
        let mut view = View::new();
        let outcome = take_turn(&mut world, &mut view, "inventory").unwrap();
        assert!(!outcome.move_consumed);
        assert_eq!(outcome.end_state, EndState::Continuing);
        assert_eq!(world.log.visited_ids(), vec![1, 1]);
    }

    #[test]
    fn movement_turn_is_logged_with_arrival_description() {
        let mut world = campus_world(30);
        let mut view = View::new();
        let outcome = take_turn(&mut world, &mut view, "go north").unwrap();
        assert!(outcome.move_consumed);
        let last = world.log.last().unwrap();
        assert_eq!(last.location_id, 2);
        assert_eq!(last.command.as_deref(), Some("go north"));
        assert_eq!(last.description, world.lookup(2).unwrap().long_description);
    }

    #[test]
    fn exhausted_budget_ends_before_processing() {
        let mut world = campus_world(30);
        world.player.moves = 30;
        let mut view = View::new();
        let outcome = take_turn(&mut world, &mut view, "go north").unwrap();
        assert_eq!(outcome.end_state, EndState::LostByMoveLimit);
        assert_eq!(world.player.location_id, 1);
        assert_eq!(world.log.len(), 1);
    }

    #[test]
    fn last_move_reports_loss_on_same_turn() {
        let mut world = campus_world(1);
        let mut view = View::new();
        let outcome = take_turn(&mut world, &mut view, "go north").unwrap();
        assert_eq!(outcome.end_state, EndState::LostByMoveLimit);
        assert_eq!(world.player.location_id, 2);
        assert!(view.items.iter().any(ViewItem::is_ending));
    }

    #[test]
    fn finished_game_rejects_commands() {
        let mut world = campus_world(30);
        let mut view = View::new();
        take_turn(&mut world, &mut view, "quit").unwrap();
        let events = world.log.len();
        let outcome = take_turn(&mut world, &mut view, "go north").unwrap();
        assert_eq!(outcome.end_state, EndState::Quit);
        assert!(!outcome.move_consumed);
        assert_eq!(world.player.location_id, 1);
        assert_eq!(world.log.len(), events);
    }

    #[test]
    fn unknown_command_is_a_free_no_op() {
        let mut world = campus_world(30);
        let mut view = View::new();
        let outcome = resolve_turn(&mut world, &mut view, &Command::Unknown("dance".into())).unwrap();
        assert!(!outcome.move_consumed);
        assert!(view.messages()[0].contains("unrecognized"));
    }
}
