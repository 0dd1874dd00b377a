//! `turn::system` module
//!
//! Handlers for system-level commands (score, log, help, quit) and the ending summary.

use crate::rules::EndState;
use crate::view::{View, ViewItem};
use crate::world::GameWorld;

use log::{info, warn};

pub fn score_handler(world: &GameWorld, view: &mut View) {
    view.push(ViewItem::Score {
        score: world.player.score,
        max_score: world.max_score(),
        moves: world.player.moves,
        move_limit: world.player.move_limit,
    });
}

/// Show the event log so far.
pub fn log_handler(world: &GameWorld, view: &mut View) {
    view.push(ViewItem::EventLog(world.log.lines()));
}

pub fn help_handler(world: &GameWorld, view: &mut View) {
    if world.help.is_empty() {
        warn!("help requested but no help commands are loaded");
    }
    view.push(ViewItem::Help(world.help.clone()));
}

/// End the game at the player's request. Confirmation happens before this is called.
pub fn quit_handler(world: &mut GameWorld, view: &mut View) {
    info!("player quit");
    world.player.end(EndState::Quit);
    push_ending(world, view);
}

/// Feedback for input the resolver doesn't understand. Costs nothing.
pub fn unknown_handler(view: &mut View, input: &str) {
    info!("unrecognized command '{input}'");
    view.push(ViewItem::Error(format!("You performed an unrecognized action: '{input}'")));
}

/// Push the ending summary for the player's current (terminal) status.
pub fn push_ending(world: &GameWorld, view: &mut View) {
    view.push(ViewItem::Ending {
        ending: world.player.status,
        score: world.player.score,
        max_score: world.max_score(),
        moves: world.player.moves,
        move_limit: world.player.move_limit,
        visited: world.visited_count(),
        max_visited: world.locations.len(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::campus_world;

    #[test]
    fn score_reports_budget() {
        let mut world = campus_world(20);
        world.player.moves = 4;
        let mut view = View::new();
        score_handler(&world, &mut view);
        assert_eq!(
            view.items[0],
            ViewItem::Score {
                score: 0,
                max_score: 100,
                moves: 4,
                move_limit: 20
            }
        );
    }

    #[test]
    fn quit_is_terminal_and_summarized() {
        let mut world = campus_world(20);
        let mut view = View::new();
        quit_handler(&mut world, &mut view);
        assert_eq!(world.player.status, EndState::Quit);
        assert!(view.items[0].is_ending());
    }

    #[test]
    fn help_lists_loaded_commands() {
        let world = campus_world(20);
        let mut view = View::new();
        help_handler(&world, &mut view);
        let Some(ViewItem::Help(commands)) = view.items.first() else {
            panic!("expected help");
        };
        assert!(commands.iter().any(|c| c.command == "look"));
    }

    #[test]
    fn log_handler_shows_opening_event() {
        let world = campus_world(20);
        let mut view = View::new();
        log_handler(&world, &mut view);
        let Some(ViewItem::EventLog(lines)) = view.items.first() else {
            panic!("expected log");
        };
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].next_command, None);
    }
}
