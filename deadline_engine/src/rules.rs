//! Win/loss evaluation.
//!
//! Everything here is a read-only predicate over the world. The turn resolver
//! decides when to ask; these functions only answer.

use crate::item::ItemHolder;
use crate::player::Player;
use crate::world::GameWorld;

use deadline_data::LocationId;
use serde::Serialize;
use std::collections::BTreeSet;
use variantly::Variantly;

/// How the game stands after a turn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Variantly)]
pub enum EndState {
    #[default]
    Continuing,
    Won,
    LostByMoveLimit,
    SecretEnding,
    /// The player chose to leave.
    Quit,
}
impl EndState {
    pub fn is_terminal(self) -> bool {
        self != EndState::Continuing
    }
}

/// Delivery rules for a world: the home location and the items that matter there.
#[derive(Debug, Clone, Default)]
pub struct WinRules {
    pub home: LocationId,
    pub required_items: BTreeSet<String>,
    pub secret_item: Option<String>,
}
impl WinRules {
    /// True iff every required item is lying at the home location.
    pub fn is_won(&self, world: &GameWorld) -> bool {
        world
            .lookup(self.home)
            .is_ok_and(|home| self.required_items.iter().all(|name| home.contains_item(name)))
    }

    /// True iff the sentinel item is lying at the home location.
    pub fn is_secret_ending(&self, world: &GameWorld) -> bool {
        match &self.secret_item {
            Some(name) => world.lookup(self.home).is_ok_and(|home| home.contains_item(name)),
            None => false,
        }
    }

    /// The ending a delivery produces, if any. The secret ending preempts the normal win.
    pub fn evaluate_delivery(&self, world: &GameWorld) -> Option<EndState> {
        if self.is_secret_ending(world) {
            Some(EndState::SecretEnding)
        } else if self.is_won(world) {
            Some(EndState::Won)
        } else {
            None
        }
    }
}

/// True once the player has spent every move in the budget.
pub fn move_limit_reached(player: &Player) -> bool {
    player.moves >= player.move_limit
}
