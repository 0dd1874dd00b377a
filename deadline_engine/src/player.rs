//! Player -- position, inventory, score and the move budget.
use crate::item::ItemHolder;
use crate::rules::EndState;

use deadline_data::LocationId;
use log::info;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct Player {
    pub location_id: LocationId,
    /// Names of carried items.
    pub inventory: BTreeSet<String>,
    pub score: u32,
    /// Turns that cost a move so far.
    pub moves: u32,
    /// Fixed at game start by the chosen difficulty.
    pub move_limit: u32,
    pub status: EndState,
}
impl Player {
    pub fn new(location_id: LocationId, move_limit: u32) -> Self {
        Self {
            location_id,
            inventory: BTreeSet::new(),
            score: 0,
            moves: 0,
            move_limit,
            status: EndState::Continuing,
        }
    }

    /// False once any ending has been reached.
    pub fn ongoing(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn moves_left(&self) -> u32 {
        self.move_limit.saturating_sub(self.moves)
    }

    pub fn consume_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }

    pub fn award_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Move into a terminal state. Terminal states are absorbing, so later calls are ignored.
    pub fn end(&mut self, ending: EndState) {
        if self.ongoing() {
            info!("game ended: {ending:?} (score {}, moves {})", self.score, self.moves);
            self.status = ending;
        }
    }
}
impl Default for Player {
    fn default() -> Player {
        Player::new(1, 1)
    }
}
impl ItemHolder for Player {
    fn add_item(&mut self, item_name: &str) {
        self.inventory.insert(item_name.to_string());
    }

    fn remove_item(&mut self, item_name: &str) -> bool {
        self.inventory.remove(item_name)
    }

    fn contains_item(&self, item_name: &str) -> bool {
        self.inventory.contains(item_name)
    }
}
