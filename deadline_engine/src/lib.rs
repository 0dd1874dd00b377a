#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const DEADLINE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod alias;
pub mod command;
pub mod data_paths;
pub mod event_log;
pub mod item;
pub mod item_search;
pub mod loader;
pub mod location;
pub mod player;
pub mod repl;
pub mod replay;
pub mod rules;
pub mod style;
pub mod turn;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use command::{Command, parse_command};
pub use event_log::EventLog;
pub use item::{Item, ItemHolder};
pub use loader::{GameData, load_game_data};
pub use location::Location;
pub use player::Player;
pub use repl::run_repl;
pub use replay::Simulation;
pub use rules::EndState;
pub use turn::{resolve_turn, take_turn};
pub use world::GameWorld;
