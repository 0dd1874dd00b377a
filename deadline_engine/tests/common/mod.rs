#![allow(dead_code)]

use deadline_engine::loader::{GameData, load_game_data};
use deadline_engine::view::View;
use deadline_engine::{GameWorld, take_turn};
use std::path::Path;

pub const WIN_WALKTHROUGH: [&str; 19] = [
    "take t_card",
    "go north",
    "go east",
    "go north",
    "take usb_drive",
    "go south",
    "go south",
    "take laptop_charger",
    "go north",
    "go north",
    "go east",
    "take lucky_mug",
    "go west",
    "go south",
    "go west",
    "go south",
    "drop usb_drive",
    "drop laptop_charger",
    "drop lucky_mug",
];

pub fn shipped_data() -> GameData {
    load_game_data(&Path::new(env!("CARGO_MANIFEST_DIR")).join("data")).unwrap()
}

pub fn campus_world(move_limit: u32) -> GameWorld {
    shipped_data().build_world(move_limit).unwrap()
}

/// Play commands one turn at a time, collecting every message.
pub fn play(world: &mut GameWorld, commands: &[&str]) -> Vec<String> {
    let mut view = View::new();
    let mut messages = Vec::new();
    for command in commands {
        take_turn(world, &mut view, command).unwrap();
        messages.extend(view.messages());
        view.reset();
    }
    messages
}
