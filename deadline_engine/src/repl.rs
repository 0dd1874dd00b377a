//! REPL and interactive session handling.
//!
//! The game runs in a read-eval-print loop. Everything that needs to ask the
//! player something (difficulty, which item to take, quit confirmation) lives
//! here; the turn itself is resolved by [`crate::turn::take_turn`].

mod input;

use crate::command::{Command, SYSTEM_COMMANDS, is_valid_command, normalize_input, parse_command};
use crate::loader::GameData;
use crate::loader::config::{Difficulty, GameConfig};
use crate::style::GameStyle;
use crate::turn::{describe_location, take_turn, takeable_here};
use crate::view::{View, ViewItem};
use crate::world::GameWorld;

use anyhow::{Context, Result};
use colored::Colorize;
use log::{info, warn};
use std::collections::BTreeMap;

use input::{InputEvent, InputManager};

pub const INVALID_OPTION: &str = "That was an invalid option; try again.";

/// Run a whole interactive game: choose a difficulty, then loop until the game ends.
///
/// `difficulty` preselects a level by name; otherwise the player is asked.
///
/// # Errors
/// - if the world can't be built, or a turn hits inconsistent world data
pub fn run_repl(data: &GameData, difficulty: Option<&str>) -> Result<()> {
    let mut input_manager = InputManager::new();
    let mut view = View::new();

    let level = match difficulty.and_then(|name| data.config.difficulty(name)) {
        Some(level) => level.clone(),
        None => choose_difficulty(&mut input_manager, &data.config)?,
    };
    info!("difficulty '{}' selected ({} moves)", level.name, level.move_limit);

    let mut world = data.build_world(level.move_limit)?;
    view.push(ViewItem::EngineMessage(world.intro.clone()));
    view.push(ViewItem::EngineMessage(format!(
        "Difficulty: {} ({} moves).",
        level.name, level.move_limit
    )));
    describe_location(&mut world, &mut view, true)?;
    view.flush();

    game_loop(&mut world, &mut view, &mut input_manager, &data.config.verbs)
}

fn game_loop(
    world: &mut GameWorld,
    view: &mut View,
    input_manager: &mut InputManager,
    verbs: &BTreeMap<String, String>,
) -> Result<()> {
    while world.player.ongoing() {
        input_manager.set_completions(completion_terms(world));
        let prompt = format!(
            "\n[Moves left: {}/{}|Score: {}]>> ",
            world.player.moves_left(),
            world.player.move_limit,
            world.player.score
        )
        .prompt_style()
        .to_string();

        let raw = match read_event(input_manager, &prompt) {
            InputEvent::Line(line) => line,
            InputEvent::Eof => {
                take_turn(world, view, "quit")?;
                view.flush();
                break;
            },
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };

        let mut input = normalize_input(&raw, verbs);
        if input.is_empty() {
            continue;
        }
        if !is_valid_command(&input, world.player_location()?) {
            view.push(ViewItem::Error(INVALID_OPTION.to_string()));
            view.flush();
            continue;
        }

        let command = parse_command(&input, world.player_location()?);
        if command == Command::Take(None) {
            let candidates = takeable_here(world);
            if candidates.len() > 1 {
                let question = format!("Take what? ({})> ", candidates.join(", "));
                let answer = read_answer(input_manager, &question);
                match resolve_take_choice(world, &answer, &candidates) {
                    Some(name) => input = format!("take {name}"),
                    None => {
                        view.push(ViewItem::Error(INVALID_OPTION.to_string()));
                        view.flush();
                        continue;
                    },
                }
            }
        } else if command.is_quit() {
            let answer = read_answer(input_manager, "Are you sure you want to quit? (y/n)> ");
            if !is_confirmation(&answer) {
                view.push(ViewItem::EngineMessage("Back to it, then.".to_string()));
                view.flush();
                continue;
            }
        }

        take_turn(world, view, &input)?;
        view.flush();
    }
    Ok(())
}

/// Read one event, treating an unreadable input stream as end of input.
fn read_event(input_manager: &mut InputManager, prompt: &str) -> InputEvent {
    input_manager.read_line(prompt).unwrap_or_else(|err| {
        warn!("failed to read input ({err}); treating as end of input");
        InputEvent::Eof
    })
}

/// Read a one-off answer. End of input reads as "y" so a closed stream can still quit.
fn read_answer(input_manager: &mut InputManager, prompt: &str) -> String {
    match read_event(input_manager, &prompt.prompt_style().to_string()) {
        InputEvent::Line(line) => line.trim().to_lowercase(),
        InputEvent::Eof => "y".to_string(),
        InputEvent::Interrupted => String::new(),
    }
}

/// Ask the player to pick a difficulty until they give a usable answer.
///
/// # Errors
/// - if the config lists no difficulties at all
fn choose_difficulty(input_manager: &mut InputManager, config: &GameConfig) -> Result<Difficulty> {
    println!("{}", "Choose your difficulty:".bold().yellow());
    for (idx, level) in config.difficulties.iter().enumerate() {
        println!(
            "  {}. {} ({} moves) {}",
            idx + 1,
            level.name.command_style(),
            level.move_limit,
            level.description.italic()
        );
    }
    let default = config.default_level().context("no difficulty levels configured")?;
    loop {
        let prompt = format!("Difficulty [{}]> ", default.name);
        let answer = match read_event(input_manager, &prompt.prompt_style().to_string()) {
            InputEvent::Line(line) => line,
            InputEvent::Eof | InputEvent::Interrupted => String::new(),
        };
        if let Some(level) = parse_difficulty_choice(&answer, config) {
            return Ok(level.clone());
        }
        println!("{}", INVALID_OPTION.error_style());
    }
}

/// Interpret a difficulty answer: empty picks the default, otherwise a list number or a name.
pub fn parse_difficulty_choice<'a>(answer: &str, config: &'a GameConfig) -> Option<&'a Difficulty> {
    let answer = answer.trim();
    if answer.is_empty() {
        return config.default_level();
    }
    if let Ok(number) = answer.parse::<usize>() {
        return number.checked_sub(1).and_then(|idx| config.difficulties.get(idx));
    }
    config.difficulty(answer)
}

pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Match a "take what?" answer against the offered candidates, through the alias table.
pub fn resolve_take_choice(world: &GameWorld, answer: &str, candidates: &[String]) -> Option<String> {
    let answer = answer.strip_prefix("take ").unwrap_or(answer);
    world
        .resolve_item_name(answer)
        .map(|item| item.name.clone())
        .filter(|name| candidates.contains(name))
}

/// Tab-completion candidates for the current location.
fn completion_terms(world: &GameWorld) -> Vec<String> {
    let mut terms: Vec<String> = SYSTEM_COMMANDS.iter().map(|s| (*s).to_string()).collect();
    if let Ok(location) = world.player_location() {
        terms.extend(location.commands.keys().cloned());
        terms.extend(location.items_present.iter().map(|name| format!("take {name}")));
        terms.extend(location.items_present.iter().map(|name| format!("examine {name}")));
    }
    terms.extend(world.player.inventory.iter().map(|name| format!("drop {name}")));
    terms.extend(world.player.inventory.iter().map(|name| format!("examine {name}")));
    terms.sort_unstable();
    terms.dedup();
    terms
}
