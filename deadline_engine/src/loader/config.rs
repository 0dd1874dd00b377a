//! Game configuration: difficulty levels, shorthand tables and help text.
//!
//! Loaded from `game.toml`. A missing or unreadable file never stops the game;
//! the built-in defaults below are used instead.

use anyhow::{Context, Result, bail};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A selectable difficulty and the move budget it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub name: String,
    pub move_limit: u32,
    #[serde(default)]
    pub description: String,
}

/// Represents a single command in the help system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommand {
    pub command: String,
    pub description: String,
}

/// Complete configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub default_difficulty: String,
    #[serde(rename = "difficulty")]
    pub difficulties: Vec<Difficulty>,
    /// Item shorthand -> canonical item name.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    /// Input shorthand -> canonical command words.
    #[serde(default)]
    pub verbs: BTreeMap<String, String>,
    #[serde(default)]
    pub help: Vec<HelpCommand>,
}

impl GameConfig {
    /// Find a difficulty by name, ignoring case.
    pub fn difficulty(&self, name: &str) -> Option<&Difficulty> {
        self.difficulties.iter().find(|d| d.name.eq_ignore_ascii_case(name))
    }

    /// The configured default difficulty, or the first one listed if the default is unknown.
    pub fn default_level(&self) -> Option<&Difficulty> {
        self.difficulty(&self.default_difficulty)
            .or_else(|| self.difficulties.first())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_difficulty: "normal".to_string(),
            difficulties: default_difficulties(),
            aliases: pairs(&[
                ("card", "t_card"),
                ("tcard", "t_card"),
                ("usb", "usb_drive"),
                ("charger", "laptop_charger"),
                ("mug", "lucky_mug"),
                ("duck", "rubber_duck"),
            ]),
            verbs: pairs(&[
                ("n", "go north"),
                ("s", "go south"),
                ("e", "go east"),
                ("w", "go west"),
                ("i", "inventory"),
                ("x", "examine"),
                ("get", "take"),
                ("q", "quit"),
            ]),
            help: default_help(),
        }
    }
}

fn pairs(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn default_difficulties() -> Vec<Difficulty> {
    [("easy", 40, "Plenty of time."), ("normal", 30, "A few wrong turns allowed."), ("hard", 20, "No room for error.")]
        .into_iter()
        .map(|(name, move_limit, description)| Difficulty {
            name: name.to_string(),
            move_limit,
            description: description.to_string(),
        })
        .collect()
}

fn default_help() -> Vec<HelpCommand> {
    [
        ("look", "View the full description of the current location"),
        ("inventory", "Check what items you are carrying"),
        ("score", "Check your current score"),
        ("log", "View all events that have occurred"),
        ("quit", "Exit the game"),
        ("help", "Display this help message"),
    ]
    .into_iter()
    .map(|(command, description)| HelpCommand {
        command: command.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// Parse configuration text. Difficulties with a zero move budget are dropped.
///
/// # Errors
/// - if the text is not valid TOML for a `GameConfig`
/// - if no usable difficulty remains
pub fn parse_config(text: &str) -> Result<GameConfig> {
    let mut config: GameConfig = toml::from_str(text).context("parsing game config TOML")?;
    config.difficulties.retain(|d| {
        if d.move_limit == 0 {
            warn!("difficulty '{}' has a zero move limit and was ignored", d.name);
        }
        d.move_limit > 0
    });
    if config.difficulties.is_empty() {
        bail!("game config defines no usable difficulty levels");
    }
    Ok(config)
}

/// Loads the game configuration from a TOML file, falling back to defaults on error.
///
/// # Logging
/// - `info!` on successful load
/// - `warn!` if the file cannot be read or parsed (with fallback to defaults)
pub fn load_config(toml_path: &Path) -> GameConfig {
    match try_load_config(toml_path) {
        Ok(config) => {
            info!(
                "{} difficulty levels, {} aliases and {} verbs loaded from '{}'",
                config.difficulties.len(),
                config.aliases.len(),
                config.verbs.len(),
                toml_path.display()
            );
            config
        },
        Err(e) => {
            warn!(
                "Could not load game config from '{}': {e:#}. Using hardcoded defaults.",
                toml_path.display()
            );
            GameConfig::default()
        },
    }
}

fn try_load_config(toml_path: &Path) -> Result<GameConfig> {
    let text =
        fs::read_to_string(toml_path).with_context(|| format!("reading game config from '{}'", toml_path.display()))?;
    parse_config(&text).with_context(|| format!("loading '{}'", toml_path.display()))
}
