//! Non-interactive replay.
//!
//! Feeds a scripted list of commands through the same turn function the REPL
//! uses and records the resulting trace of location ids.

use crate::command::{is_valid_command, normalize_input};
use crate::repl::INVALID_OPTION;
use crate::rules::EndState;
use crate::turn::take_turn;
use crate::view::View;
use crate::world::GameWorld;

use anyhow::{Context, Result};
use deadline_data::LocationId;
use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Summary of a finished replay, suitable for printing as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub visited_ids: Vec<LocationId>,
    pub end_state: EndState,
    pub score: u32,
    pub moves: u32,
    pub move_limit: u32,
}

/// A game driven by a command list instead of a player.
#[derive(Debug)]
pub struct Simulation {
    pub world: GameWorld,
    verbs: BTreeMap<String, String>,
    view: View,
    transcript: Vec<String>,
}
impl Simulation {
    pub fn new(world: GameWorld) -> Self {
        Self::with_verbs(world, BTreeMap::new())
    }

    /// A simulation that expands input shorthand the way the REPL does.
    pub fn with_verbs(world: GameWorld, verbs: BTreeMap<String, String>) -> Self {
        Self {
            world,
            verbs,
            view: View::new(),
            transcript: Vec::new(),
        }
    }

    /// Run commands in order, stopping early once the game ends.
    ///
    /// Commands rejected by the validation gate are noted in the transcript and
    /// skipped, as they would be at the prompt.
    ///
    /// # Errors
    /// - only if the world data is inconsistent
    pub fn run<I, S>(&mut self, commands: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in commands {
            if !self.world.player.ongoing() {
                info!("replay stopped: game ended ({:?})", self.world.player.status);
                break;
            }
            let input = normalize_input(raw.as_ref(), &self.verbs);
            if !is_valid_command(&input, self.world.player_location()?) {
                warn!("replay skipped invalid command '{input}'");
                self.transcript.push(INVALID_OPTION.to_string());
                continue;
            }
            take_turn(&mut self.world, &mut self.view, &input)?;
            self.transcript.extend(self.view.messages());
            self.view.reset();
        }
        Ok(())
    }

    /// Location ids in the order they were logged, starting with the opening location.
    pub fn id_log(&self) -> Vec<LocationId> {
        self.world.log.visited_ids()
    }

    /// Plain text of every message produced so far.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn report(&self) -> ReplayReport {
        ReplayReport {
            visited_ids: self.id_log(),
            end_state: self.world.player.status,
            score: self.world.player.score,
            moves: self.world.player.moves,
            move_limit: self.world.player.move_limit,
        }
    }
}

/// Split a script into commands: one per line, blank lines and `#` comments skipped.
pub fn parse_script(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load a replay script from a file.
///
/// # Errors
/// - on file IO error
pub fn load_script(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading replay script '{}'", path.display()))?;
    let commands = parse_script(&text);
    info!("{} commands loaded from '{}'", commands.len(), path.display());
    Ok(commands)
}

/// Parse an expected trace such as `1,2,3` or `1 2 3`.
///
/// # Errors
/// - if any entry is not a location id
pub fn parse_trace(text: &str) -> Result<Vec<LocationId>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<LocationId>()
                .with_context(|| format!("'{part}' is not a location id"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::campus_world;

    #[test]
    fn script_skips_comments_and_blank_lines() {
        let script = "# warm up\ntake t_card\n\n  go north  \n# done\n";
        assert_eq!(parse_script(script), vec!["take t_card", "go north"]);
    }

    #[test]
    fn trace_accepts_commas_and_spaces() {
        assert_eq!(parse_trace("1,2, 3 4").unwrap(), vec![1, 2, 3, 4]);
        assert!(parse_trace("1,two").is_err());
    }

    #[test]
    fn invalid_commands_are_skipped_without_logging() {
        let mut sim = Simulation::new(campus_world(30));
        sim.run(["dance", "go north"]).unwrap();
        assert_eq!(sim.id_log(), vec![1, 2]);
        assert_eq!(sim.transcript()[0], INVALID_OPTION);
    }

    #[test]
    fn replay_stops_after_the_game_ends() {
        let mut sim = Simulation::new(campus_world(30));
        sim.run(["quit", "go north"]).unwrap();
        assert_eq!(sim.id_log(), vec![1, 1]);
        assert_eq!(sim.report().end_state, EndState::Quit);
    }

    #[test]
    fn verbs_expand_like_the_prompt() {
        let verbs = [("n".to_string(), "go north".to_string())].into_iter().collect();
        let mut sim = Simulation::with_verbs(campus_world(30), verbs);
        sim.run(["N"]).unwrap();
        assert_eq!(sim.id_log(), vec![1, 2]);
    }

    #[test]
    fn report_serializes_to_json() {
        let sim = Simulation::new(campus_world(30));
        let json = serde_json::to_string(&sim.report()).unwrap();
        assert!(json.contains("\"visited_ids\":[1]"));
        assert!(json.contains("\"end_state\":\"Continuing\""));
    }
}
