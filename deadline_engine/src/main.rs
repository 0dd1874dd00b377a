#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Deadline **
//! A campus errand against the clock.

use deadline_engine::data_paths::data_root;
use deadline_engine::replay::{Simulation, load_script, parse_trace};
use deadline_engine::style::GameStyle;
use deadline_engine::{GameData, load_game_data, run_repl};

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "DEADLINE: A CAMPUS ERRAND - a text adventure against the clock.")]
struct Cli {
    /// Difficulty level by name; asked interactively when omitted.
    #[arg(long, short)]
    difficulty: Option<String>,
    /// Directory holding `world.ron` and `game.toml`.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Run the commands in FILE instead of starting the interactive game.
    #[arg(long, value_name = "FILE")]
    replay: Option<PathBuf>,
    /// Expected location trace for `--replay`, e.g. `1,2,3`.
    #[arg(long, value_name = "IDS", requires = "replay")]
    expect: Option<String>,
    /// Print the replay report as JSON.
    #[arg(long, requires = "replay")]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let root = data_root(cli.data_dir.as_deref());
    info!("Start: loading game data from '{}'", root.display());
    let data = load_game_data(&root).context("while loading game data")?;
    info!("Game data loaded successfully.");

    match cli.replay.as_deref() {
        Some(script) => {
            let commands = load_script(script)?;
            run_replay(&data, &cli, &commands)
        },
        None => {
            println!("{:^84}", data.worlddef.game.title.bright_yellow().underline());
            run_repl(&data, cli.difficulty.as_deref())
        },
    }
}

fn run_replay(data: &GameData, cli: &Cli, commands: &[String]) -> Result<()> {
    let level = match cli.difficulty.as_deref() {
        Some(name) => data
            .config
            .difficulty(name)
            .with_context(|| format!("unknown difficulty '{name}'"))?,
        None => data.config.default_level().context("no difficulty levels configured")?,
    };
    let world = data.build_world(level.move_limit)?;
    let mut sim = Simulation::with_verbs(world, data.config.verbs.clone());
    sim.run(commands)?;
    let report = sim.report();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in sim.transcript() {
            println!("{line}");
        }
        let ids = report
            .visited_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        println!("\n{} {ids}", "Trace:".subheading_style());
        println!("{} {:?}", "Ending:".subheading_style(), report.end_state);
    }

    if let Some(expected) = cli.expect.as_deref() {
        let expected = parse_trace(expected)?;
        if expected != report.visited_ids {
            bail!("replay trace {:?} does not match expected {:?}", report.visited_ids, expected);
        }
        info!("replay trace matched expectation");
    }
    Ok(())
}
