mod common;

use common::{WIN_WALKTHROUGH, campus_world, shipped_data};
use deadline_engine::replay::{load_script, parse_trace};
use deadline_engine::{EndState, Simulation};
use std::io::Write;

#[test]
fn win_demo_trace() {
    let mut sim = Simulation::new(campus_world(30));
    sim.run(WIN_WALKTHROUGH).unwrap();
    assert_eq!(
        sim.id_log(),
        vec![1, 1, 2, 3, 4, 4, 3, 5, 5, 3, 4, 6, 6, 4, 3, 2, 1, 1, 1, 1]
    );
    assert_eq!(sim.report().end_state, EndState::Won);
}

#[test]
fn lose_demo_trace() {
    let mut commands = Vec::new();
    for _ in 0..11 {
        commands.extend(["go north", "go south"]);
    }
    let mut sim = Simulation::new(campus_world(20));
    sim.run(&commands).unwrap();

    let mut expected = vec![1];
    for _ in 0..10 {
        expected.extend([2, 1]);
    }
    assert_eq!(sim.id_log(), expected);
    assert_eq!(sim.report().end_state, EndState::LostByMoveLimit);
}

#[test]
fn inventory_demo_trace() {
    let mut sim = Simulation::new(campus_world(30));
    sim.run(["take t_card", "go north", "go east", "go north", "take usb_drive", "inventory"])
        .unwrap();
    assert_eq!(sim.id_log(), vec![1, 1, 2, 3, 4, 4, 4]);
    let last = sim.transcript().last().unwrap();
    assert!(last.starts_with("You are carrying:"));
    assert!(last.contains("usb_drive"));
}

#[test]
fn score_demo_trace() {
    let mut sim = Simulation::new(campus_world(30));
    sim.run([
        "take t_card",
        "score",
        "go north",
        "go east",
        "go south",
        "take laptop_charger",
        "score",
    ])
    .unwrap();
    assert_eq!(sim.id_log(), vec![1, 1, 1, 2, 3, 5, 5, 5]);
    assert_eq!(sim.report().score, 0);
    assert_eq!(sim.report().moves, 5);
}

#[test]
fn shorthand_script_replays_like_the_prompt() {
    let data = shipped_data();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# card first\nget card\nn\ne\nn\n\ntake usb\ni").unwrap();

    let commands = load_script(file.path()).unwrap();
    let mut sim = Simulation::with_verbs(data.build_world(30).unwrap(), data.config.verbs.clone());
    sim.run(&commands).unwrap();
    assert_eq!(sim.id_log(), parse_trace("1,1,2,3,4,4,4").unwrap());
}

#[test]
fn report_json_lists_the_trace() {
    let mut sim = Simulation::new(campus_world(30));
    sim.run(["go north", "quit"]).unwrap();
    let json: serde_json::Value = serde_json::to_value(sim.report()).unwrap();
    assert_eq!(json["visited_ids"], serde_json::json!([1, 2, 2]));
    assert_eq!(json["end_state"], "Quit");
    assert_eq!(json["moves"], 1);
}
