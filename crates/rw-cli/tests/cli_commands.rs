//! Integration tests for the `rw-cli` command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a small two-room world file and return its path.
fn lodge_world(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("lodge.json");
    fs::write(
        &path,
        r#"{
    "name": "The Lodge",
    "start": "Hall",
    "rooms": [
        {
            "name": "Hall",
            "exits": [ { "direction": "east", "to": "Study" } ],
            "items": [ { "name": "lamp", "description": "An oil lamp." } ]
        },
        {
            "name": "Study",
            "exits": [ { "direction": "west", "to": "Hall" } ],
            "items": []
        }
    ]
}
"#,
    )
    .unwrap();
    path
}

fn roomwander() -> Command {
    Command::cargo_bin("roomwander").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_gates_on_start_token() {
    roomwander()
        .arg("play")
        .write_stdin("nope\nstart\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Please type 'start' to play.")
                .and(predicate::str::contains("Thanks for playing!")),
        );
}

#[test]
fn play_shows_banner_and_room_view() {
    roomwander()
        .arg("play")
        .write_stdin("start\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("THE OLD HOUSE")
                .and(predicate::str::contains("You are in Room 1F."))
                .and(predicate::str::contains("You see: painting, apple"))
                .and(predicate::str::contains("Exits: east, south"))
                .and(predicate::str::contains("Inventory: (empty)")),
        );
}

#[test]
fn play_take_and_eat() {
    roomwander()
        .arg("play")
        .write_stdin("start\nlook painting\ntake apple\nuse apple\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("An old painting of a landscape.")
                .and(predicate::str::contains("apple added to inventory."))
                .and(predicate::str::contains("Inventory: apple"))
                .and(predicate::str::contains("You eat the apple. Delicious!")),
        );
}

#[test]
fn play_unrecognized_command_reports_and_continues() {
    roomwander()
        .arg("play")
        .write_stdin("start\ndance wildly\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Sorry, I do not understand.")
                .and(predicate::str::contains("Thanks for playing!")),
        );
}

#[test]
fn play_death_by_window() {
    // End of input stands in for the acknowledgment keypress.
    roomwander()
        .arg("play")
        .write_stdin("start\ngo south\ngo window\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("YOU DIED")
                .and(predicate::str::contains("You jumped through a deadly window!")),
        );
}

#[test]
fn play_input_stream_closing_is_abnormal() {
    roomwander()
        .arg("play")
        .write_stdin("start\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input stream closed"));
}

#[test]
fn play_custom_world_file() {
    let dir = TempDir::new().unwrap();
    let world = lodge_world(&dir);

    roomwander()
        .args(["play", "--world", world.to_str().unwrap()])
        .write_stdin("start\ngo east\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("THE LODGE").and(predicate::str::contains("You move to Study.")),
        );
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_valid_world() {
    let dir = TempDir::new().unwrap();
    let world = lodge_world(&dir);

    roomwander()
        .args(["check", world.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed for 'The Lodge'.")
                .and(predicate::str::contains("2 rooms")),
        );
}

#[test]
fn check_rejects_dangling_exit() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{
    "name": "Broken",
    "start": "Hall",
    "rooms": [
        {
            "name": "Hall",
            "exits": [ { "direction": "up", "to": "Roof" } ],
            "items": []
        }
    ]
}
"#,
    )
    .unwrap();

    roomwander()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown room \"Roof\""));
}

#[test]
fn check_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.json");
    fs::write(&path, "{ not json").unwrap();

    roomwander()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid world definition"));
}

#[test]
fn check_missing_file() {
    roomwander()
        .args(["check", "no-such-world.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// rooms
// ---------------------------------------------------------------------------

#[test]
fn rooms_lists_built_in_world() {
    roomwander()
        .arg("rooms")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Room 1F")
                .and(predicate::str::contains("Attic"))
                .and(predicate::str::contains("9 rooms, starting in Room 1F")),
        );
}

#[test]
fn rooms_custom_world() {
    let dir = TempDir::new().unwrap();
    let world = lodge_world(&dir);

    roomwander()
        .args(["rooms", "--world", world.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hall").and(predicate::str::contains("Study")));
}
