//! The `play` command: title screen, game loop, terminal screens.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use rw_game::{Phase, Session};

use crate::screen;

pub fn run(world_path: Option<&Path>, delay_ms: u64) -> Result<(), String> {
    let world = super::load_world(world_path)?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    screen::title(&world);
    wait_for_start(&mut reader)?;

    let mut session = Session::new(world);
    loop {
        screen::separator();
        screen::room_view(&session);
        println!("\nWhat would you like to do?");
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let line = read_line(&mut reader)?.ok_or_else(|| "input stream closed".to_string())?;

        session.process(&line);
        if delay_ms > 0 {
            thread::sleep(Duration::from_millis(delay_ms));
        }

        match session.phase() {
            Phase::Playing => {
                println!("\n{}", session.status());
            }
            Phase::Dead { cause } => {
                screen::death(cause);
                // Wait for acknowledgment; end of input counts as one.
                let _ = read_line(&mut reader);
                return Ok(());
            }
            Phase::Quit => {
                println!("\n{}", session.status());
                return Ok(());
            }
        }
    }
}

/// Block until the player types `start`. Anything else re-prompts.
fn wait_for_start(reader: &mut impl BufRead) -> Result<(), String> {
    loop {
        let line = read_line(reader)?.ok_or_else(|| "input stream closed".to_string())?;
        if line.trim().eq_ignore_ascii_case("start") {
            return Ok(());
        }
        println!("Please type 'start' to play.");
    }
}

/// Read one line of input. `Ok(None)` is end of input.
fn read_line(reader: &mut impl BufRead) -> Result<Option<String>, String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line)),
        Err(e) => Err(e.to_string()),
    }
}
