//! Cherry Maze entry point
//!
//! Headless driver: runs the session on its fixed schedule and takes
//! commands from stdin (`start`, `reset`, `w`/`a`/`s`/`d`, `quit`).
//! Drawing is left to whatever front end consumes the snapshots.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;

use cherry_maze::sim::{Direction, GameEvent};
use cherry_maze::{Command, Session, Settings};

/// Lines read from stdin, parsed
enum Input {
    Command(Command),
    Quit,
}

fn parse_line(line: &str) -> Option<Input> {
    let word = line.trim();
    match word.to_lowercase().as_str() {
        "start" => Some(Input::Command(Command::Start)),
        "reset" | "restart" => Some(Input::Command(Command::Reset)),
        "quit" | "q" | "exit" => Some(Input::Quit),
        _ => Direction::from_key(word).map(|d| Input::Command(Command::Steer(d))),
    }
}

/// Forward stdin lines to the game loop. EOF counts as quit.
fn spawn_input_reader() -> Receiver<Input> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_line(&line) {
                Some(input) => {
                    if tx.send(input).is_err() {
                        return;
                    }
                }
                None if !line.trim().is_empty() => log::warn!("Unknown command: {}", line.trim()),
                None => {}
            }
        }
        let _ = tx.send(Input::Quit);
    });
    rx
}

/// Whether the last `ran` ticks, ending at `ticks`, passed a multiple of `every`
fn crossed_status_boundary(ticks: u64, ran: u32, every: u64) -> bool {
    if ran == 0 || every == 0 {
        return false;
    }
    let before = ticks.saturating_sub(u64::from(ran));
    before / every != ticks / every
}

fn main() {
    env_logger::init();

    let settings = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .map(|path| Settings::load(&path))
        .unwrap_or_default();

    let mut session = match Session::from_settings(&settings) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Cannot create session: {e}");
            std::process::exit(1);
        }
    };

    log::info!("Cherry Maze starting... type `start`, then steer with w/a/s/d");
    let inputs = spawn_input_reader();
    let mut last = Instant::now();

    'game: loop {
        // Commands are applied between ticks, never during one
        loop {
            match inputs.try_recv() {
                Ok(Input::Command(command)) => session.apply(command),
                Ok(Input::Quit) | Err(TryRecvError::Disconnected) => break 'game,
                Err(TryRecvError::Empty) => break,
            }
        }

        let now = Instant::now();
        let ran = session.advance(now - last);
        last = now;

        for event in session.drain_events() {
            match event {
                GameEvent::ScoreChanged { score } => log::info!("Score: {score}"),
                GameEvent::Caught { by } => log::info!("Caught by the {} ghost!", by.as_str()),
                other => log::debug!("{other:?}"),
            }
        }

        if crossed_status_boundary(session.state().time_ticks, ran, settings.status_every_ticks) {
            let snap = session.snapshot();
            log::info!(
                "tick {} player ({}, {}) score {}",
                snap.tick,
                snap.player.x,
                snap.player.y,
                snap.score
            );
        }

        thread::sleep(session.clock().until_next());
    }

    session.shutdown();
    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final snapshot: {e}"),
    }
}
