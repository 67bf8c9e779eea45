//! Twisty Cube
//!
//! Renders a 3x3x3 twisty cube that can be turned layer by layer from the
//! keyboard or by clicking the handles around it. Turns queue up and play one
//! after another with a short animation each.

mod visualization;

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::info;

use cubeturn::grid::format_grid;
use cubeturn::input::KEY_BINDINGS;
use cubeturn::{parse_moves, RotationRequest, Session};

/// Interactive 3x3x3 twisty cube.
#[derive(Parser)]
#[command(name = "cubeturn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Length of one face-turn animation, in milliseconds.
    #[arg(long, global = true, default_value_t = 150)]
    duration_ms: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive 3D viewer.
    Play {
        /// Moves to queue at startup, e.g. "x+ y*' z-".
        moves: Vec<String>,
    },
    /// Apply moves without opening a window and print the resulting grid.
    Apply {
        /// Moves to apply, e.g. "x+ y*' z-".
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// List the keyboard bindings.
    Keys,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let duration = Duration::from_millis(cli.duration_ms);

    match cli.command {
        Some(Command::Play { moves }) => run_play(duration, &moves),
        Some(Command::Apply { moves }) => run_apply(duration, &moves),
        Some(Command::Keys) => {
            print_keys();
            ExitCode::SUCCESS
        }
        // default: open the viewer on a solved cube
        None => run_play(duration, &[]),
    }
}

/// Parses move arguments, reporting the first bad one on stderr.
fn parse_or_report(moves: &[String]) -> Option<Vec<RotationRequest>> {
    match parse_moves(moves) {
        Ok(requests) => Some(requests),
        Err(e) => {
            eprintln!("Invalid move: {}", e);
            None
        }
    }
}

/// Opens the viewer with `moves` already queued.
fn run_play(duration: Duration, moves: &[String]) -> ExitCode {
    let Some(requests) = parse_or_report(moves) else {
        return ExitCode::from(2);
    };

    let mut session = Session::with_duration(duration);
    for request in requests {
        session.enqueue(request);
    }
    info!("opening viewer with {} queued moves", session.pending());

    println!("Controls: 1-9 turn a layer (hold Alt to reverse), click a handle (right click to reverse)");
    visualization::display(session);
    ExitCode::SUCCESS
}

/// Plays `moves` to completion off-screen and prints the final layout.
fn run_apply(duration: Duration, moves: &[String]) -> ExitCode {
    let Some(requests) = parse_or_report(moves) else {
        return ExitCode::from(2);
    };

    let mut session = Session::with_duration(duration);
    for request in &requests {
        session.enqueue(*request);
    }
    let completed = session.run_until_idle(Duration::from_millis(16));
    info!("applied {} moves", completed);

    print!("{}", format_grid(session.grid()));
    ExitCode::SUCCESS
}

/// Prints the digit-key table.
fn print_keys() {
    for (key, request) in KEY_BINDINGS {
        println!("{}  {}  (Alt: {})", key, request, request.inverse());
    }
}
