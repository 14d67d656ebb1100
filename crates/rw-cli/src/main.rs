//! CLI frontend for Roomwander, a tiny two-word text adventure.

mod commands;
mod screen;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "roomwander",
    about = "Roomwander — a two-word text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (the default when no subcommand is given)
    Play {
        /// World definition file (default: the built-in world)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Pause, in milliseconds, between resolving a command and showing
        /// its result
        #[arg(long, default_value = "0")]
        delay: u64,
    },

    /// Validate a world definition file
    Check {
        /// World definition file
        world: PathBuf,
    },

    /// List the rooms of a world
    Rooms {
        /// World definition file (default: the built-in world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Play { world, delay }) => commands::play::run(world.as_deref(), delay),
        Some(Commands::Check { world }) => commands::check::run(&world),
        Some(Commands::Rooms { world }) => commands::rooms::run(world.as_deref()),
        None => commands::play::run(None, 0),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
