//! CLI frontend for The Eleventh Beast.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "beast",
    about = "The Eleventh Beast: hunt a horror through the streets of 1746 London",
    version,
    propagate_version = true
)]
struct Cli {
    /// Print engine diagnostics (dice, phases, beast movement) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the eight locations and the roads between them
    Map,

    /// Play an interactive game on the terminal
    Play {
        /// RNG seed (default: taken from the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Name of the Beast
        #[arg(long)]
        beast: Option<String>,

        /// Name of the Inquisitor
        #[arg(long)]
        inquisitor: Option<String>,

        /// Rumor table file, one `<ward|weapon>: <note>` per line
        #[arg(short, long)]
        rumors: Option<PathBuf>,
    },

    /// Let a simple policy play a game unattended
    Simulate {
        /// RNG seed for a reproducible game
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Stop after this many days if the game has not ended
        #[arg(short, long, default_value = "60")]
        days: u32,

        /// Print the final game view as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Also write the final game view as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rumor table file, one `<ward|weapon>: <note>` per line
        #[arg(short, long)]
        rumors: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Map => commands::map::run(),
        Commands::Play {
            seed,
            beast,
            inquisitor,
            rumors,
        } => commands::play::run(commands::config(seed, beast, inquisitor), rumors.as_deref()),
        Commands::Simulate {
            seed,
            days,
            json,
            output,
            rumors,
        } => commands::simulate::run(seed, days, json, output.as_deref(), rumors.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
