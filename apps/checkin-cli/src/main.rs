//! # checkin-cli
//!
//! Terminal frontend for Summit Check-In.
//!
//! A thin view adapter over `checkin-core`: it loads the goal
//! configuration, hydrates the store from the data directory, forwards
//! submit events, and renders what the store reports:
//! - `checkin check-in <name> <team>` — record an attendee
//! - `checkin status` — totals, per-team counts, progress bar
//! - `checkin roster` — attendee list, newest first

mod view;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use checkin_core::{CheckInConfig, CheckInStore, JsonFileStore, LogSink};

/// Summit Check-In — record attendees and track progress toward the goal.
#[derive(Parser)]
#[command(name = "checkin", version, about)]
struct Cli {
    /// Data directory holding the snapshot store, event log, and
    /// checkin.toml (defaults to .checkin).
    #[arg(long, default_value = ".checkin")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check in an attendee.
    CheckIn {
        /// Attendee name.
        name: String,
        /// Team code: water, zero, or power.
        team: String,
    },
    /// Show totals, per-team counts, and progress toward the goal.
    Status,
    /// List checked-in attendees, newest first.
    Roster,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = CheckInConfig::load_or_default(&cli.data_dir.join("checkin.toml"));
    let backend = JsonFileStore::new(&cli.data_dir)?;
    let mut store = CheckInStore::new(Box::new(backend), config.goal());
    store.add_sink(Box::new(LogSink::new(cli.data_dir.join("events.jsonl"))));
    store.hydrate();
    tracing::debug!(total = store.state().total, "store hydrated");

    match cli.command {
        Commands::CheckIn { name, team } => check_in(&mut store, &name, &team),
        Commands::Status => {
            view::render_status(&store);
            Ok(())
        }
        Commands::Roster => {
            view::render_roster(store.state());
            Ok(())
        }
    }
}

fn check_in(store: &mut CheckInStore, name: &str, team: &str) -> Result<()> {
    match store.apply_check_in(name, team) {
        Ok(record) => {
            view::render_greeting(&record.name);
            view::render_status(store);
            Ok(())
        }
        Err(err) => anyhow::bail!("{}", view::hint_for(err)),
    }
}
