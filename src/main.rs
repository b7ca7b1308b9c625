//! Macro Tracker CLI
//!
//! Subcommand dispatch over the JSON-file store.

use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use macrotrack::build_info;
use macrotrack::commands::{self, Cli, Commands};
use macrotrack::store::Store;

/// Get the data file path from environment or use default
fn get_data_path() -> PathBuf {
    std::env::var("MACROTRACK_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            path.push("macrotrack.json");
            path
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging goes to stderr so command output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("macrotrack=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let data_path = get_data_path();
    let store = Store::new(&data_path);
    let mut state = store.load()?;
    let now = Utc::now();

    let changed = match &cli.command {
        Commands::LogFood(args) => commands::log_food::run(args, &mut state, now)?,
        Commands::LogExercise(args) => commands::log_exercise::run(args, &mut state, now)?,
        Commands::Foods(args) => commands::foods::run(args)?,
        Commands::Summary(args) => commands::summary::run(args, &state, now)?,
        Commands::Profile(args) => commands::profile::run(args, &mut state)?,
        Commands::Export(args) => commands::export::run(args, &state, now)?,
    };

    if changed {
        if let Err(err) = store.save(&mut state, now) {
            warn!("Failed to save {}: {}", data_path.display(), err);
            eprintln!("Warning: changes were not saved: {}", err);
        }
    }

    Ok(())
}
