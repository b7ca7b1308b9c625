//! Command-line interface
//!
//! One module per subcommand. Each command takes the loaded [`AppState`] and
//! an injected clock, prints its output to stdout, and reports whether the
//! state changed so the caller knows to persist it.

pub mod export;
pub mod foods;
pub mod log_exercise;
pub mod log_food;
pub mod profile;
pub mod summary;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::models::InvalidConfiguration;
use crate::store::StoreError;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    InvalidConfiguration(#[from] InvalidConfiguration),

    #[error("unknown food '{0}' (run `macrotrack foods` to list the catalog)")]
    UnknownFood(String),

    #[error("unknown meal '{0}' (expected breakfast, lunch, dinner, or snacks)")]
    UnknownMeal(String),

    #[error("unknown export format '{0}' (expected markdown, text, csv, or json)")]
    UnknownFormat(String),

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
}

pub type CommandResult = Result<bool, CommandError>;

// ============================================================================
// CLI definition
// ============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "macrotrack",
    version,
    about = "Personal nutrition and exercise tracker"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log a food entry from the catalog or with custom macros
    LogFood(log_food::LogFoodArgs),

    /// Log an exercise session
    LogExercise(log_exercise::LogExerciseArgs),

    /// Search the reference food catalog
    Foods(foods::FoodsArgs),

    /// Show one day's nutrition totals against daily values
    Summary(summary::SummaryArgs),

    /// Show or update the user profile and energy targets
    Profile(profile::ProfileArgs),

    /// Export tracked data to a file
    Export(export::ExportArgs),
}

/// Validate a YYYY-MM-DD date argument, defaulting to the current day
pub(crate) fn resolve_date(
    date: Option<&str>,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<String, CommandError> {
    match date {
        Some(raw) => {
            chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| CommandError::InvalidDate(raw.to_string()))?;
            Ok(raw.to_string())
        }
        None => Ok(now.format("%Y-%m-%d").to_string()),
    }
}
