//! `export` subcommand

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use tracing::info;

use crate::models::FoodEntry;
use crate::report::{self, DateRange, ExportData, ExportFormat};
use crate::store::AppState;

use super::{resolve_date, CommandError, CommandResult};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format: markdown, text, csv, or json
    #[arg(long, default_value = "markdown")]
    pub format: String,

    /// Output path (defaults to the standard filename in the current dir)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Only include entries on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Only include entries on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,
}

pub fn run(args: &ExportArgs, state: &AppState, now: DateTime<Utc>) -> CommandResult {
    let format = ExportFormat::from_str(&args.format)
        .ok_or_else(|| CommandError::UnknownFormat(args.format.clone()))?;

    // Validate range bounds up front; ISO dates compare lexicographically
    if let Some(start) = args.start.as_deref() {
        resolve_date(Some(start), now)?;
    }
    if let Some(end) = args.end.as_deref() {
        resolve_date(Some(end), now)?;
    }
    let in_range = |date: &str| {
        args.start.as_deref().map_or(true, |s| date >= s)
            && args.end.as_deref().map_or(true, |e| date <= e)
    };

    let entries: Vec<FoodEntry> = state
        .entries
        .iter()
        .filter(|e| in_range(&e.date))
        .cloned()
        .collect();
    let exercises: Vec<_> = state
        .exercises
        .iter()
        .filter(|e| in_range(&e.date))
        .cloned()
        .collect();
    let range = DateRange {
        start: args.start.clone(),
        end: args.end.clone(),
    };

    let data = ExportData {
        entries: &entries,
        exercises: &exercises,
        biometrics: &state.biometrics,
        goals: &state.goals,
        profile: &state.profile,
        date_range: &range,
    };
    let rendered = report::render(format, &data, now)?;

    let path = match &args.output {
        Some(path) => path.clone(),
        None => PathBuf::from(format.filename(&now.format("%Y-%m-%d").to_string())),
    };
    fs::write(&path, &rendered)?;

    info!(format = format.extension(), path = %path.display(), "Wrote export");
    println!(
        "Exported {} entries to {} ({})",
        entries.len(),
        path.display(),
        format.mime_type()
    );
    Ok(false)
}
