//! `log-exercise` subcommand

use chrono::{DateTime, Utc};
use clap::Args;
use tracing::info;

use crate::catalog;
use crate::engine;
use crate::models::ExerciseEntry;
use crate::store::AppState;

use super::{resolve_date, CommandResult};

#[derive(Debug, Args)]
pub struct LogExerciseArgs {
    /// Catalog exercise key (e.g. `running_6mph`) or a free-text name
    pub exercise: String,

    /// Duration in minutes
    #[arg(long)]
    pub duration: f64,

    /// Entry date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Override the computed calorie burn
    #[arg(long)]
    pub calories: Option<f64>,
}

pub fn run(args: &LogExerciseArgs, state: &mut AppState, now: DateTime<Utc>) -> CommandResult {
    let date = resolve_date(args.date.as_deref(), now)?;
    let weight_kg = state.profile.weight_kg();

    // Catalog keys resolve to a display name and a MET-based burn; anything
    // else is logged as free text with zero calories unless overridden.
    let (name, computed) = match catalog::get_exercise(&args.exercise) {
        Some(profile) => (
            profile.name.to_string(),
            engine::calories_burned(&args.exercise, args.duration, weight_kg),
        ),
        None => (args.exercise.clone(), 0.0),
    };
    let calories = args.calories.unwrap_or(computed);

    let entry = ExerciseEntry::new(state.next_id(now), date, name, args.duration, calories);
    info!(
        exercise = %entry.exercise,
        calories = entry.calories_burned,
        "Logged exercise session"
    );
    println!(
        "Logged {} for {} minutes ({} calories burned) on {}",
        entry.exercise,
        crate::report::fmt_amount(entry.duration),
        crate::report::fmt_amount(entry.calories_burned),
        entry.date
    );
    state.exercises.push(entry);
    Ok(true)
}
