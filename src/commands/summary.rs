//! `summary` subcommand

use chrono::{DateTime, Utc};
use clap::Args;

use crate::engine::{self, classify_status, percentage_of_target};
use crate::models::{Nutrient, Nutrients};
use crate::report::fmt_amount;
use crate::store::AppState;

use super::{resolve_date, CommandResult};

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Day to summarize (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

pub fn run(args: &SummaryArgs, state: &AppState, now: DateTime<Utc>) -> CommandResult {
    let date = resolve_date(args.date.as_deref(), now)?;
    let day_entries = engine::filter_by_date(&state.entries, &date);
    let totals: Nutrients = day_entries.iter().map(|e| e.nutrients.clone()).sum();

    println!("Summary for {}\n", date);

    if day_entries.is_empty() {
        println!("No food logged.");
    } else {
        for entry in &day_entries {
            println!(
                "  {:<10} {} ({} cal)",
                entry.meal.as_str(),
                entry.food,
                fmt_amount(entry.nutrients.get(Nutrient::Calories))
            );
        }
        println!();

        for nutrient in Nutrient::ALL {
            let amount = totals.get(nutrient);
            if nutrient.daily_value().is_none() && amount == 0.0 {
                continue;
            }
            if amount == 0.0 && !nutrient.is_macro() {
                continue;
            }
            let status = classify_status(nutrient, amount);
            match nutrient.daily_value() {
                Some(_) => println!(
                    "  {:<22} {:>8} {:<4} {:>4}%  {}",
                    nutrient.display_name(),
                    fmt_amount(amount),
                    nutrient.unit(),
                    percentage_of_target(nutrient, amount),
                    status.label()
                ),
                None => println!(
                    "  {:<22} {:>8} {}",
                    nutrient.display_name(),
                    fmt_amount(amount),
                    nutrient.unit()
                ),
            }
        }
    }

    let day_exercises: Vec<_> = state.exercises.iter().filter(|e| e.date == date).collect();
    if !day_exercises.is_empty() {
        println!("\nExercise:");
        for session in day_exercises {
            println!(
                "  {} for {} minutes ({} cal burned)",
                session.exercise,
                fmt_amount(session.duration),
                fmt_amount(session.calories_burned)
            );
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodEntry, MealType};
    use chrono::TimeZone;

    #[test]
    fn test_summary_is_read_only() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let mut state = AppState::default();
        state.entries.push(FoodEntry::custom(
            1,
            "2024-01-15".to_string(),
            MealType::Breakfast,
            "Eggs".to_string(),
            1.0,
            140.0,
            12.0,
            1.0,
            10.0,
        ));
        let args = SummaryArgs { date: None };
        assert_eq!(run(&args, &state, now).unwrap(), false);
        assert_eq!(state.entries.len(), 1);
    }
}
