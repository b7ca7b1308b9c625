//! `log-food` subcommand

use chrono::{DateTime, Utc};
use clap::Args;
use tracing::info;

use crate::catalog;
use crate::models::{FoodEntry, MealType};
use crate::store::AppState;

use super::{resolve_date, CommandError, CommandResult};

#[derive(Debug, Args)]
pub struct LogFoodArgs {
    /// Catalog food key, e.g. `chicken_breast` (omit when using --custom)
    #[arg(required_unless_present = "custom")]
    pub food: Option<String>,

    /// Log a custom food by name instead of a catalog key
    #[arg(long, conflicts_with = "food")]
    pub custom: Option<String>,

    /// Meal: breakfast, lunch, dinner, or snacks
    #[arg(long)]
    pub meal: String,

    /// Number of servings
    #[arg(long, default_value_t = 1.0)]
    pub quantity: f64,

    /// Entry date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Calories per serving (custom foods)
    #[arg(long, default_value_t = 0.0)]
    pub calories: f64,

    /// Protein grams per serving (custom foods)
    #[arg(long, default_value_t = 0.0)]
    pub protein: f64,

    /// Carb grams per serving (custom foods)
    #[arg(long, default_value_t = 0.0)]
    pub carbs: f64,

    /// Fat grams per serving (custom foods)
    #[arg(long, default_value_t = 0.0)]
    pub fat: f64,
}

pub fn run(args: &LogFoodArgs, state: &mut AppState, now: DateTime<Utc>) -> CommandResult {
    let meal = MealType::from_str(&args.meal)
        .ok_or_else(|| CommandError::UnknownMeal(args.meal.clone()))?;
    let date = resolve_date(args.date.as_deref(), now)?;
    let id = state.next_id(now);

    let entry = match (&args.food, &args.custom) {
        (Some(key), _) => {
            let food = catalog::get_food(key)
                .ok_or_else(|| CommandError::UnknownFood(key.clone()))?;
            FoodEntry::new(
                id,
                date,
                meal,
                food.name.to_string(),
                args.quantity,
                &food.per_serving,
            )
        }
        (None, Some(name)) => FoodEntry::custom(
            id,
            date,
            meal,
            name.clone(),
            args.quantity,
            args.calories,
            args.protein,
            args.carbs,
            args.fat,
        ),
        (None, None) => {
            return Err(CommandError::UnknownFood(String::new()));
        }
    };

    info!(food = %entry.food, meal = %meal.as_str(), "Logged food entry");
    println!(
        "Logged {} x{} for {} on {}",
        entry.food,
        args.quantity,
        meal.display_name(),
        entry.date
    );
    state.entries.push(entry);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn args(food: Option<&str>, custom: Option<&str>, meal: &str) -> LogFoodArgs {
        LogFoodArgs {
            food: food.map(str::to_string),
            custom: custom.map(str::to_string),
            meal: meal.to_string(),
            quantity: 1.0,
            date: Some("2024-01-01".to_string()),
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
        }
    }

    #[test]
    fn test_log_catalog_food() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut state = AppState::default();
        let changed = run(&args(Some("eggs"), None, "breakfast"), &mut state, now).unwrap();
        assert!(changed);
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].food, "Large Egg (1 whole)");
    }

    #[test]
    fn test_unknown_food_key_is_rejected() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut state = AppState::default();
        let result = run(&args(Some("pizza"), None, "dinner"), &mut state, now);
        assert!(matches!(result, Err(CommandError::UnknownFood(_))));
        assert!(state.entries.is_empty());
    }

    #[test]
    fn test_unknown_meal_is_rejected() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut state = AppState::default();
        let result = run(&args(Some("eggs"), None, "brunch"), &mut state, now);
        assert!(matches!(result, Err(CommandError::UnknownMeal(_))));
    }

    #[test]
    fn test_log_custom_food() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut state = AppState::default();
        let mut a = args(None, Some("Protein Shake"), "snacks");
        a.calories = 220.0;
        a.protein = 30.0;
        run(&a, &mut state, now).unwrap();
        assert_eq!(state.entries[0].food, "Protein Shake");
        assert_eq!(
            state.entries[0].nutrients.get(crate::models::Nutrient::Protein),
            30.0
        );
    }
}
