//! Energy expenditure estimates
//!
//! Mifflin-St Jeor resting energy, activity-adjusted total daily energy,
//! goal-adjusted calorie targets, and MET-based exercise burn.

use crate::catalog;
use crate::models::{ActivityLevel, DietGoal, Sex};

/// Resting energy expenditure in kcal/day (Mifflin-St Jeor)
pub fn resting_energy(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Total daily energy expenditure in kcal/day
///
/// The activity level is an enum, so the multiplier lookup is total; unknown
/// levels are rejected when the level string is parsed.
pub fn total_daily_energy(resting: f64, activity: ActivityLevel) -> f64 {
    resting * activity.multiplier()
}

/// Daily calorie target adjusted for the dietary goal
pub fn target_calories(tdee: f64, goal: DietGoal) -> f64 {
    match goal {
        DietGoal::Lose => tdee - 500.0,
        DietGoal::Maintain => tdee,
        DietGoal::Gain => tdee + 500.0,
    }
}

/// Calories burned for an exercise session, rounded to the nearest kcal
///
/// MET formula: kcal = MET x mass(kg) x time(hours). An unrecognized
/// exercise key yields 0 so free-text exercise names never block logging.
pub fn calories_burned(exercise_key: &str, duration_minutes: f64, weight_kg: f64) -> f64 {
    match catalog::get_exercise(exercise_key) {
        Some(exercise) => (exercise.met * weight_kg * duration_minutes / 60.0).round(),
        None => 0.0,
    }
}
