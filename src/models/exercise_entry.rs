//! Exercise entry model
//!
//! One logged activity session with a derived calorie burn.

use serde::{Deserialize, Serialize};

/// A logged exercise session
///
/// `calories_burned` is derived at creation (MET-based) and never edited
/// independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    pub id: i64,
    pub date: String,
    pub exercise: String,
    pub duration: f64, // minutes
    pub calories_burned: f64,
}

impl ExerciseEntry {
    pub fn new(id: i64, date: String, exercise: String, duration: f64, calories_burned: f64) -> Self {
        Self {
            id,
            date,
            exercise,
            duration,
            calories_burned,
        }
    }
}
