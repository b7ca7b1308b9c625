//! Aggregation engine and derived metrics
//!
//! Pure calculation layer: everything here is a synchronous function over
//! in-memory snapshots, with no I/O and no clock access.

pub mod aggregate;
pub mod energy;

pub use aggregate::{
    classify_status, count_distinct_days, daily_averages, filter_by_date, group_by_date,
    percentage_of_target, sum_exercise, sum_nutrients, ExerciseTotals, NutrientStatus,
};
pub use energy::{calories_burned, resting_energy, target_calories, total_daily_energy};
