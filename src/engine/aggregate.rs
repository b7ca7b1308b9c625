//! Nutrient aggregation
//!
//! Pure functions that sum nutrient amounts across logged entries, group
//! them by day, and classify amounts against recommended daily values.
//! Inputs are read-only snapshots; nothing here mutates state.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{ExerciseEntry, FoodEntry, Nutrient, Nutrients};

/// Sum nutrient amounts across all entries
///
/// Only nutrient fields participate; identifiers and other metadata are
/// excluded by construction. An empty slice sums to zero for every nutrient.
pub fn sum_nutrients(entries: &[FoodEntry]) -> Nutrients {
    entries.iter().map(|e| e.nutrients.clone()).sum()
}

/// Entries logged on the given calendar day
///
/// The date is an opaque `yyyy-MM-dd` key compared by exact equality; no
/// timezone normalization happens here.
pub fn filter_by_date<'a>(entries: &'a [FoodEntry], date: &str) -> Vec<&'a FoodEntry> {
    entries.iter().filter(|e| e.date == date).collect()
}

/// Group entries by calendar day, in day order
pub fn group_by_date(entries: &[FoodEntry]) -> BTreeMap<&str, Vec<&FoodEntry>> {
    let mut groups: BTreeMap<&str, Vec<&FoodEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.date.as_str()).or_default().push(entry);
    }
    groups
}

/// Number of distinct tracked days, never less than 1
///
/// The floor of 1 keeps per-day averages well-defined on an empty log.
pub fn count_distinct_days(entries: &[FoodEntry]) -> usize {
    let days: std::collections::BTreeSet<&str> =
        entries.iter().map(|e| e.date.as_str()).collect();
    days.len().max(1)
}

/// Per-nutrient daily averages, rounded to whole units
pub fn daily_averages(entries: &[FoodEntry]) -> Nutrients {
    let days = count_distinct_days(entries) as f64;
    sum_nutrients(entries).scale(1.0 / days).rounded_whole()
}

/// Percentage of the recommended daily value, rounded to a whole percent
///
/// Nutrients without a registered daily value report 0. Percentages are not
/// capped; display-layer capping is the caller's concern.
pub fn percentage_of_target(nutrient: Nutrient, amount: f64) -> i64 {
    match nutrient.daily_value() {
        Some(dv) => (amount / dv * 100.0).round() as i64,
        None => 0,
    }
}

/// Qualitative status of an amount relative to its daily value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientStatus {
    Low,
    Moderate,
    Good,
    High,
}

impl NutrientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NutrientStatus::Low => "low",
            NutrientStatus::Moderate => "moderate",
            NutrientStatus::Good => "good",
            NutrientStatus::High => "high",
        }
    }

    /// Fixed display color for this status
    pub fn color(&self) -> &'static str {
        match self {
            NutrientStatus::Low => "#ff6b6b",
            NutrientStatus::Moderate => "#ffd93d",
            NutrientStatus::Good => "#6bcf7f",
            NutrientStatus::High => "#4ecdc4",
        }
    }
}

/// Classify an amount against its daily value
///
/// Four fixed tiers on the unrounded percentage: below 25% low, below 75%
/// moderate, up to and including 100% good, above that high. The
/// classification is nutrient-agnostic: for ceiling nutrients (sodium,
/// saturated fat, cholesterol) callers must invert the reading themselves.
/// Nutrients with no registered daily value always classify low.
pub fn classify_status(nutrient: Nutrient, amount: f64) -> NutrientStatus {
    let percentage = match nutrient.daily_value() {
        Some(dv) => amount / dv * 100.0,
        None => 0.0,
    };
    if percentage < 25.0 {
        NutrientStatus::Low
    } else if percentage < 75.0 {
        NutrientStatus::Moderate
    } else if percentage <= 100.0 {
        NutrientStatus::Good
    } else {
        NutrientStatus::High
    }
}

/// Aggregate exercise totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTotals {
    pub sessions: usize,
    pub total_minutes: f64,
    pub total_calories: f64,
}

/// Sum session count, minutes, and calories burned across exercise entries
pub fn sum_exercise(entries: &[ExerciseEntry]) -> ExerciseTotals {
    entries.iter().fold(ExerciseTotals::default(), |mut acc, e| {
        acc.sessions += 1;
        acc.total_minutes += e.duration;
        acc.total_calories += e.calories_burned;
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    fn entry(id: i64, date: &str, calories: f64, protein: f64) -> FoodEntry {
        FoodEntry::custom(
            id,
            date.to_string(),
            MealType::Lunch,
            format!("food-{}", id),
            1.0,
            calories,
            protein,
            0.0,
            0.0,
        )
    }

    #[test]
    fn test_sum_matches_field_wise_totals() {
        let entries = vec![
            entry(1, "2024-01-01", 140.0, 12.0),
            entry(2, "2024-01-01", 216.0, 5.0),
            entry(3, "2024-01-02", 105.0, 4.0),
        ];
        let totals = sum_nutrients(&entries);
        assert_eq!(totals.get(Nutrient::Calories), 461.0);
        assert_eq!(totals.get(Nutrient::Protein), 21.0);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let totals = sum_nutrients(&[]);
        for nutrient in Nutrient::ALL {
            assert_eq!(totals.get(nutrient), 0.0);
        }
    }

    #[test]
    fn test_filter_by_date_is_exact() {
        let entries = vec![
            entry(1, "2024-01-01", 100.0, 0.0),
            entry(2, "2024-01-02", 100.0, 0.0),
        ];
        let day = filter_by_date(&entries, "2024-01-01");
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].id, 1);
        assert!(filter_by_date(&entries, "2024-01-03").is_empty());
    }

    #[test]
    fn test_count_distinct_days_floors_at_one() {
        assert_eq!(count_distinct_days(&[]), 1);

        let entries = vec![
            entry(1, "2024-01-01", 100.0, 0.0),
            entry(2, "2024-01-01", 100.0, 0.0),
            entry(3, "2024-01-02", 100.0, 0.0),
        ];
        assert_eq!(count_distinct_days(&entries), 2);
    }

    #[test]
    fn test_daily_averages_round_whole() {
        let entries = vec![
            entry(1, "2024-01-01", 100.0, 11.0),
            entry(2, "2024-01-02", 101.0, 10.0),
        ];
        let avg = daily_averages(&entries);
        assert_eq!(avg.get(Nutrient::Calories), 101.0); // 100.5 rounds up
        assert_eq!(avg.get(Nutrient::Protein), 11.0); // 10.5 rounds up
    }

    #[test]
    fn test_percentage_of_target() {
        // Protein DV is 50g
        assert_eq!(percentage_of_target(Nutrient::Protein, 25.0), 50);
        assert_eq!(percentage_of_target(Nutrient::Protein, 0.0), 0);
        // Uncapped
        assert_eq!(percentage_of_target(Nutrient::Protein, 100.0), 200);
        // No registered target
        assert_eq!(percentage_of_target(Nutrient::MonounsaturatedFat, 40.0), 0);
    }

    #[test]
    fn test_classification_boundaries() {
        // Protein DV is 50g, so 12.5g is exactly 25%
        assert_eq!(classify_status(Nutrient::Protein, 12.5), NutrientStatus::Moderate);
        assert_eq!(classify_status(Nutrient::Protein, 37.5), NutrientStatus::Good); // 75%
        assert_eq!(classify_status(Nutrient::Protein, 50.0), NutrientStatus::Good); // 100%
        // Unrounded comparison: 24.9% stays low, 100.1% is already high
        assert_eq!(classify_status(Nutrient::Protein, 12.45), NutrientStatus::Low);
        assert_eq!(classify_status(Nutrient::Protein, 50.05), NutrientStatus::High);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(NutrientStatus::Low.color(), "#ff6b6b");
        assert_eq!(NutrientStatus::Moderate.color(), "#ffd93d");
        assert_eq!(NutrientStatus::Good.color(), "#6bcf7f");
        assert_eq!(NutrientStatus::High.color(), "#4ecdc4");
    }

    #[test]
    fn test_sum_exercise_totals() {
        let entries = vec![
            ExerciseEntry::new(1, "2024-01-01".to_string(), "Yoga (general)".to_string(), 30.0, 102.0),
            ExerciseEntry::new(2, "2024-01-02".to_string(), "Running (6 mph)".to_string(), 20.0, 267.0),
        ];
        let totals = sum_exercise(&entries);
        assert_eq!(totals.sessions, 2);
        assert_eq!(totals.total_minutes, 50.0);
        assert_eq!(totals.total_calories, 369.0);

        assert_eq!(sum_exercise(&[]), ExerciseTotals::default());
    }
}
