//! Intermediate report model
//!
//! Builds the aggregated rows and sections the Markdown and plain-text
//! serializers consume, so the format writers stay free of calculation.

use chrono::{DateTime, NaiveDate, Utc};

use crate::engine::{count_distinct_days, daily_averages, sum_exercise, sum_nutrients, ExerciseTotals};
use crate::models::{FoodEntry, Goals, MealType, Nutrient, Nutrients};

use super::ExportData;

/// Most recent food entries included in the day-grouped log
const FOOD_LOG_LIMIT: usize = 50;
/// Most recent exercise entries included in the exercise log
const EXERCISE_LOG_LIMIT: usize = 20;

/// Three-way band for the averages-vs-targets table
///
/// Wider "good" band (75-120%) than the dashboard's four-tier status; the
/// two views are intentionally different.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetBand {
    Low,
    Good,
    High,
}

impl TargetBand {
    pub fn marker(&self) -> &'static str {
        match self {
            TargetBand::Low => "⚠️ Low",
            TargetBand::Good => "✅ Good",
            TargetBand::High => "⚠️ High",
        }
    }

    fn from_percentage(percentage: i64) -> Self {
        if percentage < 75 {
            TargetBand::Low
        } else if percentage > 120 {
            TargetBand::High
        } else {
            TargetBand::Good
        }
    }
}

/// One row of the averages-vs-targets table
#[derive(Debug, Clone)]
pub struct NutrientRow {
    pub nutrient: Nutrient,
    /// Daily average, rounded to a whole unit
    pub average: i64,
    pub target: f64,
    /// Percentage of target, rounded to a whole percent
    pub percentage: i64,
    pub band: TargetBand,
}

/// One line item in a meal group
#[derive(Debug, Clone)]
pub struct FoodLine {
    pub food: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Entries for one meal within a day
#[derive(Debug, Clone)]
pub struct MealGroup {
    pub meal: MealType,
    pub items: Vec<FoodLine>,
}

/// One tracked day in the food log, with macro totals
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub date: String,
    pub heading: String,
    pub total_calories: i64,
    pub total_protein: i64,
    pub total_carbs: i64,
    pub total_fat: i64,
    pub meals: Vec<MealGroup>,
}

/// One line of the exercise log
#[derive(Debug, Clone)]
pub struct ExerciseRow {
    pub date_label: String,
    pub name: String,
    pub duration: f64,
    pub calories_burned: f64,
}

/// Everything the Markdown and plain-text serializers need, precomputed
#[derive(Debug, Clone)]
pub struct ReportModel {
    pub export_date: String,
    pub range_start: String,
    pub range_end: String,
    pub total_days: usize,
    pub average_daily_calories: i64,
    pub total_sessions: usize,
    /// Most recent recorded weight in lbs, if any
    pub current_weight: Option<f64>,
    pub nutrient_rows: Vec<NutrientRow>,
    pub findings: Vec<String>,
    pub day_groups: Vec<DayGroup>,
    pub exercise_rows: Vec<ExerciseRow>,
    /// Recent entries shown in the plain-text format, oldest first
    pub recent_entries: Vec<FoodLineWithMeal>,
    pub averages: Nutrients,
    pub exercise_totals: ExerciseTotals,
    pub goal: String,
    pub activity_level: String,
    pub restrictions: Option<String>,
}

/// A recent-entry line for the plain-text format
#[derive(Debug, Clone)]
pub struct FoodLineWithMeal {
    pub meal: MealType,
    pub food: String,
    pub calories: f64,
}

/// Format a day key as a long date ("January 1, 2024")
///
/// Unparseable keys fall back to the raw string.
pub fn format_long(date_key: &str) -> String {
    match NaiveDate::parse_from_str(date_key, "%Y-%m-%d") {
        Ok(d) => d.format("%B %-d, %Y").to_string(),
        Err(_) => date_key.to_string(),
    }
}

/// Format a day key with the weekday ("Monday, January 1, 2024")
pub fn format_long_day(date_key: &str) -> String {
    match NaiveDate::parse_from_str(date_key, "%Y-%m-%d") {
        Ok(d) => d.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date_key.to_string(),
    }
}

impl ReportModel {
    /// Build the model from an export bundle and an injected clock
    pub fn build(data: &ExportData, now: DateTime<Utc>) -> Self {
        let totals = sum_nutrients(data.entries);
        let total_days = count_distinct_days(data.entries);
        let averages = daily_averages(data.entries);
        let exercise_totals = sum_exercise(data.exercises);

        let average_daily_calories =
            (totals.get(Nutrient::Calories) / total_days as f64).round() as i64;

        Self {
            export_date: now.date_naive().format("%B %-d, %Y").to_string(),
            range_start: data
                .date_range
                .start
                .as_deref()
                .map(format_long)
                .unwrap_or_else(|| "All time".to_string()),
            range_end: data
                .date_range
                .end
                .as_deref()
                .map(format_long)
                .unwrap_or_else(|| "Present".to_string()),
            total_days,
            average_daily_calories,
            total_sessions: data.exercises.len(),
            current_weight: data.biometrics.current_weight(),
            nutrient_rows: build_nutrient_rows(&averages),
            findings: build_findings(&totals, total_days),
            day_groups: build_day_groups(data.entries),
            exercise_rows: data
                .exercises
                .iter()
                .rev()
                .take(EXERCISE_LOG_LIMIT)
                .rev()
                .map(|e| ExerciseRow {
                    date_label: format_long(&e.date),
                    name: e.exercise.clone(),
                    duration: e.duration,
                    calories_burned: e.calories_burned,
                })
                .collect(),
            recent_entries: data
                .entries
                .iter()
                .rev()
                .take(20)
                .rev()
                .map(|e| FoodLineWithMeal {
                    meal: e.meal,
                    food: e.food.clone(),
                    calories: e.nutrients.get(Nutrient::Calories),
                })
                .collect(),
            averages,
            exercise_totals,
            goal: data.goals.goal.as_str().to_string(),
            activity_level: data.goals.activity_level.as_str().to_string(),
            restrictions: data.goals.restrictions.clone(),
        }
    }
}

/// Table rows for nutrients that have both a recorded amount and a target
fn build_nutrient_rows(averages: &Nutrients) -> Vec<NutrientRow> {
    let mut rows = Vec::new();
    for (nutrient, average) in averages.iter() {
        let Some(target) = nutrient.daily_value() else {
            continue;
        };
        let percentage = (average / target * 100.0).round() as i64;
        rows.push(NutrientRow {
            nutrient,
            average: average as i64,
            target,
            percentage,
            band: TargetBand::from_percentage(percentage),
        });
    }
    rows
}

/// Key findings over the daily averages
///
/// Thresholds: below 50% of target is flagged as a deficiency, above 150%
/// of a limit nutrient as an excess, 90-110% as well balanced.
fn build_findings(totals: &Nutrients, total_days: usize) -> Vec<String> {
    let mut findings = Vec::new();

    for (nutrient, total) in totals.iter() {
        let Some(target) = nutrient.daily_value() else {
            continue;
        };
        let average = total / total_days as f64;
        let percentage = average / target * 100.0;
        let rounded = percentage.round() as i64;

        if percentage < 50.0 {
            findings.push(format!(
                "⚠️ {} intake is significantly below recommended levels ({}% of target)",
                nutrient.display_name(),
                rounded
            ));
        } else if percentage > 150.0 && nutrient.is_limit() {
            findings.push(format!(
                "⚠️ {} intake is above recommended limits ({}% of limit)",
                nutrient.display_name(),
                rounded
            ));
        } else if (90.0..=110.0).contains(&percentage) {
            findings.push(format!(
                "✅ {} intake is well balanced ({}% of target)",
                nutrient.display_name(),
                rounded
            ));
        }
    }

    if findings.is_empty() {
        findings.push("Overall nutrition profile appears balanced based on tracked data".to_string());
    }

    findings
}

/// Day-grouped food log over the most recent entries
fn build_day_groups(entries: &[FoodEntry]) -> Vec<DayGroup> {
    let recent = &entries[entries.len().saturating_sub(FOOD_LOG_LIMIT)..];
    let grouped = crate::engine::group_by_date(recent);

    let mut day_groups = Vec::new();
    for (date, day_entries) in grouped {
        let day_totals: Nutrients = day_entries.iter().map(|e| e.nutrients.clone()).sum();

        let mut meals = Vec::new();
        for meal in MealType::ALL {
            let items: Vec<FoodLine> = day_entries
                .iter()
                .filter(|e| e.meal == meal)
                .map(|e| FoodLine {
                    food: e.food.clone(),
                    calories: e.nutrients.get(Nutrient::Calories),
                    protein: e.nutrients.get(Nutrient::Protein),
                    carbs: e.nutrients.get(Nutrient::Carbs),
                    fat: e.nutrients.get(Nutrient::Fat),
                })
                .collect();
            if !items.is_empty() {
                meals.push(MealGroup { meal, items });
            }
        }

        day_groups.push(DayGroup {
            date: date.to_string(),
            heading: format_long_day(date),
            total_calories: day_totals.get(Nutrient::Calories).round() as i64,
            total_protein: day_totals.get(Nutrient::Protein).round() as i64,
            total_carbs: day_totals.get(Nutrient::Carbs).round() as i64,
            total_fat: day_totals.get(Nutrient::Fat).round() as i64,
            meals,
        });
    }

    day_groups
}
