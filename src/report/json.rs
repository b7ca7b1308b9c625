//! JSON export serializer
//!
//! The full input bundle plus a computed summary block, pretty-printed.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::engine::{count_distinct_days, daily_averages, sum_exercise, ExerciseTotals};
use crate::models::{Biometrics, ExerciseEntry, FoodEntry, Goals, Nutrients, UserProfile};

use super::{DateRange, ExportData};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    export_date: String,
    entries: &'a [FoodEntry],
    exercises: &'a [ExerciseEntry],
    biometrics: &'a Biometrics,
    goals: &'a Goals,
    profile: &'a UserProfile,
    date_range: &'a DateRange,
    summary: Summary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    total_days: usize,
    average_nutrition: Nutrients,
    total_exercise: ExerciseTotals,
}

/// Render the JSON bundle
pub fn render(data: &ExportData, now: DateTime<Utc>) -> Result<String, serde_json::Error> {
    let export = JsonExport {
        export_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        entries: data.entries,
        exercises: data.exercises,
        biometrics: data.biometrics,
        goals: data.goals,
        profile: data.profile,
        date_range: data.date_range,
        summary: Summary {
            total_days: count_distinct_days(data.entries),
            average_nutrition: daily_averages(data.entries),
            total_exercise: sum_exercise(data.exercises),
        },
    };
    serde_json::to_string_pretty(&export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use chrono::TimeZone;

    #[test]
    fn test_json_bundle_has_summary() {
        let entries = vec![FoodEntry::custom(
            1,
            "2024-01-01".to_string(),
            MealType::Breakfast,
            "Eggs".to_string(),
            1.0,
            140.0,
            12.0,
            1.0,
            10.0,
        )];
        let exercises = vec![ExerciseEntry::new(
            2,
            "2024-01-01".to_string(),
            "Running (6 mph)".to_string(),
            30.0,
            343.0,
        )];
        let biometrics = Biometrics::default();
        let goals = Goals::default();
        let profile = UserProfile::default();
        let range = DateRange::default();
        let data = ExportData {
            entries: &entries,
            exercises: &exercises,
            biometrics: &biometrics,
            goals: &goals,
            profile: &profile,
            date_range: &range,
        };
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();

        let json = render(&data, now).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["exportDate"], "2024-01-15T10:00:00.000Z");
        assert_eq!(value["summary"]["totalDays"], 1);
        assert_eq!(value["summary"]["averageNutrition"]["calories"], 140.0);
        assert_eq!(value["summary"]["totalExercise"]["sessions"], 1);
        assert_eq!(value["summary"]["totalExercise"]["totalMinutes"], 30.0);
        assert_eq!(value["summary"]["totalExercise"]["totalCalories"], 343.0);
        assert_eq!(value["entries"][0]["food"], "Eggs");
        assert_eq!(value["profile"]["gender"], "male");

        // Byte-identical under a fixed clock
        assert_eq!(json, render(&data, now).unwrap());
    }
}
