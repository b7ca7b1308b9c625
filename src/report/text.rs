//! Plain-text summary serializer
//!
//! Condensed daily-average block plus most-recent entries, suited to pasting
//! into free-text consumers.

use std::fmt::Write;

use super::fmt_amount;
use super::model::ReportModel;
use crate::models::Nutrient;

/// Micronutrients highlighted in the plain-text summary
const HIGHLIGHTED_MICROS: [Nutrient; 5] = [
    Nutrient::VitaminC,
    Nutrient::VitaminD,
    Nutrient::Calcium,
    Nutrient::Iron,
    Nutrient::Potassium,
];

/// Render the condensed plain-text summary
pub fn render(model: &ReportModel) -> String {
    let mut text = String::new();

    text.push_str("NUTRITION & HEALTH DATA SUMMARY\n");
    let _ = writeln!(text, "Export Date: {}", model.export_date);
    let _ = writeln!(text, "Total Days: {}\n", model.total_days);

    text.push_str("DAILY AVERAGES:\n");
    let _ = writeln!(text, "Calories: {}", fmt_amount(model.averages.get(Nutrient::Calories)));
    let _ = writeln!(text, "Protein: {}g", fmt_amount(model.averages.get(Nutrient::Protein)));
    let _ = writeln!(text, "Carbs: {}g", fmt_amount(model.averages.get(Nutrient::Carbs)));
    let _ = writeln!(text, "Fat: {}g", fmt_amount(model.averages.get(Nutrient::Fat)));
    let _ = writeln!(text, "Fiber: {}g\n", fmt_amount(model.averages.get(Nutrient::Fiber)));

    text.push_str("MICRONUTRIENTS (Daily Average):\n");
    for nutrient in HIGHLIGHTED_MICROS {
        let average = model.averages.get(nutrient);
        let percentage = crate::engine::percentage_of_target(nutrient, average);
        let _ = writeln!(
            text,
            "{}: {} ({}% of target)",
            nutrient.display_name(),
            fmt_amount(average),
            percentage
        );
    }

    text.push_str("\nRECENT FOOD ENTRIES:\n");
    for line in &model.recent_entries {
        let _ = writeln!(
            text,
            "{}: {} - {} cal",
            line.meal.as_str(),
            line.food,
            fmt_amount(line.calories)
        );
    }

    if !model.exercise_rows.is_empty() {
        text.push_str("\nRECENT EXERCISE:\n");
        // Plain text keeps the tail of the exercise log, capped at ten
        let start = model.exercise_rows.len().saturating_sub(10);
        for row in &model.exercise_rows[start..] {
            let _ = writeln!(
                text,
                "{}: {} min - {} cal",
                row.name,
                fmt_amount(row.duration),
                fmt_amount(row.calories_burned)
            );
        }
    }

    text
}
