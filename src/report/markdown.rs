//! Markdown report serializer

use std::fmt::Write;

use super::fmt_amount;
use super::model::ReportModel;

/// Fixed list of suggested analysis questions appended to every report
const ANALYSIS_QUESTIONS: [&str; 5] = [
    "Are there any nutrient deficiencies I should be concerned about?",
    "How can I optimize my nutrition for my health goals?",
    "What changes would you recommend to improve my diet quality?",
    "Are my portion sizes and meal timing appropriate?",
    "How does my exercise routine complement my nutrition?",
];

/// Render the full Markdown report
pub fn render(model: &ReportModel) -> String {
    let mut md = String::new();

    md.push_str("# Nutrition & Health Data Export\n\n");
    let _ = writeln!(md, "**Export Date:** {}", model.export_date);
    let _ = writeln!(
        md,
        "**Date Range:** {} - {}\n",
        model.range_start, model.range_end
    );

    // Summary section
    md.push_str("## Executive Summary\n\n");
    let _ = writeln!(md, "- **Total Days Tracked:** {}", model.total_days);
    let _ = writeln!(
        md,
        "- **Average Daily Calories:** {}",
        model.average_daily_calories
    );
    let _ = writeln!(md, "- **Total Exercise Sessions:** {}", model.total_sessions);
    let weight = model
        .current_weight
        .map(fmt_amount)
        .unwrap_or_else(|| "Not recorded".to_string());
    let _ = writeln!(md, "- **Current Weight:** {} lbs\n", weight);

    // Nutrition analysis
    md.push_str("## Nutrition Analysis\n\n");
    md.push_str("### Daily Averages vs Targets\n\n");
    md.push_str("| Nutrient | Average | Target | % of Target | Status |\n");
    md.push_str("|----------|---------|---------|-------------|--------|\n");
    for row in &model.nutrient_rows {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {}% | {} |",
            row.nutrient.display_name(),
            row.average,
            fmt_amount(row.target),
            row.percentage,
            row.band.marker()
        );
    }

    md.push_str("\n### Key Findings\n\n");
    for finding in &model.findings {
        let _ = writeln!(md, "- {}", finding);
    }

    // Food log
    md.push_str("\n## Food Log (Recent Entries)\n\n");
    for day in &model.day_groups {
        let _ = writeln!(md, "### {}\n", day.heading);
        let _ = writeln!(
            md,
            "**Daily Totals:** {} calories, {}g protein, {}g carbs, {}g fat\n",
            day.total_calories, day.total_protein, day.total_carbs, day.total_fat
        );

        for meal in &day.meals {
            let _ = writeln!(md, "**{}:**", meal.meal.display_name());
            for item in &meal.items {
                let _ = writeln!(
                    md,
                    "- {}: {} cal (P: {}g, C: {}g, F: {}g)",
                    item.food,
                    fmt_amount(item.calories),
                    fmt_amount(item.protein),
                    fmt_amount(item.carbs),
                    fmt_amount(item.fat)
                );
            }
            md.push('\n');
        }
    }

    // Exercise log
    if !model.exercise_rows.is_empty() {
        md.push_str("## Exercise Log\n\n");
        for row in &model.exercise_rows {
            let _ = writeln!(
                md,
                "- **{}:** {} for {} minutes ({} calories burned)",
                row.date_label,
                row.name,
                fmt_amount(row.duration),
                fmt_amount(row.calories_burned)
            );
        }
    }

    // Suggested analysis questions
    md.push_str("\n## For AI Analysis\n\n");
    md.push_str("### Questions to Consider:\n");
    for (i, question) in ANALYSIS_QUESTIONS.iter().enumerate() {
        let _ = writeln!(md, "{}. {}", i + 1, question);
    }
    md.push('\n');

    md.push_str("### Context for Analysis:\n");
    let _ = writeln!(md, "- **Goals:** {}", model.goal);
    let _ = writeln!(md, "- **Activity Level:** {}", model.activity_level);
    let _ = writeln!(
        md,
        "- **Any Restrictions:** {}",
        model.restrictions.as_deref().unwrap_or("None specified")
    );

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Biometrics, FoodEntry, Goals, MealType, UserProfile};
    use crate::report::{DateRange, ExportData};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_markdown_report_sections_and_determinism() {
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
        let biometrics = Biometrics::default();
        let goals = Goals::default();
        let profile = UserProfile::default();
        let range = DateRange::default();
        let data = ExportData {
            entries: &entries,
            exercises: &[],
            biometrics: &biometrics,
            goals: &goals,
            profile: &profile,
            date_range: &range,
        };
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();

        let first = render(&ReportModel::build(&data, now));
        let second = render(&ReportModel::build(&data, now));
        assert_eq!(first, second);

        assert!(first.starts_with("# Nutrition & Health Data Export\n"));
        assert!(first.contains("**Export Date:** January 15, 2024"));
        assert!(first.contains("**Date Range:** All time - Present"));
        assert!(first.contains("- **Total Days Tracked:** 1"));
        assert!(first.contains("| Protein | 12 | 50 | 24% | ⚠️ Low |"));
        assert!(first.contains("### Monday, January 1, 2024"));
        assert!(first.contains("**Breakfast:**"));
        assert!(first.contains("- Eggs: 140 cal (P: 12g, C: 1g, F: 10g)"));
        assert!(first.contains("1. Are there any nutrient deficiencies"));
        assert!(first.contains("- **Any Restrictions:** None specified"));
        // No exercise log section when nothing was logged
        assert!(!first.contains("## Exercise Log"));
    }
}
