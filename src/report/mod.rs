//! Report rendering
//!
//! Consumes entry collections, targets, and profile/goals, and renders them
//! into four deterministic text formats. Rendering is split into two steps:
//! a `ReportModel` intermediate built once from the input bundle, then one
//! serializer per format. The only clock dependency is the `now` value the
//! caller injects.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod model;
pub mod text;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Biometrics, ExerciseEntry, FoodEntry, Goals, UserProfile};

pub use model::{DayGroup, NutrientRow, ReportModel, TargetBand};

/// Optional date-range annotation carried through exports
#[derive(Debug, Clone, Default, Serialize)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// The full input bundle handed to the renderers
///
/// Borrowed snapshots; rendering never mutates them.
#[derive(Debug, Clone, Copy)]
pub struct ExportData<'a> {
    pub entries: &'a [FoodEntry],
    pub exercises: &'a [ExerciseEntry],
    pub biometrics: &'a Biometrics,
    pub goals: &'a Goals,
    pub profile: &'a UserProfile,
    pub date_range: &'a DateRange,
}

/// Export output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    PlainText,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Some(ExportFormat::Markdown),
            "plaintext" | "text" | "txt" => Some(ExportFormat::PlainText),
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::PlainText => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::PlainText => "text/plain",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    /// Default download filename for an export generated on `date`
    pub fn filename(&self, date: &str) -> String {
        let kind = match self {
            ExportFormat::PlainText => "nutrition-summary",
            _ => "nutrition-data",
        };
        format!("{}-{}.{}", kind, date, self.extension())
    }
}

/// Render an export in the requested format
///
/// Deterministic for a fixed `now`: identical inputs and clock produce
/// byte-identical output.
pub fn render(
    format: ExportFormat,
    data: &ExportData,
    now: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    match format {
        ExportFormat::Markdown => Ok(markdown::render(&ReportModel::build(data, now))),
        ExportFormat::PlainText => Ok(text::render(&ReportModel::build(data, now))),
        ExportFormat::Csv => Ok(csv::render(data.entries)),
        ExportFormat::Json => json::render(data, now),
    }
}

/// Format an amount the way the exports print numbers: whole values without
/// a decimal point, fractional values with one decimal place
pub(crate) fn fmt_amount(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filenames_follow_kind_date_ext_pattern() {
        assert_eq!(
            ExportFormat::Markdown.filename("2024-01-01"),
            "nutrition-data-2024-01-01.md"
        );
        assert_eq!(
            ExportFormat::PlainText.filename("2024-01-01"),
            "nutrition-summary-2024-01-01.txt"
        );
        assert_eq!(
            ExportFormat::Csv.filename("2024-01-01"),
            "nutrition-data-2024-01-01.csv"
        );
        assert_eq!(
            ExportFormat::Json.filename("2024-01-01"),
            "nutrition-data-2024-01-01.json"
        );
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ExportFormat::Markdown.mime_type(), "text/markdown");
        assert_eq!(ExportFormat::PlainText.mime_type(), "text/plain");
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv");
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(ExportFormat::from_str("md"), Some(ExportFormat::Markdown));
        assert_eq!(ExportFormat::from_str("TEXT"), Some(ExportFormat::PlainText));
        assert_eq!(ExportFormat::from_str("pdf"), None);
    }

    #[test]
    fn test_fmt_amount() {
        assert_eq!(fmt_amount(140.0), "140");
        assert_eq!(fmt_amount(0.0), "0");
        assert_eq!(fmt_amount(1.1), "1.1");
        assert_eq!(fmt_amount(11.0), "11");
    }
}
