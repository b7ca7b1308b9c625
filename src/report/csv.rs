//! CSV export serializer
//!
//! Fixed column layout, one row per food entry. Food names are
//! double-quoted to tolerate embedded commas; absent nutrient amounts
//! render as 0.

use std::fmt::Write;

use super::fmt_amount;
use crate::models::{FoodEntry, Nutrient};

/// Header row; the nutrient columns map to the entries' nutrient fields
const HEADERS: &str =
    "Date,Meal,Food,Calories,Protein,Carbs,Fat,Fiber,Vitamin C,Vitamin D,Calcium,Iron,Potassium";

/// Nutrient columns in header order
const COLUMNS: [Nutrient; 10] = [
    Nutrient::Calories,
    Nutrient::Protein,
    Nutrient::Carbs,
    Nutrient::Fat,
    Nutrient::Fiber,
    Nutrient::VitaminC,
    Nutrient::VitaminD,
    Nutrient::Calcium,
    Nutrient::Iron,
    Nutrient::Potassium,
];

/// Render all food entries as CSV
pub fn render(entries: &[FoodEntry]) -> String {
    let mut csv = String::new();
    csv.push_str(HEADERS);
    csv.push('\n');

    for entry in entries {
        let _ = write!(
            csv,
            "{},{},\"{}\"",
            entry.date,
            entry.meal.as_str(),
            entry.food
        );
        for nutrient in COLUMNS {
            let _ = write!(csv, ",{}", fmt_amount(entry.nutrients.get(nutrient)));
        }
        csv.push('\n');
    }

    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    #[test]
    fn test_golden_row() {
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
        let csv = render(&entries);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(HEADERS));
        assert_eq!(
            lines.next(),
            Some("2024-01-01,breakfast,\"Eggs\",140,12,1,10,0,0,0,0,0,0")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_input_is_header_only() {
        let csv = render(&[]);
        assert_eq!(csv, format!("{}\n", HEADERS));
    }

    #[test]
    fn test_one_decimal_amounts_survive() {
        let mut entry = FoodEntry::custom(
            1,
            "2024-01-02".to_string(),
            MealType::Snacks,
            "Almonds, salted".to_string(),
            1.0,
            164.0,
            6.0,
            6.0,
            14.0,
        );
        entry.nutrients.set(Nutrient::Iron, 1.4);
        entry.nutrients.set(Nutrient::VitaminD, 0.1);

        let csv = render(&[entry]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "2024-01-02,snacks,\"Almonds, salted\",164,6,6,14,0,0,0.1,0,1.4,0"
        );
    }
}
