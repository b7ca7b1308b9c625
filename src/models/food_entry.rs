//! Food entry model
//!
//! One logged consumption event: a reference or custom food scaled by
//! quantity, with nutrient amounts fixed (and rounded) at creation time.

use serde::{Deserialize, Serialize};

use super::{Nutrient, Nutrients};

/// Meal category for a food entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    /// All meal types in day order
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snacks => "snacks",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snacks" | "snack" => Some(MealType::Snacks),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snacks => "Snacks",
        }
    }
}

/// A logged food entry
///
/// Nutrient amounts are the reference per-serving values multiplied by
/// quantity and rounded per nutrient precision. Entries are immutable once
/// created. Nutrient fields serialize flat on the entry object, matching the
/// persisted data layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: i64,
    pub date: String,
    pub meal: MealType,
    pub food: String,
    pub quantity: f64,
    #[serde(flatten)]
    pub nutrients: Nutrients,
}

impl FoodEntry {
    /// Create an entry from per-serving nutrient values and a quantity
    pub fn new(
        id: i64,
        date: String,
        meal: MealType,
        food: String,
        quantity: f64,
        per_serving: &Nutrients,
    ) -> Self {
        Self {
            id,
            date,
            meal,
            food,
            quantity,
            nutrients: per_serving.scale(quantity).rounded(),
        }
    }

    /// Create an entry for a custom food described only by its macros
    #[allow(clippy::too_many_arguments)]
    pub fn custom(
        id: i64,
        date: String,
        meal: MealType,
        food: String,
        quantity: f64,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
    ) -> Self {
        let per_serving = Nutrients::from_pairs(&[
            (Nutrient::Calories, calories),
            (Nutrient::Protein, protein),
            (Nutrient::Carbs, carbs),
            (Nutrient::Fat, fat),
        ]);
        Self::new(id, date, meal, food, quantity, &per_serving)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_scales_and_rounds_per_serving_values() {
        let per_serving = Nutrients::from_pairs(&[
            (Nutrient::Calories, 165.0),
            (Nutrient::Protein, 31.0),
            (Nutrient::Iron, 0.9),
            (Nutrient::VitaminD, 0.1),
        ]);
        let entry = FoodEntry::new(
            1,
            "2024-01-01".to_string(),
            MealType::Lunch,
            "Chicken Breast (100g)".to_string(),
            1.5,
            &per_serving,
        );

        assert_eq!(entry.nutrients.get(Nutrient::Calories), 248.0); // 247.5 rounds up
        assert_eq!(entry.nutrients.get(Nutrient::Protein), 47.0); // 46.5 rounds up
        assert_eq!(entry.nutrients.get(Nutrient::Iron), 1.4); // 1.35 to one decimal
        assert_eq!(entry.nutrients.get(Nutrient::VitaminD), 0.2); // 0.15 to one decimal
    }

    #[test]
    fn test_custom_entry_carries_only_macros() {
        let entry = FoodEntry::custom(
            1,
            "2024-01-01".to_string(),
            MealType::Breakfast,
            "Eggs".to_string(),
            1.0,
            140.0,
            12.0,
            1.0,
            10.0,
        );
        assert_eq!(entry.nutrients.get(Nutrient::Calories), 140.0);
        assert_eq!(entry.nutrients.get(Nutrient::Fiber), 0.0);
        assert!(!entry.nutrients.contains(Nutrient::Fiber));
    }

    #[test]
    fn test_meal_type_parsing() {
        assert_eq!(MealType::from_str("Breakfast"), Some(MealType::Breakfast));
        assert_eq!(MealType::from_str("snack"), Some(MealType::Snacks));
        assert_eq!(MealType::from_str("brunch"), None);
    }

    #[test]
    fn test_entry_serializes_nutrients_flat() {
        let entry = FoodEntry::custom(
            7,
            "2024-01-01".to_string(),
            MealType::Dinner,
            "Eggs".to_string(),
            1.0,
            140.0,
            12.0,
            1.0,
            10.0,
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["meal"], "dinner");
        assert_eq!(json["calories"], 140.0);
        assert_eq!(json["protein"], 12.0);
    }
}
