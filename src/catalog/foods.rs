//! Reference food catalog
//!
//! Static per-serving nutrient profiles for the known foods, with lookup and
//! search helpers.

use std::sync::LazyLock;

use crate::models::{Nutrient, Nutrients};

/// A reference food with its per-serving nutrient profile
#[derive(Debug, Clone)]
pub struct FoodProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub per_serving: Nutrients,
}

/// Build a profile from amounts listed in canonical nutrient order
/// (see `Nutrient::ALL`): calories, protein, carbs, fat, fiber, sugar,
/// sodium, potassium, calcium, iron, magnesium, phosphorus, zinc,
/// vitamins A/C/D/E/K, thiamine, riboflavin, niacin, B6, folate, B12,
/// cholesterol, saturated/monounsaturated/polyunsaturated fat.
fn profile(
    key: &'static str,
    name: &'static str,
    category: &'static str,
    amounts: [f64; 28],
) -> FoodProfile {
    let pairs: Vec<(Nutrient, f64)> = Nutrient::ALL.iter().copied().zip(amounts).collect();
    FoodProfile {
        key,
        name,
        category,
        per_serving: Nutrients::from_pairs(&pairs),
    }
}

static FOODS: LazyLock<Vec<FoodProfile>> = LazyLock::new(|| {
    vec![
        profile(
            "chicken_breast",
            "Chicken Breast (100g)",
            "Proteins",
            [
                165.0, 31.0, 0.0, 3.6, 0.0, 0.0, 74.0, 256.0, 15.0, 0.9, 25.0, 196.0, 1.0, 6.0,
                0.0, 0.1, 0.2, 0.0, 0.1, 0.1, 10.9, 0.5, 4.0, 0.3, 85.0, 1.0, 1.2, 0.8,
            ],
        ),
        profile(
            "salmon",
            "Atlantic Salmon (100g)",
            "Proteins",
            [
                208.0, 25.0, 0.0, 12.0, 0.0, 0.0, 44.0, 363.0, 9.0, 0.3, 27.0, 252.0, 0.4, 12.0,
                0.0, 11.0, 1.2, 0.0, 0.2, 0.1, 7.9, 0.6, 26.0, 2.8, 55.0, 3.1, 3.8, 3.9,
            ],
        ),
        profile(
            "eggs",
            "Large Egg (1 whole)",
            "Proteins",
            [
                70.0, 6.0, 0.4, 5.0, 0.0, 0.4, 70.0, 69.0, 28.0, 0.9, 6.0, 99.0, 0.6, 80.0, 0.0,
                1.1, 0.5, 0.3, 0.04, 0.2, 0.1, 0.1, 24.0, 0.6, 186.0, 1.6, 2.0, 0.7,
            ],
        ),
        profile(
            "brown_rice",
            "Brown Rice, cooked (1 cup)",
            "Grains",
            [
                216.0, 5.0, 45.0, 1.8, 3.5, 0.7, 2.0, 174.0, 20.0, 0.8, 84.0, 150.0, 1.2, 0.0,
                0.0, 0.0, 0.1, 1.2, 0.2, 0.05, 3.0, 0.3, 8.0, 0.0, 0.0, 0.4, 0.6, 0.6,
            ],
        ),
        profile(
            "oats",
            "Rolled Oats, dry (1/2 cup)",
            "Grains",
            [
                154.0, 5.0, 28.0, 3.0, 4.0, 1.0, 1.0, 147.0, 21.0, 1.7, 63.0, 180.0, 1.2, 0.0,
                0.0, 0.0, 0.2, 2.0, 0.2, 0.06, 0.4, 0.05, 14.0, 0.0, 0.0, 0.5, 0.9, 1.1,
            ],
        ),
        profile(
            "broccoli",
            "Broccoli, raw (1 cup chopped)",
            "Vegetables",
            [
                25.0, 3.0, 5.0, 0.3, 2.3, 1.5, 33.0, 288.0, 43.0, 0.7, 19.0, 60.0, 0.4, 567.0,
                81.0, 0.0, 0.7, 92.0, 0.06, 0.1, 0.6, 0.2, 57.0, 0.0, 0.0, 0.1, 0.02, 0.1,
            ],
        ),
        profile(
            "spinach",
            "Spinach, raw (1 cup)",
            "Vegetables",
            [
                7.0, 0.9, 1.1, 0.1, 0.7, 0.1, 24.0, 167.0, 30.0, 0.8, 24.0, 15.0, 0.2, 469.0,
                8.0, 0.0, 0.6, 145.0, 0.02, 0.05, 0.2, 0.06, 58.0, 0.0, 0.0, 0.02, 0.003, 0.05,
            ],
        ),
        profile(
            "banana",
            "Banana, medium (1 whole)",
            "Fruits",
            [
                105.0, 1.3, 27.0, 0.4, 3.1, 14.4, 1.0, 422.0, 6.0, 0.3, 32.0, 26.0, 0.2, 64.0,
                10.0, 0.0, 0.1, 0.5, 0.04, 0.09, 0.8, 0.4, 24.0, 0.0, 0.0, 0.1, 0.04, 0.1,
            ],
        ),
        profile(
            "apple",
            "Apple, medium (1 whole)",
            "Fruits",
            [
                95.0, 0.5, 25.0, 0.3, 4.4, 19.0, 2.0, 195.0, 11.0, 0.2, 9.0, 20.0, 0.1, 98.0,
                8.0, 0.0, 0.3, 4.0, 0.03, 0.05, 0.2, 0.08, 5.0, 0.0, 0.0, 0.1, 0.01, 0.1,
            ],
        ),
        profile(
            "greek_yogurt",
            "Greek Yogurt, plain (1 cup)",
            "Dairy",
            [
                130.0, 23.0, 9.0, 0.4, 0.0, 9.0, 65.0, 240.0, 230.0, 0.1, 20.0, 194.0, 1.1, 0.0,
                0.0, 0.0, 0.03, 0.2, 0.05, 0.3, 0.2, 0.1, 12.0, 1.3, 10.0, 0.3, 0.1, 0.04,
            ],
        ),
        profile(
            "almonds",
            "Almonds (1 oz, ~23 nuts)",
            "Nuts & Seeds",
            [
                164.0, 6.0, 6.0, 14.0, 3.5, 1.2, 0.0, 208.0, 76.0, 1.0, 76.0, 139.0, 0.9, 0.0,
                0.0, 0.0, 7.3, 0.0, 0.06, 0.3, 1.0, 0.04, 12.0, 0.0, 0.0, 1.1, 9.0, 3.5,
            ],
        ),
    ]
});

/// All reference foods
pub fn all_foods() -> &'static [FoodProfile] {
    &FOODS
}

/// Look up a reference food by key
pub fn get_food(key: &str) -> Option<&'static FoodProfile> {
    FOODS.iter().find(|f| f.key == key)
}

/// Search foods by name or category substring
///
/// An empty query returns the full catalog.
pub fn search_foods(query: &str) -> Vec<&'static FoodProfile> {
    if query.is_empty() {
        return FOODS.iter().collect();
    }
    let term = query.to_lowercase();
    FOODS
        .iter()
        .filter(|f| {
            f.name.to_lowercase().contains(&term) || f.category.to_lowercase().contains(&term)
        })
        .collect()
}

/// Foods in an exact category
pub fn foods_by_category(category: &str) -> Vec<&'static FoodProfile> {
    FOODS.iter().filter(|f| f.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrient;

    #[test]
    fn test_lookup_by_key() {
        let food = get_food("chicken_breast").unwrap();
        assert_eq!(food.name, "Chicken Breast (100g)");
        assert_eq!(food.per_serving.get(Nutrient::Calories), 165.0);
        assert_eq!(food.per_serving.get(Nutrient::Protein), 31.0);
        assert!(get_food("pizza").is_none());
    }

    #[test]
    fn test_every_food_has_a_full_profile() {
        for food in all_foods() {
            for nutrient in Nutrient::ALL {
                assert!(
                    food.per_serving.contains(nutrient),
                    "{} missing {}",
                    food.key,
                    nutrient.key()
                );
            }
        }
    }

    #[test]
    fn test_search_matches_name_and_category() {
        let by_name = search_foods("salmon");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].key, "salmon");

        let by_category = search_foods("fruits");
        assert_eq!(by_category.len(), 2);

        assert_eq!(search_foods("").len(), all_foods().len());
    }

    #[test]
    fn test_foods_by_category_is_exact() {
        assert_eq!(foods_by_category("Proteins").len(), 3);
        assert_eq!(foods_by_category("proteins").len(), 0);
    }
}
