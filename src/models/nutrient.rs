//! Nutrient identifiers and amount maps
//!
//! The `Nutrient` enum is the canonical id for every tracked nutrient, with
//! per-nutrient metadata: serialized key, display name, unit, recommended
//! daily value, limit flag, and rounding precision. `Nutrients` is the amount
//! map used across food profiles, entries, and aggregate totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier for a tracked nutrient
///
/// Serialized keys are camelCase to match the persisted data layout
/// (e.g. `vitaminA`, `saturatedFat`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Sugar,
    Sodium,
    Potassium,
    Calcium,
    Iron,
    Magnesium,
    Phosphorus,
    Zinc,
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    Thiamine,
    Riboflavin,
    Niacin,
    VitaminB6,
    Folate,
    VitaminB12,
    Cholesterol,
    SaturatedFat,
    MonounsaturatedFat,
    PolyunsaturatedFat,
}

impl Nutrient {
    /// All nutrients in canonical (serialization) order
    pub const ALL: [Nutrient; 28] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Fiber,
        Nutrient::Sugar,
        Nutrient::Sodium,
        Nutrient::Potassium,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Magnesium,
        Nutrient::Phosphorus,
        Nutrient::Zinc,
        Nutrient::VitaminA,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::Thiamine,
        Nutrient::Riboflavin,
        Nutrient::Niacin,
        Nutrient::VitaminB6,
        Nutrient::Folate,
        Nutrient::VitaminB12,
        Nutrient::Cholesterol,
        Nutrient::SaturatedFat,
        Nutrient::MonounsaturatedFat,
        Nutrient::PolyunsaturatedFat,
    ];

    /// Serialized key (matches the persisted data layout)
    pub fn key(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fat => "fat",
            Nutrient::Fiber => "fiber",
            Nutrient::Sugar => "sugar",
            Nutrient::Sodium => "sodium",
            Nutrient::Potassium => "potassium",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
            Nutrient::Magnesium => "magnesium",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::Zinc => "zinc",
            Nutrient::VitaminA => "vitaminA",
            Nutrient::VitaminC => "vitaminC",
            Nutrient::VitaminD => "vitaminD",
            Nutrient::VitaminE => "vitaminE",
            Nutrient::VitaminK => "vitaminK",
            Nutrient::Thiamine => "thiamine",
            Nutrient::Riboflavin => "riboflavin",
            Nutrient::Niacin => "niacin",
            Nutrient::VitaminB6 => "vitaminB6",
            Nutrient::Folate => "folate",
            Nutrient::VitaminB12 => "vitaminB12",
            Nutrient::Cholesterol => "cholesterol",
            Nutrient::SaturatedFat => "saturatedFat",
            Nutrient::MonounsaturatedFat => "monounsaturatedFat",
            Nutrient::PolyunsaturatedFat => "polyunsaturatedFat",
        }
    }

    /// Parse from a serialized key
    pub fn from_key(s: &str) -> Option<Self> {
        Nutrient::ALL.iter().copied().find(|n| n.key() == s)
    }

    /// Human-readable name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
            Nutrient::Fiber => "Fiber",
            Nutrient::Sugar => "Sugar",
            Nutrient::Sodium => "Sodium",
            Nutrient::Potassium => "Potassium",
            Nutrient::Calcium => "Calcium",
            Nutrient::Iron => "Iron",
            Nutrient::Magnesium => "Magnesium",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Zinc => "Zinc",
            Nutrient::VitaminA => "Vitamin A",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::VitaminD => "Vitamin D",
            Nutrient::VitaminE => "Vitamin E",
            Nutrient::VitaminK => "Vitamin K",
            Nutrient::Thiamine => "Thiamine (B1)",
            Nutrient::Riboflavin => "Riboflavin (B2)",
            Nutrient::Niacin => "Niacin (B3)",
            Nutrient::VitaminB6 => "Vitamin B6",
            Nutrient::Folate => "Folate",
            Nutrient::VitaminB12 => "Vitamin B12",
            Nutrient::Cholesterol => "Cholesterol",
            Nutrient::SaturatedFat => "Saturated Fat",
            Nutrient::MonounsaturatedFat => "Monounsaturated Fat",
            Nutrient::PolyunsaturatedFat => "Polyunsaturated Fat",
        }
    }

    /// Measurement unit for display
    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            Nutrient::Protein
            | Nutrient::Carbs
            | Nutrient::Fat
            | Nutrient::Fiber
            | Nutrient::Sugar
            | Nutrient::SaturatedFat
            | Nutrient::MonounsaturatedFat
            | Nutrient::PolyunsaturatedFat => "g",
            Nutrient::Sodium
            | Nutrient::Potassium
            | Nutrient::Calcium
            | Nutrient::Iron
            | Nutrient::Magnesium
            | Nutrient::Phosphorus
            | Nutrient::Zinc
            | Nutrient::VitaminC
            | Nutrient::VitaminE
            | Nutrient::Thiamine
            | Nutrient::Riboflavin
            | Nutrient::Niacin
            | Nutrient::VitaminB6
            | Nutrient::Cholesterol => "mg",
            Nutrient::VitaminA
            | Nutrient::VitaminD
            | Nutrient::VitaminK
            | Nutrient::Folate
            | Nutrient::VitaminB12 => "mcg",
        }
    }

    /// Recommended daily value (2000 kcal reference diet)
    ///
    /// `None` for nutrients without a registered target (the fat subtypes).
    pub fn daily_value(&self) -> Option<f64> {
        match self {
            Nutrient::Calories => Some(2000.0),
            Nutrient::Protein => Some(50.0),
            Nutrient::Carbs => Some(300.0),
            Nutrient::Fat => Some(65.0),
            Nutrient::Fiber => Some(25.0),
            Nutrient::Sugar => Some(50.0),
            Nutrient::Sodium => Some(2300.0),
            Nutrient::Potassium => Some(4700.0),
            Nutrient::Calcium => Some(1000.0),
            Nutrient::Iron => Some(18.0),
            Nutrient::Magnesium => Some(400.0),
            Nutrient::Phosphorus => Some(1000.0),
            Nutrient::Zinc => Some(11.0),
            Nutrient::VitaminA => Some(900.0),
            Nutrient::VitaminC => Some(90.0),
            Nutrient::VitaminD => Some(20.0),
            Nutrient::VitaminE => Some(15.0),
            Nutrient::VitaminK => Some(120.0),
            Nutrient::Thiamine => Some(1.2),
            Nutrient::Riboflavin => Some(1.3),
            Nutrient::Niacin => Some(16.0),
            Nutrient::VitaminB6 => Some(1.7),
            Nutrient::Folate => Some(400.0),
            Nutrient::VitaminB12 => Some(2.4),
            Nutrient::Cholesterol => Some(300.0),
            Nutrient::SaturatedFat => Some(20.0),
            Nutrient::MonounsaturatedFat | Nutrient::PolyunsaturatedFat => None,
        }
    }

    /// Whether this is one of the four headline macros
    pub fn is_macro(&self) -> bool {
        matches!(
            self,
            Nutrient::Calories | Nutrient::Protein | Nutrient::Carbs | Nutrient::Fat
        )
    }

    /// Whether the daily value is a ceiling (limit) rather than a goal
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            Nutrient::Sodium | Nutrient::SaturatedFat | Nutrient::Cholesterol
        )
    }

    /// Decimal places kept when rounding logged amounts
    pub fn decimal_places(&self) -> u32 {
        match self {
            Nutrient::Iron | Nutrient::VitaminD | Nutrient::VitaminE => 1,
            _ => 0,
        }
    }
}

/// Round a value to a fixed number of decimal places
fn round_to(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    (value * factor).round() / factor
}

/// A map from nutrient id to amount
///
/// Missing keys read as zero, so partial records (e.g. a custom food with
/// only the four macros) aggregate cleanly with full ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nutrients(BTreeMap<Nutrient, f64>);

impl Nutrients {
    /// Create an empty map (every amount reads as zero)
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from (nutrient, amount) pairs
    pub fn from_pairs(pairs: &[(Nutrient, f64)]) -> Self {
        Self(pairs.iter().copied().collect())
    }

    /// Amount for a nutrient, zero when absent
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.0.get(&nutrient).copied().unwrap_or(0.0)
    }

    /// Set the amount for a nutrient
    pub fn set(&mut self, nutrient: Nutrient, amount: f64) {
        self.0.insert(nutrient, amount);
    }

    /// True when no nutrient has been recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when an amount is recorded for the nutrient (even zero)
    pub fn contains(&self, nutrient: Nutrient) -> bool {
        self.0.contains_key(&nutrient)
    }

    /// Iterate recorded amounts in canonical nutrient order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.0.iter().map(|(n, v)| (*n, *v))
    }

    /// Scale all amounts by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self(self.0.iter().map(|(n, v)| (*n, v * multiplier)).collect())
    }

    /// Add another map to this one
    pub fn add(&self, other: &Nutrients) -> Self {
        let mut result = self.clone();
        for (nutrient, amount) in other.iter() {
            let current = result.get(nutrient);
            result.set(nutrient, current + amount);
        }
        result
    }

    /// Round each amount to its nutrient's precision
    pub fn rounded(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(n, v)| (*n, round_to(*v, n.decimal_places())))
                .collect(),
        )
    }

    /// Round every amount to the nearest whole unit
    pub fn rounded_whole(&self) -> Self {
        Self(self.0.iter().map(|(n, v)| (*n, v.round())).collect())
    }
}

impl std::ops::Add for Nutrients {
    type Output = Nutrients;

    fn add(self, other: Nutrients) -> Nutrients {
        Nutrients::add(&self, &other)
    }
}

impl std::iter::Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrients::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_zero() {
        let n = Nutrients::zero();
        assert_eq!(n.get(Nutrient::Protein), 0.0);
        assert!(!n.contains(Nutrient::Protein));
    }

    #[test]
    fn test_scale_and_add() {
        let a = Nutrients::from_pairs(&[(Nutrient::Calories, 100.0), (Nutrient::Protein, 10.0)]);
        let b = Nutrients::from_pairs(&[(Nutrient::Calories, 50.0), (Nutrient::Fat, 5.0)]);

        let scaled = a.scale(2.0);
        assert_eq!(scaled.get(Nutrient::Calories), 200.0);
        assert_eq!(scaled.get(Nutrient::Protein), 20.0);

        let total = a.add(&b);
        assert_eq!(total.get(Nutrient::Calories), 150.0);
        assert_eq!(total.get(Nutrient::Protein), 10.0);
        assert_eq!(total.get(Nutrient::Fat), 5.0);
    }

    #[test]
    fn test_rounded_respects_precision() {
        let n = Nutrients::from_pairs(&[
            (Nutrient::Calories, 164.25),
            (Nutrient::Iron, 1.35),
            (Nutrient::VitaminD, 11.04),
            (Nutrient::VitaminE, 7.29),
        ]);
        let r = n.rounded();
        assert_eq!(r.get(Nutrient::Calories), 164.0);
        assert_eq!(r.get(Nutrient::Iron), 1.4);
        assert_eq!(r.get(Nutrient::VitaminD), 11.0);
        assert_eq!(r.get(Nutrient::VitaminE), 7.3);
    }

    #[test]
    fn test_sum_of_empty_iterator_is_zero() {
        let total: Nutrients = std::iter::empty::<Nutrients>().sum();
        assert!(total.is_empty());
        assert_eq!(total.get(Nutrient::Calories), 0.0);
    }

    #[test]
    fn test_key_round_trip() {
        for nutrient in Nutrient::ALL {
            assert_eq!(Nutrient::from_key(nutrient.key()), Some(nutrient));
        }
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let n = Nutrients::from_pairs(&[(Nutrient::VitaminA, 80.0), (Nutrient::SaturatedFat, 1.6)]);
        let json = serde_json::to_string(&n).unwrap();
        assert!(json.contains("\"vitaminA\""));
        assert!(json.contains("\"saturatedFat\""));
    }
}
