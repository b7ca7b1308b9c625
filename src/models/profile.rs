//! User profile, goals, and biometrics
//!
//! The mutable singleton records consumed by the derived-metric calculations.
//! Field names mirror the persisted data layout.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Error for unrecognized configuration values
///
/// Unknown activity levels (and the other profile enums) are rejected at the
/// parse boundary instead of silently producing a non-numeric multiplier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid configuration: {0}")]
pub struct InvalidConfiguration(pub String);

/// Biological sex, as used by the resting-energy equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = InvalidConfiguration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(InvalidConfiguration(format!("unknown sex '{}'", other))),
        }
    }
}

/// Activity level for total daily energy expenditure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Multiplier applied to resting energy
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = InvalidConfiguration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" | "veryactive" => Ok(ActivityLevel::VeryActive),
            other => Err(InvalidConfiguration(format!(
                "unknown activity level '{}'",
                other
            ))),
        }
    }
}

/// Dietary goal used to adjust the calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietGoal {
    Lose,
    Maintain,
    Gain,
}

impl DietGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietGoal::Lose => "lose",
            DietGoal::Maintain => "maintain",
            DietGoal::Gain => "gain",
        }
    }
}

impl FromStr for DietGoal {
    type Err = InvalidConfiguration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(DietGoal::Lose),
            "maintain" => Ok(DietGoal::Maintain),
            "gain" => Ok(DietGoal::Gain),
            other => Err(InvalidConfiguration(format!("unknown goal '{}'", other))),
        }
    }
}

/// User profile record
///
/// Weight is stored in pounds (the unit the user enters); callers convert
/// to kilograms for the energy calculations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub weight: f64,  // lbs
    pub height: f64,  // cm
    pub age: u32,
    pub gender: Sex,
    pub activity: ActivityLevel,
}

impl UserProfile {
    /// Body mass in kilograms
    pub fn weight_kg(&self) -> f64 {
        self.weight * KG_PER_LB
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            weight: 180.0,
            height: 175.0,
            age: 30,
            gender: Sex::Male,
            activity: ActivityLevel::Moderate,
        }
    }
}

/// Macro and calorie targets plus the dietary goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    pub goal: DietGoal,
    pub activity_level: ActivityLevel,
    pub target_calories: f64,
    pub target_protein: f64,
    pub target_carbs: f64,
    pub target_fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<String>,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            goal: DietGoal::Maintain,
            activity_level: ActivityLevel::Moderate,
            target_calories: 2000.0,
            target_protein: 150.0,
            target_carbs: 200.0,
            target_fat: 70.0,
            restrictions: None,
        }
    }
}

/// A dated measurement (weight in lbs, body fat in percent)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub date: String,
    pub value: f64,
}

/// Tracked body measurements
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Biometrics {
    pub weight: Vec<Measurement>,
    pub body_fat: Vec<Measurement>,
    pub measurements: BTreeMap<String, f64>,
}

impl Biometrics {
    /// Most recently recorded weight, if any
    pub fn current_weight(&self) -> Option<f64> {
        self.weight.last().map(|m| m.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_multipliers() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::Light.multiplier(), 1.375);
        assert_eq!(ActivityLevel::Moderate.multiplier(), 1.55);
        assert_eq!(ActivityLevel::Active.multiplier(), 1.725);
        assert_eq!(ActivityLevel::VeryActive.multiplier(), 1.9);
    }

    #[test]
    fn test_unknown_activity_level_is_an_error() {
        let result = "extreme".parse::<ActivityLevel>();
        assert!(result.is_err());
    }

    #[test]
    fn test_activity_level_parse_round_trip() {
        for level in [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ] {
            assert_eq!(level.as_str().parse::<ActivityLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_weight_conversion() {
        let profile = UserProfile::default();
        assert!((profile.weight_kg() - 180.0 * KG_PER_LB).abs() < 1e-9);
    }

    #[test]
    fn test_current_weight_from_latest_measurement() {
        let mut biometrics = Biometrics::default();
        assert_eq!(biometrics.current_weight(), None);

        biometrics.weight.push(Measurement {
            date: "2024-01-01".to_string(),
            value: 182.0,
        });
        biometrics.weight.push(Measurement {
            date: "2024-01-08".to_string(),
            value: 180.5,
        });
        assert_eq!(biometrics.current_weight(), Some(180.5));
    }
}
