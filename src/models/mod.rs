//! Data models for nutrition and exercise tracking

pub mod exercise_entry;
pub mod food_entry;
pub mod nutrient;
pub mod profile;

pub use exercise_entry::ExerciseEntry;
pub use food_entry::{FoodEntry, MealType};
pub use nutrient::{Nutrient, Nutrients};
pub use profile::{
    ActivityLevel, Biometrics, DietGoal, Goals, InvalidConfiguration, Measurement, Sex,
    UserProfile, KG_PER_LB,
};
