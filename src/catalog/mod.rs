//! Static reference catalogs (foods, exercises)

pub mod exercises;
pub mod foods;

pub use exercises::{get_exercise, ExerciseProfile, EXERCISES};
pub use foods::{all_foods, foods_by_category, get_food, search_foods, FoodProfile};
