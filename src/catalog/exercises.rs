//! Reference exercise catalog
//!
//! Known exercises with MET intensity values used to estimate calorie burn.

/// A reference exercise
#[derive(Debug, Clone, Copy)]
pub struct ExerciseProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    /// Metabolic equivalent of task
    pub met: f64,
    /// Approximate burn rate at 70 kg body mass, for display
    pub calories_per_minute_per_70kg: f64,
}

/// All reference exercises
pub static EXERCISES: &[ExerciseProfile] = &[
    ExerciseProfile {
        key: "walking_moderate",
        name: "Walking (moderate pace, 3.5 mph)",
        category: "Cardio",
        met: 4.3,
        calories_per_minute_per_70kg: 3.5,
    },
    ExerciseProfile {
        key: "running_6mph",
        name: "Running (6 mph)",
        category: "Cardio",
        met: 9.8,
        calories_per_minute_per_70kg: 9.8,
    },
    ExerciseProfile {
        key: "cycling_moderate",
        name: "Cycling (moderate, 12-14 mph)",
        category: "Cardio",
        met: 8.0,
        calories_per_minute_per_70kg: 7.0,
    },
    ExerciseProfile {
        key: "swimming",
        name: "Swimming (moderate pace)",
        category: "Cardio",
        met: 8.0,
        calories_per_minute_per_70kg: 7.0,
    },
    ExerciseProfile {
        key: "weight_training",
        name: "Weight Training (general)",
        category: "Strength",
        met: 3.5,
        calories_per_minute_per_70kg: 3.5,
    },
    ExerciseProfile {
        key: "yoga",
        name: "Yoga (general)",
        category: "Flexibility",
        met: 2.5,
        calories_per_minute_per_70kg: 2.5,
    },
    ExerciseProfile {
        key: "hiit",
        name: "HIIT Training",
        category: "Cardio",
        met: 12.0,
        calories_per_minute_per_70kg: 12.0,
    },
];

/// Look up a reference exercise by key
///
/// Unknown keys return `None`; free-text exercise names are allowed when
/// logging, so this is not an error.
pub fn get_exercise(key: &str) -> Option<&'static ExerciseProfile> {
    EXERCISES.iter().find(|e| e.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_key() {
        let exercise = get_exercise("running_6mph").unwrap();
        assert_eq!(exercise.met, 9.8);
        assert!(get_exercise("parkour").is_none());
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(EXERCISES.len(), 7);
    }
}
