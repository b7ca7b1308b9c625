//! `profile` subcommand

use clap::Args;
use tracing::info;

use crate::engine;
use crate::models::{ActivityLevel, DietGoal, Sex};
use crate::report::fmt_amount;
use crate::store::AppState;

use super::CommandResult;

#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Body weight in pounds
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimeters
    #[arg(long)]
    pub height: Option<f64>,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Biological sex: male or female
    #[arg(long)]
    pub gender: Option<String>,

    /// Activity level: sedentary, light, moderate, active, or very_active
    #[arg(long)]
    pub activity: Option<String>,

    /// Dietary goal: lose, maintain, or gain
    #[arg(long)]
    pub goal: Option<String>,

    /// Replace the calorie target with the computed one
    #[arg(long)]
    pub set_target: bool,
}

pub fn run(args: &ProfileArgs, state: &mut AppState) -> CommandResult {
    let mut changed = false;

    if let Some(weight) = args.weight {
        state.profile.weight = weight;
        changed = true;
    }
    if let Some(height) = args.height {
        state.profile.height = height;
        changed = true;
    }
    if let Some(age) = args.age {
        state.profile.age = age;
        changed = true;
    }
    if let Some(gender) = &args.gender {
        state.profile.gender = gender.parse::<Sex>()?;
        changed = true;
    }
    if let Some(activity) = &args.activity {
        let level = activity.parse::<ActivityLevel>()?;
        state.profile.activity = level;
        state.goals.activity_level = level;
        changed = true;
    }
    if let Some(goal) = &args.goal {
        state.goals.goal = goal.parse::<DietGoal>()?;
        changed = true;
    }

    let profile = &state.profile;
    let resting = engine::resting_energy(
        profile.weight_kg(),
        profile.height,
        profile.age as f64,
        profile.gender,
    );
    let tdee = engine::total_daily_energy(resting, profile.activity);
    let target = engine::target_calories(tdee, state.goals.goal);

    if args.set_target {
        state.goals.target_calories = target.round();
        changed = true;
        info!(target = state.goals.target_calories, "Updated calorie target");
    }

    println!("Profile");
    println!(
        "  Weight:   {} lbs ({:.1} kg)",
        fmt_amount(profile.weight),
        profile.weight_kg()
    );
    println!("  Height:   {} cm", fmt_amount(profile.height));
    println!("  Age:      {}", profile.age);
    println!("  Sex:      {}", profile.gender.as_str());
    println!("  Activity: {}", profile.activity.as_str());
    println!("\nEnergy");
    println!("  BMR:    {} kcal", fmt_amount(resting.round()));
    println!("  TDEE:   {} kcal", fmt_amount(tdee.round()));
    println!(
        "  Target: {} kcal ({})",
        fmt_amount(target.round()),
        state.goals.goal.as_str()
    );
    println!(
        "\nGoals: {} kcal / P {}g / C {}g / F {}g",
        fmt_amount(state.goals.target_calories),
        fmt_amount(state.goals.target_protein),
        fmt_amount(state.goals.target_carbs),
        fmt_amount(state.goals.target_fat)
    );

    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> ProfileArgs {
        ProfileArgs {
            weight: None,
            height: None,
            age: None,
            gender: None,
            activity: None,
            goal: None,
            set_target: false,
        }
    }

    #[test]
    fn test_show_only_does_not_change_state() {
        let mut state = AppState::default();
        assert_eq!(run(&empty_args(), &mut state).unwrap(), false);
    }

    #[test]
    fn test_updates_are_applied() {
        let mut state = AppState::default();
        let mut args = empty_args();
        args.weight = Some(154.324);
        args.activity = Some("active".to_string());
        assert!(run(&args, &mut state).unwrap());
        assert_eq!(state.profile.weight, 154.324);
        assert_eq!(state.profile.activity, ActivityLevel::Active);
        assert_eq!(state.goals.activity_level, ActivityLevel::Active);
    }

    #[test]
    fn test_invalid_activity_is_rejected() {
        let mut state = AppState::default();
        let mut args = empty_args();
        args.activity = Some("extreme".to_string());
        assert!(run(&args, &mut state).is_err());
    }

    #[test]
    fn test_set_target_uses_goal_adjustment() {
        let mut state = AppState::default();
        let mut args = empty_args();
        args.weight = Some(70.0 / crate::models::KG_PER_LB);
        args.goal = Some("lose".to_string());
        args.set_target = true;
        run(&args, &mut state).unwrap();

        // BMR 1648.75, TDEE at moderate 2555.5625, minus 500 for the cut
        assert_eq!(state.goals.target_calories, 2056.0);
    }
}
