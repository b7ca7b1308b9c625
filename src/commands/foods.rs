//! `foods` subcommand

use clap::Args;

use crate::catalog;
use crate::models::Nutrient;
use crate::report::fmt_amount;

use super::CommandResult;

#[derive(Debug, Args)]
pub struct FoodsArgs {
    /// Search text matched against food names and categories (omit for all)
    pub query: Option<String>,
}

pub fn run(args: &FoodsArgs) -> CommandResult {
    let query = args.query.as_deref().unwrap_or("");
    let matches = catalog::search_foods(query);

    if matches.is_empty() {
        println!("No foods match '{}'", query);
        return Ok(false);
    }

    for food in &matches {
        println!(
            "{:<16} {:<28} {:<12} {} cal, P {}g / C {}g / F {}g",
            food.key,
            food.name,
            food.category,
            fmt_amount(food.per_serving.get(Nutrient::Calories)),
            fmt_amount(food.per_serving.get(Nutrient::Protein)),
            fmt_amount(food.per_serving.get(Nutrient::Carbs)),
            fmt_amount(food.per_serving.get(Nutrient::Fat)),
        );
    }
    Ok(false)
}
