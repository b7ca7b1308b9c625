//! Macro Tracker
//!
//! A personal nutrition and exercise tracker. Food and exercise entries,
//! biometrics, goals, and the user profile are kept in a single JSON
//! document; the engine aggregates entries into daily-value percentages,
//! four-tier nutrient statuses, and energy estimates, and the report layer
//! renders them into Markdown, plain-text, CSV, and JSON exports.

pub mod build_info;
pub mod catalog;
pub mod commands;
pub mod engine;
pub mod models;
pub mod report;
pub mod store;
