//! Core utilities for the NFL stats CLI
//!
//! - `config`: Database location, default season and leaderboard thresholds

pub mod config;

// Re-export commonly used items for convenience
pub use config::{StatsConfig, DATABASE_ENV_VAR, SEASON_ENV_VAR};
