//! Storage layer for the NFL stats dashboard
//!
//! This module provides the typed query layer over the SQLite store,
//! organized into logical components:
//! - `models`: Entities and result records
//! - `schema`: Database connection and schema management
//! - `queries`: Single-entity lookups and row conversion
//! - `mutations`: Transactional writes
//! - `outcome`: The shared "did team T win game G" predicate
//! - `leaderboards`, `career`, `schedule`, `matchups`, `standings`: Aggregations

pub mod career;
pub mod leaderboards;
pub mod matchups;
pub mod models;
pub mod mutations;
pub(crate) mod outcome;
pub mod queries;
pub mod schedule;
pub mod schema;
pub mod standings;

#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use leaderboards::{InterceptionRateFilter, LeaderboardSettings, YardageStat};
pub use models::*;
pub use schema::StatsDatabase;
