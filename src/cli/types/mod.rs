//! Type-safe wrappers and enums shared by the CLI and the storage layer.

pub mod ids;
pub mod position;
pub mod stats;
pub mod time;

pub use ids::{CoachId, GameId, PlayerId, TeamCode};
pub use position::Position;
pub use stats::{LeaderboardKind, StatCategories, StatCategory};
pub use time::{Season, SeasonType, Week};
