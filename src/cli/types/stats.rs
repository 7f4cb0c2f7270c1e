//! Leaderboard kinds and career stat categories.

use super::position::Position;
use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Leaderboards the dashboard can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardKind {
    /// Season passing yards, quarterbacks only
    TopQbs,
    /// Season rushing yards, running backs only
    TopRbs,
    /// Season receiving yards, wide receivers only
    TopWrs,
    /// Career touchdowns of every type
    AllTimeTds,
    /// Quarterbacks with the fewest interceptions per game (minimum games and touchdowns)
    LowestInt,
    /// Any position, fewest interceptions per game
    LowestIntAll,
}

impl LeaderboardKind {
    pub const ALL: [LeaderboardKind; 6] = [
        LeaderboardKind::TopQbs,
        LeaderboardKind::TopRbs,
        LeaderboardKind::TopWrs,
        LeaderboardKind::AllTimeTds,
        LeaderboardKind::LowestInt,
        LeaderboardKind::LowestIntAll,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardKind::TopQbs => "top_qbs",
            LeaderboardKind::TopRbs => "top_rbs",
            LeaderboardKind::TopWrs => "top_wrs",
            LeaderboardKind::AllTimeTds => "all_time_tds",
            LeaderboardKind::LowestInt => "lowest_int",
            LeaderboardKind::LowestIntAll => "lowest_int_all",
        }
    }

    /// Whether the leaderboard ignores the requested season.
    pub fn is_all_time(&self) -> bool {
        matches!(
            self,
            LeaderboardKind::AllTimeTds | LeaderboardKind::LowestInt | LeaderboardKind::LowestIntAll
        )
    }

    /// Title shown above the leaderboard.
    pub fn title(&self) -> &'static str {
        match self {
            LeaderboardKind::TopQbs => "Top QBs by Passing Yards",
            LeaderboardKind::TopRbs => "Top RBs by Rushing Yards",
            LeaderboardKind::TopWrs => "Top WRs by Receiving Yards",
            LeaderboardKind::AllTimeTds => "Top Players All-Time by Touchdowns",
            LeaderboardKind::LowestInt => "QBs with Lowest Interception Avg",
            LeaderboardKind::LowestIntAll => "Players with Lowest Interception Avg",
        }
    }
}

impl fmt::Display for LeaderboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeaderboardKind {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        LeaderboardKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| StatsError::InvalidLeaderboardKind {
                kind: s.to_string(),
            })
    }
}

/// Independently toggleable groups of career totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    Passing,
    Rushing,
    Receiving,
    Turnovers,
}

impl StatCategory {
    pub const ALL: [StatCategory; 4] = [
        StatCategory::Passing,
        StatCategory::Rushing,
        StatCategory::Receiving,
        StatCategory::Turnovers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatCategory::Passing => "passing",
            StatCategory::Rushing => "rushing",
            StatCategory::Receiving => "receiving",
            StatCategory::Turnovers => "turnovers",
        }
    }

    fn bit(self) -> u8 {
        match self {
            StatCategory::Passing => 1,
            StatCategory::Rushing => 1 << 1,
            StatCategory::Receiving => 1 << 2,
            StatCategory::Turnovers => 1 << 3,
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatCategory {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "passing" | "pass" => Ok(StatCategory::Passing),
            "rushing" | "rush" => Ok(StatCategory::Rushing),
            "receiving" | "rec" => Ok(StatCategory::Receiving),
            "turnovers" | "to" => Ok(StatCategory::Turnovers),
            _ => Err(StatsError::InvalidStatCategory {
                category: s.to_string(),
            }),
        }
    }
}

/// Set of enabled [`StatCategory`] values.
///
/// # Examples
///
/// ```rust
/// use nfl_stats::{Position, StatCategories, StatCategory};
///
/// let qb = StatCategories::for_position(Position::QB);
/// assert!(qb.contains(StatCategory::Passing));
/// assert!(!qb.contains(StatCategory::Receiving));
/// assert!(StatCategories::none().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StatCategories {
    bits: u8,
}

impl StatCategories {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        StatCategory::ALL.into_iter().collect()
    }

    /// Default selection for a player's position.
    pub fn for_position(position: Position) -> Self {
        let mut categories = Self::none()
            .with(StatCategory::Rushing)
            .with(StatCategory::Turnovers);
        if position == Position::QB {
            categories = categories.with(StatCategory::Passing);
        } else if position.is_receiver() {
            categories = categories.with(StatCategory::Receiving);
        }
        categories
    }

    pub fn with(self, category: StatCategory) -> Self {
        Self {
            bits: self.bits | category.bit(),
        }
    }

    pub fn contains(&self, category: StatCategory) -> bool {
        self.bits & category.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = StatCategory> + '_ {
        StatCategory::ALL
            .into_iter()
            .filter(move |category| self.contains(*category))
    }
}

impl FromIterator<StatCategory> for StatCategories {
    fn from_iter<I: IntoIterator<Item = StatCategory>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}
