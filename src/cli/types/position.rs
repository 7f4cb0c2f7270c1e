//! Roster position types and utilities.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Football roster positions.
///
/// Stored as the upper-case abbreviation used by the source dataset.
///
/// # Position Groups
///
/// - **Skill positions**: QB, RB, FB, WR, TE
/// - **Specialists**: K, P, LS
/// - **Linemen and defense**: OL, DL, LB, DB
///
/// # Examples
///
/// ```rust
/// use nfl_stats::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(Position::RB.to_string(), "RB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    FB,
    WR,
    TE,
    K,
    P,
    LS,
    OL,
    DL,
    LB,
    DB,
}

impl Position {
    pub const ALL: [Position; 12] = [
        Position::QB,
        Position::RB,
        Position::FB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::P,
        Position::LS,
        Position::OL,
        Position::DL,
        Position::LB,
        Position::DB,
    ];

    /// Stored abbreviation for this position.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::FB => "FB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::P => "P",
            Position::LS => "LS",
            Position::OL => "OL",
            Position::DL => "DL",
            Position::LB => "LB",
            Position::DB => "DB",
        }
    }

    /// Positions that regularly catch passes.
    pub fn is_receiver(&self) -> bool {
        matches!(
            self,
            Position::RB | Position::FB | Position::WR | Position::TE
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" | "HB" => Ok(Position::RB),
            "FB" => Ok(Position::FB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" | "PK" => Ok(Position::K),
            "P" => Ok(Position::P),
            "LS" => Ok(Position::LS),
            "OL" | "T" | "G" | "C" => Ok(Position::OL),
            "DL" | "DE" | "DT" | "NT" => Ok(Position::DL),
            "LB" | "ILB" | "OLB" | "MLB" => Ok(Position::LB),
            "DB" | "CB" | "S" | "FS" | "SS" => Ok(Position::DB),
            _ => Err(StatsError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
