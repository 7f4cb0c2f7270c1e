//! Leaderboard queries: season yardage, career touchdowns and interception rates

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{LeaderboardKind, PlayerId, Position, Season};
use crate::error::Result;
use rusqlite::params;

/// Yardage column a season leaderboard sums
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YardageStat {
    Passing,
    Rushing,
    Receiving,
}

impl YardageStat {
    fn column(self) -> &'static str {
        match self {
            YardageStat::Passing => "passing_yards",
            YardageStat::Rushing => "rushing_yards",
            YardageStat::Receiving => "receiving_yards",
        }
    }
}

/// Thresholds for the interceptions-per-game leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterceptionRateFilter {
    pub position: Option<Position>,
    /// Clamped to at least 1, so no player with zero games is ever ranked
    pub min_games: u32,
    pub min_touchdowns: u32,
    pub limit: u32,
}

/// Row limits and thresholds used when a leaderboard is requested by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardSettings {
    pub limit: u32,
    pub min_games: u32,
    pub min_touchdowns: u32,
    pub rate_limit: u32,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            limit: 5,
            min_games: 12,
            min_touchdowns: 10,
            rate_limit: 10,
        }
    }
}

impl StatsDatabase {
    /// Run the leaderboard identified by `kind`.
    ///
    /// Season-less boards (`all_time_tds`, the interception boards) ignore
    /// `season`. Ties keep whatever order SQLite produces; no secondary key is
    /// applied.
    pub fn leaderboard(
        &self,
        kind: LeaderboardKind,
        season: Season,
        settings: &LeaderboardSettings,
    ) -> Result<Vec<LeaderboardEntry>> {
        match kind {
            LeaderboardKind::TopQbs => self.season_yardage_leaders(
                YardageStat::Passing,
                season,
                Some(Position::QB),
                settings.limit,
            ),
            LeaderboardKind::TopRbs => self.season_yardage_leaders(
                YardageStat::Rushing,
                season,
                Some(Position::RB),
                settings.limit,
            ),
            LeaderboardKind::TopWrs => self.season_yardage_leaders(
                YardageStat::Receiving,
                season,
                Some(Position::WR),
                settings.limit,
            ),
            LeaderboardKind::AllTimeTds => self.all_time_touchdown_leaders(settings.limit),
            LeaderboardKind::LowestInt => self.lowest_interception_rate(&InterceptionRateFilter {
                position: Some(Position::QB),
                min_games: settings.min_games,
                min_touchdowns: settings.min_touchdowns,
                limit: settings.rate_limit,
            }),
            LeaderboardKind::LowestIntAll => {
                self.lowest_interception_rate(&InterceptionRateFilter {
                    position: None,
                    min_games: 1,
                    min_touchdowns: 0,
                    limit: settings.limit,
                })
            }
        }
    }

    /// Sum one yardage column per player for a season, highest first
    pub fn season_yardage_leaders(
        &self,
        stat: YardageStat,
        season: Season,
        position: Option<Position>,
        limit: u32,
    ) -> Result<Vec<LeaderboardEntry>> {
        let column = stat.column();
        let mut query = format!(
            "SELECT p.player_id, p.player_name, SUM(s.{column}) AS total
             FROM player_game_stats s
             JOIN players p ON s.player_id = p.player_id
             WHERE s.season = ?"
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(season.as_u16())];

        if let Some(pos) = position {
            query.push_str(" AND p.position = ?");
            params.push(Box::new(pos.as_str()));
        }

        query.push_str(" GROUP BY p.player_id, p.player_name ORDER BY total DESC LIMIT ?");
        params.push(Box::new(limit));

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            |row| {
                Ok(LeaderboardEntry {
                    player_id: PlayerId::new(row.get::<_, String>(0)?),
                    player_name: row.get(1)?,
                    value: row.get(2)?,
                    total_touchdowns: None,
                })
            },
        )?;

        let mut leaders = Vec::new();
        for row in rows {
            leaders.push(row?);
        }
        Ok(leaders)
    }

    /// Career passing + rushing + receiving touchdowns, highest first
    pub fn all_time_touchdown_leaders(&self, limit: u32) -> Result<Vec<LeaderboardEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.player_id, p.player_name,
                    SUM(s.rush_touchdown + s.pass_touchdown + s.receiving_touchdown) AS total_touchdowns
             FROM player_game_stats s
             JOIN players p ON s.player_id = p.player_id
             GROUP BY p.player_id, p.player_name
             ORDER BY total_touchdowns DESC
             LIMIT ?",
        )?;

        let rows = stmt.query_map(params![limit], |row| {
            Ok(LeaderboardEntry {
                player_id: PlayerId::new(row.get::<_, String>(0)?),
                player_name: row.get(1)?,
                value: row.get(2)?,
                total_touchdowns: None,
            })
        })?;

        let mut leaders = Vec::new();
        for row in rows {
            leaders.push(row?);
        }
        Ok(leaders)
    }

    /// Interceptions per logged game, lowest first, among players meeting the thresholds
    pub fn lowest_interception_rate(
        &self,
        filter: &InterceptionRateFilter,
    ) -> Result<Vec<LeaderboardEntry>> {
        let mut query = String::from(
            "SELECT p.player_id, p.player_name,
                    SUM(s.interception) * 1.0 / COUNT(*) AS avg_interceptions,
                    SUM(s.pass_touchdown + s.rush_touchdown + s.receiving_touchdown) AS total_touchdowns
             FROM player_game_stats s
             JOIN players p ON s.player_id = p.player_id",
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(pos) = filter.position {
            query.push_str(" WHERE p.position = ?");
            params.push(Box::new(pos.as_str()));
        }

        query.push_str(
            " GROUP BY p.player_id, p.player_name
              HAVING COUNT(*) >= ? AND total_touchdowns >= ?
              ORDER BY avg_interceptions ASC
              LIMIT ?",
        );
        params.push(Box::new(filter.min_games.max(1)));
        params.push(Box::new(filter.min_touchdowns));
        params.push(Box::new(filter.limit));

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            |row| {
                Ok(LeaderboardEntry {
                    player_id: PlayerId::new(row.get::<_, String>(0)?),
                    player_name: row.get(1)?,
                    value: row.get(2)?,
                    total_touchdowns: Some(row.get(3)?),
                })
            },
        )?;

        let mut leaders = Vec::new();
        for row in rows {
            leaders.push(row?);
        }
        Ok(leaders)
    }

    /// Season passing leaders among stat lines recorded for one division's teams
    pub fn division_passing_leaders(
        &self,
        season: Season,
        conference: &str,
        division: &str,
        limit: u32,
    ) -> Result<Vec<DivisionPassingLeader>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.player_name, t.team_name, SUM(s.passing_yards) AS total_yards
             FROM player_game_stats s
             JOIN players p ON s.player_id = p.player_id
             JOIN teams t ON s.team = t.team
             WHERE s.season = ?
               AND t.conference = ?
               AND t.division = ?
               AND p.position = ?
             GROUP BY p.player_id, p.player_name
             ORDER BY total_yards DESC
             LIMIT ?",
        )?;

        let rows = stmt.query_map(
            params![
                season.as_u16(),
                conference,
                division,
                Position::QB.as_str(),
                limit
            ],
            |row| {
                Ok(DivisionPassingLeader {
                    player_name: row.get(0)?,
                    team_name: row.get(1)?,
                    total_yards: row.get(2)?,
                })
            },
        )?;

        let mut leaders = Vec::new();
        for row in rows {
            leaders.push(row?);
        }
        Ok(leaders)
    }
}
