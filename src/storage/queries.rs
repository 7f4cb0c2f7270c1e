//! Basic lookups and row conversion helpers

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{CoachId, GameId, PlayerId, Season, SeasonType, TeamCode, Week};
use crate::error::Result;
use rusqlite::{params, types::Type, OptionalExtension, Row};
use std::str::FromStr;

/// Parse a text column through `FromStr`, reporting failures as conversion errors
pub(crate) fn parse_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

impl StatsDatabase {
    /// Get a player's bio by ID
    pub fn get_player(&self, player_id: &PlayerId) -> Result<Option<Player>> {
        let player = self
            .conn
            .query_row(
                "SELECT player_id, player_name, position, birth_year, draft_year, draft_ovr,
                        height, weight, team, season
                 FROM players
                 WHERE player_id = ?",
                params![player_id.as_str()],
                |row| self.row_to_player(row),
            )
            .optional()?;
        Ok(player)
    }

    /// Find a player by exact name.
    ///
    /// When several players share a name the one with the highest position
    /// code wins, which keeps the choice stable across calls.
    pub fn find_player_by_name(&self, player_name: &str) -> Result<Option<Player>> {
        let player = self
            .conn
            .query_row(
                "SELECT player_id, player_name, position, birth_year, draft_year, draft_ovr,
                        height, weight, team, season
                 FROM players
                 WHERE player_name = ?
                 ORDER BY position DESC
                 LIMIT 1",
                params![player_name],
                |row| self.row_to_player(row),
            )
            .optional()?;
        Ok(player)
    }

    /// All history rows for a player, oldest first
    pub fn get_player_history(&self, player_id: &PlayerId) -> Result<Vec<PlayerHistoryEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, season, week, team
             FROM player_history
             WHERE player_id = ?
             ORDER BY season, week, rowid",
        )?;

        let rows = stmt.query_map(params![player_id.as_str()], |row| {
            Ok(PlayerHistoryEntry {
                player_id: PlayerId::new(row.get::<_, String>(0)?),
                season: Season::new(row.get(1)?),
                week: Week::new(row.get(2)?),
                team: TeamCode::new(row.get::<_, String>(3)?),
            })
        })?;

        let mut history = Vec::new();
        for row in rows {
            history.push(row?);
        }
        Ok(history)
    }

    /// All stat lines for a player, oldest first
    pub fn get_player_game_stats(&self, player_id: &PlayerId) -> Result<Vec<PlayerGameStats>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, season, week, team, passing_yards, rushing_yards, receiving_yards,
                    receptions, pass_touchdown, rush_touchdown, receiving_touchdown,
                    interception, fumble, fumble_lost, safety
             FROM player_game_stats
             WHERE player_id = ?
             ORDER BY season, week",
        )?;

        let rows = stmt.query_map(params![player_id.as_str()], |row| {
            self.row_to_game_stats(row)
        })?;

        let mut stats = Vec::new();
        for row in rows {
            stats.push(row?);
        }
        Ok(stats)
    }

    pub fn get_team(&self, team: &TeamCode) -> Result<Option<Team>> {
        let team = self
            .conn
            .query_row(
                "SELECT team, team_name, city, conference, division FROM teams WHERE team = ?",
                params![team.as_str()],
                |row| {
                    Ok(Team {
                        team: TeamCode::new(row.get::<_, String>(0)?),
                        team_name: row.get(1)?,
                        city: row.get(2)?,
                        conference: row.get(3)?,
                        division: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(team)
    }

    /// Current coaching assignment for a team, `None` if the team is unknown
    pub fn get_coach_slot(&self, team: &TeamCode) -> Result<Option<CoachSlot>> {
        let slot = self
            .conn
            .query_row(
                "SELECT team, coach_id, name, status FROM coaches WHERE team = ?",
                params![team.as_str()],
                |row| {
                    let coach_id: Option<i64> = row.get(1)?;
                    let name: Option<String> = row.get(2)?;
                    let status: String = row.get(3)?;
                    let coach = match (coach_id, name) {
                        (Some(id), Some(name)) => Some(Coach {
                            coach_id: CoachId::new(id),
                            name,
                        }),
                        _ => None,
                    };
                    Ok(CoachSlot {
                        team: TeamCode::new(row.get::<_, String>(0)?),
                        status: if status == CoachStatus::Active.as_str() && coach.is_some() {
                            CoachStatus::Active
                        } else {
                            CoachStatus::Vacant
                        },
                        coach,
                    })
                },
            )
            .optional()?;
        Ok(slot)
    }

    /// Coaching ledger for a team, oldest season first
    pub fn get_coach_history(&self, team: &TeamCode) -> Result<Vec<CoachHistoryEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT season, coach_id, name, team
             FROM coach_history
             WHERE team = ?
             ORDER BY season, rowid",
        )?;

        let rows = stmt.query_map(params![team.as_str()], |row| {
            Ok(CoachHistoryEntry {
                season: Season::new(row.get(0)?),
                coach_id: CoachId::new(row.get(1)?),
                name: row.get(2)?,
                team: TeamCode::new(row.get::<_, String>(3)?),
            })
        })?;

        let mut history = Vec::new();
        for row in rows {
            history.push(row?);
        }
        Ok(history)
    }

    pub fn get_game(&self, game_id: &GameId) -> Result<Option<Game>> {
        let game = self
            .conn
            .query_row(
                "SELECT game_id, season, week, season_type, away_team, home_team, home_win
                 FROM games
                 WHERE game_id = ?",
                params![game_id.as_str()],
                |row| self.row_to_game(row),
            )
            .optional()?;
        Ok(game)
    }

    /// Every game of a season, in week order
    pub fn get_season_games(&self, season: Season) -> Result<Vec<Game>> {
        let mut stmt = self.conn.prepare(
            "SELECT game_id, season, week, season_type, away_team, home_team, home_win
             FROM games
             WHERE season = ?
             ORDER BY week, game_id",
        )?;

        let rows = stmt.query_map(params![season.as_u16()], |row| self.row_to_game(row))?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }

    /// Helper to convert database row to Player
    pub(crate) fn row_to_player(&self, row: &Row) -> rusqlite::Result<Player> {
        Ok(Player {
            player_id: PlayerId::new(row.get::<_, String>(0)?),
            player_name: row.get(1)?,
            position: parse_column(row, 2)?,
            birth_year: row.get(3)?,
            draft_year: row.get(4)?,
            draft_ovr: row.get(5)?,
            height: row.get(6)?,
            weight: row.get(7)?,
            team: TeamCode::new(row.get::<_, String>(8)?),
            season: Season::new(row.get(9)?),
        })
    }

    /// Helper to convert database row to PlayerGameStats
    pub(crate) fn row_to_game_stats(&self, row: &Row) -> rusqlite::Result<PlayerGameStats> {
        Ok(PlayerGameStats {
            player_id: PlayerId::new(row.get::<_, String>(0)?),
            season: Season::new(row.get(1)?),
            week: Week::new(row.get(2)?),
            team: TeamCode::new(row.get::<_, String>(3)?),
            passing_yards: row.get(4)?,
            rushing_yards: row.get(5)?,
            receiving_yards: row.get(6)?,
            receptions: row.get(7)?,
            pass_touchdown: row.get(8)?,
            rush_touchdown: row.get(9)?,
            receiving_touchdown: row.get(10)?,
            interception: row.get(11)?,
            fumble: row.get(12)?,
            fumble_lost: row.get(13)?,
            safety: row.get(14)?,
        })
    }

    /// Helper to convert database row to Game
    pub(crate) fn row_to_game(&self, row: &Row) -> rusqlite::Result<Game> {
        let season_type: SeasonType = parse_column(row, 3)?;
        Ok(Game {
            game_id: GameId::new(row.get::<_, String>(0)?),
            season: Season::new(row.get(1)?),
            week: Week::new(row.get(2)?),
            season_type,
            away_team: TeamCode::new(row.get::<_, String>(4)?),
            home_team: TeamCode::new(row.get::<_, String>(5)?),
            home_win: row.get(6)?,
        })
    }
}
