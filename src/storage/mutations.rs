//! Write operations.
//!
//! Each method is one user-level action. Multi-statement actions run inside a
//! single transaction, so either every dependent write lands or none does.
//! Updates that match no row report the missing entity as an error; deletes
//! of absent rows succeed and return `false`.

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{CoachId, GameId, PlayerId, Position, Season, TeamCode, Week};
use crate::error::{Result, StatsError};
use rusqlite::params;
use tracing::debug;

impl StatsDatabase {
    /// Insert a new team together with its vacant coach slot
    pub fn add_team(&mut self, team: &Team) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO teams (team, team_name, city, conference, division)
             VALUES (?, ?, ?, ?, ?)",
            params![
                team.team.as_str(),
                team.team_name,
                team.city,
                team.conference,
                team.division
            ],
        )?;
        tx.execute(
            "INSERT INTO coaches (team, coach_id, name, status) VALUES (?, NULL, NULL, ?)",
            params![team.team.as_str(), CoachStatus::Vacant.as_str()],
        )?;

        tx.commit()?;
        debug!(team = %team.team, "added team");
        Ok(())
    }

    /// Apply every change in `changes` to `team`, or none of them
    pub fn update_team(&mut self, team: &TeamCode, changes: &TeamUpdate) -> Result<()> {
        let tx = self.conn.transaction()?;

        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM teams WHERE team = ?)",
            params![team.as_str()],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(StatsError::TeamNotFound {
                team: team.to_string(),
            });
        }

        if let Some(city) = &changes.city {
            tx.execute(
                "UPDATE teams SET city = ? WHERE team = ?",
                params![city, team.as_str()],
            )?;
        }
        if let Some(name) = &changes.team_name {
            tx.execute(
                "UPDATE teams SET team_name = ? WHERE team = ?",
                params![name, team.as_str()],
            )?;
        }

        tx.commit()?;
        debug!(team = %team, "updated team");
        Ok(())
    }

    pub fn update_team_city(&mut self, team: &TeamCode, new_city: &str) -> Result<()> {
        self.update_team(
            team,
            &TeamUpdate {
                city: Some(new_city.to_string()),
                ..Default::default()
            },
        )
    }

    pub fn update_team_name(&mut self, team: &TeamCode, new_name: &str) -> Result<()> {
        self.update_team(
            team,
            &TeamUpdate {
                team_name: Some(new_name.to_string()),
                ..Default::default()
            },
        )
    }

    /// Insert a player and the first history row for `player.team` in `player.season`.
    ///
    /// Fails with a constraint violation when the ID is already taken.
    pub fn add_player(&mut self, player: &Player, week: Week) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO players (player_id, player_name, birth_year, draft_year, draft_ovr,
                                  height, weight, position, season, team)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                player.player_id.as_str(),
                player.player_name,
                player.birth_year,
                player.draft_year,
                player.draft_ovr,
                player.height,
                player.weight,
                player.position.as_str(),
                player.season.as_u16(),
                player.team.as_str()
            ],
        )?;
        tx.execute(
            "INSERT INTO player_history (player_id, season, week, team) VALUES (?, ?, ?, ?)",
            params![
                player.player_id.as_str(),
                player.season.as_u16(),
                week.as_u16(),
                player.team.as_str()
            ],
        )?;

        tx.commit()?;
        debug!(player_id = %player.player_id, "added player");
        Ok(())
    }

    /// Apply every change in `changes` to a player, or none of them.
    ///
    /// A team move also appends a history row so trades are kept.
    pub fn update_player(&mut self, player_id: &PlayerId, changes: &PlayerUpdate) -> Result<()> {
        let tx = self.conn.transaction()?;

        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM players WHERE player_id = ?)",
            params![player_id.as_str()],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(StatsError::PlayerNotFound {
                id: player_id.to_string(),
            });
        }

        if let Some(name) = &changes.player_name {
            tx.execute(
                "UPDATE players SET player_name = ? WHERE player_id = ?",
                params![name, player_id.as_str()],
            )?;
        }
        if let Some(position) = changes.position {
            tx.execute(
                "UPDATE players SET position = ? WHERE player_id = ?",
                params![position.as_str(), player_id.as_str()],
            )?;
        }
        if let Some(weight) = changes.weight {
            tx.execute(
                "UPDATE players SET weight = ? WHERE player_id = ?",
                params![weight, player_id.as_str()],
            )?;
        }
        if let Some(TeamMove { team, season, week }) = &changes.team {
            tx.execute(
                "UPDATE players SET team = ? WHERE player_id = ?",
                params![team.as_str(), player_id.as_str()],
            )?;
            tx.execute(
                "INSERT INTO player_history (player_id, season, week, team) VALUES (?, ?, ?, ?)",
                params![
                    player_id.as_str(),
                    season.as_u16(),
                    week.as_u16(),
                    team.as_str()
                ],
            )?;
        }

        tx.commit()?;
        debug!(player_id = %player_id, "updated player");
        Ok(())
    }

    /// Move a player to `new_team`, appending a history row
    pub fn update_player_team(
        &mut self,
        player_id: &PlayerId,
        new_team: &TeamCode,
        season: Season,
        week: Week,
    ) -> Result<()> {
        self.update_player(
            player_id,
            &PlayerUpdate {
                team: Some(TeamMove {
                    team: new_team.clone(),
                    season,
                    week,
                }),
                ..Default::default()
            },
        )
    }

    pub fn update_player_position(
        &mut self,
        player_id: &PlayerId,
        new_position: Position,
    ) -> Result<()> {
        self.update_player(
            player_id,
            &PlayerUpdate {
                position: Some(new_position),
                ..Default::default()
            },
        )
    }

    pub fn update_player_weight(&mut self, player_id: &PlayerId, new_weight: u16) -> Result<()> {
        self.update_player(
            player_id,
            &PlayerUpdate {
                weight: Some(new_weight),
                ..Default::default()
            },
        )
    }

    pub fn update_player_name(&mut self, player_id: &PlayerId, new_name: &str) -> Result<()> {
        self.update_player(
            player_id,
            &PlayerUpdate {
                player_name: Some(new_name.to_string()),
                ..Default::default()
            },
        )
    }

    /// Remove a player with all history and stat rows.
    ///
    /// Returns whether the player existed.
    pub fn delete_player(&mut self, player_id: &PlayerId) -> Result<bool> {
        let tx = self.conn.transaction()?;

        // Dependents first; foreign keys never cascade
        tx.execute(
            "DELETE FROM player_history WHERE player_id = ?",
            params![player_id.as_str()],
        )?;
        tx.execute(
            "DELETE FROM player_game_stats WHERE player_id = ?",
            params![player_id.as_str()],
        )?;
        let removed = tx.execute(
            "DELETE FROM players WHERE player_id = ?",
            params![player_id.as_str()],
        )?;

        tx.commit()?;
        debug!(player_id = %player_id, removed, "deleted player");
        Ok(removed > 0)
    }

    /// Record one player's stat line for a week
    pub fn add_player_game_stats(&mut self, stats: &PlayerGameStats) -> Result<()> {
        self.conn.execute(
            "INSERT INTO player_game_stats (
                player_id, season, week, team,
                passing_yards, rushing_yards, receiving_yards,
                receptions, pass_touchdown, rush_touchdown, receiving_touchdown,
                interception, fumble, fumble_lost, safety
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                stats.player_id.as_str(),
                stats.season.as_u16(),
                stats.week.as_u16(),
                stats.team.as_str(),
                stats.passing_yards,
                stats.rushing_yards,
                stats.receiving_yards,
                stats.receptions,
                stats.pass_touchdown,
                stats.rush_touchdown,
                stats.receiving_touchdown,
                stats.interception,
                stats.fumble,
                stats.fumble_lost,
                stats.safety
            ],
        )?;
        Ok(())
    }

    pub fn delete_player_game_stats(
        &mut self,
        player_id: &PlayerId,
        season: Season,
        week: Week,
    ) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM player_game_stats WHERE player_id = ? AND season = ? AND week = ?",
            params![player_id.as_str(), season.as_u16(), week.as_u16()],
        )?;
        Ok(removed > 0)
    }

    /// Install `coach` as head coach of `team` and log the hire for `hire_season`
    pub fn add_coach(&mut self, coach: &Coach, team: &TeamCode, hire_season: Season) -> Result<()> {
        let tx = self.conn.transaction()?;

        let rows = tx.execute(
            "UPDATE coaches SET coach_id = ?, name = ?, status = ? WHERE team = ?",
            params![
                coach.coach_id.as_i64(),
                coach.name,
                CoachStatus::Active.as_str(),
                team.as_str()
            ],
        )?;
        if rows == 0 {
            return Err(StatsError::TeamNotFound {
                team: team.to_string(),
            });
        }
        tx.execute(
            "INSERT INTO coach_history (season, coach_id, name, team) VALUES (?, ?, ?, ?)",
            params![
                hire_season.as_u16(),
                coach.coach_id.as_i64(),
                coach.name,
                team.as_str()
            ],
        )?;

        tx.commit()?;
        debug!(coach_id = %coach.coach_id, team = %team, "added coach");
        Ok(())
    }

    /// Vacate every slot held by `coach_id`.
    ///
    /// The coaching ledger is left intact so past seasons still resolve the
    /// coach's name.
    pub fn delete_coach(&mut self, coach_id: CoachId) -> Result<bool> {
        let vacated = self.conn.execute(
            "UPDATE coaches SET coach_id = NULL, name = NULL, status = ? WHERE coach_id = ?",
            params![CoachStatus::Vacant.as_str(), coach_id.as_i64()],
        )?;
        debug!(coach_id = %coach_id, vacated, "deleted coach");
        Ok(vacated > 0)
    }

    pub fn add_game(&mut self, game: &Game) -> Result<()> {
        self.conn.execute(
            "INSERT INTO games (game_id, season, week, season_type, away_team, home_team, home_win)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                game.game_id.as_str(),
                game.season.as_u16(),
                game.week.as_u16(),
                game.season_type.as_str(),
                game.away_team.as_str(),
                game.home_team.as_str(),
                game.home_win
            ],
        )?;
        Ok(())
    }

    pub fn delete_game(&mut self, game_id: &GameId) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM games WHERE game_id = ?",
            params![game_id.as_str()],
        )?;
        Ok(removed > 0)
    }
}
