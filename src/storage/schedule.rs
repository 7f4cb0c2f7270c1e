//! Team schedule and win/loss record

use super::{models::*, outcome, queries::parse_column, schema::StatsDatabase};
use crate::cli::types::{GameId, Season, SeasonType, TeamCode, Week};
use crate::error::Result;
use rusqlite::params;

impl StatsDatabase {
    /// Regular-season games a team played in `season`, by week
    pub fn team_schedule(&self, team: &TeamCode, season: Season) -> Result<Vec<ScheduleEntry>> {
        let query = format!(
            "SELECT g.game_id, g.week, g.season_type, g.away_team, g.home_team, {won} AS won
             FROM games g
             WHERE {played} AND g.season = ?2 AND g.season_type = ?3
             ORDER BY g.week ASC",
            won = outcome::team_won("g", "?1"),
            played = outcome::team_played("g", "?1"),
        );

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            params![
                team.as_str(),
                season.as_u16(),
                SeasonType::Regular.as_str()
            ],
            |row| {
                Ok(ScheduleEntry {
                    game_id: GameId::new(row.get::<_, String>(0)?),
                    week: Week::new(row.get(1)?),
                    season_type: parse_column(row, 2)?,
                    away_team: TeamCode::new(row.get::<_, String>(3)?),
                    home_team: TeamCode::new(row.get::<_, String>(4)?),
                    result: GameResult::from_won(row.get(5)?),
                })
            },
        )?;

        let mut schedule = Vec::new();
        for row in rows {
            schedule.push(row?);
        }
        Ok(schedule)
    }

    /// Wins and losses over every game of the season, regular and post
    pub fn team_record(&self, team: &TeamCode, season: Season) -> Result<TeamRecord> {
        let query = format!(
            "SELECT COALESCE(SUM({won}), 0), COALESCE(SUM({lost}), 0)
             FROM games g
             WHERE g.season = ?2",
            won = outcome::team_won("g", "?1"),
            lost = outcome::team_lost("g", "?1"),
        );

        let record = self
            .conn
            .query_row(&query, params![team.as_str(), season.as_u16()], |row| {
                Ok(TeamRecord {
                    wins: row.get(0)?,
                    losses: row.get(1)?,
                })
            })?;
        Ok(record)
    }
}
