//! Division standings and coaching records

use super::{
    matchups::{coach_of_record, ledger_entry_of_record},
    models::*,
    outcome,
    schema::StatsDatabase,
};
use crate::cli::types::{CoachId, Season, SeasonType, TeamCode};
use crate::error::Result;
use rusqlite::params;

impl StatsDatabase {
    /// Division winners for a season, one row per (conference, division).
    ///
    /// Teams are ranked inside their division by wins, then total offensive
    /// yards, then total touchdowns, then team code. Teams without games or
    /// stat lines count as zero, so every division in `teams` yields a winner.
    pub fn division_winners(&self, season: Season) -> Result<Vec<DivisionWinner>> {
        let query = format!(
            "WITH team_wins AS (
                SELECT t.team, SUM({won}) AS wins
                FROM teams t
                JOIN games g ON {played}
                WHERE g.season = ?1
                GROUP BY t.team
            ),
            team_stats AS (
                SELECT s.team,
                       SUM(s.passing_yards + s.rushing_yards + s.receiving_yards) AS total_yards,
                       SUM(s.pass_touchdown + s.rush_touchdown + s.receiving_touchdown) AS total_tds
                FROM player_game_stats s
                WHERE s.season = ?1
                GROUP BY s.team
            ),
            team_info AS (
                SELECT t.team, t.team_name, t.conference, t.division,
                       {coach} AS coach_name,
                       COALESCE(w.wins, 0) AS wins,
                       COALESCE(ts.total_yards, 0) AS total_yards,
                       COALESCE(ts.total_tds, 0) AS total_tds
                FROM teams t
                LEFT JOIN team_wins w ON t.team = w.team
                LEFT JOIN team_stats ts ON t.team = ts.team
            ),
            ranked AS (
                SELECT *,
                       ROW_NUMBER() OVER (
                           PARTITION BY conference, division
                           ORDER BY wins DESC, total_yards DESC, total_tds DESC, team ASC
                       ) AS div_rank
                FROM team_info
            )
            SELECT team, team_name, conference, division, coach_name, wins, total_yards, total_tds
            FROM ranked
            WHERE div_rank = 1
            ORDER BY conference, division",
            won = outcome::team_won("g", "t.team"),
            played = outcome::team_played("g", "t.team"),
            coach = coach_of_record("t.team", "?1"),
        );

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(params![season.as_u16()], |row| {
            Ok(DivisionWinner {
                team: TeamCode::new(row.get::<_, String>(0)?),
                team_name: row.get(1)?,
                conference: row.get(2)?,
                division: row.get(3)?,
                coach_name: row.get(4)?,
                wins: row.get(5)?,
                total_yards: row.get(6)?,
                total_tds: row.get(7)?,
            })
        })?;

        let mut winners = Vec::new();
        for row in rows {
            winners.push(row?);
        }
        Ok(winners)
    }

    /// Coaches ranked by wins over every game their team played while they
    /// were the coach of record.
    ///
    /// A championship is a win in the latest-week postseason game of a season.
    pub fn best_coaches(&self, limit: u32) -> Result<Vec<CoachRecord>> {
        let query = format!(
            "WITH finals AS (
                SELECT season, MAX(week) AS week
                FROM games
                WHERE season_type = ?1
                GROUP BY season
            )
            SELECT hire.coach_id,
                   (SELECT name FROM coach_history
                    WHERE coach_id = hire.coach_id ORDER BY rowid DESC LIMIT 1) AS coach_name,
                   t.team,
                   SUM({won}) AS total_wins,
                   SUM({lost}) AS total_losses,
                   SUM(CASE WHEN f.week IS NOT NULL THEN {won} ELSE 0 END) AS championship_wins
             FROM teams t
             JOIN games g ON {played}
             JOIN coach_history hire ON hire.rowid = {entry}
             LEFT JOIN finals f
               ON f.season = g.season AND f.week = g.week AND g.season_type = ?1
             GROUP BY hire.coach_id, t.team
             ORDER BY total_wins DESC
             LIMIT ?2",
            won = outcome::team_won("g", "t.team"),
            lost = outcome::team_lost("g", "t.team"),
            played = outcome::team_played("g", "t.team"),
            entry = ledger_entry_of_record("t.team", "g.season"),
        );

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(params![SeasonType::Post.as_str(), limit], |row| {
            Ok(CoachRecord {
                coach_id: CoachId::new(row.get(0)?),
                coach_name: row.get(1)?,
                team: TeamCode::new(row.get::<_, String>(2)?),
                total_wins: row.get(3)?,
                total_losses: row.get(4)?,
                championship_wins: row.get(5)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}
