//! Player game logs enriched with opponent context

use super::{models::*, outcome, schema::StatsDatabase};
use crate::cli::types::{PlayerId, Season, TeamCode, Week};
use crate::error::Result;
use rusqlite::{params, OptionalExtension};

/// Ledger row naming the coach of record for `team_expr` in `season_expr`.
///
/// A hire stays on record until the team's next hire, so this is the latest
/// entry written for that team in or before the season.
pub(crate) fn ledger_entry_of_record(team_expr: &str, season_expr: &str) -> String {
    format!(
        "(SELECT ch.rowid FROM coach_history ch
          WHERE ch.team = {team_expr} AND ch.season <= {season_expr}
          ORDER BY ch.season DESC, ch.rowid DESC LIMIT 1)"
    )
}

/// Name of the coach of record, NULL when the team has no hire on file yet
pub(crate) fn coach_of_record(team_expr: &str, season_expr: &str) -> String {
    format!(
        "(SELECT rec.name FROM coach_history rec WHERE rec.rowid = {})",
        ledger_entry_of_record(team_expr, season_expr)
    )
}

impl StatsDatabase {
    /// Every game the player logged stats in, most recent first.
    ///
    /// The game is the one played that season and week by the team on the
    /// player's stat line. Stat lines with no matching game are skipped.
    pub fn matchup_history(&self, player_id: &PlayerId) -> Result<Vec<MatchupEntry>> {
        let opponent = outcome::opponent_of("g", "s.team");
        let query = format!(
            "SELECT s.season, s.week,
                    {opponent} AS opponent,
                    COALESCE(opp_t.team_name, {opponent}) AS opponent_name,
                    {coach} AS opposing_coach,
                    {won} AS won,
                    s.passing_yards, s.rushing_yards, s.receiving_yards
             FROM player_game_stats s
             JOIN games g
               ON s.season = g.season
              AND s.week = g.week
              AND {played}
             LEFT JOIN teams opp_t ON opp_t.team = {opponent}
             WHERE s.player_id = ?
             ORDER BY s.season DESC, s.week DESC",
            coach = coach_of_record(&opponent, "s.season"),
            won = outcome::team_won("g", "s.team"),
            played = outcome::team_played("g", "s.team"),
        );

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(params![player_id.as_str()], |row| {
            Ok(MatchupEntry {
                season: Season::new(row.get(0)?),
                week: Week::new(row.get(1)?),
                opponent: TeamCode::new(row.get::<_, String>(2)?),
                opponent_name: row.get(3)?,
                opposing_coach: row.get(4)?,
                game_result: GameResult::from_won(row.get(5)?),
                passing_yards: row.get(6)?,
                rushing_yards: row.get(7)?,
                receiving_yards: row.get(8)?,
            })
        })?;

        let mut history = Vec::new();
        for row in rows {
            history.push(row?);
        }
        Ok(history)
    }

    /// Per-game passing averages for a player against one opponent.
    ///
    /// Returns `None` when the player never faced that team.
    pub fn stats_vs_opponent(
        &self,
        player_id: &PlayerId,
        opponent: &TeamCode,
    ) -> Result<Option<OpponentSplit>> {
        let query = format!(
            "SELECT p.player_name,
                    COUNT(*) AS games_played,
                    AVG(s.passing_yards),
                    AVG(s.pass_touchdown),
                    AVG(s.interception)
             FROM player_game_stats s
             JOIN players p ON s.player_id = p.player_id
             JOIN games g
               ON s.season = g.season
              AND s.week = g.week
              AND {played}
             WHERE s.player_id = ?1
               AND {opponent} = ?2
             GROUP BY p.player_id, p.player_name",
            played = outcome::team_played("g", "s.team"),
            opponent = outcome::opponent_of("g", "s.team"),
        );

        let split = self
            .conn
            .query_row(
                &query,
                params![player_id.as_str(), opponent.as_str()],
                |row| {
                    Ok(OpponentSplit {
                        player_name: row.get(0)?,
                        opponent: opponent.clone(),
                        games_played: row.get(1)?,
                        avg_pass_yards: row.get(2)?,
                        avg_pass_tds: row.get(3)?,
                        avg_ints: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(split)
    }
}
