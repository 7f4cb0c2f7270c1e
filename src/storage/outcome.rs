//! The single definition of "did team T win game G".
//!
//! Every query that needs a result from one team's perspective splices in
//! these fragments instead of spelling out the home/away cases itself, so the
//! record, schedule, matchup, standings and coach queries cannot drift apart.
//! Arguments are SQL column expressions chosen by this crate, never user input.

/// SQL expression that is 1 when `team` won `game`, 0 otherwise (including
/// when `team` did not play in `game`).
pub(crate) fn team_won(game: &str, team: &str) -> String {
    format!(
        "(CASE WHEN ({team} = {game}.home_team AND {game}.home_win = 1) \
               OR ({team} = {game}.away_team AND {game}.home_win = 0) \
          THEN 1 ELSE 0 END)"
    )
}

/// SQL expression that is 1 when `team` played in `game` and lost it.
pub(crate) fn team_lost(game: &str, team: &str) -> String {
    format!(
        "(CASE WHEN ({team} = {game}.home_team AND {game}.home_win = 0) \
               OR ({team} = {game}.away_team AND {game}.home_win = 1) \
          THEN 1 ELSE 0 END)"
    )
}

/// SQL condition that holds when `team` played in `game`.
pub(crate) fn team_played(game: &str, team: &str) -> String {
    format!("({team} = {game}.home_team OR {team} = {game}.away_team)")
}

/// SQL expression for the team `team` faced in `game`.
pub(crate) fn opponent_of(game: &str, team: &str) -> String {
    format!("(CASE WHEN {team} = {game}.home_team THEN {game}.away_team ELSE {game}.home_team END)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn evaluate(expr: &str, home_win: bool, team: &str) -> i64 {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE games (home_team TEXT, away_team TEXT, home_win INTEGER);",
        )
        .unwrap();
        conn.execute(
            "INSERT INTO games VALUES ('KC', 'BAL', ?)",
            [home_win as i64],
        )
        .unwrap();
        conn.query_row(
            &format!("SELECT {expr} FROM games g, (SELECT ? AS team) t"),
            [team],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_home_and_away_wins() {
        let won = team_won("g", "t.team");
        assert_eq!(evaluate(&won, true, "KC"), 1);
        assert_eq!(evaluate(&won, true, "BAL"), 0);
        assert_eq!(evaluate(&won, false, "KC"), 0);
        assert_eq!(evaluate(&won, false, "BAL"), 1);
    }

    #[test]
    fn test_won_and_lost_partition_every_played_game() {
        let won = team_won("g", "t.team");
        let lost = team_lost("g", "t.team");
        for home_win in [true, false] {
            for team in ["KC", "BAL"] {
                assert_eq!(evaluate(&won, home_win, team) + evaluate(&lost, home_win, team), 1);
            }
        }
    }

    #[test]
    fn test_bystander_neither_wins_nor_loses() {
        let won = team_won("g", "t.team");
        let lost = team_lost("g", "t.team");
        let played = team_played("g", "t.team");
        assert_eq!(evaluate(&won, true, "SF"), 0);
        assert_eq!(evaluate(&lost, true, "SF"), 0);
        assert_eq!(evaluate(&played, true, "SF"), 0);
        assert_eq!(evaluate(&played, true, "BAL"), 1);
    }

    #[test]
    fn test_opponent_resolution() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE games (home_team TEXT, away_team TEXT, home_win INTEGER);
             INSERT INTO games VALUES ('KC', 'BAL', 1);",
        )
        .unwrap();
        let opponent: String = conn
            .query_row(
                &format!("SELECT {} FROM games g", opponent_of("g", "'BAL'")),
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(opponent, "KC");
    }
}
