//! Database schema and connection management

use crate::cli::types::Position;
use crate::error::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Connection handle for the statistics store.
///
/// One handle is opened per request context and released when dropped. Every
/// query and mutation is a method on this handle, so callers always pass the
/// connection explicitly.
pub struct StatsDatabase {
    pub(crate) conn: Connection,
    path: Option<PathBuf>,
}

impl StatsDatabase {
    /// Open (or create) the database at `path` and ensure the tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let mut db = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        db.initialize_schema()?;
        debug!(path = %path.display(), "opened stats database");
        Ok(db)
    }

    /// Create a private in-memory database, used by tests and dry runs
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn, path: None };
        db.initialize_schema()?;
        Ok(db)
    }

    /// File backing this database, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        let tx = self.conn.transaction()?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                team TEXT PRIMARY KEY,
                team_name TEXT NOT NULL,
                city TEXT NOT NULL,
                conference TEXT NOT NULL,
                division TEXT NOT NULL
            )",
            [],
        )?;

        // Only codes that read back as a Position are accepted
        let position_codes = Position::ALL
            .iter()
            .map(|p| format!("'{}'", p.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        tx.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS players (
                    player_id TEXT PRIMARY KEY,
                    player_name TEXT NOT NULL,
                    birth_year INTEGER NOT NULL,
                    draft_year INTEGER NOT NULL,
                    draft_ovr INTEGER NOT NULL,
                    height INTEGER NOT NULL,
                    weight INTEGER NOT NULL,
                    position TEXT NOT NULL CHECK (position IN ({position_codes})),
                    season INTEGER NOT NULL,
                    team TEXT NOT NULL REFERENCES teams(team)
                )"
            ),
            [],
        )?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS player_history (
                player_id TEXT NOT NULL REFERENCES players(player_id),
                season INTEGER NOT NULL,
                week INTEGER NOT NULL,
                team TEXT NOT NULL REFERENCES teams(team)
            )",
            [],
        )?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS player_game_stats (
                player_id TEXT NOT NULL REFERENCES players(player_id),
                season INTEGER NOT NULL,
                week INTEGER NOT NULL,
                team TEXT NOT NULL REFERENCES teams(team),
                passing_yards REAL NOT NULL DEFAULT 0,
                rushing_yards REAL NOT NULL DEFAULT 0,
                receiving_yards REAL NOT NULL DEFAULT 0,
                receptions INTEGER NOT NULL DEFAULT 0,
                pass_touchdown INTEGER NOT NULL DEFAULT 0,
                rush_touchdown INTEGER NOT NULL DEFAULT 0,
                receiving_touchdown INTEGER NOT NULL DEFAULT 0,
                interception INTEGER NOT NULL DEFAULT 0,
                fumble INTEGER NOT NULL DEFAULT 0,
                fumble_lost INTEGER NOT NULL DEFAULT 0,
                safety INTEGER NOT NULL DEFAULT 0,
                PRIMARY KEY (player_id, season, week)
            )",
            [],
        )?;

        // One slot per team; coach_id is NULL while the slot is vacant
        tx.execute(
            "CREATE TABLE IF NOT EXISTS coaches (
                team TEXT PRIMARY KEY REFERENCES teams(team),
                coach_id INTEGER,
                name TEXT,
                status TEXT NOT NULL DEFAULT 'vacant'
                    CHECK (status IN ('active', 'vacant')),
                CHECK ((status = 'active') = (coach_id IS NOT NULL))
            )",
            [],
        )?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS coach_history (
                season INTEGER NOT NULL,
                coach_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                team TEXT NOT NULL REFERENCES teams(team)
            )",
            [],
        )?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS games (
                game_id TEXT PRIMARY KEY,
                season INTEGER NOT NULL,
                week INTEGER NOT NULL,
                season_type TEXT NOT NULL CHECK (season_type IN ('REG', 'POST')),
                away_team TEXT NOT NULL REFERENCES teams(team),
                home_team TEXT NOT NULL REFERENCES teams(team),
                home_win INTEGER NOT NULL CHECK (home_win IN (0, 1))
            )",
            [],
        )?;

        // Create indexes for performance
        tx.execute(
            "CREATE INDEX IF NOT EXISTS idx_stats_season_week
             ON player_game_stats(season, week)",
            [],
        )?;

        tx.execute(
            "CREATE INDEX IF NOT EXISTS idx_games_season_week
             ON games(season, week)",
            [],
        )?;

        tx.execute(
            "CREATE INDEX IF NOT EXISTS idx_player_history_player
             ON player_history(player_id)",
            [],
        )?;

        tx.execute(
            "CREATE INDEX IF NOT EXISTS idx_coach_history_team_season
             ON coach_history(team, season)",
            [],
        )?;

        tx.commit()?;
        Ok(())
    }
}
