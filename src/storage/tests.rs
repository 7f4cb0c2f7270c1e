//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{CoachId, GameId, PlayerId, Position, Season, SeasonType, TeamCode, Week};
use crate::error::StatsError;

fn create_test_db() -> StatsDatabase {
    StatsDatabase::new_in_memory().unwrap()
}

fn team(code: &str, name: &str, conference: &str, division: &str) -> Team {
    Team {
        team: TeamCode::new(code),
        team_name: name.to_string(),
        city: name.to_string(),
        conference: conference.to_string(),
        division: division.to_string(),
    }
}

fn test_player(id: &str, team: &str) -> Player {
    Player {
        player_id: PlayerId::new(id),
        player_name: "Testy McTesterson".to_string(),
        position: Position::QB,
        birth_year: 2000,
        draft_year: 2022,
        draft_ovr: 1,
        height: 72,
        weight: 200,
        team: TeamCode::new(team),
        season: Season::new(2025),
    }
}

fn create_test_db_with_teams() -> StatsDatabase {
    let mut db = create_test_db();
    db.add_team(&team("SF", "49ers", "NFC", "West")).unwrap();
    db.add_team(&team("KC", "Chiefs", "AFC", "West")).unwrap();
    db
}

fn count_rows(db: &StatsDatabase, table: &str) -> i64 {
    db.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .unwrap()
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
    // Should not panic - database creation successful
}

#[test]
fn test_schema_initialization_is_idempotent() {
    let mut db = create_test_db_with_teams();
    db.initialize_schema().unwrap();
    assert_eq!(count_rows(&db, "teams"), 2);
}

#[test]
fn test_foreign_keys_are_enforced() {
    let enabled: i64 = create_test_db()
        .conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn test_add_team_creates_vacant_coach_slot() {
    let db = create_test_db_with_teams();

    let slot = db.get_coach_slot(&TeamCode::new("SF")).unwrap().unwrap();
    assert_eq!(slot.status, CoachStatus::Vacant);
    assert!(slot.coach.is_none());

    let sf = db.get_team(&TeamCode::new("SF")).unwrap().unwrap();
    assert_eq!(sf.team_name, "49ers");
    assert_eq!(sf.conference, "NFC");
}

#[test]
fn test_add_duplicate_team_fails() {
    let mut db = create_test_db_with_teams();
    let err = db.add_team(&team("SF", "Other", "NFC", "West")).unwrap_err();
    assert!(err.is_constraint_violation());
    assert_eq!(count_rows(&db, "coaches"), 2);
}

#[test]
fn test_update_team_city_and_name() {
    let mut db = create_test_db_with_teams();
    let sf = TeamCode::new("SF");

    db.update_team_city(&sf, "Santa Clara").unwrap();
    db.update_team_name(&sf, "Niners").unwrap();

    let updated = db.get_team(&sf).unwrap().unwrap();
    assert_eq!(updated.city, "Santa Clara");
    assert_eq!(updated.team_name, "Niners");

    let missing = TeamCode::new("XYZ");
    assert!(matches!(
        db.update_team_city(&missing, "Nowhere"),
        Err(StatsError::TeamNotFound { .. })
    ));
}

#[test]
fn test_add_player_writes_first_history_row() {
    let mut db = create_test_db_with_teams();
    let player = test_player("TEST_001", "SF");

    db.add_player(&player, Week::new(1)).unwrap();

    assert_eq!(db.get_player(&player.player_id).unwrap(), Some(player.clone()));
    let history = db.get_player_history(&player.player_id).unwrap();
    assert_eq!(
        history,
        vec![PlayerHistoryEntry {
            player_id: player.player_id.clone(),
            season: Season::new(2025),
            week: Week::new(1),
            team: TeamCode::new("SF"),
        }]
    );
}

#[test]
fn test_add_duplicate_player_is_atomic() {
    let mut db = create_test_db_with_teams();
    let player = test_player("TEST_001", "SF");
    db.add_player(&player, Week::new(1)).unwrap();

    let duplicate = Player {
        team: TeamCode::new("KC"),
        ..player.clone()
    };
    let err = db.add_player(&duplicate, Week::new(1)).unwrap_err();

    assert!(err.is_constraint_violation());
    assert_eq!(count_rows(&db, "players"), 1);
    assert_eq!(count_rows(&db, "player_history"), 1);
    assert_eq!(
        db.get_player(&player.player_id).unwrap().unwrap().team,
        TeamCode::new("SF")
    );
}

#[test]
fn test_add_player_with_unknown_team_fails() {
    let mut db = create_test_db_with_teams();
    let err = db
        .add_player(&test_player("TEST_002", "XYZ"), Week::new(1))
        .unwrap_err();

    assert!(err.is_constraint_violation());
    assert_eq!(count_rows(&db, "players"), 0);
    assert_eq!(count_rows(&db, "player_history"), 0);
}

#[test]
fn test_update_player_team_appends_history() {
    let mut db = create_test_db_with_teams();
    let player = test_player("TEST_001", "SF");
    db.add_player(&player, Week::new(1)).unwrap();

    db.update_player_team(&player.player_id, &TeamCode::new("KC"), Season::new(2025), Week::new(9))
        .unwrap();

    let stored = db.get_player(&player.player_id).unwrap().unwrap();
    assert_eq!(stored.team, TeamCode::new("KC"));

    let history = db.get_player_history(&player.player_id).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].team, TeamCode::new("KC"));
    assert_eq!(history[1].week, Week::new(9));
}

#[test]
fn test_update_player_team_for_unknown_player_writes_nothing() {
    let mut db = create_test_db_with_teams();
    let ghost = PlayerId::new("GHOST");

    let result = db.update_player_team(&ghost, &TeamCode::new("KC"), Season::new(2025), Week::new(1));

    assert!(matches!(result, Err(StatsError::PlayerNotFound { .. })));
    assert_eq!(count_rows(&db, "player_history"), 0);
}

#[test]
fn test_single_column_player_updates() {
    let mut db = create_test_db_with_teams();
    let player = test_player("TEST_001", "SF");
    db.add_player(&player, Week::new(1)).unwrap();

    db.update_player_position(&player.player_id, Position::WR).unwrap();
    db.update_player_weight(&player.player_id, 215).unwrap();
    db.update_player_name(&player.player_id, "Renamed Player").unwrap();

    let stored = db.get_player(&player.player_id).unwrap().unwrap();
    assert_eq!(stored.position, Position::WR);
    assert_eq!(stored.weight, 215);
    assert_eq!(stored.player_name, "Renamed Player");
    // No history for single-column updates
    assert_eq!(count_rows(&db, "player_history"), 1);

    let ghost = PlayerId::new("GHOST");
    assert!(db.update_player_weight(&ghost, 180).is_err());
    assert!(db.update_player_name(&ghost, "Nobody").is_err());
    assert!(db.update_player_position(&ghost, Position::K).is_err());
}

#[test]
fn test_delete_player_cascades_explicitly() {
    let mut db = create_test_db_with_teams();
    let player = test_player("TEST_001", "SF");
    db.add_player(&player, Week::new(1)).unwrap();
    db.update_player_team(&player.player_id, &TeamCode::new("KC"), Season::new(2025), Week::new(5))
        .unwrap();
    db.add_player_game_stats(&PlayerGameStats {
        passing_yards: 350.5,
        pass_touchdown: 3,
        interception: 1,
        ..PlayerGameStats::empty(
            player.player_id.clone(),
            Season::new(2025),
            Week::new(1),
            TeamCode::new("SF"),
        )
    })
    .unwrap();

    assert!(db.delete_player(&player.player_id).unwrap());

    assert_eq!(count_rows(&db, "players"), 0);
    assert_eq!(count_rows(&db, "player_history"), 0);
    assert_eq!(count_rows(&db, "player_game_stats"), 0);
}

#[test]
fn test_delete_unknown_player_reports_false() {
    let mut db = create_test_db_with_teams();
    assert!(!db.delete_player(&PlayerId::new("GHOST")).unwrap());
}

#[test]
fn test_game_stats_add_and_delete() {
    let mut db = create_test_db_with_teams();
    let player = test_player("TEST_001", "SF");
    db.add_player(&player, Week::new(1)).unwrap();

    let line = PlayerGameStats {
        rushing_yards: 20.0,
        rush_touchdown: 1,
        ..PlayerGameStats::empty(
            player.player_id.clone(),
            Season::new(2025),
            Week::new(1),
            TeamCode::new("SF"),
        )
    };
    db.add_player_game_stats(&line).unwrap();
    assert_eq!(db.get_player_game_stats(&player.player_id).unwrap(), vec![line.clone()]);

    // Corrections are delete + reinsert, never an in-place update
    assert!(db.add_player_game_stats(&line).unwrap_err().is_constraint_violation());

    assert!(db
        .delete_player_game_stats(&player.player_id, Season::new(2025), Week::new(1))
        .unwrap());
    assert!(!db
        .delete_player_game_stats(&player.player_id, Season::new(2025), Week::new(1))
        .unwrap());
}

#[test]
fn test_game_stats_for_unknown_player_fail() {
    let mut db = create_test_db_with_teams();
    let line = PlayerGameStats::empty(
        PlayerId::new("GHOST"),
        Season::new(2025),
        Week::new(1),
        TeamCode::new("SF"),
    );
    assert!(db.add_player_game_stats(&line).unwrap_err().is_constraint_violation());
}

#[test]
fn test_add_coach_fills_slot_and_logs_hire() {
    let mut db = create_test_db_with_teams();
    let coach = Coach {
        coach_id: CoachId::new(9999),
        name: "Coach Beard".to_string(),
    };

    db.add_coach(&coach, &TeamCode::new("SF"), Season::new(2025)).unwrap();

    let slot = db.get_coach_slot(&TeamCode::new("SF")).unwrap().unwrap();
    assert_eq!(slot.status, CoachStatus::Active);
    assert_eq!(slot.coach, Some(coach.clone()));

    let history = db.get_coach_history(&TeamCode::new("SF")).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].name, "Coach Beard");
    assert_eq!(history[0].season, Season::new(2025));
}

#[test]
fn test_add_coach_to_unknown_team_fails_without_history() {
    let mut db = create_test_db_with_teams();
    let coach = Coach {
        coach_id: CoachId::new(1),
        name: "Nobody".to_string(),
    };

    let result = db.add_coach(&coach, &TeamCode::new("XYZ"), Season::new(2025));

    assert!(matches!(result, Err(StatsError::TeamNotFound { .. })));
    assert_eq!(count_rows(&db, "coach_history"), 0);
}

#[test]
fn test_delete_coach_vacates_slot_and_keeps_ledger() {
    let mut db = create_test_db_with_teams();
    let coach = Coach {
        coach_id: CoachId::new(9999),
        name: "Coach Beard".to_string(),
    };
    db.add_coach(&coach, &TeamCode::new("SF"), Season::new(2025)).unwrap();

    assert!(db.delete_coach(CoachId::new(9999)).unwrap());

    let slot = db.get_coach_slot(&TeamCode::new("SF")).unwrap().unwrap();
    assert_eq!(slot.status, CoachStatus::Vacant);
    assert!(slot.coach.is_none());
    assert_eq!(db.get_coach_history(&TeamCode::new("SF")).unwrap().len(), 1);

    // Nothing left to vacate
    assert!(!db.delete_coach(CoachId::new(9999)).unwrap());
}

#[test]
fn test_add_and_delete_game() {
    let mut db = create_test_db_with_teams();
    let game = Game {
        game_id: GameId::new("2025_01_KC_SF"),
        season: Season::new(2025),
        week: Week::new(1),
        season_type: SeasonType::Regular,
        away_team: TeamCode::new("KC"),
        home_team: TeamCode::new("SF"),
        home_win: true,
    };

    db.add_game(&game).unwrap();
    assert_eq!(db.get_game(&game.game_id).unwrap(), Some(game.clone()));
    assert!(db.add_game(&game).unwrap_err().is_constraint_violation());

    assert!(db.delete_game(&game.game_id).unwrap());
    assert_eq!(db.get_game(&game.game_id).unwrap(), None);
    assert!(!db.delete_game(&game.game_id).unwrap());
}

#[test]
fn test_game_with_unknown_team_fails() {
    let mut db = create_test_db_with_teams();
    let game = Game {
        game_id: GameId::new("2025_01_KC_XYZ"),
        season: Season::new(2025),
        week: Week::new(1),
        season_type: SeasonType::Regular,
        away_team: TeamCode::new("KC"),
        home_team: TeamCode::new("XYZ"),
        home_win: false,
    };
    assert!(db.add_game(&game).unwrap_err().is_constraint_violation());
}

#[test]
fn test_record_and_schedule_for_team_without_games() {
    let db = create_test_db_with_teams();
    let sf = TeamCode::new("SF");

    assert_eq!(db.team_record(&sf, Season::new(2025)).unwrap(), TeamRecord::default());
    assert!(db.team_schedule(&sf, Season::new(2025)).unwrap().is_empty());
}

#[test]
fn test_career_for_unknown_player_is_absent() {
    let db = create_test_db_with_teams();
    let profile = db
        .career_profile(&PlayerId::new("GHOST"), crate::StatCategories::all())
        .unwrap();
    assert!(profile.is_none());
}

#[test]
fn test_players_only_store_known_position_codes() {
    let mut db = create_test_db_with_teams();
    for (i, position) in Position::ALL.into_iter().enumerate() {
        let player = Player {
            position,
            ..test_player(&format!("P{i}"), "KC")
        };
        db.add_player(&player, Week::new(1)).unwrap();
        assert_eq!(db.get_player(&player.player_id).unwrap().unwrap().position, position);
    }

    // A code outside the enum is refused at write time rather than failing on read
    let err = db
        .conn
        .execute("UPDATE players SET position = 'ZZ' WHERE player_id = 'P0'", [])
        .unwrap_err();
    assert!(StatsError::from(err).is_constraint_violation());
    assert_eq!(
        db.get_player(&PlayerId::new("P0")).unwrap().unwrap().position,
        Position::QB
    );
}

#[test]
fn test_combined_player_update_is_all_or_nothing() {
    let mut db = create_test_db_with_teams();
    let player_id = PlayerId::new("X1");
    db.add_player(&test_player("X1", "KC"), Week::new(1)).unwrap();

    let result = db.update_player(
        &player_id,
        &PlayerUpdate {
            player_name: Some("Renamed".to_string()),
            weight: Some(250),
            team: Some(TeamMove {
                team: TeamCode::new("XYZ"),
                season: Season::new(2025),
                week: Week::new(8),
            }),
            ..Default::default()
        },
    );
    assert!(result.unwrap_err().is_constraint_violation());

    let player = db.get_player(&player_id).unwrap().unwrap();
    assert_eq!(player.player_name, "Testy McTesterson");
    assert_eq!(player.weight, 200);
    assert_eq!(player.team, TeamCode::new("KC"));
    assert_eq!(db.get_player_history(&player_id).unwrap().len(), 1);

    db.update_player(
        &player_id,
        &PlayerUpdate {
            weight: Some(250),
            position: Some(Position::TE),
            team: Some(TeamMove {
                team: TeamCode::new("SF"),
                season: Season::new(2025),
                week: Week::new(8),
            }),
            ..Default::default()
        },
    )
    .unwrap();

    let player = db.get_player(&player_id).unwrap().unwrap();
    assert_eq!((player.weight, player.position), (250, Position::TE));
    assert_eq!(player.team, TeamCode::new("SF"));
    assert_eq!(db.get_player_history(&player_id).unwrap().len(), 2);
}

#[test]
fn test_combined_team_update() {
    let mut db = create_test_db_with_teams();
    let sf = TeamCode::new("SF");

    db.update_team(
        &sf,
        &TeamUpdate {
            city: Some("Santa Clara".to_string()),
            team_name: Some("Niners".to_string()),
        },
    )
    .unwrap();
    let team = db.get_team(&sf).unwrap().unwrap();
    assert_eq!((team.city.as_str(), team.team_name.as_str()), ("Santa Clara", "Niners"));

    let result = db.update_team(&TeamCode::new("XYZ"), &TeamUpdate::default());
    assert!(matches!(result, Err(StatsError::TeamNotFound { .. })));
}

#[test]
fn test_find_player_by_name_exact_match_only() {
    let mut db = create_test_db_with_teams();
    db.add_player(&test_player("TEST_001", "SF"), Week::new(1)).unwrap();

    let found = db.find_player_by_name("Testy McTesterson").unwrap().unwrap();
    assert_eq!(found.player_id, PlayerId::new("TEST_001"));
    assert!(db.find_player_by_name("Testy").unwrap().is_none());
}
