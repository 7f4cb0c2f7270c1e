//! Integration tests for command handlers against an on-disk database

use clap::Parser;
use nfl_stats::{
    cli::{Commands, ManageCmd, NflStats},
    commands::{
        common::CommandContext,
        leaderboard::format_leaderboard,
        manage::apply,
        player::{build_player_report, PlayerParams},
        team::{format_team_report, TeamReport},
    },
    core::StatsConfig,
    dashboard, LeaderboardKind, PlayerId, Season, StatCategory, TeamCode,
};
use tempfile::TempDir;

fn manage_cmd(args: &[&str]) -> ManageCmd {
    let mut argv = vec!["nfl-stats", "manage"];
    argv.extend_from_slice(args);
    match NflStats::try_parse_from(argv).unwrap().command {
        Commands::Manage { cmd } => cmd,
        other => panic!("unexpected command: {other:?}"),
    }
}

fn open(dir: &TempDir, as_json: bool) -> CommandContext {
    CommandContext::open(
        StatsConfig::default(),
        Some(dir.path().join("nested").join("stats.sqlite")),
        as_json,
    )
    .unwrap()
}

fn run(ctx: &mut CommandContext, args: &[&str]) {
    let outcome = apply(ctx, manage_cmd(args));
    assert!(outcome.ok, "{} failed", outcome.action);
}

fn seed(ctx: &mut CommandContext) {
    run(ctx, &["add-team", "KC", "--name", "Chiefs", "--city", "Kansas City", "--conference", "AFC", "--division", "West"]);
    run(ctx, &["add-team", "BAL", "--name", "Ravens", "--city", "Baltimore", "--conference", "AFC", "--division", "North"]);
    run(ctx, &["add-coach", "1", "--name", "Andy Reid", "--team", "KC", "-s", "2024"]);
    run(ctx, &["add-player", "00-0033873", "--name", "Patrick Mahomes", "-p", "QB", "--team", "KC", "-s", "2024"]);
    run(ctx, &["add-player", "00-0032764", "--name", "Derrick Henry", "-p", "RB", "--team", "BAL", "-s", "2024"]);
    run(ctx, &["add-game", "2024_01_BAL_KC", "-s", "2024", "-w", "1", "--away", "BAL", "--home", "KC", "--home-win"]);
    run(ctx, &["add-game", "2024_02_KC_BAL", "-s", "2024", "-w", "2", "--away", "KC", "--home", "BAL"]);
    run(ctx, &["add-stats", "00-0033873", "--team", "KC", "-s", "2024", "-w", "1", "--passing-yards", "291", "--pass-touchdown", "1", "--interception", "1"]);
    run(ctx, &["add-stats", "00-0033873", "--team", "KC", "-s", "2024", "-w", "2", "--passing-yards", "210", "--pass-touchdown", "2"]);
    run(ctx, &["add-stats", "00-0032764", "--team", "BAL", "-s", "2024", "-w", "1", "--rushing-yards", "151", "--rush-touchdown", "1"]);
    run(ctx, &["add-stats", "00-0032764", "--team", "BAL", "-s", "2024", "-w", "2", "--rushing-yards", "199", "--rush-touchdown", "2"]);
}

#[test]
fn test_open_creates_database_file_and_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let ctx = open(&dir, false);

    let path = dir.path().join("nested").join("stats.sqlite");
    assert!(path.exists());
    assert_eq!(ctx.db.path(), Some(path.as_path()));
}

#[test]
fn test_data_persists_across_contexts() {
    let dir = TempDir::new().unwrap();
    {
        let mut ctx = open(&dir, false);
        seed(&mut ctx);
    }

    let ctx = open(&dir, false);
    let record = dashboard::get_team_record(&ctx.db, &TeamCode::new("KC"), Season::new(2024));
    assert_eq!((record.wins, record.losses), (2, 0));

    let record = dashboard::get_team_record(&ctx.db, &TeamCode::new("BAL"), Season::new(2024));
    assert_eq!((record.wins, record.losses), (0, 2));
}

#[test]
fn test_team_report_text() {
    let dir = TempDir::new().unwrap();
    let mut ctx = open(&dir, false);
    seed(&mut ctx);

    let team = TeamCode::new("KC");
    let season = Season::new(2024);
    let report = TeamReport {
        team: team.clone(),
        season,
        record: dashboard::get_team_record(&ctx.db, &team, season),
        schedule: dashboard::get_team_schedule(&ctx.db, &team, season),
    };

    let text = format_team_report(&report);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["KC 2024 (2-0)", "Week  1  vs BAL  Win", "Week  2  @  BAL  Win"]);
}

#[test]
fn test_leaderboard_json_output() {
    let dir = TempDir::new().unwrap();
    let mut ctx = open(&dir, true);
    seed(&mut ctx);

    let entries = dashboard::list_leaderboard(&ctx.db, LeaderboardKind::TopRbs, Season::new(2024));
    let rendered = ctx
        .render(&entries, |e| format_leaderboard(LeaderboardKind::TopRbs, Season::new(2024), e))
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(json[0]["player_name"], "Derrick Henry");
    assert_eq!(json[0]["value"], 350.0);
    // Only the interception boards carry a touchdown total
    assert!(json[0].get("total_touchdowns").is_none());
}

#[test]
fn test_player_report_json_omits_disabled_categories() {
    let dir = TempDir::new().unwrap();
    let mut ctx = open(&dir, true);
    seed(&mut ctx);

    let report = build_player_report(
        &ctx,
        &PlayerParams {
            player_id: Some(PlayerId::new("00-0033873")),
            categories: Some(vec![StatCategory::Passing]),
            matchups: true,
            ..Default::default()
        },
    )
    .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    let stats = &json["career"]["career_stats"];
    assert_eq!(stats["total_games_played"], 2);
    assert_eq!(stats["total_passing_yards"], 501.0);
    assert_eq!(stats["total_pass_tds"], 3);
    assert!(stats.get("total_rushing_yards").is_none());
    assert!(stats.get("total_interceptions").is_none());

    let matchups = json["matchups"].as_array().unwrap();
    assert_eq!(matchups.len(), 2);
    assert_eq!(matchups[0]["week"], 2);
    assert_eq!(matchups[0]["opponent_name"], "Ravens");
    assert_eq!(matchups[0]["game_result"], "Win");
}

#[test]
fn test_delete_player_through_commands() {
    let dir = TempDir::new().unwrap();
    let mut ctx = open(&dir, false);
    seed(&mut ctx);

    run(&mut ctx, &["delete-player", "00-0032764"]);

    assert!(dashboard::get_career(&ctx.db, &PlayerId::new("00-0032764"), Default::default()).is_none());
    assert!(dashboard::list_leaderboard(&ctx.db, LeaderboardKind::TopRbs, Season::new(2024)).is_empty());
    // Deleting again still reports success
    run(&mut ctx, &["delete-player", "00-0032764"]);
}

#[test]
fn test_failed_write_is_reported() {
    let dir = TempDir::new().unwrap();
    let mut ctx = open(&dir, false);
    seed(&mut ctx);

    let outcome = apply(
        &mut ctx,
        manage_cmd(&["add-player", "00-0033873", "--name", "Dupe", "-p", "QB", "--team", "KC"]),
    );
    assert!(!outcome.ok);

    let outcome = apply(&mut ctx, manage_cmd(&["update-team", "XYZ", "--city", "Nowhere"]));
    assert!(!outcome.ok);
}
