//! Career aggregation: bio, team tenure and lifetime totals

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{PlayerId, Season, StatCategories, StatCategory, TeamCode};
use crate::error::Result;
use rusqlite::params;
use tracing::warn;

/// Every lifetime sum, before the enabled categories are applied
#[derive(Debug, Clone, Default, PartialEq)]
struct RawCareerSums {
    games_played: u32,
    passing_yards: f64,
    pass_tds: u32,
    rushing_yards: f64,
    rush_tds: u32,
    receiving_yards: f64,
    receiving_tds: u32,
    receptions: u32,
    interceptions: u32,
    fumbles: u32,
    fumbles_lost: u32,
}

impl RawCareerSums {
    /// Keep only the sub-aggregations for enabled categories
    fn project(&self, categories: StatCategories) -> CareerTotals {
        CareerTotals {
            total_games_played: self.games_played,
            passing: categories
                .contains(StatCategory::Passing)
                .then(|| PassingTotals {
                    total_passing_yards: self.passing_yards,
                    total_pass_tds: self.pass_tds,
                }),
            rushing: categories
                .contains(StatCategory::Rushing)
                .then(|| RushingTotals {
                    total_rushing_yards: self.rushing_yards,
                    total_rush_tds: self.rush_tds,
                }),
            receiving: categories
                .contains(StatCategory::Receiving)
                .then(|| ReceivingTotals {
                    total_receiving_yards: self.receiving_yards,
                    total_receiving_tds: self.receiving_tds,
                    total_receptions: self.receptions,
                }),
            turnovers: categories
                .contains(StatCategory::Turnovers)
                .then(|| TurnoverTotals {
                    total_interceptions: self.interceptions,
                    total_fumbles: self.fumbles,
                    total_fumbles_lost: self.fumbles_lost,
                }),
        }
    }
}

impl StatsDatabase {
    /// Build a player's career profile, or `None` if the player does not exist
    pub fn career_profile(
        &self,
        player_id: &PlayerId,
        categories: StatCategories,
    ) -> Result<Option<CareerProfile>> {
        let Some(bio) = self.get_player(player_id)? else {
            warn!(player_id = %player_id, "career requested for unknown player");
            return Ok(None);
        };

        let teams = self.team_tenures(player_id)?;
        let career_stats = self.career_sums(player_id)?.project(categories);

        Ok(Some(CareerProfile {
            bio,
            teams,
            career_stats,
        }))
    }

    /// Teams a player has appeared for, each with the first season on record
    pub fn team_tenures(&self, player_id: &PlayerId) -> Result<Vec<TeamTenure>> {
        let mut stmt = self.conn.prepare(
            "SELECT team, MIN(season) AS year_signed
             FROM player_history
             WHERE player_id = ?
             GROUP BY team
             ORDER BY year_signed ASC",
        )?;

        let rows = stmt.query_map(params![player_id.as_str()], |row| {
            Ok(TeamTenure {
                team: TeamCode::new(row.get::<_, String>(0)?),
                year_signed: Season::new(row.get(1)?),
            })
        })?;

        let mut tenures = Vec::new();
        for row in rows {
            tenures.push(row?);
        }
        Ok(tenures)
    }

    fn career_sums(&self, player_id: &PlayerId) -> Result<RawCareerSums> {
        let sums = self.conn.query_row(
            "SELECT COUNT(*),
                    COALESCE(SUM(passing_yards), 0),
                    COALESCE(SUM(pass_touchdown), 0),
                    COALESCE(SUM(rushing_yards), 0),
                    COALESCE(SUM(rush_touchdown), 0),
                    COALESCE(SUM(receiving_yards), 0),
                    COALESCE(SUM(receiving_touchdown), 0),
                    COALESCE(SUM(receptions), 0),
                    COALESCE(SUM(interception), 0),
                    COALESCE(SUM(fumble), 0),
                    COALESCE(SUM(fumble_lost), 0)
             FROM player_game_stats
             WHERE player_id = ?",
            params![player_id.as_str()],
            |row| {
                Ok(RawCareerSums {
                    games_played: row.get(0)?,
                    passing_yards: row.get(1)?,
                    pass_tds: row.get(2)?,
                    rushing_yards: row.get(3)?,
                    rush_tds: row.get(4)?,
                    receiving_yards: row.get(5)?,
                    receiving_tds: row.get(6)?,
                    receptions: row.get(7)?,
                    interceptions: row.get(8)?,
                    fumbles: row.get(9)?,
                    fumbles_lost: row.get(10)?,
                })
            },
        )?;
        Ok(sums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sums() -> RawCareerSums {
        RawCareerSums {
            games_played: 17,
            passing_yards: 4183.0,
            pass_tds: 38,
            rushing_yards: 331.0,
            rush_tds: 4,
            receptions: 1,
            interceptions: 14,
            fumbles: 6,
            fumbles_lost: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_projection_omits_disabled_categories() {
        let totals = sample_sums().project(StatCategories::none().with(StatCategory::Passing));
        assert_eq!(totals.total_games_played, 17);
        assert_eq!(
            totals.passing,
            Some(PassingTotals {
                total_passing_yards: 4183.0,
                total_pass_tds: 38
            })
        );
        assert!(totals.rushing.is_none());
        assert!(totals.receiving.is_none());
        assert!(totals.turnovers.is_none());
    }

    #[test]
    fn test_projection_never_changes_games_played() {
        let sums = sample_sums();
        assert_eq!(sums.project(StatCategories::none()).total_games_played, 17);
        assert_eq!(sums.project(StatCategories::all()).total_games_played, 17);
    }

    #[test]
    fn test_projection_serializes_only_enabled_fields() {
        let totals = sample_sums().project(StatCategories::none().with(StatCategory::Turnovers));
        let json = serde_json::to_value(&totals).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object["total_games_played"], 17);
        assert_eq!(object["total_interceptions"], 14);
        assert!(!object.contains_key("total_passing_yards"));
        assert!(!object.contains_key("total_receptions"));
    }
}
