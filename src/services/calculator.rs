use log::debug;
use serde_json::Value;

use crate::draft::{round2, PoolEntry, Position, ScoringConfig, ScoringMode};
use crate::errors::{recover, ProviderError};
use crate::provider::parsers::{defense_projection, parse_points, player_projection};
use crate::provider::{Endpoint, StatsProvider};

/// Weekly projected points for drafted entries.
///
/// The projections document is fetched on first use and shared by every
/// later lookup.
pub struct ProjectionCalculator<'a> {
    provider: &'a dyn StatsProvider,
    season: String,
    week: u32,
    mode: ScoringMode,
    projections: Option<Value>,
}

impl<'a> ProjectionCalculator<'a> {
    pub fn new(provider: &'a dyn StatsProvider, season: &str, week: u32, mode: ScoringMode) -> Self {
        Self {
            provider,
            season: season.to_string(),
            week,
            mode,
            projections: None,
        }
    }

    /// Points for `entry` playing for `team_code`; 0.0 when nothing usable is projected
    pub async fn points_for(&mut self, entry: &PoolEntry, team_code: &str) -> Result<f64, ProviderError> {
        let mode_key = self.mode.provider_key();
        let projections = self.projections().await?;

        let projection = match entry.position {
            Position::DST => defense_projection(projections, team_code),
            _ => entry
                .player_id
                .as_deref()
                .and_then(|id| player_projection(projections, id)),
        };

        let points = projection
            .and_then(|p| parse_points(p, mode_key))
            .unwrap_or_else(|| {
                debug!("No projection for {}", entry.name);
                0.0
            });
        Ok(round2(points.max(0.0)))
    }

    pub fn has_fetched(&self) -> bool {
        self.projections.is_some()
    }

    async fn projections(&mut self) -> Result<&Value, ProviderError> {
        if self.projections.is_none() {
            let mut query = vec![
                ("week", self.week.to_string()),
                ("archiveSeason", self.season.clone()),
            ];
            query.extend(ScoringConfig::for_mode(self.mode).to_query());

            let raw = self.provider.fetch(Endpoint::Projections, query).await;
            self.projections = Some(recover(raw, Value::Null, "Projections")?);
        }
        Ok(self.projections.get_or_insert(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::stub::StubProvider;
    use serde_json::json;

    fn player(name: &str, id: Option<&str>, position: Position) -> PoolEntry {
        PoolEntry {
            name: name.to_string(),
            adp: 10.0,
            player_id: id.map(str::to_string),
            position,
        }
    }

    fn projections() -> Value {
        json!({"body": {
            "playerProjections": {
                "101": {"fantasyPointsDefault": {"standard": "11.256", "PPR": "15.1"}},
                "102": {"fantasyPoints": "-1.5"}
            },
            "teamDefenseProjections": [{"teamAbv": "JAC", "fantasyPoints": "7.25"}]
        }})
    }

    #[tokio::test]
    async fn test_points_follow_scoring_mode() {
        let stub = StubProvider::new().with(Endpoint::Projections, projections());
        let mut calc = ProjectionCalculator::new(&stub, "2025", 4, ScoringMode::Standard);

        let points = calc.points_for(&player("A", Some("101"), Position::RB), "BUF").await.unwrap();
        assert_eq!(points, 11.26);

        let query = &stub.queries_to(Endpoint::Projections)[0];
        assert!(query.contains(&("week", "4".to_string())));
        assert!(query.contains(&("archiveSeason", "2025".to_string())));
        assert!(query.contains(&("pointsPerReception", "0".to_string())));
    }

    #[tokio::test]
    async fn test_negative_points_clamp_and_unknown_ids_score_zero() {
        let stub = StubProvider::new().with(Endpoint::Projections, projections());
        let mut calc = ProjectionCalculator::new(&stub, "2025", 4, ScoringMode::Ppr);

        assert_eq!(calc.points_for(&player("B", Some("102"), Position::WR), "BUF").await.unwrap(), 0.0);
        assert_eq!(calc.points_for(&player("C", Some("999"), Position::WR), "BUF").await.unwrap(), 0.0);
        assert_eq!(calc.points_for(&player("D", None, Position::TE), "BUF").await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_defense_matches_canonical_team() {
        let stub = StubProvider::new().with(Endpoint::Projections, projections());
        let mut calc = ProjectionCalculator::new(&stub, "2025", 4, ScoringMode::Ppr);

        let dst = player("Jacksonville Jaguars DST", None, Position::DST);
        assert_eq!(calc.points_for(&dst, "JAX").await.unwrap(), 7.25);
    }

    #[tokio::test]
    async fn test_projections_fetched_once() {
        let stub = StubProvider::new().with(Endpoint::Projections, projections());
        let mut calc = ProjectionCalculator::new(&stub, "2025", 4, ScoringMode::Ppr);
        assert!(!calc.has_fetched());

        for id in ["101", "102", "103"] {
            calc.points_for(&player(id, Some(id), Position::RB), "BUF").await.unwrap();
        }

        assert_eq!(stub.calls_to(Endpoint::Projections), 1);
    }

    #[tokio::test]
    async fn test_outage_scores_zero_without_refetching() {
        let stub = StubProvider::new().failing(Endpoint::Projections);
        let mut calc = ProjectionCalculator::new(&stub, "2025", 4, ScoringMode::Ppr);

        for _ in 0..2 {
            let points = calc.points_for(&player("A", Some("101"), Position::RB), "BUF").await.unwrap();
            assert_eq!(points, 0.0);
        }
        assert_eq!(stub.calls_to(Endpoint::Projections), 1);
    }
}
