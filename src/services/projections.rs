use log::info;
use serde::Serialize;

use super::calculator::ProjectionCalculator;
use super::directory::load_team_directory;
use super::opponents::{resolve_week, Location, WeekMatchups};
use crate::config::{AppConfig, PageSettings};
use crate::draft::{
    build_pools, select_starters, simulate_draft, DraftPick, Lineup, PoolEntry, Position,
    ProjectionRow, ScoringMode,
};
use crate::errors::ProviderError;
use crate::identity::{canonical_team_code, ProfileResolver, TeamDirectory};
use crate::provider::StatsProvider;

/// Parameters of one projections report, already clamped to the page limits
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRequest {
    pub teams: usize,
    pub slot: usize,
    pub week: u32,
    pub scoring: ScoringMode,
    pub season: String,
}

impl ProjectionRequest {
    pub fn new(
        teams: usize,
        slot: usize,
        week: u32,
        scoring: ScoringMode,
        season: String,
        pages: &PageSettings,
    ) -> Self {
        let teams = teams.clamp(1, pages.max_teams);
        Self {
            teams,
            slot: slot.clamp(1, teams),
            week: week.clamp(1, pages.max_week),
            scoring,
            season,
        }
    }
}

/// A drafted player on the requested team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterRow {
    pub index: usize,
    pub position: Position,
    pub name: String,
    pub team_name: String,
    pub headshot: Option<String>,
    pub adp: f64,
}

impl RosterRow {
    pub fn adp_label(&self) -> String {
        format!("{:.1}", self.adp)
    }
}

#[derive(Debug, Clone)]
pub struct ProjectionReport {
    pub request: ProjectionRequest,
    pub picks: Vec<DraftPick>,
    pub draft_complete: bool,
    pub roster: Vec<RosterRow>,
    pub projections: Vec<ProjectionRow>,
    pub lineup: Lineup,
}

impl ProjectionReport {
    pub fn title(&self) -> String {
        format!("Week {} — Projections", self.request.week)
    }

    pub fn roster_total_label(&self) -> String {
        format!("Team {} Roster Total", self.request.slot)
    }

    pub fn starters_total_label(&self) -> String {
        format!("Team {} Starters Total", self.request.slot)
    }
}

/// Draft a league, then project the requested team's week
pub async fn build_projections(
    provider: &dyn StatsProvider,
    profiles: &ProfileResolver,
    config: &AppConfig,
    request: ProjectionRequest,
) -> Result<ProjectionReport, ProviderError> {
    info!(
        "Building projections: {} teams, slot {}, week {}, {} scoring, season {}",
        request.teams, request.slot, request.week, request.scoring, request.season
    );

    let directory = load_team_directory(provider).await?;
    let mut pools = build_pools(
        provider,
        &request.season,
        request.scoring,
        &directory,
        &config.draft,
    )
    .await?;
    let outcome = simulate_draft(&mut pools, request.teams, config.draft.rounds);
    let matchups = resolve_week(provider, &request.season, request.week).await?;

    let mut calculator =
        ProjectionCalculator::new(provider, &request.season, request.week, request.scoring);
    let mut roster = Vec::new();
    let mut projections = Vec::new();

    for (i, entry) in outcome.roster(request.slot).iter().enumerate() {
        let profile = match entry.player_id {
            Some(_) => profiles.resolve(&entry.name).await?,
            None => None,
        };
        let team_code = team_code_for(entry, profile.as_ref().and_then(|p| p.team_code()), &directory);
        let team_name = team_code
            .as_deref()
            .map(|code| directory.name_of(code))
            .unwrap_or_default();

        roster.push(RosterRow {
            index: i + 1,
            position: entry.position,
            name: entry.name.clone(),
            team_name: team_name.clone(),
            headshot: profile.and_then(|p| p.headshot),
            adp: entry.adp,
        });

        let (opponent, points) = match opponent_label(team_code.as_deref(), &matchups, &directory) {
            Some(label) => {
                let code = team_code.as_deref().unwrap_or_default();
                (label, calculator.points_for(entry, code).await?)
            }
            None => ("Bye Week".to_string(), 0.0),
        };

        projections.push(ProjectionRow {
            player: entry.name.clone(),
            position: entry.position,
            team_name,
            opponent,
            points,
        });
    }

    let lineup = select_starters(&projections);
    Ok(ProjectionReport {
        request,
        picks: outcome.picks,
        draft_complete: outcome.complete,
        roster,
        projections,
        lineup,
    })
}

/// Canonical team code of a drafted entry: inferred from the label for a
/// defense, taken from the profile otherwise
fn team_code_for(entry: &PoolEntry, profile_team: Option<String>, directory: &TeamDirectory) -> Option<String> {
    let code = match entry.position {
        Position::DST => directory.infer_dst_team(&entry.name),
        _ => profile_team,
    };
    code.map(|c| canonical_team_code(&c))
}

/// "vs <team>" or "@ <team>"; None when the team is on bye or unknown
fn opponent_label(team_code: Option<&str>, matchups: &WeekMatchups, directory: &TeamDirectory) -> Option<String> {
    let opponent = matchups.opponent_of(team_code?)?;
    let name = directory.name_of(&opponent.code);
    Some(match opponent.location {
        Location::Home => format!("vs {}", name),
        Location::Away => format!("@ {}", name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::stub::StubProvider;
    use crate::provider::Endpoint;
    use serde_json::{json, Value};
    use std::sync::Arc;

    const PATTERN: [&str; 6] = ["QB1", "RB1", "WR1", "TE1", "RB2", "WR2"];

    /// Sixty skill players and no kickers or defenses
    fn adp_document() -> Value {
        let list: Vec<Value> = (0..60)
            .map(|i| {
                json!({
                    "longName": format!("Player {}", i + 1),
                    "posADP": PATTERN[i % PATTERN.len()],
                    "overallADP": format!("{}", i + 1),
                    "playerID": format!("p{}", i + 1),
                })
            })
            .collect();
        json!({"body": {"adpList": list}})
    }

    fn request(teams: usize, slot: usize, week: u32) -> ProjectionRequest {
        ProjectionRequest::new(
            teams,
            slot,
            week,
            ScoringMode::Ppr,
            "2025".to_string(),
            &PageSettings::default(),
        )
    }

    fn league() -> StubProvider {
        StubProvider::new()
            .with(Endpoint::Adp, adp_document())
            .failing(Endpoint::Teams)
            .with(
                Endpoint::WeeklySchedule,
                json!({"body": [{"home": "KC", "away": "BAL"}]}),
            )
            .with(
                Endpoint::Projections,
                json!({"body": {"playerProjections": {"p2": {"fantasyPoints": "18.4"}}}}),
            )
            .with_player(
                "player-2",
                json!({"body": [{"team": "kc", "espnHeadshot": "https://img/p2.png"}]}),
            )
    }

    #[test]
    fn test_request_is_clamped() {
        let req = request(40, 50, 30);
        assert_eq!((req.teams, req.slot, req.week), (32, 32, 18));

        let req = request(0, 0, 0);
        assert_eq!((req.teams, req.slot, req.week), (1, 1, 1));
    }

    #[tokio::test]
    async fn test_full_report_for_one_slot() {
        let stub = Arc::new(league());
        let profiles = ProfileResolver::new(stub.clone(), 64);
        let config = AppConfig::new();

        let report = build_projections(stub.as_ref(), &profiles, &config, request(8, 2, 4))
            .await
            .unwrap();

        assert!(report.draft_complete);
        assert_eq!(report.picks.len(), 120);
        assert_eq!(report.roster.len(), 15);
        assert_eq!(report.projections.len(), 15);
        assert_eq!(report.title(), "Week 4 — Projections");
        assert_eq!(report.roster_total_label(), "Team 2 Roster Total");
        assert_eq!(report.starters_total_label(), "Team 2 Starters Total");

        let first = &report.roster[0];
        assert_eq!(first.name, "Player 2");
        assert_eq!(first.team_name, "Kansas City Chiefs");
        assert_eq!(first.headshot.as_deref(), Some("https://img/p2.png"));
        assert_eq!(first.adp_label(), "2.0");

        let row = &report.projections[0];
        assert_eq!(row.opponent, "vs Baltimore Ravens");
        assert_eq!(row.points, 18.4);
        assert_eq!(report.lineup.roster_total, 18.4);
        assert!(report.lineup.starters.len() <= 9);

        assert_eq!(stub.calls_to(Endpoint::Projections), 1);
        let adp_query = &stub.queries_to(Endpoint::Adp)[0];
        assert!(adp_query.contains(&("adpType", "PPR".to_string())));
    }

    #[tokio::test]
    async fn test_placeholder_defense_gets_team_name() {
        let stub = Arc::new(league());
        let profiles = ProfileResolver::new(stub.clone(), 64);

        let report = build_projections(stub.as_ref(), &profiles, &AppConfig::new(), request(8, 2, 4))
            .await
            .unwrap();

        let dst = report
            .roster
            .iter()
            .find(|r| r.position == Position::DST)
            .unwrap();
        assert!(dst.name.ends_with(" DST"));
        assert!(!dst.team_name.is_empty());
        assert!(dst.headshot.is_none());
    }

    #[tokio::test]
    async fn test_byes_score_zero_without_projection_request() {
        let stub = Arc::new(StubProvider::new().with(Endpoint::Adp, adp_document()));
        let profiles = ProfileResolver::new(stub.clone(), 64);

        let report = build_projections(stub.as_ref(), &profiles, &AppConfig::new(), request(4, 1, 1))
            .await
            .unwrap();

        assert!(report.projections.iter().all(|r| r.opponent == "Bye Week" && r.points == 0.0));
        assert_eq!(stub.calls_to(Endpoint::Projections), 0);
        assert_eq!(report.lineup.starter_total, 0.0);
    }

    #[tokio::test]
    async fn test_missing_key_is_fatal() {
        let stub = Arc::new(StubProvider::without_api_key());
        let profiles = ProfileResolver::new(stub.clone(), 64);

        let result = build_projections(stub.as_ref(), &profiles, &AppConfig::new(), request(8, 2, 4)).await;

        assert!(matches!(result, Err(ProviderError::MissingApiKey(_))));
    }
}
