use log::info;
use std::collections::HashSet;
use std::time::Instant;

use super::directory::load_team_directory;
use crate::config::PageSettings;
use crate::draft::round2;
use crate::errors::{recover, ProviderError};
use crate::identity::ProfileResolver;
use crate::provider::parsers::parse_adp_names;
use crate::provider::{Endpoint, StatsProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjuryRow {
    pub player: String,
    pub injury: String,
}

#[derive(Debug, Clone)]
pub struct InjuryTable {
    pub season: String,
    pub scanned: usize,
    pub max_results: usize,
    pub rows: Vec<InjuryRow>,
    pub elapsed_secs: f64,
}

/// Everything the player card shows
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCard {
    pub full_name: String,
    pub position: Option<String>,
    pub jersey: Option<String>,
    pub team_code: Option<String>,
    pub team_name: String,
    pub headshot: Option<String>,
    pub injury: String,
}

/// Scan the top of the ADP board for players with an injury listed
pub async fn build_injury_table(
    provider: &dyn StatsProvider,
    profiles: &ProfileResolver,
    season: &str,
    pages: &PageSettings,
) -> Result<InjuryTable, ProviderError> {
    let started = Instant::now();

    let query = vec![
        ("season", season.to_string()),
        ("adpType", "standard".to_string()),
    ];
    let raw = provider.fetch(Endpoint::Adp, query).await;
    let names = recover(raw.map(|r| parse_adp_names(&r)), Vec::new(), "ADP list")?;

    let mut seen = HashSet::new();
    let mut rows = Vec::new();
    for name in names.into_iter().take(pages.injury_top_scan) {
        if rows.len() >= pages.injury_max_results {
            break;
        }
        let Some(injury) = profiles.resolve(&name).await?.and_then(|p| p.injury) else {
            continue;
        };
        if seen.insert(name.clone()) {
            rows.push(InjuryRow { player: name, injury });
        }
    }
    rows.sort_by(|a, b| a.player.cmp(&b.player));

    let elapsed_secs = round2(started.elapsed().as_secs_f64());
    info!("Found {} injured players in {:.2}s", rows.len(), elapsed_secs);

    Ok(InjuryTable {
        season: season.to_string(),
        scanned: pages.injury_top_scan,
        max_results: pages.injury_max_results,
        rows,
        elapsed_secs,
    })
}

/// Card for one player; None when no profile matches the name
pub async fn build_player_card(
    provider: &dyn StatsProvider,
    profiles: &ProfileResolver,
    name: &str,
) -> Result<Option<PlayerCard>, ProviderError> {
    let Some(profile) = profiles.resolve(name).await? else {
        return Ok(None);
    };

    let directory = load_team_directory(provider).await?;
    let team_code = profile.team_code();
    let team_name = team_code
        .as_deref()
        .map(|code| directory.name_of(code))
        .unwrap_or_default();

    Ok(Some(PlayerCard {
        full_name: profile.display_name(name).to_string(),
        position: profile.position.clone(),
        jersey: profile.jersey.clone(),
        team_code,
        team_name,
        headshot: profile.headshot.clone(),
        injury: profile
            .injury
            .clone()
            .unwrap_or_else(|| "(none listed)".to_string()),
    }))
}
