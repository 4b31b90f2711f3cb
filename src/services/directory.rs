use log::info;

use crate::errors::{recover, ProviderError};
use crate::identity::TeamDirectory;
use crate::provider::parsers::parse_teams;
use crate::provider::{Endpoint, StatsProvider};

/// Team names from the provider, or the built-in table when it has none
pub async fn load_team_directory(provider: &dyn StatsProvider) -> Result<TeamDirectory, ProviderError> {
    let raw = provider
        .fetch(Endpoint::Teams, vec![("teamStats", "false".to_string())])
        .await;
    let teams = recover(raw.map(|r| parse_teams(&r)), Vec::new(), "Team list")?;
    info!("Loaded {} teams from provider", teams.len());
    Ok(TeamDirectory::new(teams))
}
