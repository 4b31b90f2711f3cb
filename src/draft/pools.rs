use log::{info, warn};
use std::collections::BTreeMap;

use super::scoring::ScoringMode;
use super::types::{PoolEntry, Position};
use crate::config::DraftSettings;
use crate::domain::AdpEntry;
use crate::errors::{recover, ProviderError};
use crate::identity::TeamDirectory;
use crate::provider::parsers::parse_adp_list;
use crate::provider::{Endpoint, StatsProvider};

/// Undrafted players per position, each pool in provider ADP order
#[derive(Debug, Clone, Default)]
pub struct PositionPools {
    pools: BTreeMap<Position, Vec<PoolEntry>>,
}

impl PositionPools {
    pub fn new() -> Self {
        Self {
            pools: Position::ALL.iter().map(|p| (*p, Vec::new())).collect(),
        }
    }

    /// Bucket ADP rows by position, dropping positions outside the six we draft
    pub fn from_adp(entries: Vec<AdpEntry>) -> Self {
        let mut pools = Self::new();
        for entry in entries {
            if let Some(position) = Position::from_reported(&entry.reported_position) {
                pools.push(PoolEntry {
                    name: entry.name,
                    adp: entry.adp,
                    player_id: entry.player_id,
                    position,
                });
            }
        }
        pools
    }

    pub fn push(&mut self, entry: PoolEntry) {
        self.pools.entry(entry.position).or_default().push(entry);
    }

    pub fn pool(&self, position: Position) -> &[PoolEntry] {
        self.pools.get(&position).map(Vec::as_slice).unwrap_or_default()
    }

    /// Best available entry of a position: the first one left
    pub fn head(&self, position: Position) -> Option<&PoolEntry> {
        self.pool(position).first()
    }

    /// Take the entry at `index` out of its pool
    pub fn take(&mut self, position: Position, index: usize) -> Option<PoolEntry> {
        let pool = self.pools.get_mut(&position)?;
        (index < pool.len()).then(|| pool.remove(index))
    }

    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add one placeholder per team to an empty DST or K pool
    pub fn fill_missing(&mut self, directory: &TeamDirectory, settings: &DraftSettings) {
        for position in [Position::DST, Position::K] {
            if !self.pool(position).is_empty() {
                continue;
            }
            warn!("No {} in ADP list, adding team placeholders", position);
            for team in directory.teams() {
                self.push(PoolEntry {
                    name: format!("{} {}", team.name, position),
                    adp: settings.fallback_adp(position),
                    player_id: None,
                    position,
                });
            }
        }
    }
}

/// Fetch the season's ADP list and build the six position pools
pub async fn build_pools(
    provider: &dyn StatsProvider,
    season: &str,
    mode: ScoringMode,
    directory: &TeamDirectory,
    settings: &DraftSettings,
) -> Result<PositionPools, ProviderError> {
    let query = vec![
        ("season", season.to_string()),
        ("adpType", mode.provider_key().to_string()),
    ];
    let raw = provider.fetch(Endpoint::Adp, query).await;
    let entries = recover(raw.map(|r| parse_adp_list(&r)), Vec::new(), "ADP list")?;
    info!("Fetched {} ADP entries for {}", entries.len(), season);

    let mut pools = PositionPools::from_adp(entries);
    pools.fill_missing(directory, settings);
    Ok(pools)
}
