use log::{info, warn};
use std::collections::HashMap;

use crate::domain::Matchup;
use crate::errors::ProviderError;
use crate::identity::team_aliases;
use crate::provider::fallback::first_non_empty;
use crate::provider::parsers::parse_matchups;
use crate::provider::{Endpoint, StatsProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Home,
    Away,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opponent {
    /// Canonical code of the opposing team
    pub code: String,
    pub location: Location,
}

/// Who each team plays in one week; a team with no entry is on bye
#[derive(Debug, Clone, Default)]
pub struct WeekMatchups {
    opponents: HashMap<String, Opponent>,
}

impl WeekMatchups {
    pub fn from_matchups(matchups: &[Matchup]) -> Self {
        let mut opponents = HashMap::new();
        for game in matchups {
            for alias in team_aliases(&game.home) {
                opponents.insert(
                    alias,
                    Opponent {
                        code: game.away.clone(),
                        location: Location::Home,
                    },
                );
            }
            for alias in team_aliases(&game.away) {
                opponents.insert(
                    alias,
                    Opponent {
                        code: game.home.clone(),
                        location: Location::Away,
                    },
                );
            }
        }
        Self { opponents }
    }

    pub fn opponent_of(&self, team_code: &str) -> Option<&Opponent> {
        self.opponents.get(team_code)
    }

    pub fn is_empty(&self) -> bool {
        self.opponents.is_empty()
    }
}

/// Resolve a week's opponents, trying the schedule endpoints in turn
pub async fn resolve_week(
    provider: &dyn StatsProvider,
    season: &str,
    week: u32,
) -> Result<WeekMatchups, ProviderError> {
    let query = || vec![("season", season.to_string()), ("week", week.to_string())];
    let attempts = vec![
        (Endpoint::WeeklySchedule, query()),
        (Endpoint::GamesForWeek, query()),
        (Endpoint::Scoreboard, query()),
    ];

    let matchups = first_non_empty(provider, attempts, parse_matchups).await?;
    if matchups.is_empty() {
        warn!("No matchups found for {} week {}, every team is on bye", season, week);
    } else {
        info!("Resolved {} games for {} week {}", matchups.len(), season, week);
    }

    Ok(WeekMatchups::from_matchups(&matchups))
}
