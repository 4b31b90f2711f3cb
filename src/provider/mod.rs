//! Boundary to the external statistics service.
//!
//! Everything upstream of the draft engine goes through [`StatsProvider`];
//! responses are loosely typed JSON and are reduced to canonical records by
//! [`parsers`] straight after the call.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ProviderError;

pub mod fallback;
pub mod parsers;
#[cfg(test)]
pub mod stub;
pub mod tank01;

pub use fallback::first_non_empty;
pub use tank01::Tank01Client;

/// Query parameters for one provider call
pub type Query = Vec<(&'static str, String)>;

/// Endpoints consumed from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Adp,
    Teams,
    WeeklySchedule,
    GamesForWeek,
    Scoreboard,
    PlayerInfo,
    Projections,
    BettingOdds,
    News,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Adp => "getNFLADP",
            Endpoint::Teams => "getNFLTeams",
            Endpoint::WeeklySchedule => "getNFLWeeklySchedule",
            Endpoint::GamesForWeek => "getNFLGamesForWeek",
            Endpoint::Scoreboard => "getNFLScoreboard",
            Endpoint::PlayerInfo => "getNFLPlayerInfo",
            Endpoint::Projections => "getNFLProjections",
            Endpoint::BettingOdds => "getNFLBettingOdds",
            Endpoint::News => "getNFLNews",
        }
    }
}

#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Issue one lookup and return the raw JSON document
    async fn fetch(&self, endpoint: Endpoint, query: Query) -> Result<Value, ProviderError>;
}
