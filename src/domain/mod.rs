pub mod models;

pub use models::{
    AdpEntry, GameOdds, Matchup, NewsItem, OddsLine, PlayerProfile, ScheduledGame, TeamInfo,
};
