pub mod settings;
pub mod teams;

pub use settings::{current_season, AppConfig, DraftSettings, PageSettings, ProviderSettings};
pub use teams::{TeamConfig, NFL_TEAMS};
