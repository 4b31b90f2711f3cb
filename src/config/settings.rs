use crate::draft::Position;

pub struct ProviderSettings {
    pub base_url: &'static str,
    pub host: &'static str,
    pub api_key_var: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://tank01-nfl-live-in-game-real-time-statistics-nfl.p.rapidapi.com",
            host: "tank01-nfl-live-in-game-real-time-statistics-nfl.p.rapidapi.com",
            api_key_var: "X_RAPIDAPI_KEY",
            user_agent: "ffdash/0.1",
            timeout_secs: 20,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DraftSettings {
    pub rounds: usize,
    pub dst_fallback_adp: f64,
    pub kicker_fallback_adp: f64,
}

impl Default for DraftSettings {
    fn default() -> Self {
        Self {
            rounds: 15,
            dst_fallback_adp: 200.0,
            kicker_fallback_adp: 180.0,
        }
    }
}

impl DraftSettings {
    pub fn fallback_adp(&self, position: Position) -> f64 {
        match position {
            Position::DST => self.dst_fallback_adp,
            _ => self.kicker_fallback_adp,
        }
    }
}

/// Limits and defaults for the dashboard pages
pub struct PageSettings {
    pub default_teams: usize,
    pub max_teams: usize,
    pub max_week: u32,
    pub news_max_items: usize,
    pub injury_top_scan: usize,
    pub injury_max_results: usize,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            default_teams: 10,
            max_teams: 32,
            max_week: 18,
            news_max_items: 40,
            injury_top_scan: 50,
            injury_max_results: 25,
        }
    }
}

pub struct AppConfig {
    pub provider: ProviderSettings,
    pub draft: DraftSettings,
    pub pages: PageSettings,
    pub profile_cache_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            provider: ProviderSettings::default(),
            draft: DraftSettings::default(),
            pages: PageSettings::default(),
            profile_cache_capacity: 2048,
        }
    }
}

/// Season used when a request does not name one: the current calendar year.
pub fn current_season() -> String {
    use chrono::Datelike;
    chrono::Local::now().year().to_string()
}
