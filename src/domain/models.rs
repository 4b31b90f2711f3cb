use serde::Serialize;

// --- Canonical records built from provider responses ---

/// One row of the provider's ADP list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdpEntry {
    pub name: String,
    pub adp: f64,
    pub player_id: Option<String>,
    /// Position code as reported, e.g. "RB12" or "DEF"
    pub reported_position: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamInfo {
    /// Canonical team code
    pub code: String,
    pub name: String,
}

/// A scheduled game reduced to its canonical team codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matchup {
    pub home: String,
    pub away: String,
}

/// Player profile as returned by the player-info endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub team: Option<String>,
    pub long_name: Option<String>,
    pub espn_name: Option<String>,
    pub position: Option<String>,
    pub jersey: Option<String>,
    pub headshot: Option<String>,
    pub injury: Option<String>,
}

impl PlayerProfile {
    /// Team code, uppercased, when the profile carries one
    pub fn team_code(&self) -> Option<String> {
        self.team
            .as_deref()
            .map(|t| t.trim().to_uppercase())
            .filter(|t| !t.is_empty())
    }

    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.long_name
            .as_deref()
            .or(self.espn_name.as_deref())
            .unwrap_or(fallback)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub source: String,
}

/// A game on the weekly schedule page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledGame {
    /// Date as `YYYYMMDD`
    pub raw_date: String,
    pub time: String,
    pub away: String,
    pub home: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameOdds {
    pub home_spread: Option<f64>,
    pub total: Option<f64>,
    pub moneyline_away: Option<f64>,
    pub moneyline_home: Option<f64>,
    pub implied_away: Option<f64>,
    pub implied_home: Option<f64>,
}

impl GameOdds {
    /// True when no line at all has been posted
    pub fn has_no_lines(&self) -> bool {
        self.home_spread.is_none()
            && self.total.is_none()
            && self.moneyline_away.is_none()
            && self.moneyline_home.is_none()
    }
}

/// Betting odds for one game, keyed by its canonical teams
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsLine {
    pub away: String,
    pub home: String,
    pub odds: GameOdds,
}
