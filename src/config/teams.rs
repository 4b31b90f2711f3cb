/// A franchise known without asking the provider
#[derive(Debug, Clone)]
pub struct TeamConfig {
    pub code: &'static str,
    pub name: &'static str,
}

impl TeamConfig {
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }
}

/// Canonical codes for all 32 franchises, used when the teams endpoint is empty.
pub const NFL_TEAMS: [TeamConfig; 32] = [
    TeamConfig::new("ARI", "Arizona Cardinals"),
    TeamConfig::new("ATL", "Atlanta Falcons"),
    TeamConfig::new("BAL", "Baltimore Ravens"),
    TeamConfig::new("BUF", "Buffalo Bills"),
    TeamConfig::new("CAR", "Carolina Panthers"),
    TeamConfig::new("CHI", "Chicago Bears"),
    TeamConfig::new("CIN", "Cincinnati Bengals"),
    TeamConfig::new("CLE", "Cleveland Browns"),
    TeamConfig::new("DAL", "Dallas Cowboys"),
    TeamConfig::new("DEN", "Denver Broncos"),
    TeamConfig::new("DET", "Detroit Lions"),
    TeamConfig::new("GB", "Green Bay Packers"),
    TeamConfig::new("HOU", "Houston Texans"),
    TeamConfig::new("IND", "Indianapolis Colts"),
    TeamConfig::new("JAX", "Jacksonville Jaguars"),
    TeamConfig::new("KC", "Kansas City Chiefs"),
    TeamConfig::new("LAC", "Los Angeles Chargers"),
    TeamConfig::new("LAR", "Los Angeles Rams"),
    TeamConfig::new("LV", "Las Vegas Raiders"),
    TeamConfig::new("MIA", "Miami Dolphins"),
    TeamConfig::new("MIN", "Minnesota Vikings"),
    TeamConfig::new("NE", "New England Patriots"),
    TeamConfig::new("NO", "New Orleans Saints"),
    TeamConfig::new("NYG", "New York Giants"),
    TeamConfig::new("NYJ", "New York Jets"),
    TeamConfig::new("PHI", "Philadelphia Eagles"),
    TeamConfig::new("PIT", "Pittsburgh Steelers"),
    TeamConfig::new("SEA", "Seattle Seahawks"),
    TeamConfig::new("SF", "San Francisco 49ers"),
    TeamConfig::new("TB", "Tampa Bay Buccaneers"),
    TeamConfig::new("TEN", "Tennessee Titans"),
    TeamConfig::new("WSH", "Washington Commanders"),
];
