use std::collections::HashMap;

use crate::config::NFL_TEAMS;
use crate::domain::TeamInfo;

/// Alias -> canonical team code
const ALIASES: [(&str, &str); 9] = [
    ("JAC", "JAX"),
    ("WAS", "WSH"),
    ("SFO", "SF"),
    ("TAM", "TB"),
    ("NOR", "NO"),
    ("LA", "LAR"),
    ("OAK", "LV"),
    ("STL", "LAR"),
    ("SD", "LAC"),
];

/// Canonical code for a team abbreviation; unknown codes pass through uppercased
pub fn canonical_team_code(code: &str) -> String {
    let upper = code.trim().to_uppercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == upper)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(upper)
}

/// The canonical code of `code` followed by every alias that maps to it
pub fn team_aliases(code: &str) -> Vec<String> {
    let canonical = canonical_team_code(code);
    let mut out = vec![canonical.clone()];
    out.extend(
        ALIASES
            .iter()
            .filter(|(_, target)| *target == canonical)
            .map(|(alias, _)| alias.to_string()),
    );
    out
}

/// Team directory keyed by canonical code
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    names: HashMap<String, String>,
    order: Vec<TeamInfo>,
}

impl TeamDirectory {
    /// Build from provider teams, using the built-in franchise table when empty
    pub fn new(teams: Vec<TeamInfo>) -> Self {
        let teams = if teams.is_empty() { Self::builtin_teams() } else { teams };
        let names = teams
            .iter()
            .map(|t| (t.code.clone(), t.name.clone()))
            .collect();
        Self { names, order: teams }
    }

    pub fn builtin_teams() -> Vec<TeamInfo> {
        NFL_TEAMS
            .iter()
            .map(|t| TeamInfo {
                code: t.code.to_string(),
                name: t.name.to_string(),
            })
            .collect()
    }

    /// Teams in provider order
    pub fn teams(&self) -> &[TeamInfo] {
        &self.order
    }

    /// Full name for a code, or the code itself when unknown
    pub fn name_of(&self, code: &str) -> String {
        self.names
            .get(&canonical_team_code(code))
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    /// Team code for a DST label such as "Baltimore Ravens DST".
    ///
    /// Matches the full team name first, then the last word as the nickname.
    pub fn infer_dst_team(&self, label: &str) -> Option<String> {
        if !label.to_lowercase().contains("dst") {
            return None;
        }

        let base = label.replace(" DST", "");
        let base = base.trim();

        if let Some(team) = self.order.iter().find(|t| t.name == base) {
            return Some(team.code.clone());
        }

        let nickname = base.split_whitespace().last()?.to_lowercase();
        self.order
            .iter()
            .find(|t| {
                t.name
                    .split_whitespace()
                    .last()
                    .is_some_and(|last| last.to_lowercase() == nickname)
            })
            .map(|t| t.code.clone())
    }
}
