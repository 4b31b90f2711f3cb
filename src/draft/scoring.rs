use serde::Serialize;
use std::fmt;

use crate::provider::Query;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ScoringMode {
    #[default]
    Standard,
    HalfPpr,
    Ppr,
}

impl ScoringMode {
    /// Lenient parse of a user-supplied scoring label; anything unknown is standard
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "ppr" => ScoringMode::Ppr,
            "halfppr" | "half_ppr" | "half-ppr" => ScoringMode::HalfPpr,
            _ => ScoringMode::Standard,
        }
    }

    /// Key used by the provider for this mode
    pub fn provider_key(self) -> &'static str {
        match self {
            ScoringMode::Standard => "standard",
            ScoringMode::HalfPpr => "halfPPR",
            ScoringMode::Ppr => "PPR",
        }
    }

    pub fn points_per_reception(self) -> f64 {
        match self {
            ScoringMode::Standard => 0.0,
            ScoringMode::HalfPpr => 0.5,
            ScoringMode::Ppr => 1.0,
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.provider_key())
    }
}

/// Per-statistic point weights sent with a projections request
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    weights: Vec<(&'static str, f64)>,
}

impl ScoringConfig {
    pub fn for_mode(mode: ScoringMode) -> Self {
        Self {
            weights: vec![
                ("pointsPerReception", mode.points_per_reception()),
                ("twoPointConversions", 2.0),
                ("passYards", 0.04),
                ("passTD", 4.0),
                ("passCompletions", 1.0),
                ("passInterceptions", -2.0),
                ("rushYards", 0.1),
                ("rushTD", 6.0),
                ("receivingYards", 0.1),
                ("receivingTD", 6.0),
                ("fumbles", -2.0),
                ("fgMade", 3.0),
                ("fgMissed", -1.0),
                ("xpMade", 1.0),
                ("xpMissed", -1.0),
            ],
        }
    }

    pub fn weight(&self, stat: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|(name, _)| *name == stat)
            .map(|(_, w)| *w)
    }

    pub fn to_query(&self) -> Query {
        self.weights
            .iter()
            .map(|(name, weight)| (*name, weight.to_string()))
            .collect()
    }
}
