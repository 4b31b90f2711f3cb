use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DST,
}

impl Position {
    /// Draft and lineup order
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DST,
    ];

    /// Most players of this position a roster drafts before falling back to best available
    pub fn roster_cap(self) -> usize {
        match self {
            Position::QB => 1,
            Position::RB => 2,
            Position::WR => 3,
            Position::TE => 1,
            Position::K => 1,
            Position::DST => 1,
        }
    }

    /// Starting lineup slots; same shape as the roster caps
    pub fn starter_slots(self) -> usize {
        self.roster_cap()
    }

    /// Classify a reported ADP position such as "RB12", "DEF" or "PK1"
    pub fn from_reported(reported: &str) -> Option<Self> {
        let code = reported.trim().to_uppercase();
        if code.starts_with("DST") || code.starts_with("DEF") {
            return Some(Position::DST);
        }
        if code.starts_with("PK") || code.starts_with('K') {
            return Some(Position::K);
        }
        match code.get(..2)? {
            "QB" => Some(Position::QB),
            "RB" => Some(Position::RB),
            "WR" => Some(Position::WR),
            "TE" => Some(Position::TE),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DST => "DST",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry in a position pool; removed from its pool exactly once, when drafted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolEntry {
    pub name: String,
    pub adp: f64,
    pub player_id: Option<String>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftPick {
    pub round: usize,
    pub pick_number: usize,
    pub team_slot: usize,
    pub position: Position,
    pub player_name: String,
}
