use serde::Serialize;

use super::types::Position;

/// Projected points for one rostered player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionRow {
    pub player: String,
    pub position: Position,
    pub team_name: String,
    pub opponent: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lineup {
    pub starters: Vec<ProjectionRow>,
    pub roster_total: f64,
    pub starter_total: f64,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pick the top-scoring players per position for the starting lineup.
///
/// Positions are filled in QB, RB, WR, TE, K, DST order; within a position the
/// sort is stable, so equal projections keep roster order.
pub fn select_starters(roster: &[ProjectionRow]) -> Lineup {
    let mut starters = Vec::new();

    for position in Position::ALL {
        let mut candidates: Vec<&ProjectionRow> =
            roster.iter().filter(|row| row.position == position).collect();
        candidates.sort_by(|a, b| b.points.total_cmp(&a.points));
        starters.extend(
            candidates
                .into_iter()
                .take(position.starter_slots())
                .cloned(),
        );
    }

    Lineup {
        roster_total: total_points(roster),
        starter_total: total_points(&starters),
        starters,
    }
}

fn total_points(rows: &[ProjectionRow]) -> f64 {
    round2(rows.iter().map(|row| row.points).sum())
}
