use log::{debug, warn};
use std::collections::BTreeMap;

use super::pools::PositionPools;
use super::types::{DraftPick, PoolEntry, Position};

/// Team slot (1..=teams) -> drafted entries in pick order
pub type Rosters = BTreeMap<usize, Vec<PoolEntry>>;

#[derive(Debug, Clone)]
pub struct DraftOutcome {
    pub picks: Vec<DraftPick>,
    pub rosters: Rosters,
    /// False when the pools ran dry before every pick was made
    pub complete: bool,
}

impl DraftOutcome {
    pub fn roster(&self, slot: usize) -> &[PoolEntry] {
        self.rosters.get(&slot).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Round and team for a zero-based pick index in a snake draft.
///
/// Odd rounds run slot 1..=teams, even rounds run back from `teams` to 1.
pub fn snake_position(pick_index: usize, teams: usize) -> (usize, usize) {
    let round = pick_index / teams + 1;
    let slot = pick_index % teams + 1;
    let team = if round % 2 == 1 { slot } else { teams + 1 - slot };
    (round, team)
}

/// Run a snake draft of `teams` x `rounds` picks, consuming entries from `pools`.
///
/// Each pick takes the lowest-ADP head among positions still under the
/// picking team's cap. Once every cap is met the lowest ADP left in any pool
/// is taken regardless of position.
pub fn simulate_draft(pools: &mut PositionPools, teams: usize, rounds: usize) -> DraftOutcome {
    let teams = teams.max(1);
    let total_picks = teams * rounds;
    let mut rosters: Rosters = (1..=teams).map(|slot| (slot, Vec::new())).collect();
    let mut picks = Vec::with_capacity(total_picks);

    for pick_index in 0..total_picks {
        let (round, team) = snake_position(pick_index, teams);
        let roster = rosters.entry(team).or_default();

        let Some((position, index)) = choose_pick(pools, roster) else {
            warn!(
                "Player pools exhausted after {} of {} picks",
                picks.len(),
                total_picks
            );
            return DraftOutcome {
                picks,
                rosters,
                complete: false,
            };
        };

        let Some(entry) = pools.take(position, index) else {
            break;
        };
        debug!("Pick {}: team {} takes {} ({})", pick_index + 1, team, entry.name, position);

        picks.push(DraftPick {
            round,
            pick_number: pick_index + 1,
            team_slot: team,
            position,
            player_name: entry.name.clone(),
        });
        roster.push(entry);
    }

    let complete = picks.len() == total_picks;
    DraftOutcome {
        picks,
        rosters,
        complete,
    }
}

/// Position and pool index of the entry the team drafts next
fn choose_pick(pools: &PositionPools, roster: &[PoolEntry]) -> Option<(Position, usize)> {
    best_under_cap(pools, roster).or_else(|| best_anywhere(pools))
}

fn best_under_cap(pools: &PositionPools, roster: &[PoolEntry]) -> Option<(Position, usize)> {
    let mut best: Option<(Position, f64)> = None;

    for position in Position::ALL {
        let held = roster.iter().filter(|e| e.position == position).count();
        if held >= position.roster_cap() {
            continue;
        }
        if let Some(head) = pools.head(position) {
            if best.is_none_or(|(_, adp)| head.adp < adp) {
                best = Some((position, head.adp));
            }
        }
    }

    best.map(|(position, _)| (position, 0))
}

fn best_anywhere(pools: &PositionPools) -> Option<(Position, usize)> {
    let mut best: Option<(Position, usize, f64)> = None;

    for position in Position::ALL {
        for (index, entry) in pools.pool(position).iter().enumerate() {
            if best.is_none_or(|(_, _, adp)| entry.adp < adp) {
                best = Some((position, index, entry.adp));
            }
        }
    }

    best.map(|(position, index, _)| (position, index))
}
