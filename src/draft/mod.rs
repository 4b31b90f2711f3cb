pub mod lineup;
pub mod pools;
pub mod scoring;
pub mod simulator;
pub mod types;

pub use lineup::{round2, select_starters, Lineup, ProjectionRow};
pub use pools::{build_pools, PositionPools};
pub use scoring::{ScoringConfig, ScoringMode};
pub use simulator::{simulate_draft, snake_position, DraftOutcome, Rosters};
pub use types::{DraftPick, PoolEntry, Position};
