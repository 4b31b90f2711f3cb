//! Identity normalisation: team codes, player slugs and profile lookup.

pub mod profiles;
pub mod slugs;
pub mod teams;

pub use profiles::ProfileResolver;
pub use slugs::slug_candidates;
pub use teams::{canonical_team_code, team_aliases, TeamDirectory};
