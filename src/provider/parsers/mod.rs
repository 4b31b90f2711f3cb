pub mod points;
pub mod records;
pub mod values;

pub use points::parse_points;
pub use records::{
    defense_projection, parse_adp_list, parse_adp_names, parse_matchups, parse_news, parse_odds,
    parse_profile, parse_scheduled_games, parse_teams, player_projection,
};
pub use values::{body, normalize_list, pick_str, to_float};
