use reqwest::Url;
use serde_json::Value;

use super::values::{body, normalize_list, objects_of, pick_str, to_float};
use crate::domain::{AdpEntry, GameOdds, Matchup, NewsItem, OddsLine, PlayerProfile, ScheduledGame, TeamInfo};
use crate::identity::canonical_team_code;

const HOME_FIELDS: [&str; 5] = ["home", "homeTeam", "homeTeamAbv", "homeTeamAbbr", "teamHomeAbv"];
const AWAY_FIELDS: [&str; 5] = ["away", "awayTeam", "awayTeamAbv", "awayTeamAbbr", "teamAwayAbv"];

// --- ADP ---

pub fn parse_adp_list(raw: &Value) -> Vec<AdpEntry> {
    normalize_list(raw, Some("adpList"))
        .iter()
        .filter(|item| item.is_object())
        .map(|item| AdpEntry {
            name: pick_str(item, &["longName"]).unwrap_or_else(|| "<none>".to_string()),
            adp: item.get("overallADP").and_then(to_float).unwrap_or(0.0),
            player_id: pick_str(item, &["playerID"]),
            reported_position: pick_str(item, &["posADP"]).unwrap_or_default().to_uppercase(),
        })
        .collect()
}

/// Names from the ADP list in provider order, falling back to `name`
pub fn parse_adp_names(raw: &Value) -> Vec<String> {
    normalize_list(raw, Some("adpList"))
        .iter()
        .filter_map(|item| pick_str(item, &["longName", "name"]))
        .collect()
}

// --- Teams ---

pub fn parse_teams(raw: &Value) -> Vec<TeamInfo> {
    normalize_list(raw, Some("teams"))
        .iter()
        .filter_map(|item| {
            let code = pick_str(item, &["teamAbv"])?;
            let name = pick_str(item, &["teamName"]).unwrap_or_else(|| code.clone());
            Some(TeamInfo {
                code: canonical_team_code(&code),
                name,
            })
        })
        .collect()
}

// --- Games ---

/// Games of a schedule-like document: `body.games`, `body.weeklySchedule`, or a bare list
fn games_of(raw: &Value) -> Vec<Value> {
    match body(raw) {
        Value::Array(games) => games.clone(),
        Value::Object(_) => {
            let games = normalize_list(raw, Some("games"));
            if games.is_empty() {
                normalize_list(raw, Some("weeklySchedule"))
            } else {
                games
            }
        }
        _ => Vec::new(),
    }
}

/// Matchups with both teams present, codes canonicalized
pub fn parse_matchups(raw: &Value) -> Vec<Matchup> {
    games_of(raw)
        .iter()
        .filter_map(|game| {
            let home = pick_str(game, &HOME_FIELDS)?;
            let away = pick_str(game, &AWAY_FIELDS)?;
            Some(Matchup {
                home: canonical_team_code(&home),
                away: canonical_team_code(&away),
            })
        })
        .collect()
}

/// Games for the schedule page; entries without teams or a date are dropped
pub fn parse_scheduled_games(raw: &Value) -> Vec<ScheduledGame> {
    games_of(raw)
        .iter()
        .filter_map(|game| {
            Some(ScheduledGame {
                home: canonical_team_code(&pick_str(game, &HOME_FIELDS)?),
                away: canonical_team_code(&pick_str(game, &AWAY_FIELDS)?),
                raw_date: pick_str(game, &["gameDate", "date"])?,
                time: pick_str(game, &["gameTime", "time"]).unwrap_or_default(),
            })
        })
        .collect()
}

// --- Odds ---

pub fn parse_odds(raw: &Value) -> Vec<OddsLine> {
    let Some(items) = body(raw).as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let home = canonical_team_code(&pick_str(item, &HOME_FIELDS)?);
            let away = canonical_team_code(&pick_str(item, &AWAY_FIELDS)?);
            let implied = item.get("impliedTotals").cloned().unwrap_or(Value::Null);
            let number = |obj: &Value, keys: &[&str]| {
                pick_str(obj, keys).and_then(|s| to_float(&Value::String(s)))
            };

            Some(OddsLine {
                away,
                home,
                odds: GameOdds {
                    home_spread: number(item, &["homeSpread", "spreadHome", "spread"]),
                    total: number(item, &["overUnder", "total", "ou"]),
                    moneyline_away: number(item, &["awayMoneyline", "mlAway", "moneylineAway"]),
                    moneyline_home: number(item, &["homeMoneyline", "mlHome", "moneylineHome"]),
                    implied_away: number(&implied, &["away", "awayImplied"]),
                    implied_home: number(&implied, &["home", "homeImplied"]),
                },
            })
        })
        .collect()
}

// --- Players ---

/// First profile of a player-info document, if the body is a non-empty list
pub fn parse_profile(raw: &Value) -> Option<PlayerProfile> {
    let first = body(raw).as_array()?.first()?;
    Some(profile_from(first))
}

fn profile_from(obj: &Value) -> PlayerProfile {
    PlayerProfile {
        team: pick_str(obj, &["team", "teamAbv"]),
        long_name: pick_str(obj, &["longName"]),
        espn_name: pick_str(obj, &["espnName"]),
        position: pick_str(obj, &["pos", "position"]),
        jersey: pick_str(obj, &["jerseyNum", "number"]),
        headshot: pick_str(obj, &["espnHeadshot"]),
        injury: obj
            .get("injury")
            .filter(|inj| inj.is_object())
            .and_then(|inj| pick_str(inj, &["description", "designation", "status"])),
    }
}

// --- Projections ---

/// Per-player projection object keyed by provider id
pub fn player_projection<'a>(projections: &'a Value, player_id: &str) -> Option<&'a Value> {
    body(projections).get("playerProjections")?.get(player_id)
}

/// Team defense projection whose team code canonicalizes to `team_code`
pub fn defense_projection<'a>(projections: &'a Value, team_code: &str) -> Option<&'a Value> {
    let defenses = body(projections).get("teamDefenseProjections")?;
    objects_of(defenses).into_iter().find(|item| {
        pick_str(item, &["teamAbv"]).is_some_and(|abv| canonical_team_code(&abv) == team_code)
    })
}

// --- News ---

pub fn parse_news(raw: &Value) -> Vec<NewsItem> {
    let Some(items) = body(raw).as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let title = pick_str(item, &["title"])?;
            let link = pick_str(item, &["link"])?;
            Some(NewsItem {
                source: source_of(&link),
                title,
                link,
            })
        })
        .collect()
}

/// Host of a link without a leading `www.`
fn source_of(link: &str) -> String {
    Url::parse(link)
        .ok()
        .and_then(|url| {
            url.host_str()
                .map(|host| host.strip_prefix("www.").unwrap_or(host).to_string())
        })
        .unwrap_or_default()
}
