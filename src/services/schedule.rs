use chrono::NaiveDate;
use log::info;
use std::collections::{BTreeSet, HashMap};

use crate::domain::GameOdds;
use crate::errors::{recover, ProviderError};
use crate::provider::parsers::{parse_odds, parse_scheduled_games};
use crate::provider::{Endpoint, StatsProvider};

const DATE_NOTE: &str = "Betting odds not yet released for this date.";
const GAME_NOTE: &str = "Betting odds not yet released.";

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    /// Display date, e.g. "2025-09-07 (Sun)"
    pub date: String,
    pub time: String,
    pub away: String,
    pub home: String,
    pub odds: GameOdds,
    pub note: String,
}

#[derive(Debug, Clone)]
pub struct WeekSchedule {
    pub season: String,
    pub week: u32,
    pub rows: Vec<ScheduleRow>,
    /// Names the dates that have no odds posted yet
    pub missing_note: Option<String>,
}

/// `YYYYMMDD` as `YYYY-MM-DD (Ddd)`; anything else is returned as is
pub fn format_game_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .map(|date| date.format("%Y-%m-%d (%a)").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// The week's games with betting lines, one odds request per game date
pub async fn build_week_schedule(
    provider: &dyn StatsProvider,
    season: &str,
    week: u32,
) -> Result<WeekSchedule, ProviderError> {
    let query = vec![
        ("season", season.to_string()),
        ("week", week.to_string()),
        ("seasonType", "reg".to_string()),
    ];
    let raw = provider.fetch(Endpoint::GamesForWeek, query).await;
    let games = recover(raw.map(|r| parse_scheduled_games(&r)), Vec::new(), "Weekly games")?;

    let mut schedule = WeekSchedule {
        season: season.to_string(),
        week,
        rows: Vec::new(),
        missing_note: None,
    };
    if games.is_empty() {
        return Ok(schedule);
    }

    let dates: BTreeSet<&str> = games.iter().map(|g| g.raw_date.as_str()).collect();
    let mut odds_index: HashMap<(String, String, String), GameOdds> = HashMap::new();
    let mut dates_without_odds = Vec::new();

    for date in dates {
        let query = vec![
            ("gameDate", date.to_string()),
            ("itemFormat", "list".to_string()),
            ("impliedTotals", "true".to_string()),
        ];
        let raw = provider.fetch(Endpoint::BettingOdds, query).await;
        let lines = recover(raw.map(|r| parse_odds(&r)), Vec::new(), "Betting odds")?;

        if lines.is_empty() {
            dates_without_odds.push(date.to_string());
            continue;
        }
        for line in lines {
            odds_index.insert((date.to_string(), line.away, line.home), line.odds);
        }
    }

    for game in &games {
        let key = (game.raw_date.clone(), game.away.clone(), game.home.clone());
        let odds = odds_index.get(&key).cloned().unwrap_or_default();
        let mut note = if dates_without_odds.contains(&game.raw_date) {
            DATE_NOTE.to_string()
        } else {
            String::new()
        };
        if note.is_empty() && odds.has_no_lines() {
            note = GAME_NOTE.to_string();
        }

        schedule.rows.push(ScheduleRow {
            date: format_game_date(&game.raw_date),
            time: game.time.clone(),
            away: game.away.clone(),
            home: game.home.clone(),
            odds,
            note,
        });
    }
    schedule
        .rows
        .sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));

    if !dates_without_odds.is_empty() {
        let pretty: Vec<String> = dates_without_odds.iter().map(|d| format_game_date(d)).collect();
        schedule.missing_note = Some(format!(
            "Note: Betting odds aren't posted yet for: {}. They often appear closer to game week.",
            pretty.join(", ")
        ));
    }

    info!(
        "Week {} schedule: {} games, {} dates without odds",
        week,
        schedule.rows.len(),
        dates_without_odds.len()
    );
    Ok(schedule)
}
