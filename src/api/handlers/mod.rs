use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::settings::{current_season, AppConfig};
use crate::errors::ProviderError;
use crate::identity::ProfileResolver;
use crate::provider::StatsProvider;

pub mod home;
pub mod injuries;
pub mod news;
pub mod projections;
pub mod schedule;

/// Shared by every request; the profile cache is the only mutable part
pub struct AppState {
    pub provider: Arc<dyn StatsProvider>,
    pub profiles: ProfileResolver,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(provider: Arc<dyn StatsProvider>, config: AppConfig) -> Self {
        let profiles = ProfileResolver::new(provider.clone(), config.profile_cache_capacity);
        Self {
            provider,
            profiles,
            config,
        }
    }
}

// Numbers arrive as strings so a malformed value falls back to its default
// instead of rejecting the request.

#[derive(Deserialize, Default)]
pub struct ProjectionParams {
    pub teams: Option<String>,
    pub slot: Option<String>,
    pub week: Option<String>,
    pub scoring: Option<String>,
    pub season: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ScheduleParams {
    pub week: Option<String>,
    pub season: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct NewsParams {
    pub q: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct InjuryParams {
    pub player: Option<String>,
}

pub(crate) fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

pub(crate) fn season_or_current(season: Option<String>) -> String {
    season
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(current_season)
}

pub(crate) fn provider_error(e: ProviderError) -> Response {
    error!("Request failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response()
}
