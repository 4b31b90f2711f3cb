use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use super::{parse_or, provider_error, season_or_current, AppState, ScheduleParams};
use crate::api::views::schedule::render_schedule;
use crate::services::schedule::build_week_schedule;

pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScheduleParams>,
) -> impl IntoResponse {
    let week = parse_or(params.week.as_deref(), 1u32).clamp(1, state.config.pages.max_week);
    let season = season_or_current(params.season);

    match build_week_schedule(state.provider.as_ref(), &season, week).await {
        Ok(schedule) => Html(render_schedule(&schedule)).into_response(),
        Err(e) => provider_error(e),
    }
}
