use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use super::{parse_or, provider_error, season_or_current, AppState, ProjectionParams};
use crate::api::views::projections::render_projections;
use crate::draft::ScoringMode;
use crate::services::projections::{build_projections, ProjectionRequest};

pub async fn get_projections(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProjectionParams>,
) -> impl IntoResponse {
    let pages = &state.config.pages;
    let request = ProjectionRequest::new(
        parse_or(params.teams.as_deref(), pages.default_teams),
        parse_or(params.slot.as_deref(), 1),
        parse_or(params.week.as_deref(), 1),
        ScoringMode::parse(params.scoring.as_deref().unwrap_or("standard")),
        season_or_current(params.season),
        pages,
    );

    let report = match build_projections(state.provider.as_ref(), &state.profiles, &state.config, request).await {
        Ok(report) => report,
        Err(e) => return provider_error(e),
    };

    Html(render_projections(&report)).into_response()
}
