use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use super::{provider_error, AppState, InjuryParams};
use crate::api::views::injuries::{render_injuries, CardLookup};
use crate::config::settings::current_season;
use crate::services::injuries::{build_injury_table, build_player_card};

pub async fn get_injuries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<InjuryParams>,
) -> impl IntoResponse {
    let season = current_season();
    let provider = state.provider.as_ref();

    let table = match build_injury_table(provider, &state.profiles, &season, &state.config.pages).await {
        Ok(table) => table,
        Err(e) => return provider_error(e),
    };

    let query = params.player.unwrap_or_default().trim().to_string();
    let card = if query.is_empty() {
        None
    } else {
        match build_player_card(provider, &state.profiles, &query).await {
            Ok(card) => Some(card),
            Err(e) => return provider_error(e),
        }
    };

    let lookup = match &card {
        None => CardLookup::NotRequested,
        Some(Some(card)) => CardLookup::Found(card),
        Some(None) => CardLookup::NotFound(&query),
    };
    Html(render_injuries(&table, &query, lookup)).into_response()
}
