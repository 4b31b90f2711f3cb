use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use super::{provider_error, AppState, NewsParams};
use crate::api::views::news::render_news;
use crate::services::news::{fetch_league_news, filter_news};

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NewsParams>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default().trim().to_string();

    let items = match fetch_league_news(state.provider.as_ref(), state.config.pages.news_max_items).await {
        Ok(items) => items,
        Err(e) => return provider_error(e),
    };

    Html(render_news(&filter_news(items, &query), &query)).into_response()
}
