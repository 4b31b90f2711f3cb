use axum::response::{Html, IntoResponse};

use crate::api::views::home::render_home;
use crate::config::settings::current_season;

pub async fn get_home() -> impl IntoResponse {
    Html(render_home(&current_season()))
}
