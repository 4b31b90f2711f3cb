use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    home::get_home, injuries::get_injuries, news::get_news, projections::get_projections,
    schedule::get_schedule, AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_home))
        .route("/projections", get(get_projections))
        .route("/schedule", get(get_schedule))
        .route("/news", get(get_news))
        .route("/injuries", get(get_injuries))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::provider::stub::StubProvider;
    use crate::provider::{Endpoint, StatsProvider};
    use crate::services::server::build_app;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use scraper::{Html, Selector};
    use serde_json::json;
    use tower::ServiceExt;

    fn app(stub: StubProvider) -> Router {
        let provider: Arc<dyn StatsProvider> = Arc::new(stub);
        build_app(Arc::new(AppState::new(provider, AppConfig::new())))
    }

    fn league() -> StubProvider {
        let list: Vec<_> = (0..60)
            .map(|i| {
                let pos = ["QB1", "RB1", "WR1", "TE1", "RB2", "WR2"][i % 6];
                json!({"longName": format!("Player {}", i + 1), "posADP": pos, "overallADP": i + 1})
            })
            .collect();
        StubProvider::new()
            .with(Endpoint::Adp, json!({"body": {"adpList": list}}))
            .with(Endpoint::WeeklySchedule, json!({"body": [{"home": "KC", "away": "BAL"}]}))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn page(response: Response) -> Html {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        Html::parse_document(&String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn texts(doc: &Html, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        doc.select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    #[tokio::test]
    async fn test_projections_page() {
        let response = get(app(league()), "/projections?teams=8&slot=2&week=4&scoring=PPR").await;
        assert_eq!(response.status(), StatusCode::OK);

        let doc = page(response).await;
        assert_eq!(texts(&doc, "h1"), vec!["Week 4 — Projections"]);
        assert_eq!(texts(&doc, "table.draft-log tbody tr").len(), 120);
        assert_eq!(texts(&doc, "table.roster tbody tr").len(), 15);

        let totals = texts(&doc, "table.totals tbody td");
        assert_eq!(totals[0], "Team 2 Roster Total");
        assert_eq!(totals[2], "Team 2 Starters Total");
    }

    #[tokio::test]
    async fn test_bad_numbers_use_defaults_and_clamp() {
        let doc = page(get(app(league()), "/projections?teams=abc&slot=99&week=40").await).await;

        assert_eq!(texts(&doc, "h1"), vec!["Week 18 — Projections"]);
        // ten teams need 150 picks but the pools only hold 124
        assert_eq!(texts(&doc, "table.draft-log tbody tr").len(), 124);
        assert!(texts(&doc, "p.note").iter().any(|t| t.contains("ran out")));
        let totals = texts(&doc, "table.totals tbody td");
        assert_eq!(totals[0], "Team 10 Roster Total");
    }

    #[tokio::test]
    async fn test_responses_are_not_cached() {
        let response = get(app(StubProvider::new()), "/").await;
        let headers = response.headers();

        assert_eq!(headers["cache-control"], "no-store, no-cache, must-revalidate, max-age=0");
        assert_eq!(headers["pragma"], "no-cache");
        assert_eq!(headers["expires"], "0");
    }

    #[tokio::test]
    async fn test_missing_key_is_server_error() {
        let response = get(app(StubProvider::without_api_key()), "/projections").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("X_RAPIDAPI_KEY"));
    }

    #[tokio::test]
    async fn test_empty_schedule_page() {
        let stub = StubProvider::new().with(Endpoint::GamesForWeek, json!({"body": []}));
        let doc = page(get(app(stub), "/schedule?week=3").await).await;

        assert!(texts(&doc, "p.note").iter().any(|t| t == "No games found for that week."));
    }

    #[tokio::test]
    async fn test_news_titles_are_escaped_and_filtered() {
        let stub = StubProvider::new().with(
            Endpoint::News,
            json!({"body": [
                {"title": "<script>Chiefs</script> win", "link": "https://www.espn.com/a"},
                {"title": "Bills lose", "link": "https://nfl.com/b"}
            ]}),
        );
        let response = get(app(stub), "/news?q=chiefs").await;
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();

        assert!(html.contains("&lt;script&gt;Chiefs&lt;/script&gt; win"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("Bills lose"));
    }

    #[tokio::test]
    async fn test_injuries_page_with_unknown_player() {
        let stub = StubProvider::new().with(
            Endpoint::Adp,
            json!({"body": {"adpList": [{"longName": "Bo Hurt"}]}}),
        )
        .with_player("bo-hurt", json!({"body": [{"injury": {"designation": "Out"}}]}));

        let doc = page(get(app(stub), "/injuries?player=Nobody%20Here").await).await;

        assert_eq!(texts(&doc, "table.injuries tbody td"), vec!["Bo Hurt", "Out"]);
        assert!(texts(&doc, "div.note")[0].contains("Nobody Here"));
    }
}
