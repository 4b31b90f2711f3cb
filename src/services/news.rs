use log::info;

use crate::domain::NewsItem;
use crate::errors::{recover, ProviderError};
use crate::provider::parsers::parse_news;
use crate::provider::{Endpoint, StatsProvider};

/// Latest league headlines, fantasy-relevant only
pub async fn fetch_league_news(
    provider: &dyn StatsProvider,
    max_items: usize,
) -> Result<Vec<NewsItem>, ProviderError> {
    let query = vec![
        ("maxItems", max_items.to_string()),
        ("fantasyNews", "true".to_string()),
    ];
    let raw = provider.fetch(Endpoint::News, query).await;
    let items = recover(raw.map(|r| parse_news(&r)), Vec::new(), "News")?;
    info!("Fetched {} news items", items.len());
    Ok(items)
}

/// Items whose title contains `query`, ignoring case; a blank query keeps everything
pub fn filter_news(items: Vec<NewsItem>, query: &str) -> Vec<NewsItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::stub::StubProvider;
    use serde_json::json;

    fn item(title: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            link: "https://example.com".to_string(),
            source: "example.com".to_string(),
        }
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = vec![item("Chiefs sign kicker"), item("Bills injury report")];

        let hits = filter_news(items.clone(), "  CHIEFS ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Chiefs sign kicker");
        assert_eq!(filter_news(items, "").len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_requests_fantasy_news() {
        let stub = StubProvider::new().with(
            Endpoint::News,
            json!({"body": [
                {"title": "Week 1 sleepers", "link": "https://www.nfl.com/news/sleepers"},
                {"title": "No link"}
            ]}),
        );

        let items = fetch_league_news(&stub, 40).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].source, "nfl.com");
        let query = &stub.queries_to(Endpoint::News)[0];
        assert!(query.contains(&("maxItems", "40".to_string())));
        assert!(query.contains(&("fantasyNews", "true".to_string())));
    }

    #[tokio::test]
    async fn test_outage_yields_no_news() {
        let stub = StubProvider::new().failing(Endpoint::News);
        assert!(fetch_league_news(&stub, 40).await.unwrap().is_empty());
    }
}
