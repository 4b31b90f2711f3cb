use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::{Endpoint, Query, StatsProvider};
use crate::errors::ProviderError;

/// Canned provider for tests: fixed documents per endpoint plus a call log
#[derive(Default)]
pub struct StubProvider {
    responses: HashMap<Endpoint, Value>,
    players: HashMap<String, Value>,
    failures: HashSet<Endpoint>,
    missing_key: bool,
    calls: Mutex<Vec<(Endpoint, Query)>>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails the way an unconfigured client does
    pub fn without_api_key() -> Self {
        Self {
            missing_key: true,
            ..Self::default()
        }
    }

    pub fn with(mut self, endpoint: Endpoint, document: Value) -> Self {
        self.responses.insert(endpoint, document);
        self
    }

    /// Player-info document served for one `playerName` slug
    pub fn with_player(mut self, slug: &str, document: Value) -> Self {
        self.players.insert(slug.to_string(), document);
        self
    }

    pub fn failing(mut self, endpoint: Endpoint) -> Self {
        self.failures.insert(endpoint);
        self
    }

    pub fn calls_to(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(called, _)| *called == endpoint)
            .count()
    }

    pub fn queries_to(&self, endpoint: Endpoint) -> Vec<Query> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(called, _)| *called == endpoint)
            .map(|(_, query)| query.clone())
            .collect()
    }

    fn not_found(endpoint: Endpoint) -> ProviderError {
        ProviderError::Status {
            endpoint: endpoint.path(),
            status: StatusCode::NOT_FOUND,
        }
    }
}

#[async_trait]
impl StatsProvider for StubProvider {
    async fn fetch(&self, endpoint: Endpoint, query: Query) -> Result<Value, ProviderError> {
        if self.missing_key {
            return Err(ProviderError::MissingApiKey("X_RAPIDAPI_KEY"));
        }

        self.calls.lock().unwrap().push((endpoint, query.clone()));

        if self.failures.contains(&endpoint) {
            return Err(ProviderError::Status {
                endpoint: endpoint.path(),
                status: StatusCode::BAD_GATEWAY,
            });
        }

        if endpoint == Endpoint::PlayerInfo {
            let slug = query
                .iter()
                .find(|(key, _)| *key == "playerName")
                .map(|(_, value)| value.as_str())
                .unwrap_or_default();
            return self
                .players
                .get(slug)
                .cloned()
                .ok_or_else(|| Self::not_found(endpoint));
        }

        self.responses
            .get(&endpoint)
            .cloned()
            .ok_or_else(|| Self::not_found(endpoint))
    }
}
