use async_trait::async_trait;
use serde_json::Value;

use super::{Endpoint, Query, StatsProvider};
use crate::config::ProviderSettings;
use crate::errors::ProviderError;
use crate::http::ApiClient;

/// Tank01 NFL statistics API on RapidAPI
pub struct Tank01Client {
    client: ApiClient,
}

impl Tank01Client {
    pub fn new(settings: &ProviderSettings) -> anyhow::Result<Self> {
        let client = ApiClient::new(settings)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl StatsProvider for Tank01Client {
    async fn fetch(&self, endpoint: Endpoint, query: Query) -> Result<Value, ProviderError> {
        self.client.get_json(endpoint.path(), &query).await
    }
}
