use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::ProviderSettings;
use crate::errors::ProviderError;

/// HTTP client for a RapidAPI-hosted JSON service
pub struct ApiClient {
    client: Client,
    base_url: String,
    host: String,
    api_key_var: &'static str,
    api_key: Option<String>,
}

impl ApiClient {
    /// Build a client, reading the API key from the configured environment variable
    pub fn new(settings: &ProviderSettings) -> anyhow::Result<Self> {
        let api_key = std::env::var(settings.api_key_var)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::with_api_key(settings, api_key)
    }

    pub fn with_api_key(settings: &ProviderSettings, api_key: Option<String>) -> anyhow::Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            host: settings.host.to_string(),
            api_key_var: settings.api_key_var,
            api_key,
        })
    }

    /// GET `{base_url}/{endpoint}` and decode the body as JSON
    pub async fn get_json(
        &self,
        endpoint: &'static str,
        params: &[(&'static str, String)],
    ) -> Result<Value, ProviderError> {
        let api_key = self.require_key()?;
        let url = self.build_url(endpoint);
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .header("x-rapidapi-host", &self.host)
            .header("x-rapidapi-key", api_key)
            .query(params)
            .send()
            .await
            .map_err(|source| ProviderError::Request { endpoint, source })?;

        if !response.status().is_success() {
            return Err(ProviderError::Status {
                endpoint,
                status: response.status(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| ProviderError::Decode { endpoint, source })
    }

    // --- Helper Methods ---

    fn build_client(user_agent: &str, timeout_secs: u64) -> anyhow::Result<Client> {
        use anyhow::Context;
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    fn require_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey(self.api_key_var))
    }
}
