use log::debug;
use serde_json::Value;

use super::{Endpoint, Query, StatsProvider};
use crate::errors::ProviderError;

/// Try each `(endpoint, query)` in order until `extract` yields a non-empty list.
///
/// Recoverable failures fall through to the next attempt; a fatal one aborts.
/// When every attempt comes back empty the result is an empty list.
pub async fn first_non_empty<T, F>(
    provider: &dyn StatsProvider,
    attempts: Vec<(Endpoint, Query)>,
    extract: F,
) -> Result<Vec<T>, ProviderError>
where
    T: Send,
    F: Fn(&Value) -> Vec<T> + Send + Sync,
{
    for (endpoint, query) in attempts {
        let raw = match provider.fetch(endpoint, query).await {
            Ok(raw) => raw,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                debug!("{} failed, trying next: {}", endpoint.path(), e);
                continue;
            }
        };

        let items = extract(&raw);
        if !items.is_empty() {
            return Ok(items);
        }
        debug!("{} returned nothing usable", endpoint.path());
    }

    Ok(Vec::new())
}
