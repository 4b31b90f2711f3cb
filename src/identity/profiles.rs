use log::debug;
use std::sync::{Arc, Mutex};

use super::slugs::slug_candidates;
use crate::cache::BoundedCache;
use crate::domain::PlayerProfile;
use crate::errors::ProviderError;
use crate::provider::parsers::parse_profile;
use crate::provider::{Endpoint, StatsProvider};

/// Resolves free-text player names to provider profiles, memoised per name
pub struct ProfileResolver {
    provider: Arc<dyn StatsProvider>,
    cache: Mutex<BoundedCache<String, Option<PlayerProfile>>>,
}

impl ProfileResolver {
    pub fn new(provider: Arc<dyn StatsProvider>, capacity: usize) -> Self {
        Self {
            provider,
            cache: Mutex::new(BoundedCache::new(capacity)),
        }
    }

    /// Profile for `name`, trying each slug candidate in order.
    ///
    /// Lookup failures fall through to the next candidate; `None` means no
    /// candidate matched. Only a missing API key is returned as an error.
    pub async fn resolve(&self, name: &str) -> Result<Option<PlayerProfile>, ProviderError> {
        if let Some(hit) = self.cached(name) {
            return Ok(hit);
        }

        let profile = self.lookup(name).await?;
        self.remember(name, profile.clone());
        Ok(profile)
    }

    pub fn cached_len(&self) -> usize {
        self.lock_cache().len()
    }

    // --- Helper Methods ---

    async fn lookup(&self, name: &str) -> Result<Option<PlayerProfile>, ProviderError> {
        for slug in slug_candidates(name) {
            let query = vec![("playerName", slug.clone()), ("getStats", "false".to_string())];
            match self.provider.fetch(Endpoint::PlayerInfo, query).await {
                Ok(raw) => {
                    if let Some(profile) = parse_profile(&raw) {
                        return Ok(Some(profile));
                    }
                    debug!("No profile for slug {}", slug);
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => debug!("Profile lookup for {} failed: {}", slug, e),
            }
        }
        Ok(None)
    }

    fn cached(&self, name: &str) -> Option<Option<PlayerProfile>> {
        self.lock_cache().get(&name.to_string())
    }

    fn remember(&self, name: &str, profile: Option<PlayerProfile>) {
        self.lock_cache().insert(name.to_string(), profile);
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, BoundedCache<String, Option<PlayerProfile>>> {
        // a poisoned cache only ever holds complete entries
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::stub::StubProvider;
    use serde_json::json;

    fn chubb() -> serde_json::Value {
        json!({"body": [{"longName": "Nick Chubb", "team": "HOU"}]})
    }

    #[tokio::test]
    async fn test_falls_through_to_suffixless_slug() {
        let stub = Arc::new(StubProvider::new().with_player("nick-chubb", chubb()));
        let resolver = ProfileResolver::new(stub.clone(), 16);

        let profile = resolver.resolve("Nick Chubb Jr.").await.unwrap().unwrap();

        assert_eq!(profile.team_code().as_deref(), Some("HOU"));
        let slugs: Vec<String> = stub
            .queries_to(Endpoint::PlayerInfo)
            .iter()
            .map(|q| q[0].1.clone())
            .collect();
        assert_eq!(slugs, vec!["nick-chubb-jr", "nick-chubb"]);
    }

    #[tokio::test]
    async fn test_repeat_lookups_hit_the_cache() {
        let stub = Arc::new(StubProvider::new().with_player("nick-chubb", chubb()));
        let resolver = ProfileResolver::new(stub.clone(), 16);

        resolver.resolve("Nick Chubb").await.unwrap();
        resolver.resolve("Nick Chubb").await.unwrap();

        assert_eq!(stub.calls_to(Endpoint::PlayerInfo), 1);
        assert_eq!(resolver.cached_len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_player_resolves_to_none() {
        let stub = Arc::new(StubProvider::new().with_player("someone-else", json!({"body": []})));
        let resolver = ProfileResolver::new(stub, 16);

        assert_eq!(resolver.resolve("Nobody Known").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_key_is_not_swallowed() {
        let resolver = ProfileResolver::new(Arc::new(StubProvider::without_api_key()), 16);
        assert!(resolver.resolve("Nick Chubb").await.is_err());
        assert_eq!(resolver.cached_len(), 0);
    }
}
