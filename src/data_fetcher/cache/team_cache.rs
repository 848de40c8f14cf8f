//! Team list cache with LRU eviction, keyed by the full filter tuple

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument};

use crate::constants::cache::TEAM_CACHE_CAPACITY;
use crate::data_fetcher::models::Team;

/// Cache key for a team listing. Blank filters are normalized to `None` so
/// that `Some("")` and `None` share an entry, matching how the query omits
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamQuery {
    pub conference: Option<String>,
    pub division: Option<String>,
}

impl TeamQuery {
    pub fn new(conference: Option<&str>, division: Option<&str>) -> Self {
        fn normalize(value: Option<&str>) -> Option<String> {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        Self {
            conference: normalize(conference),
            division: normalize(division),
        }
    }
}

/// Memoized team listings. Entries never expire; team data changes only
/// between seasons.
pub struct TeamCache {
    entries: Mutex<LruCache<TeamQuery, Vec<Team>>>,
}

impl Default for TeamCache {
    fn default() -> Self {
        Self::with_capacity(TEAM_CACHE_CAPACITY)
    }
}

impl TeamCache {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<TeamQuery, Vec<Team>>> {
        // A panic while holding the lock cannot leave a half-written entry
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns the cached teams for `key`, or runs `fetch` and caches its
    /// result. The lock is held while fetching so concurrent callers never
    /// populate the same key twice. Errors are not cached.
    #[instrument(skip(self, fetch))]
    pub fn get_or_try_fetch<E>(
        &self,
        key: TeamQuery,
        fetch: impl FnOnce() -> Result<Vec<Team>, E>,
    ) -> Result<Vec<Team>, E> {
        let mut cache = self.lock();

        if let Some(teams) = cache.get(&key) {
            debug!("Cache hit for teams: {} entries", teams.len());
            return Ok(teams.clone());
        }

        debug!("Cache miss for teams");
        let teams = fetch()?;
        info!("Caching {} teams", teams.len());
        cache.put(key, teams.clone());
        Ok(teams)
    }
}
