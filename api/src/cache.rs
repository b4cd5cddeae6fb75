use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};

use crate::clock::{Clock, SystemClock};
use crate::kind::{LeaderboardKind, LeaderboardQuery, OrderBy};
use crate::stats::LeaderboardPage;

pub const CACHE_TTL_MINUTES: i64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: LeaderboardKind,
    pub order_by: OrderBy,
    pub page: u32,
}

impl From<&LeaderboardQuery> for CacheKey {
    fn from(query: &LeaderboardQuery) -> Self {
        let query = query.normalized();
        Self {
            kind: query.kind,
            order_by: query.order_by,
            page: query.page,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub page: LeaderboardPage,
    pub timestamp: DateTime<Utc>,
}

/// Storage for fetched pages. `get` only ever returns fresh pages.
pub trait LeaderboardCache {
    fn get(&self, key: &CacheKey) -> Option<LeaderboardPage>;
    fn set(&self, key: CacheKey, page: LeaderboardPage);
}

/// Session-wide page cache. Clones share storage, so every controller built
/// from the same handle sees the same entries.
#[derive(Clone, Debug)]
pub struct MemoryCache<C = SystemClock> {
    clock: C,
    ttl: TimeDelta,
    entries: Arc<Mutex<HashMap<CacheKey, CacheEntry>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MemoryCache<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            ttl: TimeDelta::minutes(CACHE_TTL_MINUTES),
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_ttl(mut self, ttl: TimeDelta) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<CacheKey, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_fresh(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        now - entry.timestamp < self.ttl
    }
}

impl<C: Clock> LeaderboardCache for MemoryCache<C> {
    fn get(&self, key: &CacheKey) -> Option<LeaderboardPage> {
        let now = self.clock.now();
        let entries = self.entries();
        let entry = entries.get(key)?;
        if self.is_fresh(entry, now) {
            tracing::debug!(kind = %key.kind, order_by = %key.order_by, page = key.page, "cache hit");
            Some(entry.page.clone())
        } else {
            tracing::debug!(kind = %key.kind, order_by = %key.order_by, page = key.page, "cache entry stale");
            None
        }
    }

    fn set(&self, key: CacheKey, page: LeaderboardPage) {
        let now = self.clock.now();
        let mut entries = self.entries();
        entries.retain(|_, entry| now - entry.timestamp < self.ttl);
        entries.insert(
            key,
            CacheEntry {
                page,
                timestamp: now,
            },
        );
    }
}

impl<T: LeaderboardCache> LeaderboardCache for Arc<T> {
    fn get(&self, key: &CacheKey) -> Option<LeaderboardPage> {
        T::get(self, key)
    }

    fn set(&self, key: CacheKey, page: LeaderboardPage) {
        T::set(self, key, page)
    }
}

impl<T: LeaderboardCache> LeaderboardCache for Rc<T> {
    fn get(&self, key: &CacheKey) -> Option<LeaderboardPage> {
        T::get(self, key)
    }

    fn set(&self, key: CacheKey, page: LeaderboardPage) {
        T::set(self, key, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::kind::{GitHubOrderBy, LeaderboardQuery};
    use chrono::TimeZone;

    fn key(page: u32) -> CacheKey {
        CacheKey::from(
            &LeaderboardQuery::new(
                LeaderboardKind::Attendance,
                LeaderboardKind::Attendance.default_order_by(),
            )
            .with_page(page),
        )
    }

    fn clock() -> ManualClock {
        ManualClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn entries_expire_after_ten_minutes() {
        let clock = clock();
        let cache = MemoryCache::with_clock(clock.clone());
        cache.set(key(1), LeaderboardPage::default());

        clock.advance(TimeDelta::minutes(9) + TimeDelta::seconds(59));
        assert!(cache.get(&key(1)).is_some());

        clock.advance(TimeDelta::seconds(1));
        assert!(cache.get(&key(1)).is_none());
    }

    #[test]
    fn pages_are_cached_independently() {
        let cache = MemoryCache::with_clock(clock());
        cache.set(
            key(1),
            LeaderboardPage {
                count: Some(120),
                ..Default::default()
            },
        );
        assert!(cache.get(&key(2)).is_none());
        assert_eq!(cache.get(&key(1)).and_then(|p| p.count), Some(120));
    }

    #[test]
    fn clones_share_storage() {
        let cache = MemoryCache::with_clock(clock());
        let other = cache.clone();
        other.set(key(1), LeaderboardPage::default());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn unpaginated_keys_ignore_the_page() {
        let query = LeaderboardQuery::new(
            LeaderboardKind::GitHub,
            crate::kind::OrderBy::GitHub(GitHubOrderBy::Followers),
        );
        assert_eq!(
            CacheKey::from(&query.with_page(3)),
            CacheKey::from(&query)
        );
    }

    #[test]
    fn stale_entries_are_dropped_on_write() {
        let clock = clock();
        let cache = MemoryCache::with_clock(clock.clone());
        cache.set(key(1), LeaderboardPage::default());
        clock.advance(TimeDelta::minutes(11));
        cache.set(key(2), LeaderboardPage::default());
        assert_eq!(cache.len(), 1);
    }
}
