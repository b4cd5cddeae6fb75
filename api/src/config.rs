use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::cache::{MemoryCache, CACHE_TTL_MINUTES};
use crate::controller::LeaderboardController;
use crate::fetch::ATTENDANCE_PAGE_SIZE;
use crate::transport::HttpTransport;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub page_size: u32,
    pub cache_ttl_minutes: i64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            page_size: ATTENDANCE_PAGE_SIZE,
            cache_ttl_minutes: CACHE_TTL_MINUTES,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn transport(&self) -> HttpTransport {
        HttpTransport::new(self.base_url.clone())
    }

    /// Cache with the configured lifetime. A TTL chrono cannot represent
    /// falls back to the default.
    pub fn cache(&self) -> MemoryCache {
        MemoryCache::new().with_ttl(self.cache_ttl())
    }

    pub fn cache_ttl(&self) -> TimeDelta {
        TimeDelta::try_minutes(self.cache_ttl_minutes).unwrap_or_else(|| {
            tracing::warn!(
                minutes = self.cache_ttl_minutes,
                "cache TTL out of range, using default"
            );
            TimeDelta::minutes(CACHE_TTL_MINUTES)
        })
    }

    /// Controller over `cache`, so several views can share one session cache.
    pub fn controller(&self, cache: MemoryCache) -> LeaderboardController<HttpTransport> {
        LeaderboardController::new(self.transport(), cache).with_page_size(self.page_size)
    }
}
