//! The leaderboard loader behind every view.
//!
//! A view hands its current [`LeaderboardQuery`] to the controller whenever
//! the kind, ordering or page changes. Invalid combinations and cache hits
//! resolve immediately; everything else goes to the network. Each load takes
//! a generation ticket, and a response that arrives after a newer query was
//! prepared is cached but never shown.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::cache::{CacheKey, LeaderboardCache, MemoryCache};
use crate::fetch::{fetch_leaderboard, ATTENDANCE_PAGE_SIZE};
use crate::kind::LeaderboardQuery;
use crate::pagination::total_pages;
use crate::stats::{LeaderboardPage, LeaderboardRow};
use crate::transport::Transport;

pub const INVALID_ORDERING_MESSAGE: &str = "Invalid ordering for provided leaderboard";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LeaderboardState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub data: Vec<LeaderboardRow>,
    pub count: Option<u64>,
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl LeaderboardState {
    fn invalid_ordering() -> Self {
        Self {
            error: Some(INVALID_ORDERING_MESSAGE.to_string()),
            ..Default::default()
        }
    }

    fn from_page(page: LeaderboardPage) -> Self {
        Self {
            is_loading: false,
            error: None,
            data: page.data,
            count: page.count,
            next: page.next,
            previous: page.previous,
        }
    }

    pub fn total_pages(&self, page_size: u32) -> Option<u32> {
        self.count.map(|count| total_pages(count, page_size))
    }
}

/// Proof that a load was started for `query`. Only the latest ticket may
/// update the visible state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    query: LeaderboardQuery,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Prepared {
    /// Nothing to fetch: invalid ordering or a fresh cache entry.
    Ready(LeaderboardState),
    /// A fetch is needed; `state` is the loading state to show meanwhile.
    Pending {
        state: LeaderboardState,
        ticket: Ticket,
    },
}

pub struct LeaderboardController<T, C = MemoryCache> {
    transport: T,
    cache: C,
    page_size: u32,
    generation: AtomicU64,
    state: Mutex<LeaderboardState>,
}

impl<T: Transport, C: LeaderboardCache> LeaderboardController<T, C> {
    pub fn new(transport: T, cache: C) -> Self {
        Self {
            transport,
            cache,
            page_size: ATTENDANCE_PAGE_SIZE,
            generation: AtomicU64::new(0),
            state: Mutex::new(LeaderboardState::default()),
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn state(&self) -> LeaderboardState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, LeaderboardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, ticket: &Ticket) -> bool {
        self.generation.load(AtomicOrdering::SeqCst) == ticket.generation
    }

    /// Resolves what can be resolved without the network. Any load still in
    /// flight from an earlier query is superseded.
    pub fn prepare(&self, query: LeaderboardQuery) -> Prepared {
        let generation = self.generation.fetch_add(1, AtomicOrdering::SeqCst) + 1;

        if !query.is_valid() {
            tracing::warn!(kind = %query.kind, order_by = %query.order_by, "rejecting ordering for kind");
            let state = LeaderboardState::invalid_ordering();
            *self.lock() = state.clone();
            return Prepared::Ready(state);
        }

        let query = query.normalized();
        if let Some(page) = self.cache.get(&CacheKey::from(&query)) {
            let state = LeaderboardState::from_page(page);
            *self.lock() = state.clone();
            return Prepared::Ready(state);
        }

        let mut state = self.lock();
        state.is_loading = true;
        state.error = None;
        Prepared::Pending {
            state: state.clone(),
            ticket: Ticket { generation, query },
        }
    }

    /// Runs the network part of a load. Returns the new state, or `None` when
    /// a newer query was prepared while this one was in flight.
    pub async fn fetch(&self, ticket: Ticket) -> Option<LeaderboardState> {
        let query = ticket.query;
        let result = fetch_leaderboard(&self.transport, &query, self.page_size).await;

        match result {
            Ok(page) => {
                let page = page.ranked();
                self.cache.set(CacheKey::from(&query), page.clone());
                if !self.is_current(&ticket) {
                    tracing::debug!(kind = %query.kind, order_by = %query.order_by, page = query.page, "discarding superseded response");
                    return None;
                }
                let state = LeaderboardState::from_page(page);
                *self.lock() = state.clone();
                Some(state)
            }
            Err(err) => {
                tracing::error!(kind = %query.kind, order_by = %query.order_by, page = query.page, error = %err, "failed to load leaderboard");
                if !self.is_current(&ticket) {
                    return None;
                }
                let mut state = self.lock();
                state.is_loading = false;
                state.error = Some(err.to_string());
                Some(state.clone())
            }
        }
    }

    /// `prepare` followed by `fetch` when needed.
    pub async fn load(&self, query: LeaderboardQuery) -> LeaderboardState {
        match self.prepare(query) {
            Prepared::Ready(state) => state,
            Prepared::Pending { ticket, .. } => match self.fetch(ticket).await {
                Some(state) => state,
                None => self.state(),
            },
        }
    }
}
