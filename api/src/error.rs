use thiserror::Error;

use crate::kind::LeaderboardKind;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("Failed to get {leaderboard} leaderboard (status {status})")]
    Status {
        leaderboard: &'static str,
        status: u16,
    },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid ordering for provided leaderboard")]
    InvalidOrdering {
        kind: LeaderboardKind,
        order_by: String,
    },

    #[error("Invalid leaderboard type was provided: {0}")]
    UnknownKind(String),

    #[error("Unknown ordering: {0}")]
    UnknownOrdering(String),
}

pub type LeaderboardResult<T> = Result<T, LeaderboardError>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid JSON in request body: {0}")]
    InvalidBody(#[source] serde_json::Error),
}
