//! Data layer for the member engagement leaderboards.
//!
//! Everything here is target independent so the web app and the command line
//! client share one implementation of fetching, caching and ranking.

pub mod cache;
pub mod clock;
pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod kind;
pub mod member;
pub mod pagination;
pub mod stats;
pub mod summary;
pub mod table;
pub mod transport;
pub mod wire;

pub mod prelude {
    pub use crate::cache::*;
    pub use crate::clock::*;
    pub use crate::config::*;
    pub use crate::console::*;
    pub use crate::controller::*;
    pub use crate::error::*;
    pub use crate::fetch::*;
    pub use crate::kind::*;
    pub use crate::pagination::*;
    pub use crate::stats::*;
    pub use crate::summary::*;
    pub use crate::table::*;
    pub use crate::transport::*;
}
