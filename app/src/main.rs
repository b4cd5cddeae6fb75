#![allow(non_snake_case)]

mod components;
mod hooks;
mod pages;
mod route;

use dioxus::prelude::*;
use engage_api::prelude::{ClientConfig, HttpTransport, LeaderboardController, MemoryCache};
use route::Route;

use crate::components::Toasts;

// Configuration
pub const API_URL: &str = "http://localhost:8000";

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(feature = "desktop")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    // Global state providers
    use_context_provider(|| Session::new(ClientConfig::new(API_URL)));
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        Router::<Route> {}
    }
}

/// Everything shared for the lifetime of the page: the client settings and
/// the one leaderboard cache every view reads through.
#[derive(Clone)]
pub struct Session {
    pub config: ClientConfig,
    pub cache: MemoryCache,
}

impl Session {
    pub fn new(config: ClientConfig) -> Self {
        let cache = config.cache();
        Self { config, cache }
    }

    pub fn controller(&self) -> LeaderboardController<HttpTransport> {
        self.config.controller(self.cache.clone())
    }
}
