use dioxus::prelude::*;

use crate::components::Layout;
use crate::pages::{ApiClient, Leaderboard};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Leaderboard {},
    #[route("/admin/api-client")]
    ApiClient {},
}
