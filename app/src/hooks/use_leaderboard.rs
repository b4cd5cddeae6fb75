use std::rc::Rc;

use dioxus::prelude::*;
use engage_api::prelude::{
    HttpTransport, LeaderboardController, LeaderboardQuery, LeaderboardState, Prepared, Ticket,
};

use crate::components::{notify, use_toasts, ToastKind, Toasts};
use crate::Session;

/// Loads `query` through the session cache and reloads whenever it changes.
///
/// Each view owns one controller, so a slow response for an ordering the
/// user has already moved away from never overwrites the newer table.
pub fn use_leaderboard(query: LeaderboardQuery) -> Signal<LeaderboardState> {
    let session = use_context::<Session>();
    let toasts = use_toasts();
    let controller = use_hook(|| Rc::new(session.controller()));
    let mut state = use_signal(LeaderboardState::default);

    use_effect(use_reactive((&query,), move |(query,)| {
        match controller.prepare(query) {
            Prepared::Ready(ready) => {
                if let Some(error) = &ready.error {
                    notify(toasts, ToastKind::Error, error.clone());
                }
                state.set(ready);
            }
            Prepared::Pending {
                state: pending,
                ticket,
            } => {
                state.set(pending);
                let controller = controller.clone();
                spawn(async move {
                    update_from_fetch(state, toasts, &controller, ticket).await;
                });
            }
        }
    }));

    state
}

async fn update_from_fetch(
    mut state: Signal<LeaderboardState>,
    toasts: Signal<Toasts>,
    controller: &LeaderboardController<HttpTransport>,
    ticket: Ticket,
) {
    let Some(loaded) = controller.fetch(ticket).await else {
        return;
    };
    if let Some(error) = &loaded.error {
        notify(toasts, ToastKind::Error, error.clone());
    }
    state.set(loaded);
}
