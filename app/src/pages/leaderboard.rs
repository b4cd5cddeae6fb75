use std::collections::HashMap;

use dioxus::prelude::*;
use engage_api::prelude::{LeaderboardKind, OrderBy};
use strum::IntoEnumIterator;

use crate::components::SortableLeaderboard;

#[component]
pub fn Leaderboard() -> Element {
    let mut active = use_signal(|| LeaderboardKind::LeetCode);
    // Chosen ordering per tab, kept while switching between tabs.
    let mut orderings = use_signal(|| {
        LeaderboardKind::iter()
            .map(|kind| (kind, kind.default_order_by()))
            .collect::<HashMap<LeaderboardKind, OrderBy>>()
    });

    let kind = active();
    let order_by = orderings
        .read()
        .get(&kind)
        .copied()
        .unwrap_or_else(|| kind.default_order_by());

    rsx! {
        div { class: "max-w-6xl mx-auto",
            h1 { class: "text-3xl font-bold mb-8", "Leaderboards" }

            div { class: "flex flex-wrap gap-2 border-b elevated-border mb-6",
                role: "tablist",
                for tab in LeaderboardKind::iter() {
                    button {
                        key: "{tab}",
                        role: "tab",
                        class: if tab == kind { "tab tab-active" } else { "tab" },
                        onclick: move |_| active.set(tab),
                        "{tab.label()}"
                    }
                }
            }

            div { class: "card",
                SortableLeaderboard {
                    key: "{kind}",
                    kind,
                    order_by,
                    on_order_change: move |order_by: OrderBy| {
                        orderings.write().insert(kind, order_by);
                    },
                }
            }
        }
    }
}
