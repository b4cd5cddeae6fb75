use dioxus::prelude::*;
use engage_api::prelude::{LeaderboardKind, OrderBy};

#[component]
pub fn OrderBySelect(kind: LeaderboardKind, value: OrderBy, on_change: EventHandler<OrderBy>) -> Element {
    rsx! {
        select {
            class: "input text-sm",
            value: "{value}",
            onchange: move |evt: FormEvent| {
                match OrderBy::parse_for(kind, &evt.value()) {
                    Ok(order_by) => on_change.call(order_by),
                    Err(err) => tracing::warn!("ignoring ordering selection: {}", err),
                }
            },
            for (order_by, label) in kind.order_options() {
                option {
                    key: "{order_by}",
                    value: "{order_by}",
                    selected: order_by == value,
                    "{label}"
                }
            }
        }
    }
}
