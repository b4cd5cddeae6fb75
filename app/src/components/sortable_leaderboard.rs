use dioxus::prelude::*;
use engage_api::prelude::{
    format_last_updated, Column, LeaderboardKind, LeaderboardQuery, OrderBy, PageControls,
    SortAction, SortDirection, SortState,
};

use crate::components::{LeaderboardTable, OrderBySelect};
use crate::hooks::use_leaderboard;
use crate::Session;

/// One leaderboard tab: order-by menu, sortable table and, for offset
/// paginated kinds, page controls. The ordering is owned by the caller so it
/// survives switching tabs; direction and page are local.
#[component]
pub fn SortableLeaderboard(
    kind: LeaderboardKind,
    order_by: OrderBy,
    on_order_change: EventHandler<OrderBy>,
) -> Element {
    let mut direction = use_signal(SortDirection::default);
    let mut page = use_signal(|| 1u32);
    let page_size = use_context::<Session>().config.page_size;

    let query = LeaderboardQuery::new(kind, order_by).with_page(page());
    let state = use_leaderboard(query);
    let sort = SortState {
        kind,
        order_by,
        direction: direction(),
    };

    let on_sort = move |column: Column| {
        let mut next = sort;
        match next.on_header_click(&column) {
            SortAction::Refetch(order_by) => {
                direction.set(next.direction);
                on_order_change.call(order_by);
            }
            SortAction::ToggleDirection => direction.set(next.direction),
            SortAction::Ignore => {}
        }
    };

    let on_select = move |order_by: OrderBy| {
        let mut next = sort;
        next.select(order_by);
        direction.set(next.direction);
        on_order_change.call(order_by);
    };

    let state = state.read();

    if state.is_loading {
        return rsx! {
            div { class: "flex justify-center items-center h-96",
                div { class: "animate-spin w-8 h-8 border-2 border-gold border-t-transparent rounded-full" }
            }
        };
    }

    if let Some(error) = &state.error {
        return rsx! {
            div { class: "flex justify-center items-center h-96",
                p { class: "text-red-400", "{error}" }
            }
        };
    }

    let last_updated = format_last_updated(&state.data);
    let controls = state
        .count
        .filter(|_| kind.is_paginated())
        .map(|count| PageControls::new(page(), count, page_size));

    rsx! {
        div {
            div { class: "flex justify-between items-center mb-4",
                p { class: "text-sm text-low", "Last updated: {last_updated}" }
                OrderBySelect { kind, value: order_by, on_change: on_select }
            }

            LeaderboardTable {
                kind,
                rows: state.data.clone(),
                sort,
                on_sort,
            }

            if let Some(controls) = controls {
                div { class: "flex justify-center items-center gap-4 mt-4",
                    button {
                        class: "btn btn-secondary text-sm",
                        disabled: !controls.has_previous(),
                        onclick: move |_| {
                            if let Some(previous) = controls.previous() {
                                page.set(previous);
                            }
                        },
                        "Previous"
                    }
                    span { class: "text-sm text-mid", "Page {controls.page} of {controls.total_pages}" }
                    button {
                        class: "btn btn-secondary text-sm",
                        disabled: !controls.has_next(),
                        onclick: move |_| {
                            if let Some(next) = controls.next() {
                                page.set(next);
                            }
                        },
                        "Next"
                    }
                }
            }
        }
    }
}
