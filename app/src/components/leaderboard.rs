use dioxus::prelude::*;
use engage_api::prelude::{
    cell, rank_rows, CellTone, CellValue, Column, LeaderboardKind, LeaderboardRow, SortDirection,
    SortState,
};

/// Ranked table for any leaderboard kind, driven by the kind's columns.
#[component]
pub fn LeaderboardTable(
    kind: LeaderboardKind,
    rows: Vec<LeaderboardRow>,
    sort: SortState,
    on_sort: EventHandler<Column>,
) -> Element {
    let columns = kind.columns();
    let active = sort.active_column();
    let ranked = rank_rows(&rows, sort.direction);

    if ranked.is_empty() {
        return rsx! {
            div { class: "text-center py-12",
                p { class: "text-low", "No data available" }
            }
        };
    }

    rsx! {
        div { class: "overflow-x-auto",
            table { class: "w-full text-sm",
                thead {
                    tr { class: "border-b elevated-border text-low",
                        for column in columns.iter().copied() {
                            th {
                                key: "{column.key}",
                                class: header_class(column, Some(column.key) == active),
                                onclick: move |_| on_sort.call(column),
                                "{column.label}"
                                if Some(column.key) == active {
                                    span { class: "ml-1", {chevron(sort.direction)} }
                                }
                            }
                        }
                    }
                }
                tbody { class: "divide-y divide-gray-800",
                    for ranked in ranked.iter() {
                        tr { key: "{ranked.row.username()}",
                            for column in columns.iter() {
                                td {
                                    key: "{column.key}",
                                    class: if column.sortable { "py-3 text-right" } else { "py-3" },
                                    {render_cell(cell(kind, ranked, column.key))}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn header_class(column: Column, active: bool) -> &'static str {
    match (column.sortable, active) {
        (false, _) => "py-3 text-left font-medium",
        (true, false) => "py-3 text-right font-medium cursor-pointer hover:text-gold",
        (true, true) => "py-3 text-right font-semibold cursor-pointer text-gold",
    }
}

fn chevron(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "▲",
        SortDirection::Desc => "▼",
    }
}

fn tone_class(tone: CellTone) -> &'static str {
    match tone {
        CellTone::Plain => "text-high",
        CellTone::Easy => "text-green-400",
        CellTone::Medium => "text-yellow-400",
        CellTone::Hard => "text-red-400",
    }
}

fn render_cell(value: CellValue) -> Element {
    match value {
        CellValue::Rank(rank) => rsx! {
            span { class: "font-mono text-mid", "#{rank}" }
        },
        CellValue::Username {
            name,
            profile_url,
            medal,
        } => {
            let glyph = medal.map(|medal| medal.glyph()).unwrap_or_default();
            rsx! {
                if let Some(url) = profile_url {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "font-medium hover:text-gold transition-colors",
                        "{name}"
                    }
                } else {
                    span { class: "font-medium", "{name}" }
                }
                if !glyph.is_empty() {
                    span { class: "ml-2", "{glyph}" }
                }
            }
        }
        CellValue::Count { value, tone } => rsx! {
            span { class: "font-mono {tone_class(tone)}", "{value}" }
        },
        CellValue::Empty => rsx! {
            span { class: "text-low", "-" }
        },
    }
}
