use std::str::FromStr;

use dioxus::prelude::*;
use engage_api::prelude::{execute, ConsoleHistory, ConsoleRecord, HttpMethod, SystemClock};
use futures::StreamExt;
use strum::IntoEnumIterator;

use crate::components::{notify, use_toasts, ToastKind};
use crate::Session;

#[derive(Clone)]
enum ConsoleAction {
    Send {
        method: HttpMethod,
        url: String,
        body: String,
    },
}

/// Admin page for sending arbitrary requests to the API.
#[component]
pub fn ApiClient() -> Element {
    let session = use_context::<Session>();
    let toasts = use_toasts();
    let mut method = use_signal(HttpMethod::default);
    let mut url = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut history = use_signal(ConsoleHistory::default);

    let console = use_coroutine(move |mut rx: UnboundedReceiver<ConsoleAction>| {
        let transport = session.config.transport();
        async move {
            while let Some(action) = rx.next().await {
                match action {
                    ConsoleAction::Send { method, url, body } => {
                        sending.set(true);
                        let result =
                            execute(&transport, &SystemClock, method, &url, Some(body.as_str()))
                                .await;
                        sending.set(false);
                        match result {
                            Ok(record) => history.write().push(record),
                            Err(err) => notify(toasts, ToastKind::Error, err.to_string()),
                        }
                    }
                }
            }
        }
    });

    let send = move |_| {
        console.send(ConsoleAction::Send {
            method: method(),
            url: url(),
            body: body(),
        });
    };

    let copy_response = move |_| {
        let script = clipboard_script(&history.read().clipboard_text());
        spawn(async move {
            let (kind, message) = copy_outcome(document::eval(&script).await);
            notify(toasts, kind, message);
        });
    };

    let records = history.read().records().to_vec();
    let selected_index = history.read().selected_index();
    let selected = history.read().selected().cloned();

    rsx! {
        div { class: "max-w-6xl mx-auto space-y-6",
            h1 { class: "text-3xl font-bold", "API Client" }

            div { class: "card space-y-4",
                div { class: "flex gap-2",
                    select {
                        class: "input w-32",
                        value: "{method}",
                        onchange: move |evt: FormEvent| {
                            if let Ok(parsed) = HttpMethod::from_str(&evt.value()) {
                                method.set(parsed);
                            }
                        },
                        for choice in HttpMethod::iter() {
                            option { key: "{choice}", value: "{choice}", selected: choice == method(), "{choice}" }
                        }
                    }
                    input {
                        class: "input flex-1",
                        placeholder: "/members/",
                        value: "{url}",
                        oninput: move |evt: FormEvent| url.set(evt.value()),
                    }
                }

                if method().carries_body() {
                    textarea {
                        class: "input w-full font-mono text-sm h-40",
                        placeholder: "{{\"key\": \"value\"}}",
                        value: "{body}",
                        oninput: move |evt: FormEvent| body.set(evt.value()),
                    }
                }

                div { class: "flex justify-end",
                    button {
                        class: "btn btn-primary",
                        disabled: sending(),
                        onclick: send,
                        if sending() { "Sending..." } else { "Send Request" }
                    }
                }
            }

            if !records.is_empty() {
                div { class: "card",
                    div { class: "flex justify-between items-center mb-4",
                        h2 { class: "text-lg font-semibold", "Response History" }
                        button {
                            class: "btn btn-secondary text-sm",
                            onclick: move |_| history.write().clear(),
                            "Clear History"
                        }
                    }

                    div { class: "flex gap-4 items-start",
                        div { class: "w-64 max-h-[500px] overflow-y-auto space-y-2",
                            for (index, record) in records.into_iter().enumerate() {
                                HistoryItem {
                                    key: "{index}",
                                    record,
                                    selected: Some(index) == selected_index,
                                    on_select: move |_| history.write().select(index),
                                }
                            }
                        }

                        if let Some(record) = selected {
                            div { class: "flex-1 space-y-3",
                                div { class: "flex justify-between items-center",
                                    div { class: "flex gap-2",
                                        span {
                                            class: "badge",
                                            style: "color: {record.status_class().color()};",
                                            "Status: {record.status}"
                                        }
                                        span { class: "badge", "{record.duration_ms} ms" }
                                    }
                                    button {
                                        class: "btn btn-secondary text-sm",
                                        onclick: copy_response,
                                        "Copy Response"
                                    }
                                }
                                pre { class: "font-mono text-xs overflow-auto max-h-[500px] p-3 rounded",
                                    "{record.pretty_response()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryItem(record: ConsoleRecord, selected: bool, on_select: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: if selected { "card-outline cursor-pointer bg-elevated" } else { "card-outline cursor-pointer" },
            onclick: move |_| on_select.call(()),
            div { class: "flex justify-between",
                span { class: "badge", "{record.method}" }
                span {
                    class: "badge",
                    style: "color: {record.status_class().color()};",
                    "{record.status}"
                }
            }
            p { class: "text-sm truncate", "{record.url}" }
            p { class: "text-xs text-low", "{record.duration_ms} ms" }
        }
    }
}

/// Script that writes `text` to the clipboard. The write is awaited so a
/// rejected permission surfaces as an eval error.
fn clipboard_script(text: &str) -> String {
    let payload = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    format!("await navigator.clipboard.writeText({payload}); return true;")
}

fn copy_outcome<T, E: std::fmt::Display>(result: Result<T, E>) -> (ToastKind, String) {
    match result {
        Ok(_) => (ToastKind::Success, "Response copied".to_string()),
        Err(err) => (ToastKind::Error, format!("Failed to copy response: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_script_quotes_the_text() {
        let script = clipboard_script(r#"{"detail": "it's \"quoted\""}"#);
        assert_eq!(
            script,
            r#"await navigator.clipboard.writeText("{\"detail\": \"it's \\\"quoted\\\"\"}"); return true;"#
        );
    }

    #[test]
    fn copy_toast_follows_the_clipboard_result() {
        assert_eq!(
            copy_outcome::<_, String>(Ok(())),
            (ToastKind::Success, "Response copied".to_string())
        );
        assert_eq!(
            copy_outcome::<(), _>(Err("Write permission denied")),
            (
                ToastKind::Error,
                "Failed to copy response: Write permission denied".to_string()
            )
        );
    }
}
