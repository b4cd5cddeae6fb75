use dioxus::prelude::*;

const TOAST_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            message,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Shows a toast and schedules its removal.
pub fn notify(mut toasts: Signal<Toasts>, kind: ToastKind, message: String) {
    match kind {
        ToastKind::Error => tracing::error!("{}", message),
        ToastKind::Success => tracing::info!("{}", message),
    }
    let id = toasts.write().push(kind, message);
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
        toasts.write().dismiss(id);
    });
}

#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_toasts();
    let items = toasts.read().items.clone();

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 space-y-2",
            for toast in items {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
