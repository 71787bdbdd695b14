use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use std::time::Duration;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Transient notifications shown after mutations
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    pub fn success(&self, description: impl Into<String>) {
        self.show(ToastKind::Success, "Success!", description.into());
    }

    pub fn error(&self, description: impl Into<String>) {
        self.show(ToastKind::Error, "Error", description.into());
    }

    fn show(&self, kind: ToastKind, title: &str, description: String) {
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.write().push(Toast {
            id,
            kind,
            title: title.to_string(),
            description,
        });

        // Outlives the page that raised it
        let this = *self;
        spawn_forever(async move {
            tokio::time::sleep(TOAST_LIFETIME).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }
}

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    }
}

pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>()
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts.toasts() {
                div {
                    key: "{toast.id}",
                    class: toast_class(toast.kind),
                    div { class: "toast-body",
                        strong { "{toast.title}" }
                        span { "{toast.description}" }
                    }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "✕"
                    }
                }
            }
        }
    }
}
