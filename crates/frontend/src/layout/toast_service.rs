use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// How long a toast stays before it dismisses itself
const AUTO_DISMISS_MS: u32 = 5_000;
/// Oldest toasts are dropped beyond this many
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Warning => "toast toast--warning",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, newest last
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > MAX_VISIBLE {
            let excess = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..excess);
        }
        id
    }

    /// Returns whether the toast was still visible
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Toast notifications shared through context
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        log::debug!("toast {:?}: {}", kind, message);
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(ToastKind::Warning, message);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack; mount once near the root
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();
    let queue = service.queue;

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| service.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_the_given_toast() {
        let mut q = ToastQueue::default();
        let a = q.push(ToastKind::Success, "Screen created");
        let b = q.push(ToastKind::Error, "Network down");
        assert!(q.dismiss(a));
        assert!(!q.dismiss(a));
        assert_eq!(q.toasts().len(), 1);
        assert_eq!(q.toasts()[0].id, b);
    }

    #[test]
    fn oldest_toasts_are_dropped_past_the_limit() {
        let mut q = ToastQueue::default();
        let first = q.push(ToastKind::Info, "0");
        for i in 1..=MAX_VISIBLE {
            q.push(ToastKind::Info, i.to_string());
        }
        assert_eq!(q.toasts().len(), MAX_VISIBLE);
        assert!(q.toasts().iter().all(|t| t.id != first));
    }
}
