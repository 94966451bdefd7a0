use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    title: String,
    description: String,
}

/// Centralized transient notifications.
///
/// Every toast auto-dismisses after a few seconds and can be dismissed
/// early by click. Rendered once at the root by `ToastHost`.
#[derive(Clone, Copy)]
pub struct NotifyService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, title: &str, description: &str) {
        self.push(ToastKind::Success, title, description);
    }

    pub fn error(&self, title: &str, description: &str) {
        self.push(ToastKind::Error, title, description);
    }

    fn push(&self, kind: ToastKind, title: &str, description: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                title: title.to_string(),
                description: description.to_string(),
            });
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| {
            list.retain(|toast| toast.id != id);
        });
    }
}

/// Renders active toasts in a corner stack.
///
/// Must be mounted exactly once, at the application root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<NotifyService>().expect("NotifyService not provided in context");

    view! {
        <div class="toast-stack">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let kind_class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=kind_class on:click=move |_| svc.dismiss(id)>
                            <div class="toast__title">{toast.title.clone()}</div>
                            <div class="toast__description">{toast.description.clone()}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
