//! Bottom-right stack of transient notifications.

#[cfg(test)]
#[path = "toaster_test.rs"]
mod toaster_test;

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Renders `ToastState` from context. Clicking a toast dismisses it.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast_class(toast.kind) on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
