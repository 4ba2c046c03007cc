//! Toast notification host and helpers.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Show a toast and schedule its auto-dismissal.
pub fn show_toast(toast: RwSignal<ToastState>, message: &str, kind: ToastKind) {
    let mut seq = 0;
    toast.update(|t| seq = t.push(message, kind));

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_DURATION_MS).await;
            toast.update(|t| {
                t.dismiss(seq);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = seq;
    }
}

/// Copy `text` to the clipboard and report the outcome as a toast.
pub fn copy_with_toast(toast: RwSignal<ToastState>, text: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let outcome = crate::util::clipboard::copy_text(&text).await;
            if outcome.is_none() {
                log::warn!("clipboard copy failed");
            }
            let (message, kind) = crate::util::clipboard::outcome_toast(outcome);
            show_toast(toast, message, kind);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toast, text);
    }
}

/// Single toast slot; renders nothing while no message is active.
#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        {move || {
            toast
                .with(|t| {
                    t.message.clone().map(|message| (message, t.kind == ToastKind::Error))
                })
                .map(|(message, is_error)| {
                    view! {
                        <div class="toast" class:toast--error=is_error role="status">
                            {message}
                        </div>
                    }
                })
        }}
    }
}
