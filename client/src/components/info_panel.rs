//! Element info panel.
//!
//! Nothing is rendered until the first successful open; after that the same
//! panel stays in the DOM and only its visibility class and content change.

use leptos::prelude::*;

use crate::state::panel::InfoPanelState;

/// Floating panel with element details. Closes on the ✕ button or Escape.
#[component]
pub fn InfoPanel() -> impl IntoView {
    let panel = expect_context::<RwSignal<InfoPanelState>>();

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && panel.with_untracked(|p| p.visible) {
            panel.update(InfoPanelState::close);
        }
    });
    on_cleanup(move || handle.remove());

    let visible = move || panel.with(|p| p.visible);

    view! {
        <Show when=move || panel.with(|p| p.mounted)>
            <aside
                class="info-panel"
                class:info-panel--visible=visible
                role="dialog"
                aria-hidden=move || (!visible()).to_string()
            >
                <div class="info-panel__header">
                    <h3 class="info-panel__title">{move || panel.with(InfoPanelState::title)}</h3>
                    <button
                        class="info-panel__close"
                        title="关闭"
                        on:click=move |_| panel.update(InfoPanelState::close)
                    >
                        "✕"
                    </button>
                </div>
                <p class="info-panel__body">{move || panel.with(InfoPanelState::body)}</p>
            </aside>
        </Show>
    }
}
