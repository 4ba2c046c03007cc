//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                let next = theme::toggle(ui.with_untracked(|u| u.theme));
                ui.update(|u| u.theme = next);
            }
            title="切换深色/浅色主题"
        >
            {move || ui.with(|u| u.theme.toggle_label())}
        </button>
    }
}
