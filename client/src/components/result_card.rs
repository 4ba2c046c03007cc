//! Card for a single search result.

use leptos::prelude::*;

use chemref::compare::toggle_label;
use chemref::{CompareSelection, KspEntry};

use crate::components::precipitation_form::PrecipitationForm;
use crate::components::toast::copy_with_toast;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

/// Result card with compare toggle, equation copy, and calculator form.
///
/// The compare button's state is derived from the selection by formula, so
/// removing the entry from the comparison table resets it here too.
#[component]
pub fn ResultCard(entry: KspEntry) -> impl IntoView {
    let compare = expect_context::<RwSignal<CompareSelection>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let formula = entry.formula.clone();
    let selected = Memo::new(move |_| compare.with(|c| c.contains_formula(&formula)));

    let key = entry.key.clone();
    let calc_open = Memo::new(move |_| ui.with(|u| u.is_calculator_open(&key)));

    let toggle_entry = entry.clone();
    let on_compare = move |_| {
        compare.update(|c| {
            c.toggle(&toggle_entry);
        });
    };

    let calc_key = entry.key.clone();
    let on_calc = move |_| ui.update(|u| u.toggle_calculator(&calc_key));

    let copy_text = entry.copy_text();
    let on_copy = move |_| copy_with_toast(toast, copy_text.clone());

    let form_entry = entry.clone();
    let note = (!entry.note.is_empty()).then(|| {
        let note = entry.note.clone();
        view! { <p class="ksp-card__note">{note}</p> }
    });

    view! {
        <article class="ksp-card" data-key=entry.key.clone()>
            <header class="ksp-card__header">
                <h4 class="ksp-card__name">{entry.name.clone()}</h4>
                <span class="ksp-card__formula">{entry.formula.clone()}</span>
            </header>
            <dl class="ksp-card__facts">
                <dt>"Ksp"</dt>
                <dd>{entry.ksp.clone()}</dd>
                <dt>"离子"</dt>
                <dd>{entry.ion_summary()}</dd>
                <dt>"方程式"</dt>
                <dd class="ksp-card__equation">{entry.equation.clone()}</dd>
            </dl>
            {note}
            <div class="ksp-card__actions">
                <button class="btn" class:btn--active=move || calc_open.get() on:click=on_calc>
                    {move || if calc_open.get() { "收起计算" } else { "沉淀判断" }}
                </button>
                <button class="btn ksp-card__compare" class:btn--active=move || selected.get() on:click=on_compare>
                    {move || toggle_label(selected.get())}
                </button>
                <button class="btn" on:click=on_copy title="复制方程式">
                    "复制方程式"
                </button>
            </div>
            <Show when=move || calc_open.get()>
                <PrecipitationForm entry=form_entry.clone()/>
            </Show>
        </article>
    }
}
