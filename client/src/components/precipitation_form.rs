//! Q vs Ksp calculator form shown inside a result card.

use leptos::prelude::*;

use chemref::quotient::parse_concentration;
use chemref::{KspEntry, PrecipitationCheck};

/// One concentration field per ion; submitting evaluates Q against Ksp.
///
/// Blank or unparseable fields count as zero. Negative values are passed
/// through unchanged.
#[component]
pub fn PrecipitationForm(entry: KspEntry) -> impl IntoView {
    let fields: Vec<RwSignal<String>> = entry.ions.iter().map(|_| RwSignal::new(String::new())).collect();
    let result = RwSignal::new(None::<PrecipitationCheck>);

    let calc_entry = entry.clone();
    let calc_fields = fields.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let concentrations: Vec<f64> = calc_fields
            .iter()
            .map(|field| parse_concentration(&field.get_untracked()))
            .collect();
        result.set(Some(PrecipitationCheck::evaluate(&calc_entry, &concentrations)));
    };

    view! {
        <form class="calc-form" on:submit=on_submit>
            {entry
                .ions
                .iter()
                .zip(fields)
                .map(|(ion, value)| {
                    let label = if ion.coefficient > 1 {
                        format!("[{}]（系数 {}）", ion.label, ion.coefficient)
                    } else {
                        format!("[{}]", ion.label)
                    };
                    view! {
                        <label class="calc-form__field">
                            <span class="calc-form__label">{label}</span>
                            <input
                                class="calc-form__input"
                                type="text"
                                inputmode="decimal"
                                placeholder="mol/L，如 1e-4"
                                prop:value=move || value.get()
                                on:input=move |ev| value.set(event_target_value(&ev))
                            />
                        </label>
                    }
                })
                .collect_view()}
            <button class="btn btn--primary" type="submit">
                "计算 Q"
            </button>
            {move || {
                result
                    .get()
                    .map(|check| {
                        view! {
                            <p class=format!(
                                "calc-form__verdict calc-form__verdict--{}",
                                check.verdict.css_modifier(),
                            )>
                                <span class="calc-form__q">{check.summary()}</span>
                                " "
                                <span class="calc-form__message">{check.verdict.message()}</span>
                            </p>
                        }
                    })
            }}
        </form>
    }
}
