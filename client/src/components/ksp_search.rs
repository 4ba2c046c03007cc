//! Ksp search box and results container.

use leptos::prelude::*;

use chemref::LoadedDataset;

use crate::components::result_card::ResultCard;
use crate::net::dataset::loading_hint;
use crate::state::search::{ResultsView, SearchState};

/// Search input, trigger button, and result cards.
///
/// The button and Enter key stay inert until `dataset` has settled; the
/// resource is created once per page session by the caller.
#[component]
pub fn KspSearch(dataset: LocalResource<LoadedDataset>) -> impl IntoView {
    let search = RwSignal::new(SearchState::default());

    let ready = move || dataset.get().is_some();

    let submit = move || {
        let Some(data) = dataset.get_untracked() else {
            return;
        };
        search.update(|s| s.submit(&data));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class="ksp-search">
            <div class="ksp-search__bar">
                <input
                    class="ksp-search__input"
                    type="search"
                    placeholder="名称、化学式或离子，如 AgCl、Ag+、硫酸钡"
                    prop:value=move || search.with(|s| s.query.clone())
                    on:input=move |ev| search.update(|s| s.query = event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" disabled=move || !ready() on:click=move |_| submit()>
                    "搜索"
                </button>
            </div>

            {move || {
                let dataset = dataset.get();
                loading_hint(dataset.as_ref()).map(|hint| view! { <p class="ksp-search__status">{hint}</p> })
            }}

            <div class="ksp-search__results">
                {move || {
                    let state = search.get();
                    match state.view() {
                        ResultsView::Idle => {
                            view! { <p class="ksp-search__hint">"输入关键词后按回车或点击“搜索”。"</p> }
                                .into_any()
                        }
                        ResultsView::NoMatches(query) => {
                            view! {
                                <p class="ksp-search__empty">{format!("未找到与“{query}”相关的物质。")}</p>
                            }
                                .into_any()
                        }
                        ResultsView::Matches(_) => {
                            state
                                .results
                                .into_iter()
                                .map(|entry| view! { <ResultCard entry=entry/> })
                                .collect_view()
                                .into_any()
                        }
                    }
                }}
            </div>
        </div>
    }
}
