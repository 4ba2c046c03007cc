//! Side-by-side comparison table.

use leptos::prelude::*;

use chemref::CompareSelection;

/// Renders the comparison selection, rebuilt from scratch on every change.
#[component]
pub fn ComparePanel() -> impl IntoView {
    let compare = expect_context::<RwSignal<CompareSelection>>();

    view! {
        <div class="compare-panel">
            {move || {
                let rows = compare.with(CompareSelection::rows);
                if rows.is_empty() {
                    return view! {
                        <p class="compare-panel__empty">
                            "尚未选择物质。在搜索结果中点击“加入对比”即可在此并排比较。"
                        </p>
                    }
                        .into_any();
                }

                view! {
                    <div class="compare-panel__body">
                        <table class="compare-panel__table">
                            <thead>
                                <tr>
                                    <th>"名称"</th>
                                    <th>"化学式"</th>
                                    <th>"Ksp"</th>
                                    <th>"离子"</th>
                                    <th>"方程式"</th>
                                    <th>"溶解性"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        let key = row.key.clone();
                                        view! {
                                            <tr>
                                                <td>{row.name}</td>
                                                <td class="compare-panel__formula">{row.formula}</td>
                                                <td>{row.ksp}</td>
                                                <td>{row.ions}</td>
                                                <td>{row.equation}</td>
                                                <td>{row.solubility}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--small"
                                                        title="从对比中移除"
                                                        on:click=move |_| {
                                                            compare.update(|c| {
                                                                c.remove(&key);
                                                            });
                                                        }
                                                    >
                                                        "移除"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                        <button class="btn compare-panel__clear" on:click=move |_| compare.update(CompareSelection::clear)>
                            "清空对比"
                        </button>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
