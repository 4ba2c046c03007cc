//! The reference page: element tiles, Ksp search, comparison table, footer.

use leptos::prelude::*;

use crate::components::compare_panel::ComparePanel;
use crate::components::element_grid::ElementGrid;
use crate::components::info_panel::InfoPanel;
use crate::components::ksp_search::KspSearch;
use crate::components::site_nav::SiteNav;
use crate::components::toast::Toast;
use crate::state::ui::UiState;
use crate::util::{theme, year};

/// Single-page layout. Starts the one dataset load for the session.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Restore the stored theme once the page is live in the browser.
    Effect::new(move || {
        let preferred = theme::preferred();
        theme::apply(preferred);
        ui.update(|u| u.theme = preferred);
    });

    let footer_year = RwSignal::new(None::<u32>);
    Effect::new(move || footer_year.set(year::current_year()));

    // Dataset resource: fetched once on mount, never refetched.
    let dataset = LocalResource::new(|| crate::net::dataset::load());

    view! {
        <SiteNav/>
        <main class="home-page">
            <section id="elements" class="home-page__section">
                <h2>"常见元素"</h2>
                <p class="home-page__lead">"点击元素，查看它在沉淀溶解平衡中的常见角色。"</p>
                <ElementGrid/>
            </section>

            <section id="ksp-search" class="home-page__section">
                <h2>"溶度积查询"</h2>
                <p class="home-page__lead">
                    "按名称、化学式或离子搜索；在结果卡片中输入离子浓度，可比较 Q 与 Ksp 判断是否生成沉淀。"
                </p>
                <KspSearch dataset=dataset/>
            </section>

            <section id="compare" class="home-page__section">
                <h2>"对比"</h2>
                <ComparePanel/>
            </section>
        </main>
        <footer class="site-footer">
            <p>{move || year::footer_line(footer_year.get())}</p>
        </footer>
        <InfoPanel/>
        <Toast/>
    }
}
