//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use chemref::CompareSelection;

use crate::pages::home::HomePage;
use crate::state::{panel::InfoPanelState, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-CN">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page-session state contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let panel = RwSignal::new(InfoPanelState::default());
    let compare = RwSignal::new(CompareSelection::new());
    let toast = RwSignal::new(ToastState::default());

    provide_context(ui);
    provide_context(panel);
    provide_context(compare);
    provide_context(toast);

    view! {
        <Stylesheet id="leptos" href="/pkg/kspedia.css"/>
        <Title text="溶度积 Ksp 速查"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
