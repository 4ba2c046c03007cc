//! Top navigation with smooth-scrolling section links.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::util::scroll::{fragment_target, scroll_to_section};

const SECTIONS: &[(&str, &str)] = &[
    ("#elements", "元素"),
    ("#ksp-search", "Ksp 查询"),
    ("#compare", "对比"),
];

#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <nav class="site-nav">
            <span class="site-nav__brand">"溶度积速查"</span>
            {SECTIONS
                .iter()
                .map(|&(href, label)| {
                    view! {
                        <a
                            class="site-nav__link"
                            href=href
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                // Fall back to the browser jump if the section is missing.
                                if fragment_target(href).is_some_and(scroll_to_section) {
                                    ev.prevent_default();
                                }
                            }
                        >
                            {label}
                        </a>
                    }
                })
                .collect_view()}
            <span class="site-nav__spacer"></span>
            <ThemeToggle/>
        </nav>
    }
}
