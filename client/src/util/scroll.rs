//! Smooth scrolling for in-page anchor links.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id targeted by a fragment href (`#search` → `search`).
///
/// Returns `None` for empty fragments and non-fragment hrefs, which are left
/// to the browser.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scroll the element with `id` into view.
///
/// Returns `false` when no such element exists (or outside the browser).
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}
