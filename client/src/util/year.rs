//! Footer year stamp.
//!
//! The year is read from the browser clock after hydration, so the
//! server-rendered footer carries no year until the page is live.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

/// Current calendar year from the browser clock. `None` off the browser.
#[must_use]
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Footer text, e.g. `© 2026 溶度积 Ksp 速查`.
#[must_use]
pub fn footer_line(year: Option<u32>) -> String {
    match year {
        Some(year) => format!("© {year} 溶度积 Ksp 速查"),
        None => "溶度积 Ksp 速查".to_owned(),
    }
}
