use super::*;

#[test]
fn footer_line_stamps_year() {
    assert_eq!(footer_line(Some(2026)), "© 2026 溶度积 Ksp 速查");
}

#[test]
fn footer_line_without_year_keeps_title() {
    assert_eq!(footer_line(None), "溶度积 Ksp 速查");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn current_year_is_unknown_off_browser() {
    assert_eq!(current_year(), None);
}
