use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_theme_light() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn ui_state_default_no_calculator_open() {
    let state = UiState::default();
    assert!(state.open_calculators.is_empty());
}

// =============================================================
// Calculator toggling
// =============================================================

#[test]
fn toggle_calculator_opens_then_closes() {
    let mut state = UiState::default();
    state.toggle_calculator("agcl");
    assert!(state.is_calculator_open("agcl"));
    state.toggle_calculator("agcl");
    assert!(!state.is_calculator_open("agcl"));
}

#[test]
fn opening_second_calculator_keeps_first_open() {
    let mut state = UiState::default();
    state.toggle_calculator("agcl");
    state.toggle_calculator("baso4");
    assert!(state.is_calculator_open("agcl"));
    assert!(state.is_calculator_open("baso4"));
}

#[test]
fn closing_one_calculator_leaves_others_alone() {
    let mut state = UiState::default();
    state.toggle_calculator("agcl");
    state.toggle_calculator("cuoh2");
    state.toggle_calculator("agcl");
    assert!(!state.is_calculator_open("agcl"));
    assert!(state.is_calculator_open("cuoh2"));
}
