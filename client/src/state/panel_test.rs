use super::*;

#[test]
fn default_panel_is_unmounted_and_hidden() {
    let state = InfoPanelState::default();
    assert!(!state.mounted);
    assert!(!state.visible);
    assert!(state.current.is_none());
}

#[test]
fn show_known_key_mounts_and_populates() {
    let mut state = InfoPanelState::default();
    assert!(state.show("barium"));
    assert!(state.mounted);
    assert!(state.visible);
    assert_eq!(state.title(), "钡 Ba（原子序数 56）");
    assert!(state.body().contains("BaSO₄"));
}

#[test]
fn show_unknown_key_leaves_state_unchanged() {
    let mut fresh = InfoPanelState::default();
    assert!(!fresh.show("unobtainium"));
    assert_eq!(fresh, InfoPanelState::default());

    let mut open = InfoPanelState::default();
    open.show("silver");
    let before = open;
    assert!(!open.show("nope"));
    assert_eq!(open, before);

    let mut closed = open;
    closed.close();
    let before = closed;
    closed.show("");
    assert_eq!(closed, before);
}

#[test]
fn close_is_idempotent_and_keeps_mount() {
    let mut state = InfoPanelState::default();
    state.show("iron");
    state.close();
    let once = state;
    state.close();
    assert_eq!(state, once);
    assert!(!state.visible);
    assert!(state.mounted);
}

#[test]
fn close_on_never_opened_panel_is_noop() {
    let mut state = InfoPanelState::default();
    state.close();
    assert_eq!(state, InfoPanelState::default());
}

#[test]
fn reopening_swaps_content() {
    let mut state = InfoPanelState::default();
    state.show("silver");
    state.close();
    state.show("halogens");
    assert!(state.visible);
    assert_eq!(state.title(), "卤素 VIIA");
}
