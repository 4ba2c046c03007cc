//! Element info panel state.
//!
//! The panel is mounted lazily on the first successful `show` and then
//! reused: later opens only swap its content and flip visibility.

use chemref::{ElementEntry, lookup_element};

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InfoPanelState {
    /// Set once the panel node exists; never cleared.
    pub mounted: bool,
    pub visible: bool,
    pub current: Option<&'static ElementEntry>,
}

impl InfoPanelState {
    /// Show the panel for `key`. Unknown keys leave the state untouched.
    ///
    /// Returns `true` if the key was found.
    pub fn show(&mut self, key: &str) -> bool {
        let Some(entry) = lookup_element(key) else {
            return false;
        };
        self.mounted = true;
        self.visible = true;
        self.current = Some(entry);
        true
    }

    /// Hide the panel. Idempotent.
    pub fn close(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.current.map(ElementEntry::title).unwrap_or_default()
    }

    #[must_use]
    pub fn body(&self) -> &'static str {
        self.current.map_or("", |e| e.text)
    }
}
