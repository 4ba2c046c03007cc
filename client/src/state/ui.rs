//! Local UI chrome state.

use std::collections::BTreeSet;

use crate::util::theme::Theme;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page-wide presentation flags.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    /// Keys of result cards whose calculator form is open. Each card toggles
    /// independently.
    pub open_calculators: BTreeSet<String>,
}

impl UiState {
    /// Open the calculator on `key`, or close it if it is already open.
    /// Other cards keep their state.
    pub fn toggle_calculator(&mut self, key: &str) {
        if !self.open_calculators.remove(key) {
            self.open_calculators.insert(key.to_owned());
        }
    }

    #[must_use]
    pub fn is_calculator_open(&self, key: &str) -> bool {
        self.open_calculators.contains(key)
    }
}
