//! Side-by-side comparison selection.
//!
//! DESIGN
//! ======
//! The selection is an owned value the UI keeps in a signal; every mutation
//! goes through [`CompareSelection::toggle`], [`CompareSelection::remove`]
//! or [`CompareSelection::clear`]. Rendering reads [`CompareSelection::rows`],
//! rebuilt from scratch each time.

use crate::entry::KspEntry;

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;

/// Entries picked for comparison, unique by key, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompareSelection {
    entries: Vec<KspEntry>,
}

/// Display model for one comparison table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareRow {
    pub key: String,
    pub name: String,
    pub formula: String,
    pub ksp: String,
    pub ions: String,
    pub equation: String,
    pub solubility: &'static str,
}

impl CompareSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entry` if no entry with its key is selected, otherwise remove it.
    /// Returns whether the entry is selected afterwards.
    pub fn toggle(&mut self, entry: &KspEntry) -> bool {
        if self.remove(&entry.key) {
            false
        } else {
            self.entries.push(entry.clone());
            true
        }
    }

    /// Remove by key. Returns `true` if something was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Membership by formula text, used by result cards to reflect state.
    #[must_use]
    pub fn contains_formula(&self, formula: &str) -> bool {
        self.entries.iter().any(|e| e.formula == formula)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[KspEntry] {
        &self.entries
    }

    /// Table rows in selection order.
    #[must_use]
    pub fn rows(&self) -> Vec<CompareRow> {
        self.entries.iter().map(CompareRow::from_entry).collect()
    }
}

impl CompareRow {
    #[must_use]
    pub fn from_entry(entry: &KspEntry) -> Self {
        Self {
            key: entry.key.clone(),
            name: entry.name.clone(),
            formula: entry.formula.clone(),
            ksp: entry.ksp.clone(),
            ions: entry.ion_summary(),
            equation: entry.equation.clone(),
            solubility: entry.solubility().label(),
        }
    }
}

/// Label for a card's compare control.
#[must_use]
pub fn toggle_label(selected: bool) -> &'static str {
    if selected { "已加入对比" } else { "加入对比" }
}
