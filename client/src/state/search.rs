//! Search box state and the last result set.

use chemref::{KspEntry, LoadedDataset};

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    /// Current text of the input.
    pub query: String,
    /// Query text of the last submitted search, `None` before the first one.
    pub submitted: Option<String>,
    pub results: Vec<KspEntry>,
}

/// What the results container should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultsView {
    /// Nothing searched yet, or a blank query was submitted.
    Idle,
    NoMatches(String),
    Matches(usize),
}

impl SearchState {
    /// Run the current query against `dataset`, replacing previous results.
    pub fn submit(&mut self, dataset: &LoadedDataset) {
        self.results = dataset.search(&self.query).into_iter().cloned().collect();
        self.submitted = Some(self.query.trim().to_owned());
    }

    #[must_use]
    pub fn view(&self) -> ResultsView {
        match self.submitted.as_deref() {
            None | Some("") => ResultsView::Idle,
            Some(query) if self.results.is_empty() => ResultsView::NoMatches(query.to_owned()),
            Some(_) => ResultsView::Matches(self.results.len()),
        }
    }
}
