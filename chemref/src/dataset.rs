//! Dataset loading: JSON parsing and the builtin fallback.
//!
//! The page loads the dataset exactly once. Whatever the fetch produced is
//! resolved into a [`LoadedDataset`] snapshot here; any failure resolves to
//! the four builtin entries and that choice sticks for the session.

use crate::entry::{Ion, KspEntry};
use crate::search;

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

/// Path the client fetches the dataset from.
pub const DATASET_PATH: &str = "/data/ksp.json";

/// Error returned by [`parse`].
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The body is not a JSON array of entry objects.
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where a loaded snapshot came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetSource {
    Remote,
    Builtin,
}

/// The in-memory dataset snapshot shared by search and comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedDataset {
    pub entries: Vec<KspEntry>,
    pub source: DatasetSource,
}

impl LoadedDataset {
    /// Snapshot of the builtin fallback entries.
    #[must_use]
    pub fn builtin() -> Self {
        Self { entries: builtin_entries(), source: DatasetSource::Builtin }
    }

    /// Resolve a fetch outcome into a snapshot, falling back on any error.
    pub fn resolve<E>(fetched: Result<Vec<KspEntry>, E>) -> Self {
        match fetched {
            Ok(entries) => Self { entries, source: DatasetSource::Remote },
            Err(_) => Self::builtin(),
        }
    }

    /// Run a query against this snapshot.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&KspEntry> {
        search::search(&self.entries, query)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a dataset document.
///
/// # Errors
///
/// Returns [`DatasetError::Parse`] when the document is not a JSON array of
/// objects. Missing or malformed fields inside records are defaulted, not
/// rejected.
pub fn parse(json: &str) -> Result<Vec<KspEntry>, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

/// The four entries used when the remote dataset is unavailable.
#[must_use]
pub fn builtin_entries() -> Vec<KspEntry> {
    vec![
        KspEntry {
            key: "agcl".to_owned(),
            name: "氯化银".to_owned(),
            formula: "AgCl".to_owned(),
            ions: vec![Ion::new("Ag+", 1), Ion::new("Cl-", 1)],
            ksp: "1.8 × 10⁻¹⁰".to_owned(),
            ksp_val: Some(1.8e-10),
            equation: "AgCl(s) ⇌ Ag⁺(aq) + Cl⁻(aq)".to_owned(),
            note: "白色沉淀，见光易分解；常用于检验 Cl⁻。".to_owned(),
        },
        KspEntry {
            key: "cuoh2".to_owned(),
            name: "氢氧化铜".to_owned(),
            formula: "Cu(OH)2".to_owned(),
            ions: vec![Ion::new("Cu2+", 1), Ion::new("OH-", 2)],
            ksp: "2.2 × 10⁻²⁰".to_owned(),
            ksp_val: Some(2.2e-20),
            equation: "Cu(OH)₂(s) ⇌ Cu²⁺(aq) + 2OH⁻(aq)".to_owned(),
            note: "蓝色絮状沉淀。".to_owned(),
        },
        KspEntry {
            key: "baso4".to_owned(),
            name: "硫酸钡".to_owned(),
            formula: "BaSO4".to_owned(),
            ions: vec![Ion::new("Ba2+", 1), Ion::new("SO4 2-", 1)],
            ksp: "1.1 × 10⁻¹⁰".to_owned(),
            ksp_val: Some(1.1e-10),
            equation: "BaSO₄(s) ⇌ Ba²⁺(aq) + SO₄²⁻(aq)".to_owned(),
            note: "不溶于稀酸，医用“钡餐”的主要成分。".to_owned(),
        },
        KspEntry {
            key: "nacl".to_owned(),
            name: "氯化钠".to_owned(),
            formula: "NaCl".to_owned(),
            ions: vec![Ion::new("Na+", 1), Ion::new("Cl-", 1)],
            ksp: "易溶".to_owned(),
            ksp_val: None,
            equation: "NaCl(s) → Na⁺(aq) + Cl⁻(aq)".to_owned(),
            note: "易溶于水，不存在溶度积常数。".to_owned(),
        },
    ]
}
