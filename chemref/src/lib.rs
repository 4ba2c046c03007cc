//! Reference data and pure logic for the solubility reference site.
//!
//! This crate owns everything the page computes: the element info table,
//! the Ksp dataset model (with its builtin fallback), query matching, the
//! reaction-quotient verdict, and the comparison selection. It has no browser
//! dependencies so `client` can bind it to the DOM and tests can run natively.

pub mod compare;
pub mod dataset;
pub mod elements;
pub mod entry;
pub mod quotient;
pub mod search;

pub use compare::{CompareRow, CompareSelection};
pub use dataset::{DATASET_PATH, DatasetError, DatasetSource, LoadedDataset};
pub use elements::{ElementEntry, lookup_element};
pub use entry::{Ion, KspEntry, Solubility};
pub use quotient::{PrecipitationCheck, Verdict};
pub use search::search;
