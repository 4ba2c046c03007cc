//! Startup check of the static dataset file.
//!
//! The server never parses the dataset for requests; `/data` is served as
//! plain files. This check only tells operators at boot whether clients will
//! get the remote dataset or silently fall back to the builtin entries.

use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

#[derive(Debug, thiserror::Error)]
pub enum DatasetFileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] chemref::DatasetError),
}

/// Parse the dataset file and return its entry count.
///
/// # Errors
///
/// Returns [`DatasetFileError::Read`] if the file cannot be read and
/// [`DatasetFileError::Parse`] if it is not a valid dataset document.
pub fn check_dataset_file(path: &Path) -> Result<usize, DatasetFileError> {
    let body = std::fs::read_to_string(path).map_err(|source| DatasetFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = chemref::dataset::parse(&body)?;
    Ok(entries.len())
}
