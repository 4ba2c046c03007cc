//! Ksp dataset loader.
//!
//! Client-side (hydrate): fetches [`DATASET_PATH`] via `gloo-net`.
//! Server-side (SSR): resolves to the builtin entries, since the fetch is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! `load` never fails. Network errors, non-2xx statuses and unparseable
//! bodies all resolve to the builtin snapshot and are logged, not surfaced:
//! the page shows the same thing whichever source won.

#![allow(clippy::unused_async)]

use chemref::{DATASET_PATH, LoadedDataset};

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

/// Load the dataset once for the page session.
pub async fn load() -> LoadedDataset {
    #[cfg(feature = "hydrate")]
    {
        let fetched = fetch_entries().await;
        if let Err(e) = &fetched {
            log::warn!("ksp dataset unavailable, using builtin entries: {e}");
        }
        let dataset = LoadedDataset::resolve(fetched);
        log::info!("ksp dataset loaded: {} entries ({:?})", dataset.len(), dataset.source);
        dataset
    }
    #[cfg(not(feature = "hydrate"))]
    {
        LoadedDataset::builtin()
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_entries() -> Result<Vec<chemref::KspEntry>, String> {
    let resp = gloo_net::http::Request::get(DATASET_PATH)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(fetch_failed_message(resp.status()));
    }
    let body = resp.text().await.map_err(|e| e.to_string())?;
    chemref::dataset::parse(&body).map_err(|e| e.to_string())
}

/// Hint shown under the search box while the load is pending. Nothing is
/// shown once it settles, remote or builtin.
#[must_use]
pub fn loading_hint(dataset: Option<&LoadedDataset>) -> Option<&'static str> {
    match dataset {
        None => Some("正在载入数据…"),
        Some(_) => None,
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn fetch_failed_message(status: u16) -> String {
    format!("GET {DATASET_PATH} failed: {status}")
}
