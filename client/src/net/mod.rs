//! Network helpers.
//!
//! The page makes exactly one request: the static dataset fetch in
//! [`dataset`]. Browser-only code is gated on the `hydrate` feature; SSR
//! builds compile the same signatures with inert bodies.

pub mod dataset;
