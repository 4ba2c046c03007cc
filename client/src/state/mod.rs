//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`panel`, `search`, `toast`, `ui`) so individual
//! components can depend on small focused models. The comparison selection is
//! `chemref::CompareSelection`, provided as a signal directly.

pub mod panel;
pub mod search;
pub mod toast;
pub mod ui;
