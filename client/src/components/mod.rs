//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the reference page sections while reading/writing
//! shared state from Leptos context providers. Chemistry logic stays in
//! `chemref`; components only bind it to markup and events.

pub mod compare_panel;
pub mod element_grid;
pub mod info_panel;
pub mod ksp_search;
pub mod precipitation_form;
pub mod result_card;
pub mod site_nav;
pub mod theme_toggle;
pub mod toast;
