use super::*;
use crate::dataset::builtin_entries;

fn keys(hits: &[&KspEntry]) -> Vec<String> {
    hits.iter().map(|e| e.key.clone()).collect()
}

// =============================================================
// Blank queries
// =============================================================

#[test]
fn empty_query_returns_nothing() {
    let entries = builtin_entries();
    assert!(search(&entries, "").is_empty());
}

#[test]
fn whitespace_query_returns_nothing() {
    let entries = builtin_entries();
    assert!(search(&entries, "   ").is_empty());
}

// =============================================================
// Formula / ion / name matching
// =============================================================

#[test]
fn formula_query_returns_exactly_silver_chloride() {
    let entries = builtin_entries();
    assert_eq!(keys(&search(&entries, "AgCl")), vec!["agcl"]);
}

#[test]
fn ion_query_with_charge_returns_silver_chloride() {
    let entries = builtin_entries();
    assert_eq!(keys(&search(&entries, "ag+")), vec!["agcl"]);
}

#[test]
fn full_width_plus_is_folded() {
    let entries = builtin_entries();
    assert_eq!(keys(&search(&entries, "Ag＋")), vec!["agcl"]);
}

#[test]
fn two_letter_symbol_hits_barium_sulfate() {
    let entries = builtin_entries();
    assert_eq!(keys(&search(&entries, "ba")), vec!["baso4"]);
}

#[test]
fn chinese_name_matches() {
    let entries = builtin_entries();
    assert_eq!(keys(&search(&entries, "氢氧化铜")), vec!["cuoh2"]);
}

#[test]
fn punctuation_free_ion_query_matches_alnum_text() {
    let entries = builtin_entries();
    // "SO4 2-" collapses to "so42".
    assert_eq!(keys(&search(&entries, "so42")), vec!["baso4"]);
}

#[test]
fn shared_ion_returns_entries_in_dataset_order() {
    let entries = builtin_entries();
    assert_eq!(keys(&search(&entries, "cl-")), vec!["agcl", "nacl"]);
}

#[test]
fn charge_query_matches_divalent_cations() {
    let entries = builtin_entries();
    let hits = search(&entries, "2+");
    assert_eq!(keys(&hits), vec!["cuoh2", "baso4"]);
}

#[test]
fn bare_element_symbol_hits_formula() {
    let entries = builtin_entries();
    assert_eq!(keys(&search(&entries, "Cu")), vec!["cuoh2"]);
    assert_eq!(keys(&search(&entries, "na")), vec!["nacl"]);
}

#[test]
fn unknown_query_returns_nothing() {
    let entries = builtin_entries();
    assert!(search(&entries, "xyz").is_empty());
}

// =============================================================
// Normalization
// =============================================================

#[test]
fn normalize_trims_lowercases_and_folds_signs() {
    assert_eq!(normalize("  Ca２＋ − "), "ca２+ -");
    assert_eq!(normalize("SO4－"), "so4-");
}

#[test]
fn query_parse_rejects_blank_input() {
    assert!(Query::parse(" \t").is_none());
    let q = Query::parse("Ag+").expect("query");
    assert_eq!(q.text, "ag+");
    assert_eq!(q.alnum, "ag");
}
