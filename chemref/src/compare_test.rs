use super::*;
use crate::dataset::builtin_entries;

fn entry(key: &str) -> KspEntry {
    builtin_entries()
        .into_iter()
        .find(|e| e.key == key)
        .expect("builtin entry")
}

#[test]
fn new_selection_is_empty() {
    let selection = CompareSelection::new();
    assert!(selection.is_empty());
    assert!(selection.rows().is_empty());
}

#[test]
fn toggle_twice_restores_absence() {
    let mut selection = CompareSelection::new();
    let agcl = entry("agcl");
    assert!(selection.toggle(&agcl));
    assert!(!selection.toggle(&agcl));
    assert!(!selection.contains("agcl"));
    assert_eq!(selection, CompareSelection::new());
}

#[test]
fn toggle_once_renders_row_with_matching_formula() {
    let mut selection = CompareSelection::new();
    selection.toggle(&entry("baso4"));
    let rows = selection.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].formula, "BaSO4");
    assert_eq!(rows[0].solubility, "难溶");
}

#[test]
fn uniqueness_is_by_key() {
    let mut selection = CompareSelection::new();
    let agcl = entry("agcl");
    let mut renamed = agcl.clone();
    renamed.name = "另一个名字".to_owned();
    selection.toggle(&agcl);
    // Same key, different payload: treated as the same entry and removed.
    assert!(!selection.toggle(&renamed));
    assert!(selection.is_empty());
}

#[test]
fn rows_keep_insertion_order() {
    let mut selection = CompareSelection::new();
    for key in ["nacl", "agcl", "cuoh2"] {
        selection.toggle(&entry(key));
    }
    let formulas: Vec<_> = selection.rows().into_iter().map(|r| r.formula).collect();
    assert_eq!(formulas, vec!["NaCl", "AgCl", "Cu(OH)2"]);
}

#[test]
fn soluble_entry_row_is_classified_soluble() {
    let mut selection = CompareSelection::new();
    selection.toggle(&entry("nacl"));
    assert_eq!(selection.rows()[0].solubility, "易溶");
}

#[test]
fn remove_by_key_reports_change() {
    let mut selection = CompareSelection::new();
    selection.toggle(&entry("agcl"));
    assert!(!selection.remove("missing"));
    assert!(selection.remove("agcl"));
    assert!(!selection.contains_formula("AgCl"));
}

#[test]
fn clear_resets_every_card_label() {
    let mut selection = CompareSelection::new();
    let entries = builtin_entries();
    for e in &entries {
        selection.toggle(e);
    }
    assert!(entries.iter().all(|e| selection.contains_formula(&e.formula)));
    selection.clear();
    assert!(selection.rows().is_empty());
    for e in &entries {
        assert_eq!(toggle_label(selection.contains_formula(&e.formula)), "加入对比");
    }
}
