use super::*;

#[test]
fn lookup_finds_known_key() {
    let silver = lookup_element("silver").expect("silver entry");
    assert_eq!(silver.symbol, "Ag");
    assert_eq!(silver.atomic_number, Some(47));
}

#[test]
fn lookup_unknown_key_is_none() {
    assert!(lookup_element("unobtainium").is_none());
    assert!(lookup_element("").is_none());
}

#[test]
fn keys_are_unique() {
    for (i, a) in ELEMENTS.iter().enumerate() {
        for b in &ELEMENTS[i + 1..] {
            assert_ne!(a.key, b.key);
        }
    }
}

#[test]
fn title_includes_atomic_number_when_known() {
    let silver = lookup_element("silver").expect("silver entry");
    assert_eq!(silver.title(), "银 Ag（原子序数 47）");
}

#[test]
fn title_omits_atomic_number_for_families() {
    let halogens = lookup_element("halogens").expect("halogens entry");
    assert_eq!(halogens.title(), "卤素 VIIA");
}
