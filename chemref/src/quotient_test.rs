use super::*;
use crate::dataset::builtin_entries;

fn entry(key: &str) -> KspEntry {
    builtin_entries()
        .into_iter()
        .find(|e| e.key == key)
        .expect("builtin entry")
}

// =============================================================
// Input parsing
// =============================================================

#[test]
fn parse_concentration_reads_scientific_notation() {
    assert!((parse_concentration("1e-4") - 1e-4).abs() < f64::EPSILON);
    assert!((parse_concentration(" 0.25 ") - 0.25).abs() < f64::EPSILON);
}

#[test]
fn parse_concentration_blank_or_garbage_is_zero() {
    assert!(parse_concentration("").abs() < f64::EPSILON);
    assert!(parse_concentration("abc").abs() < f64::EPSILON);
    assert!(parse_concentration("NaN").abs() < f64::EPSILON);
}

#[test]
fn parse_concentration_keeps_negative_values() {
    assert!((parse_concentration("-0.5") + 0.5).abs() < f64::EPSILON);
}

// =============================================================
// Reaction quotient
// =============================================================

#[test]
fn quotient_raises_to_coefficients() {
    let ions = vec![Ion::new("Pb2+", 1), Ion::new("I-", 2)];
    let q = reaction_quotient(&ions, &[0.1, 0.2]);
    assert!((q - 0.004).abs() < 1e-12);
}

#[test]
fn quotient_treats_missing_concentrations_as_zero() {
    let ions = vec![Ion::new("Ag+", 1), Ion::new("Cl-", 1)];
    assert!(reaction_quotient(&ions, &[1.0]).abs() < f64::EPSILON);
}

// =============================================================
// Verdicts
// =============================================================

#[test]
fn silver_chloride_precipitates_above_ksp() {
    let check = PrecipitationCheck::evaluate(&entry("agcl"), &[1e-4, 1e-4]);
    assert!((check.q - 1e-8).abs() < 1e-20);
    assert_eq!(check.verdict, Verdict::Precipitate);
}

#[test]
fn silver_chloride_stays_clear_below_ksp() {
    let check = PrecipitationCheck::evaluate(&entry("agcl"), &[1e-6, 1e-6]);
    assert_eq!(check.verdict, Verdict::NoPrecipitate);
}

#[test]
fn copper_hydroxide_squares_hydroxide_concentration() {
    let check = PrecipitationCheck::evaluate(&entry("cuoh2"), &[1e-6, 1e-6]);
    assert!((check.q - 1e-18).abs() < 1e-30);
    assert_eq!(check.verdict, Verdict::Precipitate);
}

#[test]
fn copper_hydroxide_stays_clear_at_low_hydroxide() {
    // 1e-4 * (1e-9)^2 = 1e-22 < 2.2e-20
    let check = PrecipitationCheck::evaluate(&entry("cuoh2"), &[1e-4, 1e-9]);
    assert_eq!(check.verdict, Verdict::NoPrecipitate);
}

#[test]
fn exact_equality_is_saturated() {
    let mut e = entry("agcl");
    e.ksp_val = Some(0.25);
    let check = PrecipitationCheck::evaluate(&e, &[0.5, 0.5]);
    assert_eq!(check.verdict, Verdict::Saturated);
}

#[test]
fn soluble_entry_reports_no_constant_for_any_input() {
    let nacl = entry("nacl");
    for concentrations in [[0.0, 0.0], [1.0, 1.0], [5.0, 1e9]] {
        let check = PrecipitationCheck::evaluate(&nacl, &concentrations);
        assert_eq!(check.verdict, Verdict::NoConstant);
        assert!(check.ksp.is_none());
    }
}

#[test]
fn summary_formats_in_scientific_notation() {
    let check = PrecipitationCheck::evaluate(&entry("agcl"), &[1e-4, 1e-4]);
    assert_eq!(check.summary(), "Q = 1.00e-8，Ksp = 1.80e-10");
    assert_eq!(format_scientific(0.004), "4.00e-3");
}

#[test]
fn verdict_messages_are_distinct() {
    let verdicts = [Verdict::Precipitate, Verdict::Saturated, Verdict::NoPrecipitate, Verdict::NoConstant];
    for (i, a) in verdicts.iter().enumerate() {
        for (j, b) in verdicts.iter().enumerate() {
            if i != j {
                assert_ne!(a.message(), b.message());
            }
        }
    }
}
