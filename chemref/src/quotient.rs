//! Reaction quotient and the precipitation verdict.
//!
//! Q is the product of each ion concentration raised to its stoichiometric
//! coefficient. Comparing Q with Ksp predicts whether a precipitate forms.

use crate::entry::{Ion, KspEntry};

#[cfg(test)]
#[path = "quotient_test.rs"]
mod quotient_test;

/// Outcome of comparing Q with Ksp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Q > Ksp.
    Precipitate,
    /// Q == Ksp, compared exactly.
    Saturated,
    /// Q < Ksp.
    NoPrecipitate,
    /// The entry has no numeric Ksp.
    NoConstant,
}

impl Verdict {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Precipitate => "Q > Ksp：有沉淀生成",
            Self::Saturated => "Q = Ksp：溶液恰好饱和，处于沉淀溶解平衡",
            Self::NoPrecipitate => "Q < Ksp：无沉淀生成",
            Self::NoConstant => "该物质易溶，无溶度积常数可供比较",
        }
    }

    /// CSS modifier for the verdict line.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Precipitate => "precipitate",
            Self::Saturated => "saturated",
            Self::NoPrecipitate => "clear",
            Self::NoConstant => "none",
        }
    }
}

/// Result of one calculator submission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrecipitationCheck {
    pub q: f64,
    pub ksp: Option<f64>,
    pub verdict: Verdict,
}

impl PrecipitationCheck {
    /// Evaluate `concentrations` (one per ion, in ion order) against `entry`.
    ///
    /// Missing concentrations count as zero.
    #[must_use]
    pub fn evaluate(entry: &KspEntry, concentrations: &[f64]) -> Self {
        let q = reaction_quotient(&entry.ions, concentrations);
        let verdict = entry.ksp_val.map_or(Verdict::NoConstant, |ksp| compare(q, ksp));
        Self { q, ksp: entry.ksp_val, verdict }
    }

    /// One-line summary, e.g. `Q = 1.00e-8`.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.ksp {
            Some(ksp) => format!("Q = {}，Ksp = {}", format_scientific(self.q), format_scientific(ksp)),
            None => format!("Q = {}", format_scientific(self.q)),
        }
    }
}

/// Parse a concentration field. Blank or unparseable input reads as zero;
/// negative values pass through.
#[must_use]
pub fn parse_concentration(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Q = Π cᵢ^νᵢ over the ions. An entry without ions yields the empty product.
#[must_use]
pub fn reaction_quotient(ions: &[Ion], concentrations: &[f64]) -> f64 {
    ions.iter()
        .enumerate()
        .map(|(i, ion)| {
            let c = concentrations.get(i).copied().unwrap_or(0.0);
            c.powf(f64::from(ion.coefficient))
        })
        .product()
}

// Exact equality for the saturated case; no tolerance is applied.
#[allow(clippy::float_cmp)]
fn compare(q: f64, ksp: f64) -> Verdict {
    if q > ksp {
        Verdict::Precipitate
    } else if q == ksp {
        Verdict::Saturated
    } else {
        Verdict::NoPrecipitate
    }
}

#[must_use]
pub fn format_scientific(value: f64) -> String {
    format!("{value:.2e}")
}
