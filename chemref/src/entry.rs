//! Ksp reference entry model.
//!
//! Records are deserialized straight from the static dataset file, and the
//! format is loose: every field defaults, and a field of the wrong type
//! degrades to its default instead of rejecting the whole file. Ions accept
//! `{"ion": "Ag+", "coef": 1}` objects, bare `"Ag+"` labels (coefficient 1)
//! and `["Ag+", 1]` pairs.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;

/// One dissolved ion and its stoichiometric coefficient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IonRepr")]
pub struct Ion {
    #[serde(rename = "ion")]
    pub label: String,
    #[serde(rename = "coef")]
    pub coefficient: u32,
}

impl Ion {
    #[must_use]
    pub fn new(label: &str, coefficient: u32) -> Self {
        Self { label: label.to_owned(), coefficient }
    }
}

/// Accepted wire shapes for an ion.
#[derive(Deserialize)]
#[serde(untagged)]
enum IonRepr {
    Object {
        #[serde(default, deserialize_with = "lenient_string")]
        ion: String,
        #[serde(default = "unit_coefficient", deserialize_with = "lenient_coefficient")]
        coef: u32,
    },
    Label(String),
    Pair(String, u32),
}

impl From<IonRepr> for Ion {
    fn from(repr: IonRepr) -> Self {
        match repr {
            IonRepr::Object { ion, coef } => Self { label: ion, coefficient: coef },
            IonRepr::Label(label) => Self { label, coefficient: 1 },
            IonRepr::Pair(label, coefficient) => Self { label, coefficient },
        }
    }
}

fn unit_coefficient() -> u32 {
    1
}

/// Zero, missing or non-integer coefficients count as 1.
fn lenient_coefficient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > 0)
        .unwrap_or(1))
}

/// Strings pass through, numbers and booleans are stringified, anything
/// else (including `null`) reads as empty.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Non-numeric values read as "no constant".
fn lenient_ksp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// A non-array `ions` reads as empty; unrecognized items are skipped.
fn lenient_ions<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Ion>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(|item| Ion::deserialize(item).ok()).collect(),
        _ => Vec::new(),
    })
}

/// A solubility reference record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KspEntry {
    /// Stable identifier, unique within a dataset.
    #[serde(deserialize_with = "lenient_string")]
    pub key: String,
    /// Display name, e.g. `氯化银`.
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    /// Chemical formula, e.g. `AgCl`.
    #[serde(deserialize_with = "lenient_string")]
    pub formula: String,
    /// Dissolved ions in equation order.
    #[serde(deserialize_with = "lenient_ions")]
    pub ions: Vec<Ion>,
    /// Human-readable Ksp, e.g. `1.8 × 10⁻¹⁰`.
    #[serde(deserialize_with = "lenient_string")]
    pub ksp: String,
    /// Numeric Ksp. `None` marks a freely soluble compound.
    #[serde(deserialize_with = "lenient_ksp")]
    pub ksp_val: Option<f64>,
    /// Dissolution equilibrium equation.
    #[serde(deserialize_with = "lenient_string")]
    pub equation: String,
    #[serde(deserialize_with = "lenient_string")]
    pub note: String,
}

/// Coarse solubility class derived from the presence of a numeric Ksp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Solubility {
    /// Has an equilibrium constant.
    Sparingly,
    /// No constant; dissolves freely.
    Soluble,
}

impl Solubility {
    /// Short label shown in the comparison table.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sparingly => "难溶",
            Self::Soluble => "易溶",
        }
    }
}

impl KspEntry {
    /// Ion labels joined with single spaces, e.g. `Ag+ Cl-`.
    #[must_use]
    pub fn ion_text(&self) -> String {
        self.ions
            .iter()
            .map(|ion| ion.label.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Ion list for display, with coefficients above one spelled out:
    /// `Pb2+, 2 I-`.
    #[must_use]
    pub fn ion_summary(&self) -> String {
        self.ions
            .iter()
            .map(|ion| {
                if ion.coefficient > 1 {
                    format!("{} {}", ion.coefficient, ion.label)
                } else {
                    ion.label.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Text placed on the clipboard: the equation, or the name and formula
    /// when the record has none.
    #[must_use]
    pub fn copy_text(&self) -> String {
        if self.equation.is_empty() {
            format!("{} — {}", self.name, self.formula)
        } else {
            self.equation.clone()
        }
    }

    #[must_use]
    pub fn solubility(&self) -> Solubility {
        if self.ksp_val.is_some() {
            Solubility::Sparingly
        } else {
            Solubility::Soluble
        }
    }
}
