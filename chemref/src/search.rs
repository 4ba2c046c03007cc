//! Query matching over the Ksp dataset.
//!
//! Matching is plain substring containment after normalization; there is no
//! ranking, so results keep dataset order.

use crate::entry::KspEntry;

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// A query prepared once and matched against every entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    /// Trimmed, lower-cased text with full-width signs folded to ASCII.
    pub text: String,
    /// ASCII letters and digits of `text` only.
    pub alnum: String,
}

impl Query {
    /// Normalize raw input. Returns `None` for blank input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let text = normalize(raw);
        if text.is_empty() {
            return None;
        }
        let alnum = alnum_only(&text);
        Some(Self { text, alnum })
    }

    #[must_use]
    pub fn matches(&self, entry: &KspEntry) -> bool {
        let name = entry.name.to_lowercase();
        let formula = entry.formula.to_lowercase();
        let ions = entry.ion_text().to_lowercase();

        if name.contains(&self.text) || formula.contains(&self.text) || ions.contains(&self.text) {
            return true;
        }

        // Users often type `ag` or `so42` without charge signs or spaces.
        // Bare element symbols (`ba`, `cu`) land here or in the plain
        // formula check above.
        !self.alnum.is_empty() && (alnum_only(&formula).contains(&self.alnum) || alnum_only(&ions).contains(&self.alnum))
    }
}

/// Entries matching `query`, in dataset order. Blank queries match nothing.
#[must_use]
pub fn search<'a>(entries: &'a [KspEntry], query: &str) -> Vec<&'a KspEntry> {
    let Some(query) = Query::parse(query) else {
        return Vec::new();
    };
    entries.iter().filter(|entry| query.matches(entry)).collect()
}

/// Trim, fold full-width plus/minus and the Unicode minus sign, lower-case.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '＋' => '+',
            '－' | '−' => '-',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}

fn alnum_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_alphanumeric).collect()
}
