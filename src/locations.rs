//! Location alias table — canonical city codes and their accepted variants.
//!
//! The table is read-only, built once at startup, and shared by the
//! extractor (normalization) and the matcher (variant expansion).

/// Closed mapping from canonical short codes to accepted full-name variants.
#[derive(Debug, Clone)]
pub struct LocationTable {
    aliases: Vec<(&'static str, &'static [&'static str])>,
}

impl Default for LocationTable {
    fn default() -> Self {
        Self {
            aliases: vec![
                ("blr", &["bangalore", "bengaluru"]),
                ("mum", &["mumbai", "bombay"]),
                ("hyd", &["hyderabad", "secunderabad"]),
            ],
        }
    }
}

impl LocationTable {
    /// Canonicalize a location string.
    ///
    /// If the lowercased input equals a canonical code or any registered
    /// variant, the canonical code is returned. Unknown locations pass
    /// through (lowercased) — this never errors.
    pub fn normalize(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        for (code, variants) in &self.aliases {
            if lower == *code || variants.contains(&lower.as_str()) {
                return (*code).to_owned();
            }
        }
        lower
    }

    /// The input itself plus any variants registered under it as a
    /// canonical key.
    ///
    /// Deliberately asymmetric with [`normalize`](Self::normalize): a
    /// variant name ("bangalore") does not pull in its siblings unless it
    /// is itself a canonical key ("blr"). Matching relies on this exact
    /// behavior; do not unify the two.
    pub fn variants_for(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut out = vec![lower.clone()];
        for (code, variants) in &self.aliases {
            if lower == *code {
                out.extend(variants.iter().map(|v| (*v).to_owned()));
            }
        }
        out
    }
}
