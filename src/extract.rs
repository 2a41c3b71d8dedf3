//! Criteria extraction — free text into structured search intent.
//!
//! Pattern lists are ordered; the first pattern that matches wins and
//! later patterns never override it. Absence of a match is a valid
//! "no constraint" outcome, never an error.

use regex::Regex;

use crate::locations::LocationTable;

/// A location constraint extracted from a query.
///
/// Carries both forms: the canonical code drives matching, the raw span
/// is what user-facing messages echo back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    /// The span as the user typed it (trimmed, lowercased).
    pub raw: String,
    /// Canonical form from the alias table.
    pub canonical: String,
}

/// Structured criteria derived from a free-text query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Intent {
    /// Requested bedroom count (BHK). `None` means no constraint.
    pub bedrooms: Option<u32>,
    /// Requested location, normalized via the alias table.
    pub location: Option<LocationQuery>,
    /// Whether the entire query is a greeting and nothing else.
    pub is_greeting: bool,
}

/// Query extractor holding compiled patterns.
///
/// Construct once and share read-only; compilation happens at startup.
#[derive(Debug)]
pub struct QueryExtractor {
    greeting: Regex,
    bedroom_patterns: Vec<Regex>,
    location_patterns: Vec<Regex>,
}

impl Default for QueryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryExtractor {
    /// Compile the extraction patterns.
    pub fn new() -> Self {
        let greeting = Regex::new(
            r"(?i)^(hi+|hello|hey|greetings|good\s(morning|afternoon)|welcome|h[ola]{2}|sup|howdy)[!.\s]*$",
        )
        .expect("greeting pattern is valid");

        // Priority order matters: a digit form beats a spelled-out form.
        let bedroom_patterns = vec![
            Regex::new(r"(?i)\b(\d+)\s?(bhk|bedroom|bed)\b").expect("bhk digit pattern is valid"),
            Regex::new(r"(?i)\b(one|two|three|four|five)\s+(bhk|bedroom)\b")
                .expect("bhk word pattern is valid"),
        ];

        // Applied to the lowercased query. The capture stops at a digit,
        // "for", "under", or end of string.
        let location_patterns = vec![
            Regex::new(r"\b(in|near|around|at|close to)\s+([\w\s]+?)(?:\s*\d|for|under|$)")
                .expect("location cue pattern is valid"),
            Regex::new(r"\b(looking|searching|find).+?\s+in\s+([\w\s]+)")
                .expect("location phrase pattern is valid"),
        ];

        Self {
            greeting,
            bedroom_patterns,
            location_patterns,
        }
    }

    /// Extract the full intent for a query.
    pub fn intent(&self, query: &str, locations: &LocationTable) -> Intent {
        Intent {
            bedrooms: self.bedroom_count(query),
            location: self.location(query, locations),
            is_greeting: self.is_greeting(query),
        }
    }

    /// Whether the entire trimmed query is a greeting.
    ///
    /// Partial matches ("hi, can you find me a flat") do not count — the
    /// pattern must span the whole trimmed string.
    pub fn is_greeting(&self, query: &str) -> bool {
        self.greeting.is_match(query.trim())
    }

    /// Extract a bedroom-count constraint, if the query states one.
    ///
    /// `None` means absence of a constraint, which is distinct from a
    /// literal zero ("0 bhk" yields `Some(0)`).
    pub fn bedroom_count(&self, query: &str) -> Option<u32> {
        for pattern in &self.bedroom_patterns {
            if let Some(caps) = pattern.captures(query) {
                let token = caps.get(1).map(|m| m.as_str())?;
                return token.parse().ok().or_else(|| word_to_number(token));
            }
        }
        None
    }

    /// Extract a location constraint, normalized via the alias table.
    pub fn location(&self, query: &str, locations: &LocationTable) -> Option<LocationQuery> {
        let lower = query.to_lowercase();
        for pattern in &self.location_patterns {
            if let Some(caps) = pattern.captures(&lower) {
                let span = caps.get(2).map(|m| m.as_str())?.trim();
                return Some(LocationQuery {
                    raw: span.to_owned(),
                    canonical: locations.normalize(span),
                });
            }
        }
        None
    }
}

fn word_to_number(word: &str) -> Option<u32> {
    match word.to_lowercase().as_str() {
        "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        _ => None,
    }
}
