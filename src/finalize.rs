//! Response validation and final formatting for generated text.
//!
//! The generative step is not trusted to keep every listing: the
//! finalizer scans its output for `ID: <token>` markers and appends a
//! synthesized summary line for every record the generator silently
//! dropped, then applies the cosmetic pass. Completeness is enforced
//! deterministically.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::records::PropertyRecord;

static ID_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ID: (\w+)").expect("id marker pattern is valid"));

/// Closing question appended when the generated text ends without one.
const CLOSING_QUESTION: &str = "Would you like more details about any of these properties?";

/// Reconcile generated text against the filtered record list, then polish.
///
/// Every expected id missing from the text gets a one-line summary
/// appended, in filtered-list order. If nothing is missing the text
/// passes through unchanged except for cosmetic formatting.
pub fn finalize_response(raw: &str, records: &[&PropertyRecord]) -> String {
    let mentioned: HashSet<&str> = ID_MARKER
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    let mut text = raw.to_owned();
    for record in records {
        if !mentioned.contains(record.id.as_str()) {
            text.push_str(&format!(
                "\n🏡 {} | {} | {}",
                record.price.display(),
                record.location,
                record.size,
            ));
        }
    }

    polish_response(&text)
}

/// Cosmetic cleanup applied as the very last step to generated text.
///
/// Collapses whitespace runs, strips markdown emphasis markers, splits on
/// `". "` boundaries, capitalizes each segment, re-numbers 🏡 lines from 1,
/// inserts a blank line before question-cue segments, and guarantees a
/// closing question. Never applied to the deterministic fallback.
pub fn polish_response(raw: &str) -> String {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let cleaned = cleaned.replace("**", "").replace("__", "");

    let mut lines: Vec<String> = Vec::new();
    let mut property_number = 1u32;
    for segment in cleaned.split(". ") {
        let line = capitalize(segment.trim());
        if line.starts_with("🏡") {
            lines.push(format!("{property_number}. {line}"));
            property_number += 1;
        } else if starts_with_question_cue(&line) {
            lines.push(format!("\n{line}"));
        } else {
            lines.push(line);
        }
    }

    let has_question = lines.iter().rev().take(2).any(|line| line.ends_with('?'));
    if !has_question {
        lines.push(format!("\n{CLOSING_QUESTION}"));
    }

    lines.join("\n")
}

/// First character uppercased, the remainder lowercased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

fn starts_with_question_cue(line: &str) -> bool {
    let lower = line.to_lowercase();
    ["which", "would", "need", "want"]
        .iter()
        .any(|cue| lower.starts_with(cue))
}
