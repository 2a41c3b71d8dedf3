//! Deterministic rendering — property summaries, the generation-free
//! fallback, and the no-results message.
//!
//! Everything in this module is a pure function of its inputs; calling
//! twice with identical inputs yields byte-identical output.

use crate::extract::Intent;
use crate::records::PropertyRecord;

/// Render matched records into the fixed line-oriented summary handed to
/// the text-generation service.
///
/// One line per record, input order, no filtering:
/// `🏡 {price} | {size} BHK | {location} | {area} | Amenities: {a, b}`.
/// The area slot prefers square footage when known, else the raw size
/// string.
pub fn format_properties(records: &[&PropertyRecord]) -> String {
    records
        .iter()
        .map(|record| {
            let area = record
                .area_sqft
                .map(|sqft| format!("{sqft} sqft"))
                .unwrap_or_else(|| record.size.clone());
            format!(
                "🏡 {} | {} BHK | {} | {} | Amenities: {}",
                record.price.display(),
                record.size,
                record.location,
                area,
                record.amenities.join(", "),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Deterministic response used when generation fails: fixed header, the
/// summary lines verbatim, fixed closing prompt. Never randomized.
pub fn fallback_response(summary: &str) -> String {
    format!("🏘 Available Properties:\n\n{summary}\n\n💡 Ask me about specific properties!")
}

/// Deterministic message for an empty match set, listing the active
/// constraints and generic widening suggestions.
pub fn no_results_response(intent: &Intent) -> String {
    let mut filters = Vec::new();
    if let Some(bedrooms) = intent.bedrooms {
        filters.push(format!("{bedrooms} BHK"));
    }
    if let Some(location) = &intent.location {
        // Echo the user's own wording, not the canonical code.
        filters.push(format!("location '{}'", location.raw));
    }

    let mut lines = vec![
        format!("🔍 No properties found matching: {}", filters.join(", ")),
        "Try adjusting your filters:".to_owned(),
    ];
    if intent.location.is_some() {
        lines.push("- Consider nearby areas".to_owned());
    }
    if intent.bedrooms.is_some() {
        lines.push("- Explore different BHK sizes".to_owned());
    }
    lines.push("- Widen your price range".to_owned());
    lines.push("\nNeed help refining your search? 🏡".to_owned());
    lines.join("\n")
}
