//! Fallback and no-results response tests.

use gharkhoj::extract::{Intent, LocationQuery};
use gharkhoj::format::{fallback_response, no_results_response};

#[test]
fn fallback_is_deterministic() {
    let summary = "🏡 ₹85.5L | 2 BHK | Indiranagar | 1100 sqft | Amenities: gym";
    let first = fallback_response(summary);
    let second = fallback_response(summary);
    assert_eq!(first, second);
    assert!(first.starts_with("🏘 Available Properties:\n\n"));
    assert!(first.contains(summary));
    assert!(first.ends_with("💡 Ask me about specific properties!"));
}

#[test]
fn no_results_mentions_both_active_filters() {
    let intent = Intent {
        bedrooms: Some(2),
        location: Some(LocationQuery {
            raw: "mumbai".to_owned(),
            canonical: "mum".to_owned(),
        }),
        is_greeting: false,
    };
    let message = no_results_response(&intent);
    assert!(message.contains("2 BHK"));
    assert!(message.contains("location 'mumbai'"));
    assert!(message.contains("- Consider nearby areas"));
    assert!(message.contains("- Explore different BHK sizes"));
    assert!(message.contains("- Widen your price range"));
    assert!(message.contains("Need help refining your search?"));
}

#[test]
fn no_results_suggestions_track_active_filters() {
    let bedrooms_only = Intent {
        bedrooms: Some(3),
        ..Intent::default()
    };
    let message = no_results_response(&bedrooms_only);
    assert!(message.contains("3 BHK"));
    assert!(!message.contains("- Consider nearby areas"));
    assert!(message.contains("- Explore different BHK sizes"));

    let location_only = Intent {
        location: Some(LocationQuery {
            raw: "pune".to_owned(),
            canonical: "pune".to_owned(),
        }),
        ..Intent::default()
    };
    let message = no_results_response(&location_only);
    assert!(message.contains("location 'pune'"));
    assert!(message.contains("- Consider nearby areas"));
    assert!(!message.contains("- Explore different BHK sizes"));
}
