//! Property summary rendering tests.

use gharkhoj::format::format_properties;
use gharkhoj::records::{Price, PropertyRecord};

fn record(id: &str) -> PropertyRecord {
    PropertyRecord {
        id: id.to_owned(),
        title: "Test".to_owned(),
        price: Price::Numeric(85.5),
        size: "2".to_owned(),
        location: "Indiranagar".to_owned(),
        area_sqft: Some(1100.0),
        amenities: vec!["gym".to_owned(), "pool".to_owned()],
        score: None,
    }
}

#[test]
fn one_line_per_record_in_input_order() {
    let a = record("a");
    let mut b = record("b");
    b.location = "Whitefield".to_owned();
    let records = vec![&a, &b];

    let summary = format_properties(&records);
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Indiranagar"));
    assert!(lines[1].contains("Whitefield"));
}

#[test]
fn line_has_fixed_field_order_and_separators() {
    let a = record("a");
    let summary = format_properties(&[&a]);
    assert_eq!(
        summary,
        "🏡 ₹85.5L | 2 BHK | Indiranagar | 1100 sqft | Amenities: gym, pool"
    );
}

#[test]
fn text_price_passes_through_unchanged() {
    let mut a = record("a");
    a.price = Price::Text("₹1.2Cr".to_owned());
    let summary = format_properties(&[&a]);
    assert!(summary.starts_with("🏡 ₹1.2Cr | "));
}

#[test]
fn area_falls_back_to_size_without_sqft() {
    let mut a = record("a");
    a.area_sqft = None;
    let summary = format_properties(&[&a]);
    assert!(summary.contains("| Indiranagar | 2 | Amenities:"));
}

#[test]
fn rerun_on_same_input_is_byte_identical() {
    let a = record("a");
    let b = record("b");
    let records = vec![&a, &b];
    assert_eq!(format_properties(&records), format_properties(&records));
}

#[test]
fn empty_input_renders_empty_summary() {
    assert_eq!(format_properties(&[]), "");
}
