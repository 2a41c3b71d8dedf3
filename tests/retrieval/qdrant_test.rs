//! Qdrant wire-format mapping tests.

use gharkhoj::records::{Price, PropertyRecord};
use gharkhoj::retrieval::qdrant::{hit_from_point, SearchResponse};
use serde_json::json;

#[test]
fn search_response_parses_scored_points() {
    let body = json!({
        "result": [
            {"id": 7, "score": 0.93, "payload": {"original_id": "p7", "price": 88.0}},
            {"id": "uuid-12", "score": 0.81}
        ]
    });
    let parsed: SearchResponse = serde_json::from_value(body).expect("parses");
    assert_eq!(parsed.result.len(), 2);
    assert_eq!(parsed.result[0].score, 0.93);
}

#[test]
fn hit_id_prefers_payload_original_id() {
    let body = json!({
        "result": [
            {"id": 7, "score": 0.93, "payload": {"original_id": "p7"}},
            {"id": 42, "score": 0.81, "payload": {}},
            {"id": "point-str", "score": 0.7, "payload": {}}
        ]
    });
    let parsed: SearchResponse = serde_json::from_value(body).expect("parses");
    let hits: Vec<_> = parsed.result.into_iter().map(hit_from_point).collect();
    assert_eq!(hits[0].id, "p7");
    assert_eq!(hits[1].id, "42");
    assert_eq!(hits[2].id, "point-str");
}

#[test]
fn hit_payload_maps_into_a_property_record() {
    let body = json!({
        "result": [{
            "id": 1,
            "score": 0.9,
            "payload": {
                "original_id": "p1",
                "title": "Bright 2BHK",
                "location": "Indiranagar",
                "price": 95.5,
                "bedrooms": 2,
                "area_sqft": 1100,
                "amenities": ["gym"]
            }
        }]
    });
    let parsed: SearchResponse = serde_json::from_value(body).expect("parses");
    let hit = parsed
        .result
        .into_iter()
        .map(hit_from_point)
        .next()
        .expect("one hit");

    let record = PropertyRecord::from_payload(hit.id.clone(), Some(hit.score), &hit.payload);
    assert_eq!(record.id, "p1");
    assert_eq!(record.price, Price::Numeric(95.5));
    assert_eq!(record.size, "2");
    assert_eq!(record.score, Some(0.9));
}
