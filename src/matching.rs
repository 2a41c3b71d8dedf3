//! Record matching — re-filter retrieved listings against extracted intent.
//!
//! A stable filter: original relative order is preserved, nothing is
//! re-sorted. A record must pass every active constraint to be retained.

use crate::extract::Intent;
use crate::locations::LocationTable;
use crate::records::PropertyRecord;

/// Filter records against the intent, preserving input order.
pub fn filter_records<'a>(
    records: &'a [PropertyRecord],
    intent: &Intent,
    locations: &LocationTable,
) -> Vec<&'a PropertyRecord> {
    records
        .iter()
        .filter(|record| {
            matches_bedrooms(record, intent.bedrooms)
                && matches_location(
                    record,
                    intent.location.as_ref().map(|l| l.canonical.as_str()),
                    locations,
                )
        })
        .collect()
}

/// Bedroom constraint: the first digit run in the record's size field must
/// equal the target exactly. A size with no digits never passes an active
/// constraint.
fn matches_bedrooms(record: &PropertyRecord, target: Option<u32>) -> bool {
    let Some(target) = target else {
        return true;
    };
    first_digit_run(&record.size) == Some(target)
}

/// Location constraint: substring containment of any accepted variant in
/// the record's lowercased location field.
fn matches_location(record: &PropertyRecord, target: Option<&str>, locations: &LocationTable) -> bool {
    let Some(target) = target else {
        return true;
    };
    let record_location = record.location.to_lowercase();
    locations
        .variants_for(target)
        .iter()
        .any(|variant| record_location.contains(variant.as_str()))
}

fn first_digit_run(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
