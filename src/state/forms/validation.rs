//! Presence checks gating the submit action

use super::field::FieldId;
use super::record::FormRecord;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// True when every required field holds something other than whitespace.
///
/// Optional fields never affect the result.
pub fn is_valid(record: &FormRecord) -> bool {
    missing_required(record).is_empty()
}

/// Required fields that are still blank, in display order
pub fn missing_required(record: &FormRecord) -> Vec<FieldId> {
    FieldId::ALL
        .into_iter()
        .filter(|field| field.is_required() && is_blank(record.get(*field)))
        .collect()
}
