//! Integration tests for shared records and composite keys

use std::collections::HashMap;
use std::sync::Arc;

use canopy_foundation::{RecordKey, RecordRef, SharedRecord};

// =============================================================================
// Composite Keys
// =============================================================================

#[test]
fn keys_work_as_map_keys() {
    let mut map = HashMap::new();
    map.insert(RecordKey::new("Oak", "Green", "OakTexture.png"), 1);
    map.insert(RecordKey::new("Oak", "Green", "OakTexture.png"), 2);
    map.insert(RecordKey::new("Oak", "Green", "Other.png"), 3);

    assert_eq!(map.len(), 2);
    assert_eq!(map[&RecordKey::new("Oak", "Green", "OakTexture.png")], 2);
}

#[test]
fn separator_characters_inside_fields_do_not_collide() {
    let keys = [
        RecordKey::new("A_B", "C", "D"),
        RecordKey::new("A", "B_C", "D"),
        RecordKey::new("A", "B", "C_D"),
        RecordKey::new("A_B_C", "", "D"),
        RecordKey::new("", "A_B_C", "D"),
    ];

    for (i, a) in keys.iter().enumerate() {
        for (j, b) in keys.iter().enumerate() {
            assert_eq!(i == j, a == b, "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn keys_order_by_category_first() {
    let mut keys = vec![
        RecordKey::new("Pine", "A", "A"),
        RecordKey::new("Oak", "Z", "Z"),
    ];
    keys.sort();

    assert_eq!(keys[0].category(), "Oak");
}

// =============================================================================
// Shared Records
// =============================================================================

#[test]
fn record_key_matches_fields() {
    let record = SharedRecord::new("Cherry Blossom", "Pink", "CherryTexture.png");

    assert!(record.key().matches("Cherry Blossom", "Pink", "CherryTexture.png"));
    assert_eq!(SharedRecord::from_key(record.key().clone()), record);
}

#[test]
fn record_refs_clone_by_handle() {
    let record: RecordRef = Arc::new(SharedRecord::new("Oak", "Green", "OakTexture.png"));
    let other = Arc::clone(&record);

    assert!(Arc::ptr_eq(&record, &other));
    assert_eq!(other.category(), "Oak");
}

#[test]
fn description_reflects_position_and_fields() {
    let record = SharedRecord::new("Pine", "DarkGreen", "PineTexture.png");
    let text = record.describe_at(999, 0).to_string();

    assert_eq!(
        text,
        "Drawing a Pine tree at (999, 0) with color=[DarkGreen] and texture=[PineTexture.png]"
    );
}
