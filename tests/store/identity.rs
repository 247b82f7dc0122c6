//! Integration tests for record identity and counting

use std::sync::Arc;

use canopy_store::RecordStore;
use proptest::prelude::*;

// =============================================================================
// Identity Sharing
// =============================================================================

#[test]
fn oak_pine_oak_example() {
    let store = RecordStore::new();

    let oak1 = store.get_or_create("Oak", "Green", "OakTexture.png");
    let oak2 = store.get_or_create("Oak", "Green", "OakTexture.png");
    let oak3 = store.get_or_create("Oak", "Green", "OakTexture.png");
    let pine = store.get_or_create("Pine", "DarkGreen", "PineTexture.png");
    let oak4 = store.get_or_create("Oak", "Green", "OakTexture.png");

    assert_eq!(store.size(), 2);
    assert!(Arc::ptr_eq(&oak1, &oak2));
    assert!(Arc::ptr_eq(&oak2, &oak3));
    assert!(Arc::ptr_eq(&oak3, &oak4));
    assert!(!Arc::ptr_eq(&oak1, &pine));
}

#[test]
fn identity_survives_interleaved_calls() {
    let store = RecordStore::new();

    let first = store.get_or_create("Oak", "Green", "OakTexture.png");
    for i in 0..50 {
        store.get_or_create(&format!("Species{i}"), "Green", "Texture.png");
    }
    let again = store.get_or_create("Oak", "Green", "OakTexture.png");

    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(store.size(), 51);
}

// =============================================================================
// Distinctness
// =============================================================================

#[test]
fn each_field_distinguishes() {
    let store = RecordStore::new();

    let base = store.get_or_create("Oak", "Green", "OakTexture.png");
    let by_category = store.get_or_create("Pine", "Green", "OakTexture.png");
    let by_a = store.get_or_create("Oak", "Yellow", "OakTexture.png");
    let by_b = store.get_or_create("Oak", "Green", "PineTexture.png");

    assert!(!Arc::ptr_eq(&base, &by_category));
    assert!(!Arc::ptr_eq(&base, &by_a));
    assert!(!Arc::ptr_eq(&base, &by_b));
    assert_eq!(store.size(), 4);
}

#[test]
fn joined_string_collisions_stay_distinct() {
    let store = RecordStore::new();

    let left = store.get_or_create("A_B", "C", "D");
    let right = store.get_or_create("A", "B_C", "D");

    assert!(!Arc::ptr_eq(&left, &right));
    assert_eq!(store.size(), 2);
}

#[test]
fn empty_strings_are_valid_keys() {
    let store = RecordStore::new();

    let empty = store.get_or_create("", "", "");
    let again = store.get_or_create("", "", "");
    let other = store.get_or_create("", "", "x");

    assert!(Arc::ptr_eq(&empty, &again));
    assert!(!Arc::ptr_eq(&empty, &other));
    assert_eq!(store.size(), 2);
}

// =============================================================================
// Immutability
// =============================================================================

#[test]
fn category_collision_does_not_merge_or_mutate() {
    let store = RecordStore::new();

    let green = store.get_or_create("Oak", "Green", "OakTexture.png");
    let _red = store.get_or_create("Oak", "Red", "RedOak.png");

    assert_eq!(green.category(), "Oak");
    assert_eq!(green.attribute_a(), "Green");
    assert_eq!(green.attribute_b(), "OakTexture.png");

    let green_again = store.get("Oak", "Green", "OakTexture.png").unwrap();
    assert!(Arc::ptr_eq(&green, &green_again));
    assert_eq!(green_again.attribute_a(), "Green");
}

#[test]
fn snapshot_lists_each_record_once() {
    let store = RecordStore::new();
    store.get_or_create("Oak", "Green", "OakTexture.png");
    store.get_or_create("Oak", "Green", "OakTexture.png");
    store.get_or_create("Pine", "DarkGreen", "PineTexture.png");

    let mut categories: Vec<_> = store
        .records()
        .iter()
        .map(|r| r.category().to_string())
        .collect();
    categories.sort();

    assert_eq!(categories, ["Oak", "Pine"]);
}

// =============================================================================
// Count Correctness
// =============================================================================

proptest! {
    #[test]
    fn size_counts_distinct_triples_in_any_order(
        indices in prop::collection::vec(0usize..6, 0..100)
    ) {
        const TRIPLES: [(&str, &str, &str); 6] = [
            ("Oak", "Green", "OakTexture.png"),
            ("Oak", "Green", "Other.png"),
            ("Oak", "Red", "OakTexture.png"),
            ("Pine", "DarkGreen", "PineTexture.png"),
            ("Pine", "", ""),
            ("", "", ""),
        ];

        let store = RecordStore::new();
        let mut seen = [false; 6];
        for &i in &indices {
            let (c, a, b) = TRIPLES[i];
            store.get_or_create(c, a, b);
            seen[i] = true;
        }

        prop_assert_eq!(store.size(), seen.iter().filter(|s| **s).count());
    }
}
