//! Typed handle tests
//!
//! Tests Id construction, the null sentinel, and type-level separation.

use skald_foundation::Id;

struct Noun;
struct Verb;

// =============================================================================
// Construction
// =============================================================================

#[test]
fn from_parts_round_trips() {
    let id: Id<Noun> = Id::from_parts(7, 3);
    assert_eq!(id.index(), 7);
    assert_eq!(id.generation(), 3);
}

#[test]
fn handles_are_copy() {
    let id: Id<Noun> = Id::from_parts(1, 1);
    let copy = id;
    assert_eq!(id, copy);
}

#[test]
fn same_parts_compare_equal() {
    let a: Id<Noun> = Id::from_parts(4, 1);
    let b: Id<Noun> = Id::from_parts(4, 1);
    assert_eq!(a, b);
}

#[test]
fn different_generations_compare_unequal() {
    let a: Id<Noun> = Id::from_parts(4, 1);
    let b: Id<Noun> = Id::from_parts(4, 3);
    assert_ne!(a, b);
}

// =============================================================================
// Null Sentinel
// =============================================================================

#[test]
fn null_is_null() {
    let id: Id<Verb> = Id::null();
    assert!(id.is_null());
}

#[test]
fn ordinary_handles_are_not_null() {
    let id: Id<Verb> = Id::from_parts(0, 1);
    assert!(!id.is_null());
}

#[test]
fn null_displays_as_hash_null() {
    assert_eq!(format!("{}", Id::<Noun>::null()), "#null");
    assert_eq!(format!("{}", Id::<Noun>::from_parts(12, 1)), "#12");
}

// =============================================================================
// Hashing
// =============================================================================

#[test]
fn handles_work_as_hash_map_keys() {
    use std::collections::HashMap;

    let mut map: HashMap<Id<Noun>, &str> = HashMap::new();
    let a = Id::from_parts(0, 1);
    let b = Id::from_parts(1, 1);
    map.insert(a, "gleira");
    map.insert(b, "hógar");

    assert_eq!(map.get(&a), Some(&"gleira"));
    assert_eq!(map.get(&b), Some(&"hógar"));
}
