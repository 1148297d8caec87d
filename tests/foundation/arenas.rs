//! Generational arena tests
//!
//! Tests slot reuse, stale handle detection, and iteration under churn.

use skald_foundation::Arena;

// =============================================================================
// Basic Lifecycle
// =============================================================================

#[test]
fn insert_get_remove_round_trip() {
    let mut arena = Arena::new();
    let id = arena.insert(String::from("gleira"));

    assert_eq!(arena.get(id).map(String::as_str), Some("gleira"));
    assert_eq!(arena.remove(id), Some(String::from("gleira")));
    assert_eq!(arena.get(id), None);
}

#[test]
fn get_mut_edits_in_place() {
    let mut arena = Arena::new();
    let id = arena.insert(vec![1, 2]);

    arena.get_mut(id).unwrap().push(3);
    assert_eq!(arena.get(id), Some(&vec![1, 2, 3]));
}

#[test]
fn contains_tracks_liveness() {
    let mut arena = Arena::new();
    let id = arena.insert(5);
    assert!(arena.contains(id));

    arena.remove(id);
    assert!(!arena.contains(id));
}

// =============================================================================
// Slot Reuse
// =============================================================================

#[test]
fn freed_slots_are_reused() {
    let mut arena = Arena::new();
    let a = arena.insert("a");
    let b = arena.insert("b");
    arena.remove(a);

    let c = arena.insert("c");

    // The freed slot comes back before a fresh one is allocated
    assert_eq!(c.index(), a.index());
    assert_ne!(c, a);
    assert_eq!(arena.get(b), Some(&"b"));
    assert_eq!(arena.get(c), Some(&"c"));
}

#[test]
fn stale_handles_stay_stale_across_many_reuses() {
    let mut arena = Arena::new();
    let original = arena.insert(0);
    arena.remove(original);

    let mut latest = original;
    for i in 1..50 {
        latest = arena.insert(i);
        assert_eq!(arena.get(original), None);
        if i < 49 {
            arena.remove(latest);
        }
    }

    assert_eq!(arena.get(latest), Some(&49));
}

// =============================================================================
// Iteration Under Churn
// =============================================================================

#[test]
fn iter_skips_removed_entries() {
    let mut arena = Arena::new();
    let ids: Vec<_> = (0..6).map(|i| arena.insert(i)).collect();
    arena.remove(ids[1]);
    arena.remove(ids[4]);

    let live: Vec<_> = arena.iter().map(|(_, v)| *v).collect();
    assert_eq!(live, vec![0, 2, 3, 5]);
    assert_eq!(arena.len(), 4);
}

#[test]
fn iter_yields_resolvable_handles() {
    let mut arena = Arena::new();
    for word in ["gleira", "hógar", "mjógir"] {
        arena.insert(word);
    }

    for (id, value) in arena.iter() {
        assert_eq!(arena.get(id), Some(value));
    }
}

#[test]
fn interleaved_insert_remove_keeps_len_consistent() {
    let mut arena = Arena::new();
    let mut live = Vec::new();

    for round in 0..10 {
        live.push(arena.insert(round));
        if round % 3 == 0 {
            let id = live.remove(0);
            arena.remove(id);
        }
        assert_eq!(arena.len(), live.len());
    }

    for id in &live {
        assert!(arena.contains(*id));
    }
}
