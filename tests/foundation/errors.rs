//! Error taxonomy tests
//!
//! Tests display formatting, kind matching, and the invariant violation
//! classification.

use skald_foundation::{Error, ErrorKind, NameScope};

// =============================================================================
// Display Formatting
// =============================================================================

#[test]
fn duplicate_name_names_its_scope() {
    let err = Error::duplicate_name(NameScope::WordClass, "feminine");
    assert_eq!(format!("{err}"), "duplicate word class name: feminine");
}

#[test]
fn not_found_names_its_scope() {
    let err = Error::not_found(NameScope::Rule, "a$ .$ u");
    assert_eq!(format!("{err}"), "rule not found: a$ .$ u");
}

#[test]
fn stale_handle_names_the_entity_kind() {
    let err = Error::stale_handle("word form");
    assert_eq!(format!("{err}"), "stale handle: word form");
}

#[test]
fn cross_part_of_speech_names_word_and_class() {
    let err = Error::cross_part_of_speech("gleira", "verb");
    let msg = format!("{err}");
    assert!(msg.contains("gleira"));
    assert!(msg.contains("verb"));
}

#[test]
fn every_name_scope_has_a_display_name() {
    let scopes = [
        NameScope::PartOfSpeech,
        NameScope::WordClass,
        NameScope::Declension,
        NameScope::Word,
        NameScope::Rule,
        NameScope::RhymeGroup,
    ];
    for scope in scopes {
        assert!(!format!("{scope}").is_empty());
    }
}

// =============================================================================
// Invariant Classification
// =============================================================================

#[test]
fn invariant_violations_are_flagged() {
    assert!(Error::last_word_class("noun").is_invariant_violation());
    assert!(Error::forms_already_derived("gleira").is_invariant_violation());
    assert!(Error::cross_part_of_speech("gleira", "verb").is_invariant_violation());
}

#[test]
fn lookup_failures_are_not_invariant_violations() {
    assert!(!Error::duplicate_name(NameScope::PartOfSpeech, "noun").is_invariant_violation());
    assert!(!Error::not_found(NameScope::Declension, "accusative").is_invariant_violation());
    assert!(!Error::stale_handle("word").is_invariant_violation());
    assert!(!Error::invalid_pattern("a(", "unclosed group").is_invariant_violation());
}

// =============================================================================
// Kind Matching
// =============================================================================

#[test]
fn kinds_are_pattern_matchable() {
    let err = Error::invalid_pattern("a(", "unclosed group");
    match err.kind {
        ErrorKind::InvalidPattern { pattern, .. } => assert_eq!(pattern, "a("),
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn errors_implement_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::internal("bookkeeping"));
}
