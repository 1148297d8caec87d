//! Pipeline derivation tests
//!
//! Tests sequence-order threading and the guard-on-current-string rule.

use skald_morph::{Pipeline, RewriteRule};

fn rule(guard: &str, pattern: &str, replacement: &str) -> RewriteRule {
    RewriteRule::new(guard, pattern, replacement).unwrap()
}

// =============================================================================
// Sequence Threading
// =============================================================================

#[test]
fn later_rules_see_earlier_output() {
    let mut pipeline = Pipeline::new();
    pipeline.push(rule("a$", ".$", "i"));
    pipeline.push(rule("i$", "^.", "G"));

    // Second rule's guard only matches because the first rule ran
    assert_eq!(pipeline.derive("gleira"), "Gleiri");
}

#[test]
fn rule_disabled_by_earlier_rewrite_does_not_fire() {
    let mut pipeline = Pipeline::new();
    pipeline.push(rule("a$", ".$", "u"));
    pipeline.push(rule("a$", ".$", "x"));

    assert_eq!(pipeline.derive("gleira"), "gleiru");
}

#[test]
fn three_step_suffix_chain() {
    let mut pipeline = Pipeline::new();
    pipeline.push(rule("ar$", "ar$", "ir"));
    pipeline.push(rule("ir$", "ir$", "ur"));
    pipeline.push(rule("ur$", "ur$", "r"));

    assert_eq!(pipeline.derive("hógar"), "hógr");
}

#[test]
fn skipped_rules_do_not_break_the_chain() {
    let mut pipeline = Pipeline::new();
    pipeline.push(rule("x$", ".$", "y"));
    pipeline.push(rule("a$", ".$", "u"));

    assert_eq!(pipeline.derive("gleira"), "gleiru");
}

// =============================================================================
// Editing
// =============================================================================

#[test]
fn removing_a_mid_chain_rule_changes_the_output() {
    let mut pipeline = Pipeline::new();
    pipeline.push(rule("a$", ".$", "i"));
    pipeline.push(rule("i$", ".$", "o"));

    assert_eq!(pipeline.derive("gleira"), "gleiro");

    assert!(pipeline.remove("a$", ".$", "i"));
    assert_eq!(pipeline.derive("gleira"), "gleira");
}

#[test]
fn duplicate_rules_are_removed_one_at_a_time() {
    let mut pipeline = Pipeline::new();
    pipeline.push(rule("", "a", "aa"));
    pipeline.push(rule("", "a", "aa"));

    assert_eq!(pipeline.derive("ba"), "baaaa");

    assert!(pipeline.remove("", "a", "aa"));
    assert_eq!(pipeline.len(), 1);
    assert_eq!(pipeline.derive("ba"), "baa");
}

#[test]
fn iter_exposes_rules_in_push_order() {
    let mut pipeline = Pipeline::new();
    pipeline.push(rule("a$", ".$", "u"));
    pipeline.push(rule("e$", ".$", "i"));

    let replacements: Vec<_> = pipeline.iter().map(RewriteRule::replacement).collect();
    assert_eq!(replacements, vec!["u", "i"]);
}

// =============================================================================
// Identity Cases
// =============================================================================

#[test]
fn empty_input_through_empty_pipeline() {
    let pipeline = Pipeline::new();
    assert_eq!(pipeline.derive(""), "");
}

#[test]
fn derivation_does_not_consume_the_pipeline() {
    let mut pipeline = Pipeline::new();
    pipeline.push(rule("a$", ".$", "u"));

    assert_eq!(pipeline.derive("gleira"), "gleiru");
    assert_eq!(pipeline.derive("gleira"), "gleiru");
    assert_eq!(pipeline.len(), 1);
}
