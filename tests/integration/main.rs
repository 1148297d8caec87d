//! Cross-layer integration tests for Skald
//!
//! Tests that drive the full engine the way an editing session would:
//! grammar construction, rule authoring, word entry, and cascading edits.

mod dictionary_session;
mod reexports;
