//! Skald - Constructed-language lexicon engine
//!
//! This crate re-exports all layers of the Skald system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: skald_lexicon    — Entity graph, cascading edits, rhyme index
//! Layer 1: skald_morph      — Rewrite rules and derivation pipelines
//! Layer 0: skald_foundation — Core types (Id, Arena, Error)
//! ```

pub use skald_foundation as foundation;
pub use skald_lexicon as lexicon;
pub use skald_morph as morph;
