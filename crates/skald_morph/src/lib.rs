//! Rewrite rules and derivation pipelines for Skald.
//!
//! This crate provides:
//! - [`RewriteRule`] - A guarded regex find/replace step
//! - [`Pipeline`] - An ordered, conditional rewrite sequence
//! - [`Transformer`] - The three-pipeline bundle a declension applies
//!
//! Derivation is pure: given the same base string and the same rules, the
//! output is always identical. Patterns are compiled when a rule is
//! registered, so derivation itself has no error path.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod pipeline;
mod rule;
mod transformer;

pub use pipeline::Pipeline;
pub use rule::RewriteRule;
pub use transformer::{BaseShape, Derived, PipelineKind, Transformer};
