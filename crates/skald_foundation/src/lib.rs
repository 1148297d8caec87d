//! Typed handles, generational arenas, and error types for Skald.
//!
//! This crate provides:
//! - [`Id`] - Typed generational handles
//! - [`Arena`] - Slot-map storage with stale reference detection
//! - [`Error`] - Engine error types with a typed failure taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod handle;

pub use error::{Error, ErrorKind, NameScope, Result};
pub use handle::{Arena, Id};
