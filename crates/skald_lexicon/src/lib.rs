//! Entity graph, cascading edits, and rhyme indexing for Skald.
//!
//! This crate provides:
//! - [`Lexicon`] - The root registry owning every entity arena
//! - [`PartOfSpeech`], [`WordClass`], [`Declension`] - The grammar hierarchy
//! - [`Word`], [`WordForm`] - Lexical entries and their derived forms
//! - [`RhymeGroup`] - Value-derived rhyme equivalence classes
//!
//! Every structural edit cascades to completion before the call returns:
//! rule edits rederive the affected forms, declension edits fan out across
//! classes and words, and rhyme groups are created and destroyed as derived
//! rhyme keys change. No partially-propagated state is observable between
//! operations.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod declension;
mod lexicon;
mod pos;
mod rhyme;
mod word;
mod word_class;
mod word_form;

pub use declension::{Declension, DeclensionId};
pub use lexicon::Lexicon;
pub use pos::{PartOfSpeech, PosId};
pub use rhyme::{RhymeGroup, RhymeId};
pub use word::{NewWord, Word, WordId};
pub use word_class::{ClassId, WordClass};
pub use word_form::{FormId, FormPatch, OverrideSet, WordForm};
