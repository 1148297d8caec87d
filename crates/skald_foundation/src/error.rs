//! Error types for the Skald engine.
//!
//! Uses `thiserror` for ergonomic error definition. The engine never writes
//! to any output stream; every failure is returned to the immediate caller
//! as a typed value for the embedding shell to render.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the Skald crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Skald operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a duplicate name error.
    #[must_use]
    pub fn duplicate_name(scope: NameScope, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateName {
            scope,
            name: name.into(),
        })
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(scope: NameScope, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound {
            scope,
            name: name.into(),
        })
    }

    /// Creates a last word class invariant error.
    #[must_use]
    pub fn last_word_class(part_of_speech: impl Into<String>) -> Self {
        Self::new(ErrorKind::LastWordClass {
            part_of_speech: part_of_speech.into(),
        })
    }

    /// Creates a forms already derived invariant error.
    #[must_use]
    pub fn forms_already_derived(word: impl Into<String>) -> Self {
        Self::new(ErrorKind::FormsAlreadyDerived { word: word.into() })
    }

    /// Creates a cross part-of-speech reclassification error.
    #[must_use]
    pub fn cross_part_of_speech(word: impl Into<String>, class: impl Into<String>) -> Self {
        Self::new(ErrorKind::CrossPartOfSpeech {
            word: word.into(),
            class: class.into(),
        })
    }

    /// Creates an invalid pattern error from a failed regex compilation.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates a stale handle error.
    #[must_use]
    pub fn stale_handle(entity: impl Into<String>) -> Self {
        Self::new(ErrorKind::StaleHandle(entity.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error is one of the invariant violation kinds.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::LastWordClass { .. }
                | ErrorKind::FormsAlreadyDerived { .. }
                | ErrorKind::CrossPartOfSpeech { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A name collides within its uniqueness scope.
    #[error("duplicate {scope} name: {name}")]
    DuplicateName {
        /// The uniqueness scope where the collision occurred.
        scope: NameScope,
        /// The colliding name.
        name: String,
    },

    /// A name does not resolve within its expected scope.
    #[error("{scope} not found: {name}")]
    NotFound {
        /// The scope that was searched.
        scope: NameScope,
        /// The name that did not resolve.
        name: String,
    },

    /// Attempted to remove a part of speech's only word class.
    #[error("cannot remove the last word class of part of speech {part_of_speech}")]
    LastWordClass {
        /// The part of speech whose invariant would be broken.
        part_of_speech: String,
    },

    /// Attempted to derive forms for a word that already has them.
    #[error("forms already derived for word {word}")]
    FormsAlreadyDerived {
        /// The base form of the offending word.
        word: String,
    },

    /// Attempted to reclassify a word into a class of another part of speech.
    #[error("cannot move word {word} into class {class} of a different part of speech")]
    CrossPartOfSpeech {
        /// The base form of the word being moved.
        word: String,
        /// The target class name.
        class: String,
    },

    /// A rewrite rule pattern failed to compile.
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern {
        /// The pattern source text.
        pattern: String,
        /// The regex compiler's message.
        message: String,
    },

    /// A handle refers to a removed entity (generation mismatch).
    #[error("stale handle: {0}")]
    StaleHandle(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Uniqueness scopes for names in the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameScope {
    /// Part of speech names, unique within the lexicon.
    PartOfSpeech,
    /// Word class names, unique within their part of speech.
    WordClass,
    /// Declension names, unique within their part of speech and class.
    Declension,
    /// Word base forms (lookup scope only; duplicates are allowed).
    Word,
    /// Rewrite rules (lookup scope only; identified by value).
    Rule,
    /// Rhyme group ids (lookup scope only; value-derived, never user-named).
    RhymeGroup,
}

impl fmt::Display for NameScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PartOfSpeech => "part of speech",
            Self::WordClass => "word class",
            Self::Declension => "declension",
            Self::Word => "word",
            Self::Rule => "rule",
            Self::RhymeGroup => "rhyme group",
        };
        f.write_str(name)
    }
}
