//! The three-pipeline bundle a declension applies to a word's base data.

use crate::pipeline::Pipeline;

/// Selects one of a transformer's three pipelines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    /// The written form pipeline.
    Form,
    /// The pronunciation pipeline.
    Pronunciation,
    /// The rhyme-key pipeline.
    RhymeKey,
}

/// A word's base data, borrowed for derivation.
#[derive(Clone, Copy, Debug)]
pub struct BaseShape<'a> {
    /// The base written form.
    pub form: &'a str,
    /// The base pronunciation.
    pub pronunciation: &'a str,
    /// The base rhyme key.
    pub rhyme_key: &'a str,
}

/// The derived values for one inflected form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derived {
    /// The derived written form.
    pub form: String,
    /// The derived pronunciation.
    pub pronunciation: String,
    /// The derived rhyme key.
    pub rhyme_key: String,
}

/// Three independent rewrite pipelines: form, pronunciation, rhyme key.
///
/// This is the pure derivation half of a declension; the lexicon layer
/// owns the declension's name and class membership and drives the
/// repropagation cascades when a transformer is edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transformer {
    form: Pipeline,
    pronunciation: Pipeline,
    rhyme: Pipeline,
}

impl Transformer {
    /// Creates a transformer with three empty pipelines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pipeline for the given kind.
    #[must_use]
    pub fn pipeline(&self, kind: PipelineKind) -> &Pipeline {
        match kind {
            PipelineKind::Form => &self.form,
            PipelineKind::Pronunciation => &self.pronunciation,
            PipelineKind::RhymeKey => &self.rhyme,
        }
    }

    /// Returns the pipeline for the given kind, mutably.
    #[must_use]
    pub fn pipeline_mut(&mut self, kind: PipelineKind) -> &mut Pipeline {
        match kind {
            PipelineKind::Form => &mut self.form,
            PipelineKind::Pronunciation => &mut self.pronunciation,
            PipelineKind::RhymeKey => &mut self.rhyme,
        }
    }

    /// Derives one field from its base value.
    #[must_use]
    pub fn derive_field(&self, kind: PipelineKind, base: &str) -> String {
        self.pipeline(kind).derive(base)
    }

    /// Derives all three fields from a word's base data.
    #[must_use]
    pub fn derive(&self, base: BaseShape<'_>) -> Derived {
        Derived {
            form: self.form.derive(base.form),
            pronunciation: self.pronunciation.derive(base.pronunciation),
            rhyme_key: self.rhyme.derive(base.rhyme_key),
        }
    }
}
