//! Declensions: named rule bundles scoped to one word class.
//!
//! A declension owns three independent rewrite pipelines (form,
//! pronunciation, rhyme key). Any mutation of a pipeline immediately
//! recomputes every existing inflected form produced by that declension
//! across the owning class; callers never touch the affected words
//! themselves.

use skald_foundation::{Error, Id, NameScope, Result};
use skald_morph::{PipelineKind, RewriteRule, Transformer};

use crate::lexicon::Lexicon;
use crate::word_class::ClassId;

/// Handle to a [`Declension`].
pub type DeclensionId = Id<Declension>;

/// A named inflection pattern producing one derived form per word.
#[derive(Clone, Debug)]
pub struct Declension {
    pub(crate) name: String,
    pub(crate) class: ClassId,
    pub(crate) transformer: Transformer,
}

impl Declension {
    pub(crate) fn new(name: String, class: ClassId) -> Self {
        Self {
            name,
            class,
            transformer: Transformer::new(),
        }
    }

    /// Returns the declension's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning word class.
    #[must_use]
    pub fn class(&self) -> ClassId {
        self.class
    }

    /// Returns the declension's three rewrite pipelines.
    #[must_use]
    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }
}

impl Lexicon {
    /// Appends a rewrite rule to one of a declension's pipelines, then
    /// rederives every affected inflected form in the owning class.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the guard or match pattern is not a
    /// valid regex; in that case nothing changes.
    pub fn add_rule(
        &mut self,
        declension: DeclensionId,
        kind: PipelineKind,
        guard: &str,
        pattern: &str,
        replacement: &str,
    ) -> Result<()> {
        let rule = RewriteRule::new(guard, pattern, replacement)?;
        self.declension_mut(declension)?
            .transformer
            .pipeline_mut(kind)
            .push(rule);
        self.rederive_declension_forms(declension)
    }

    /// Removes the first value-equal rule from one of a declension's
    /// pipelines, then rederives every affected inflected form.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no rule with these source strings exists in
    /// the selected pipeline.
    pub fn remove_rule(
        &mut self,
        declension: DeclensionId,
        kind: PipelineKind,
        guard: &str,
        pattern: &str,
        replacement: &str,
    ) -> Result<()> {
        let removed = self
            .declension_mut(declension)?
            .transformer
            .pipeline_mut(kind)
            .remove(guard, pattern, replacement);
        if !removed {
            return Err(Error::not_found(
                NameScope::Rule,
                format!("{guard} {pattern} {replacement}"),
            ));
        }
        self.rederive_declension_forms(declension)
    }

    /// Rederives every inflected form this declension produced, across all
    /// words of the owning class. Overridden fields are left untouched.
    pub(crate) fn rederive_declension_forms(&mut self, declension: DeclensionId) -> Result<()> {
        let class = self.declension(declension)?.class;
        let word_ids: Vec<_> = self.word_class(class)?.words.iter().copied().collect();
        for word in word_ids {
            let form = self.form_of_declension(word, declension)?;
            self.rederive_form(form)?;
        }
        Ok(())
    }
}
