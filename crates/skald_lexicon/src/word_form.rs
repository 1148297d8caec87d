//! Inflected forms and irregular overrides.

use skald_foundation::{Id, Result};
use skald_morph::PipelineKind;

use crate::declension::DeclensionId;
use crate::lexicon::Lexicon;
use crate::rhyme::RhymeId;
use crate::word::WordId;

/// Handle to a [`WordForm`].
pub type FormId = Id<WordForm>;

/// Which fields of a form are under irregular override.
///
/// An overridden field keeps its manually set value and is skipped by
/// every rederivation cascade until the override is cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverrideSet {
    /// The written form is overridden.
    pub form: bool,
    /// The pronunciation is overridden.
    pub pronunciation: bool,
    /// The rhyme key is overridden.
    pub rhyme_key: bool,
}

impl OverrideSet {
    /// Returns true if the field selected by `kind` is overridden.
    #[must_use]
    pub fn is_set(self, kind: PipelineKind) -> bool {
        match kind {
            PipelineKind::Form => self.form,
            PipelineKind::Pronunciation => self.pronunciation,
            PipelineKind::RhymeKey => self.rhyme_key,
        }
    }

    /// Returns true if any field is overridden.
    #[must_use]
    pub fn any(self) -> bool {
        self.form || self.pronunciation || self.rhyme_key
    }
}

/// An irregular override request: each present field is set directly and
/// marked exempt from rederivation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPatch {
    pub(crate) form: Option<String>,
    pub(crate) pronunciation: Option<String>,
    pub(crate) rhyme_key: Option<String>,
}

impl FormPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the written form.
    #[must_use]
    pub fn with_form(mut self, form: impl Into<String>) -> Self {
        self.form = Some(form.into());
        self
    }

    /// Overrides the pronunciation.
    #[must_use]
    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = Some(pronunciation.into());
        self
    }

    /// Overrides the rhyme key.
    #[must_use]
    pub fn with_rhyme_key(mut self, rhyme_key: impl Into<String>) -> Self {
        self.rhyme_key = Some(rhyme_key.into());
        self
    }
}

/// The output of one declension applied to one word.
///
/// Belongs to exactly one rhyme group at all times; membership follows the
/// derived (or overridden) rhyme key.
#[derive(Clone, Debug)]
pub struct WordForm {
    pub(crate) word: WordId,
    pub(crate) declension: DeclensionId,
    pub(crate) form: String,
    pub(crate) pronunciation: String,
    pub(crate) rhyme_key: String,
    pub(crate) rhyme_group: RhymeId,
    pub(crate) overrides: OverrideSet,
}

impl WordForm {
    pub(crate) fn new(
        word: WordId,
        declension: DeclensionId,
        form: String,
        pronunciation: String,
    ) -> Self {
        Self {
            word,
            declension,
            form,
            pronunciation,
            rhyme_key: String::new(),
            rhyme_group: RhymeId::null(),
            overrides: OverrideSet::default(),
        }
    }

    /// Returns the owning word.
    #[must_use]
    pub fn word(&self) -> WordId {
        self.word
    }

    /// Returns the producing declension.
    #[must_use]
    pub fn declension(&self) -> DeclensionId {
        self.declension
    }

    /// Returns the derived (or overridden) written form.
    #[must_use]
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Returns the derived (or overridden) pronunciation.
    #[must_use]
    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    /// Returns the derived (or overridden) rhyme key.
    #[must_use]
    pub fn rhyme_key(&self) -> &str {
        &self.rhyme_key
    }

    /// Returns the rhyme group this form belongs to.
    #[must_use]
    pub fn rhyme_group(&self) -> RhymeId {
        self.rhyme_group
    }

    /// Returns which fields are under irregular override.
    #[must_use]
    pub fn overrides(&self) -> OverrideSet {
        self.overrides
    }
}

impl Lexicon {
    /// Applies an irregular override to a form.
    ///
    /// Each field present in the patch is set directly and exempted from
    /// rederivation until [`clear_overrides`](Lexicon::clear_overrides) is
    /// called. Overriding the rhyme key re-assigns the rhyme group.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the form no longer exists.
    pub fn override_form(&mut self, id: FormId, patch: FormPatch) -> Result<()> {
        {
            let form = self.form_mut(id)?;
            if let Some(value) = patch.form {
                form.form = value;
                form.overrides.form = true;
            }
            if let Some(value) = patch.pronunciation {
                form.pronunciation = value;
                form.overrides.pronunciation = true;
            }
        }
        if let Some(key) = patch.rhyme_key {
            let changed = {
                let form = self.form_mut(id)?;
                form.overrides.rhyme_key = true;
                form.rhyme_key != key
            };
            if changed {
                self.release_rhyme(id)?;
                self.bind_rhyme(id, key)?;
            }
        }
        Ok(())
    }

    /// Clears all irregular overrides on a form and rederives every field
    /// from the word's base data and the declension's pipelines.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the form no longer exists.
    pub fn clear_overrides(&mut self, id: FormId) -> Result<()> {
        self.form_mut(id)?.overrides = OverrideSet::default();
        self.rederive_form(id)
    }
}
