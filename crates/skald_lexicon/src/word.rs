//! Lexical entries and their base-data edit cascades.

use im::Vector;
use skald_foundation::{Error, Id, NameScope, Result};
use skald_morph::PipelineKind;

use crate::lexicon::Lexicon;
use crate::pos::PosId;
use crate::word_class::ClassId;
use crate::word_form::FormId;

/// Handle to a [`Word`].
pub type WordId = Id<Word>;

/// The base data for a new word, built up before registration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewWord {
    pub(crate) base_form: String,
    pub(crate) base_pronunciation: String,
    pub(crate) base_rhyme: String,
    pub(crate) translation: String,
    pub(crate) definition: String,
}

impl NewWord {
    /// Creates a word seed from its three base values.
    #[must_use]
    pub fn new(
        base_form: impl Into<String>,
        base_pronunciation: impl Into<String>,
        base_rhyme: impl Into<String>,
    ) -> Self {
        Self {
            base_form: base_form.into(),
            base_pronunciation: base_pronunciation.into(),
            base_rhyme: base_rhyme.into(),
            translation: String::new(),
            definition: String::new(),
        }
    }

    /// Sets the gloss translation.
    #[must_use]
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    /// Sets the gloss definition.
    #[must_use]
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }
}

/// A dictionary headword with base attributes and derived forms.
///
/// Invariant: between operations, a word owns exactly one inflected form
/// per declension of its word class.
#[derive(Clone, Debug)]
pub struct Word {
    pub(crate) base_form: String,
    pub(crate) base_pronunciation: String,
    pub(crate) base_rhyme: String,
    pub(crate) translation: String,
    pub(crate) definition: String,
    pub(crate) part_of_speech: PosId,
    pub(crate) class: ClassId,
    pub(crate) forms: Vector<FormId>,
}

impl Word {
    /// Returns the base written form.
    #[must_use]
    pub fn base_form(&self) -> &str {
        &self.base_form
    }

    /// Returns the base pronunciation.
    #[must_use]
    pub fn base_pronunciation(&self) -> &str {
        &self.base_pronunciation
    }

    /// Returns the base rhyme key.
    #[must_use]
    pub fn base_rhyme(&self) -> &str {
        &self.base_rhyme
    }

    /// Returns the gloss translation.
    #[must_use]
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Returns the gloss definition.
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Returns the owning part of speech.
    #[must_use]
    pub fn part_of_speech(&self) -> PosId {
        self.part_of_speech
    }

    /// Returns the owning word class.
    #[must_use]
    pub fn class(&self) -> ClassId {
        self.class
    }

    /// Iterates over the word's inflected forms in declension order.
    pub fn forms(&self) -> impl Iterator<Item = FormId> + '_ {
        self.forms.iter().copied()
    }

    /// Returns the number of inflected forms.
    #[must_use]
    pub fn form_count(&self) -> usize {
        self.forms.len()
    }
}

impl Lexicon {
    /// Registers a word and derives one inflected form per declension of
    /// its class.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the class does not belong to the given part
    /// of speech.
    pub fn add_word(&mut self, seed: NewWord, pos: PosId, class: ClassId) -> Result<WordId> {
        let class_data = self.word_class(class)?;
        if class_data.part_of_speech != pos {
            let name = class_data.name.clone();
            return Err(Error::not_found(NameScope::WordClass, name));
        }

        let word = self.words.insert(Word {
            base_form: seed.base_form,
            base_pronunciation: seed.base_pronunciation,
            base_rhyme: seed.base_rhyme,
            translation: seed.translation,
            definition: seed.definition,
            part_of_speech: pos,
            class,
            forms: Vector::new(),
        });
        self.word_order.push_back(word);
        self.pos_mut(pos)?.words.push_back(word);
        self.class_mut(class)?.words.push_back(word);

        self.build_forms(word)?;
        Ok(word)
    }

    /// Removes a word, deleting all its forms first (cascading rhyme
    /// group cleanup), then its registry entries.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the word no longer exists.
    pub fn remove_word(&mut self, id: WordId) -> Result<()> {
        let form_ids: Vec<FormId> = self.word(id)?.forms.iter().copied().collect();
        for form in form_ids {
            self.remove_form(form)?;
        }

        let (pos, class) = {
            let word = self.word(id)?;
            (word.part_of_speech, word.class)
        };
        let part = self.pos_mut(pos)?;
        if let Some(index) = part.words.index_of(&id) {
            part.words.remove(index);
        }
        let class = self.class_mut(class)?;
        if let Some(index) = class.words.index_of(&id) {
            class.words.remove(index);
        }
        if let Some(index) = self.word_order.index_of(&id) {
            self.word_order.remove(index);
        }
        self.words.remove(id);
        Ok(())
    }

    /// Edits the base written form, rederiving the form field of every
    /// non-overridden inflected form.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the word no longer exists.
    pub fn edit_base_form(&mut self, id: WordId, value: impl Into<String>) -> Result<()> {
        self.word_mut(id)?.base_form = value.into();
        self.rederive_word_field(id, PipelineKind::Form)
    }

    /// Edits the base pronunciation, rederiving the pronunciation field of
    /// every non-overridden inflected form.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the word no longer exists.
    pub fn edit_base_pronunciation(&mut self, id: WordId, value: impl Into<String>) -> Result<()> {
        self.word_mut(id)?.base_pronunciation = value.into();
        self.rederive_word_field(id, PipelineKind::Pronunciation)
    }

    /// Edits the base rhyme key, rederiving the rhyme key of every
    /// non-overridden inflected form and re-assigning rhyme groups.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the word no longer exists.
    pub fn edit_base_rhyme(&mut self, id: WordId, value: impl Into<String>) -> Result<()> {
        self.word_mut(id)?.base_rhyme = value.into();
        self.rederive_word_field(id, PipelineKind::RhymeKey)
    }

    /// Edits the gloss translation. No cascade.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the word no longer exists.
    pub fn edit_translation(&mut self, id: WordId, value: impl Into<String>) -> Result<()> {
        self.word_mut(id)?.translation = value.into();
        Ok(())
    }

    /// Edits the gloss definition. No cascade.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the word no longer exists.
    pub fn edit_definition(&mut self, id: WordId, value: impl Into<String>) -> Result<()> {
        self.word_mut(id)?.definition = value.into();
        Ok(())
    }

    /// Moves a word to another class of the same part of speech.
    ///
    /// All current forms are deleted (releasing rhyme memberships and
    /// discarding irregular overrides) and the full form set is rebuilt
    /// for the new class's declensions.
    ///
    /// # Errors
    ///
    /// Returns `CrossPartOfSpeech` if the target class belongs to a
    /// different part of speech.
    pub fn change_class(&mut self, id: WordId, new_class: ClassId) -> Result<()> {
        let target = self.word_class(new_class)?;
        let word = self.word(id)?;
        if target.part_of_speech != word.part_of_speech {
            let (base_form, class_name) = (word.base_form.clone(), target.name.clone());
            return Err(Error::cross_part_of_speech(base_form, class_name));
        }
        if word.class == new_class {
            return Ok(());
        }

        let form_ids: Vec<FormId> = word.forms.iter().copied().collect();
        let old_class = word.class;
        for form in form_ids {
            self.remove_form(form)?;
        }

        let old = self.class_mut(old_class)?;
        if let Some(index) = old.words.index_of(&id) {
            old.words.remove(index);
        }
        self.class_mut(new_class)?.words.push_back(id);
        self.word_mut(id)?.class = new_class;

        self.build_forms(id)
    }

    /// Finds the word's inflected form for a declension name.
    #[must_use]
    pub fn form_by_declension_name(&self, word: WordId, declension: &str) -> Option<FormId> {
        let word = self.words.get(word)?;
        word.forms.iter().copied().find(|&id| {
            self.forms.get(id).is_some_and(|form| {
                self.declensions
                    .get(form.declension)
                    .is_some_and(|d| d.name == declension)
            })
        })
    }

    /// Derives the full form set for a word with no forms yet.
    ///
    /// This runs exactly once per word lifetime or once per class change;
    /// finding existing forms here means a bookkeeping bug upstream.
    pub(crate) fn build_forms(&mut self, id: WordId) -> Result<()> {
        let word = self.word(id)?;
        if !word.forms.is_empty() {
            let base_form = word.base_form.clone();
            return Err(Error::forms_already_derived(base_form));
        }
        let declension_ids: Vec<_> = self
            .word_class(word.class)?
            .declensions
            .iter()
            .copied()
            .collect();
        for declension in declension_ids {
            self.create_form(id, declension)?;
        }
        Ok(())
    }

    /// Rederives one field of every non-overridden form of a word after a
    /// base-data edit.
    fn rederive_word_field(&mut self, id: WordId, kind: PipelineKind) -> Result<()> {
        let (base, form_ids): (String, Vec<FormId>) = {
            let word = self.word(id)?;
            let base = match kind {
                PipelineKind::Form => word.base_form.clone(),
                PipelineKind::Pronunciation => word.base_pronunciation.clone(),
                PipelineKind::RhymeKey => word.base_rhyme.clone(),
            };
            (base, word.forms.iter().copied().collect())
        };

        for form_id in form_ids {
            let (declension, overridden, old_rhyme_key) = {
                let form = self.word_form(form_id)?;
                (
                    form.declension,
                    form.overrides.is_set(kind),
                    form.rhyme_key.clone(),
                )
            };
            if overridden {
                continue;
            }
            let derived = self
                .declension(declension)?
                .transformer
                .derive_field(kind, &base);
            match kind {
                PipelineKind::Form => self.form_mut(form_id)?.form = derived,
                PipelineKind::Pronunciation => self.form_mut(form_id)?.pronunciation = derived,
                PipelineKind::RhymeKey => {
                    if derived != old_rhyme_key {
                        self.release_rhyme(form_id)?;
                        self.bind_rhyme(form_id, derived)?;
                    }
                }
            }
        }
        Ok(())
    }
}
