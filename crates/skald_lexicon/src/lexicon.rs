//! The lexicon root: arenas, registries, and shared cascade plumbing.
//!
//! The `Lexicon` is the unified interface to the whole object graph. All
//! back-references between entities are typed handles resolved through it,
//! and all mutation goes through its methods; no caller touches an entity's
//! collections directly. Entity-level operations live in the module of the
//! entity they act on (`pos`, `word_class`, `declension`, `word`,
//! `word_form`, `rhyme`); this module holds the stores, the name lookups,
//! and the form-derivation helpers every cascade shares.

use im::{HashMap, Vector};
use skald_foundation::{Arena, Error, Result};
use skald_morph::BaseShape;

use crate::declension::{Declension, DeclensionId};
use crate::pos::{PartOfSpeech, PosId};
use crate::rhyme::{RhymeGroup, RhymeId};
use crate::word::{Word, WordId};
use crate::word_class::{ClassId, WordClass};
use crate::word_form::{FormId, WordForm};

/// The root registry for one lexicon session.
///
/// Owns the six entity arenas plus the ordered part-of-speech and word
/// registries and the rhyme-key index. The lexicon is the only component
/// that creates or destroys [`RhymeGroup`]s.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    pub(crate) parts_of_speech: Arena<PartOfSpeech>,
    pub(crate) classes: Arena<WordClass>,
    pub(crate) declensions: Arena<Declension>,
    pub(crate) words: Arena<Word>,
    pub(crate) forms: Arena<WordForm>,
    pub(crate) rhyme_groups: Arena<RhymeGroup>,
    /// Parts of speech in registration order.
    pub(crate) pos_order: Vector<PosId>,
    /// All words in registration order.
    pub(crate) word_order: Vector<WordId>,
    /// Derived rhyme key to rhyme group.
    pub(crate) rhyme_index: HashMap<String, RhymeId>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Handle resolution ---

    /// Resolves a part of speech handle.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the entity no longer exists.
    pub fn part_of_speech(&self, id: PosId) -> Result<&PartOfSpeech> {
        self.parts_of_speech
            .get(id)
            .ok_or_else(|| Error::stale_handle("part of speech"))
    }

    /// Resolves a word class handle.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the entity no longer exists.
    pub fn word_class(&self, id: ClassId) -> Result<&WordClass> {
        self.classes
            .get(id)
            .ok_or_else(|| Error::stale_handle("word class"))
    }

    /// Resolves a declension handle.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the entity no longer exists.
    pub fn declension(&self, id: DeclensionId) -> Result<&Declension> {
        self.declensions
            .get(id)
            .ok_or_else(|| Error::stale_handle("declension"))
    }

    /// Resolves a word handle.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the entity no longer exists.
    pub fn word(&self, id: WordId) -> Result<&Word> {
        self.words.get(id).ok_or_else(|| Error::stale_handle("word"))
    }

    /// Resolves a word form handle.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the entity no longer exists.
    pub fn word_form(&self, id: FormId) -> Result<&WordForm> {
        self.forms
            .get(id)
            .ok_or_else(|| Error::stale_handle("word form"))
    }

    /// Resolves a rhyme group handle.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the entity no longer exists.
    pub fn rhyme_group(&self, id: RhymeId) -> Result<&RhymeGroup> {
        self.rhyme_groups
            .get(id)
            .ok_or_else(|| Error::stale_handle("rhyme group"))
    }

    pub(crate) fn pos_mut(&mut self, id: PosId) -> Result<&mut PartOfSpeech> {
        self.parts_of_speech
            .get_mut(id)
            .ok_or_else(|| Error::stale_handle("part of speech"))
    }

    pub(crate) fn class_mut(&mut self, id: ClassId) -> Result<&mut WordClass> {
        self.classes
            .get_mut(id)
            .ok_or_else(|| Error::stale_handle("word class"))
    }

    pub(crate) fn declension_mut(&mut self, id: DeclensionId) -> Result<&mut Declension> {
        self.declensions
            .get_mut(id)
            .ok_or_else(|| Error::stale_handle("declension"))
    }

    pub(crate) fn word_mut(&mut self, id: WordId) -> Result<&mut Word> {
        self.words
            .get_mut(id)
            .ok_or_else(|| Error::stale_handle("word"))
    }

    pub(crate) fn form_mut(&mut self, id: FormId) -> Result<&mut WordForm> {
        self.forms
            .get_mut(id)
            .ok_or_else(|| Error::stale_handle("word form"))
    }

    pub(crate) fn rhyme_mut(&mut self, id: RhymeId) -> Result<&mut RhymeGroup> {
        self.rhyme_groups
            .get_mut(id)
            .ok_or_else(|| Error::stale_handle("rhyme group"))
    }

    // --- Enumeration ---

    /// Iterates over parts of speech in registration order.
    pub fn parts_of_speech(&self) -> impl Iterator<Item = PosId> + '_ {
        self.pos_order.iter().copied()
    }

    /// Returns the number of parts of speech.
    #[must_use]
    pub fn part_of_speech_count(&self) -> usize {
        self.pos_order.len()
    }

    /// Iterates over all words in registration order.
    pub fn words(&self) -> impl Iterator<Item = WordId> + '_ {
        self.word_order.iter().copied()
    }

    /// Returns the number of words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_order.len()
    }

    /// Iterates over all live rhyme groups.
    pub fn rhyme_groups(&self) -> impl Iterator<Item = RhymeId> + '_ {
        self.rhyme_groups.iter().map(|(id, _)| id)
    }

    /// Returns the number of rhyme groups.
    #[must_use]
    pub fn rhyme_group_count(&self) -> usize {
        self.rhyme_groups.len()
    }

    // --- Name lookups ---

    /// Looks up a part of speech by name.
    #[must_use]
    pub fn part_of_speech_by_name(&self, name: &str) -> Option<PosId> {
        self.pos_order
            .iter()
            .copied()
            .find(|&id| self.parts_of_speech.get(id).is_some_and(|p| p.name == name))
    }

    /// Looks up a word class by name within a part of speech.
    #[must_use]
    pub fn class_by_name(&self, pos: PosId, name: &str) -> Option<ClassId> {
        let pos = self.parts_of_speech.get(pos)?;
        pos.classes
            .iter()
            .copied()
            .find(|&id| self.classes.get(id).is_some_and(|c| c.name == name))
    }

    /// Looks up a declension by name within a word class.
    #[must_use]
    pub fn declension_by_name(&self, class: ClassId, name: &str) -> Option<DeclensionId> {
        let class = self.classes.get(class)?;
        class
            .declensions
            .iter()
            .copied()
            .find(|&id| self.declensions.get(id).is_some_and(|d| d.name == name))
    }

    /// Looks up words by base form, in registration order.
    ///
    /// Multiple words may share a base form, so this returns a set.
    #[must_use]
    pub fn words_by_form(&self, base_form: &str) -> Vec<WordId> {
        self.word_order
            .iter()
            .copied()
            .filter(|&id| self.words.get(id).is_some_and(|w| w.base_form == base_form))
            .collect()
    }

    /// Looks up words by translation, in registration order.
    #[must_use]
    pub fn words_by_translation(&self, translation: &str) -> Vec<WordId> {
        self.word_order
            .iter()
            .copied()
            .filter(|&id| {
                self.words
                    .get(id)
                    .is_some_and(|w| w.translation == translation)
            })
            .collect()
    }

    /// Looks up a rhyme group by its derived rhyme key.
    #[must_use]
    pub fn rhyme_group_by_id(&self, key: &str) -> Option<RhymeId> {
        self.rhyme_index.get(key).copied()
    }

    // --- Form derivation plumbing shared by the cascades ---

    /// Derives the three field values a declension produces for a word.
    pub(crate) fn derive_values(
        &self,
        word: WordId,
        declension: DeclensionId,
    ) -> Result<skald_morph::Derived> {
        let word = self.word(word)?;
        let declension = self.declension(declension)?;
        Ok(declension.transformer.derive(BaseShape {
            form: &word.base_form,
            pronunciation: &word.base_pronunciation,
            rhyme_key: &word.base_rhyme,
        }))
    }

    /// Creates the inflected form of `declension` for `word` and registers
    /// its rhyme membership.
    pub(crate) fn create_form(&mut self, word: WordId, declension: DeclensionId) -> Result<FormId> {
        let derived = self.derive_values(word, declension)?;
        let form = self
            .forms
            .insert(WordForm::new(word, declension, derived.form, derived.pronunciation));
        self.bind_rhyme(form, derived.rhyme_key)?;
        self.word_mut(word)?.forms.push_back(form);
        Ok(form)
    }

    /// Removes one inflected form: rhyme membership first, then the form
    /// itself, then the owning word's bookkeeping.
    pub(crate) fn remove_form(&mut self, id: FormId) -> Result<()> {
        self.release_rhyme(id)?;
        let form = self
            .forms
            .remove(id)
            .ok_or_else(|| Error::stale_handle("word form"))?;
        let word = self.word_mut(form.word)?;
        if let Some(index) = word.forms.index_of(&id) {
            word.forms.remove(index);
        }
        Ok(())
    }

    /// Rederives every non-overridden field of one form from its word's
    /// current base data and its declension's current pipelines.
    pub(crate) fn rederive_form(&mut self, id: FormId) -> Result<()> {
        let (word, declension, overrides, old_rhyme_key) = {
            let form = self.word_form(id)?;
            (
                form.word,
                form.declension,
                form.overrides,
                form.rhyme_key.clone(),
            )
        };
        let derived = self.derive_values(word, declension)?;

        {
            let form = self.form_mut(id)?;
            if !overrides.form {
                form.form = derived.form;
            }
            if !overrides.pronunciation {
                form.pronunciation = derived.pronunciation;
            }
        }

        if !overrides.rhyme_key && derived.rhyme_key != old_rhyme_key {
            self.release_rhyme(id)?;
            self.bind_rhyme(id, derived.rhyme_key)?;
        }
        Ok(())
    }

    /// Finds the form a declension produced for a word.
    pub(crate) fn form_of_declension(
        &self,
        word: WordId,
        declension: DeclensionId,
    ) -> Result<FormId> {
        let word = self.word(word)?;
        word.forms
            .iter()
            .copied()
            .find(|&id| {
                self.forms
                    .get(id)
                    .is_some_and(|f| f.declension == declension)
            })
            .ok_or_else(|| Error::internal("word has no form for declension"))
    }
}
