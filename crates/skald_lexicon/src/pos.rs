//! Parts of speech and the canonical declension-name list.
//!
//! A part of speech owns its word classes and the canonical list of
//! declension names that must exist, identically named, in every class
//! under it. Declension add/remove/rename therefore enters here and fans
//! out: part of speech, then every class, then every word in each class.

use im::Vector;
use skald_foundation::{Error, Id, NameScope, Result};

use crate::declension::DeclensionId;
use crate::lexicon::Lexicon;
use crate::word::WordId;
use crate::word_class::{ClassId, WordClass};

/// Handle to a [`PartOfSpeech`].
pub type PosId = Id<PartOfSpeech>;

/// A top-level grammatical category (noun, verb, ...).
///
/// Invariant: a part of speech always owns at least one word class. It is
/// created together with a default class of the same name, and removal of
/// the last remaining class is rejected.
#[derive(Clone, Debug)]
pub struct PartOfSpeech {
    pub(crate) name: String,
    pub(crate) classes: Vector<ClassId>,
    pub(crate) declension_names: Vector<String>,
    pub(crate) words: Vector<WordId>,
}

impl PartOfSpeech {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            classes: Vector::new(),
            declension_names: Vector::new(),
            words: Vector::new(),
        }
    }

    /// Returns the part of speech's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates over the owned word classes in creation order.
    pub fn classes(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.classes.iter().copied()
    }

    /// Returns the number of owned word classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Iterates over the canonical declension names in declaration order.
    pub fn declension_names(&self) -> impl Iterator<Item = &str> {
        self.declension_names.iter().map(String::as_str)
    }

    /// Iterates over the member words in registration order.
    pub fn words(&self) -> impl Iterator<Item = WordId> + '_ {
        self.words.iter().copied()
    }

    /// Returns the number of member words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl Lexicon {
    /// Creates a part of speech together with its default word class of the
    /// same name.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if a part of speech with this name exists.
    pub fn add_part_of_speech(&mut self, name: impl Into<String>) -> Result<PosId> {
        let name = name.into();
        if self.part_of_speech_by_name(&name).is_some() {
            return Err(Error::duplicate_name(NameScope::PartOfSpeech, name));
        }

        let pos = self.parts_of_speech.insert(PartOfSpeech::new(name.clone()));
        self.pos_order.push_back(pos);

        let class = self.classes.insert(WordClass::new(name, pos));
        self.pos_mut(pos)?.classes.push_back(class);
        Ok(pos)
    }

    /// Removes a part of speech, cascading through its words, declensions,
    /// and classes.
    ///
    /// # Errors
    ///
    /// Returns a stale handle error if the part of speech no longer exists.
    pub fn remove_part_of_speech(&mut self, id: PosId) -> Result<()> {
        let word_ids: Vec<WordId> = self.part_of_speech(id)?.words.iter().copied().collect();
        for word in word_ids {
            self.remove_word(word)?;
        }

        let class_ids: Vec<ClassId> = self.part_of_speech(id)?.classes.iter().copied().collect();
        for class in class_ids {
            self.drop_class(class)?;
        }

        self.parts_of_speech.remove(id);
        if let Some(index) = self.pos_order.index_of(&id) {
            self.pos_order.remove(index);
        }
        Ok(())
    }

    /// Renames a part of speech. No cascade beyond the name itself.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if another part of speech has the new name.
    pub fn rename_part_of_speech(&mut self, id: PosId, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();
        if let Some(existing) = self.part_of_speech_by_name(&new_name) {
            if existing != id {
                return Err(Error::duplicate_name(NameScope::PartOfSpeech, new_name));
            }
        }
        self.pos_mut(id)?.name = new_name;
        Ok(())
    }

    /// Adds a declension name to the canonical list and fans it out:
    /// every owned class gets a declension of that name with empty
    /// pipelines, and every word in those classes gets a newly derived
    /// inflected form.
    ///
    /// Uniqueness is validated here, before fan-out, so no class-level
    /// failure can leave the cascade half-applied.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if the name is already canonical.
    pub fn add_declension(&mut self, pos: PosId, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let part = self.part_of_speech(pos)?;
        if part.declension_names.iter().any(|n| n == &name) {
            return Err(Error::duplicate_name(NameScope::Declension, name));
        }
        let class_ids: Vec<ClassId> = part.classes.iter().copied().collect();

        self.pos_mut(pos)?.declension_names.push_back(name.clone());
        for class in class_ids {
            self.add_class_declension(class, name.clone())?;
        }
        Ok(())
    }

    /// Removes a declension name from the canonical list and fans the
    /// removal out: every class drops its same-named declension, and every
    /// word in those classes loses the corresponding inflected form
    /// (releasing its rhyme membership).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the name is not canonical.
    pub fn remove_declension(&mut self, pos: PosId, name: &str) -> Result<()> {
        let part = self.part_of_speech(pos)?;
        let Some(index) = part.declension_names.iter().position(|n| n == name) else {
            return Err(Error::not_found(NameScope::Declension, name));
        };
        let class_ids: Vec<ClassId> = part.classes.iter().copied().collect();

        self.pos_mut(pos)?.declension_names.remove(index);
        for class in class_ids {
            let declension = self
                .declension_by_name(class, name)
                .ok_or_else(|| Error::internal("canonical declension missing from class"))?;
            self.remove_class_declension(class, declension)?;
        }
        Ok(())
    }

    /// Renames a canonical declension across every owned class. Forms are
    /// keyed by handle, so no structural change occurs.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `old` is not canonical, or `DuplicateName` if
    /// `new` already is.
    pub fn rename_declension(
        &mut self,
        pos: PosId,
        old: &str,
        new: impl Into<String>,
    ) -> Result<()> {
        let new = new.into();
        let part = self.part_of_speech(pos)?;
        let Some(index) = part.declension_names.iter().position(|n| n == old) else {
            return Err(Error::not_found(NameScope::Declension, old));
        };
        if part.declension_names.iter().any(|n| n == &new) {
            return Err(Error::duplicate_name(NameScope::Declension, new));
        }
        let class_ids: Vec<ClassId> = part.classes.iter().copied().collect();

        self.pos_mut(pos)?.declension_names.set(index, new.clone());
        for class in class_ids {
            let declension = self
                .declension_by_name(class, old)
                .ok_or_else(|| Error::internal("canonical declension missing from class"))?;
            self.declension_mut(declension)?.name = new.clone();
        }
        Ok(())
    }

    /// Adds a declension to one class and derives the new form for each of
    /// the class's words.
    pub(crate) fn add_class_declension(
        &mut self,
        class: ClassId,
        name: String,
    ) -> Result<DeclensionId> {
        let word_ids: Vec<WordId> = self.word_class(class)?.words.iter().copied().collect();

        let declension = self
            .declensions
            .insert(crate::declension::Declension::new(name, class));
        self.class_mut(class)?.declensions.push_back(declension);

        for word in word_ids {
            self.create_form(word, declension)?;
        }
        Ok(declension)
    }

    /// Removes a declension from one class, deleting the matching form of
    /// every word in the class.
    pub(crate) fn remove_class_declension(
        &mut self,
        class: ClassId,
        declension: DeclensionId,
    ) -> Result<()> {
        let word_ids: Vec<WordId> = self.word_class(class)?.words.iter().copied().collect();
        for word in word_ids {
            let form = self.form_of_declension(word, declension)?;
            self.remove_form(form)?;
        }

        let class = self.class_mut(class)?;
        if let Some(index) = class.declensions.index_of(&declension) {
            class.declensions.remove(index);
        }
        self.declensions.remove(declension);
        Ok(())
    }
}
