//! Word classes: sub-groupings of a part of speech with their own rules.

use im::Vector;
use skald_foundation::{Error, Id, NameScope, Result};

use crate::declension::DeclensionId;
use crate::lexicon::Lexicon;
use crate::pos::PosId;
use crate::word::WordId;

/// Handle to a [`WordClass`].
pub type ClassId = Id<WordClass>;

/// A grammatical class within a part of speech (e.g. a gender class).
///
/// Each class carries one declension per canonical name of its part of
/// speech; the rule pipelines may differ per class.
#[derive(Clone, Debug)]
pub struct WordClass {
    pub(crate) name: String,
    pub(crate) part_of_speech: PosId,
    pub(crate) declensions: Vector<DeclensionId>,
    pub(crate) words: Vector<WordId>,
}

impl WordClass {
    pub(crate) fn new(name: String, part_of_speech: PosId) -> Self {
        Self {
            name,
            part_of_speech,
            declensions: Vector::new(),
            words: Vector::new(),
        }
    }

    /// Returns the class's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning part of speech.
    #[must_use]
    pub fn part_of_speech(&self) -> PosId {
        self.part_of_speech
    }

    /// Iterates over the class's declensions in canonical order.
    pub fn declensions(&self) -> impl Iterator<Item = DeclensionId> + '_ {
        self.declensions.iter().copied()
    }

    /// Returns the number of declensions.
    #[must_use]
    pub fn declension_count(&self) -> usize {
        self.declensions.len()
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
    /// Adds a word class to a part of speech, pre-populating one declension
    /// per canonical name (each with empty rule pipelines).
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if the part of speech already has a class
    /// with this name.
    pub fn add_class(&mut self, pos: PosId, name: impl Into<String>) -> Result<ClassId> {
        let name = name.into();
        if self.class_by_name(pos, &name).is_some() {
            return Err(Error::duplicate_name(NameScope::WordClass, name));
        }
        let canonical: Vec<String> = self
            .part_of_speech(pos)?
            .declension_names
            .iter()
            .cloned()
            .collect();

        let class = self.classes.insert(WordClass::new(name, pos));
        self.pos_mut(pos)?.classes.push_back(class);

        for declension_name in canonical {
            self.add_class_declension(class, declension_name)?;
        }
        Ok(class)
    }

    /// Removes a word class, cascading through its words and declensions.
    ///
    /// # Errors
    ///
    /// Returns `LastWordClass` if this is the part of speech's only class,
    /// or `NotFound` if the class does not belong to the part of speech.
    pub fn remove_class(&mut self, pos: PosId, class: ClassId) -> Result<()> {
        let class_data = self.word_class(class)?;
        if class_data.part_of_speech != pos {
            let name = class_data.name.clone();
            return Err(Error::not_found(NameScope::WordClass, name));
        }
        let part = self.part_of_speech(pos)?;
        if part.classes.len() == 1 {
            return Err(Error::last_word_class(part.name.clone()));
        }

        let word_ids: Vec<WordId> = self.word_class(class)?.words.iter().copied().collect();
        for word in word_ids {
            self.remove_word(word)?;
        }

        self.drop_class(class)?;
        Ok(())
    }

    /// Renames a word class.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if another class of the same part of speech
    /// has the new name.
    pub fn rename_class(
        &mut self,
        pos: PosId,
        class: ClassId,
        new_name: impl Into<String>,
    ) -> Result<()> {
        let new_name = new_name.into();
        if let Some(existing) = self.class_by_name(pos, &new_name) {
            if existing != class {
                return Err(Error::duplicate_name(NameScope::WordClass, new_name));
            }
        }
        self.class_mut(class)?.name = new_name;
        Ok(())
    }

    /// Drops a class whose words are already gone: removes its declensions,
    /// unlinks it from the part of speech, and frees it.
    pub(crate) fn drop_class(&mut self, class: ClassId) -> Result<()> {
        let class_data = self.word_class(class)?;
        debug_assert_eq!(class_data.word_count(), 0);
        let pos = class_data.part_of_speech;
        let declension_ids: Vec<DeclensionId> = class_data.declensions.iter().copied().collect();

        for declension in declension_ids {
            self.declensions.remove(declension);
        }

        if let Ok(part) = self.pos_mut(pos) {
            if let Some(index) = part.classes.index_of(&class) {
                part.classes.remove(index);
            }
        }
        self.classes.remove(class);
        Ok(())
    }
}
