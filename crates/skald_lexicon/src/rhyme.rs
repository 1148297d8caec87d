//! Rhyme groups: value-derived equivalence classes of inflected forms.
//!
//! Rhyme identity is established purely by equality of the derived rhyme
//! key. Two unrelated words whose declensions happen to transform their
//! rhyme keys to the same string share one group. Groups are created on
//! first use and destroyed the instant their last member leaves; only the
//! [`Lexicon`] creates or destroys them.

use im::Vector;
use skald_foundation::{Error, Id, Result};

use crate::lexicon::Lexicon;
use crate::word_form::FormId;

/// Handle to a [`RhymeGroup`].
pub type RhymeId = Id<RhymeGroup>;

/// An equivalence class of inflected forms sharing a derived rhyme key.
///
/// Invariant: a rhyme group with zero members does not exist.
#[derive(Clone, Debug)]
pub struct RhymeGroup {
    pub(crate) id: String,
    pub(crate) members: Vector<FormId>,
}

impl RhymeGroup {
    /// Returns the group's id: the shared derived rhyme key.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Iterates over the member forms in assignment order.
    pub fn members(&self) -> impl Iterator<Item = FormId> + '_ {
        self.members.iter().copied()
    }

    /// Returns the number of member forms.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

impl Lexicon {
    /// Binds a form to the rhyme group for `key`, creating the group on
    /// first use, and records the key on the form.
    pub(crate) fn bind_rhyme(&mut self, form: FormId, key: String) -> Result<()> {
        let group = if let Some(&group) = self.rhyme_index.get(&key) {
            self.rhyme_mut(group)?.members.push_back(form);
            group
        } else {
            let group = self.rhyme_groups.insert(RhymeGroup {
                id: key.clone(),
                members: Vector::unit(form),
            });
            self.rhyme_index.insert(key.clone(), group);
            group
        };

        let form = self.form_mut(form)?;
        form.rhyme_key = key;
        form.rhyme_group = group;
        Ok(())
    }

    /// Removes a form from its rhyme group, destroying and deregistering
    /// the group if that was the last member.
    pub(crate) fn release_rhyme(&mut self, form: FormId) -> Result<()> {
        let group = self.word_form(form)?.rhyme_group;
        if group.is_null() {
            return Ok(());
        }

        let emptied = {
            let group = self.rhyme_mut(group)?;
            if let Some(index) = group.members.index_of(&form) {
                group.members.remove(index);
            }
            group.members.is_empty()
        };
        if emptied {
            let removed = self
                .rhyme_groups
                .remove(group)
                .ok_or_else(|| Error::stale_handle("rhyme group"))?;
            self.rhyme_index.remove(&removed.id);
        }

        self.form_mut(form)?.rhyme_group = RhymeId::null();
        Ok(())
    }
}
