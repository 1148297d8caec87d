//! Typed handles and generational arena storage.
//!
//! Every entity in the lexicon graph lives in an [`Arena`] and is referred
//! to by a typed [`Id`]. Back-references between entities are plain ids
//! resolved through the owning store, never ownership links, so the cyclic
//! navigation of the object graph carries no lifetime entanglement.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Typed handle into an [`Arena`] with a generational index.
///
/// The generation counter increments when a slot is reused after removal,
/// allowing detection of stale references to removed entities. The type
/// parameter keeps handles for different entity kinds from being mixed up;
/// it carries no data.
pub struct Id<T> {
    /// Index into arena storage.
    index: u32,
    /// Generation counter for stale reference detection.
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Creates a handle from raw parts.
    #[must_use]
    pub const fn from_parts(index: u32, generation: u32) -> Self {
        Self {
            index,
            generation,
            _marker: PhantomData,
        }
    }

    /// Returns a sentinel value representing "no entity".
    ///
    /// This uses `u32::MAX` as the index, which is never allocated.
    #[must_use]
    pub const fn null() -> Self {
        Self::from_parts(u32::MAX, 0)
    }

    /// Returns true if this is the null sentinel value.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.index == u32::MAX
    }

    /// Returns the slot index of this handle.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Returns the generation of this handle.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

// Manual impls: the derives would bound on `T`, which is only a tag.

impl<T> Copy for Id<T> {}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Id(null)")
        } else {
            write!(f, "Id({}v{})", self.index, self.generation)
        }
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "#null")
        } else {
            write!(f, "#{}", self.index)
        }
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::Id;
    use serde::de::Deserializer;
    use serde::ser::{SerializeStruct, Serializer};
    use serde::{Deserialize, Serialize};

    impl<T> Serialize for Id<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("Id", 2)?;
            state.serialize_field("index", &self.index())?;
            state.serialize_field("generation", &self.generation())?;
            state.end()
        }
    }

    impl<'de, T> Deserialize<'de> for Id<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            #[derive(Deserialize)]
            struct Raw {
                index: u32,
                generation: u32,
            }
            let raw = Raw::deserialize(deserializer)?;
            Ok(Id::from_parts(raw.index, raw.generation))
        }
    }
}

/// A storage slot: the current generation plus the value, if live.
///
/// Even generations are free, odd generations are alive.
#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Generational arena storage for one entity kind.
///
/// Slots are reused from a free list when available; reuse increments the
/// slot's generation so handles to the removed value become stale rather
/// than silently resolving to the new occupant.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
    live_count: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live_count: 0,
        }
    }

    /// Inserts a value, returning its handle.
    ///
    /// Reuses slots from the free list when available.
    ///
    /// # Panics
    ///
    /// Panics if the arena exceeds `u32::MAX - 1` slots.
    pub fn insert(&mut self, value: T) -> Id<T> {
        self.live_count += 1;

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            // Increment generation (was even/free, now odd/alive)
            slot.generation += 1;
            slot.value = Some(value);
            Id::from_parts(index, slot.generation)
        } else {
            let index = u32::try_from(self.slots.len()).expect("arena overflow");
            assert!(index < u32::MAX, "arena overflow");
            // New slots start at generation 1 (odd = alive)
            self.slots.push(Slot {
                generation: 1,
                value: Some(value),
            });
            Id::from_parts(index, 1)
        }
    }

    /// Gets a reference to the value for a handle.
    ///
    /// Returns `None` for stale or never-allocated handles.
    #[must_use]
    pub fn get(&self, id: Id<T>) -> Option<&T> {
        let slot = self.slots.get(id.index() as usize)?;
        if slot.generation == id.generation() {
            slot.value.as_ref()
        } else {
            None
        }
    }

    /// Gets a mutable reference to the value for a handle.
    #[must_use]
    pub fn get_mut(&mut self, id: Id<T>) -> Option<&mut T> {
        let slot = self.slots.get_mut(id.index() as usize)?;
        if slot.generation == id.generation() {
            slot.value.as_mut()
        } else {
            None
        }
    }

    /// Removes a value, returning it.
    ///
    /// Returns `None` if the handle is stale or was never allocated.
    pub fn remove(&mut self, id: Id<T>) -> Option<T> {
        let slot = self.slots.get_mut(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        let value = slot.value.take()?;
        // Increment generation (was odd/alive, now even/free)
        slot.generation += 1;
        self.free_list.push(id.index());
        self.live_count -= 1;
        Some(value)
    }

    /// Returns true if the handle resolves to a live value.
    #[must_use]
    pub fn contains(&self, id: Id<T>) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of live values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// Returns true if there are no live values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Iterates over all live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Id<T>, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let value = slot.value.as_ref()?;
            #[allow(clippy::cast_possible_truncation)]
            let id = Id::from_parts(index as u32, slot.generation);
            Some((id, value))
        })
    }
}
