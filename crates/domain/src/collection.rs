// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Insertion-ordered collections that reject duplicate entities.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;

/// An entity with a domain identity distinct from structural equality.
///
/// `PartialEq` answers "are these exactly the same value", while
/// `same_entity` answers "do these describe the same thing". Two items with
/// equal SKUs but different prices are the same entity and unequal values.
pub trait Entity: Clone + PartialEq {
    /// Human-readable kind used in error messages (e.g. "Item").
    const KIND: &'static str;

    /// Returns true if `other` has the same domain identity.
    fn same_entity(&self, other: &Self) -> bool;

    /// Returns a display form of this entity's identity.
    fn identity(&self) -> String;
}

/// An ordered list in which no two elements are the same entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UniqueList<T> {
    elements: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T: Entity> UniqueList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Builds a list from `elements`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateKey` on the first element that repeats
    /// an earlier element's identity.
    pub fn try_from_vec(elements: Vec<T>) -> Result<Self, DomainError> {
        let mut list: Self = Self::new();
        for element in elements {
            list.add(element)?;
        }
        Ok(list)
    }

    /// Returns true if an element with the same identity as `candidate` exists.
    #[must_use]
    pub fn contains(&self, candidate: &T) -> bool {
        self.elements.iter().any(|e| e.same_entity(candidate))
    }

    /// Appends `element` at the end.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateKey` if an element with the same
    /// identity is already present. The list is unchanged on error.
    pub fn add(&mut self, element: T) -> Result<(), DomainError> {
        if self.contains(&element) {
            return Err(DomainError::DuplicateKey {
                entity: T::KIND,
                key: element.identity(),
            });
        }
        self.elements.push(element);
        Ok(())
    }

    /// Removes the element structurally equal to `target`.
    ///
    /// Matching is by full value, not identity, so callers pass the exact
    /// current element, typically read from the list beforehand.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no element equals `target`.
    pub fn remove(&mut self, target: &T) -> Result<T, DomainError> {
        let position: usize = self.position(target).ok_or_else(|| DomainError::NotFound {
            entity: T::KIND,
            key: target.identity(),
        })?;
        Ok(self.elements.remove(position))
    }

    /// Replaces `target` with `replacement`, keeping its position.
    ///
    /// Replacing an element with something of the same identity is always
    /// allowed, including replacing it with an identical value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no element equals `target`, or
    /// `DomainError::DuplicateKey` if `replacement` has the identity of an
    /// element other than `target`. The list is unchanged on error.
    pub fn update(&mut self, target: &T, replacement: T) -> Result<(), DomainError> {
        let position: usize = self.position(target).ok_or_else(|| DomainError::NotFound {
            entity: T::KIND,
            key: target.identity(),
        })?;

        let collides: bool = self
            .elements
            .iter()
            .enumerate()
            .any(|(i, e)| i != position && e.same_entity(&replacement));
        if collides {
            return Err(DomainError::DuplicateKey {
                entity: T::KIND,
                key: replacement.identity(),
            });
        }

        self.elements[position] = replacement;
        Ok(())
    }

    /// Returns the position of the element structurally equal to `target`.
    #[must_use]
    pub fn position(&self, target: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == target)
    }

    /// Returns the first element matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.elements.iter().find(|e| predicate(e))
    }

    /// Returns the element at zero-based `offset`.
    #[must_use]
    pub fn get(&self, offset: usize) -> Option<&T> {
        self.elements.get(offset)
    }

    /// Stable sort by `compare`.
    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        self.elements.sort_by(compare);
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a slice, in insertion order.
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the list has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

// Deserialization goes through `try_from_vec`, so duplicate entries in stored
// data are rejected.
impl<'de, T: Entity + Deserialize<'de>> Deserialize<'de> for UniqueList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements: Vec<T> = Vec::deserialize(deserializer)?;
        Self::try_from_vec(elements).map_err(serde::de::Error::custom)
    }
}

impl<'a, T: Entity> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
