// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Predicate-filtered views over insertion-ordered collections.

use serde::{Deserialize, Serialize};
use stockroom_domain::{Index, Item, Sku, Tag};

/// A test applied to each element of a backing collection.
pub trait Predicate<T> {
    /// Returns true if `value` belongs in the view.
    fn test(&self, value: &T) -> bool;
}

/// Item filters that can be carried inside a `Command`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemPredicate {
    /// Every item.
    #[default]
    All,
    /// Items whose name contains any of the keywords as a whole word,
    /// ignoring case.
    NameContains {
        /// The words to look for.
        keywords: Vec<String>,
    },
    /// Items carrying the tag.
    HasTag {
        /// The tag to look for.
        tag: Tag,
    },
    /// Items with fewer than `threshold` units in stock.
    QuantityBelow {
        /// Exclusive upper bound on quantity.
        threshold: u32,
    },
    /// The item with this SKU.
    Sku {
        /// The SKU to match.
        sku: Sku,
    },
}

impl Predicate<Item> for ItemPredicate {
    fn test(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::NameContains { keywords } => keywords
                .iter()
                .any(|keyword| item.name.contains_word(keyword)),
            Self::HasTag { tag } => item.tags.contains(tag),
            Self::QuantityBelow { threshold } => item.quantity.value() < *threshold,
            Self::Sku { sku } => &item.sku == sku,
        }
    }
}

/// The elements of a backing collection that satisfy a predicate, in the
/// backing collection's order.
///
/// The view stores positions rather than copies. It is recomputed eagerly
/// whenever the predicate is replaced, and must be refreshed by its owner
/// after every change to the backing collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView<P> {
    predicate: P,
    positions: Vec<usize>,
}

impl<P> FilteredView<P> {
    /// Creates a view of `backing` filtered by `predicate`.
    pub fn new<T>(predicate: P, backing: &[T]) -> Self
    where
        P: Predicate<T>,
    {
        let mut view: Self = Self {
            predicate,
            positions: Vec::new(),
        };
        view.refresh(backing);
        view
    }

    /// Replaces the predicate and recomputes the view.
    pub fn update_filter<T>(&mut self, predicate: P, backing: &[T])
    where
        P: Predicate<T>,
    {
        self.predicate = predicate;
        self.refresh(backing);
    }

    /// Recomputes the view with the current predicate.
    pub fn refresh<T>(&mut self, backing: &[T])
    where
        P: Predicate<T>,
    {
        self.positions = backing
            .iter()
            .enumerate()
            .filter(|(_, value)| self.predicate.test(value))
            .map(|(position, _)| position)
            .collect();
    }

    /// Returns the active predicate.
    pub const fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Maps a one-based view index to the backing element it shows.
    #[must_use]
    pub fn resolve<'a, T>(&self, index: Index, backing: &'a [T]) -> Option<&'a T> {
        self.positions
            .get(index.zero_based())
            .and_then(|&position| backing.get(position))
    }

    /// Iterates over the visible elements in backing order.
    pub fn iter<'a, T>(&'a self, backing: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        self.positions
            .iter()
            .filter_map(move |&position| backing.get(position))
    }

    /// Returns the number of visible elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if nothing is visible.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
