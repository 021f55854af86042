// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collection::Entity;
use crate::types::{ImagePath, ItemName, Price, Quantity, Sku, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A stocked item.
///
/// The SKU is the item's identity; every other field may change over time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// The item's identity.
    pub sku: Sku,
    /// The item's display name.
    pub name: ItemName,
    /// Unit price.
    pub price: Price,
    /// Units currently in stock.
    pub quantity: Quantity,
    /// Picture shown by the presentation layer.
    #[serde(default)]
    pub image: ImagePath,
    /// Free-form labels.
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Item {
    /// Creates a new `Item`.
    ///
    /// All fields are already-validated value types, so construction cannot
    /// fail.
    #[must_use]
    pub const fn new(
        sku: Sku,
        name: ItemName,
        price: Price,
        quantity: Quantity,
        image: ImagePath,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            sku,
            name,
            price,
            quantity,
            image,
            tags,
        }
    }

    /// Returns a copy of this item with `quantity` replaced.
    #[must_use]
    pub fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

impl Entity for Item {
    const KIND: &'static str = "Item";

    fn same_entity(&self, other: &Self) -> bool {
        self.sku == other.sku
    }

    fn identity(&self) -> String {
        self.sku.to_string()
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) Price: {} Quantity: {}",
            self.name, self.sku, self.price, self.quantity
        )?;
        if !self.tags.is_empty() {
            write!(f, " Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }
        Ok(())
    }
}

/// A partial set of replacement fields for an item.
///
/// Fields left as `None` keep the item's current value. A set of changes
/// with every field `None`, or with values equal to the current ones,
/// produces an item identical to the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemChanges {
    /// Replacement SKU. Re-keys the item only; purchase orders and sales
    /// that name the old SKU are left as they are.
    pub sku: Option<Sku>,
    /// Replacement name.
    pub name: Option<ItemName>,
    /// Replacement price.
    pub price: Option<Price>,
    /// Replacement quantity.
    pub quantity: Option<Quantity>,
    /// Replacement image.
    pub image: Option<ImagePath>,
    /// Replacement tag set (replaces the whole set).
    pub tags: Option<BTreeSet<Tag>>,
}

impl ItemChanges {
    /// Returns true if at least one field would be replaced.
    #[must_use]
    pub const fn is_any_field_edited(&self) -> bool {
        self.sku.is_some()
            || self.name.is_some()
            || self.price.is_some()
            || self.quantity.is_some()
            || self.image.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited item from `original`.
    #[must_use]
    pub fn apply_to(&self, original: &Item) -> Item {
        Item {
            sku: self.sku.clone().unwrap_or_else(|| original.sku.clone()),
            name: self.name.clone().unwrap_or_else(|| original.name.clone()),
            price: self.price.unwrap_or(original.price),
            quantity: self.quantity.unwrap_or(original.quantity),
            image: self.image.clone().unwrap_or_else(|| original.image.clone()),
            tags: self.tags.clone().unwrap_or_else(|| original.tags.clone()),
        }
    }
}
