// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{
    MAX_NAME_LEN, MAX_SKU_LEN, parse_price_cents, validate_display_name, validate_identifier,
};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Stock keeping unit: the identity of an item.
///
/// SKUs are normalized to uppercase so that `ab-1` and `AB-1` name the same item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku {
    value: String,
}

impl Sku {
    /// Creates a new `Sku`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSku` if the value is empty, longer than
    /// 32 characters, or contains anything other than ASCII alphanumerics,
    /// `-` and `_`.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let value: String = value.trim().to_uppercase();
        validate_identifier(&value, MAX_SKU_LEN, &['-', '_']).map_err(DomainError::InvalidSku)?;
        Ok(Self { value })
    }

    /// Returns the SKU value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for Sku {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Sku> for String {
    fn from(sku: Sku) -> Self {
        sku.value
    }
}

impl std::fmt::Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// The display name of an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName {
    value: String,
}

impl ItemName {
    /// Creates a new `ItemName`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the name is blank or too long.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        Ok(Self {
            value: validate_display_name(value)?,
        })
    }

    /// Returns the name value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if any whitespace-separated word of the name equals
    /// `keyword`, ignoring case.
    #[must_use]
    pub fn contains_word(&self, keyword: &str) -> bool {
        self.value
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case(keyword))
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> Self {
        name.value
    }
}

impl std::fmt::Display for ItemName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A monetary amount stored as integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    cents: u64,
}

impl Price {
    /// Creates a price from a number of cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Parses a price written as `12`, `12.5` or `12.50`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the text is not a non-negative
    /// amount with at most two decimal places.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        Ok(Self {
            cents: parse_price_cents(text)?,
        })
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.cents
    }
}

impl TryFrom<String> for Price {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// A non-negative count of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity {
    value: u32,
}

impl Quantity {
    /// Creates a new `Quantity`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    /// Creates a quantity that must be strictly positive.
    ///
    /// Used for ordered and sold amounts, where zero is meaningless.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `value` is zero.
    pub fn positive(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidQuantity(String::from(
                "Quantity must be greater than 0",
            )));
        }
        Ok(Self { value })
    }

    /// Returns the quantity value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Subtracts `other`, returning `None` if the result would be negative.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.value.checked_sub(other.value) {
            Some(value) => Some(Self { value }),
            None => None,
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Reference to an item's picture, as understood by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImagePath {
    value: String,
}

impl ImagePath {
    /// Creates a new `ImagePath`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidImagePath` if the path is blank.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidImagePath(String::from(
                "Image path cannot be empty",
            )));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the path value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Default for ImagePath {
    fn default() -> Self {
        Self {
            value: String::from("images/default.png"),
        }
    }
}

impl TryFrom<String> for ImagePath {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ImagePath> for String {
    fn from(path: ImagePath) -> Self {
        path.value
    }
}

/// A free-form label attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    value: String,
}

impl Tag {
    /// Creates a new `Tag`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTag` if the tag is empty or not
    /// alphanumeric.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        validate_identifier(value, MAX_NAME_LEN, &[]).map_err(DomainError::InvalidTag)?;
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the tag value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for Tag {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.value
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.value)
    }
}

/// The name of the supplier a purchase order is placed with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Supplier {
    value: String,
}

impl Supplier {
    /// Creates a new `Supplier`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSupplier` if the name is blank or too long.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let value: String = validate_display_name(value)
            .map_err(|_| DomainError::InvalidSupplier(String::from("Supplier cannot be empty")))?;
        Ok(Self { value })
    }

    /// Returns the supplier name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for Supplier {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Supplier> for String {
    fn from(supplier: Supplier) -> Self {
        supplier.value
    }
}

impl std::fmt::Display for Supplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Caller-assigned identifier of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(u64);

impl SaleId {
    /// Creates a new `SaleId`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A one-based position in a displayed list.
///
/// Index 1 is the first element of whatever list the user is currently
/// looking at, which for items is the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Index(NonZeroUsize);

impl Index {
    /// Creates an index from a one-based position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIndex` if `position` is zero.
    pub fn from_one_based(position: usize) -> Result<Self, DomainError> {
        NonZeroUsize::new(position).map(Self).ok_or_else(|| {
            DomainError::InvalidIndex(String::from("Index must be a positive integer"))
        })
    }

    /// Returns the one-based position.
    #[must_use]
    pub const fn one_based(&self) -> usize {
        self.0.get()
    }

    /// Returns the zero-based offset.
    #[must_use]
    pub const fn zero_based(&self) -> usize {
        self.0.get() - 1
    }
}

impl TryFrom<usize> for Index {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::from_one_based(value)
    }
}

impl From<Index> for usize {
    fn from(index: Index) -> Self {
        index.one_based()
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
