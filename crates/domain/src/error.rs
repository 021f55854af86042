// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation and collection updates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// SKU is empty or contains characters outside the allowed set.
    #[error("Invalid SKU: {0}")]
    InvalidSku(String),
    /// A display name (item or staff) is empty or too long.
    #[error("Invalid name: {0}")]
    InvalidName(String),
    /// Price text could not be read as a non-negative amount.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
    /// Quantity is out of range for its use.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
    /// Tag is empty or not alphanumeric.
    #[error("Invalid tag: {0}")]
    InvalidTag(String),
    /// Image path is empty.
    #[error("Invalid image path: {0}")]
    InvalidImagePath(String),
    /// Supplier name is empty or too long.
    #[error("Invalid supplier: {0}")]
    InvalidSupplier(String),
    /// Username is empty or contains characters outside the allowed set.
    #[error("Invalid username: {0}")]
    InvalidUsername(String),
    /// Password does not meet the minimum requirements.
    #[error("Invalid password: {0}")]
    InvalidPassword(String),
    /// Order status name is not recognized.
    #[error("Invalid order status: {0}")]
    InvalidStatus(String),
    /// Role name is not recognized.
    #[error("Invalid role: {0}")]
    InvalidRole(String),
    /// A one-based index was zero.
    #[error("Invalid index: {0}")]
    InvalidIndex(String),
    /// An entity with the same identity already exists in the collection.
    #[error("{entity} '{key}' already exists")]
    DuplicateKey {
        /// The kind of entity (e.g. "Item").
        entity: &'static str,
        /// The identity of the duplicate.
        key: String,
    },
    /// No element in the collection is structurally equal to the target.
    #[error("{entity} '{key}' not found")]
    NotFound {
        /// The kind of entity (e.g. "Item").
        entity: &'static str,
        /// The identity of the missing element.
        key: String,
    },
}
