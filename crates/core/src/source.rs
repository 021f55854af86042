// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seams to the outside world: where initial data comes from and who is
//! told about changes.

use crate::state::Inventory;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use stockroom_domain::{Item, Sale, Staff, UniqueList};
use thiserror::Error;

/// Errors raised while loading data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The backing data does not exist yet.
    #[error("Data not found: {0}")]
    NotFound(String),
    /// The data exists but does not describe a valid model.
    #[error("Data conversion failed: {0}")]
    Conversion(String),
    /// The data could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(err.to_string())
        } else {
            Self::Io(err.to_string())
        }
    }
}

/// Supplies the initial model contents.
pub trait DataSource {
    /// Loads items and purchase orders.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::NotFound` if there is nothing to load yet.
    fn load_inventory(&self) -> Result<Inventory, SourceError>;

    /// Loads staff accounts.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::NotFound` if there is nothing to load yet.
    fn load_staff(&self) -> Result<Vec<Staff>, SourceError>;

    /// Loads recorded sales. Every sale must reference one of `items`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Conversion` if a sale references a missing
    /// SKU.
    fn load_sales(&self, items: &UniqueList<Item>) -> Result<Vec<Sale>, SourceError>;
}

/// Fails if any sale refers to an item that is not in `items`.
///
/// # Errors
///
/// Returns `SourceError::Conversion` naming the first orphaned sale.
pub fn check_sale_references(sales: &[Sale], items: &UniqueList<Item>) -> Result<(), SourceError> {
    match sales
        .iter()
        .find(|sale| items.find(|item| item.sku == sale.sku).is_none())
    {
        Some(orphan) => Err(SourceError::Conversion(format!(
            "sale {} references unknown SKU '{}'",
            orphan.id, orphan.sku
        ))),
        None => Ok(()),
    }
}

/// What caused the inventory to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// A command committed a new snapshot.
    Commit,
    /// The history moved back.
    Undo,
    /// The history moved forward.
    Redo,
}

impl std::fmt::Display for ChangeCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cause: &str = match self {
            Self::Commit => "commit",
            Self::Undo => "undo",
            Self::Redo => "redo",
        };
        f.write_str(cause)
    }
}

/// A change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    /// The inventory now equals `inventory`.
    InventoryChanged {
        /// The new current snapshot.
        inventory: Arc<Inventory>,
        /// How it became current.
        cause: ChangeCause,
    },
    /// The staff list now equals `staff`.
    StaffChanged {
        /// Every staff account, in insertion order.
        staff: Vec<Staff>,
    },
}

/// Receives change notifications.
///
/// Called synchronously after the change is complete. Implementations
/// must not block and cannot fail the command that caused the change.
pub trait ChangeListener: Send {
    /// Handles one event.
    fn on_change(&self, event: &ModelEvent);
}

impl ChangeListener for Sender<ModelEvent> {
    fn on_change(&self, event: &ModelEvent) {
        // A dropped receiver is not the model's concern.
        let _ = self.send(event.clone());
    }
}
