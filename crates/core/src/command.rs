// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::view::ItemPredicate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use stockroom_domain::{
    Index, Item, ItemChanges, OrderStatus, Password, PurchaseOrder, Quantity, SaleId, Sku, Staff,
    Username,
};
use time::Date;

/// A command represents user intent as data only.
///
/// Commands arrive fully constructed and field-validated; executing one
/// is the only way to change a `Model`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Add a new item.
    AddItem {
        /// The item to add.
        item: Item,
    },
    /// Edit the item at `index` in the current item view.
    EditItem {
        /// One-based position in the current item view.
        index: Index,
        /// Fields to replace.
        #[serde(default)]
        changes: ItemChanges,
    },
    /// Delete the item at `index` in the current item view.
    DeleteItem {
        /// One-based position in the current item view.
        index: Index,
    },
    /// Show items whose names contain any of the keywords.
    FindItem {
        /// Whole words to search for, case insensitive.
        keywords: Vec<String>,
    },
    /// Show items matching a predicate.
    FilterItem {
        /// The filter to apply.
        predicate: ItemPredicate,
    },
    /// Show every item.
    ListItems,
    /// Reorder the items.
    SortItems {
        /// The field to sort by.
        key: SortKey,
    },
    /// Select the item at `index` in the current item view.
    SelectItem {
        /// One-based position in the current item view.
        index: Index,
    },
    /// Remove every item, purchase order and sale.
    ClearInventory,
    /// Raise a purchase order for an existing item.
    AddPurchaseOrder {
        /// The order to add.
        order: PurchaseOrder,
    },
    /// Change the status of the purchase order at `index`.
    SetOrderStatus {
        /// One-based position in the purchase order list.
        index: Index,
        /// The new status.
        status: OrderStatus,
    },
    /// Delete the purchase order at `index`.
    DeletePurchaseOrder {
        /// One-based position in the purchase order list.
        index: Index,
    },
    /// Record a sale and take the units out of stock.
    CreateSale {
        /// Caller-assigned sale identifier.
        id: SaleId,
        /// The item sold.
        sku: Sku,
        /// Units sold.
        quantity: Quantity,
        /// Date of the sale.
        date: Date,
    },
    /// Show every recorded sale.
    ListSales,
    /// Start a session.
    Login {
        /// The account to log in as.
        username: Username,
        /// The account's password.
        password: Password,
    },
    /// End the current session.
    Logout,
    /// Create a staff account.
    AddStaff {
        /// The new account.
        staff: Staff,
    },
    /// Delete a staff account.
    DeleteStaff {
        /// The account to delete.
        username: Username,
    },
    /// Show every staff account.
    ListStaff,
    /// Return the inventory to the previous committed state.
    Undo,
    /// Reapply the most recently undone state.
    Redo,
}

impl Command {
    /// Returns the kind of this command, used for permission lookups.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::AddItem { .. } => CommandKind::AddItem,
            Self::EditItem { .. } => CommandKind::EditItem,
            Self::DeleteItem { .. } => CommandKind::DeleteItem,
            Self::FindItem { .. } => CommandKind::FindItem,
            Self::FilterItem { .. } => CommandKind::FilterItem,
            Self::ListItems => CommandKind::ListItems,
            Self::SortItems { .. } => CommandKind::SortItems,
            Self::SelectItem { .. } => CommandKind::SelectItem,
            Self::ClearInventory => CommandKind::ClearInventory,
            Self::AddPurchaseOrder { .. } => CommandKind::AddPurchaseOrder,
            Self::SetOrderStatus { .. } => CommandKind::SetOrderStatus,
            Self::DeletePurchaseOrder { .. } => CommandKind::DeletePurchaseOrder,
            Self::CreateSale { .. } => CommandKind::CreateSale,
            Self::ListSales => CommandKind::ListSales,
            Self::Login { .. } => CommandKind::Login,
            Self::Logout => CommandKind::Logout,
            Self::AddStaff { .. } => CommandKind::AddStaff,
            Self::DeleteStaff { .. } => CommandKind::DeleteStaff,
            Self::ListStaff => CommandKind::ListStaff,
            Self::Undo => CommandKind::Undo,
            Self::Redo => CommandKind::Redo,
        }
    }
}

/// The kind of a `Command`, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    /// See `Command::AddItem`.
    AddItem,
    /// See `Command::EditItem`.
    EditItem,
    /// See `Command::DeleteItem`.
    DeleteItem,
    /// See `Command::FindItem`.
    FindItem,
    /// See `Command::FilterItem`.
    FilterItem,
    /// See `Command::ListItems`.
    ListItems,
    /// See `Command::SortItems`.
    SortItems,
    /// See `Command::SelectItem`.
    SelectItem,
    /// See `Command::ClearInventory`.
    ClearInventory,
    /// See `Command::AddPurchaseOrder`.
    AddPurchaseOrder,
    /// See `Command::SetOrderStatus`.
    SetOrderStatus,
    /// See `Command::DeletePurchaseOrder`.
    DeletePurchaseOrder,
    /// See `Command::CreateSale`.
    CreateSale,
    /// See `Command::ListSales`.
    ListSales,
    /// See `Command::Login`.
    Login,
    /// See `Command::Logout`.
    Logout,
    /// See `Command::AddStaff`.
    AddStaff,
    /// See `Command::DeleteStaff`.
    DeleteStaff,
    /// See `Command::ListStaff`.
    ListStaff,
    /// See `Command::Undo`.
    Undo,
    /// See `Command::Redo`.
    Redo,
}

impl CommandKind {
    /// Returns the action name recorded in audit events.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AddItem => "AddItem",
            Self::EditItem => "EditItem",
            Self::DeleteItem => "DeleteItem",
            Self::FindItem => "FindItem",
            Self::FilterItem => "FilterItem",
            Self::ListItems => "ListItems",
            Self::SortItems => "SortItems",
            Self::SelectItem => "SelectItem",
            Self::ClearInventory => "ClearInventory",
            Self::AddPurchaseOrder => "AddPurchaseOrder",
            Self::SetOrderStatus => "SetOrderStatus",
            Self::DeletePurchaseOrder => "DeletePurchaseOrder",
            Self::CreateSale => "CreateSale",
            Self::ListSales => "ListSales",
            Self::Login => "Login",
            Self::Logout => "Logout",
            Self::AddStaff => "AddStaff",
            Self::DeleteStaff => "DeleteStaff",
            Self::ListStaff => "ListStaff",
            Self::Undo => "Undo",
            Self::Redo => "Redo",
        }
    }

    /// Returns true for commands that only read the model.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        matches!(
            self,
            Self::FindItem
                | Self::FilterItem
                | Self::ListItems
                | Self::SelectItem
                | Self::ListSales
                | Self::ListStaff
        )
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field to order items by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Alphabetical by name.
    Name,
    /// Cheapest first.
    Price,
    /// Lowest stock first.
    Quantity,
    /// Alphabetical by SKU.
    Sku,
}

impl SortKey {
    /// Compares two items by this key.
    #[must_use]
    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            Self::Name => a.name.value().to_lowercase().cmp(&b.name.value().to_lowercase()),
            Self::Price => a.price.cmp(&b.price),
            Self::Quantity => a.quantity.cmp(&b.quantity),
            Self::Sku => a.sku.cmp(&b.sku),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &str = match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Quantity => "quantity",
            Self::Sku => "sku",
        };
        f.write_str(name)
    }
}

/// The outcome of a successful command, shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Feedback message.
    pub feedback: String,
}

impl CommandResult {
    /// Creates a new `CommandResult`.
    #[must_use]
    pub const fn new(feedback: String) -> Self {
        Self { feedback }
    }
}

impl std::fmt::Display for CommandResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.feedback)
    }
}
