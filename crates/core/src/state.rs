// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use stockroom_audit::StateSnapshot;
use stockroom_domain::{Item, PurchaseOrder, Sale, Sku, UniqueList};

/// The versioned aggregate: items together with everything that refers to
/// them by SKU.
///
/// Purchase orders and sales reference items, so all three are versioned
/// as one unit. Undoing a change therefore never leaves an order or sale
/// pointing at an item that did not exist at that point in history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Stocked items, in insertion order.
    #[serde(default)]
    pub items: UniqueList<Item>,
    /// Purchase orders, in insertion order.
    #[serde(default)]
    pub orders: UniqueList<PurchaseOrder>,
    /// Recorded sales, in insertion order.
    #[serde(default)]
    pub sales: UniqueList<Sale>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: UniqueList::new(),
            orders: UniqueList::new(),
            sales: UniqueList::new(),
        }
    }

    /// Returns the item with the given SKU.
    #[must_use]
    pub fn item_by_sku(&self, sku: &Sku) -> Option<&Item> {
        self.items.find(|item| &item.sku == sku)
    }

    /// Returns a one-line description of the inventory's size.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "items={},orders={},sales={}",
            self.items.len(),
            self.orders.len(),
            self.sales.len()
        )
    }

    /// Converts the inventory to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(self.summary())
    }
}
