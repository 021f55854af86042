// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collection::Entity;
use crate::error::DomainError;
use crate::types::{Quantity, SaleId, Sku, Supplier};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Processing status of a purchase order.
///
/// Any status may be set from any other; there is no enforced progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Awaiting a decision.
    #[default]
    Pending,
    /// Approved for ordering.
    Approved,
    /// Declined.
    Rejected,
    /// Goods received.
    Fulfilled,
}

impl OrderStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Fulfilled => "fulfilled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "fulfilled" => Ok(Self::Fulfilled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to restock an item from a supplier.
///
/// The referenced SKU is checked by whoever creates the order; the order
/// itself does not enforce that the item exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PurchaseOrderRecord")]
pub struct PurchaseOrder {
    /// The item being restocked.
    pub sku: Sku,
    /// Units requested. Always greater than zero.
    quantity: Quantity,
    /// Date by which the goods are needed.
    pub required_by: Date,
    /// The supplier the order is placed with.
    pub supplier: Supplier,
    /// Current processing status.
    pub status: OrderStatus,
}

impl PurchaseOrder {
    /// Creates a new pending purchase order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `quantity` is zero.
    pub fn new(
        sku: Sku,
        quantity: Quantity,
        required_by: Date,
        supplier: Supplier,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            sku,
            quantity: Quantity::positive(quantity.value())?,
            required_by,
            supplier,
            status: OrderStatus::Pending,
        })
    }

    /// Returns the requested quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns a copy of this order with `status` replaced.
    #[must_use]
    pub fn with_status(&self, status: OrderStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

impl Entity for PurchaseOrder {
    const KIND: &'static str = "Purchase order";

    fn same_entity(&self, other: &Self) -> bool {
        self.sku == other.sku
            && self.supplier == other.supplier
            && self.required_by == other.required_by
    }

    fn identity(&self) -> String {
        format!("{} from {} by {}", self.sku, self.supplier, self.required_by)
    }
}

impl std::fmt::Display for PurchaseOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x{} from {} (required by {}) [{}]",
            self.sku, self.quantity, self.supplier, self.required_by, self.status
        )
    }
}

/// Unchecked wire form of a purchase order.
#[derive(Deserialize)]
struct PurchaseOrderRecord {
    sku: Sku,
    quantity: Quantity,
    required_by: Date,
    supplier: Supplier,
    #[serde(default)]
    status: OrderStatus,
}

impl TryFrom<PurchaseOrderRecord> for PurchaseOrder {
    type Error = DomainError;

    fn try_from(record: PurchaseOrderRecord) -> Result<Self, Self::Error> {
        let order: Self = Self::new(
            record.sku,
            record.quantity,
            record.required_by,
            record.supplier,
        )?;
        Ok(order.with_status(record.status))
    }
}

/// A completed sale of some units of an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SaleRecord")]
pub struct Sale {
    /// Caller-assigned identity.
    pub id: SaleId,
    /// The item sold.
    pub sku: Sku,
    /// Units sold. Always greater than zero.
    quantity: Quantity,
    /// Date of the sale.
    pub date: Date,
}

impl Sale {
    /// Creates a new `Sale`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `quantity` is zero.
    pub fn new(id: SaleId, sku: Sku, quantity: Quantity, date: Date) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            sku,
            quantity: Quantity::positive(quantity.value())?,
            date,
        })
    }

    /// Returns the number of units sold.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }
}

impl Entity for Sale {
    const KIND: &'static str = "Sale";

    fn same_entity(&self, other: &Self) -> bool {
        self.id == other.id
    }

    fn identity(&self) -> String {
        self.id.to_string()
    }
}

impl std::fmt::Display for Sale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sale {}: {} x{} on {}",
            self.id, self.sku, self.quantity, self.date
        )
    }
}

/// Unchecked wire form of a sale.
#[derive(Deserialize)]
struct SaleRecord {
    id: SaleId,
    sku: Sku,
    quantity: Quantity,
    date: Date,
}

impl TryFrom<SaleRecord> for Sale {
    type Error = DomainError;

    fn try_from(record: SaleRecord) -> Result<Self, Self::Error> {
        Self::new(record.id, record.sku, record.quantity, record.date)
    }
}
