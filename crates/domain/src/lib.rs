// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod collection;
mod error;
mod item;
mod order;
mod staff;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use collection::{Entity, UniqueList};
pub use error::DomainError;
pub use item::{Item, ItemChanges};
pub use order::{OrderStatus, PurchaseOrder, Sale};
pub use staff::{Password, Role, Staff, StaffName, Username};
pub use types::{ImagePath, Index, ItemName, Price, Quantity, SaleId, Sku, Supplier, Tag};
pub use validation::{parse_price_cents, validate_display_name, validate_identifier};
