// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON seed files as a data source.
//!
//! A seed is a single JSON object; every top-level key is optional:
//!
//! ```json
//! {
//!   "items": [{"sku": "W-1", "name": "Widget", "price": "12.50", "quantity": 10}],
//!   "orders": [{"sku": "W-1", "quantity": 5, "required_by": "2026-03-01", "supplier": "Acme"}],
//!   "sales": [{"id": 1, "sku": "W-1", "quantity": 2, "date": "2026-02-14"}],
//!   "staff": [{"username": "root", "password": "secret", "name": "Root", "role": "admin"}]
//! }
//! ```

use serde::Deserialize;
use std::path::Path;
use stockroom::{DataSource, Inventory, SourceError, check_sale_references};
use stockroom_domain::{Item, PurchaseOrder, Sale, Staff, UniqueList};
use tracing::info;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SeedDocument {
    items: Vec<Item>,
    orders: Vec<PurchaseOrder>,
    sales: Vec<Sale>,
    staff: Vec<Staff>,
}

/// A parsed seed file, or the absence of one.
#[derive(Debug, Clone, Default)]
pub struct JsonSeed {
    document: Option<SeedDocument>,
}

impl JsonSeed {
    /// Reads a seed file. A missing file yields a seed that reports
    /// `SourceError::NotFound` for everything.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the file exists but cannot be read, or
    /// `SourceError::Conversion` if it is not a valid seed.
    pub fn read(path: &Path) -> Result<Self, SourceError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                info!(path = %path.display(), "Reading seed file");
                Self::parse(&text)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::missing()),
            Err(err) => Err(err.into()),
        }
    }

    /// Parses seed JSON.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Conversion` if the text is not a valid seed.
    pub fn parse(text: &str) -> Result<Self, SourceError> {
        let document: SeedDocument = serde_json::from_str(text)
            .map_err(|err| SourceError::Conversion(err.to_string()))?;
        Ok(Self {
            document: Some(document),
        })
    }

    /// A seed with no data behind it.
    #[must_use]
    pub const fn missing() -> Self {
        Self { document: None }
    }

    fn document(&self) -> Result<&SeedDocument, SourceError> {
        self.document
            .as_ref()
            .ok_or_else(|| SourceError::NotFound(String::from("seed file")))
    }
}

impl DataSource for JsonSeed {
    fn load_inventory(&self) -> Result<Inventory, SourceError> {
        let document: &SeedDocument = self.document()?;
        let items: UniqueList<Item> = UniqueList::try_from_vec(document.items.clone())
            .map_err(|err| SourceError::Conversion(err.to_string()))?;

        if let Some(orphan) = document
            .orders
            .iter()
            .find(|order| items.find(|item| item.sku == order.sku).is_none())
        {
            return Err(SourceError::Conversion(format!(
                "purchase order references unknown SKU '{}'",
                orphan.sku
            )));
        }
        let orders: UniqueList<PurchaseOrder> = UniqueList::try_from_vec(document.orders.clone())
            .map_err(|err| SourceError::Conversion(err.to_string()))?;

        Ok(Inventory {
            items,
            orders,
            sales: UniqueList::new(),
        })
    }

    fn load_staff(&self) -> Result<Vec<Staff>, SourceError> {
        Ok(self.document()?.staff.clone())
    }

    fn load_sales(&self, items: &UniqueList<Item>) -> Result<Vec<Sale>, SourceError> {
        let sales: &[Sale] = &self.document()?.sales;
        check_sale_references(sales, items)?;
        Ok(sales.to_vec())
    }
}
