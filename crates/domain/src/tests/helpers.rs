// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ImagePath, Item, ItemName, Price, Quantity, Sku, Tag};
use std::collections::BTreeSet;

pub fn create_test_item(sku: &str, name: &str, quantity: u32) -> Item {
    Item::new(
        Sku::new(sku).unwrap(),
        ItemName::new(name).unwrap(),
        Price::from_cents(1_250),
        Quantity::new(quantity),
        ImagePath::default(),
        BTreeSet::from([Tag::new("hardware").unwrap()]),
    )
}
