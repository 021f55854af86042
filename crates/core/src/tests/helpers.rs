// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Inventory, Model, Permissions, execute};
use std::collections::BTreeSet;
use stockroom_domain::{
    ImagePath, Index, Item, ItemName, Password, Price, Quantity, Role, Sku, Staff, StaffName, Tag,
    UniqueList, Username,
};

pub const TEST_PASSWORD: &str = "hunter2";

pub fn sku(value: &str) -> Sku {
    Sku::new(value).unwrap()
}

pub fn index(position: usize) -> Index {
    Index::from_one_based(position).unwrap()
}

pub fn create_test_item(sku_value: &str, name: &str, quantity: u32) -> Item {
    Item::new(
        sku(sku_value),
        ItemName::new(name).unwrap(),
        Price::from_cents(1_250),
        Quantity::new(quantity),
        ImagePath::default(),
        BTreeSet::from([Tag::new("hardware").unwrap()]),
    )
}

pub fn create_test_staff(username: &str, role: Role) -> Staff {
    Staff::new(
        Username::new(username).unwrap(),
        Password::new(TEST_PASSWORD).unwrap(),
        StaffName::new(username).unwrap(),
        role,
    )
}

pub fn create_test_inventory(items: &[Item]) -> Inventory {
    let mut inventory: Inventory = Inventory::new();
    for item in items {
        inventory.items.add(item.clone()).unwrap();
    }
    inventory
}

/// A model with an admin `root` and a user `clerk`, nobody logged in.
pub fn create_test_model(items: &[Item]) -> Model {
    let staff: UniqueList<Staff> = UniqueList::try_from_vec(vec![
        create_test_staff("root", Role::Admin),
        create_test_staff("clerk", Role::User),
    ])
    .unwrap();
    Model::new(create_test_inventory(items), staff, Permissions::default())
}

pub fn login_command(username: &str) -> Command {
    Command::Login {
        username: Username::new(username).unwrap(),
        password: Password::new(TEST_PASSWORD).unwrap(),
    }
}

/// A model with `clerk` logged in.
pub fn create_logged_in_model(items: &[Item]) -> Model {
    let mut model: Model = create_test_model(items);
    execute(&mut model, login_command("clerk")).unwrap();
    model
}

pub fn visible_skus(model: &Model) -> Vec<String> {
    model
        .visible_items()
        .map(|item| item.sku.value().to_string())
        .collect()
}

pub fn skus(inventory: &Inventory) -> Vec<String> {
    inventory
        .items
        .iter()
        .map(|item| item.sku.value().to_string())
        .collect()
}
