// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_logged_in_model, create_test_item, index, sku};
use crate::{Command, CommandResult, CoreError, Model, execute};
use stockroom_domain::{
    DomainError, ItemChanges, OrderStatus, PurchaseOrder, Quantity, SaleId, Supplier,
};
use time::macros::date;

fn create_test_order(sku_value: &str, supplier: &str) -> PurchaseOrder {
    PurchaseOrder::new(
        sku(sku_value),
        Quantity::new(20),
        date!(2026 - 03 - 01),
        Supplier::new(supplier).unwrap(),
    )
    .unwrap()
}

fn sale_command(id: u64, sku_value: &str, quantity: u32) -> Command {
    Command::CreateSale {
        id: SaleId::new(id),
        sku: sku(sku_value),
        quantity: Quantity::new(quantity),
        date: date!(2026 - 02 - 14),
    }
}

#[test]
fn test_add_purchase_order_for_missing_item_fails() {
    let mut model: Model = create_logged_in_model(&[]);

    let result: Result<CommandResult, CoreError> = execute(
        &mut model,
        Command::AddPurchaseOrder {
            order: create_test_order("GHOST", "Acme"),
        },
    );

    assert_eq!(result, Err(CoreError::ItemNotFound(sku("GHOST"))));
    assert!(model.inventory().orders.is_empty());
}

#[test]
fn test_duplicate_purchase_order_is_rejected() {
    let mut model: Model = create_logged_in_model(&[create_test_item("A", "Anchor", 1)]);
    execute(
        &mut model,
        Command::AddPurchaseOrder {
            order: create_test_order("A", "Acme"),
        },
    )
    .unwrap();

    let again: Result<CommandResult, CoreError> = execute(
        &mut model,
        Command::AddPurchaseOrder {
            order: create_test_order("A", "Acme"),
        },
    );
    let other_supplier: Result<CommandResult, CoreError> = execute(
        &mut model,
        Command::AddPurchaseOrder {
            order: create_test_order("A", "Globex"),
        },
    );

    assert!(matches!(
        again,
        Err(CoreError::DomainViolation(DomainError::DuplicateKey { .. }))
    ));
    assert!(other_supplier.is_ok());
    assert_eq!(model.inventory().orders.len(), 2);
}

#[test]
fn test_set_order_status_updates_in_place() {
    let mut model: Model = create_logged_in_model(&[create_test_item("A", "Anchor", 1)]);
    execute(
        &mut model,
        Command::AddPurchaseOrder {
            order: create_test_order("A", "Acme"),
        },
    )
    .unwrap();

    execute(
        &mut model,
        Command::SetOrderStatus {
            index: index(1),
            status: OrderStatus::Approved,
        },
    )
    .unwrap();

    let order: &PurchaseOrder = model.inventory().orders.get(0).unwrap();
    assert_eq!(order.status, OrderStatus::Approved);
    assert_eq!(order.quantity().value(), 20);
}

#[test]
fn test_order_index_out_of_range_fails() {
    let mut model: Model = create_logged_in_model(&[]);

    let status: Result<CommandResult, CoreError> = execute(
        &mut model,
        Command::SetOrderStatus {
            index: index(1),
            status: OrderStatus::Rejected,
        },
    );
    let delete: Result<CommandResult, CoreError> =
        execute(&mut model, Command::DeletePurchaseOrder { index: index(3) });

    assert_eq!(status, Err(CoreError::InvalidIndex { index: 1, len: 0 }));
    assert_eq!(delete, Err(CoreError::InvalidIndex { index: 3, len: 0 }));
}

#[test]
fn test_delete_purchase_order_and_undo() {
    let mut model: Model = create_logged_in_model(&[create_test_item("A", "Anchor", 1)]);
    execute(
        &mut model,
        Command::AddPurchaseOrder {
            order: create_test_order("A", "Acme"),
        },
    )
    .unwrap();

    execute(&mut model, Command::DeletePurchaseOrder { index: index(1) }).unwrap();
    assert!(model.inventory().orders.is_empty());

    execute(&mut model, Command::Undo).unwrap();
    assert_eq!(model.inventory().orders.len(), 1);
}

#[test]
fn test_sale_decrements_stock() {
    let mut model: Model = create_logged_in_model(&[create_test_item("X", "Widget", 10)]);

    execute(&mut model, sale_command(1, "X", 3)).unwrap();

    assert_eq!(
        model
            .inventory()
            .item_by_sku(&sku("X"))
            .unwrap()
            .quantity
            .value(),
        7
    );
    assert_eq!(model.inventory().sales.len(), 1);
}

#[test]
fn test_sale_larger_than_stock_fails_without_changes() {
    let mut model: Model = create_logged_in_model(&[create_test_item("X", "Widget", 2)]);

    let result: Result<CommandResult, CoreError> = execute(&mut model, sale_command(1, "X", 3));

    assert_eq!(
        result,
        Err(CoreError::InsufficientQuantity {
            sku: sku("X"),
            available: 2,
            requested: 3,
        })
    );
    assert_eq!(
        model
            .inventory()
            .item_by_sku(&sku("X"))
            .unwrap()
            .quantity
            .value(),
        2
    );
    assert!(model.inventory().sales.is_empty());
    assert_eq!(model.history().len(), 1);
}

#[test]
fn test_sale_of_entire_stock_leaves_zero() {
    let mut model: Model = create_logged_in_model(&[create_test_item("X", "Widget", 4)]);

    execute(&mut model, sale_command(1, "X", 4)).unwrap();

    assert_eq!(
        model
            .inventory()
            .item_by_sku(&sku("X"))
            .unwrap()
            .quantity
            .value(),
        0
    );
}

#[test]
fn test_sale_for_unknown_item_fails() {
    let mut model: Model = create_logged_in_model(&[]);

    let result: Result<CommandResult, CoreError> = execute(&mut model, sale_command(1, "X", 1));

    assert_eq!(result, Err(CoreError::ItemNotFound(sku("X"))));
}

#[test]
fn test_duplicate_sale_id_fails_and_keeps_stock() {
    let mut model: Model = create_logged_in_model(&[create_test_item("X", "Widget", 10)]);
    execute(&mut model, sale_command(1, "X", 3)).unwrap();

    let result: Result<CommandResult, CoreError> = execute(&mut model, sale_command(1, "X", 2));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DuplicateKey {
            entity: "Sale",
            key: String::from("#1"),
        }))
    );
    assert_eq!(
        model
            .inventory()
            .item_by_sku(&sku("X"))
            .unwrap()
            .quantity
            .value(),
        7
    );
}

#[test]
fn test_undoing_sale_restores_stock_and_removes_sale() {
    let mut model: Model = create_logged_in_model(&[create_test_item("X", "Widget", 10)]);
    execute(&mut model, sale_command(1, "X", 3)).unwrap();

    execute(&mut model, Command::Undo).unwrap();

    assert_eq!(
        model
            .inventory()
            .item_by_sku(&sku("X"))
            .unwrap()
            .quantity
            .value(),
        10
    );
    assert!(model.inventory().sales.is_empty());
}

#[test]
fn test_list_sales_numbers_entries() {
    let mut model: Model = create_logged_in_model(&[create_test_item("X", "Widget", 10)]);
    execute(&mut model, sale_command(7, "X", 1)).unwrap();

    let result: CommandResult = execute(&mut model, Command::ListSales).unwrap();

    assert!(result.feedback.starts_with("1 sales listed:"));
    assert!(result.feedback.contains("1. Sale #7"));
}

#[test]
fn test_rekeying_item_leaves_orders_and_sales_on_old_sku() {
    let mut model: Model = create_logged_in_model(&[create_test_item("X", "Widget", 10)]);
    execute(
        &mut model,
        Command::AddPurchaseOrder {
            order: create_test_order("X", "Acme"),
        },
    )
    .unwrap();
    execute(&mut model, sale_command(1, "X", 3)).unwrap();

    execute(
        &mut model,
        Command::EditItem {
            index: index(1),
            changes: ItemChanges {
                sku: Some(sku("Y")),
                ..ItemChanges::default()
            },
        },
    )
    .unwrap();

    assert!(model.inventory().item_by_sku(&sku("X")).is_none());
    assert_eq!(
        model
            .inventory()
            .item_by_sku(&sku("Y"))
            .unwrap()
            .quantity
            .value(),
        7
    );
    assert_eq!(model.inventory().orders.get(0).unwrap().sku, sku("X"));
    assert_eq!(model.inventory().sales.get(0).unwrap().sku, sku("X"));
}
