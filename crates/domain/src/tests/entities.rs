// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_item;
use crate::{
    DomainError, Entity, Item, ItemChanges, ItemName, OrderStatus, Password, PurchaseOrder,
    Quantity, Role, Sale, SaleId, Sku, Staff, StaffName, Supplier, Username,
};
use time::macros::date;

#[test]
fn test_item_changes_with_no_fields_reproduce_original() {
    let item: Item = create_test_item("X", "Widget", 10);
    let changes: ItemChanges = ItemChanges::default();

    assert!(!changes.is_any_field_edited());
    assert_eq!(changes.apply_to(&item), item);
}

#[test]
fn test_item_changes_replace_only_given_fields() {
    let item: Item = create_test_item("X", "Widget", 10);
    let changes: ItemChanges = ItemChanges {
        name: Some(ItemName::new("Gadget").unwrap()),
        quantity: Some(Quantity::new(4)),
        ..ItemChanges::default()
    };

    let edited: Item = changes.apply_to(&item);

    assert_eq!(edited.name.value(), "Gadget");
    assert_eq!(edited.quantity, Quantity::new(4));
    assert_eq!(edited.sku, item.sku);
    assert_eq!(edited.price, item.price);
    assert_eq!(edited.tags, item.tags);
}

#[test]
fn test_item_display_includes_tags() {
    let item: Item = create_test_item("X", "Widget", 10);
    assert_eq!(
        item.to_string(),
        "Widget (X) Price: 12.50 Quantity: 10 Tags: [hardware]"
    );
}

#[test]
fn test_purchase_order_requires_positive_quantity() {
    let result: Result<PurchaseOrder, DomainError> = PurchaseOrder::new(
        Sku::new("X").unwrap(),
        Quantity::new(0),
        date!(2026 - 03 - 01),
        Supplier::new("Acme").unwrap(),
    );

    assert!(matches!(result, Err(DomainError::InvalidQuantity(_))));
}

#[test]
fn test_purchase_order_starts_pending() {
    let order: PurchaseOrder = PurchaseOrder::new(
        Sku::new("X").unwrap(),
        Quantity::new(5),
        date!(2026 - 03 - 01),
        Supplier::new("Acme").unwrap(),
    )
    .unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.with_status(OrderStatus::Fulfilled).status, OrderStatus::Fulfilled);
}

#[test]
fn test_purchase_order_identity_ignores_status_and_quantity() {
    let order: PurchaseOrder = PurchaseOrder::new(
        Sku::new("X").unwrap(),
        Quantity::new(5),
        date!(2026 - 03 - 01),
        Supplier::new("Acme").unwrap(),
    )
    .unwrap();
    let other: PurchaseOrder = PurchaseOrder::new(
        Sku::new("X").unwrap(),
        Quantity::new(50),
        date!(2026 - 03 - 01),
        Supplier::new("Acme").unwrap(),
    )
    .unwrap()
    .with_status(OrderStatus::Approved);

    assert!(order.same_entity(&other));
    assert_ne!(order, other);
}

#[test]
fn test_purchase_order_deserialize_validates_quantity() {
    let json: &str =
        r#"{"sku": "X", "quantity": 0, "required_by": "2026-03-01", "supplier": "Acme"}"#;

    let result: Result<PurchaseOrder, serde_json::Error> = serde_json::from_str(json);

    assert!(result.is_err());
}

#[test]
fn test_purchase_order_deserialize_defaults_to_pending() {
    let json: &str =
        r#"{"sku": "x", "quantity": 2, "required_by": "2026-03-01", "supplier": "Acme"}"#;

    let order: PurchaseOrder = serde_json::from_str(json).unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.sku.value(), "X");
    assert_eq!(order.required_by, date!(2026 - 03 - 01));
}

#[test]
fn test_order_status_parses_case_insensitively() {
    assert_eq!("Approved".parse::<OrderStatus>().unwrap(), OrderStatus::Approved);
    assert!(matches!(
        "shipped".parse::<OrderStatus>(),
        Err(DomainError::InvalidStatus(_))
    ));
}

#[test]
fn test_sale_requires_positive_quantity() {
    let result: Result<Sale, DomainError> = Sale::new(
        SaleId::new(1),
        Sku::new("X").unwrap(),
        Quantity::new(0),
        date!(2026 - 01 - 10),
    );

    assert!(matches!(result, Err(DomainError::InvalidQuantity(_))));
}

#[test]
fn test_sale_identity_is_sale_id() {
    let sale: Sale = Sale::new(
        SaleId::new(1),
        Sku::new("X").unwrap(),
        Quantity::new(1),
        date!(2026 - 01 - 10),
    )
    .unwrap();
    let same_id: Sale = Sale::new(
        SaleId::new(1),
        Sku::new("Y").unwrap(),
        Quantity::new(3),
        date!(2026 - 02 - 10),
    )
    .unwrap();

    assert!(sale.same_entity(&same_id));
}

fn create_test_staff(username: &str, password: &str, role: Role) -> Staff {
    Staff::new(
        Username::new(username).unwrap(),
        Password::new(password).unwrap(),
        StaffName::new("Test Staff").unwrap(),
        role,
    )
}

#[test]
fn test_staff_credentials_must_match_exactly() {
    let staff: Staff = create_test_staff("alice", "s3cret", Role::User);

    assert!(staff.matches_credentials(
        &Username::new("ALICE").unwrap(),
        &Password::new("s3cret").unwrap()
    ));
    assert!(!staff.matches_credentials(
        &Username::new("alice").unwrap(),
        &Password::new("S3CRET").unwrap()
    ));
}

#[test]
fn test_password_debug_is_redacted() {
    let staff: Staff = create_test_staff("alice", "s3cret", Role::User);

    let debug: String = format!("{staff:?}");

    assert!(!debug.contains("s3cret"));
    assert!(debug.contains("Password(***)"));
}

#[test]
fn test_serialized_staff_omits_password() {
    let staff: Staff = create_test_staff("alice", "s3cret", Role::User);

    let json: serde_json::Value = serde_json::to_value(&staff).unwrap();

    assert!(json.get("password").is_none());
    assert!(!json.to_string().contains("s3cret"));
    assert_eq!(json["username"], "alice");
}

#[test]
fn test_staff_deserializes_with_password() {
    let staff: Staff = serde_json::from_str(
        r#"{"username": "alice", "password": "s3cret", "name": "Test Staff", "role": "user"}"#,
    )
    .unwrap();

    assert_eq!(staff, create_test_staff("alice", "s3cret", Role::User));
}

#[test]
fn test_admin_satisfies_every_role() {
    assert!(Role::Admin.satisfies(Role::Admin));
    assert!(Role::Admin.satisfies(Role::User));
    assert!(Role::User.satisfies(Role::User));
    assert!(!Role::User.satisfies(Role::Admin));
}

#[test]
fn test_role_parse() {
    assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
    assert!(matches!("owner".parse::<Role>(), Err(DomainError::InvalidRole(_))));
}
