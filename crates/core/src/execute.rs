// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, CommandKind, CommandResult, SortKey};
use crate::error::CoreError;
use crate::model::Model;
use crate::state::Inventory;
use crate::view::ItemPredicate;
use stockroom_audit::Action;
use stockroom_domain::{
    DomainError, Entity, Index, Item, ItemChanges, OrderStatus, PurchaseOrder, Quantity, Sale,
    SaleId, Sku, Staff, UniqueList, Username,
};
use time::Date;
use tracing::{debug, warn};

/// Runs one command against the model.
///
/// This is the only entry point for changing a `Model`. Permission checks
/// run first. Inventory changes are computed on a copy of the current
/// snapshot and committed only if every step succeeds.
///
/// # Errors
///
/// Returns an error if the command is not permitted for the current
/// session or any of its preconditions fail. On error the model is
/// unchanged.
pub fn execute(model: &mut Model, command: Command) -> Result<CommandResult, CoreError> {
    let kind: CommandKind = command.kind();
    debug!(%kind, read_only = kind.is_read_only(), "Executing command");

    let result: Result<String, CoreError> = model
        .permissions()
        .check(kind, model.session())
        .and_then(|()| dispatch(model, command));

    match result {
        Ok(feedback) => Ok(CommandResult::new(feedback)),
        Err(err) => {
            warn!(%kind, error = %err, "Command rejected");
            Err(err)
        }
    }
}

fn dispatch(model: &mut Model, command: Command) -> Result<String, CoreError> {
    match command {
        Command::AddItem { item } => add_item(model, item),
        Command::EditItem { index, changes } => edit_item(model, index, &changes),
        Command::DeleteItem { index } => delete_item(model, index),
        Command::FindItem { keywords } => {
            let shown: usize = filter_items(model, ItemPredicate::NameContains { keywords });
            Ok(format!("{shown} items listed!"))
        }
        Command::FilterItem { predicate } => {
            let shown: usize = filter_items(model, predicate);
            Ok(format!("{shown} items listed!"))
        }
        Command::ListItems => {
            filter_items(model, ItemPredicate::All);
            Ok(String::from("Listed all items"))
        }
        Command::SortItems { key } => {
            sort_items(model, key);
            Ok(format!("Sorted items by {key}"))
        }
        Command::SelectItem { index } => {
            let item: Item = model.resolve_visible_item(index)?.clone();
            let feedback: String = format!("Selected item: {item}");
            model.select(item.sku);
            Ok(feedback)
        }
        Command::ClearInventory => {
            commit(model, CommandKind::ClearInventory, None, Inventory::new());
            Ok(String::from("Inventory has been cleared!"))
        }
        Command::AddPurchaseOrder { order } => add_purchase_order(model, order),
        Command::SetOrderStatus { index, status } => set_order_status(model, index, status),
        Command::DeletePurchaseOrder { index } => delete_purchase_order(model, index),
        Command::CreateSale {
            id,
            sku,
            quantity,
            date,
        } => create_sale(model, id, sku, quantity, date),
        Command::ListSales => Ok(list(model.inventory().sales.iter(), "sales")),
        Command::Login { username, password } => {
            let staff: Staff = model.login(&username, &password)?;
            Ok(format!("Logged in as {staff}"))
        }
        Command::Logout => {
            let staff: Staff = model.logout()?;
            Ok(format!("Logged out {}", staff.username))
        }
        Command::AddStaff { staff } => add_staff(model, staff),
        Command::DeleteStaff { username } => delete_staff(model, &username),
        Command::ListStaff => Ok(list(model.staff().iter(), "staff accounts")),
        Command::Undo => {
            model.undo()?;
            Ok(String::from("Undo success!"))
        }
        Command::Redo => {
            model.redo()?;
            Ok(String::from("Redo success!"))
        }
    }
}

fn commit(model: &mut Model, kind: CommandKind, details: Option<String>, next: Inventory) {
    model.commit(next, Action::new(kind.as_str().to_string(), details));
}

fn working_copy(model: &Model) -> Inventory {
    model.inventory().clone()
}

fn add_item(model: &mut Model, item: Item) -> Result<String, CoreError> {
    let mut next: Inventory = working_copy(model);
    let feedback: String = format!("New item added: {item}");
    let details: String = item.identity();
    next.items.add(item)?;
    commit(model, CommandKind::AddItem, Some(details), next);
    Ok(feedback)
}

fn edit_item(model: &mut Model, index: Index, changes: &ItemChanges) -> Result<String, CoreError> {
    let target: Item = model.resolve_visible_item(index)?.clone();
    let edited: Item = changes.apply_to(&target);

    let mut next: Inventory = working_copy(model);
    next.items.update(&target, edited.clone())?;

    commit(model, CommandKind::EditItem, Some(target.identity()), next);
    if changes.is_any_field_edited() {
        Ok(format!("Edited item: {edited}"))
    } else {
        Ok(format!("No fields changed: {edited}"))
    }
}

fn delete_item(model: &mut Model, index: Index) -> Result<String, CoreError> {
    let target: Item = model.resolve_visible_item(index)?.clone();

    let mut next: Inventory = working_copy(model);
    let removed: Item = next.items.remove(&target)?;

    commit(model, CommandKind::DeleteItem, Some(removed.identity()), next);
    Ok(format!("Deleted item: {removed}"))
}

fn filter_items(model: &mut Model, predicate: ItemPredicate) -> usize {
    model.update_item_filter(predicate);
    model.item_view().len()
}

fn sort_items(model: &mut Model, key: SortKey) {
    let mut next: Inventory = working_copy(model);
    next.items.sort_by(|a, b| key.compare(a, b));
    commit(model, CommandKind::SortItems, Some(key.to_string()), next);
}

fn resolve_order(inventory: &Inventory, index: Index) -> Result<PurchaseOrder, CoreError> {
    inventory
        .orders
        .get(index.zero_based())
        .cloned()
        .ok_or(CoreError::InvalidIndex {
            index: index.one_based(),
            len: inventory.orders.len(),
        })
}

fn add_purchase_order(model: &mut Model, order: PurchaseOrder) -> Result<String, CoreError> {
    if model.inventory().item_by_sku(&order.sku).is_none() {
        return Err(CoreError::ItemNotFound(order.sku));
    }

    let mut next: Inventory = working_copy(model);
    let feedback: String = format!("New purchase order added: {order}");
    let details: String = order.identity();
    next.orders.add(order)?;

    commit(model, CommandKind::AddPurchaseOrder, Some(details), next);
    Ok(feedback)
}

fn set_order_status(
    model: &mut Model,
    index: Index,
    status: OrderStatus,
) -> Result<String, CoreError> {
    let target: PurchaseOrder = resolve_order(model.inventory(), index)?;
    let updated: PurchaseOrder = target.with_status(status);

    let mut next: Inventory = working_copy(model);
    next.orders.update(&target, updated.clone())?;

    commit(
        model,
        CommandKind::SetOrderStatus,
        Some(format!("{} -> {status}", target.identity())),
        next,
    );
    Ok(format!("Updated purchase order: {updated}"))
}

fn delete_purchase_order(model: &mut Model, index: Index) -> Result<String, CoreError> {
    let target: PurchaseOrder = resolve_order(model.inventory(), index)?;

    let mut next: Inventory = working_copy(model);
    let removed: PurchaseOrder = next.orders.remove(&target)?;

    commit(
        model,
        CommandKind::DeletePurchaseOrder,
        Some(removed.identity()),
        next,
    );
    Ok(format!("Deleted purchase order: {removed}"))
}

fn create_sale(
    model: &mut Model,
    id: SaleId,
    sku: Sku,
    quantity: Quantity,
    date: Date,
) -> Result<String, CoreError> {
    let item: Item = model
        .inventory()
        .item_by_sku(&sku)
        .cloned()
        .ok_or_else(|| CoreError::ItemNotFound(sku.clone()))?;

    let remaining: Quantity =
        item.quantity
            .checked_sub(quantity)
            .ok_or_else(|| CoreError::InsufficientQuantity {
                sku: sku.clone(),
                available: item.quantity.value(),
                requested: quantity.value(),
            })?;

    let sale: Sale = Sale::new(id, sku, quantity, date)?;
    let feedback: String = format!("New sale recorded: {sale}");

    let mut next: Inventory = working_copy(model);
    next.sales.add(sale)?;
    next.items.update(&item, item.with_quantity(remaining))?;

    commit(model, CommandKind::CreateSale, Some(id.to_string()), next);
    Ok(feedback)
}

fn add_staff(model: &mut Model, staff: Staff) -> Result<String, CoreError> {
    let mut next: UniqueList<Staff> = model.staff().clone();
    let feedback: String = format!("New staff added: {staff}");
    let details: String = staff.identity();
    next.add(staff)?;

    model.replace_staff(
        next,
        Action::new(CommandKind::AddStaff.as_str().to_string(), Some(details)),
    );
    Ok(feedback)
}

fn delete_staff(model: &mut Model, username: &Username) -> Result<String, CoreError> {
    if model
        .session()
        .current()
        .is_some_and(|current| &current.username == username)
    {
        return Err(CoreError::CannotDeleteSelf);
    }

    let target: Staff = model
        .staff()
        .find(|staff| &staff.username == username)
        .cloned()
        .ok_or_else(|| DomainError::NotFound {
            entity: Staff::KIND,
            key: username.to_string(),
        })?;

    let mut next: UniqueList<Staff> = model.staff().clone();
    let removed: Staff = next.remove(&target)?;

    model.replace_staff(
        next,
        Action::new(
            CommandKind::DeleteStaff.as_str().to_string(),
            Some(removed.identity()),
        ),
    );
    Ok(format!("Deleted staff: {removed}"))
}

fn list<'a, T: std::fmt::Display + 'a>(
    entries: impl Iterator<Item = &'a T>,
    noun: &str,
) -> String {
    let lines: Vec<String> = entries
        .enumerate()
        .map(|(offset, entry)| format!("{}. {entry}", offset + 1))
        .collect();
    if lines.is_empty() {
        format!("No {noun} recorded")
    } else {
        format!("{} {noun} listed:\n{}", lines.len(), lines.join("\n"))
    }
}
