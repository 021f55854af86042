// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::history::History;
use crate::session::{Permissions, Session};
use crate::source::{ChangeCause, ChangeListener, DataSource, ModelEvent, SourceError};
use crate::state::Inventory;
use crate::view::{FilteredView, ItemPredicate};
use std::sync::Arc;
use stockroom_audit::{Action, Actor, AuditLog, StateSnapshot};
use stockroom_domain::{Index, Item, Password, Sale, Sku, Staff, UniqueList, Username};
use tracing::{info, warn};

/// Everything a running stockroom holds in memory.
///
/// The current inventory is always the snapshot at the history pointer.
/// All changes go through `execute`; the accessors here are read-only.
pub struct Model {
    history: History<Inventory>,
    staff: UniqueList<Staff>,
    session: Session,
    item_view: FilteredView<ItemPredicate>,
    selected: Option<Sku>,
    permissions: Permissions,
    audit: AuditLog,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl Model {
    /// Creates a model whose history starts at `inventory`.
    #[must_use]
    pub fn new(inventory: Inventory, staff: UniqueList<Staff>, permissions: Permissions) -> Self {
        let item_view: FilteredView<ItemPredicate> =
            FilteredView::new(ItemPredicate::All, inventory.items.as_slice());
        Self {
            history: History::new(inventory),
            staff,
            session: Session::new(),
            item_view,
            selected: None,
            permissions,
            audit: AuditLog::new(),
            listeners: Vec::new(),
        }
    }

    /// Builds a model from a data source.
    ///
    /// Missing data (`SourceError::NotFound`) is replaced with empty
    /// collections.
    ///
    /// # Errors
    ///
    /// Returns any other `SourceError` from the source, or
    /// `SourceError::Conversion` if the loaded collections contain
    /// duplicates.
    pub fn load(source: &impl DataSource, permissions: Permissions) -> Result<Self, SourceError> {
        let mut inventory: Inventory =
            or_empty(source.load_inventory(), "inventory", Inventory::new)?;
        let staff: Vec<Staff> = or_empty(source.load_staff(), "staff", Vec::new)?;
        let sales: Vec<Sale> = or_empty(source.load_sales(&inventory.items), "sales", Vec::new)?;

        for sale in sales {
            inventory
                .sales
                .add(sale)
                .map_err(|err| SourceError::Conversion(err.to_string()))?;
        }
        let staff: UniqueList<Staff> = UniqueList::try_from_vec(staff)
            .map_err(|err| SourceError::Conversion(err.to_string()))?;

        info!(
            inventory = %inventory.summary(),
            staff = staff.len(),
            "Loaded model"
        );

        Ok(Self::new(inventory, staff, permissions))
    }

    /// Registers a listener for future changes.
    pub fn add_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns the current inventory.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        self.history.current()
    }

    /// Returns every staff account.
    #[must_use]
    pub const fn staff(&self) -> &UniqueList<Staff> {
        &self.staff
    }

    /// Returns the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the permission table.
    #[must_use]
    pub const fn permissions(&self) -> &Permissions {
        &self.permissions
    }

    /// Returns the audit trail.
    #[must_use]
    pub const fn audit_log(&self) -> &AuditLog {
        &self.audit
    }

    /// Returns the selected item, if it still exists.
    #[must_use]
    pub fn selected(&self) -> Option<&Item> {
        self.selected
            .as_ref()
            .and_then(|sku| self.inventory().item_by_sku(sku))
    }

    /// Returns the item view.
    #[must_use]
    pub const fn item_view(&self) -> &FilteredView<ItemPredicate> {
        &self.item_view
    }

    /// Iterates over the items passing the active filter, in inventory
    /// order.
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.item_view.iter(self.history.current().items.as_slice())
    }

    /// Maps a one-based index into the item view to the item it shows.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIndex` if the view has no such entry.
    pub fn resolve_visible_item(&self, index: Index) -> Result<&Item, CoreError> {
        self.item_view
            .resolve(index, self.history.current().items.as_slice())
            .ok_or(CoreError::InvalidIndex {
                index: index.one_based(),
                len: self.item_view.len(),
            })
    }

    /// Returns true if there is a state to undo to.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns true if there is a state to redo to.
    #[must_use]
    pub const fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Returns the inventory history.
    #[must_use]
    pub const fn history(&self) -> &History<Inventory> {
        &self.history
    }

    fn actor(&self) -> Actor {
        self.session
            .current()
            .map_or_else(Actor::anonymous, Actor::staff)
    }

    /// Installs `next` as the new current inventory.
    pub(crate) fn commit(&mut self, next: Inventory, action: Action) {
        let before: StateSnapshot = self.inventory().to_snapshot();
        let after: StateSnapshot = next.to_snapshot();
        let actor: Actor = self.actor();

        self.history.commit(next);
        self.audit.record(actor, action, before, after);
        self.inventory_changed(ChangeCause::Commit);
    }

    pub(crate) fn undo(&mut self) -> Result<(), CoreError> {
        let before: StateSnapshot = self.inventory().to_snapshot();
        self.history
            .undo()
            .map_err(|_| CoreError::NothingToUndo)?;
        self.record_history_move("Undo", before);
        self.inventory_changed(ChangeCause::Undo);
        Ok(())
    }

    pub(crate) fn redo(&mut self) -> Result<(), CoreError> {
        let before: StateSnapshot = self.inventory().to_snapshot();
        self.history
            .redo()
            .map_err(|_| CoreError::NothingToRedo)?;
        self.record_history_move("Redo", before);
        self.inventory_changed(ChangeCause::Redo);
        Ok(())
    }

    fn record_history_move(&mut self, name: &str, before: StateSnapshot) {
        let after: StateSnapshot = self.inventory().to_snapshot();
        let actor: Actor = self.actor();
        let details: String = format!("position {}", self.history.position());
        self.audit.record(
            actor,
            Action::new(name.to_string(), Some(details)),
            before,
            after,
        );
    }

    fn inventory_changed(&mut self, cause: ChangeCause) {
        let current: Arc<Inventory> = Arc::clone(self.history.current());

        self.item_view.refresh(current.items.as_slice());
        if self
            .selected
            .as_ref()
            .is_some_and(|sku| current.item_by_sku(sku).is_none())
        {
            self.selected = None;
        }

        info!(
            %cause,
            position = self.history.position(),
            inventory = %current.summary(),
            "Inventory changed"
        );

        self.notify(&ModelEvent::InventoryChanged {
            inventory: current,
            cause,
        });
    }

    pub(crate) fn update_item_filter(&mut self, predicate: ItemPredicate) {
        self.item_view
            .update_filter(predicate, self.history.current().items.as_slice());
    }

    pub(crate) fn select(&mut self, sku: Sku) {
        self.selected = Some(sku);
    }

    /// Replaces the staff list. Staff are not versioned.
    pub(crate) fn replace_staff(&mut self, next: UniqueList<Staff>, action: Action) {
        let before: StateSnapshot = staff_snapshot(&self.staff);
        let after: StateSnapshot = staff_snapshot(&next);
        let actor: Actor = self.actor();

        self.staff = next;
        self.audit.record(actor, action, before, after);

        info!(staff = self.staff.len(), "Staff changed");
        self.notify(&ModelEvent::StaffChanged {
            staff: self.staff.iter().cloned().collect(),
        });
    }

    pub(crate) fn login(
        &mut self,
        username: &Username,
        password: &Password,
    ) -> Result<Staff, CoreError> {
        if let Some(current) = self.session.current() {
            return Err(CoreError::AlreadyLoggedIn(current.username.clone()));
        }
        let staff: Staff = self
            .staff
            .find(|staff| staff.matches_credentials(username, password))
            .cloned()
            .ok_or(CoreError::AuthenticationFailed)?;

        let before: StateSnapshot = session_snapshot(&self.session);
        self.session.authenticate(staff.clone())?;
        let after: StateSnapshot = session_snapshot(&self.session);
        let actor: Actor = self.actor();
        self.audit.record(
            actor,
            Action::new(String::from("Login"), None),
            before,
            after,
        );
        info!(%username, role = %staff.role, "Staff logged in");

        Ok(staff)
    }

    pub(crate) fn logout(&mut self) -> Result<Staff, CoreError> {
        let actor: Actor = self.actor();
        let before: StateSnapshot = session_snapshot(&self.session);
        let staff: Staff = self.session.logout()?;
        let after: StateSnapshot = session_snapshot(&self.session);
        self.audit.record(
            actor,
            Action::new(String::from("Logout"), None),
            before,
            after,
        );
        info!(username = %staff.username, "Staff logged out");
        Ok(staff)
    }

    fn notify(&self, event: &ModelEvent) {
        for listener in &self.listeners {
            listener.on_change(event);
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Inventory::new(), UniqueList::new(), Permissions::default())
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("inventory", self.inventory())
            .field("history_position", &self.history.position())
            .field("staff", &self.staff)
            .field("session", &self.session)
            .field("selected", &self.selected)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

fn or_empty<T>(
    loaded: Result<T, SourceError>,
    what: &str,
    empty: impl FnOnce() -> T,
) -> Result<T, SourceError> {
    match loaded {
        Err(SourceError::NotFound(reason)) => {
            warn!(what, %reason, "No data found, starting empty");
            Ok(empty())
        }
        other => other,
    }
}

fn staff_snapshot(staff: &UniqueList<Staff>) -> StateSnapshot {
    StateSnapshot::new(format!("staff={}", staff.len()))
}

fn session_snapshot(session: &Session) -> StateSnapshot {
    StateSnapshot::new(session.current().map_or_else(
        || String::from("session=none"),
        |staff| format!("session={}", staff.username),
    ))
}
