// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The authenticated session and the role gate in front of commands.

use crate::command::CommandKind;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stockroom_domain::{Role, Staff};

/// At most one authenticated staff member.
///
/// Sessions are never persisted; a new `Model` always starts logged out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<Staff>,
}

impl Session {
    /// Creates a logged-out session.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Starts a session for `staff`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::AlreadyLoggedIn` if a session is already active.
    /// The existing session is kept.
    pub fn authenticate(&mut self, staff: Staff) -> Result<(), CoreError> {
        if let Some(existing) = &self.current {
            return Err(CoreError::AlreadyLoggedIn(existing.username.clone()));
        }
        self.current = Some(staff);
        Ok(())
    }

    /// Ends the session and returns the staff member who was logged in.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoActiveSession` if nobody is logged in.
    pub fn logout(&mut self) -> Result<Staff, CoreError> {
        self.current.take().ok_or(CoreError::NoActiveSession)
    }

    /// Returns the logged-in staff member.
    #[must_use]
    pub const fn current(&self) -> Option<&Staff> {
        self.current.as_ref()
    }

    /// Returns true if someone is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

/// The minimum role required to run each kind of command.
///
/// Kinds without an entry may be run by anyone, including with no session.
/// The table is configuration: it deserializes from a map such as
/// `{"add_item": "user", "add_staff": "admin"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions {
    rules: BTreeMap<CommandKind, Role>,
}

impl Permissions {
    /// Creates a table with no restrictions.
    #[must_use]
    pub const fn open() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Returns this table with `kind` requiring `role`.
    #[must_use]
    pub fn with_rule(mut self, kind: CommandKind, role: Role) -> Self {
        self.rules.insert(kind, role);
        self
    }

    /// Returns this table with any requirement on `kind` removed.
    #[must_use]
    pub fn without_rule(mut self, kind: CommandKind) -> Self {
        self.rules.remove(&kind);
        self
    }

    /// Returns the role required for `kind`, if any.
    #[must_use]
    pub fn required_role(&self, kind: CommandKind) -> Option<Role> {
        self.rules.get(&kind).copied()
    }

    /// Checks whether the session may run a command of `kind`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Unauthorized` if the kind is gated and there is no
    /// session, or the session's role does not satisfy the requirement.
    pub fn check(&self, kind: CommandKind, session: &Session) -> Result<(), CoreError> {
        let Some(required) = self.required_role(kind) else {
            return Ok(());
        };

        match session.current() {
            Some(staff) if staff.role.satisfies(required) => Ok(()),
            _ => Err(CoreError::Unauthorized {
                action: kind.as_str().to_string(),
                required,
            }),
        }
    }
}

impl Default for Permissions {
    /// Inventory, order and sale changes need a logged-in user; staff
    /// management and clearing everything need an admin; reads, login and
    /// logout are open.
    fn default() -> Self {
        [
            (CommandKind::AddItem, Role::User),
            (CommandKind::EditItem, Role::User),
            (CommandKind::DeleteItem, Role::User),
            (CommandKind::SortItems, Role::User),
            (CommandKind::AddPurchaseOrder, Role::User),
            (CommandKind::SetOrderStatus, Role::User),
            (CommandKind::DeletePurchaseOrder, Role::User),
            (CommandKind::CreateSale, Role::User),
            (CommandKind::Undo, Role::User),
            (CommandKind::Redo, Role::User),
            (CommandKind::ClearInventory, Role::Admin),
            (CommandKind::AddStaff, Role::Admin),
            (CommandKind::DeleteStaff, Role::Admin),
            (CommandKind::ListStaff, Role::Admin),
        ]
        .into_iter()
        .fold(Self::open(), |permissions, (kind, role)| {
            permissions.with_rule(kind, role)
        })
    }
}
