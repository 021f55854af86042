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
    clippy::all
)]

use serde::Serialize;
use stockroom_domain::{Role, Staff, Username};

#[cfg(test)]
mod tests;

/// Represents the staff member (or nobody) performing an action.
///
/// Commands that are not gated by the permission table may run without a
/// session, in which case the actor is anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actor {
    /// The logged-in staff member's username, if any.
    pub username: Option<Username>,
    /// The logged-in staff member's role, if any.
    pub role: Option<Role>,
}

impl Actor {
    /// Creates an actor for a logged-in staff member.
    #[must_use]
    pub fn staff(staff: &Staff) -> Self {
        Self {
            username: Some(staff.username.clone()),
            role: Some(staff.role),
        }
    }

    /// Creates an actor representing no session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            username: None,
            role: None,
        }
    }

    /// Returns true if no staff member was logged in.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.username.is_none()
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.username, &self.role) {
            (Some(username), Some(role)) => write!(f, "{username} ({role})"),
            (Some(username), None) => write!(f, "{username}"),
            _ => f.write_str("anonymous"),
        }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    /// The name of the action (e.g., "`AddItem`", "`CreateSale`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A one-line summary of model state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    /// A string representation of the state (e.g. `items=3,orders=1,sales=0`).
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit record of one successful state change.
///
/// Every successful mutating command produces exactly one audit event;
/// rejected commands produce none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEvent {
    /// Position of this event in the audit log, starting at 1.
    pub sequence: u64,
    /// Who ran the command.
    pub actor: Actor,
    /// What the command did.
    pub action: Action,
    /// The state before the change.
    pub before: StateSnapshot,
    /// The state after the change.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    #[must_use]
    pub const fn new(
        sequence: u64,
        actor: Actor,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            sequence,
            actor,
            action,
            before,
            after,
        }
    }
}

/// Append-only sequence of audit events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditLog {
    events: Vec<AuditEvent>,
}

impl AuditLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Records a new event and returns it.
    ///
    /// Sequence numbers are assigned here so that they are always
    /// contiguous.
    pub fn record(
        &mut self,
        actor: Actor,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> &AuditEvent {
        let sequence: u64 = self.events.len() as u64 + 1;
        self.events
            .push(AuditEvent::new(sequence, actor, action, before, after));
        &self.events[self.events.len() - 1]
    }

    /// Returns all events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    /// Returns the most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&AuditEvent> {
        self.events.last()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
