// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stockroom_domain::{DomainError, Role, Sku, Username};
use thiserror::Error;

/// Errors returned by command execution.
///
/// A command that returns an error has left the model exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated (duplicate key, missing element, bad value).
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// The index does not refer to an element of the displayed list.
    #[error("The index {index} is invalid for a list of {len} entries")]
    InvalidIndex {
        /// The one-based index that was given.
        index: usize,
        /// The length of the list it was resolved against.
        len: usize,
    },
    /// No item with this SKU exists.
    #[error("No item with SKU '{0}' exists")]
    ItemNotFound(Sku),
    /// The item does not have enough stock.
    #[error("Insufficient quantity for '{sku}': {available} available, {requested} requested")]
    InsufficientQuantity {
        /// The item being sold.
        sku: Sku,
        /// Units in stock.
        available: u32,
        /// Units requested.
        requested: u32,
    },
    /// Username or password did not match any staff account.
    #[error("Authentication failed: invalid username or password")]
    AuthenticationFailed,
    /// A session is already active.
    #[error("Already logged in as '{0}'")]
    AlreadyLoggedIn(Username),
    /// No session is active.
    #[error("No staff member is logged in")]
    NoActiveSession,
    /// The session's role is insufficient, or there is no session.
    #[error("Unauthorized: '{action}' requires {required} role")]
    Unauthorized {
        /// The command that was attempted.
        action: String,
        /// The role required for this command.
        required: Role,
    },
    /// The logged-in staff member tried to delete their own account.
    #[error("Cannot delete the account that is currently logged in")]
    CannotDeleteSelf,
    /// The history is at its oldest state.
    #[error("No more commands to undo")]
    NothingToUndo,
    /// The history is at its newest state.
    #[error("No more commands to redo")]
    NothingToRedo,
}
