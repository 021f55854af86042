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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod command;
mod error;
mod execute;
mod history;
mod model;
mod session;
mod source;
mod state;
mod view;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use command::{Command, CommandKind, CommandResult, SortKey};
pub use error::CoreError;
pub use execute::execute;
pub use history::{History, HistoryError};
pub use model::Model;
pub use session::{Permissions, Session};
pub use source::{
    ChangeCause, ChangeListener, DataSource, ModelEvent, SourceError, check_sale_references,
};
pub use state::Inventory;
pub use view::{FilteredView, ItemPredicate, Predicate};
