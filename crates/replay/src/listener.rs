// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Change notifications for the replay log.
//!
//! Events are informational only. The model is the source of truth.

use stockroom::{ChangeListener, ModelEvent};
use tracing::info;

/// Writes every model change to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeLogger;

impl ChangeListener for ChangeLogger {
    fn on_change(&self, event: &ModelEvent) {
        match event {
            ModelEvent::InventoryChanged { inventory, cause } => {
                info!(%cause, inventory = %inventory.summary(), "Inventory changed");
            }
            ModelEvent::StaffChanged { staff } => {
                info!(staff = staff.len(), "Staff changed");
            }
        }
    }
}
