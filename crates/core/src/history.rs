// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Snapshot-based undo/redo history.

use std::sync::Arc;
use thiserror::Error;

/// Errors from moving the history pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The pointer is already at the oldest snapshot.
    #[error("No undoable state")]
    NoUndoableState,
    /// The pointer is already at the newest snapshot.
    #[error("No redoable state")]
    NoRedoableState,
}

/// A linear history of immutable snapshots with a current pointer.
///
/// Snapshots are shared through `Arc` and never mutated after they are
/// committed. Committing after an undo discards every snapshot after the
/// pointer, so redo only ever replays the chain of undos immediately
/// preceding it.
///
/// The pointer always indexes a stored snapshot; the history is never
/// empty.
#[derive(Debug, Clone)]
pub struct History<S> {
    states: Vec<Arc<S>>,
    current: usize,
}

impl<S> History<S> {
    /// Creates a history holding only `initial`.
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self {
            states: vec![Arc::new(initial)],
            current: 0,
        }
    }

    /// Appends `state` after the current pointer and moves the pointer to it.
    ///
    /// Any snapshots after the pointer (the redo branch) are dropped.
    /// Returns the committed snapshot.
    pub fn commit(&mut self, state: S) -> Arc<S> {
        self.states.truncate(self.current + 1);
        let snapshot: Arc<S> = Arc::new(state);
        self.states.push(Arc::clone(&snapshot));
        self.current = self.states.len() - 1;
        snapshot
    }

    /// Returns true if there is an older snapshot to return to.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.current > 0
    }

    /// Returns true if there is a newer snapshot to return to.
    #[must_use]
    pub const fn can_redo(&self) -> bool {
        self.current + 1 < self.states.len()
    }

    /// Moves the pointer back one snapshot and returns it.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::NoUndoableState` if the pointer is at the
    /// oldest snapshot.
    pub fn undo(&mut self) -> Result<Arc<S>, HistoryError> {
        if !self.can_undo() {
            return Err(HistoryError::NoUndoableState);
        }
        self.current -= 1;
        Ok(Arc::clone(self.current()))
    }

    /// Moves the pointer forward one snapshot and returns it.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::NoRedoableState` if the pointer is at the
    /// newest snapshot.
    pub fn redo(&mut self) -> Result<Arc<S>, HistoryError> {
        if !self.can_redo() {
            return Err(HistoryError::NoRedoableState);
        }
        self.current += 1;
        Ok(Arc::clone(self.current()))
    }

    /// Returns the snapshot at the pointer.
    #[must_use]
    pub fn current(&self) -> &Arc<S> {
        &self.states[self.current]
    }

    /// Returns the zero-based position of the pointer.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.current
    }

    /// Returns the number of stored snapshots, including any redo branch.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false; a history holds at least its initial snapshot.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
