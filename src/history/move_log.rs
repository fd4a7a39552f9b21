//! Append-only move log with a redo tail.
//!
//! Uses `im::Vector` so cloning a `GameState` (for hints or search) shares
//! the log structurally instead of copying every record.

use im::Vector;

use super::record::MoveRecord;

/// Applied records plus the records undone since the last new action.
#[derive(Clone, Debug, Default)]
pub struct MoveLog {
    applied: Vector<MoveRecord>,
    undone: Vector<MoveRecord>,
}

impl MoveLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of applied records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.applied.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    /// Applied records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.applied.iter()
    }

    /// Most recent applied record.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.applied.back()
    }

    /// Append a record for a new action. Discards the redo tail.
    pub fn record(&mut self, record: MoveRecord) {
        self.applied.push_back(record);
        self.undone.clear();
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.applied.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of records available to redo.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.undone.len()
    }

    /// Move the latest applied record onto the redo tail and return it.
    pub fn take_undo(&mut self) -> Option<MoveRecord> {
        let record = self.applied.pop_back()?;
        self.undone.push_back(record.clone());
        Some(record)
    }

    /// Remove and return the next record to redo.
    pub fn take_redo(&mut self) -> Option<MoveRecord> {
        self.undone.pop_back()
    }

    /// Append a re-applied record, keeping the rest of the redo tail.
    pub fn record_redone(&mut self, record: MoveRecord) {
        self.applied.push_back(record);
    }

    /// Put a record back on the redo tail after a redo could not be applied.
    pub(crate) fn restore_redo(&mut self, record: MoveRecord) {
        self.undone.push_back(record);
    }
}
