use std::fmt;
use std::fmt::Debug;

use itertools::Itertools;

use crate::{CellId, Value};

/// Undo information for one cell mutation
///
/// Holds the cell's user value and candidates as they were before the
/// mutation. Mutations performed as a consequence of the same player action
/// (for example a candidate cleared in a peer cell) are recorded as related
/// changes and are only undone together with this record.
pub struct CellChange {
    cell_id: CellId,
    user_value: Value,
    candidates: Vec<Value>,
    related: Vec<CellChange>,
}

impl CellChange {
    pub(crate) fn new(cell_id: CellId, user_value: Value, candidates: Vec<Value>) -> Self {
        Self {
            cell_id,
            user_value,
            candidates,
            related: Vec::new(),
        }
    }

    pub fn cell_id(&self) -> CellId {
        self.cell_id
    }

    /// The user value of the cell before the change
    pub fn previous_user_value(&self) -> Value {
        self.user_value
    }

    /// The candidates of the cell before the change, ascending
    pub fn previous_candidates(&self) -> &[Value] {
        &self.candidates
    }

    /// Changes caused by the same player action, in the order they happened
    pub fn related(&self) -> &[CellChange] {
        &self.related
    }

    pub(crate) fn add_related(&mut self, change: CellChange) {
        self.related.push(change);
    }
}

/// Identity is the snapshot itself; related changes are excluded so that a
/// repeated identical edit is recognized as a duplicate history entry.
impl PartialEq for CellChange {
    fn eq(&self, other: &Self) -> bool {
        self.cell_id == other.cell_id
            && self.user_value == other.user_value
            && self.candidates == other.candidates
    }
}

impl Debug for CellChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<cell:{} previous value:{} previous candidates:[{}] related:{}>",
            self.cell_id,
            self.user_value,
            self.candidates.iter().format(", "),
            self.related.len()
        )
    }
}
