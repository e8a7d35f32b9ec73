use super::ValueSet;
use crate::{CageId, CellId, Value};

/// One cell of a grid in play
///
/// The answer and cage id are fixed at construction; everything else is
/// player state. A set user value and candidate digits are mutually
/// exclusive: writing a value always empties the candidates.
pub struct Cell {
    id: CellId,
    answer: Value,
    cage_id: CageId,
    user_value: Value,
    candidates: ValueSet,
    duplicate: bool,
    revealed: bool,
    invalid: bool,
}

impl Cell {
    pub(crate) fn new(id: CellId, answer: Value, cage_id: CageId, width: usize) -> Self {
        Self {
            id,
            answer,
            cage_id,
            user_value: 0,
            candidates: ValueSet::new(width),
            duplicate: false,
            revealed: false,
            invalid: false,
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    /// The solution value of the cell
    pub fn answer(&self) -> Value {
        self.answer
    }

    pub fn cage_id(&self) -> CageId {
        self.cage_id
    }

    /// The value the player entered, `0` if the cell is empty
    pub fn user_value(&self) -> Value {
        self.user_value
    }

    pub fn is_filled(&self) -> bool {
        self.user_value != 0
    }

    pub fn is_correct(&self) -> bool {
        self.user_value == self.answer
    }

    pub fn candidates(&self) -> &ValueSet {
        &self.candidates
    }

    pub fn has_candidate(&self, digit: Value) -> bool {
        self.candidates.contains(digit)
    }

    /// True if another cell in the same row or column holds this cell's value
    pub fn is_duplicate(&self) -> bool {
        self.duplicate
    }

    /// True if the player revealed this cell's answer
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// True if a progress check flagged this cell's value as wrong.
    /// Cleared by the next write to the cell.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Writes a user value, `0` to clear. Candidates and stale highlights
    /// are dropped either way.
    pub(crate) fn set_user_value(&mut self, digit: Value) {
        self.candidates.clear();
        self.duplicate = false;
        self.invalid = false;
        self.user_value = digit;
    }

    pub(crate) fn insert_candidate(&mut self, digit: Value) {
        self.candidates.insert(digit);
    }

    pub(crate) fn remove_candidate(&mut self, digit: Value) {
        self.candidates.remove(digit);
    }

    pub(crate) fn set_duplicate(&mut self, duplicate: bool) {
        self.duplicate = duplicate;
    }

    pub(crate) fn set_revealed(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    /// Puts the cell back into a snapshotted state, bypassing the normal
    /// mutation path so no new undo record is produced
    pub(crate) fn restore(&mut self, user_value: Value, candidates: &[Value]) {
        self.set_user_value(user_value);
        for &digit in candidates {
            self.candidates.insert(digit);
        }
    }
}
