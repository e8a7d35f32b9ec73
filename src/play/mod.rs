//! Mutable play state for a puzzle
//!
//! [`PlayGrid`] owns every user-visible aspect of a game in progress: the
//! values and candidate digits the player entered, the duplicate and
//! cage-math flags a renderer reads back, and the undo history. All
//! mutations are synchronous and the grid performs no I/O; callers that
//! share a grid across threads must serialize access themselves.

pub use self::cell::Cell;
pub use self::change::CellChange;
pub use self::value_set::ValueSet;

mod cell;
mod change;
mod value_set;

use crate::puzzle::{Cage, Operator, Puzzle};
use crate::{CageId, CellId, Value};

/// Cached per-cage state derived from the player's values
struct CageState {
    /// True unless every cell of the cage is filled and the math fails
    math_correct: bool,
    /// Set when `math_correct` transitions, consumed once by the renderer
    borders_dirty: bool,
}

/// A puzzle grid in play
pub struct PlayGrid {
    puzzle: Puzzle,
    cells: Vec<Cell>,
    cages: Vec<CageState>,
    selected: Option<CellId>,
    moves: Vec<CellChange>,
}

impl PlayGrid {
    pub fn new(puzzle: Puzzle) -> Self {
        let cells = (0..puzzle.cell_count())
            .map(|id| Cell::new(id, puzzle.answer(id), puzzle.cage_id_at(id), puzzle.width()))
            .collect();
        // math_correct starts out false so the initial check marks every
        // cage's borders dirty for the first paint
        let cages = (0..puzzle.cage_count())
            .map(|_| CageState {
                math_correct: false,
                borders_dirty: false,
            })
            .collect();
        let mut grid = Self {
            puzzle,
            cells,
            cages,
            selected: None,
            moves: Vec::new(),
        };
        for cage_id in 0..grid.cages.len() {
            grid.check_cage_math(cage_id);
        }
        grid
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn width(&self) -> usize {
        self.puzzle.width()
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    // ------ mutations ------

    /// Writes a digit into a cell
    ///
    /// The cell's candidates are dropped, and the digit is removed from the
    /// candidates of every other cell in the same row or column; those
    /// removals are recorded as part of the same undoable action.
    /// Re-entering the value a cell already holds changes nothing, but the
    /// snapshot still reaches the history stack where the duplicate check
    /// suppresses repeats.
    pub fn set_user_value(&mut self, id: CellId, digit: Value) {
        assert!(
            digit >= 1 && digit <= self.width() as Value,
            "digit {} out of range 1..={}",
            digit,
            self.width()
        );
        let mut change = self.snapshot(id);
        if self.cells[id].user_value() != digit {
            self.cells[id].set_user_value(digit);
            self.clear_redundant_candidates(id, digit, &mut change);
        }
        self.push_move(change);
        self.user_value_changed(id);
    }

    /// Empties a cell, dropping its user value and candidates
    pub fn clear_user_value(&mut self, id: CellId) {
        let change = self.snapshot(id);
        self.cells[id].set_user_value(0);
        self.push_move(change);
        self.user_value_changed(id);
    }

    /// Adds or removes a candidate digit
    ///
    /// A set user value is cleared first, within the same undoable action.
    pub fn toggle_candidate(&mut self, id: CellId, digit: Value) {
        assert!(
            digit >= 1 && digit <= self.width() as Value,
            "digit {} out of range 1..={}",
            digit,
            self.width()
        );
        let change = self.snapshot(id);
        let cell = &mut self.cells[id];
        if cell.is_filled() {
            cell.set_user_value(0);
        }
        if cell.has_candidate(digit) {
            cell.remove_candidate(digit);
        } else {
            cell.insert_candidate(digit);
        }
        self.push_move(change);
        self.user_value_changed(id);
    }

    /// Writes the answer into a cell and marks it revealed
    ///
    /// The write is recorded in history like any other; the revealed mark
    /// itself is permanent and survives undo.
    pub fn reveal_cell(&mut self, id: CellId) {
        let answer = self.cells[id].answer();
        self.set_user_value(id, answer);
        self.cells[id].set_revealed();
    }

    /// Reverses the most recent player action, including every change that
    /// cascaded from it. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let change = match self.moves.pop() {
            Some(change) => change,
            None => return false,
        };
        debug!("undo {:?}", change);
        let cell_id = change.cell_id();
        self.restore(&change);
        self.selected = Some(cell_id);
        // an undo can resurrect a duplicate or repair a cage
        self.user_value_changed(cell_id);
        true
    }

    // ------ selection ------

    pub fn selected_cell(&self) -> Option<CellId> {
        self.selected
    }

    pub fn select_cell(&mut self, id: CellId) {
        assert!(id < self.cells.len());
        if let Some(old) = self.selected {
            // repaint both cages when the selection moves across a border
            let old_cage = self.cells[old].cage_id();
            if old_cage != self.cells[id].cage_id() {
                self.cages[old_cage].borders_dirty = true;
                self.cages[self.cells[id].cage_id()].borders_dirty = true;
            }
        } else {
            self.cages[self.cells[id].cage_id()].borders_dirty = true;
        }
        self.selected = Some(id);
    }

    pub fn deselect_cell(&mut self) {
        if let Some(old) = self.selected.take() {
            self.cages[self.cells[old].cage_id()].borders_dirty = true;
        }
    }

    // ------ progress ------

    /// Check-progress: highlights every filled cell whose value differs
    /// from the answer and returns how many were flagged
    pub fn mark_invalid_values(&mut self) -> usize {
        let mut count = 0;
        for cell in &mut self.cells {
            if cell.is_filled() && !cell.is_correct() {
                cell.set_invalid(true);
                count += 1;
            }
        }
        count
    }

    /// True if every cell is filled with its answer
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_filled() && cell.is_correct())
    }

    /// True if no filled cell contradicts the solution
    pub fn is_valid_so_far(&self) -> bool {
        self.cells
            .iter()
            .filter(|cell| cell.is_filled())
            .all(Cell::is_correct)
    }

    /// True if the player has entered nothing, optionally counting
    /// candidates as entries
    pub fn is_empty(&self, check_candidates: bool) -> bool {
        self.cells.iter().all(|cell| {
            !cell.is_filled() && (!check_candidates || cell.candidates().is_empty())
        })
    }

    // ------ history accessors ------

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// The ordered stack of top-level undo records, oldest first
    pub fn moves(&self) -> &[CellChange] {
        &self.moves
    }

    // ------ renderer accessors ------

    /// False only while the cage is fully filled with values that fail its
    /// math constraint
    pub fn cage_math_correct(&self, cage_id: CageId) -> bool {
        self.cages[cage_id].math_correct
    }

    /// Consumes the cage's repaint flag, returning whether it was set
    pub fn take_dirty_borders(&mut self, cage_id: CageId) -> bool {
        std::mem::replace(&mut self.cages[cage_id].borders_dirty, false)
    }

    // ------ consistency maintenance ------

    /// Refreshes all flags that may be stale after the given cell's user
    /// value changed: duplicates for every cell sharing its row or column,
    /// and the math flag of its cage. Idempotent.
    fn user_value_changed(&mut self, id: CellId) {
        let coord = self.puzzle.coord_at(id);
        for other in 0..self.cells.len() {
            if self.puzzle.coord_at(other).shares_vector(coord) {
                self.mark_duplicates(other);
            }
        }
        self.check_cage_math(self.cells[id].cage_id());
    }

    /// Flags every other cell in this cell's row or column holding the same
    /// value, and recomputes this cell's own flag unconditionally so a
    /// stale highlight is cleared when the value moves away
    fn mark_duplicates(&mut self, id: CellId) -> bool {
        let value = self.cells[id].user_value();
        let coord = self.puzzle.coord_at(id);
        let mut duplicate = false;
        if value != 0 {
            for other in 0..self.cells.len() {
                if other != id
                    && self.cells[other].user_value() == value
                    && self.puzzle.coord_at(other).shares_vector(coord)
                {
                    duplicate = true;
                    self.cells[other].set_duplicate(true);
                }
            }
        }
        self.cells[id].set_duplicate(duplicate);
        duplicate
    }

    /// Re-evaluates a cage's math against the player's values, caching the
    /// result and raising the repaint flag when it transitions
    fn check_cage_math(&mut self, cage_id: CageId) -> bool {
        let cage = self.puzzle.cage(cage_id);
        let values: Vec<Value> = cage
            .cell_ids()
            .iter()
            .map(|&id| self.cells[id].user_value())
            .collect();
        // an incomplete cage is never wrong
        let correct = if values.contains(&0) {
            true
        } else {
            cage_math_correct(cage, &values)
        };
        if correct != self.cages[cage_id].math_correct {
            self.cages[cage_id].math_correct = correct;
            self.cages[cage_id].borders_dirty = true;
        }
        correct
    }

    // ------ history internals ------

    fn snapshot(&self, id: CellId) -> CellChange {
        let cell = &self.cells[id];
        CellChange::new(id, cell.user_value(), cell.candidates().to_vec())
    }

    /// Pushes a top-level record unless it duplicates the entry below it
    fn push_move(&mut self, change: CellChange) {
        if self.moves.last() == Some(&change) {
            return;
        }
        self.moves.push(change);
    }

    /// Removes `digit` from the candidates of every other cell sharing a row
    /// or column with `id`, recording each removal under `parent`
    fn clear_redundant_candidates(&mut self, id: CellId, digit: Value, parent: &mut CellChange) {
        let coord = self.puzzle.coord_at(id);
        for other in 0..self.cells.len() {
            if other != id
                && self.cells[other].has_candidate(digit)
                && self.puzzle.coord_at(other).shares_vector(coord)
            {
                parent.add_related(self.snapshot(other));
                self.cells[other].remove_candidate(digit);
            }
        }
    }

    /// Restores a record's related changes in the order they were recorded,
    /// then the record's own cell
    fn restore(&mut self, change: &CellChange) {
        for related in change.related() {
            self.restore(related);
        }
        self.cells[change.cell_id()].restore(
            change.previous_user_value(),
            change.previous_candidates(),
        );
    }
}

/// Evaluates a fully filled cage's values against its constraint
fn cage_math_correct(cage: &Cage, values: &[Value]) -> bool {
    if cage.is_operator_hidden() {
        // hidden operator: any of the four operators may produce the
        // target, checked in this fixed order
        return add_correct(values, cage.target())
            || multiply_correct(values, cage.target())
            || divide_correct(values, cage.target())
            || subtract_correct(values, cage.target());
    }
    match cage.operator() {
        Operator::Add => add_correct(values, cage.target()),
        Operator::Multiply => multiply_correct(values, cage.target()),
        Operator::Subtract => subtract_correct(values, cage.target()),
        Operator::Divide => divide_correct(values, cage.target()),
        Operator::Nop => true,
    }
}

fn add_correct(values: &[Value], target: Value) -> bool {
    values.iter().sum::<Value>() == target
}

fn multiply_correct(values: &[Value], target: Value) -> bool {
    values.iter().product::<Value>() == target
}

fn subtract_correct(values: &[Value], target: Value) -> bool {
    match *values {
        [a, b] => (a - b).abs() == target,
        _ => false,
    }
}

fn divide_correct(values: &[Value], target: Value) -> bool {
    match *values {
        [a, b] => {
            let (min, max) = if a < b { (a, b) } else { (b, a) };
            max % min == 0 && max / min == target
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::PlayGrid;
    use crate::puzzle::{Cage, Operator, Puzzle};

    /// 4x4 puzzle with a 2-cell Add cage on the top row, solution
    /// 2 3 4 1 / 3 4 1 2 / 4 1 2 3 / 1 2 3 4
    fn grid_4x4() -> PlayGrid {
        let cages = vec![
            Cage::new(vec![0, 1], Operator::Add, 5, false).unwrap(),
            Cage::new(vec![2, 3, 7], Operator::Multiply, 8, false).unwrap(),
            Cage::new(vec![4, 5], Operator::Subtract, 1, false).unwrap(),
            Cage::new(vec![6, 10], Operator::Divide, 2, false).unwrap(),
            Cage::new(vec![8, 9, 12], Operator::Add, 6, false).unwrap(),
            Cage::new(vec![11, 15], Operator::Add, 7, false).unwrap(),
            Cage::new(vec![13], Operator::Nop, 2, false).unwrap(),
            Cage::new(vec![14], Operator::Nop, 3, false).unwrap(),
        ];
        let solution = vec![2, 3, 4, 1, 3, 4, 1, 2, 4, 1, 2, 3, 1, 2, 3, 4];
        PlayGrid::new(Puzzle::new(4, cages, solution).unwrap())
    }

    #[test]
    fn set_value_clears_candidates() {
        let mut grid = grid_4x4();
        grid.toggle_candidate(0, 1);
        grid.toggle_candidate(0, 2);
        assert_eq!(2, grid.cell(0).candidates().len());
        grid.set_user_value(0, 2);
        assert_eq!(2, grid.cell(0).user_value());
        assert!(grid.cell(0).candidates().is_empty());
    }

    #[test]
    fn cage_math_incomplete_cage_is_correct() {
        let mut grid = grid_4x4();
        grid.set_user_value(0, 2);
        assert!(grid.cage_math_correct(0));
    }

    #[test]
    fn cage_math_add() {
        let mut grid = grid_4x4();
        grid.set_user_value(0, 2);
        grid.set_user_value(1, 3);
        assert!(grid.cage_math_correct(0));
        grid.set_user_value(1, 1);
        assert!(!grid.cage_math_correct(0));
    }

    #[test]
    fn cage_math_transition_marks_borders_dirty() {
        let mut grid = grid_4x4();
        // initial check marks everything dirty once
        assert!(grid.take_dirty_borders(0));
        assert!(!grid.take_dirty_borders(0));
        grid.set_user_value(0, 2);
        grid.set_user_value(1, 1);
        assert!(grid.take_dirty_borders(0));
        assert!(!grid.take_dirty_borders(0));
        // repairing the math transitions again
        grid.set_user_value(1, 3);
        assert!(grid.take_dirty_borders(0));
    }

    #[test]
    fn cage_math_subtract_and_divide_order_independent() {
        let mut grid = grid_4x4();
        grid.set_user_value(4, 3);
        grid.set_user_value(5, 4);
        assert!(grid.cage_math_correct(2));
        grid.set_user_value(6, 1);
        grid.set_user_value(10, 2);
        assert!(grid.cage_math_correct(3));
        grid.set_user_value(10, 3);
        assert!(!grid.cage_math_correct(3));
    }

    #[test]
    fn hidden_operator_cage_accepts_any_operator() {
        // cage 0 hides its operator; the player only has to hit the target
        let cages = vec![
            Cage::new(vec![0, 1], Operator::Subtract, 3, true).unwrap(),
            Cage::new(vec![2, 3], Operator::Add, 5, false).unwrap(),
            Cage::new(vec![4, 5], Operator::Add, 5, false).unwrap(),
            Cage::new(vec![6, 7], Operator::Add, 5, false).unwrap(),
            Cage::new(vec![8, 9], Operator::Add, 5, false).unwrap(),
            Cage::new(vec![10, 11], Operator::Add, 5, false).unwrap(),
            Cage::new(vec![12, 13], Operator::Add, 5, false).unwrap(),
            Cage::new(vec![14, 15], Operator::Add, 5, false).unwrap(),
        ];
        let solution = vec![4, 1, 2, 3, 3, 2, 1, 4, 2, 3, 4, 1, 1, 4, 3, 2];
        let mut grid = PlayGrid::new(Puzzle::new(4, cages, solution).unwrap());

        // 1 + 2 = 3, and no other operator produces 3 from these digits
        grid.set_user_value(0, 1);
        grid.set_user_value(1, 2);
        assert!(grid.cage_math_correct(0));

        // 4 - 1 = 3, and only subtraction works here
        grid.set_user_value(0, 4);
        grid.set_user_value(1, 1);
        assert!(grid.cage_math_correct(0));

        // 1 * 3 = 3
        grid.set_user_value(0, 1);
        grid.set_user_value(1, 3);
        assert!(grid.cage_math_correct(0));

        // 4 and 3 produce 7, 12, 1 and no whole quotient
        grid.set_user_value(0, 4);
        assert!(!grid.cage_math_correct(0));
    }

    #[test]
    fn nop_cage_always_correct() {
        let mut grid = grid_4x4();
        grid.set_user_value(13, 4);
        assert!(grid.cage_math_correct(6));
    }

    #[test]
    fn duplicates_in_row() {
        let mut grid = grid_4x4();
        grid.set_user_value(0, 3);
        grid.set_user_value(2, 3);
        assert!(grid.cell(0).is_duplicate());
        assert!(grid.cell(2).is_duplicate());
        grid.clear_user_value(0);
        assert!(!grid.cell(0).is_duplicate());
        assert!(!grid.cell(2).is_duplicate());
    }

    #[test]
    fn duplicates_in_column() {
        let mut grid = grid_4x4();
        grid.set_user_value(1, 4);
        grid.set_user_value(13, 4);
        assert!(grid.cell(1).is_duplicate());
        assert!(grid.cell(13).is_duplicate());
        // moving the value away clears the stale highlight
        grid.set_user_value(13, 2);
        assert!(!grid.cell(1).is_duplicate());
        assert!(!grid.cell(13).is_duplicate());
    }

    #[test]
    fn consistency_refresh_is_idempotent() {
        let mut grid = grid_4x4();
        grid.set_user_value(0, 3);
        grid.set_user_value(2, 3);
        let flags = |grid: &PlayGrid| {
            grid.cells()
                .map(|cell| cell.is_duplicate())
                .collect::<Vec<_>>()
        };
        let before = flags(&grid);
        grid.user_value_changed(2);
        assert_eq!(before, flags(&grid));
        grid.user_value_changed(2);
        assert_eq!(before, flags(&grid));
    }

    #[test]
    fn undo_on_empty_history() {
        let mut grid = grid_4x4();
        assert!(!grid.undo());
    }

    #[test]
    fn undo_restores_value_and_candidates() {
        let mut grid = grid_4x4();
        grid.toggle_candidate(0, 1);
        grid.toggle_candidate(0, 4);
        grid.set_user_value(0, 2);
        assert!(grid.undo());
        assert_eq!(0, grid.cell(0).user_value());
        assert_eq!(vec![1, 4], grid.cell(0).candidates().to_vec());
        assert_eq!(Some(0), grid.selected_cell());
    }

    #[test]
    fn undo_restores_flags() {
        let mut grid = grid_4x4();
        grid.set_user_value(0, 3);
        grid.set_user_value(2, 3);
        assert!(grid.cell(0).is_duplicate());
        assert!(grid.undo());
        assert!(!grid.cell(0).is_duplicate());
        assert!(!grid.cell(2).is_duplicate());

        grid.set_user_value(1, 1);
        assert!(!grid.cage_math_correct(0));
        assert!(grid.undo());
        assert!(grid.cage_math_correct(0));
    }

    #[test]
    fn undo_reverses_cascade_in_one_step() {
        let mut grid = grid_4x4();
        // cell 2 shares the top row with cell 0
        grid.toggle_candidate(2, 2);
        grid.toggle_candidate(2, 4);
        grid.set_user_value(0, 2);
        assert!(!grid.cell(2).has_candidate(2));
        assert!(grid.undo());
        assert_eq!(0, grid.cell(0).user_value());
        assert_eq!(vec![2, 4], grid.cell(2).candidates().to_vec());
    }

    #[test]
    fn repeated_identical_edit_recorded_once() {
        let mut grid = grid_4x4();
        grid.set_user_value(0, 2);
        assert_eq!(1, grid.move_count());
        // re-entering the same digit snapshots the same state twice; the
        // second identical record is suppressed
        grid.set_user_value(0, 2);
        grid.set_user_value(0, 2);
        assert_eq!(2, grid.move_count());
        // clearing an already empty cell repeatedly is one entry
        grid.clear_user_value(5);
        grid.clear_user_value(5);
        assert_eq!(3, grid.move_count());
    }

    #[test]
    fn toggle_candidate_clears_user_value() {
        let mut grid = grid_4x4();
        grid.set_user_value(0, 2);
        grid.toggle_candidate(0, 1);
        assert_eq!(0, grid.cell(0).user_value());
        assert!(grid.cell(0).has_candidate(1));
        // one undo brings the value back
        assert!(grid.undo());
        assert_eq!(2, grid.cell(0).user_value());
        assert!(grid.cell(0).candidates().is_empty());
    }

    #[test]
    fn reveal_cell() {
        let mut grid = grid_4x4();
        grid.set_user_value(0, 4);
        grid.reveal_cell(0);
        assert_eq!(2, grid.cell(0).user_value());
        assert!(grid.cell(0).is_revealed());
        // the write is undoable, the revealed mark is not
        assert!(grid.undo());
        assert_eq!(4, grid.cell(0).user_value());
        assert!(grid.cell(0).is_revealed());
    }

    #[test]
    fn reveal_correct_cell_still_recorded() {
        let mut grid = grid_4x4();
        grid.set_user_value(0, 2);
        assert_eq!(1, grid.move_count());
        // revealing a cell that already holds its answer commits a
        // snapshot; repeating it is suppressed as a duplicate
        grid.reveal_cell(0);
        assert!(grid.cell(0).is_revealed());
        assert_eq!(2, grid.move_count());
        grid.reveal_cell(0);
        assert_eq!(2, grid.move_count());
    }

    #[test]
    fn mark_invalid_values() {
        let mut grid = grid_4x4();
        grid.set_user_value(0, 2);
        grid.set_user_value(1, 1);
        assert_eq!(1, grid.mark_invalid_values());
        assert!(!grid.cell(0).is_invalid());
        assert!(grid.cell(1).is_invalid());
        // the next write clears the highlight
        grid.set_user_value(1, 3);
        assert!(!grid.cell(1).is_invalid());
    }

    #[test]
    fn solved_state() {
        let mut grid = grid_4x4();
        assert!(grid.is_empty(true));
        let solution: Vec<_> = (0..16).map(|id| grid.cell(id).answer()).collect();
        for (id, &answer) in solution.iter().enumerate() {
            assert!(grid.is_valid_so_far());
            assert!(!grid.is_solved());
            grid.set_user_value(id, answer);
        }
        assert!(grid.is_solved());
        assert!(grid.is_valid_so_far());
    }
}
