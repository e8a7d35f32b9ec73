//! Static puzzle definitions

pub use self::cage::Cage;
pub use self::operator::Operator;

mod cage;
mod operator;

use std::convert::TryFrom;

use crate::collections::square::{Coord, Square};
use crate::combos;
use crate::error::InvalidPuzzle;
use crate::{CageId, CellId, Value};

/// An unsolved MathDoku puzzle
///
/// Holds everything fixed for the lifetime of a game: the grid width, the
/// cages and the solution. The mutable play state lives in
/// [`crate::play::PlayGrid`].
pub struct Puzzle {
    /// the width and height of the puzzle
    width: usize,
    /// contains all cages in the puzzle
    cages: Vec<Cage>,
    /// the solution value of every cell
    solution: Square<Value>,
    /// the id of the cage containing each cell
    cage_map: Square<CageId>,
}

impl Puzzle {
    /// Creates a puzzle with a specified width, set of cages and solution
    ///
    /// The cages must partition the cells of the grid and every solution
    /// value must be in `1..=width`.
    pub fn new(
        width: usize,
        cages: Vec<Cage>,
        solution: Vec<Value>,
    ) -> Result<Self, InvalidPuzzle> {
        if width == 0 {
            return Err(InvalidPuzzle::new("puzzle width must not be zero".into()));
        }
        if solution.len() != width.pow(2) {
            return Err(InvalidPuzzle::new(format!(
                "solution has {} values, expected {}",
                solution.len(),
                width.pow(2)
            )));
        }
        if let Some(&value) = solution
            .iter()
            .find(|&&v| v < 1 || v > width as Value)
        {
            return Err(InvalidPuzzle::new(format!(
                "solution value ({}) out of range 1..={}",
                value, width
            )));
        }
        let cage_map = cage_map(width, &cages)?;
        let solution = Square::try_from(solution).expect("length verified above");
        Ok(Self {
            width,
            cages,
            solution,
            cage_map,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.width.pow(2)
    }

    pub fn cage(&self, id: CageId) -> &Cage {
        &self.cages[id]
    }

    pub fn cages(&self) -> impl Iterator<Item = &Cage> {
        self.cages.iter()
    }

    pub fn cage_count(&self) -> usize {
        self.cages.len()
    }

    /// The id of the cage containing the given cell
    pub fn cage_id_at(&self, cell_id: CellId) -> CageId {
        self.cage_map[cell_id]
    }

    /// The solution value of the given cell
    pub fn answer(&self, cell_id: CellId) -> Value {
        self.solution[cell_id]
    }

    pub fn coord_at(&self, cell_id: CellId) -> Coord {
        self.solution.coord_at(cell_id)
    }

    /// The coordinates of a cage's cells, in cage definition order
    pub fn cage_coords(&self, cage_id: CageId) -> Vec<Coord> {
        self.cage(cage_id)
            .cell_ids()
            .iter()
            .map(|&id| self.coord_at(id))
            .collect()
    }

    /// All digit tuples the given cage can legally hold, considering its
    /// math constraint and duplicate digits within the cage's own rows and
    /// columns. Dispatches on the cage's hidden-operator flag.
    pub fn cage_combos(&self, cage_id: CageId) -> Vec<Vec<Value>> {
        let cage = self.cage(cage_id);
        let coords = self.cage_coords(cage_id);
        if cage.is_operator_hidden() {
            combos::hidden_combos(cage.target(), &coords, self.width)
        } else {
            combos::combos(cage.operator(), cage.target(), &coords, self.width)
        }
    }
}

/// Create a square of values where each value is the id of the cage
/// containing that cell. Fails if the cages do not partition the grid.
fn cage_map(width: usize, cages: &[Cage]) -> Result<Square<CageId>, InvalidPuzzle> {
    let mut cage_map = Square::with_width_and_value(width, usize::max_value());
    for (i, cage) in cages.iter().enumerate() {
        for &cell_id in cage.cell_ids() {
            if cell_id >= cage_map.len() {
                return Err(InvalidPuzzle::new(format!(
                    "cage {} references cell {} outside the grid",
                    i, cell_id
                )));
            }
            if cage_map[cell_id] != usize::max_value() {
                return Err(InvalidPuzzle::new(format!(
                    "cell {} is in more than one cage",
                    cell_id
                )));
            }
            cage_map[cell_id] = i;
        }
    }
    if let Some(cell_id) = (0..cage_map.len()).find(|&i| cage_map[i] == usize::max_value()) {
        return Err(InvalidPuzzle::new(format!(
            "cell {} is not in any cage",
            cell_id
        )));
    }
    Ok(cage_map)
}
