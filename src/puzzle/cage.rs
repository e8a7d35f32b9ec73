use super::operator::Operator;

use crate::error::InvalidPuzzle;
use crate::CellId;
use crate::Value;

/// A cage in a MathDoku puzzle
///
/// Every cell in a puzzle belongs to exactly one cage. A cage has an
/// operator and a target number that the digits in its cells must produce.
#[derive(Debug, PartialEq)]
pub struct Cage {
    /// The cells in this cage, in definition order. Combo tuples returned by
    /// [`crate::combos`] correspond to this order one to one.
    cell_ids: Box<[CellId]>,

    /// The math operator that must be used with the digits in the cage
    /// to produce the target number
    operator: Operator,

    /// The target number that must be produced using the digits in this cage
    target: Value,

    /// True if the operator is not revealed to the player. The player then
    /// has to produce the target with any of the four operators.
    hide_operator: bool,
}

impl Cage {
    pub fn new(
        cell_ids: impl Into<Box<[CellId]>>,
        operator: Operator,
        target: Value,
        hide_operator: bool,
    ) -> Result<Self, InvalidPuzzle> {
        let cage = Cage {
            cell_ids: cell_ids.into(),
            operator,
            target,
            hide_operator,
        };
        validate(&cage)?;
        Ok(cage)
    }

    /// The number on the cage
    pub fn target(&self) -> Value {
        self.target
    }

    /// The math operator on the cage
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// True if the operator is hidden from the player
    pub fn is_operator_hidden(&self) -> bool {
        self.hide_operator
    }

    /// The IDs of the cells in the cage, in definition order
    pub fn cell_ids(&self) -> &[CellId] {
        &self.cell_ids
    }

    pub fn cell_count(&self) -> usize {
        self.cell_ids.len()
    }
}

fn validate(cage: &Cage) -> Result<(), InvalidPuzzle> {
    if cage.target < 1 {
        return Err(InvalidPuzzle::new(format!(
            "cage target ({}) must be positive",
            cage.target
        )));
    }
    match cage.operator {
        Operator::Nop => {
            if cage.cell_ids.len() != 1 {
                return Err(InvalidPuzzle::new(format!(
                    "cage without an operator must have exactly one cell, not {}",
                    cage.cell_ids.len()
                )));
            }
        }
        Operator::Subtract | Operator::Divide => {
            if cage.cell_ids.len() != 2 {
                return Err(InvalidPuzzle::new(format!(
                    "cage operator ({}) requires exactly two cells, not {}",
                    cage.operator.symbol().unwrap(),
                    cage.cell_ids.len()
                )));
            }
        }
        Operator::Add | Operator::Multiply => {
            if cage.cell_ids.is_empty() {
                return Err(InvalidPuzzle::new("cage cell_ids must not be empty".into()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cage, Operator};

    #[test]
    fn subtract_cage_requires_two_cells() {
        assert!(Cage::new(vec![0, 1, 2], Operator::Subtract, 1, false).is_err());
        assert!(Cage::new(vec![0, 1], Operator::Subtract, 1, false).is_ok());
    }

    #[test]
    fn single_cell_cage_requires_nop() {
        assert!(Cage::new(vec![3], Operator::Nop, 2, false).is_ok());
        assert!(Cage::new(vec![3, 4], Operator::Nop, 2, false).is_err());
    }

    #[test]
    fn target_must_be_positive() {
        assert!(Cage::new(vec![0, 1], Operator::Add, 0, false).is_err());
    }
}
