//! Enumeration of the digit tuples a cage can legally hold
//!
//! The generator is a pure function of the cage description. Each returned
//! tuple corresponds one to one with the given cell coordinates and
//! satisfies the cage's math constraint as well as the no-repeat rule for
//! digits within the cage's own rows and columns. Digits in cells outside
//! the cage are not considered; a solver combining cages must intersect
//! results itself.

use crate::collections::square::Coord;
use crate::puzzle::Operator;
use crate::{HashSet, Value};

/// All digit tuples satisfying the given cage constraint
///
/// `coords` holds the position of every cage cell; the tuples are ordered to
/// match it. Returns an empty list when no assignment works.
///
/// # Panics
///
/// Panics if the number of coordinates violates the operator's arity
/// (cages are validated at construction, so this is a caller bug).
pub fn combos(operator: Operator, target: Value, coords: &[Coord], width: usize) -> Vec<Vec<Value>> {
    let combos = match operator {
        Operator::Nop => {
            assert_eq!(1, coords.len());
            if target >= 1 && target <= width as Value {
                vec![vec![target]]
            } else {
                Vec::new()
            }
        }
        Operator::Subtract => pair_combos(coords, width, |a, b| a - b == target || b - a == target),
        Operator::Divide => pair_combos(coords, width, |a, b| target * a == b || target * b == a),
        Operator::Add => {
            let mut gen = Generator::new(coords, width);
            gen.collect_add(target);
            gen.results
        }
        Operator::Multiply => {
            let mut gen = Generator::new(coords, width);
            gen.collect_multiply(target);
            gen.results
        }
    };
    debug!(
        "cage at {:?} ({}{}): {} combos",
        coords.first(),
        target,
        operator.symbol().unwrap_or(' '),
        combos.len()
    );
    combos
}

/// All digit tuples for a cage whose operator is hidden from the player
///
/// One cell can only hold the target itself. Two cells may combine with any
/// of the four operators. Three or more cells can only add or multiply, so
/// the result is the deduplicated union of both enumerations.
pub fn hidden_combos(target: Value, coords: &[Coord], width: usize) -> Vec<Vec<Value>> {
    match coords.len() {
        0 => panic!("cage has no cells"),
        1 => combos(Operator::Nop, target, coords, width),
        2 => pair_combos(coords, width, |a, b| {
            a - b == target
                || b - a == target
                || target * a == b
                || target * b == a
                || a + b == target
                || a * b == target
        }),
        _ => {
            let mut all = combos(Operator::Add, target, coords, width);
            let mut seen: HashSet<Vec<Value>> = all.iter().cloned().collect();
            for combo in combos(Operator::Multiply, target, coords, width) {
                if seen.insert(combo.clone()) {
                    all.push(combo);
                }
            }
            all
        }
    }
}

/// Enumerates both orders of every digit pair accepted by `satisfies`
fn pair_combos(
    coords: &[Coord],
    width: usize,
    satisfies: impl Fn(Value, Value) -> bool,
) -> Vec<Vec<Value>> {
    assert_eq!(2, coords.len());
    let mut results = Vec::new();
    for a in 1..=width as Value {
        for b in a + 1..=width as Value {
            if satisfies(a, b) {
                for combo in &[vec![a, b], vec![b, a]] {
                    if satisfies_constraints(combo, coords, width) {
                        results.push(combo.clone());
                    }
                }
            }
        }
    }
    results
}

/// Backtracking enumeration for Add and Multiply cages
struct Generator<'a> {
    coords: &'a [Coord],
    width: usize,
    stack: Vec<Value>,
    results: Vec<Vec<Value>>,
}

impl<'a> Generator<'a> {
    fn new(coords: &'a [Coord], width: usize) -> Self {
        assert!(!coords.is_empty());
        Self {
            coords,
            width,
            stack: Vec::with_capacity(coords.len()),
            results: Vec::new(),
        }
    }

    /// Digits tried at every position, the remainder carried as `target - digit`
    fn collect_add(&mut self, remaining: Value) {
        if self.stack.len() == self.coords.len() - 1 {
            // the last cell must absorb the remainder exactly
            self.try_leaf(remaining);
            return;
        }
        for digit in 1..=self.width as Value {
            self.stack.push(digit);
            self.collect_add(remaining - digit);
            self.stack.pop();
        }
    }

    /// Only divisors of the remaining target are tried at each position
    fn collect_multiply(&mut self, remaining: Value) {
        if self.stack.len() == self.coords.len() - 1 {
            self.try_leaf(remaining);
            return;
        }
        for digit in 1..=self.width as Value {
            if remaining % digit != 0 {
                continue;
            }
            self.stack.push(digit);
            self.collect_multiply(remaining / digit);
            self.stack.pop();
        }
    }

    fn try_leaf(&mut self, digit: Value) {
        if digit < 1 || digit > self.width as Value {
            return;
        }
        self.stack.push(digit);
        if satisfies_constraints(&self.stack, self.coords, self.width) {
            self.results.push(self.stack.clone());
        }
        self.stack.pop();
    }
}

/// Checks that the tuple repeats no digit within any row or column spanned
/// by the cage's cells
fn satisfies_constraints(combo: &[Value], coords: &[Coord], width: usize) -> bool {
    // one table entry per (digit, row) and (digit, column) pair
    let mut row_used = vec![false; width * width];
    let mut col_used = vec![false; width * width];
    for (&digit, coord) in combo.iter().zip(coords) {
        let row_index = (digit as usize - 1) * width + coord.row();
        if row_used[row_index] {
            return false;
        }
        row_used[row_index] = true;

        let col_index = (digit as usize - 1) * width + coord.col();
        if col_used[col_index] {
            return false;
        }
        col_used[col_index] = true;
    }
    true
}
