use crate::collections::range_set::RangeSet;
use crate::Value;

/// The candidate digits noted in a cell
///
/// A small abstraction over `RangeSet` for puzzle values. Iteration is
/// always in ascending digit order.
#[derive(Clone, Debug)]
pub struct ValueSet(RangeSet);

impl ValueSet {
    pub fn new(max: usize) -> Self {
        ValueSet(RangeSet::new(max + 1))
    }

    pub fn contains(&self, n: Value) -> bool {
        self.0.contains(n as usize)
    }

    pub fn insert(&mut self, n: Value) -> bool {
        self.0.insert(n as usize)
    }

    pub fn remove(&mut self, n: Value) -> bool {
        self.0.remove(n as usize)
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.0.iter().map(|n| n as Value)
    }

    /// The digits in ascending order, as stored in undo snapshots
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().collect()
    }
}
