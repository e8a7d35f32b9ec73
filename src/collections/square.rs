use std::convert::TryFrom;
use std::fmt;
use std::fmt::Debug;
use std::ops::{Index, IndexMut};

/// Coordinates of an element in a `Square`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Coord([usize; 2]);

impl Coord {
    pub fn new(col: usize, row: usize) -> Self {
        Self([col, row])
    }

    pub fn col(self) -> usize {
        self.0[0]
    }

    pub fn row(self) -> usize {
        self.0[1]
    }

    /// True if the two coordinates share a row or a column
    pub fn shares_vector(self, other: Coord) -> bool {
        self.row() == other.row() || self.col() == other.col()
    }

    pub fn as_index(self, width: usize) -> usize {
        self.row() * width + self.col()
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col(), self.row())
    }
}

/// A square grid of values stored in row-major order
#[derive(Clone, Debug, PartialEq)]
pub struct Square<T> {
    width: usize,
    elements: Vec<T>,
}

impl<T> Square<T> {
    pub fn with_width_and_value(width: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            elements: vec![value; width.pow(2)],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn row_at(&self, index: usize) -> usize {
        assert!(index < self.len());
        index / self.width
    }

    pub fn col_at(&self, index: usize) -> usize {
        assert!(index < self.len());
        index % self.width
    }

    pub fn coord_at(&self, index: usize) -> Coord {
        Coord::new(self.col_at(index), self.row_at(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }
}

/// Error converting a `Vec` whose length is not a perfect square
#[derive(Debug, PartialEq)]
pub struct NonSquareLength(pub usize);

impl<T> TryFrom<Vec<T>> for Square<T> {
    type Error = NonSquareLength;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        let width = (elements.len() as f64).sqrt() as usize;
        if elements.len() != width.pow(2) {
            return Err(NonSquareLength(elements.len()));
        }
        Ok(Self { width, elements })
    }
}

impl<T> Index<usize> for Square<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for Square<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T> Index<Coord> for Square<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        &self.elements[coord.as_index(self.width)]
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, NonSquareLength, Square};
    use std::convert::TryFrom;

    #[test]
    fn try_from_vec() {
        assert!(Square::try_from(vec![1; 9]).is_ok())
    }

    #[test]
    fn try_from_non_square_vec() {
        assert_eq!(Err(NonSquareLength(8)), Square::try_from(vec![1; 8]))
    }

    #[test]
    fn coords() {
        let square = Square::with_width_and_value(3, 0);
        assert_eq!(Coord::new(1, 2), square.coord_at(7));
        assert_eq!(7, square.coord_at(7).as_index(3));
    }

    #[test]
    fn shares_vector() {
        assert!(Coord::new(0, 2).shares_vector(Coord::new(2, 2)));
        assert!(Coord::new(1, 0).shares_vector(Coord::new(1, 2)));
        assert!(!Coord::new(0, 0).shares_vector(Coord::new(1, 1)));
    }
}
