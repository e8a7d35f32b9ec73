//! Play-state and consistency engine for MathDoku (KenKen) puzzles
//!
//! A puzzle is a square grid of cells grouped into cages. Every cage carries
//! a math operator and a target number; a solution fills every cell with a
//! digit `1..=width` such that no digit repeats in a row or column and every
//! cage's digits produce its target.
//!
//! The crate provides three things:
//!
//! * [`puzzle::Puzzle`]: the static puzzle definition (cages and solution)
//! * [`combos`]: enumeration of all digit tuples a cage can legally hold
//! * [`play::PlayGrid`]: the mutable play state, holding user values,
//!   candidate digits, duplicate/cage-math flags and a tree-shaped undo
//!   history
//!
//! Rendering, input handling and persistence are out of scope; the play grid
//! exposes read-only accessors for those collaborators instead.

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod combos;
pub mod error;
pub mod play;
pub mod puzzle;

pub(crate) type HashSet<T> = std::collections::HashSet<T, ahash::RandomState>;

/// A digit in a cell, `1..=width`. `0` marks an empty user value.
pub type Value = i32;

/// Index of a cell in the grid, `row * width + col`
pub type CellId = usize;

/// Index of a cage in the puzzle's cage list
pub type CageId = usize;
