use thiserror::Error;

/// A structural violation found while constructing a puzzle
///
/// The engine never repairs an invalid definition; the loader decides
/// whether to abort or fall back to a different puzzle.
#[derive(Error, Debug)]
#[error("invalid puzzle: {}", msg)]
pub struct InvalidPuzzle {
    msg: String,
}

impl InvalidPuzzle {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}
