pub mod range_set;
pub mod square;

pub use self::square::Square;
