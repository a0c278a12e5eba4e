use grid_util::point::Point;
use thiserror::Error;

/// Reasons a search refuses to run or stops early. A goal that cannot be reached is not an
/// error; see [SearchStatus](crate::SearchStatus).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A start or goal cell lies outside the grid.
    #[error("{point} is outside of the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
    /// The number of cells does not match `width * height`.
    #[error("grid of {expected} cells was given {actual} cells")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("invalid search option: {0}")]
    InvalidOption(String),
    /// The search was stopped through its [CancelToken](crate::CancelToken).
    #[error("search was cancelled")]
    Cancelled,
}

/// Errors produced while reading a grid from its text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("grid text contains no rows")]
    Empty,
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown terrain symbol {symbol:?} at ({x}, {y})")]
    UnknownSymbol { symbol: char, x: usize, y: usize },
}
