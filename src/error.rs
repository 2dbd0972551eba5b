use ca_formats::rle::Error as RleError;
use ca_rules::ParseRuleError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// All kinds of errors in this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Width and height must both be positive.
    #[error("Width and height should be positive, got {width}x{height}.")]
    InvalidDimensions { width: i64, height: i64 },
    /// A world needs at least one living cell to start from.
    #[error("The set of initial cells should not be empty.")]
    EmptyInitialState,
    /// An initial cell lies outside the grid.
    #[error("Cell ({x}, {y}) lies outside the grid.")]
    CellOutOfBounds { x: i64, y: i64 },
    /// Invalid rulestring in a pattern header.
    #[error("Invalid rule: {0}")]
    ParseRule(#[from] ParseRuleError),
    /// Only B3/S23 is supported.
    #[error("Unsupported rule {0:?}. Only B3/S23 is supported.")]
    UnsupportedRule(String),
    /// Malformed RLE input.
    #[error("Invalid RLE: {0}")]
    Rle(#[from] RleError),
}
