use thiserror::Error;

/// Errors raised by matrix operations, the regression engine and the loader.
#[derive(Error, Debug)]
pub enum LinregError {
    /// Matrix source was empty or jagged.
    #[error("Invalid matrix: {0}")]
    Shape(String),

    /// Operand shapes (rows, cols) are incompatible for `op`.
    #[error("Dimension mismatch in {op}: left is {left:?}, right is {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Not a square matrix: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation requested in the wrong lifecycle state.
    #[error("Invalid state: {0}")]
    State(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited input (unterminated quote, invalid UTF-8).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not parse {value:?} as a number (line {line}, column {column})")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },
}

impl LinregError {
    pub(crate) fn mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        LinregError::DimensionMismatch { op, left, right }
    }
}

/// Result type for fallible linreg operations
pub type LinregResult<T> = Result<T, LinregError>;
