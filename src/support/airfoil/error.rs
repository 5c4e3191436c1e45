use thiserror::Error;

/// Errors raised while building airfoil tables.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AirfoilError {
    /// A table is malformed and cannot be interpolated.
    #[error("invalid airfoil table: {0}")]
    InvalidTable(#[from] TableDefect),

    /// No tables were supplied.
    #[error("airfoil interpolator requires at least one table")]
    Empty,
}

/// The specific defect that made a table invalid.
///
/// Sample indices refer to the order in which samples were supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableDefect {
    #[error("{count} samples given, at least 2 are required")]
    TooFewSamples { count: usize },

    #[error("angle of attack at sample {index} repeats the previous sample")]
    DuplicateAngle { index: usize },

    #[error("angle of attack at sample {index} is below the previous sample")]
    NonMonotonic { index: usize },

    #[error("sample {index} contains a non-finite value")]
    NonFinite { index: usize },

    #[error("Reynolds number of table {index} is not a finite positive value")]
    InvalidReynolds { index: usize },

    #[error("Reynolds number of table {index} is used by another table")]
    DuplicateReynolds { index: usize },
}
