//! Error type shared by the smoothing and dispersion operations.
//!
//! Every operation validates its arguments before touching the data, so an
//! error always means no partial result was produced.

use core::fmt::{Display, Formatter};

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, StatsError>;

/// Error type for smoothing and dispersion operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsError {
    /// A smoothing factor was supplied explicitly with a value outside `[0, 1]`.
    InvalidParameter {
        /// Name of the offending parameter (e.g. `"factor"`, `"trend_factor"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A moving-average window must span at least one sample.
    InvalidRun(usize),

    /// The input sequence is too short for the requested operation.
    InvalidInput {
        /// Name of the operation that rejected the input.
        operation: &'static str,
        /// Number of samples provided.
        got: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// A sequence length could not be represented in the sample type.
    UnrepresentableLength(usize),
}

impl Display for StatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter { name, value } => {
                write!(
                    f,
                    "Invalid parameter: {name} = {value} (must be >= 0 and <= 1)"
                )
            }
            Self::InvalidRun(run) => write!(f, "Invalid run: {run} (must be at least 1)"),
            Self::InvalidInput {
                operation,
                got,
                min,
            } => {
                write!(
                    f,
                    "Invalid input for {operation}: got {got} samples, need at least {min}"
                )
            }
            Self::UnrepresentableLength(len) => {
                write!(f, "Length {len} cannot be represented in the sample type")
            }
        }
    }
}

impl core::error::Error for StatsError {}
