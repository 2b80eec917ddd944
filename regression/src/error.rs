use std::fmt;

/// Errors produced while building datasets or fitting models.
#[derive(Debug)]
pub enum RegressionError {
    /// Paired columns have different lengths.
    LengthMismatch { xs: usize, ys: usize },

    /// The operation requires more samples than the dataset provides.
    NotEnoughSamples { got: usize, required: usize },

    /// The test fraction must lie strictly between 0 and 1.
    InvalidTestFraction { fraction: f64 },

    /// The requested split would leave one of the partitions empty.
    DegenerateSplit { len: usize, fraction: f64 },

    /// The feature column has zero variance, so the slope is undefined.
    ZeroVariance,
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionError::LengthMismatch { xs, ys } => {
                write!(f, "column length mismatch: {xs} features, {ys} targets")
            }
            RegressionError::NotEnoughSamples { got, required } => {
                write!(f, "not enough samples: got {got}, required {required}")
            }
            RegressionError::InvalidTestFraction { fraction } => {
                write!(f, "test fraction {fraction} is outside (0, 1)")
            }
            RegressionError::DegenerateSplit { len, fraction } => {
                write!(
                    f,
                    "splitting {len} samples with test fraction {fraction} leaves a partition empty"
                )
            }
            RegressionError::ZeroVariance => {
                write!(f, "feature column has zero variance")
            }
        }
    }
}

impl std::error::Error for RegressionError {}
