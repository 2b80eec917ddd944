use std::{error::Error, fmt, io, path::PathBuf};

use regression::RegressionError;

/// The pipeline module's result type.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Failures across the cleaning and training stages.
#[derive(Debug)]
pub enum PipelineError {
    /// An input file (raw data, cleaned data or artifact) does not exist.
    FileNotFound { path: PathBuf },

    /// An underlying I/O error not covered by the above variant.
    Io(io::Error),

    /// A malformed delimited file.
    Csv(csv::Error),

    /// A required column is absent from the header row.
    MissingColumn { name: String },

    /// A cell that was expected to be numeric failed to parse.
    InvalidCell { row: usize, column: String },

    /// A dataset or model invariant was violated downstream.
    Regression(RegressionError),

    /// The artifact could not be encoded or decoded.
    Artifact(serde_json::Error),
}

impl PipelineError {
    /// Maps an I/O failure on `path`, distinguishing the missing-file case.
    pub(crate) fn from_io(path: &std::path::Path, e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(e)
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::FileNotFound { path } => {
                write!(f, "file not found: {}", path.display())
            }
            PipelineError::Io(e) => write!(f, "io error: {e}"),
            PipelineError::Csv(e) => write!(f, "csv error: {e}"),
            PipelineError::MissingColumn { name } => {
                write!(f, "missing column: {name}")
            }
            PipelineError::InvalidCell { row, column } => {
                write!(f, "non-numeric cell at row {row}, column {column}")
            }
            PipelineError::Regression(e) => write!(f, "regression error: {e}"),
            PipelineError::Artifact(e) => write!(f, "artifact error: {e}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Io(e) => Some(e),
            PipelineError::Csv(e) => Some(e),
            PipelineError::Regression(e) => Some(e),
            PipelineError::Artifact(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for PipelineError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<RegressionError> for PipelineError {
    fn from(value: RegressionError) -> Self {
        Self::Regression(value)
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(value: serde_json::Error) -> Self {
        Self::Artifact(value)
    }
}
