use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use regression::LinearModel;

use crate::error::{PipelineError, Result};

/// Writes the fitted model to `path` as JSON.
///
/// # Errors
/// Returns an I/O error if the file cannot be created, or an encoding
/// error from the serializer.
pub fn save(model: &LinearModel, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| PipelineError::from_io(path, e))?;
    serde_json::to_writer(BufWriter::new(file), model)?;
    Ok(())
}

/// Reads a fitted model back from `path`.
///
/// # Errors
/// Returns `FileNotFound` if the artifact does not exist, or a decoding
/// error for a malformed artifact.
pub fn load(path: &Path) -> Result<LinearModel> {
    let file = File::open(path).map_err(|e| PipelineError::from_io(path, e))?;
    let model = serde_json::from_reader(BufReader::new(file))?;
    Ok(model)
}
