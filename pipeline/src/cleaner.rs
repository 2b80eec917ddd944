use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use crate::error::{PipelineError, Result};

/// Row counts observed by a cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanSummary {
    /// Rows read from the raw file.
    pub read: usize,
    /// Rows that survived cleaning.
    pub written: usize,
}

/// Cleans a delimited dataset file.
///
/// Headers are whitespace-trimmed. Every cell is trimmed and lowercased,
/// then coerced to a number; cells that do not parse count as missing.
/// Rows with any missing cell are dropped, as are exact duplicates of an
/// earlier row. Surviving rows keep their original relative order.
///
/// # Errors
/// Returns `FileNotFound` if `input` does not exist, and I/O or CSV errors
/// for unreadable or malformed files.
pub fn clean_file(input: &Path, output: &Path) -> Result<CleanSummary> {
    let file = File::open(input).map_err(|e| PipelineError::from_io(input, e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut read = 0;
    let mut seen = HashSet::new();
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for record in reader.records() {
        let record = record?;
        read += 1;

        let Some(values) = coerce_row(&record) else {
            debug!("dropping row {read}: missing or non-numeric cell");
            continue;
        };

        // Exact-duplicate detection on the bit patterns, first occurrence wins.
        let key: Vec<u64> = values.iter().map(|v| v.to_bits()).collect();
        if !seen.insert(key) {
            debug!("dropping row {read}: duplicate");
            continue;
        }

        rows.push(values);
    }

    let out = File::create(output).map_err(|e| PipelineError::from_io(output, e))?;
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(&headers)?;
    for row in &rows {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush().map_err(|e| PipelineError::from_io(output, e))?;

    Ok(CleanSummary {
        read,
        written: rows.len(),
    })
}

/// Normalizes one record into numeric cells, or `None` if any cell is
/// missing or fails coercion. Non-finite values ("nan", "inf") count as
/// missing.
fn coerce_row(record: &csv::StringRecord) -> Option<Vec<f64>> {
    record
        .iter()
        .map(|cell| match cell.trim().to_lowercase().parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => None,
        })
        .collect()
}
