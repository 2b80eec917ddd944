use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use regression::{train_test_split, Dataset, LinearModel};

use crate::error::{PipelineError, Result};

/// Seed for the train/test shuffle, fixed so re-runs are reproducible.
pub const SPLIT_SEED: u64 = 42;

/// Share of rows held out of the fit.
pub const TEST_FRACTION: f64 = 0.2;

/// A fitted model together with the partition sizes that produced it.
#[derive(Debug, Clone, Copy)]
pub struct TrainOutcome {
    pub model: LinearModel,
    pub train_len: usize,
    pub test_len: usize,
}

/// Trains a linear model from a cleaned dataset file.
///
/// Loads the `feature` and `target` columns, splits the rows 80/20 with the
/// fixed seed and fits an ordinary-least-squares line on the training
/// partition. The held-out partition is carried in the outcome but not
/// evaluated.
///
/// # Errors
/// Returns `FileNotFound` if `input` does not exist, `MissingColumn` if a
/// requested column is absent, `InvalidCell` for non-numeric data, and a
/// wrapped `RegressionError` if the split or fit fails.
pub fn train_from_csv(input: &Path, feature: &str, target: &str) -> Result<TrainOutcome> {
    let (xs, ys) = load_columns(input, feature, target)?;
    let dataset = Dataset::new(xs, ys)?;

    let (train, test) = train_test_split(&dataset, TEST_FRACTION, SPLIT_SEED)?;
    info!(
        "split {} rows into {} train / {} test",
        dataset.len(),
        train.len(),
        test.len()
    );

    let model = LinearModel::fit(train.xs(), train.ys())?;

    Ok(TrainOutcome {
        model,
        train_len: train.len(),
        test_len: test.len(),
    })
}

/// Reads two numeric columns from a delimited file, matching header names
/// after trimming.
fn load_columns(input: &Path, feature: &str, target: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let file = File::open(input).map_err(|e| PipelineError::from_io(input, e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    let position = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| PipelineError::MissingColumn {
                name: name.to_string(),
            })
    };
    let x_idx = position(feature)?;
    let y_idx = position(target)?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        xs.push(parse_cell(&record, row, x_idx, feature)?);
        ys.push(parse_cell(&record, row, y_idx, target)?);
    }

    Ok((xs, ys))
}

fn parse_cell(record: &csv::StringRecord, row: usize, idx: usize, column: &str) -> Result<f64> {
    record
        .get(idx)
        .and_then(|cell| cell.trim().parse::<f64>().ok())
        .ok_or_else(|| PipelineError::InvalidCell {
            row,
            column: column.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const EPS: f64 = 1e-9;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("trainer_{}_{name}", std::process::id()))
    }

    #[test]
    fn train_recovers_an_exact_fit() {
        let input = temp_path("exact.csv");
        fs::write(
            &input,
            "Temperature,Ice Cream Profits\n20,100\n25,150\n30,200\n35,250\n40,300\n",
        )
        .unwrap();

        let outcome = train_from_csv(&input, "Temperature", "Ice Cream Profits").unwrap();
        fs::remove_file(&input).unwrap();

        // Every point lies on y = 10x - 100, so any 80/20 split fits exactly.
        assert_eq!(outcome.train_len, 4);
        assert_eq!(outcome.test_len, 1);
        assert!((outcome.model.slope - 10.0).abs() < EPS);
        assert!((outcome.model.intercept + 100.0).abs() < EPS);
        assert!((outcome.model.predict(40.0) - 300.0).abs() < EPS);
    }

    #[test]
    fn train_is_reproducible() {
        let input = temp_path("repro.csv");
        let mut data = String::from("Temperature,Ice Cream Profits\n");
        for i in 0..40 {
            data.push_str(&format!("{},{}\n", 15 + i, 60 + 9 * i + (i % 3)));
        }
        fs::write(&input, &data).unwrap();

        let a = train_from_csv(&input, "Temperature", "Ice Cream Profits").unwrap();
        let b = train_from_csv(&input, "Temperature", "Ice Cream Profits").unwrap();
        fs::remove_file(&input).unwrap();

        assert_eq!(a.model, b.model);
    }

    #[test]
    fn train_reports_a_missing_column() {
        let input = temp_path("missing_col.csv");
        fs::write(&input, "Temperature,Profit\n20,100\n25,150\n").unwrap();

        let err = train_from_csv(&input, "Temperature", "Ice Cream Profits").unwrap_err();
        fs::remove_file(&input).unwrap();

        assert!(matches!(err, PipelineError::MissingColumn { .. }));
    }

    #[test]
    fn train_reports_a_missing_input() {
        let input = temp_path("absent.csv");
        let err = train_from_csv(&input, "Temperature", "Ice Cream Profits").unwrap_err();
        assert!(matches!(err, PipelineError::FileNotFound { .. }));
    }

    #[test]
    fn train_reports_a_non_numeric_cell() {
        let input = temp_path("bad_cell.csv");
        fs::write(
            &input,
            "Temperature,Ice Cream Profits\n20,100\nwarm,150\n30,200\n",
        )
        .unwrap();

        let err = train_from_csv(&input, "Temperature", "Ice Cream Profits").unwrap_err();
        fs::remove_file(&input).unwrap();

        assert!(matches!(err, PipelineError::InvalidCell { row: 1, .. }));
    }
}
