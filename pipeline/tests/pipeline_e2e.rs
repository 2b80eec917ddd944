use std::fs;
use std::path::PathBuf;

use pipeline::{artifact, cleaner, trainer};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pipeline_e2e_{}_{name}", std::process::id()))
}

#[test]
fn raw_file_to_artifact_end_to_end() {
    let raw = temp_path("raw.csv");
    let cleaned = temp_path("cleaned.csv");
    let model_path = temp_path("model.json");

    // Dirty input: padded headers and cells, a missing value, a duplicate
    // and a free-text cell. The numeric rows all lie on y = 10x - 100.
    fs::write(
        &raw,
        " Temperature , Ice Cream Profits \n\
         20,100\n\
         25, 150 \n\
         30,200\n\
         30,200\n\
         ,225\n\
         33,N/A\n\
         35,250\n\
         40,300\n",
    )
    .unwrap();

    let summary = cleaner::clean_file(&raw, &cleaned).unwrap();
    assert_eq!(summary.read, 8);
    assert_eq!(summary.written, 5);

    let outcome = trainer::train_from_csv(&cleaned, "Temperature", "Ice Cream Profits").unwrap();
    artifact::save(&outcome.model, &model_path).unwrap();
    let loaded = artifact::load(&model_path).unwrap();

    fs::remove_file(&raw).unwrap();
    fs::remove_file(&cleaned).unwrap();
    fs::remove_file(&model_path).unwrap();

    assert_eq!(loaded, outcome.model);
    assert!((loaded.slope - 10.0).abs() < 1e-9);
    assert!((loaded.intercept + 100.0).abs() < 1e-9);
    assert!((loaded.predict(40.0) - 300.0).abs() < 1e-9);
}

#[test]
fn cleaning_an_already_clean_file_is_a_fixpoint() {
    let raw = temp_path("fix_raw.csv");
    let first = temp_path("fix_first.csv");
    let second = temp_path("fix_second.csv");

    fs::write(
        &raw,
        "Temperature,Ice Cream Profits\n20.5,101\n25,150\n25,150\n31,\n",
    )
    .unwrap();

    cleaner::clean_file(&raw, &first).unwrap();
    let summary = cleaner::clean_file(&first, &second).unwrap();

    let a = fs::read_to_string(&first).unwrap();
    let b = fs::read_to_string(&second).unwrap();

    fs::remove_file(&raw).unwrap();
    fs::remove_file(&first).unwrap();
    fs::remove_file(&second).unwrap();

    assert_eq!(a, b);
    assert_eq!(summary.read, summary.written);
}
