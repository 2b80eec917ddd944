use std::env;
use std::path::Path;

use log::{info, warn};

use pipeline::{artifact, trainer};

const DEFAULT_CLEAN: &str = "data/cleaned_icecreamdata.csv";
const DEFAULT_MODEL: &str = "data/temperature_profits_model.json";

const FEATURE_COLUMN: &str = "Temperature";
const TARGET_COLUMN: &str = "Ice Cream Profits";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let input = env::var("CLEAN_DATA").unwrap_or_else(|_| DEFAULT_CLEAN.to_string());
    let model_path = env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let input = Path::new(&input);
    if !input.exists() {
        warn!("cleaned dataset not found at {}", input.display());
    }

    let outcome = trainer::train_from_csv(input, FEATURE_COLUMN, TARGET_COLUMN)?;
    info!(
        "fitted model on {} rows ({} held out): slope {:.4}, intercept {:.4}",
        outcome.train_len, outcome.test_len, outcome.model.slope, outcome.model.intercept
    );

    artifact::save(&outcome.model, Path::new(&model_path))?;
    info!("model saved to {model_path}");

    Ok(())
}
