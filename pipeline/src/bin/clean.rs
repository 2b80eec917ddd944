use std::env;
use std::path::Path;

use log::info;

use pipeline::cleaner;

const DEFAULT_RAW: &str = "data/ice-cream-temp.csv";
const DEFAULT_CLEAN: &str = "data/cleaned_icecreamdata.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let input = env::var("RAW_DATA").unwrap_or_else(|_| DEFAULT_RAW.to_string());
    let output = env::var("CLEAN_DATA").unwrap_or_else(|_| DEFAULT_CLEAN.to_string());

    info!("cleaning {input}");
    let summary = cleaner::clean_file(Path::new(&input), Path::new(&output))?;
    info!(
        "cleaned data saved to {output}: kept {} of {} rows",
        summary.written, summary.read
    );

    Ok(())
}
