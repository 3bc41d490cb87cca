//! Synthesizes the CC/OD account dataset and writes it to CSV in the
//! working directory. Runs once, top to bottom, and exits.

use std::path::Path;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use findata_tools::assembler::assemble_dataset;
use findata_tools::config::GenConfig;
use findata_tools::dataset::write_csv;

const OUTPUT: &str = "synthetic_cc_od_data.csv";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = GenConfig::default();
    let mut rng = StdRng::seed_from_u64(cfg.seed);

    let records = assemble_dataset(&cfg, &mut rng)?;
    write_csv(&records, Path::new(OUTPUT))?;

    info!(records = records.len(), seed = cfg.seed, "synthetic dataset saved as {OUTPUT}");
    Ok(())
}
