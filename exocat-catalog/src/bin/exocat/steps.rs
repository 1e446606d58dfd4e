//! Pipeline listing

use crate::cli::StepsArgs;
use anyhow::Context;
use exocat_catalog::Pipeline;

pub fn run(args: &StepsArgs) -> anyhow::Result<()> {
    let config = crate::load_config(args.config.as_deref())?;
    if args.toml {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }
    let pipeline = Pipeline::from_config(&config).context("Invalid pipeline configuration")?;
    for (i, (name, description)) in pipeline.describe().iter().enumerate() {
        println!("{:>2}. {:<18} {}", i + 1, name, description);
    }
    Ok(())
}
