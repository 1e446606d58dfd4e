//! Catalog gap filling

use crate::cli::{Cli, FillArgs};
use anyhow::Context;
use exocat_catalog::{csv_io, Catalog, CatalogError, Pipeline};

pub fn run(args: &FillArgs, cli: &Cli) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input catalog does not exist: {:?}", args.input);
    }
    let config = crate::load_config(args.config.as_deref())?;
    let pipeline = Pipeline::from_config(&config).context("Invalid pipeline configuration")?;
    print_plan(args, &pipeline, cli);

    let catalog = csv_io::read_csv_path(&args.input)
        .with_context(|| format!("Failed to read {:?}", args.input))?;
    let filled = match pipeline.run(&catalog) {
        Ok(filled) => filled,
        Err(err) if err.is_recoverable() => {
            anyhow::bail!("{}\nAdjust the step's [step.columns] mapping or drop the step", err)
        }
        Err(err) => return Err(err.into()),
    };

    csv_io::write_csv_path(&filled, &args.output)
        .with_context(|| format!("Failed to write {:?}", args.output))?;
    print_summary(&catalog, &filled);
    Ok(())
}

fn print_plan(args: &FillArgs, pipeline: &Pipeline, cli: &Cli) {
    println!("Input:  {:?}", args.input);
    println!("Output: {:?}", args.output);
    match &args.config {
        Some(path) => println!("Config: {:?}", path),
        None => println!("Config: standard pipeline"),
    }
    println!("Steps:  {}", pipeline.len());
    if cli.verbose {
        for (i, (name, description)) in pipeline.describe().iter().enumerate() {
            println!("  {:>2}. {:<18} {}", i + 1, name, description);
        }
    }
    println!();
}

fn print_summary(before: &Catalog, after: &Catalog) {
    println!("Rows: {}", after.len());
    for name in after.column_names() {
        let filled = defined_count(after, name);
        let was = defined_count(before, name);
        if filled != was {
            println!("  {:<28} {:>6} -> {:>6} defined", name, was, filled);
        }
    }
}

fn defined_count(catalog: &Catalog, name: &str) -> usize {
    match catalog.numeric(name) {
        Ok(values) => values.iter().filter(|v| v.is_some()).count(),
        Err(CatalogError::MissingColumn { .. }) => 0,
        Err(_) => catalog
            .text(name)
            .map(|values| values.iter().filter(|v| v.is_some()).count())
            .unwrap_or(0),
    }
}
