use crate::cli::OutputFormat;
use crate::dlog;
use crate::package::read_package;
use crate::training::Training;
use crate::types::Package;
use anyhow::{Context, Result};
use std::io::Write;

/// Write one summary line for a single workout.
pub fn print_training(
    training: &impl Training,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let info = training.show_training_info();
    let line = match format {
        OutputFormat::Text => info.get_message(),
        OutputFormat::Json => info.to_json().context("serializing summary")?,
    };
    writeln!(out, "{line}").context("writing summary")?;
    Ok(())
}

/// Dispatch every package in input order and write its summary.
///
/// Stops at the first package that cannot be read. Returns the number of summaries written.
pub fn show(packages: &[Package], format: OutputFormat, out: &mut impl Write) -> Result<usize> {
    for (i, p) in packages.iter().enumerate() {
        let training = read_package(p.code(), p.fields())
            .with_context(|| format!("package #{} ({})", i + 1, p.code()))?;
        dlog!("package={} type={}", i + 1, training.name());
        print_training(&training, format, out)?;
    }
    Ok(packages.len())
}
