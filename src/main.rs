#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use trainstat::{cli, package, report, types::Package, utils};

#[macro_use]
extern crate trainstat;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let mut packages: Vec<Package> = Vec::new();
    if let Some(path) = cli.file.as_deref() {
        packages.extend(utils::load_packages(path)?);
    }
    packages.extend(cli.packages);

    if packages.is_empty() {
        dlog!("no packages given; using demo packages");
        packages = package::demo_packages();
    }

    dlog!("mode=show packages={} format={:?}", packages.len(), cli.format);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let shown = report::show(&packages, cli.format, &mut out)?;
    out.flush()?;

    tracing::info!(workouts = shown, "done");
    Ok(())
}
