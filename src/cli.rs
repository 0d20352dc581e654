use crate::types::Package;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per workout.
    #[default]
    Text,
    /// One JSON object per workout.
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "trainstat",
    about = "Compute distance, mean speed and calories from workout sensor packages"
)]
pub struct Cli {
    /// Packages as CODE:f1,f2,... (SWM, RUN or WLK), processed in order.
    ///
    /// Default: the built-in demo packages.
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<Package>,

    /// JSON file with a list of ["CODE", [fields...]] pairs, read before PACKAGE args.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Summary format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count)]
    pub quiet: u8,
}
