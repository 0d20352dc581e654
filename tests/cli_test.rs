use clap::Parser;
use std::path::Path;
use trainstat::cli::{Cli, OutputFormat};
use trainstat::types::Package;

#[test]
fn parses_packages_and_format() {
    let cli =
        Cli::try_parse_from(["trainstat", "RUN:15000,1,75", "--format", "json"]).unwrap();
    assert_eq!(
        cli.packages,
        [Package("RUN".to_string(), vec![15000.0, 1.0, 75.0])]
    );
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(cli.file.is_none());
}

#[test]
fn defaults_without_arguments() {
    let cli = Cli::try_parse_from(["trainstat"]).unwrap();
    assert!(cli.packages.is_empty());
    assert_eq!(cli.format, OutputFormat::Text);
    assert_eq!((cli.verbose, cli.quiet), (0, 0));
}

#[test]
fn keeps_package_order_and_counts_verbosity() {
    let cli = Cli::try_parse_from([
        "trainstat",
        "-vv",
        "--file",
        "packages.json",
        "SWM:720,1,80,25,40",
        "WLK:9000,1,75,180",
    ])
    .unwrap();
    let codes: Vec<&str> = cli.packages.iter().map(Package::code).collect();
    assert_eq!(codes, ["SWM", "WLK"]);
    assert_eq!(cli.file.as_deref(), Some(Path::new("packages.json")));
    assert_eq!(cli.verbose, 2);
}

#[test]
fn rejects_malformed_package_and_format() {
    assert!(Cli::try_parse_from(["trainstat", "RUN:15000,,75"]).is_err());
    assert!(Cli::try_parse_from(["trainstat", "RUN"]).is_err());
    assert!(Cli::try_parse_from(["trainstat", "--format", "xml"]).is_err());
}
