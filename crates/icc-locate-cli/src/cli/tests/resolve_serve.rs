//! Tests for resolve and serve subcommands.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;

#[test]
fn cli_parse_resolve() {
    match parse(&["icc-locate", "resolve", "example.com/app"]) {
        CliCommand::Resolve { path } => assert_eq!(path, "example.com/app"),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_resolve_has_no_origin_flag() {
    assert!(crate::cli::Cli::try_parse_from([
        "icc-locate",
        "resolve",
        "sites/app",
        "--origin",
        "http://localhost:8080/",
    ])
    .is_err());
}

#[test]
fn cli_parse_resolve_requires_path() {
    assert!(crate::cli::Cli::try_parse_from(["icc-locate", "resolve"]).is_err());
}

#[test]
fn cli_parse_serve() {
    match parse(&["icc-locate", "serve"]) {
        CliCommand::Serve { listen } => assert!(listen.is_none()),
        _ => panic!("expected Serve"),
    }
    match parse(&["icc-locate", "serve", "--listen", "0.0.0.0:9000"]) {
        CliCommand::Serve { listen } => assert_eq!(listen.as_deref(), Some("0.0.0.0:9000")),
        _ => panic!("expected Serve with --listen"),
    }
}
