//! Tests for classify and describe subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_classify_single_code() {
    match parse(&["vanmap", "classify", "RS-1"]) {
        CliCommand::Classify { codes } => assert_eq!(codes, vec!["RS-1".to_string()]),
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_classify_multiple_codes() {
    match parse(&["vanmap", "classify", "RS-1", "CD-1(103)", "cwd"]) {
        CliCommand::Classify { codes } => {
            assert_eq!(codes, vec!["RS-1", "CD-1(103)", "cwd"]);
        }
        _ => panic!("expected Classify with three codes"),
    }
}

#[test]
fn cli_parse_classify_requires_a_code() {
    assert!(Cli::try_parse_from(["vanmap", "classify"]).is_err());
}

#[test]
fn cli_parse_describe() {
    match parse(&["vanmap", "describe", "parcel.json"]) {
        CliCommand::Describe { path } => assert_eq!(path, "parcel.json"),
        _ => panic!("expected Describe"),
    }
}
