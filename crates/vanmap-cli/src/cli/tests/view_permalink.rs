//! Tests for view and permalink subcommands.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_view_with_query() {
    match parse(&["vanmap", "view", "?lat=49.28&lng=-123.12&zoom=14"]) {
        CliCommand::View { query } => {
            assert_eq!(query.as_deref(), Some("?lat=49.28&lng=-123.12&zoom=14"));
        }
        _ => panic!("expected View"),
    }
}

#[test]
fn cli_parse_view_without_query() {
    match parse(&["vanmap", "view"]) {
        CliCommand::View { query } => assert!(query.is_none()),
        _ => panic!("expected View without query"),
    }
}

#[test]
fn cli_parse_permalink_defaults() {
    match parse(&["vanmap", "permalink"]) {
        CliCommand::Permalink { lng, lat, zoom } => {
            assert!(lng.is_none());
            assert!(lat.is_none());
            assert!(zoom.is_none());
        }
        _ => panic!("expected Permalink"),
    }
}

#[test]
fn cli_parse_permalink_coordinates() {
    match parse(&["vanmap", "permalink", "--lat", "49.28", "--lng", "-123.12", "--zoom", "14"]) {
        CliCommand::Permalink { lng, lat, zoom } => {
            assert_eq!(lng, Some(-123.12));
            assert_eq!(lat, Some(49.28));
            assert_eq!(zoom, Some(14.0));
        }
        _ => panic!("expected Permalink with coordinates"),
    }
}
