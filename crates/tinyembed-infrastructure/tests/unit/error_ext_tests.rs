//! Error Extension Tests

use std::io;

use tinyembed_domain::error::{Error, Result};
use tinyembed_infrastructure::error_ext::ErrorContext;

#[test]
fn test_io_context() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    match result {
        Err(Error::Io { message, source }) => {
            assert_eq!(message, "failed to read file: file not found");
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let parse_error = "abc".parse::<u64>().unwrap_err();

    let result: Result<u64> = Err(parse_error).config_context("bad timeout");

    assert!(matches!(result, Err(Error::Configuration { source: Some(_), .. })));
}

#[test]
fn test_lazy_context_only_on_error() {
    let ok: std::result::Result<u8, io::Error> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built for Ok") })
        .unwrap();
    assert_eq!(value, 7);

    let err: std::result::Result<u8, io::Error> = Err(io::Error::other("boom"));
    match err.with_context(|| "loading model list") {
        Err(Error::Infrastructure { message, .. }) => {
            assert_eq!(message, "loading model list: boom");
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}
