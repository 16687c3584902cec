//! Unit tests for domain error types

use tinyembed_domain::Error;

#[test]
fn test_dimension_mismatch_display() {
    let error = Error::dimension_mismatch(384, 768);
    assert_eq!(
        error.to_string(),
        "Dimension mismatch: left vector has 384 dimensions, right vector has 768"
    );
}

#[test]
fn test_zero_vector_error() {
    let error = Error::zero_vector("query");
    match error {
        Error::ZeroVector { argument } => assert_eq!(argument, "query"),
        _ => panic!("Expected ZeroVector error"),
    }
}

#[test]
fn test_engine_errors_display_their_cause() {
    let engine_errors = [
        Error::dimension_mismatch(1, 2),
        Error::zero_vector("left"),
        Error::EmptyVector,
        Error::invalid_encoding("bad"),
    ];
    let messages: Vec<String> = engine_errors.iter().map(ToString::to_string).collect();
    assert!(messages[0].starts_with("Dimension mismatch"));
    assert!(messages[1].contains("left has zero magnitude"));
    assert!(messages[2].starts_with("Empty vector"));
    assert_eq!(messages[3], "Invalid embedding encoding: bad");
}

#[test]
fn test_collaborator_errors_display_verbatim() {
    let error = Error::embedding("model not loaded in runtime");
    assert!(error.to_string().ends_with("model not loaded in runtime"));
    assert!(matches!(error, Error::Embedding { .. }));

    let error = Error::model_lifecycle("hardware unsupported");
    assert!(error.to_string().contains("hardware unsupported"));
}

#[test]
fn test_invalid_state_error() {
    let error = Error::invalid_state("load a model", "model-loading");
    assert_eq!(
        error.to_string(),
        "Cannot load a model while session is model-loading"
    );
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: Error = io.into();
    assert!(matches!(error, Error::IoSimple { .. }));
}

#[test]
fn test_configuration_error_has_no_source() {
    let error = Error::configuration("Search limit cannot be 0");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Search limit cannot be 0");
            assert!(source.is_none());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}
