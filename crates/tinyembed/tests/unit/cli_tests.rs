//! Command line parsing and execution tests

use clap::Parser;
use tinyembed::cli::{Cli, Command, execute};
use tinyembed::domain::EncodingFormat;
use tinyembed::infrastructure::config::AppConfig;
use tinyembed::infrastructure::init_app;

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "tinyembed",
        "embed",
        "hello",
        "--model",
        "all-minilm",
        "--format",
        "base64",
    ])
    .unwrap();

    assert_eq!(cli.model.as_deref(), Some("all-minilm"));
    assert_eq!(cli.format, Some(EncodingFormat::Base64));
    assert_eq!(
        cli.command,
        Command::Embed {
            text: "hello".to_string()
        }
    );
}

#[test]
fn test_unknown_format_rejected() {
    assert!(Cli::try_parse_from(["tinyembed", "--format", "int8", "probe"]).is_err());
}

#[test]
fn test_search_requires_documents() {
    assert!(Cli::try_parse_from(["tinyembed", "search", "query"]).is_err());

    let cli = Cli::try_parse_from([
        "tinyembed", "search", "-d", "first", "--doc", "second", "query", "--limit", "1",
    ])
    .unwrap();
    assert_eq!(
        cli.command,
        Command::Search {
            docs: vec!["first".to_string(), "second".to_string()],
            query: "query".to_string(),
            limit: Some(1),
        }
    );
}

#[test]
fn test_batch_accepts_no_texts() {
    let cli = Cli::try_parse_from(["tinyembed", "batch"]).unwrap();
    assert_eq!(cli.command, Command::Batch { texts: vec![] });
}

fn null_context() -> tinyembed::infrastructure::AppContext {
    let mut config = AppConfig::default();
    config.runtime.provider = "null".to_string();
    init_app(config).unwrap()
}

#[tokio::test]
async fn test_probe_does_not_load() {
    let context = null_context();

    let output = execute(&context, Command::Probe).await.unwrap();

    assert!(output.contains("Backend: null"));
    assert!(!context.session().state().await.is_ready());
}

#[tokio::test]
async fn test_compare_unloads_afterwards() {
    let context = null_context();

    let output = execute(
        &context,
        Command::Compare {
            first: "same words".to_string(),
            second: "Same Words".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(output.starts_with("Similarity: 100.0%"));
    assert!(!context.session().state().await.is_ready());
}

#[tokio::test]
async fn test_search_ranks_given_documents() {
    let context = null_context();

    let output = execute(
        &context,
        Command::Search {
            docs: vec!["cooking pasta".to_string(), "vector search".to_string()],
            query: "vector search".to_string(),
            limit: Some(1),
        },
    )
    .await
    .unwrap();

    assert_eq!(output.lines().count(), 1);
    assert!(output.starts_with("1. 100.0%"));
    assert!(output.ends_with("vector search"));
}

#[tokio::test]
async fn test_failed_operation_still_unloads() {
    let context = null_context();

    let result = execute(&context, Command::Batch { texts: vec![] }).await;

    assert!(result.is_err());
    assert!(!context.session().state().await.is_ready());
}
