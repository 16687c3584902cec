//! Command execution

use std::path::Path;

use futures::StreamExt;
use tinyembed_application::{EmbeddingSession, ProgressView};
use tinyembed_domain::events::DomainEvent;
use tinyembed_domain::value_objects::{EncodingFormat, HardwareCapabilities, ModelState};
use tinyembed_infrastructure::config::{AppConfig, ConfigLoader};
use tinyembed_infrastructure::logging::init_logging;
use tinyembed_infrastructure::{AppContext, init_app};
use tinyembed_providers::events::DomainEventStream;
use tokio::io::AsyncBufReadExt;
use tracing::{info, warn};

use super::render::{
    render_batch, render_capabilities, render_comparison, render_search, render_single,
};
use super::{Cli, Command};

/// Run a parsed command line to completion, printing the result to stdout
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(model) = cli.model {
        config.runtime.model = model;
    }
    if let Some(format) = cli.format {
        config.runtime.encoding_format = format;
    }
    init_logging(&config.logging)?;

    let command = match cli.command {
        Command::Batch { texts } if texts.is_empty() => Command::Batch {
            texts: read_stdin_lines().await?,
        },
        command => command,
    };

    let context = init_app(config)?;
    let output = execute(&context, command).await?;
    println!("{output}");
    Ok(())
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

async fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let mut texts = Vec::new();
    while let Some(line) = lines.next_line().await? {
        texts.push(line);
    }
    Ok(texts)
}

/// Run one command against a wired session and return its rendered output
///
/// Every command except `probe` loads the configured model first and
/// unloads it afterwards, even when the operation fails.
pub async fn execute(context: &AppContext, command: Command) -> anyhow::Result<String> {
    let session = context.session();
    let caps = session.initialize().await?;
    if command == Command::Probe {
        return Ok(render_capabilities(&caps));
    }

    let runtime = &context.config.runtime;
    load_with_progress(context, &runtime.model, runtime.encoding_format).await?;

    let outcome = perform(&session, &caps, command, context.config.session.search_limit).await;
    if let Err(e) = session.unload_model().await {
        warn!(error = %e, "Failed to unload model");
    }
    outcome
}

async fn perform(
    session: &EmbeddingSession,
    caps: &HardwareCapabilities,
    command: Command,
    default_limit: usize,
) -> anyhow::Result<String> {
    let output = match command {
        Command::Probe => render_capabilities(caps),
        Command::Embed { text } => render_single(&session.generate_embedding(&text).await?),
        Command::Batch { texts } => render_batch(&session.generate_batch(&texts).await?),
        Command::Search { docs, query, limit } => {
            for doc in &docs {
                session.add_document(doc).await?;
            }
            let results = session
                .search(&query, Some(limit.unwrap_or(default_limit)))
                .await?;
            render_search(&results)
        }
        Command::Compare { first, second } => {
            render_comparison(&session.compare_texts(&first, &second).await?)
        }
    };
    Ok(output)
}

/// Load the model while printing progress lines to stderr
async fn load_with_progress(
    context: &AppContext,
    model: &str,
    format: EncodingFormat,
) -> anyhow::Result<()> {
    let session = context.session();
    let renderer = tokio::spawn(print_progress(context.event_bus().subscribe_events()));

    let loaded = session.load_model(model, format).await;
    match session.state().await {
        // Both outcomes were published, so the renderer has an end marker
        ModelState::Ready { .. } | ModelState::Failed { .. } => {
            let _ = renderer.await;
        }
        _ => renderer.abort(),
    }

    loaded?;
    info!(model, "Model ready");
    Ok(())
}

async fn print_progress(mut events: DomainEventStream) {
    while let Some(event) = events.next().await {
        match event {
            DomainEvent::ModelProgress(progress) => {
                eprintln!("{}", ProgressView::from_event(&progress).status_line());
            }
            DomainEvent::ModelStateChanged {
                state: ModelState::Ready { .. } | ModelState::Failed { .. },
                ..
            } => break,
            _ => {}
        }
    }
}
