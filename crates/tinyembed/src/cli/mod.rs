//! Command line interface
//!
//! Every embedding command runs one complete session: probe the runtime,
//! load the model (rendering progress on stderr), run the operation and
//! unload. Results go to stdout.

mod render;
mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tinyembed_domain::value_objects::EncodingFormat;

pub use render::{
    render_batch, render_capabilities, render_comparison, render_search, render_single,
};
pub use run::{execute, run};

/// Command line interface for TinyEmbed
#[derive(Parser, Debug)]
#[command(name = "tinyembed")]
#[command(about = "TinyEmbed - text embeddings, semantic search and similarity")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model to load (overrides `runtime.model`)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Embedding encoding: float or base64 (overrides `runtime.encoding_format`)
    #[arg(short, long, global = true)]
    pub format: Option<EncodingFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// TinyEmbed commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show runtime hardware capabilities
    Probe,

    /// Generate an embedding for one text
    Embed {
        /// Text to embed
        text: String,
    },

    /// Generate embeddings for several texts in one request
    ///
    /// Reads one text per line from stdin when no texts are given.
    Batch {
        /// Texts to embed
        texts: Vec<String>,
    },

    /// Rank documents by similarity to a query
    Search {
        /// Document to search (repeatable)
        #[arg(short, long = "doc", required = true)]
        docs: Vec<String>,

        /// Search query
        query: String,

        /// Maximum number of results (defaults to `session.search_limit`)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Compare two texts
    Compare {
        /// First text
        first: String,

        /// Second text
        second: String,
    },
}
