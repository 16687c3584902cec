//! TinyEmbed - Entry Point
//!
//! Binary entry point for the `tinyembed` command line tool.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `tinyembed probe` | Show runtime hardware capabilities |
//! | `tinyembed embed <TEXT>` | Embed one text |
//! | `tinyembed batch [TEXT]...` | Embed several texts (stdin when none given) |
//! | `tinyembed search --doc <TEXT>... <QUERY>` | Rank documents against a query |
//! | `tinyembed compare <A> <B>` | Similarity of two texts |

use clap::Parser;
use tinyembed::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
