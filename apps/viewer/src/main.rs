use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{load_settings, posts_container};
use shared::domain::PostId;
use tracing::{info, warn};
use tracing_subscriber::{filter::ParseError, EnvFilter};

mod views;

#[derive(Parser, Debug)]
struct Cli {
    /// Overrides the posts endpoint from viewer.toml / environment.
    #[arg(long, global = true)]
    posts_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the blog post list and print it.
    Posts {
        /// Print only the post with this id.
        #[arg(long)]
        id: Option<i64>,
    },
    /// Print every player and those scoring below the threshold.
    Players,
    /// Print the merged squads and their odd/even teams.
    Teams,
}

/// Parsed filter, or `info` plus the parse error to report once logging is up.
fn log_filter(raw: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(raw) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings();
    if let Some(url) = cli.posts_url {
        settings.posts_url = url;
    }

    let (filter, filter_err) = log_filter(&settings.log_filter);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    if let Some(err) = filter_err {
        warn!(filter = %settings.log_filter, error = %err, "invalid log filter, using info");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Posts { id } => {
            let mut container = posts_container(&settings).context("invalid posts endpoint")?;
            info!(url = %container.source().url(), "loading posts");
            container.mount().await;

            match id {
                Some(id) => views::single_post(&container, PostId(id), &mut out)?,
                None => container.render(&mut out).context("failed to render posts")?,
            }
        }
        Command::Players => views::players(&mut out)?,
        Command::Teams => views::teams(&mut out)?,
    }

    out.flush()?;
    Ok(())
}
