//! WikiForum page tool
//!
//! Edits the forums stored in a local page file the same way the wiki
//! front end edits a live page: load, mutate one thread, re-render the
//! whole block, write it back, reload.
//!
//! # Usage
//!
//! ```bash
//! # Show the forums on a page
//! forum-tool --page Talk_Main.wiki render
//!
//! # Reply to thread 2 of forum 1 as Carol
//! forum-tool --page Talk_Main.wiki --user Carol reply 1 2 "Hey Bob"
//!
//! # Start a new thread, edit an existing one
//! forum-tool --page Talk_Main.wiki --user Dan thread 1 "New topic"
//! forum-tool --page Talk_Main.wiki --user Mod edit 1 2-1 "Edited text"
//! ```
//!
//! # Environment Variables
//!
//! - `WIKIFORUM_USER`: Acting user when `--user` is not given
//! - `WIKIFORUM_SUMMARY_PREFIX`, `WIKIFORUM_MAX_REPLY_DEPTH`: Config overrides
//!   when `--config` is not given
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use wikiforum_core::models::time::FixedTimeProvider;
use wikiforum_core::services::{Collaborators, EditOutcome, EditSession, StaticUser};
use wikiforum_core::ForumConfig;
use wikiforum_dev_tools::{render_outline, FilePageStore};

#[derive(Parser)]
#[command(name = "forum-tool")]
#[command(author, version, about = "Edit WikiForum discussions stored in a page file", long_about = None)]
struct Cli {
    /// Page file standing in for the wiki page
    #[arg(long)]
    page: PathBuf,

    /// User recorded as author or editor
    #[arg(long, env = "WIKIFORUM_USER", default_value = "unsigned")]
    user: String,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed RFC 3339 timestamp to stamp instead of the current time
    #[arg(long)]
    now: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an outline of every forum on the page
    Render {
        /// Print the re-rendered page block instead of the outline
        #[arg(long)]
        raw: bool,
    },

    /// Reply to a thread (replying to thread 1 starts a new thread)
    Reply {
        /// 1-based forum id
        forum: u32,
        /// Thread id, e.g. `2` or `2-1`
        thread: String,
        content: String,
    },

    /// Start a new top-level thread
    Thread {
        /// 1-based forum id
        forum: u32,
        content: String,
    },

    /// Replace the content of an existing thread
    Edit {
        /// 1-based forum id
        forum: u32,
        /// Thread id, e.g. `2` or `2-1`
        thread: String,
        content: String,
    },
}

async fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ForumConfig> {
    match path {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            ForumConfig::from_json_str(&json).map_err(|e| anyhow!(e))
        }
        None => ForumConfig::from_env().map_err(|e| anyhow!(e)),
    }
}

fn report(outcome: &EditOutcome) {
    println!("{}", outcome.summary);
    if let Some(id) = &outcome.new_thread_id {
        println!("New thread: #{}", id);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref()).await?;

    let store = Arc::new(FilePageStore::new(&cli.page));
    let mut collaborators = Collaborators::new(
        store.clone(),
        store.clone(),
        Arc::new(StaticUser::new(cli.user.clone())),
    );
    if let Some(now) = &cli.now {
        let clock = FixedTimeProvider::parse(now)
            .with_context(|| format!("Invalid --now timestamp '{}'", now))?;
        collaborators = collaborators.with_clock(Arc::new(clock));
    }

    tracing::debug!("Page file: {}", store.path().display());
    let mut session = EditSession::load(store.title(), config, collaborators).await?;

    match cli.command {
        Commands::Render { raw: false } => print!("{}", render_outline(session.forums())),
        Commands::Render { raw: true } => println!("{}", session.render()),
        Commands::Reply {
            forum,
            thread,
            content,
        } => report(&session.add_reply(forum, &thread, &content).await?),
        Commands::Thread { forum, content } => {
            report(&session.add_thread(forum, &content).await?)
        }
        Commands::Edit {
            forum,
            thread,
            content,
        } => report(&session.update_thread(forum, &thread, &content).await?),
    }

    Ok(())
}
