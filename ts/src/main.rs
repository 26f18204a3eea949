//! treestore - CLI entry point
//!
//! Thin wrapper over the library: open or seed a store, then inspect or
//! rewrite its shard set.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use treestore::CategoryKind;
use treestore::TreeStore;
use treestore::cli::{Cli, Command};
use treestore::config::Config;

fn setup_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Init { store_dir } => {
            let store = TreeStore::init(&store_dir, &config)?;
            info!(tree_dir = %store.tree_dir().display(), "store initialized");
            println!("{} Seeded tree at {}", "✓".green(), store.tree_dir().display().to_string().cyan());
        }
        Command::Stats { store_dir } => {
            let store = TreeStore::open(&store_dir, &config)?;
            for kind in CategoryKind::all() {
                let stats = store.stats(kind)?;
                println!(
                    "{:<9} {} shards, {} entries",
                    kind.to_string().yellow(),
                    stats.shard_count,
                    stats.entry_count
                );
            }
        }
        Command::Dump { store_dir, category } => {
            let store = TreeStore::open(&store_dir, &config)?;
            let mapping = store.load(category)?;
            println!("{}", serde_json::to_string_pretty(&mapping)?);
        }
        Command::Repack { store_dir } => {
            let store = TreeStore::open(&store_dir, &config)?;
            let toc = store.load(CategoryKind::Toc)?;
            let meta = store.load(CategoryKind::Meta)?;
            store.persist_all(&toc, &meta)?;
            println!(
                "{} Repacked toc ({} entries) and meta ({} entries)",
                "✓".green(),
                toc.len(),
                meta.len()
            );
        }
    }

    Ok(())
}
