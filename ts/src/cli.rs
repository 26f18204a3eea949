//! CLI argument parsing for treestore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::category::CategoryKind;

#[derive(Parser, Debug)]
#[command(name = "ts")]
#[command(author, version, about = "Sharded index store for scrapbook archives", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the tree directory and seed empty shards where missing
    Init {
        /// Store directory
        #[arg(required = true)]
        store_dir: PathBuf,
    },

    /// Show shard and entry counts per category
    Stats {
        /// Store directory
        #[arg(required = true)]
        store_dir: PathBuf,
    },

    /// Print a category's merged mapping as JSON
    Dump {
        /// Store directory
        #[arg(required = true)]
        store_dir: PathBuf,

        /// Category to dump (toc, meta, or fulltext)
        #[arg(required = true)]
        category: CategoryKind,
    },

    /// Rewrite toc and meta shards under the configured entry limits
    Repack {
        /// Store directory
        #[arg(required = true)]
        store_dir: PathBuf,
    },
}
