//! Shard discovery and ordering
//!
//! A category's index is spread over numbered files (`toc.js`, `toc1.js`,
//! ...) in the tree directory. Discovery is a flat, non-recursive scan;
//! ordering is ascending by numeric suffix, which is the precedence order
//! used by the merge.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::category::Category;
use crate::error::{Error, Result};

/// One discovered shard file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardRef {
    pub path: PathBuf,
    /// Numeric filename suffix; the unsuffixed file is 0
    pub suffix: u64,
}

/// Scan `dir` for files matching the category's shard pattern.
///
/// Zero matches is an error: even an empty store must carry one seeded
/// shard per category (see `TreeStore::init`).
pub fn locate(dir: &Path, category: &Category) -> Result<Vec<ShardRef>> {
    let mut shards = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(suffix) = category.parse_suffix(name) {
            shards.push(ShardRef {
                path: entry.path(),
                suffix,
            });
        }
    }

    if shards.is_empty() {
        return Err(Error::NoMatchingShards {
            category: category.name(),
            dir: dir.to_path_buf(),
        });
    }

    debug!(category = category.name(), count = shards.len(), "discovered shards");
    Ok(shards)
}

/// Order shards ascending by suffix, so later entries take precedence in
/// the merge. Equal suffixes (e.g. `toc.js` next to `toc0.js`) fall back
/// to lexical file-name order.
pub fn order(mut shards: Vec<ShardRef>) -> Vec<ShardRef> {
    shards.sort_by(|a, b| {
        a.suffix
            .cmp(&b.suffix)
            .then_with(|| a.path.file_name().cmp(&b.path.file_name()))
    });
    shards
}
