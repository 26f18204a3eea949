//! TreeStore - load and persist sharded category indexes
//!
//! The read path for a category is locate -> order -> extract/parse per
//! shard -> merge. The write path is split -> write chunks in ascending
//! index order -> delete stale higher-numbered shards. All operations are
//! synchronous and sequential; shard order carries the precedence rule on
//! both paths. The store assumes a single reader/writer per tree
//! directory: there is no lock, and concurrent writers can leave a mixed
//! shard set.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::Mapping;
use crate::category::{Categories, Category, CategoryKind};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::merge::merge;
use crate::shard::{self, ShardRef};
use crate::split::{ShardChunk, split};
use crate::wrapper;

/// All three category indexes, as loaded by [`TreeStore::load_all`]
#[derive(Debug, Clone, Default)]
pub struct TreeData {
    pub toc: Mapping,
    pub meta: Mapping,
    pub fulltext: Mapping,
}

/// Shard and entry counts for one category
#[derive(Debug, Clone)]
pub struct CategoryStats {
    pub shard_count: usize,
    pub entry_count: usize,
}

/// Handle on one scrapbook store's tree directory
#[derive(Debug)]
pub struct TreeStore {
    tree_dir: PathBuf,
    categories: Categories,
}

impl TreeStore {
    /// Open an existing store. The store directory must already contain
    /// the tree subdirectory; anything else is a configuration error, not
    /// something to silently create.
    pub fn open(store_dir: impl AsRef<Path>, config: &Config) -> Result<Self> {
        let store_dir = store_dir.as_ref();
        let tree_dir = store_dir.join(&config.tree_dir_name);
        if !tree_dir.is_dir() {
            return Err(Error::Configuration(format!(
                "{} is not a scrapbook store (missing {}/ directory)",
                store_dir.display(),
                config.tree_dir_name
            )));
        }
        debug!(tree_dir = %tree_dir.display(), "opened tree store");
        Ok(Self {
            tree_dir,
            categories: config.categories(),
        })
    }

    /// Create the tree directory if needed and seed an empty unsuffixed
    /// shard for every category that has none. Loading requires at least
    /// one shard per category, and load never creates one itself; this is
    /// the explicit seeding step. Existing shards are left untouched.
    pub fn init(store_dir: impl AsRef<Path>, config: &Config) -> Result<Self> {
        let tree_dir = store_dir.as_ref().join(&config.tree_dir_name);
        fs::create_dir_all(&tree_dir)?;
        let store = Self {
            tree_dir,
            categories: config.categories(),
        };
        for category in store.categories.iter() {
            match shard::locate(&store.tree_dir, category) {
                Ok(_) => continue,
                Err(Error::NoMatchingShards { .. }) => {
                    let chunks = split(&Mapping::new(), category.max_entries());
                    store.write_all(category, &chunks)?;
                    info!(category = category.name(), "seeded empty shard");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(store)
    }

    pub fn tree_dir(&self) -> &Path {
        &self.tree_dir
    }

    /// Load one category: discover its shards, merge them in ascending
    /// suffix order. Any unreadable or malformed shard aborts the whole
    /// category load; there is no partial merge.
    pub fn load(&self, kind: CategoryKind) -> Result<Mapping> {
        let category = self.categories.get(kind);
        let ordered = shard::order(shard::locate(&self.tree_dir, category)?);

        let mut payloads = Vec::with_capacity(ordered.len());
        for shard_ref in &ordered {
            payloads.push(self.read_shard(category, shard_ref)?);
        }

        let merged = merge(payloads);
        debug!(
            category = category.name(),
            shards = ordered.len(),
            entries = merged.len(),
            "loaded category"
        );
        Ok(merged)
    }

    /// Load all three categories
    pub fn load_all(&self) -> Result<TreeData> {
        Ok(TreeData {
            toc: self.load(CategoryKind::Toc)?,
            meta: self.load(CategoryKind::Meta)?,
            fulltext: self.load(CategoryKind::Fulltext)?,
        })
    }

    /// Persist one category: split under its entry limit, write every
    /// chunk, then delete shards left over from a previous, longer write.
    ///
    /// Writes are sequential and not atomic as a set; a failure part-way
    /// leaves a mix of old and new shards and skips reconciliation.
    pub fn persist(&self, kind: CategoryKind, mapping: &Mapping) -> Result<()> {
        let category = self.categories.get(kind);
        if !category.is_writable() {
            return Err(Error::Configuration(format!(
                "{} category does not support persist",
                category.name()
            )));
        }

        let chunks = split(mapping, category.max_entries());
        self.write_all(category, &chunks)?;
        let deleted = self.reconcile(category, chunks.len())?;

        info!(
            category = category.name(),
            entries = mapping.len(),
            shards = chunks.len(),
            stale_deleted = deleted,
            "persisted category"
        );
        Ok(())
    }

    /// Persist the writable categories. Each persists independently; a
    /// failure in one does not roll back the other.
    pub fn persist_all(&self, toc: &Mapping, meta: &Mapping) -> Result<()> {
        self.persist(CategoryKind::Toc, toc)?;
        self.persist(CategoryKind::Meta, meta)?;
        Ok(())
    }

    /// Shard and merged-entry counts for one category
    pub fn stats(&self, kind: CategoryKind) -> Result<CategoryStats> {
        let category = self.categories.get(kind);
        let ordered = shard::order(shard::locate(&self.tree_dir, category)?);
        let shard_count = ordered.len();

        let mut payloads = Vec::with_capacity(shard_count);
        for shard_ref in &ordered {
            payloads.push(self.read_shard(category, shard_ref)?);
        }

        Ok(CategoryStats {
            shard_count,
            entry_count: merge(payloads).len(),
        })
    }

    fn read_shard(&self, category: &Category, shard_ref: &ShardRef) -> Result<Mapping> {
        let raw = fs::read_to_string(&shard_ref.path)?;
        let payload = wrapper::extract(&raw, category, &shard_ref.path)?;
        serde_json::from_str(payload).map_err(|source| Error::PayloadParse {
            path: shard_ref.path.clone(),
            source,
        })
    }

    fn write_all(&self, category: &Category, chunks: &[ShardChunk]) -> Result<()> {
        for chunk in chunks {
            let path = self.tree_dir.join(category.file_name(chunk.index));
            let payload =
                serde_json::to_string(&chunk.entries).map_err(|source| Error::PayloadParse {
                    path: path.clone(),
                    source,
                })?;
            fs::write(&path, wrapper::wrap(category, &payload))?;
            debug!(
                category = category.name(),
                index = chunk.index,
                entries = chunk.entries.len(),
                "wrote shard"
            );
        }
        Ok(())
    }

    /// Delete every discovered shard with suffix >= `written`. Working
    /// from the discovery set rather than probing successive indices
    /// means gaps in the numbering cannot shelter stale shards.
    fn reconcile(&self, category: &Category, written: usize) -> Result<usize> {
        let mut deleted = 0;
        for shard_ref in shard::locate(&self.tree_dir, category)? {
            if shard_ref.suffix >= written as u64 {
                fs::remove_file(&shard_ref.path)?;
                deleted += 1;
                debug!(
                    category = category.name(),
                    path = %shard_ref.path.display(),
                    "deleted stale shard"
                );
            }
        }
        Ok(deleted)
    }
}
