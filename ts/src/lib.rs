//! TreeStore - sharded index files for a scrapbook archive
//!
//! A scrapbook store keeps its table of contents, page metadata, and
//! full-text index as JSON payloads embedded in human-editable `.js`
//! files under the store's `tree/` directory. An oversized index is split
//! across numbered shard files so no single payload grows past what the
//! viewer front end can hold in one string.
//!
//! # Directory layout
//!
//! ```text
//! scrapbook/
//! └── tree/
//!     ├── toc.js          # shard 0 (unsuffixed)
//!     ├── toc1.js         # shard 1
//!     ├── meta.js
//!     └── fulltext.js
//! ```
//!
//! On load, each category's shards are discovered, ordered by numeric
//! suffix, unwrapped, parsed, and merged (higher suffix wins on key
//! conflicts). On save, the merged mapping is re-split into size-bounded
//! chunks, written back in order, and leftover higher-numbered shards are
//! deleted.
//!
//! # Example
//!
//! ```ignore
//! use treestore::{TreeStore, config::Config};
//!
//! let store = TreeStore::open("my-scrapbook", &Config::default())?;
//! let data = store.load_all()?;
//! store.persist_all(&data.toc, &data.meta)?;
//! ```

use std::num::NonZeroUsize;

pub mod category;
pub mod cli;
pub mod config;
pub mod error;
pub mod merge;
pub mod shard;
pub mod split;
mod store;
pub mod wrapper;

pub use category::{Categories, Category, CategoryKind};
pub use error::{Error, Result};
pub use split::ShardChunk;
pub use store::{CategoryStats, TreeData, TreeStore};

/// A category's merged index: string keys to arbitrary JSON values,
/// in first-seen key order.
pub type Mapping = serde_json::Map<String, serde_json::Value>;

/// Default entries per toc shard
pub const DEFAULT_TOC_MAX_ENTRIES: NonZeroUsize = NonZeroUsize::new(4 * 1024 * 1024).unwrap();

/// Default entries per meta shard
pub const DEFAULT_META_MAX_ENTRIES: NonZeroUsize = NonZeroUsize::new(256 * 1024).unwrap();
