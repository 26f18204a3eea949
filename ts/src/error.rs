//! Error types for treestore

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or persisting a category's shards
#[derive(Debug, Error)]
pub enum Error {
    /// The target directory does not have the expected store layout,
    /// or an operation was requested on a category that does not support it
    #[error("Invalid store configuration: {0}")]
    Configuration(String),

    /// A category has no discoverable shard files at all. An empty store
    /// still needs one seeded shard per category (see `TreeStore::init`);
    /// load never falls back to an empty mapping.
    #[error("No {category} shard found in {}", .dir.display())]
    NoMatchingShards { category: &'static str, dir: PathBuf },

    /// Shard text did not contain the expected `scrapbook.<category>(...)`
    /// wrapper
    #[error("No {category} payload wrapper in {}", .path.display())]
    WrapperFormat { category: &'static str, path: PathBuf },

    /// The extracted payload is not valid JSON for the category's mapping
    #[error("Invalid JSON payload in {}: {source}", .path.display())]
    PayloadParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem read/write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matching_shards_display() {
        let err = Error::NoMatchingShards {
            category: "toc",
            dir: PathBuf::from("/tmp/tree"),
        };
        assert_eq!(err.to_string(), "No toc shard found in /tmp/tree");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
    }
}
