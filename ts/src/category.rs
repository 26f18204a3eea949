//! Category descriptors for the three index kinds
//!
//! Each category owns its shard filename pattern, write template, wrapper
//! pattern, and chunk size limit. The full set lives in a [`Categories`]
//! table that is built once and passed into [`crate::TreeStore`], so tests
//! can substitute limits without touching global state.

use std::num::NonZeroUsize;

use regex::Regex;

use crate::{DEFAULT_META_MAX_ENTRIES, DEFAULT_TOC_MAX_ENTRIES};

/// Shard file extension, shared by every category
pub const SHARD_EXT: &str = "js";

/// The three index kinds a scrapbook tree carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    /// Table of contents (item tree)
    Toc,
    /// Per-item metadata
    Meta,
    /// Full-text search index (read-only in this store)
    Fulltext,
}

impl CategoryKind {
    /// Filename stem and wrapper name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toc => "toc",
            Self::Meta => "meta",
            Self::Fulltext => "fulltext",
        }
    }

    /// All kinds, in load order
    pub fn all() -> [CategoryKind; 3] {
        [Self::Toc, Self::Meta, Self::Fulltext]
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toc" => Ok(Self::Toc),
            "meta" => Ok(Self::Meta),
            "fulltext" => Ok(Self::Fulltext),
            other => Err(format!("unknown category: {other} (expected toc, meta, or fulltext)")),
        }
    }
}

/// One category's fixed descriptor: discovery pattern, write template,
/// wrapper pattern, and chunk limit
#[derive(Debug, Clone)]
pub struct Category {
    kind: CategoryKind,
    max_entries: NonZeroUsize,
    writable: bool,
    shard_pattern: Regex,
    payload_pattern: Regex,
}

impl Category {
    fn new(kind: CategoryKind, max_entries: NonZeroUsize, writable: bool) -> Self {
        let name = kind.name();
        let shard_pattern = Regex::new(&format!(r"^{name}([0-9]*)\.{SHARD_EXT}$"))
            .expect("category shard pattern is valid");
        // Non-greedy capture ending at the first `})`. See wrapper::extract
        // for the matching caveat.
        let payload_pattern = Regex::new(&format!(
            r"(?s){}\.{name}\((.*?\}})\s*\)",
            crate::wrapper::NAMESPACE
        ))
        .expect("category payload pattern is valid");
        Self {
            kind,
            max_entries,
            writable,
            shard_pattern,
            payload_pattern,
        }
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Maximum entries per shard when splitting this category for write
    pub fn max_entries(&self) -> NonZeroUsize {
        self.max_entries
    }

    /// Whether this store exposes a persist path for the category
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Parse a directory entry name against the discovery pattern.
    /// Returns the numeric suffix on a match; an absent digit run is
    /// suffix 0. A digit run too large for `u64` is treated as no match.
    pub fn parse_suffix(&self, file_name: &str) -> Option<u64> {
        let caps = self.shard_pattern.captures(file_name)?;
        let digits = caps.get(1).map_or("", |m| m.as_str());
        if digits.is_empty() {
            return Some(0);
        }
        digits.parse().ok()
    }

    /// Shard filename for a chunk index. Index 0 maps to the unsuffixed
    /// name, matching discovery's suffix-0 convention.
    pub fn file_name(&self, index: usize) -> String {
        if index == 0 {
            format!("{}.{SHARD_EXT}", self.name())
        } else {
            format!("{}{index}.{SHARD_EXT}", self.name())
        }
    }

    pub(crate) fn capture_payload<'a>(&self, raw: &'a str) -> Option<&'a str> {
        self.payload_pattern
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Immutable table of all category descriptors for one store
#[derive(Debug, Clone)]
pub struct Categories {
    toc: Category,
    meta: Category,
    fulltext: Category,
}

impl Categories {
    /// Build the table with explicit chunk limits for the writable
    /// categories. Fulltext carries the toc default; its write path is
    /// not exposed so the limit is never consulted.
    pub fn new(toc_max_entries: NonZeroUsize, meta_max_entries: NonZeroUsize) -> Self {
        Self {
            toc: Category::new(CategoryKind::Toc, toc_max_entries, true),
            meta: Category::new(CategoryKind::Meta, meta_max_entries, true),
            fulltext: Category::new(CategoryKind::Fulltext, DEFAULT_TOC_MAX_ENTRIES, false),
        }
    }

    pub fn get(&self, kind: CategoryKind) -> &Category {
        match kind {
            CategoryKind::Toc => &self.toc,
            CategoryKind::Meta => &self.meta,
            CategoryKind::Fulltext => &self.fulltext,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        [&self.toc, &self.meta, &self.fulltext].into_iter()
    }
}

impl Default for Categories {
    fn default() -> Self {
        Self::new(DEFAULT_TOC_MAX_ENTRIES, DEFAULT_META_MAX_ENTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suffix() {
        let toc = Categories::default().get(CategoryKind::Toc).clone();
        assert_eq!(toc.parse_suffix("toc.js"), Some(0));
        assert_eq!(toc.parse_suffix("toc3.js"), Some(3));
        assert_eq!(toc.parse_suffix("toc12.js"), Some(12));
        assert_eq!(toc.parse_suffix("toc0.js"), Some(0));
    }

    #[test]
    fn test_parse_suffix_rejects_non_shards() {
        let toc = Categories::default().get(CategoryKind::Toc).clone();
        assert_eq!(toc.parse_suffix("mytoc.js"), None);
        assert_eq!(toc.parse_suffix("toc.js.bak"), None);
        assert_eq!(toc.parse_suffix("toca.js"), None);
        assert_eq!(toc.parse_suffix("toc1.json"), None);
        assert_eq!(toc.parse_suffix("meta.js"), None);
    }

    #[test]
    fn test_file_name_template() {
        let meta = Categories::default().get(CategoryKind::Meta).clone();
        assert_eq!(meta.file_name(0), "meta.js");
        assert_eq!(meta.file_name(1), "meta1.js");
        assert_eq!(meta.file_name(12), "meta12.js");
    }

    #[test]
    fn test_file_name_round_trips_through_discovery() {
        let toc = Categories::default().get(CategoryKind::Toc).clone();
        for index in [0usize, 1, 7, 42] {
            assert_eq!(toc.parse_suffix(&toc.file_name(index)), Some(index as u64));
        }
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("toc".parse::<CategoryKind>(), Ok(CategoryKind::Toc));
        assert_eq!("fulltext".parse::<CategoryKind>(), Ok(CategoryKind::Fulltext));
        assert!("index".parse::<CategoryKind>().is_err());
    }

    #[test]
    fn test_fulltext_not_writable() {
        let table = Categories::default();
        assert!(table.get(CategoryKind::Toc).is_writable());
        assert!(table.get(CategoryKind::Meta).is_writable());
        assert!(!table.get(CategoryKind::Fulltext).is_writable());
    }
}
