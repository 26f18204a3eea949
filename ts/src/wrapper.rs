//! Payload wrapping and extraction
//!
//! Shard files are not bare JSON: the payload is embedded in a decorative
//! wrapper so the files double as loadable scripts for the viewer front
//! end, with a leading comment inviting hand edits:
//!
//! ```text
//! /**
//!  * Feel free to edit this file, but keep data code valid JSON format.
//!  */
//! scrapbook.toc({"20200101...": {...}})
//! ```

use std::path::Path;

use crate::category::Category;
use crate::error::{Error, Result};

/// Wrapper call namespace (`scrapbook.toc(...)`, `scrapbook.meta(...)`)
pub const NAMESPACE: &str = "scrapbook";

/// Comment block written at the top of every shard file. The trailing
/// space after `/**` is part of the historical format; existing stores
/// contain it byte-for-byte.
pub const FILE_COMMENT: &str =
    "/** \n * Feel free to edit this file, but keep data code valid JSON format.\n */\n";

/// Extract the JSON payload embedded in a shard's wrapper.
///
/// Any leading comment text is tolerated; the match starts at
/// `scrapbook.<category>(` and the capture is a non-greedy run ending at
/// the first `})`. This is a text match, not a balanced-parenthesis
/// parse: a payload containing the literal sequence `})` inside a string
/// value is cut short at that point. Hardening this would change what
/// existing hand-edited stores parse to, so the behavior is kept.
///
/// The captured text still has to parse as JSON; that step and its
/// [`Error::PayloadParse`] failure belong to the caller.
pub fn extract<'a>(raw: &'a str, category: &Category, path: &Path) -> Result<&'a str> {
    category.capture_payload(raw).ok_or_else(|| Error::WrapperFormat {
        category: category.name(),
        path: path.to_path_buf(),
    })
}

/// Embed a serialized payload in the category's wrapper for writing.
/// Output is newline-terminated.
pub fn wrap(category: &Category, payload: &str) -> String {
    format!("{FILE_COMMENT}{NAMESPACE}.{}({payload})\n", category.name())
}
