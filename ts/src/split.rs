//! Splitting a merged mapping into size-bounded chunks for write

use std::num::NonZeroUsize;

use crate::Mapping;

/// An ordered sub-mapping destined for one shard file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardChunk {
    /// Zero-based position in the write sequence; also the filename index
    pub index: usize,
    pub entries: Mapping,
}

/// Divide `mapping` into chunks of at most `max_entries` entries,
/// preserving global key order across the sequence. Only the final chunk
/// may be short. An empty mapping yields exactly one empty chunk, so a
/// persist always leaves at least the unsuffixed shard on disk.
pub fn split(mapping: &Mapping, max_entries: NonZeroUsize) -> Vec<ShardChunk> {
    let max = max_entries.get();
    let mut chunks = Vec::new();
    let mut current = Mapping::new();

    for (key, value) in mapping {
        if current.len() == max {
            chunks.push(ShardChunk {
                index: chunks.len(),
                entries: std::mem::take(&mut current),
            });
        }
        current.insert(key.clone(), value.clone());
    }
    chunks.push(ShardChunk {
        index: chunks.len(),
        entries: current,
    });
    chunks
}
