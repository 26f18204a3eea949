//! Merging ordered shard payloads into one mapping

use crate::Mapping;

/// Fold a sequence of mappings into one, in order.
///
/// Later mappings win on key conflicts, but a conflicting key keeps the
/// position it first appeared at; only its value is replaced. New keys
/// append at the end in their own relative order. An empty sequence
/// yields an empty mapping.
pub fn merge<I>(mappings: I) -> Mapping
where
    I: IntoIterator<Item = Mapping>,
{
    let mut merged = Mapping::new();
    for mapping in mappings {
        for (key, value) in mapping {
            merged.insert(key, value);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(pairs: &[(&str, i64)]) -> Mapping {
        pairs.iter().map(|(k, v)| (k.to_string(), json!(v))).collect()
    }

    #[test]
    fn test_later_shard_wins_but_keeps_position() {
        let s0 = mapping(&[("a", 1), ("b", 2)]);
        let s1 = mapping(&[("b", 3), ("c", 4)]);

        let merged = merge([s0, s1]);

        let pairs: Vec<(&str, i64)> = merged
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_i64().unwrap()))
            .collect();
        assert_eq!(pairs, vec![("a", 1), ("b", 3), ("c", 4)]);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(merge(std::iter::empty::<Mapping>()).is_empty());
    }

    #[test]
    fn test_single_mapping_passes_through() {
        let s0 = mapping(&[("x", 10), ("y", 20)]);
        let merged = merge([s0.clone()]);
        assert!(merged.iter().eq(s0.iter()));
    }

    #[test]
    fn test_values_need_not_be_scalars() {
        let mut s0 = Mapping::new();
        s0.insert("item".into(), json!({"title": "old", "tags": [1, 2]}));
        let mut s1 = Mapping::new();
        s1.insert("item".into(), json!({"title": "new"}));

        let merged = merge([s0, s1]);
        assert_eq!(merged["item"], json!({"title": "new"}));
    }
}
