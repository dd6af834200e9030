use crate::error::{GameError, Result};
use indexmap::IndexMap;
use tracing::warn;

pub const PAIR_SEPARATOR: &str = ";";
pub const KEY_VALUE_SEPARATOR: &str = ",";

enum Segment<'a> {
    Pair(&'a str, &'a str),
    MissingSeparator(&'a str),
}

fn segments(input: &str) -> impl Iterator<Item = Segment<'_>> {
    input
        .split(PAIR_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once(KEY_VALUE_SEPARATOR) {
            Some((key, value)) => Segment::Pair(key, value),
            None => Segment::MissingSeparator(segment),
        })
}

/// Encodes key/value pairs as `k1,v1;k2,v2` in iteration order.
///
/// An empty map encodes to the empty string. Keys containing `,` or `;`
/// and values containing `;` do not survive a decode, see [`try_encode_map`].
pub fn encode_map<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}{KEY_VALUE_SEPARATOR}{}", key.as_ref(), value.as_ref()))
        .collect::<Vec<_>>()
        .join(PAIR_SEPARATOR)
}

/// Like [`encode_map`], but refuses pairs that would not decode back to themselves.
pub fn try_encode_map<I, K, V>(pairs: I) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let pairs: Vec<(K, V)> = pairs.into_iter().collect();

    for (key, value) in &pairs {
        let (key, value) = (key.as_ref(), value.as_ref());
        if key.contains(PAIR_SEPARATOR) || key.contains(KEY_VALUE_SEPARATOR) {
            return Err(GameError::malformed(format!(
                "map key {key:?} contains a reserved separator"
            )));
        }
        if value.contains(PAIR_SEPARATOR) {
            return Err(GameError::malformed(format!(
                "value of {key:?} contains the pair separator"
            )));
        }
    }

    Ok(encode_map(pairs))
}

/// Decodes `k1,v1;k2,v2` into an insertion-ordered map.
///
/// Never fails. Empty segments are ignored and a segment without a comma
/// becomes a key with an empty value. `,v` is the empty key mapped to `v`.
/// Only the first comma splits, so values may contain commas.
/// A repeated key takes the later value but keeps its first position.
pub fn decode_map(input: &str) -> IndexMap<String, String> {
    let mut map = IndexMap::new();

    for segment in segments(input) {
        match segment {
            Segment::Pair(key, value) => {
                map.insert(key.to_string(), value.to_string());
            }
            Segment::MissingSeparator(key) => {
                warn!(pair = key, "Map pair has no value, using empty string");
                map.insert(key.to_string(), String::new());
            }
        }
    }

    map
}

/// Decodes like [`decode_map`] but rejects any malformed segment.
pub fn decode_map_strict(input: &str) -> Result<IndexMap<String, String>> {
    let mut map = IndexMap::new();

    for segment in segments(input) {
        match segment {
            Segment::Pair(key, value) => {
                map.insert(key.to_string(), value.to_string());
            }
            Segment::MissingSeparator(raw) => {
                return Err(GameError::malformed(format!(
                    "map pair {raw:?} has no `{KEY_VALUE_SEPARATOR}` separator"
                )));
            }
        }
    }

    Ok(map)
}
