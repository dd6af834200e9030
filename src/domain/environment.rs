use crate::encoding::{decode_map, decode_map_strict, encode_map, try_encode_map};
use crate::error::{GameError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variables for a launch, key-unique and kept in insertion order.
///
/// Equality ignores order. On the JSON API this is a plain object; in form
/// fields it uses the `k1,v1;k2,v2` map encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment(IndexMap<String, String>);

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient decode of a form field, see [`decode_map`].
    pub fn from_field(input: &str) -> Self {
        Self(decode_map(input))
    }

    pub fn to_field(&self) -> String {
        encode_map(&self.0)
    }

    pub fn try_to_field(&self) -> Result<String> {
        try_encode_map(&self.0)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromStr for Environment {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        decode_map_strict(s).map(Self)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_field())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
