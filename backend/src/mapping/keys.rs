//! Touched-key tracking for partial updates.
//!
//! A PATCH request only changes the fields the caller supplied. The mapper
//! records those fields as leaf paths (`centerFrequency`, `cwKeyer.wpm`,
//! `streams[1].sampleRate`) and the backend merges exactly those leaves with
//! [`apply_touched`].

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

use super::error::MapError;

/// Ordered list of leaf paths present in a request payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TouchedKeys(Vec<String>);

impl TouchedKeys {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Collects the leaf paths of a JSON object.
    ///
    /// Objects expand to `parent.child` (the parent itself is not listed), so
    /// an empty object contributes nothing. Arrays holding objects expand to
    /// `parent[i].child`. Scalars, scalar arrays and empty arrays are leaves.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let mut keys = Vec::new();
        collect_object("", object, &mut keys);
        Self(keys)
    }

    /// Top-level keys only.
    pub fn top_level(object: &Map<String, Value>) -> Self {
        Self(object.keys().cloned().collect())
    }

    pub fn push(&mut self, key: impl Into<String>) {
        self.0.push(key.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl FromIterator<String> for TouchedKeys {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'k> FromIterator<&'k str> for TouchedKeys {
    fn from_iter<I: IntoIterator<Item = &'k str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl<'a> IntoIterator for &'a TouchedKeys {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn collect_object(prefix: &str, object: &Map<String, Value>, out: &mut Vec<String>) {
    for (key, value) in object {
        collect_value(join(prefix, key), value, out);
    }
}

fn collect_value(path: String, value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(child) => collect_object(&path, child, out),
        Value::Array(items) if items.iter().any(Value::is_object) => {
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, index);
                match item {
                    Value::Object(child) => collect_object(&item_path, child, out),
                    _ => out.push(item_path),
                }
            }
        }
        _ => out.push(path),
    }
}

// =============================================================================
// Key paths
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// Parsed form of a touched key such as `streams[2].sampleRate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<PathSegment>,
}

impl KeyPath {
    pub fn parse(key: &str) -> Result<Self, MapError> {
        let invalid = || MapError::InvalidKeyPath(key.to_string());
        let mut segments = Vec::new();

        for part in key.split('.') {
            let (field, mut rest) = match part.find('[') {
                Some(pos) => (&part[..pos], &part[pos..]),
                None => (part, ""),
            };
            if field.is_empty() {
                return Err(invalid());
            }
            segments.push(PathSegment::Field(field.to_string()));

            while !rest.is_empty() {
                let close = rest.find(']').ok_or_else(invalid)?;
                if !rest.starts_with('[') {
                    return Err(invalid());
                }
                let index = rest[1..close].parse::<usize>().map_err(|_| invalid())?;
                segments.push(PathSegment::Index(index));
                rest = &rest[close + 1..];
            }
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Value at this path, if present.
    pub fn lookup<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(root, |node, segment| match segment {
                PathSegment::Field(name) => node.get(name.as_str()),
                PathSegment::Index(index) => node.get(*index),
            })
    }

    /// Writes `value` at this path, creating intermediate objects and arrays.
    pub fn assign(&self, root: &mut Value, value: Value) {
        let mut node = root;
        for segment in &self.segments {
            node = match segment {
                PathSegment::Field(name) => {
                    if !node.is_object() {
                        *node = Value::Object(Map::new());
                    }
                    match node.as_object_mut() {
                        Some(map) => map.entry(name.clone()).or_insert(Value::Null),
                        None => return,
                    }
                }
                PathSegment::Index(index) => {
                    if !node.is_array() {
                        *node = Value::Array(Vec::new());
                    }
                    match node.as_array_mut() {
                        Some(items) => {
                            if items.len() <= *index {
                                items.resize(*index + 1, Value::Null);
                            }
                            &mut items[*index]
                        }
                        None => return,
                    }
                }
            };
        }
        *node = value;
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Copies the listed leaves of `source` into `target`.
///
/// Keys absent from `source` or not forming a valid path are skipped. Fields
/// of `target` that are not listed are left untouched.
pub fn apply_touched(target: &mut Value, source: &Value, keys: &TouchedKeys) -> Result<(), MapError> {
    for key in keys {
        let path = match KeyPath::parse(key) {
            Ok(path) => path,
            Err(err) => {
                debug!("touched key skipped: {}", err);
                continue;
            }
        };
        match path.lookup(source) {
            Some(value) => path.assign(target, value.clone()),
            None => debug!("touched key {} not present in source, skipped", key),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys_of(value: Value) -> Vec<String> {
        match value {
            Value::Object(map) => TouchedKeys::from_object(&map).into_vec(),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_nested_object_expands_to_leaves() {
        let keys = keys_of(json!({ "a": 1, "b": { "x": 2, "y": 3 } }));
        assert_eq!(keys, vec!["a", "b.x", "b.y"]);
    }

    #[test]
    fn test_array_of_objects_is_indexed() {
        let keys = keys_of(json!({ "streams": [{ "rate": 1 }, { "rate": 2 }] }));
        assert_eq!(keys, vec!["streams[0].rate", "streams[1].rate"]);
    }

    #[test]
    fn test_scalar_arrays_and_empty_arrays_are_leaves() {
        let keys = keys_of(json!({
            "gains": [1, 2, 3],
            "empty": [],
            "nothing": {},
            "deep": { "deeper": { "leaf": true } }
        }));
        assert_eq!(keys, vec!["deep.deeper.leaf", "empty", "gains"]);
    }

    #[test]
    fn test_empty_array_element_adds_no_key() {
        let keys = keys_of(json!({ "streams": [{}, { "rate": 2 }, 7] }));
        assert_eq!(keys, vec!["streams[1].rate", "streams[2]"]);
    }

    #[test]
    fn test_apply_touched_skips_unparsable_keys() {
        let mut target = json!({ "a": 1 });
        let source = json!({ "a": 2, "": 3 });
        let keys: TouchedKeys = vec!["", "vendor[x]", "a[1]b", "a"].into_iter().collect();

        apply_touched(&mut target, &source, &keys).unwrap();
        assert_eq!(target, json!({ "a": 2 }));
    }

    #[test]
    fn test_key_path_parse_and_display() {
        let path = KeyPath::parse("streams[2].sampleRate").unwrap();
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Field("streams".into()),
                PathSegment::Index(2),
                PathSegment::Field("sampleRate".into()),
            ]
        );
        assert_eq!(path.to_string(), "streams[2].sampleRate");

        assert!(KeyPath::parse("").is_err());
        assert!(KeyPath::parse("a..b").is_err());
        assert!(KeyPath::parse("a[x]").is_err());
        assert!(KeyPath::parse("a[1").is_err());
    }

    #[test]
    fn test_apply_touched_merges_only_listed_leaves() {
        let mut target = json!({ "a": 1, "b": { "x": 10, "y": 20 }, "keep": "me" });
        let source = json!({ "a": 5, "b": { "x": 11, "y": 99 } });
        let keys: TouchedKeys = vec!["a".to_string(), "b.x".to_string()].into_iter().collect();

        apply_touched(&mut target, &source, &keys).unwrap();
        assert_eq!(target, json!({ "a": 5, "b": { "x": 11, "y": 20 }, "keep": "me" }));
    }

    #[test]
    fn test_apply_touched_creates_array_elements() {
        let mut target = json!({});
        let source = json!({ "streams": [{ "rate": 1 }, { "rate": 2 }] });
        let keys = keys_of(source.clone()).into_iter().collect::<TouchedKeys>();

        apply_touched(&mut target, &source, &keys).unwrap();
        assert_eq!(target, source);
    }
}
