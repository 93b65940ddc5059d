//! Dot-notation accessor over nested JSON values
//!
//! ```
//! use blok::dot::DotObject;
//! use serde_json::json;
//!
//! let mut dot = DotObject::new(json!({"foo": {"bar": "baz"}}));
//! assert_eq!(dot.get("foo.bar"), Some(&json!("baz")));
//! dot.set("foo.bar", json!("fooz")).unwrap();
//! assert_eq!(dot.get_or("foo.missing", json!("default")), json!("default"));
//! ```

use super::operator::Operator;
use crate::error::{DotPathError, DotPathResult};
use serde_json::Value;

/// Wraps a nested mapping/sequence structure addressed by dot paths
#[derive(Debug, Clone, PartialEq)]
pub struct DotObject {
    items: Value,
}

impl Default for DotObject {
    fn default() -> Self {
        Self {
            items: Value::Array(Vec::new()),
        }
    }
}

impl From<Value> for DotObject {
    fn from(items: Value) -> Self {
        Self::new(items)
    }
}

impl DotObject {
    /// Wrap a structure
    pub fn new(items: Value) -> Self {
        Self { items }
    }

    /// The wrapped structure
    pub fn all(&self) -> &Value {
        &self.items
    }

    /// Unwrap the structure
    pub fn into_inner(self) -> Value {
        self.items
    }

    /// Resolve a dot path, `None` if any step is missing or not indexable
    pub fn get(&self, path: &str) -> Option<&Value> {
        resolve_path(&self.items, path)
    }

    /// Resolve a dot path, falling back to `default` on any failure
    pub fn get_or(&self, path: &str, default: Value) -> Value {
        self.get(path).cloned().unwrap_or(default)
    }

    /// Whether the first segment of `path` exists at the top level.
    ///
    /// Only the first segment is inspected, so `has("foo.nope")` is true
    /// whenever `foo` exists.
    pub fn has(&self, path: &str) -> bool {
        let first = path.split('.').next().unwrap_or(path);
        child(&self.items, first).is_some()
    }

    /// Assign `value` at `path`.
    ///
    /// Intermediate segments must already exist; nothing is created on the
    /// way down. On error the structure is left untouched.
    pub fn set(&mut self, path: &str, value: Value) -> DotPathResult<()> {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, parents) = segments.split_last().ok_or(DotPathError::EmptyPath)?;

        let mut target = &mut self.items;
        for segment in parents {
            target = child_mut(target, path, segment)?;
        }

        assign(target, path, last, value)
    }

    /// Top-level values, in key order
    pub fn values(&self) -> Vec<&Value> {
        top_level_values(&self.items)
    }

    /// Plain array view: sequences are copied with nested sequences kept
    /// nested and mappings left as leaves; a mapping yields its values.
    pub fn to_array(&self) -> Value {
        match &self.items {
            Value::Array(items) => Value::Array(items.iter().map(copy_sequences).collect()),
            _ => Value::Array(self.values().into_iter().cloned().collect()),
        }
    }

    /// JSON text of [`to_array`](Self::to_array) for sequences, of the
    /// whole structure otherwise
    pub fn to_json(&self) -> String {
        match &self.items {
            Value::Array(_) => self.to_array().to_string(),
            other => other.to_string(),
        }
    }

    /// Top-level entries whose value at `key` satisfies `operator` against
    /// `value`. Relative order is preserved.
    ///
    /// ```
    /// use blok::dot::DotObject;
    /// use serde_json::json;
    ///
    /// let products = DotObject::new(json!([
    ///     {"name": "desk", "price": 200},
    ///     {"name": "lamp", "price": 40},
    /// ]));
    /// let expensive = products.where_cmp("price", ">", &json!(100));
    /// assert_eq!(expensive, vec![&json!({"name": "desk", "price": 200})]);
    /// ```
    pub fn where_cmp(&self, key: &str, operator: impl Into<Operator>, value: &Value) -> Vec<&Value> {
        let operator = operator.into();
        self.values()
            .into_iter()
            .filter(|item| operator.evaluate(resolve_path(item, key), value))
            .collect()
    }

    /// Two-argument `where`: strict equality
    pub fn where_eq(&self, key: &str, value: &Value) -> Vec<&Value> {
        self.where_cmp(key, Operator::StrictEq, value)
    }

    /// Top-level entries whose value at `key` is one of the top-level
    /// values of `candidates`
    pub fn where_in(&self, key: &str, candidates: &Value) -> Vec<&Value> {
        self.filter_membership(key, candidates, true)
    }

    /// Top-level entries whose value at `key` is none of the top-level
    /// values of `candidates`
    pub fn where_not_in(&self, key: &str, candidates: &Value) -> Vec<&Value> {
        self.filter_membership(key, candidates, false)
    }

    fn filter_membership(&self, key: &str, candidates: &Value, keep_members: bool) -> Vec<&Value> {
        let candidates = top_level_values(candidates);
        self.values()
            .into_iter()
            .filter(|item| {
                let is_member = resolve_path(item, key)
                    .map(|found| candidates.contains(&found))
                    .unwrap_or(false);
                is_member == keep_members
            })
            .collect()
    }
}

/// Walk `path` through `root`, one segment per level.
pub fn resolve_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(root, |current, segment| child(current, segment))
}

/// Top-level values of a mapping or sequence; scalars have none.
pub fn top_level_values(value: &Value) -> Vec<&Value> {
    match value {
        Value::Object(map) => map.values().collect(),
        Value::Array(items) => items.iter().collect(),
        _ => Vec::new(),
    }
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn child_mut<'a>(value: &'a mut Value, path: &str, segment: &str) -> DotPathResult<&'a mut Value> {
    let missing = || DotPathError::MissingSegment {
        path: path.to_string(),
        segment: segment.to_string(),
    };

    match value {
        Value::Object(map) => map.get_mut(segment).ok_or_else(missing),
        Value::Array(items) => {
            let index = parse_index(path, segment)?;
            items.get_mut(index).ok_or_else(missing)
        }
        _ => Err(DotPathError::NotAContainer {
            path: path.to_string(),
            segment: segment.to_string(),
        }),
    }
}

fn assign(target: &mut Value, path: &str, segment: &str, value: Value) -> DotPathResult<()> {
    match target {
        Value::Object(map) => {
            map.insert(segment.to_string(), value);
            Ok(())
        }
        Value::Array(items) => {
            let index = parse_index(path, segment)?;
            if index < items.len() {
                items[index] = value;
            } else if index == items.len() {
                items.push(value);
            } else {
                return Err(DotPathError::InvalidIndex {
                    path: path.to_string(),
                    segment: segment.to_string(),
                });
            }
            Ok(())
        }
        _ => Err(DotPathError::NotAContainer {
            path: path.to_string(),
            segment: segment.to_string(),
        }),
    }
}

fn parse_index(path: &str, segment: &str) -> DotPathResult<usize> {
    segment
        .parse::<usize>()
        .map_err(|_| DotPathError::InvalidIndex {
            path: path.to_string(),
            segment: segment.to_string(),
        })
}

fn copy_sequences(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(copy_sequences).collect()),
        leaf => leaf.clone(),
    }
}
