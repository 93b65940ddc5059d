//! Placeholder data and `:name` interpolation

use crate::dot::coerce::to_display_string;
use serde_json::{Map, Value};

/// Ordered placeholder values for interpolation.
///
/// Keys keep their first insertion position; inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    entries: Vec<(String, String)>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Insert every entry of `other`, overriding shared keys
    pub fn extend_from(&mut self, other: &Replacements) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&Map<String, Value>> for Replacements {
    fn from(map: &Map<String, Value>) -> Self {
        map.iter()
            .map(|(key, value)| (key.clone(), to_display_string(value)))
            .collect()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Replacements {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut replacements = Replacements::new();
        for (key, value) in iter {
            replacements.insert(key, value);
        }
        replacements
    }
}

/// Apply placeholder values to a template.
///
/// For each key (lower-cased), the first `:key` takes the value as-is, the
/// first `:KEY` the upper-cased value and the first `:Key` the capitalized
/// value. Keys are applied in insertion order.
///
/// ```
/// use blok::i18n::{replace_string, Replacements};
///
/// let data = Replacements::new().with("name", "world");
/// assert_eq!(replace_string("Hello :name", &data), "Hello world");
/// assert_eq!(replace_string("Hello :Name", &data), "Hello World");
/// assert_eq!(replace_string("Hello :NAME", &data), "Hello WORLD");
/// ```
pub fn replace_string(template: &str, data: &Replacements) -> String {
    data.iter().fold(template.to_string(), |acc, (key, value)| {
        let placeholder = key.to_lowercase();
        acc.replacen(&format!(":{}", placeholder), value, 1)
            .replacen(
                &format!(":{}", placeholder.to_uppercase()),
                &value.to_uppercase(),
                1,
            )
            .replacen(
                &format!(":{}", capitalize(&placeholder)),
                &capitalize(value),
                1,
            )
    })
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
