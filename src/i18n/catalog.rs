//! Catalog files
//!
//! A catalog file is a JSON object keyed by locale:
//!
//! ```json
//! {
//!     "en": { "greeting": "Hello :name", "cart": { "items": "{0}empty|{1}one item|[2,*]:count items" } },
//!     "fr": { "greeting": "Bonjour :name" }
//! }
//! ```

use crate::error::{CatalogError, CatalogResult};
use serde_json::{Map, Value};
use std::path::Path;

/// Messages of one locale
pub type LocaleMessages = Map<String, Value>;

/// Read a catalog file, returning `(locale, messages)` pairs in file order.
pub fn load_catalog(path: &Path) -> CatalogResult<Vec<(String, LocaleMessages)>> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let root: Value = serde_json::from_str(&content).map_err(|source| CatalogError::ParseError {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = split_locales(root)?;
    log::debug!(
        "Loaded catalog {} with {} locale(s)",
        path.display(),
        catalog.len()
    );
    Ok(catalog)
}

/// Split a parsed catalog into per-locale message maps.
pub fn split_locales(root: Value) -> CatalogResult<Vec<(String, LocaleMessages)>> {
    let Value::Object(locales) = root else {
        return Err(CatalogError::NotAnObject {
            locale: "<root>".to_string(),
        });
    };

    locales
        .into_iter()
        .map(|(locale, messages)| match messages {
            Value::Object(messages) => Ok((locale, messages)),
            _ => Err(CatalogError::NotAnObject { locale }),
        })
        .collect()
}
