//! Shared translation context
//!
//! Holds the seed catalog new translators start from and the log of keys
//! that failed lookup. A context is created by the host and handed to every
//! translator that should share it.

use serde_json::{Map, Value};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Default context name
pub const DEFAULT_CONTEXT_NAME: &str = "translations";

/// Seed catalog and not-found log shared between translators
#[derive(Debug, Default)]
pub struct TranslationContext {
    name: String,
    seed: Mutex<Map<String, Value>>,
    not_founds: Mutex<Vec<String>>,
}

impl TranslationContext {
    /// Create an empty context
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a context with seed messages
    pub fn with_seed(name: impl Into<String>, seed: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            seed: Mutex::new(seed),
            not_founds: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the seed messages
    pub fn seed(&self) -> Map<String, Value> {
        lock(&self.seed).clone()
    }

    /// Merge messages into the seed; incoming keys win
    pub fn extend_seed(&self, messages: Map<String, Value>) {
        lock(&self.seed).extend(messages);
    }

    /// Append a key to the not-found log
    pub fn record_not_found(&self, key: &str) {
        lock(&self.not_founds).push(key.to_string());
    }

    /// Snapshot of the not-found log, in recording order
    pub fn not_founds(&self) -> Vec<String> {
        lock(&self.not_founds).clone()
    }

    pub fn reset_not_founds(&self) {
        lock(&self.not_founds).clear();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
