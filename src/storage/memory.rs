//! In-memory pick store

use super::PickStore;
use crate::error::{CarotError, Result};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// [`PickStore`] backed by an ordered map; nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryPickStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl InMemoryPickStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries.lock().map_err(|_| CarotError::Storage {
            message: "pick store lock poisoned".to_string(),
        })
    }
}

impl PickStore for InMemoryPickStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn scan(&self, from: &str, to: &str) -> Result<Vec<(String, String)>> {
        if from > to {
            return Ok(Vec::new());
        }
        Ok(self
            .entries()?
            .range(from.to_string()..=to.to_string())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
