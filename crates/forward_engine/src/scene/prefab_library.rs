//! Name-indexed prefab assets
//!
//! Scene descriptions refer to prefabs by name; the library resolves those
//! names to shared assets. Loading the assets themselves happens elsewhere.

use std::collections::HashMap;
use std::sync::Arc;

use super::Prefab;

/// Registry of loaded prefabs
#[derive(Debug, Clone, Default)]
pub struct PrefabLibrary {
    prefabs: HashMap<String, Arc<Prefab>>,
}

impl PrefabLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prefab under its own name, replacing any previous entry
    pub fn insert(&mut self, prefab: Prefab) -> Arc<Prefab> {
        let prefab = Arc::new(prefab);
        self.prefabs.insert(prefab.name.clone(), Arc::clone(&prefab));
        prefab
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, prefab: Prefab) -> Self {
        self.insert(prefab);
        self
    }

    /// Resolve a prefab by name
    pub fn get(&self, name: &str) -> Option<Arc<Prefab>> {
        self.prefabs.get(name).cloned()
    }

    /// Number of registered prefabs
    pub fn len(&self) -> usize {
        self.prefabs.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.prefabs.is_empty()
    }
}
