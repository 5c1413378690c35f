//! Backend selection by name
//!
//! A [`BackendRegistry`] is built once at startup and handed to whatever
//! constructs stores. There is no process-global table.

use crate::memory::{BACKEND_NAME, MemoryStore};
use crate::store::FileStore;
use diagnostics::{log_debug, log_warn};
use std::collections::BTreeMap;

/// Constructs an uninitialized store
pub type Constructor = fn() -> Box<dyn FileStore>;

/// A registered backend
#[derive(Clone)]
pub struct BackendDescriptor {
    /// The name used for lookup (e.g., "memory")
    pub name: String,

    /// Human-readable description of the backend
    pub description: String,

    pub create: Constructor,
}

fn construct<S: FileStore + Default + 'static>() -> Box<dyn FileStore> {
    Box::new(S::default())
}

/// Name to backend constructor table
#[derive(Clone, Default)]
pub struct BackendRegistry {
    backends: BTreeMap<String, BackendDescriptor>,
}

impl BackendRegistry {
    /// An empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in backends
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register::<MemoryStore>(BACKEND_NAME, "Volatile tree held in process memory");
        registry
    }

    /// Register `S` under `name`. The bound on `S` guarantees the constructor
    /// yields a `FileStore`. A second registration under the same name wins.
    pub fn register<S: FileStore + Default + 'static>(&mut self, name: &str, description: &str) {
        let descriptor = BackendDescriptor {
            name: name.to_string(),
            description: description.to_string(),
            create: construct::<S>,
        };
        if self.backends.insert(name.to_string(), descriptor).is_some() {
            log_warn!("Backend {name} registered twice, replacing", name: name);
        } else {
            log_debug!("Registered backend {name}", name: name);
        }
    }

    /// Look up a backend; unknown names are `None`, not an error
    pub fn get(&self, name: &str) -> Option<&BackendDescriptor> {
        self.backends.get(name)
    }

    /// Construct an uninitialized store of the named backend
    pub fn create(&self, name: &str) -> Option<Box<dyn FileStore>> {
        self.get(name).map(|backend| (backend.create)())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.backends.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BackendDescriptor> {
        self.backends.values()
    }
}
