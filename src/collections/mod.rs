//! Named collection computations.
//!
//! Each collection is a pure derivation over the read-only
//! [`ContentCollection`], registered under a name with the
//! [`CollectionRegistry`]. The build phase computes every registered
//! collection once and writes `<output>/<data_dir>/<name>.json` for
//! templates to consume.
//!
//! # Built-in collections
//!
//! | Name           | Content                                        |
//! |----------------|------------------------------------------------|
//! | `tags`         | deduplicated tag listing, structural tags out  |
//! | `top_projects` | newest N items tagged `projects`               |
//!
//! # Usage in templates
//!
//! ```text
//! _data/tags.json          → ["rust", "web", ...]
//! _data/top_projects.json  → [{"source": ..., "data": {...}}, ...]
//! ```

pub mod projects;
pub mod tags;

pub use projects::TopProjectsSelector;
pub use tags::TagCollector;

use crate::{config::SiteConfig, content::ContentCollection};
use anyhow::{Result, anyhow};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::BTreeMap;

/// A registered collection computation.
type ComputeFn = Box<dyn Fn(&ContentCollection) -> Result<Value> + Send + Sync>;

/// Registry of named collection computations.
///
/// Serialized output is cached per name behind an `RwLock`: when several
/// consumers (build phase, `show`) ask for the same collection, the JSON
/// is generated once. The content collection is immutable for the build,
/// so the cache never needs invalidation.
pub struct CollectionRegistry {
    entries: BTreeMap<String, ComputeFn>,
    json_cache: RwLock<BTreeMap<String, String>>,
}

impl Default for CollectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            json_cache: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a registry with the built-in collections wired to `config`.
    pub fn with_builtins(config: &SiteConfig) -> Self {
        let mut registry = Self::new();

        let collector = TagCollector::new(config.collections.excluded_tags.iter().cloned());
        registry.register("tags", move |collection| {
            Ok(serde_json::to_value(collector.collect(collection))?)
        });

        let selector = TopProjectsSelector::new(
            config.collections.projects_tag.clone(),
            config.collections.projects_limit,
        );
        registry.register("top_projects", move |collection| {
            let selected = selector.select(collection)?;
            Ok(serde_json::to_value(selected)?)
        });

        registry
    }

    /// Register a computation under `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: &str, compute: F)
    where
        F: Fn(&ContentCollection) -> Result<Value> + Send + Sync + 'static,
    {
        self.entries.insert(name.to_string(), Box::new(compute));
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Compute a single named collection.
    ///
    /// # Errors
    ///
    /// Fails for unknown names (listing the known ones) or when the
    /// computation itself fails.
    pub fn compute(&self, name: &str, collection: &ContentCollection) -> Result<Value> {
        let compute = self.entries.get(name).ok_or_else(|| {
            anyhow!(
                "Unknown collection `{name}` (known: {})",
                self.names().join(", ")
            )
        })?;
        compute(collection)
    }

    /// Compute every registered collection.
    pub fn compute_all(&self, collection: &ContentCollection) -> Result<BTreeMap<String, Value>> {
        self.entries
            .iter()
            .map(|(name, compute)| Ok((name.clone(), compute(collection)?)))
            .collect()
    }

    /// Serialize a named collection to pretty JSON, with caching.
    ///
    /// First call generates JSON, subsequent calls return the cached value.
    pub fn to_json(&self, name: &str, collection: &ContentCollection) -> Result<String> {
        // Fast path: check if cached (read lock only)
        {
            let cache = self.json_cache.read();
            if let Some(json) = cache.get(name) {
                return Ok(json.clone());
            }
        }

        let value = self.compute(name, collection)?;
        let json = serde_json::to_string_pretty(&value)?;

        // Double-check after acquiring write lock
        let mut cache = self.json_cache.write();
        if let Some(json) = cache.get(name) {
            return Ok(json.clone());
        }
        cache.insert(name.to_string(), json.clone());

        Ok(json)
    }
}
