//! Collection build orchestration.
//!
//! Loads the content collection, computes every registered collection, and
//! writes one JSON data file per collection for templates to consume.
//!
//! ```text
//! build_collections()
//!     │
//!     ├── load_collection()          content/*.toml → ContentCollection
//!     │
//!     ├── CollectionRegistry::with_builtins()
//!     │
//!     └── compute_all() ──► write <output>/<data_dir>/<name>.json
//! ```

use crate::{
    collections::CollectionRegistry, config::SiteConfig, content::loader::load_collection, log,
};
use anyhow::{Context, Result};
use std::fs;

/// Counts reported by a successful build.
#[derive(Debug, Clone, Copy)]
pub struct BuildSummary {
    /// Content items loaded
    pub items: usize,
    /// Data files written
    pub collections: usize,
}

/// Compute all registered collections and write their data files.
///
/// # Errors
///
/// Fails when content cannot be loaded, a collection computation fails
/// (e.g. a project item without a date), or a data file cannot be written.
pub fn build_collections(config: &'static SiteConfig) -> Result<BuildSummary> {
    log!("collect"; "loading content from {}", config.build.content.display());
    let collection = load_collection(&config.build.content)?;
    log!("collect"; "found {} items", collection.len());

    let registry = CollectionRegistry::with_builtins(config);
    let computed = registry.compute_all(&collection)?;

    let data_path = config.build.data_path();
    fs::create_dir_all(&data_path)
        .with_context(|| format!("Failed to create data dir: {}", data_path.display()))?;

    for (name, value) in &computed {
        let file = data_path.join(format!("{name}.json"));
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&file, json)
            .with_context(|| format!("Failed to write data file: {}", file.display()))?;

        let count = value.as_array().map_or(1, Vec::len);
        log!("build"; "{} ({count} entries)", file.display());
    }

    Ok(BuildSummary {
        items: collection.len(),
        collections: computed.len(),
    })
}
