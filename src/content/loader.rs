//! Front-matter loading.
//!
//! Walks the content directory for `*.toml` front-matter files (one per
//! content item) and parses them in parallel. Items are returned sorted by
//! source path so that every build sees the same collection order.

use super::item::{ContentCollection, ContentItem, FrontMatter};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Load all content items under `content_dir`.
///
/// # Errors
///
/// Returns an error if the directory cannot be walked or any front-matter
/// file fails to read or parse; the failing path is included in the error
/// chain.
pub fn load_collection(content_dir: &Path) -> Result<ContentCollection> {
    let mut paths = collect_front_matter_files(content_dir)?;
    paths.sort();

    let items = paths
        .into_par_iter()
        .map(load_item)
        .collect::<Result<Vec<_>>>()?;

    Ok(ContentCollection::new(items))
}

/// Collect paths of all `.toml` files under `dir`, recursively.
/// Other files (images, markdown bodies) are ignored.
fn collect_front_matter_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry =
            entry.with_context(|| format!("Failed to walk content dir: {}", dir.display()))?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "toml")
        {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// Parse a single front-matter file into a `ContentItem`.
fn load_item(path: PathBuf) -> Result<ContentItem> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read front matter: {}", path.display()))?;
    let data: FrontMatter = toml::from_str(&content)
        .with_context(|| format!("Invalid front matter: {}", path.display()))?;
    Ok(ContentItem { source: path, data })
}
