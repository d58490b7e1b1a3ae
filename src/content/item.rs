//! Content items and the build-time collection.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Front-matter metadata for a single content item.
///
/// The schema is open: unknown metadata keys are ignored rather than
/// failing the build, since front matter routinely carries fields only
/// templates care about.
///
/// `tags` is `Option` because "no tags field" and "empty tags list" are
/// different statements in the source format: items without the field are
/// skipped entirely by tag aggregation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FrontMatter {
    pub title: Option<String>,

    /// Custom output URL
    #[serde(default)]
    pub url: Option<String>,

    /// Optional summary/description
    #[serde(default)]
    pub summary: Option<String>,

    /// Publication date string; parsed lazily by consumers that order by it.
    pub date: Option<String>,

    /// Author name
    #[serde(default)]
    pub author: Option<String>,

    /// Whether this is a draft (not published)
    #[serde(default)]
    pub draft: bool,

    /// Tags for categorizing the item. Absent when the source carries none.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl FrontMatter {
    /// Tags as a slice; empty when the field is absent.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// Whether the front matter carries a `tags` field at all.
    pub const fn has_tags(&self) -> bool {
        self.tags.is_some()
    }

    /// Whether `tags` contains the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }
}

/// A unit of site content: source path plus its front matter.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContentItem {
    /// Source front-matter file path
    pub source: PathBuf,
    /// Parsed front matter
    pub data: FrontMatter,
}

/// The full set of content items for a build.
///
/// Read-only from the perspective of collection computations. Items are
/// held in loader order (sorted by source path), which downstream sorts
/// rely on for deterministic tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct ContentCollection {
    items: Vec<ContentItem>,
}

impl ContentCollection {
    /// Create a collection from already-loaded items.
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// All items, in loader order.
    pub fn get_all(&self) -> &[ContentItem] {
        &self.items
    }

    /// Number of items.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no items.
    #[allow(dead_code)]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
