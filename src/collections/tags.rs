//! Tag aggregation across the content collection.

use crate::content::ContentCollection;
use std::collections::BTreeSet;

/// Structural tags excluded from aggregated tag listings by default.
///
/// These mark navigation/organization (the "all" pseudo-collection, nav
/// entries, the post/projects groupings) rather than describing content.
/// This list should match the filter list in the tag-listing template.
pub const STRUCTURAL_TAGS: [&str; 6] = ["all", "nav", "post", "posts", "projects", "no"];

/// Collects the union of content tags, minus an exclusion list.
///
/// Items without a `tags` field are skipped; duplicates collapse. Output
/// is sorted for deterministic builds (callers must not rely on any
/// particular order beyond that).
#[derive(Debug, Clone)]
pub struct TagCollector {
    excluded: BTreeSet<String>,
}

impl Default for TagCollector {
    fn default() -> Self {
        Self::new(STRUCTURAL_TAGS.iter().map(|s| (*s).to_string()))
    }
}

impl TagCollector {
    /// Create a collector with an explicit exclusion list.
    pub fn new(excluded: impl IntoIterator<Item = String>) -> Self {
        Self {
            excluded: excluded.into_iter().collect(),
        }
    }

    /// Aggregate tags from all non-draft items.
    pub fn collect(&self, collection: &ContentCollection) -> Vec<String> {
        let mut tag_set = BTreeSet::new();

        for item in collection.get_all() {
            if item.data.draft || !item.data.has_tags() {
                continue;
            }
            for tag in item.data.tags() {
                if !self.excluded.contains(tag) {
                    tag_set.insert(tag.clone());
                }
            }
        }

        tag_set.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentItem, FrontMatter};
    use std::path::PathBuf;

    fn item(tags: Option<&[&str]>) -> ContentItem {
        ContentItem {
            source: PathBuf::from("test.toml"),
            data: FrontMatter {
                tags: tags.map(|t| t.iter().map(|s| (*s).to_string()).collect()),
                ..FrontMatter::default()
            },
        }
    }

    #[test]
    fn test_collect_empty_collection() {
        let collector = TagCollector::default();
        assert!(collector.collect(&ContentCollection::default()).is_empty());
    }

    #[test]
    fn test_collect_excludes_structural_tags() {
        let collector = TagCollector::default();
        let collection = ContentCollection::new(vec![item(Some(&[
            "all", "nav", "post", "posts", "projects", "no", "rust",
        ]))]);

        assert_eq!(collector.collect(&collection), ["rust"]);
    }

    #[test]
    fn test_collect_output_never_contains_denylist() {
        let collector = TagCollector::default();
        let collection = ContentCollection::new(vec![
            item(Some(&["posts", "a"])),
            item(Some(&["nav"])),
            item(Some(&["projects", "b"])),
        ]);

        let tags = collector.collect(&collection);
        for structural in STRUCTURAL_TAGS {
            assert!(!tags.iter().any(|t| t == structural));
        }
        assert_eq!(tags, ["a", "b"]);
    }

    #[test]
    fn test_collect_deduplicates() {
        let collector = TagCollector::default();
        let collection = ContentCollection::new(vec![
            item(Some(&["rust", "web"])),
            item(Some(&["rust"])),
            item(Some(&["web", "rust"])),
        ]);

        assert_eq!(collector.collect(&collection), ["rust", "web"]);
    }

    #[test]
    fn test_collect_skips_items_without_tags() {
        let collector = TagCollector::default();
        let collection = ContentCollection::new(vec![
            item(Some(&["a", "b", "nav"])),
            item(Some(&["b", "c"])),
            item(None),
        ]);

        assert_eq!(collector.collect(&collection), ["a", "b", "c"]);
    }

    #[test]
    fn test_collect_skips_drafts() {
        let collector = TagCollector::default();
        let mut draft = item(Some(&["secret"]));
        draft.data.draft = true;
        let collection = ContentCollection::new(vec![draft, item(Some(&["public"]))]);

        assert_eq!(collector.collect(&collection), ["public"]);
    }

    #[test]
    fn test_collect_custom_exclusion_list() {
        let collector = TagCollector::new(["meta".to_string()]);
        let collection = ContentCollection::new(vec![item(Some(&["meta", "posts", "rust"]))]);

        // custom list replaces the default, so "posts" survives
        assert_eq!(collector.collect(&collection), ["posts", "rust"]);
    }

    #[test]
    fn test_collect_empty_tags_field_contributes_nothing() {
        let collector = TagCollector::default();
        let collection = ContentCollection::new(vec![item(Some(&[]))]);
        assert!(collector.collect(&collection).is_empty());
    }
}
