//! Most-recent-first selection of project items.

use crate::content::{ContentCollection, ContentItem, DateError, PublishDate};
use std::path::PathBuf;
use thiserror::Error;

/// Default number of projects to keep.
pub const DEFAULT_LIMIT: usize = 6;

/// Default tag marking an item as a project.
pub const DEFAULT_TAG: &str = "projects";

/// Selection errors.
///
/// A project item without a usable date would otherwise sort
/// unpredictably, so both cases are hard errors rather than silent
/// misordering.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("missing date in `{path}` (tagged `{tag}`)")]
    MissingDate { path: PathBuf, tag: String },

    #[error("invalid date in `{path}`")]
    InvalidDate {
        path: PathBuf,
        #[source]
        error: DateError,
    },
}

/// Selects the `limit` most recent items carrying the project tag.
///
/// Items are stable-sorted ascending by date, reversed, then truncated.
/// Equal dates therefore come out in reverse collection order.
#[derive(Debug, Clone)]
pub struct TopProjectsSelector {
    tag: String,
    limit: usize,
}

impl Default for TopProjectsSelector {
    fn default() -> Self {
        Self::new(DEFAULT_TAG.to_string(), DEFAULT_LIMIT)
    }
}

impl TopProjectsSelector {
    /// Create a selector for `tag` keeping at most `limit` items.
    pub const fn new(tag: String, limit: usize) -> Self {
        Self { tag, limit }
    }

    /// Select the most recent project items, newest first.
    ///
    /// # Errors
    ///
    /// Fails when a matching item has no `date` or one that does not parse.
    pub fn select<'a>(
        &self,
        collection: &'a ContentCollection,
    ) -> Result<Vec<&'a ContentItem>, SelectError> {
        let mut dated: Vec<(PublishDate, &ContentItem)> = collection
            .get_all()
            .iter()
            .filter(|item| !item.data.draft && item.data.has_tag(&self.tag))
            .map(|item| self.parse_date(item).map(|date| (date, item)))
            .collect::<Result<_, _>>()?;

        // Stable ascending sort, then reverse: newest first, ties in
        // reverse collection order.
        dated.sort_by_key(|(date, _)| *date);
        dated.reverse();
        dated.truncate(self.limit);

        Ok(dated.into_iter().map(|(_, item)| item).collect())
    }

    fn parse_date(&self, item: &ContentItem) -> Result<PublishDate, SelectError> {
        let raw = item.data.date.as_deref().ok_or_else(|| SelectError::MissingDate {
            path: item.source.clone(),
            tag: self.tag.clone(),
        })?;
        raw.parse().map_err(|error| SelectError::InvalidDate {
            path: item.source.clone(),
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use std::path::PathBuf;

    fn project(name: &str, date: Option<&str>) -> ContentItem {
        ContentItem {
            source: PathBuf::from(format!("{name}.toml")),
            data: FrontMatter {
                title: Some(name.to_string()),
                date: date.map(str::to_string),
                tags: Some(vec!["projects".to_string()]),
                ..FrontMatter::default()
            },
        }
    }

    fn untagged(name: &str, tags: Option<&[&str]>) -> ContentItem {
        ContentItem {
            source: PathBuf::from(format!("{name}.toml")),
            data: FrontMatter {
                title: Some(name.to_string()),
                tags: tags.map(|t| t.iter().map(|s| (*s).to_string()).collect()),
                ..FrontMatter::default()
            },
        }
    }

    fn titles(items: &[&ContentItem]) -> Vec<String> {
        items
            .iter()
            .map(|i| i.data.title.clone().unwrap())
            .collect()
    }

    #[test]
    fn test_select_empty_collection() {
        let selector = TopProjectsSelector::default();
        let collection = ContentCollection::default();
        let result = selector.select(&collection).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_select_newest_first() {
        let selector = TopProjectsSelector::default();
        let collection = ContentCollection::new(vec![
            project("old", Some("2020-01-01")),
            project("new", Some("2023-05-01")),
            untagged("nav-item", Some(&["nav"])),
        ]);

        let result = selector.select(&collection).unwrap();
        assert_eq!(titles(&result), ["new", "old"]);
    }

    #[test]
    fn test_select_only_tagged_items() {
        let selector = TopProjectsSelector::default();
        let collection = ContentCollection::new(vec![
            project("p1", Some("2022-01-01")),
            untagged("no-tags", None),
            untagged("other", Some(&["rust", "web"])),
        ]);

        let result = selector.select(&collection).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.iter().all(|i| i.data.has_tag("projects")));
    }

    #[test]
    fn test_select_truncates_to_limit() {
        let selector = TopProjectsSelector::default();
        let items: Vec<_> = (1..=9)
            .map(|d| project(&format!("p{d}"), Some(&format!("2024-01-0{d}"))))
            .collect();
        let collection = ContentCollection::new(items);

        let result = selector.select(&collection).unwrap();
        assert_eq!(result.len(), DEFAULT_LIMIT);
        // Newest of the nine
        assert_eq!(result[0].data.title.as_deref(), Some("p9"));
        assert_eq!(result[5].data.title.as_deref(), Some("p4"));
    }

    #[test]
    fn test_select_fewer_than_limit() {
        let selector = TopProjectsSelector::default();
        let collection = ContentCollection::new(vec![
            project("a", Some("2024-01-01")),
            project("b", Some("2024-02-01")),
        ]);

        let result = selector.select(&collection).unwrap();
        assert_eq!(titles(&result), ["b", "a"]);
    }

    #[test]
    fn test_select_dates_non_increasing() {
        let selector = TopProjectsSelector::default();
        let collection = ContentCollection::new(vec![
            project("a", Some("2021-06-01")),
            project("b", Some("2024-02-01")),
            project("c", Some("2019-11-11")),
            project("d", Some("2022-08-15")),
        ]);

        let result = selector.select(&collection).unwrap();
        let dates: Vec<PublishDate> = result
            .iter()
            .map(|i| i.data.date.as_deref().unwrap().parse().unwrap())
            .collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_select_ties_in_reverse_collection_order() {
        let selector = TopProjectsSelector::default();
        let collection = ContentCollection::new(vec![
            project("first", Some("2024-01-01")),
            project("second", Some("2024-01-01")),
            project("third", Some("2024-01-01")),
        ]);

        let result = selector.select(&collection).unwrap();
        assert_eq!(titles(&result), ["third", "second", "first"]);
    }

    #[test]
    fn test_select_missing_date_is_error() {
        let selector = TopProjectsSelector::default();
        let collection = ContentCollection::new(vec![project("undated", None)]);

        let err = selector.select(&collection).unwrap_err();
        assert!(matches!(err, SelectError::MissingDate { .. }));
        assert!(err.to_string().contains("undated.toml"));
    }

    #[test]
    fn test_select_invalid_date_is_error() {
        let selector = TopProjectsSelector::default();
        let collection = ContentCollection::new(vec![project("bad", Some("someday"))]);

        let err = selector.select(&collection).unwrap_err();
        assert!(matches!(err, SelectError::InvalidDate { .. }));
        assert!(err.to_string().contains("bad.toml"));
        // the unparseable value is reported through the error chain
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("someday"));
    }

    #[test]
    fn test_select_missing_date_on_untagged_item_is_fine() {
        // Only project-tagged items need dates
        let selector = TopProjectsSelector::default();
        let collection = ContentCollection::new(vec![
            project("p", Some("2024-01-01")),
            untagged("page", Some(&["about"])),
        ]);

        assert!(selector.select(&collection).is_ok());
    }

    #[test]
    fn test_select_skips_drafts() {
        let selector = TopProjectsSelector::default();
        let mut draft = project("draft", Some("2030-01-01"));
        draft.data.draft = true;
        let collection =
            ContentCollection::new(vec![draft, project("published", Some("2024-01-01"))]);

        let result = selector.select(&collection).unwrap();
        assert_eq!(titles(&result), ["published"]);
    }

    #[test]
    fn test_select_custom_tag_and_limit() {
        let selector = TopProjectsSelector::new("work".to_string(), 1);
        let collection = ContentCollection::new(vec![
            ContentItem {
                source: PathBuf::from("w1.toml"),
                data: FrontMatter {
                    title: Some("w1".into()),
                    date: Some("2023-01-01".into()),
                    tags: Some(vec!["work".into()]),
                    ..FrontMatter::default()
                },
            },
            ContentItem {
                source: PathBuf::from("w2.toml"),
                data: FrontMatter {
                    title: Some("w2".into()),
                    date: Some("2024-01-01".into()),
                    tags: Some(vec!["work".into()]),
                    ..FrontMatter::default()
                },
            },
        ]);

        let result = selector.select(&collection).unwrap();
        assert_eq!(titles(&result), ["w2"]);
    }

    #[test]
    fn test_select_rfc3339_ordering_within_a_day() {
        let selector = TopProjectsSelector::default();
        let collection = ContentCollection::new(vec![
            project("morning", Some("2024-01-01T08:00:00Z")),
            project("evening", Some("2024-01-01T20:00:00Z")),
        ]);

        let result = selector.select(&collection).unwrap();
        assert_eq!(titles(&result), ["evening", "morning"]);
    }
}
