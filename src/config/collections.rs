//! `[collections]` section configuration.
//!
//! Settings for the built-in collection computations. The structural-tag
//! denylist lives here as an explicit configuration value rather than
//! hidden inside the tag aggregation logic.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[collections]` section in stanza.toml.
///
/// # Example
/// ```toml
/// [collections]
/// excluded_tags = ["all", "nav", "post", "posts", "projects", "no"]
/// projects_tag = "projects"
/// projects_limit = 6
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct CollectionsConfig {
    /// Structural tags excluded from the aggregated tag listing.
    /// These mark navigation/organization, not content.
    #[serde(default = "defaults::collections::excluded_tags")]
    #[educe(Default = defaults::collections::excluded_tags())]
    pub excluded_tags: Vec<String>,

    /// Tag that marks an item as a project.
    #[serde(default = "defaults::collections::projects_tag")]
    #[educe(Default = defaults::collections::projects_tag())]
    pub projects_tag: String,

    /// Maximum number of items in the top-projects collection. Must be >= 1.
    #[serde(default = "defaults::collections::projects_limit")]
    #[educe(Default = defaults::collections::projects_limit())]
    pub projects_limit: usize,
}
