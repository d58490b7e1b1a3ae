//! `[build]` section configuration.
//!
//! Paths for content input and data-file output.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in stanza.toml - build paths.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"
/// output = "public"
/// data_dir = "_data"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (set from CLI, not usually in the file).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Directory holding front-matter files, one per content item.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Output directory the site generator publishes from.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Subdirectory of `output` where collection JSON files are written.
    #[serde(default = "defaults::build::data_dir")]
    #[educe(Default = defaults::build::data_dir())]
    pub data_dir: String,
}

impl BuildConfig {
    /// Full path of the data directory (`<output>/<data_dir>`).
    pub fn data_path(&self) -> PathBuf {
        self.output.join(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.data_dir, "_data");
        assert_eq!(config.build.data_path(), PathBuf::from("public/_data"));
    }

    #[test]
    fn test_build_config_custom_paths() {
        let toml = r#"
            [build]
            content = "site/content"
            output = "dist"
            data_dir = "data"
        "#;
        let config = SiteConfig::from_str(toml).unwrap();
        assert_eq!(config.build.content, PathBuf::from("site/content"));
        assert_eq!(config.build.data_path(), PathBuf::from("dist/data"));
    }
}
