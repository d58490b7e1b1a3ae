//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn language() -> String {
        "en-US".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn data_dir() -> String {
        "_data".into()
    }
}

// ============================================================================
// [collections] Section Defaults
// ============================================================================

pub mod collections {
    use crate::collections::tags::STRUCTURAL_TAGS;

    pub fn excluded_tags() -> Vec<String> {
        STRUCTURAL_TAGS.iter().map(|s| (*s).to_string()).collect()
    }

    pub fn projects_tag() -> String {
        "projects".into()
    }

    pub fn projects_limit() -> usize {
        6
    }
}
