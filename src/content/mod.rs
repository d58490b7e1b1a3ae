//! Content model: front matter, items, and the build-time collection.
//!
//! A `ContentCollection` is the full, read-only set of items available to
//! a build. Collection computations (see `crate::collections`) only ever
//! derive from it; nothing here is mutated after loading.

pub mod date;
pub mod item;
pub mod loader;

pub use date::{DateError, PublishDate};
pub use item::{ContentCollection, ContentItem, FrontMatter};
