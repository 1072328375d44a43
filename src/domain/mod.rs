//! Domain logic - pure version rules independent of git operations

pub mod bump;
pub mod version;

pub use bump::BumpMode;
pub use version::{bump, format_tag, parse_version, validate_successor, Version, TAG_PREFIX};
