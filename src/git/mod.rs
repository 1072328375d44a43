//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the two read-only
//! questions tag-next asks a repository: which tag is nearest to HEAD, and
//! whether a name already resolves to an object.
//!
//! The concrete implementations are:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! Code that resolves tags depends on the [Repository] trait so it can be
//! exercised without a repository on disk.
//!
//! ```rust
//! # use tag_next::git::{MockRepository, Repository};
//! let repo = MockRepository::new().with_latest_tag("v1.2.3");
//! assert_eq!(repo.latest_tag().unwrap().as_deref(), Some("v1.2.3"));
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::{locate_repository_root, Git2Repository};

use crate::error::Result;

/// Read-only repository queries needed to resolve release tags
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// "nothing there" outcomes to `Ok(None)` / `Ok(false)` and reserve errors
/// for genuine failures, leaving it to the caller to decide which absent
/// answers are fatal.
pub trait Repository {
    /// Get the most recent tag reachable from HEAD
    ///
    /// Returns the bare tag name, without the `-<n>-g<hash>` suffix that
    /// `git describe` appends when HEAD is past the tag.
    ///
    /// # Returns
    /// * `Ok(Some(name))` - The nearest tag
    /// * `Ok(None)` - No tag qualifies, or HEAD is unborn
    /// * `Err` - If there's a Git error
    fn latest_tag(&self) -> Result<Option<String>>;

    /// Check whether a name resolves to any object
    ///
    /// The name is interpreted as a revision, so tags, branches and other
    /// references all count.
    ///
    /// # Arguments
    /// * `name` - Revision to look up (e.g., "v1.3.0")
    ///
    /// # Returns
    /// * `Ok(true)` - The name resolves to an object
    /// * `Ok(false)` - Nothing by that name
    /// * `Err` - If there's a Git error
    fn object_exists(&self, name: &str) -> Result<bool>;
}
