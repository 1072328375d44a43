//! Latest-tag lookup and next-tag computation
//!
//! [TagResolver] runs the linear pipeline: fetch the latest tag, and when a
//! bump is requested parse it, bump it, validate the result and make sure
//! nothing in the repository already goes by that name.

use crate::domain::{self, BumpMode};
use crate::error::{Result, TagNextError};
use crate::git::Repository;

/// Outcome of a single resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The nearest tag reachable from HEAD, as reported by git
    pub latest: String,

    /// The computed next tag, present only when a bump was requested
    pub proposed: Option<String>,
}

impl Resolution {
    /// The tag to report: the proposed one if computed, otherwise the latest.
    pub fn output_tag(&self) -> &str {
        self.proposed.as_deref().unwrap_or(&self.latest)
    }
}

pub struct TagResolver<R: Repository> {
    repo: R,
}

impl<R: Repository> TagResolver<R> {
    pub fn new(repo: R) -> Self {
        TagResolver { repo }
    }

    /// Get the nearest tag reachable from HEAD, failing if there is none.
    pub fn latest_tag(&self) -> Result<String> {
        self.repo.latest_tag()?.ok_or_else(|| {
            TagNextError::NoTagFound("no tag is reachable from HEAD".to_string())
        })
    }

    /// Fail if `tag` already names an object in the repository.
    pub fn ensure_tag_is_new(&self, tag: &str) -> Result<()> {
        if self.repo.object_exists(tag)? {
            return Err(TagNextError::TagCollision(format!(
                "'{}' already refers to an object in this repository",
                tag
            )));
        }
        Ok(())
    }

    /// Compute the next tag after `latest` for `mode`.
    pub fn next_tag(&self, latest: &str, mode: BumpMode) -> Result<String> {
        let current = domain::parse_version(latest)?;
        let next = domain::bump(current, mode)?;
        let proposed = domain::format_tag(&next);

        domain::validate_successor(&current, &proposed)?;
        self.ensure_tag_is_new(&proposed)?;

        tracing::debug!(%latest, %proposed, %mode, "computed next tag");
        Ok(proposed)
    }

    /// Resolve the latest tag and, if `mode` asks for one, the next tag.
    pub fn resolve(&self, mode: BumpMode) -> Result<Resolution> {
        let latest = self.latest_tag()?;

        let proposed = if mode.is_bump() {
            Some(self.next_tag(&latest, mode)?)
        } else {
            None
        };

        Ok(Resolution { latest, proposed })
    }
}
