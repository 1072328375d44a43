use crate::config::DescribeConfig;
use crate::error::{Result, TagNextError};
use git2::{DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode, Repository as Git2Repo};
use std::path::{Path, PathBuf};

/// Ascend from `start` to the root of the enclosing git repository.
///
/// Returns the work tree root, or the git directory itself for a bare
/// repository.
pub fn locate_repository_root(start: &Path) -> Result<PathBuf> {
    let repo = Git2Repo::discover(start).map_err(|e| {
        TagNextError::RepoNotFound(format!("{}: {}", start.display(), e.message()))
    })?;

    let root = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
    tracing::debug!(root = %root.display(), "located repository root");
    Ok(root)
}

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    describe: DescribeConfig,
}

impl Git2Repository {
    /// Open the repository whose root is `root`
    pub fn open<P: AsRef<Path>>(root: P, describe: DescribeConfig) -> Result<Self> {
        let root = root.as_ref();
        let repo = Git2Repo::open(root).map_err(|e| {
            TagNextError::RepoNotFound(format!("{}: {}", root.display(), e.message()))
        })?;

        Ok(Git2Repository { repo, describe })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo, describe: DescribeConfig) -> Self {
        Git2Repository { repo, describe }
    }

    fn describe_options(&self) -> DescribeOptions {
        let mut options = DescribeOptions::new();
        if self.describe.include_lightweight {
            options.describe_tags();
        }
        if let Some(pattern) = &self.describe.pattern {
            options.pattern(pattern);
        }
        options.only_follow_first_parent(self.describe.first_parent);
        options
    }
}

/// libgit2 reports "no candidate tags" either as `NotFound` or as a generic
/// error of class `Describe`; an unborn HEAD surfaces as a reference error.
fn no_tag_to_describe(e: &git2::Error) -> bool {
    e.class() == ErrorClass::Describe
        || matches!(e.code(), ErrorCode::NotFound | ErrorCode::UnbornBranch)
}

impl super::Repository for Git2Repository {
    fn latest_tag(&self) -> Result<Option<String>> {
        let describe = match self.repo.describe(&self.describe_options()) {
            Ok(describe) => describe,
            Err(e) if no_tag_to_describe(&e) => {
                tracing::debug!(error = %e.message(), "describe found no tag");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        let tag = describe.format(Some(&format))?;

        tracing::debug!(%tag, "latest tag");
        Ok(Some(tag))
    }

    fn object_exists(&self, name: &str) -> Result<bool> {
        match self.repo.revparse_single(name) {
            Ok(object) => {
                tracing::debug!(%name, id = %object.id(), "name resolves to an object");
                Ok(true)
            }
            Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::InvalidSpec) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
