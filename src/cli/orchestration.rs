//! Main workflow orchestration logic
//!
//! Connects parsed [Options] to the repository and the resolver. Nothing
//! here prints; the caller decides how to render the [WorkflowResult].

use std::path::{Path, PathBuf};

use crate::cli::Options;
use crate::config::{self, Config};
use crate::domain::BumpMode;
use crate::error::Result;
use crate::git::{locate_repository_root, Git2Repository};
use crate::resolver::{Resolution, TagResolver};

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Root of the repository that was inspected
    pub root: PathBuf,

    pub resolution: Resolution,

    /// Whether the labelled table should be printed, from the flag or config
    pub verbose: bool,
}

/// Main workflow
///
/// 1. Locate the repository root from `options.repo` or `cwd`
/// 2. Load configuration
/// 3. Resolve the latest tag, and the next one if a bump was requested
///
/// `-latest` always reports the latest tag unchanged.
pub fn run_workflow(options: &Options, cwd: &Path) -> Result<WorkflowResult> {
    let start = options.repo.as_deref().unwrap_or(cwd);
    let root = locate_repository_root(start)?;
    let config = config::load_config(options.config_path.as_deref(), &root)?;

    let resolution = resolve_in(&root, &config, effective_mode(options))?;

    Ok(WorkflowResult {
        verbose: options.verbose || config.output.verbose,
        root,
        resolution,
    })
}

fn effective_mode(options: &Options) -> BumpMode {
    if options.latest {
        BumpMode::None
    } else {
        options.bump
    }
}

fn resolve_in(root: &Path, config: &Config, mode: BumpMode) -> Result<Resolution> {
    let repo = Git2Repository::open(root, config.describe.clone())?;
    TagResolver::new(repo).resolve(mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_overrides_bump() {
        let options = Options {
            latest: true,
            bump: BumpMode::Major,
            ..Options::default()
        };
        assert_eq!(effective_mode(&options), BumpMode::None);
    }

    #[test]
    fn test_bump_passes_through() {
        let options = Options {
            bump: BumpMode::Patch,
            ..Options::default()
        };
        assert_eq!(effective_mode(&options), BumpMode::Patch);
    }
}
