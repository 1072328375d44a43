use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TagNextError};

/// File name looked up at the repository root.
pub const REPO_CONFIG_FILE: &str = "tagnext.toml";

/// File name looked up in the user configuration directory.
pub const USER_CONFIG_FILE: &str = ".tagnext.toml";

/// Represents the complete configuration for tag-next.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub describe: DescribeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_include_lightweight() -> bool {
    true
}

/// Controls how the latest tag is searched for.
///
/// Mirrors the knobs of `git describe`: `include_lightweight` is `--tags`,
/// `pattern` is `--match`, `first_parent` is `--first-parent`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DescribeConfig {
    #[serde(default = "default_include_lightweight")]
    pub include_lightweight: bool,

    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub first_parent: bool,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        DescribeConfig {
            include_lightweight: default_include_lightweight(),
            pattern: None,
            first_parent: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbose: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagnext.toml` at the repository root
/// 3. `.tagnext.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `repo_root` - Root of the repository being inspected
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If the file exists but cannot be read or parsed, or if an
///   explicit path does not exist
pub fn load_config(config_path: Option<&Path>, repo_root: &Path) -> Result<Config> {
    match find_config_file(config_path, repo_root) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let config_str = fs::read_to_string(&path).map_err(|e| {
                TagNextError::config(format!("cannot read {}: {}", path.display(), e))
            })?;
            parse_config(&config_str)
                .map_err(|e| TagNextError::config(format!("{}: {}", path.display(), e)))
        }
        None => Ok(Config::default()),
    }
}

fn find_config_file(config_path: Option<&Path>, repo_root: &Path) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let repo_config = repo_root.join(REPO_CONFIG_FILE);
    if repo_config.is_file() {
        return Some(repo_config);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.is_file())
}

/// Parses configuration text.
pub fn parse_config(config_str: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(config_str)
}
