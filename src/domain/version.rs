use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::BumpMode;
use crate::error::{Result, TagNextError};

/// Prefix every release tag carries in front of the major field.
pub const TAG_PREFIX: char = 'v';

static MAJOR_COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v(\d+)$").expect("major component pattern is valid"));

static NUMERIC_COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("numeric component pattern is valid"));

/// Semantic version taken from a `v<major>.<minor>.<patch>` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Bump version according to bump mode
    ///
    /// Lower fields reset to zero when a higher one is incremented.
    /// A field already at `u64::MAX` cannot be incremented.
    pub fn bump(&self, mode: BumpMode) -> Result<Self> {
        let next = |field: u64, name: &str| {
            field.checked_add(1).ok_or_else(|| {
                TagNextError::malformed(format!("{} field of {} cannot be incremented", name, self))
            })
        };

        Ok(match mode {
            BumpMode::None => *self,
            BumpMode::Major => Version::new(next(self.major, "major")?, 0, 0),
            BumpMode::Minor => Version::new(self.major, next(self.minor, "minor")?, 0),
            BumpMode::Patch => Version::new(self.major, self.minor, next(self.patch, "patch")?),
        })
    }

    /// Render as a release tag, e.g. `v1.2.3`
    pub fn to_tag(&self) -> String {
        format!("{}{}", TAG_PREFIX, self)
    }

    pub fn to_semver(&self) -> semver::Version {
        semver::Version::new(self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<Version> for semver::Version {
    fn from(version: Version) -> Self {
        version.to_semver()
    }
}

/// Parses a release tag of the form `v<major>.<minor>.<patch>`.
///
/// The tag must split on `.` into exactly three components, the first of
/// which is `v` followed by digits. Leading zeros are accepted and dropped,
/// so formatting the result yields the normalized tag.
///
/// # Example
/// ```
/// use tag_next::domain::{parse_version, Version};
///
/// assert_eq!(parse_version("v1.2.3").unwrap(), Version::new(1, 2, 3));
/// assert!(parse_version("1.2.3").is_err());
/// ```
pub fn parse_version(tag: &str) -> Result<Version> {
    let parts: Vec<&str> = tag.split('.').collect();
    if parts.len() != 3 {
        return Err(TagNextError::malformed(format!(
            "'{}' has {} dot-separated elements, expected v<major>.<minor>.<patch>",
            tag,
            parts.len()
        )));
    }

    let major = MAJOR_COMPONENT
        .captures(parts[0])
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| {
            TagNextError::malformed(format!(
                "'{}' must start with '{}' followed by the major version",
                tag, TAG_PREFIX
            ))
        })?;

    let major = parse_field(tag, "major", major.as_str())?;
    let minor = parse_field(tag, "minor", parts[1])?;
    let patch = parse_field(tag, "patch", parts[2])?;

    Ok(Version::new(major, minor, patch))
}

fn parse_field(tag: &str, name: &str, text: &str) -> Result<u64> {
    if !NUMERIC_COMPONENT.is_match(text) {
        return Err(TagNextError::malformed(format!(
            "'{}' has a non-numeric {} field '{}'",
            tag, name, text
        )));
    }

    text.parse::<u64>().map_err(|_| {
        TagNextError::malformed(format!("'{}' has an out of range {} field '{}'", tag, name, text))
    })
}

/// Applies `mode` to `version`.
pub fn bump(version: Version, mode: BumpMode) -> Result<Version> {
    version.bump(mode)
}

/// Renders `version` as `v<major>.<minor>.<patch>`.
pub fn format_tag(version: &Version) -> String {
    version.to_tag()
}

/// Checks that `proposed` is a well-formed successor of `latest`.
///
/// The proposed tag must survive a parse/format round trip and must have
/// strictly higher semver precedence than the latest version.
pub fn validate_successor(latest: &Version, proposed: &str) -> Result<Version> {
    let parsed = parse_version(proposed)?;
    if parsed.to_tag() != proposed {
        return Err(TagNextError::malformed(format!(
            "proposed tag '{}' is not in normalized form",
            proposed
        )));
    }

    if parsed.to_semver() <= latest.to_semver() {
        return Err(TagNextError::malformed(format!(
            "proposed tag '{}' does not come after {}",
            proposed,
            latest.to_tag()
        )));
    }

    Ok(parsed)
}
