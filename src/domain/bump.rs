use std::fmt;

/// Which semantic version field to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpMode {
    /// Report the latest tag unchanged
    #[default]
    None,
    Major,
    Minor,
    Patch,
}

impl BumpMode {
    /// Resolve the bump mode from the command-line flags.
    ///
    /// `-major` and `-patch` take precedence over the minor bump implied by
    /// a bare `-next`. Callers reject `-major` together with `-patch` before
    /// getting here.
    pub fn from_flags(next: bool, major: bool, patch: bool) -> Self {
        if major {
            BumpMode::Major
        } else if patch {
            BumpMode::Patch
        } else if next {
            BumpMode::Minor
        } else {
            BumpMode::None
        }
    }

    pub fn is_bump(&self) -> bool {
        *self != BumpMode::None
    }
}

impl fmt::Display for BumpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpMode::None => "none",
            BumpMode::Major => "major",
            BumpMode::Minor => "minor",
            BumpMode::Patch => "patch",
        };
        f.write_str(name)
    }
}
