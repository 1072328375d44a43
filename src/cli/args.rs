//! Command-line parsing
//!
//! Flags are written single-dash style (`-next`, `-verbose`), matched
//! case-insensitively and with any number of leading dashes. [normalize_args]
//! rewrites them into clap's canonical long form before [Args] parses them.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind as ClapErrorKind};
use clap::Parser;

use crate::domain::BumpMode;
use crate::error::{Result, TagNextError};

#[derive(clap::Parser, Debug)]
#[command(
    name = "tag-next",
    version,
    about = "Print the latest git tag or compute the next release tag"
)]
pub struct Args {
    #[arg(long, conflicts_with_all = ["next", "patch", "major"], help = "Print the latest tag (default)")]
    pub latest: bool,

    #[arg(long, help = "Compute the next tag with a minor bump")]
    pub next: bool,

    #[arg(long, conflicts_with = "major", help = "Bump the patch field instead")]
    pub patch: bool,

    #[arg(long, help = "Bump the major field instead")]
    pub major: bool,

    #[arg(short, long, help = "Print the latest and proposed tag as a table")]
    pub verbose: bool,

    #[arg(long, value_name = "PATH", help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "DIR", help = "Directory to search for the repository from")]
    pub repo: Option<PathBuf>,
}

/// Immutable options for one run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub verbose: bool,
    pub latest: bool,
    pub bump: BumpMode,
    pub config_path: Option<PathBuf>,
    pub repo: Option<PathBuf>,
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Options {
            verbose: args.verbose,
            latest: args.latest,
            bump: BumpMode::from_flags(args.next, args.major, args.patch),
            config_path: args.config,
            repo: args.repo,
        }
    }
}

/// What the command line asked for
#[derive(Debug)]
pub enum Invocation {
    Run(Options),
    /// Help or version text; print it and exit successfully
    Info(String),
}

struct FlagSpec {
    names: &'static [&'static str],
    canonical: &'static str,
    takes_value: bool,
}

const FLAGS: &[FlagSpec] = &[
    FlagSpec { names: &["help", "h"], canonical: "--help", takes_value: false },
    FlagSpec { names: &["latest"], canonical: "--latest", takes_value: false },
    FlagSpec { names: &["next"], canonical: "--next", takes_value: false },
    FlagSpec { names: &["patch"], canonical: "--patch", takes_value: false },
    FlagSpec { names: &["major"], canonical: "--major", takes_value: false },
    FlagSpec { names: &["verbose", "v"], canonical: "--verbose", takes_value: false },
    FlagSpec { names: &["version"], canonical: "--version", takes_value: false },
    FlagSpec { names: &["config"], canonical: "--config", takes_value: true },
    FlagSpec { names: &["repo"], canonical: "--repo", takes_value: true },
];

fn lookup_flag(name: &str) -> Option<&'static FlagSpec> {
    let name = name.to_ascii_lowercase();
    FLAGS.iter().find(|spec| spec.names.contains(&name.as_str()))
}

/// Rewrite raw arguments into clap's canonical long-flag form.
///
/// The first element is the program name and is passed through. Values of
/// `-config`/`-repo` are passed through untouched, either as the following
/// argument or after `=`.
pub fn normalize_args<I, T>(raw: I) -> Result<Vec<OsString>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut raw = raw.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = raw.next().into_iter().collect();
    let mut pending: Option<&'static str> = None;

    for arg in raw {
        if let Some(canonical) = pending.take() {
            let mut joined = OsString::from(format!("{}=", canonical));
            joined.push(&arg);
            normalized.push(joined);
            continue;
        }

        let text = arg
            .to_str()
            .ok_or_else(|| TagNextError::UnknownArgument(arg.to_string_lossy().into_owned()))?;
        let unknown = || TagNextError::UnknownArgument(text.to_string());

        let stripped = text.trim_start_matches('-');
        if stripped.len() == text.len() || stripped.is_empty() {
            return Err(unknown());
        }

        let (name, value) = match stripped.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (stripped, None),
        };

        let spec = lookup_flag(name).ok_or_else(unknown)?;
        match (spec.takes_value, value) {
            (true, Some(value)) => normalized.push(format!("{}={}", spec.canonical, value).into()),
            (true, None) => pending = Some(spec.canonical),
            (false, Some(_)) => {
                return Err(TagNextError::usage(format!(
                    "'{}' does not take a value",
                    text
                )))
            }
            (false, None) => normalized.push(spec.canonical.into()),
        }
    }

    if let Some(canonical) = pending {
        return Err(TagNextError::usage(format!(
            "'{}' requires a value",
            canonical.trim_start_matches('-')
        )));
    }

    Ok(normalized)
}

fn context_text(err: &clap::Error, kind: ContextKind) -> Option<String> {
    match err.get(kind)? {
        ContextValue::String(s) => Some(s.clone()),
        ContextValue::Strings(v) => Some(v.join(", ")),
        _ => None,
    }
}

fn map_clap_error(err: clap::Error) -> TagNextError {
    match err.kind() {
        ClapErrorKind::ArgumentConflict => {
            let invalid = context_text(&err, ContextKind::InvalidArg);
            let prior = context_text(&err, ContextKind::PriorArg);
            let message = match (invalid, prior) {
                (Some(a), Some(b)) => format!("'{}' cannot be used with '{}'", a, b),
                _ => "incompatible flags were given together".to_string(),
            };
            TagNextError::ArgumentConflict(message)
        }
        ClapErrorKind::UnknownArgument => TagNextError::UnknownArgument(
            context_text(&err, ContextKind::InvalidArg).unwrap_or_else(|| err.kind().to_string()),
        ),
        _ => TagNextError::usage(err.kind().to_string()),
    }
}

/// Parse a full argument vector, program name first.
pub fn parse_invocation<I, T>(raw: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let normalized = normalize_args(raw)?;
    match Args::try_parse_from(normalized) {
        Ok(args) => Ok(Invocation::Run(args.into())),
        Err(err)
            if matches!(
                err.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) =>
        {
            Ok(Invocation::Info(err.render().to_string()))
        }
        Err(err) => Err(map_clap_error(err)),
    }
}
