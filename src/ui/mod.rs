//! User interface module - rendering of results and errors.
//!
//! Separates concerns:
//! - This module - Pure functions deciding what text goes where
//! - `formatter` - Printing with terminal styling

use crate::resolver::Resolution;

pub mod formatter;

pub use formatter::{display_error, display_info, display_resolution};

/// Label for the latest tag row of the verbose table.
pub const LATEST_LABEL: &str = "Latest tag";

/// Label for the proposed tag row of the verbose table.
pub const PROPOSED_LABEL: &str = "Proposed tag";

/// Rows of the verbose table: the latest tag, then the proposed one if any.
pub fn table_rows(resolution: &Resolution) -> Vec<(&'static str, &str)> {
    let mut rows = vec![(LATEST_LABEL, resolution.latest.as_str())];
    if let Some(proposed) = resolution.proposed.as_deref() {
        rows.push((PROPOSED_LABEL, proposed));
    }
    rows
}

/// Plain-text lines written to stdout for a resolution.
///
/// Non-verbose output is the single resulting tag so scripts can capture it.
pub fn output_lines(resolution: &Resolution, verbose: bool) -> Vec<String> {
    if !verbose {
        return vec![resolution.output_tag().to_string()];
    }

    let rows = table_rows(resolution);
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, tag)| format!("{:<width$}  {}", format!("{}:", label), tag, width = width + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(latest: &str, proposed: Option<&str>) -> Resolution {
        Resolution {
            latest: latest.to_string(),
            proposed: proposed.map(str::to_string),
        }
    }

    #[test]
    fn test_plain_output_is_single_tag() {
        assert_eq!(output_lines(&resolution("v1.2.3", None), false), vec!["v1.2.3"]);
        assert_eq!(
            output_lines(&resolution("v1.2.3", Some("v1.3.0")), false),
            vec!["v1.3.0"]
        );
    }

    #[test]
    fn test_verbose_table() {
        let lines = output_lines(&resolution("v1.2.3", Some("v2.0.0")), true);
        assert_eq!(
            lines,
            vec!["Latest tag:    v1.2.3", "Proposed tag:  v2.0.0"]
        );
    }

    #[test]
    fn test_verbose_without_proposal() {
        let lines = output_lines(&resolution("v1.2.3", None), true);
        assert_eq!(lines, vec!["Latest tag:  v1.2.3"]);
    }

    #[test]
    fn test_table_rows() {
        let res = resolution("v0.1.0", Some("v0.1.1"));
        let rows = table_rows(&res);
        assert_eq!(rows, vec![(LATEST_LABEL, "v0.1.0"), (PROPOSED_LABEL, "v0.1.1")]);
    }
}
