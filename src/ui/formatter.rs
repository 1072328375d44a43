//! Printing functions for UI output.
//!
//! Styling comes from `console`, which drops colors automatically when the
//! stream is not a terminal, so captured output stays plain.

use console::style;

use crate::resolver::Resolution;

/// Format and print an error message in red on stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("error:").red().bold(), message);
}

/// Print help or version text as rendered by the argument parser.
pub fn display_info(text: &str) {
    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }
}

/// Print the resolution on stdout.
///
/// Without `verbose` this is exactly one line holding the resulting tag.
/// With `verbose` the table labels are bolded.
pub fn display_resolution(resolution: &Resolution, verbose: bool) {
    if !verbose {
        println!("{}", resolution.output_tag());
        return;
    }

    for line in super::output_lines(resolution, true) {
        match line.split_once(':') {
            Some((label, rest)) => println!("{}{}", style(format!("{}:", label)).bold(), rest),
            None => println!("{}", line),
        }
    }
}
