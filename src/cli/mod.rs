//! Command-line surface: argument parsing and the run workflow

pub mod args;
pub mod orchestration;

pub use args::{parse_invocation, Invocation, Options};
pub use orchestration::{run_workflow, WorkflowResult};
