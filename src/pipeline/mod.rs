//! Pipeline orchestration for assessment runs.
//!
//! This module provides the shared load → assess → report plumbing used by
//! the CLI command handlers.

mod load;
mod output;
mod report_stage;

pub use load::{load_inputs, LoadedInputs};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use report_stage::{output_assessment, output_catalog};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - assessment complete and above any requested minimum score
    pub const SUCCESS: i32 = 0;
    /// Assessment incomplete, or overall score below `--min-score`
    pub const INCOMPLETE: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
