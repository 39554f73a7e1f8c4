//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod assess;
mod catalog;

pub use assess::{run_assess, AssessOptions};
pub use catalog::{run_catalog, run_regions};

use crate::config::{AppConfig, Validatable};
use anyhow::{bail, Result};

/// Reject a merged configuration that fails validation.
fn ensure_valid(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
    bail!("Invalid configuration:\n  {}", details.join("\n  "))
}
