//! Configuration for assessment runs.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```
//! use compliance_assessment::config::{AppConfig, ConfigPreset, Validatable};
//!
//! let config = AppConfig::from_preset(ConfigPreset::CiCd);
//! assert!(config.is_valid());
//!
//! let config = AppConfig::builder()
//!     .region(Some("EU".to_string()))
//!     .recommendation_limit(5)
//!     .build();
//! assert_eq!(config.assessment.recommendation_limit, 5);
//! ```
//!
//! # Configuration File
//!
//! Place a `.compliance-assessment.yaml` file in the working directory or
//! `~/.config/compliance-assessment/`:
//!
//! ```yaml
//! assessment:
//!   region: EU
//!   recommendation_limit: 3
//! output:
//!   format: markdown
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_RECOMMENDATION_LIMIT};
pub use types::{AppConfig, AppConfigBuilder, AssessmentConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option that can be set in a
/// `.compliance-assessment.yaml` file, for editor validation and completion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
