//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".compliance-assessment.yaml",
    ".compliance-assessment.yml",
    "compliance-assessment.yaml",
    "compliance-assessment.yml",
];

/// Directory name under the user config directory
const CONFIG_DIR_NAME: &str = "compliance-assessment";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/compliance-assessment/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    // 1. Use explicit path if provided
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    // 2. Search current directory
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    // 3. Search user config directory
    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join(CONFIG_DIR_NAME)))
    {
        return Some(path);
    }

    // 4. Search home directory
    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override, so a CLI config
    /// built from unset flags leaves file settings intact.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        // Assessment config
        if other.assessment.recommendation_limit != defaults.assessment.recommendation_limit {
            self.assessment.recommendation_limit = other.assessment.recommendation_limit;
        }
        if other.assessment.region.is_some() {
            self.assessment.region.clone_from(&other.assessment.region);
        }
        if other.assessment.catalog.is_some() {
            self.assessment.catalog.clone_from(&other.assessment.catalog);
        }

        // Output config - only override if explicitly set
        if other.output.format != defaults.output.format {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# compliance-assessment configuration
#
# Place this file at:
#   - .compliance-assessment.yaml in the working directory
#   - ~/.config/compliance-assessment/compliance-assessment.yaml for global config
#
# CLI arguments always override file settings.

assessment:
  # Number of recommendations to surface
  recommendation_limit: 3
  # Region: USA, EU, UK or Global (show all questions)
  # region: EU
  # Catalog file to use instead of the built-in questionnaire
  # catalog: ./catalog.yaml

output:
  # Format: auto, json, markdown, summary
  format: auto
  # Output file path (omit for stdout)
  # file: report.md
  # Disable colored output
  no_color: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
