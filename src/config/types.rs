//! Configuration types for assessment runs.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::DEFAULT_RECOMMENDATION_LIMIT;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// File settings are loaded first and CLI arguments are merged over them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Assessment configuration (region, catalog, recommendation limit)
    pub assessment: AssessmentConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the number of recommendations to surface.
    pub const fn recommendation_limit(mut self, limit: usize) -> Self {
        self.config.assessment.recommendation_limit = limit;
        self
    }

    /// Set the region id.
    pub fn region(mut self, region: Option<String>) -> Self {
        self.config.assessment.region = region;
        self
    }

    /// Set a catalog file to use instead of the built-in one.
    pub fn catalog(mut self, catalog: Option<PathBuf>) -> Self {
        self.config.assessment.catalog = catalog;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Assessment Configuration
// ============================================================================

/// Assessment settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Maximum number of recommendations to surface
    pub recommendation_limit: usize,
    /// Region id (`USA`, `EU`, `UK`, `Global`); unset shows region-neutral questions only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Catalog file to load instead of the built-in questionnaire
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            region: None,
            catalog: None,
        }
    }
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.assessment.recommendation_limit, 3);
        assert!(config.assessment.region.is_none());
        assert_eq!(config.output.format, ReportFormat::Auto);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .recommendation_limit(5)
            .region(Some("EU".to_string()))
            .output_format(ReportFormat::Markdown)
            .no_color(true)
            .build();
        assert_eq!(config.assessment.recommendation_limit, 5);
        assert_eq!(config.assessment.region.as_deref(), Some("EU"));
        assert_eq!(config.output.format, ReportFormat::Markdown);
        assert!(config.output.no_color);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("assessment:\n  region: UK\n").unwrap();
        assert_eq!(config.assessment.region.as_deref(), Some("UK"));
        assert_eq!(config.assessment.recommendation_limit, 3);
        assert!(!config.output.no_color);
    }
}
