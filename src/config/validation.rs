//! Configuration validation.
//!
//! Provides the validation trait and its implementations for all configuration types.

use super::types::{AppConfig, AssessmentConfig, OutputConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.assessment.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for AssessmentConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.recommendation_limit == 0 {
            errors.push(ConfigError {
                field: "assessment.recommendation_limit".to_string(),
                message: "Recommendation limit must be at least 1".to_string(),
            });
        }

        if let Some(ref region) = self.region {
            if region.trim().is_empty() {
                errors.push(ConfigError {
                    field: "assessment.region".to_string(),
                    message: "Region must not be blank; omit it to leave the region unselected"
                        .to_string(),
                });
            }
        }

        if let Some(ref catalog) = self.catalog {
            if !catalog.exists() {
                errors.push(ConfigError {
                    field: "assessment.catalog".to_string(),
                    message: format!("Catalog file does not exist: {}", catalog.display()),
                });
            }
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = AppConfig::builder().recommendation_limit(0).build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "assessment.recommendation_limit");
    }

    #[test]
    fn test_blank_region_rejected() {
        let config = AppConfig::builder().region(Some("  ".to_string())).build();
        assert!(!config.is_valid());
    }

    #[test]
    fn test_missing_paths_rejected() {
        let config = AppConfig::builder()
            .catalog(Some(PathBuf::from("/nonexistent/catalog.yaml")))
            .output_file(Some(PathBuf::from("/nonexistent/dir/report.md")))
            .build();
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["assessment.catalog", "output.file"]);
    }
}
