//! Default values and named presets.

use super::types::{AppConfig, AssessmentConfig, OutputConfig};
use crate::error::{OptionContext, Result};
use crate::reports::ReportFormat;

/// Default number of recommendations surfaced to the user.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = crate::scoring::DEFAULT_RECOMMENDATION_LIMIT;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Terminal summary, top three recommendations
    Default,
    /// Machine-readable output without colors for pipelines
    CiCd,
    /// Markdown report listing every triggered recommendation
    Report,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CiCd => "ci-cd",
            Self::Report => "report",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci-cd" | "ci" | "pipeline" => Some(Self::CiCd),
            "report" | "full" => Some(Self::Report),
            _ => None,
        }
    }

    /// Look up a preset by name, listing the known presets on failure.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_name(name).context_none(format!(
            "unknown preset '{name}' (expected one of: {})",
            Self::all()
                .iter()
                .map(Self::name)
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Terminal summary with the top three recommendations",
            Self::CiCd => "JSON output without colors for CI/CD pipelines",
            Self::Report => "Markdown report with every triggered recommendation",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::CiCd, Self::Report]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::CiCd => Self {
                assessment: AssessmentConfig::default(),
                output: OutputConfig {
                    format: ReportFormat::Json,
                    file: None,
                    no_color: true,
                },
            },
            ConfigPreset::Report => Self {
                assessment: AssessmentConfig {
                    recommendation_limit: usize::MAX,
                    ..AssessmentConfig::default()
                },
                output: OutputConfig {
                    format: ReportFormat::Markdown,
                    file: None,
                    no_color: true,
                },
            },
        }
    }

    /// Start from a preset instead of a config file and apply CLI overrides.
    #[must_use]
    pub fn from_preset_with_overrides(preset: ConfigPreset, cli_overrides: &Self) -> Self {
        let mut config = Self::from_preset(preset);
        config.merge(cli_overrides);
        config
    }
}
