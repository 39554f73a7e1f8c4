//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: summary on a terminal, JSON otherwise
    #[default]
    Auto,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
    /// Compact terminal summary (colored)
    Summary,
}

impl ReportFormat {
    /// Resolve `Auto` against whether stdout is a terminal
    #[must_use]
    pub const fn resolve(self, is_terminal: bool) -> Self {
        match self {
            Self::Auto if is_terminal => Self::Summary,
            Self::Auto => Self::Json,
            other => other,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: String,
    /// Include the per-category question/answer listing
    pub include_answers: bool,
    /// Include the fixed next-steps list
    pub include_next_steps: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "GenAI Privacy & Compliance Assessment".to_string(),
            include_answers: true,
            include_next_steps: true,
        }
    }
}

impl ReportConfig {
    /// Results only, without the answer listing
    #[must_use]
    pub fn results_only() -> Self {
        Self {
            include_answers: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
