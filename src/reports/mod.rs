//! Report generation for assessment results.
//!
//! Reporters render a frozen [`AssessmentReport`] snapshot (or a catalog
//! listing) in one of several formats:
//! - JSON: Structured data for programmatic integration
//! - Markdown: Human-readable documentation
//! - Summary: Compact colored terminal output
//!
//! Reporters never recompute engine values; everything they print comes
//! from the snapshot.
//!
//! # Security
//!
//! Catalog text and answer labels come from files the user supplies. The
//! `escape` module must be used before embedding them in Markdown.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat};

use crate::assessment::AssessmentReport;
use crate::error::{AssessmentError, ReportErrorKind};
use crate::model::{Catalog, RegionSelection};
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<ReportError> for AssessmentError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::SerializationError(msg) => {
                Self::report("serializing", ReportErrorKind::JsonSerializationError(msg))
            }
            ReportError::FormatError(e) => {
                Self::report("formatting", ReportErrorKind::FormattingError(e.to_string()))
            }
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render an assessment snapshot
    fn generate_assessment_report(
        &self,
        report: &AssessmentReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Render the questions of a catalog that apply to `selection`
    fn generate_catalog_report(
        &self,
        catalog: &Catalog,
        selection: &RegionSelection,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}
