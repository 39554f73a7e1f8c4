//! Unified error types for compliance-assessment.
//!
//! Scoring itself never fails: every engine function is total over its
//! inputs. Errors only arise at the edges, when catalogs, answer files or
//! configuration are loaded, and when reports are written.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for compliance-assessment operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AssessmentError {
    /// Errors while loading or validating a question catalog
    #[error("Failed to load catalog: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors while loading an answer set
    #[error("Failed to load answers: {context}")]
    Answers {
        context: String,
        #[source]
        source: AnswersErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Question '{question}' has no options")]
    EmptyOptions { question: String },

    #[error("Question '{question}' references unknown category '{category}'")]
    UnknownCategory { question: String, category: String },
}

/// Specific answer-file error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnswersErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Text formatting failed: {0}")]
    FormattingError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for compliance-assessment operations
pub type Result<T> = std::result::Result<T, AssessmentError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl AssessmentError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create an answers error with context
    pub fn answers(context: impl Into<String>, source: AnswersErrorKind) -> Self {
        Self::Answers {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for AssessmentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained, so an error surfacing from a nested call
/// reads like `"loading catalog from x.yaml: reading file: ..."`.
///
/// # Example
///
/// ```ignore
/// use compliance_assessment::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<Catalog> {
///     let content = std::fs::read_to_string(path)
///         .with_context(|| format!("reading {}", path.display()))?;
///     parse_catalog_str(&content, CatalogFormat::Yaml)
///         .context("parsing catalog")
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on the error path.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<AssessmentError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: AssessmentError, new_ctx: &str) -> AssessmentError {
    match err {
        AssessmentError::Catalog {
            context: existing,
            source,
        } => AssessmentError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AssessmentError::Answers {
            context: existing,
            source,
        } => AssessmentError::Answers {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AssessmentError::Report {
            context: existing,
            source,
        } => AssessmentError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AssessmentError::Io {
            path,
            message,
            source,
        } => AssessmentError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        AssessmentError::Config(msg) => AssessmentError::Config(chain_context(new_ctx, &msg)),
        AssessmentError::Validation(msg) => {
            AssessmentError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for converting `Option` to `Result` with a validation error.
pub trait OptionContext<T> {
    /// Convert `None` into a validation error carrying `message`.
    fn context_none(self, message: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, message: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| AssessmentError::validation(message))
    }
}
