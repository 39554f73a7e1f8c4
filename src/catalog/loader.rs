//! Catalog and answer-file loading.
//!
//! Both file kinds are accepted as YAML or JSON. The format is taken from the
//! file extension and falls back to sniffing the content.

use std::path::Path;

use crate::error::{AnswersErrorKind, AssessmentError, CatalogErrorKind, ErrorContext, Result};
use crate::model::{AnswerSet, Catalog};

use super::validation::validate_catalog;

/// Maximum accepted size for catalog and answer files (16 MB).
const MAX_INPUT_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Serialization format of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    /// Format implied by a path's extension, if it names one
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Guess the format from content: JSON documents open with `{` or `[`.
    #[must_use]
    pub fn sniff(content: &str) -> Self {
        match content.trim_start().chars().next() {
            Some('{' | '[') => Self::Json,
            _ => Self::Yaml,
        }
    }

    fn resolve(path: &Path, content: &str) -> Self {
        Self::from_path(path).unwrap_or_else(|| Self::sniff(content))
    }
}

fn read_input(path: &Path) -> Result<String> {
    let metadata = std::fs::metadata(path).map_err(|e| AssessmentError::io(path, e))?;
    if metadata.len() > MAX_INPUT_FILE_SIZE {
        return Err(AssessmentError::validation(format!(
            "{} is {} MB, exceeding the {} MB limit",
            path.display(),
            metadata.len() / (1024 * 1024),
            MAX_INPUT_FILE_SIZE / (1024 * 1024),
        )));
    }
    std::fs::read_to_string(path).map_err(|e| AssessmentError::io(path, e))
}

/// Load and validate a catalog file.
///
/// Structural errors fail the load; warnings are logged.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = read_input(path)?;
    let format = InputFormat::resolve(path, &content);
    tracing::debug!("Loading catalog from {} as {:?}", path.display(), format);
    parse_catalog_str(&content, format).with_context(|| path.display().to_string())
}

/// Parse and validate a catalog from a string.
pub fn parse_catalog_str(content: &str, format: InputFormat) -> Result<Catalog> {
    let catalog: Catalog = match format {
        InputFormat::Json => serde_json::from_str(content).map_err(|e| {
            AssessmentError::catalog("parsing", CatalogErrorKind::InvalidJson(e.to_string()))
        })?,
        InputFormat::Yaml => serde_yaml::from_str(content).map_err(|e| {
            AssessmentError::catalog("parsing", CatalogErrorKind::InvalidYaml(e.to_string()))
        })?,
    };

    validate_catalog(&catalog).into_result("validating")?;
    tracing::debug!(
        "Catalog has {} categories, {} questions, {} recommendations",
        catalog.categories.len(),
        catalog.questions.len(),
        catalog.recommendations.len()
    );
    Ok(catalog)
}

/// Load an answer file: a flat `{questionId: optionLabel}` mapping.
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    let content = read_input(path)?;
    let format = InputFormat::resolve(path, &content);
    parse_answers_str(&content, format).with_context(|| path.display().to_string())
}

/// Parse an answer set from a string.
///
/// An empty YAML document is an empty answer set.
pub fn parse_answers_str(content: &str, format: InputFormat) -> Result<AnswerSet> {
    match format {
        InputFormat::Json => serde_json::from_str(content).map_err(|e| {
            AssessmentError::answers("parsing", AnswersErrorKind::InvalidJson(e.to_string()))
        }),
        InputFormat::Yaml => {
            if content.trim().is_empty() {
                return Ok(AnswerSet::new());
            }
            serde_yaml::from_str(content).map_err(|e| {
                AssessmentError::answers("parsing", AnswersErrorKind::InvalidYaml(e.to_string()))
            })
        }
    }
}

/// Log answers whose question id is not in the catalog and return their ids.
///
/// Such answers are kept; they simply never score.
pub fn unknown_answer_ids<'a>(answers: &'a AnswerSet, catalog: &Catalog) -> Vec<&'a str> {
    let unknown: Vec<&str> = answers
        .iter()
        .map(|(id, _)| id)
        .filter(|id| catalog.question(id).is_none())
        .collect();
    for id in &unknown {
        tracing::warn!("Answer for unknown question '{}' will be ignored", id);
    }
    unknown
}
