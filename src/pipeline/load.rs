//! Input loading stage.
//!
//! Loads the question catalog and an answer file with context for error
//! messages.

use crate::catalog::{load_answers, load_catalog, unknown_answer_ids};
use crate::model::{AnswerSet, Catalog};
use anyhow::{Context, Result};
use std::path::Path;

/// A catalog together with the answers given against it
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    /// The question catalog (built-in unless a file was given)
    pub catalog: Catalog,
    /// Answers keyed by question id
    pub answers: AnswerSet,
}

/// Load the catalog and answer file, logging progress unless `quiet`.
///
/// Answers to question ids the catalog does not know are kept (they never
/// score) and reported at `warn`.
pub fn load_inputs(
    catalog_path: Option<&Path>,
    answers_path: &Path,
    quiet: bool,
) -> Result<LoadedInputs> {
    let catalog = match catalog_path {
        Some(path) => {
            if !quiet {
                tracing::info!("Loading catalog: {}", path.display());
            }
            load_catalog(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?
        }
        None => Catalog::builtin(),
    };

    if !quiet {
        tracing::info!("Loading answers: {}", answers_path.display());
    }
    let answers = load_answers(answers_path)
        .with_context(|| format!("Failed to load answers: {}", answers_path.display()))?;

    let unknown = unknown_answer_ids(&answers, &catalog).len();

    if !quiet {
        tracing::info!(
            "Loaded {} answers ({} unknown) against {} questions",
            answers.len(),
            unknown,
            catalog.question_count()
        );
    }

    Ok(LoadedInputs { catalog, answers })
}
