//! Structural checks run when a catalog is loaded.
//!
//! Errors make a catalog unusable (the engine's totality relies on them being
//! absent). Warnings describe content that is legal but probably unintended,
//! such as a trigger value that can never be selected.

use std::collections::HashSet;

use crate::error::{AssessmentError, CatalogErrorKind, Result};
use crate::model::Catalog;

/// A non-fatal catalog finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWarning {
    /// Where the finding was made, e.g. `questions.genAiInventory`
    pub location: String,
    /// Description of the finding
    pub message: String,
}

impl std::fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Outcome of [`validate_catalog`].
#[derive(Debug, Default)]
pub struct CatalogValidation {
    pub errors: Vec<CatalogErrorKind>,
    pub warnings: Vec<CatalogWarning>,
}

impl CatalogValidation {
    /// Whether the catalog can be used
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Log every warning and turn the first error, if any, into an [`AssessmentError`].
    pub fn into_result(self, context: &str) -> Result<()> {
        for warning in &self.warnings {
            tracing::warn!("{context}: {warning}");
        }
        let error_count = self.errors.len();
        match self.errors.into_iter().next() {
            None => Ok(()),
            Some(first) => {
                if error_count > 1 {
                    tracing::debug!("{context}: {} further catalog errors suppressed", error_count - 1);
                }
                Err(AssessmentError::catalog(context, first))
            }
        }
    }

    fn warn(&mut self, location: String, message: String) {
        self.warnings.push(CatalogWarning { location, message });
    }
}

/// Check a catalog for structural errors and suspicious content.
#[must_use]
pub fn validate_catalog(catalog: &Catalog) -> CatalogValidation {
    let mut report = CatalogValidation::default();

    let mut category_ids = HashSet::new();
    for category in &catalog.categories {
        if !category_ids.insert(category.id.as_str()) {
            report.errors.push(CatalogErrorKind::DuplicateId {
                kind: "category",
                id: category.id.clone(),
            });
        }
    }

    let mut recommendation_ids = HashSet::new();
    for rec in &catalog.recommendations {
        if !recommendation_ids.insert(rec.id.as_str()) {
            report.errors.push(CatalogErrorKind::DuplicateId {
                kind: "recommendation",
                id: rec.id.clone(),
            });
        }
        if let Some(category_id) = &rec.category_id {
            if !category_ids.contains(category_id.as_str()) {
                report.warn(
                    format!("recommendations.{}", rec.id),
                    format!("references unknown category '{category_id}'"),
                );
            }
        }
    }

    let mut question_ids = HashSet::new();
    for question in &catalog.questions {
        if !question_ids.insert(question.id.as_str()) {
            report.errors.push(CatalogErrorKind::DuplicateId {
                kind: "question",
                id: question.id.clone(),
            });
        }
        if question.options.is_empty() {
            report.errors.push(CatalogErrorKind::EmptyOptions {
                question: question.id.clone(),
            });
        }
        if !category_ids.contains(question.category_id.as_str()) {
            report.errors.push(CatalogErrorKind::UnknownCategory {
                question: question.id.clone(),
                category: question.category_id.clone(),
            });
        }

        let location = format!("questions.{}", question.id);
        if let Some(trigger_id) = &question.recommendation_trigger_id {
            if !recommendation_ids.contains(trigger_id.as_str()) {
                report.warn(
                    location.clone(),
                    format!("triggers unknown recommendation '{trigger_id}'"),
                );
            }
        }
        match &question.trigger_option_values {
            Some(values) if values.is_empty() => {
                report.warn(
                    location,
                    "has an empty trigger value list and will never fire".to_string(),
                );
            }
            Some(values) => {
                for value in values.iter().filter(|v| question.option_index(v).is_none()) {
                    report.warn(
                        location.clone(),
                        format!("trigger value '{value}' is not among the options"),
                    );
                }
            }
            None => {}
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Priority, Question, Recommendation};

    fn base() -> Catalog {
        Catalog::new(
            vec![Category::new("a", "A", "", "#fff")],
            vec![Question::new("q1", "Q1", "a", ["Y", "N"])],
            vec![Recommendation::new("R", "R", "", "", Priority::High).with_category("a")],
        )
    }

    #[test]
    fn test_valid_catalog() {
        let report = validate_catalog(&base());
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_duplicate_question_id() {
        let mut catalog = base();
        catalog.questions.push(Question::new("q1", "Again", "a", ["Y"]));
        let report = validate_catalog(&catalog);
        assert!(matches!(
            report.errors.as_slice(),
            [CatalogErrorKind::DuplicateId { kind: "question", id }] if id == "q1"
        ));
    }

    #[test]
    fn test_empty_options_and_unknown_category() {
        let mut catalog = base();
        catalog
            .questions
            .push(Question::new("q2", "Q2", "missing", Vec::<String>::new()));
        let report = validate_catalog(&catalog);
        assert_eq!(report.errors.len(), 2);
        assert!(report.into_result("test").is_err());
    }

    #[test]
    fn test_trigger_warnings() {
        let mut catalog = base();
        catalog.questions.push(
            Question::new("q2", "Q2", "a", ["Y", "N"]).with_trigger("R", ["Maybe"]),
        );
        catalog
            .questions
            .push(Question::new("q3", "Q3", "a", ["Y", "N"]).with_last_option_trigger("GONE"));
        catalog.questions.push(
            Question::new("q4", "Q4", "a", ["Y", "N"]).with_trigger("R", Vec::<String>::new()),
        );

        let report = validate_catalog(&catalog);
        assert!(report.is_valid());
        let locations: Vec<&str> = report.warnings.iter().map(|w| w.location.as_str()).collect();
        assert_eq!(locations, vec!["questions.q2", "questions.q3", "questions.q4"]);
        assert!(report.into_result("test").is_ok());
    }

    #[test]
    fn test_recommendation_unknown_category_warns() {
        let mut catalog = base();
        catalog
            .recommendations
            .push(Recommendation::new("R2", "R2", "", "", Priority::Low).with_category("zzz"));
        let report = validate_catalog(&catalog);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(
            report.warnings[0].to_string(),
            "recommendations.R2: references unknown category 'zzz'"
        );
    }
}
