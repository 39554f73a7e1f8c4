//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::assessment::AssessmentReport;
use crate::filter::filter_questions;
use crate::model::{Catalog, Question, RegionSelection};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_assessment_report(
        &self,
        report: &AssessmentReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut assessment = serde_json::to_value(report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))?;
        if let Some(fields) = assessment.as_object_mut() {
            if !config.include_answers {
                fields.remove("sections");
            }
            if !config.include_next_steps {
                fields.remove("next_steps");
            }
        }

        let document = JsonAssessmentDocument {
            tool: ToolInfo::current(),
            title: &config.title,
            assessment,
        };
        self.render(&document)
    }

    fn generate_catalog_report(
        &self,
        catalog: &Catalog,
        selection: &RegionSelection,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let filtered = filter_questions(&catalog.questions, selection);
        let categories = catalog
            .categories
            .iter()
            .map(|category| JsonCatalogCategory {
                id: &category.id,
                name: &category.name,
                description: &category.description,
                color: &category.color,
                questions: filtered
                    .iter()
                    .copied()
                    .filter(|q| q.category_id == category.id)
                    .collect(),
            })
            .collect();

        let document = JsonCatalogDocument {
            tool: ToolInfo::current(),
            title: &config.title,
            region: selection,
            region_name: selection.display_name(),
            question_count: filtered.len(),
            categories,
            recommendations: &catalog.recommendations,
        };
        self.render(&document)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// ============================================================================
// JSON document structures
// ============================================================================

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

impl ToolInfo {
    const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Serialize)]
struct JsonAssessmentDocument<'a> {
    tool: ToolInfo,
    title: &'a str,
    assessment: serde_json::Value,
}

#[derive(Serialize)]
struct JsonCatalogDocument<'a> {
    tool: ToolInfo,
    title: &'a str,
    region: &'a RegionSelection,
    region_name: String,
    question_count: usize,
    categories: Vec<JsonCatalogCategory<'a>>,
    recommendations: &'a [crate::model::Recommendation],
}

#[derive(Serialize)]
struct JsonCatalogCategory<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    color: &'a str,
    questions: Vec<&'a Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Assessment;
    use crate::model::AnswerSet;

    #[test]
    fn test_assessment_json() {
        let catalog = Catalog::builtin();
        let answers = AnswerSet::new().with_answer("genAiInventory", "No, not started");
        let report = Assessment::new(&catalog, &answers, RegionSelection::from_id("EU")).snapshot(3);

        let output = JsonReporter::new()
            .generate_assessment_report(&report, &ReportConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["tool"]["name"], "compliance-assessment");
        assert_eq!(value["assessment"]["overall_percent"], 0);
        assert_eq!(
            value["assessment"]["recommendations"][0]["id"],
            "REC_DATA_GOVERNANCE"
        );
        assert!(value["assessment"]["sections"].is_array());
    }

    #[test]
    fn test_results_only_omits_sections() {
        let catalog = Catalog::builtin();
        let answers = AnswerSet::new();
        let report = Assessment::new(&catalog, &answers, RegionSelection::All).snapshot(3);
        let output = JsonReporter::new()
            .pretty(false)
            .generate_assessment_report(&report, &ReportConfig::results_only())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["assessment"].get("sections").is_none());
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_catalog_json_filters_by_region() {
        let catalog = Catalog::builtin();
        let output = JsonReporter::new()
            .generate_catalog_report(
                &catalog,
                &RegionSelection::from_id("USA"),
                &ReportConfig::default(),
            )
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        // 38 region-neutral questions plus the HIPAA question
        assert_eq!(value["question_count"], 39);
        assert_eq!(value["categories"].as_array().map(Vec::len), Some(8));
    }
}
