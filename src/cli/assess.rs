//! Assess command handler.
//!
//! Implements the `assess` subcommand: score an answer file against a
//! catalog and report maturity, insights and recommendations.

use crate::assessment::{Assessment, AssessmentReport};
use crate::config::AppConfig;
use crate::model::{Catalog, RegionSelection};
use crate::pipeline::{exit_codes, load_inputs, output_assessment};
use crate::reports::ReportConfig;
use anyhow::Result;
use std::path::PathBuf;

use super::ensure_valid;

/// Per-invocation options of the `assess` command that have no config file
/// counterpart.
#[derive(Debug, Clone, Default)]
pub struct AssessOptions {
    /// Answer file (JSON or YAML mapping of question id to option label)
    pub answers: PathBuf,
    /// Exit with code 1 when the overall score is below this percentage
    pub min_score: Option<u32>,
    /// Leave the per-question answer listing out of the report
    pub results_only: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Run the assess command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_assess(config: &AppConfig, options: &AssessOptions) -> Result<i32> {
    ensure_valid(config)?;

    let loaded = load_inputs(
        config.assessment.catalog.as_deref(),
        &options.answers,
        options.quiet,
    )?;
    let catalog = loaded.catalog;
    let answers = loaded.answers;

    let selection = RegionSelection::from_option(config.assessment.region.as_deref());
    warn_about_region(&catalog, &selection);

    let assessment = Assessment::new(&catalog, &answers, selection);
    warn_about_out_of_scope_answers(&assessment);
    let report = assessment.snapshot(config.assessment.recommendation_limit);

    if !options.quiet {
        tracing::info!(
            "Assessed {} ({}%, {})",
            report.status,
            report.overall_percent,
            report.maturity.tier.name
        );
    }

    let report_config = if options.results_only {
        ReportConfig::results_only()
    } else {
        ReportConfig::default()
    };
    output_assessment(&report, &config.output, &report_config, options.quiet)?;

    Ok(exit_code_for(&report, options.min_score))
}

/// Map a finished report to the process exit code.
fn exit_code_for(report: &AssessmentReport, min_score: Option<u32>) -> i32 {
    if !report.complete {
        tracing::info!("Assessment incomplete: {}", report.status);
        return exit_codes::INCOMPLETE;
    }
    if let Some(threshold) = min_score {
        if report.overall_percent < threshold {
            tracing::warn!(
                "Overall score {}% is below minimum threshold {}%",
                report.overall_percent,
                threshold
            );
            return exit_codes::INCOMPLETE;
        }
    }
    exit_codes::SUCCESS
}

fn warn_about_region(catalog: &Catalog, selection: &RegionSelection) {
    match selection {
        RegionSelection::Unselected => {
            tracing::warn!("No region selected; only region-neutral questions are assessed");
        }
        RegionSelection::Region(id) => {
            if !catalog.questions.iter().any(|q| q.is_tagged_with(id)) {
                tracing::warn!(
                    "No question is tagged with region '{}'; only region-neutral questions apply",
                    id
                );
            }
        }
        RegionSelection::All => {}
    }
}

/// Answers to questions hidden by the region are ignored by the engine.
fn warn_about_out_of_scope_answers(assessment: &Assessment<'_>) {
    let ignored = assessment.out_of_scope_answers();
    if !ignored.is_empty() {
        tracing::warn!(
            "Ignoring {} answer(s) to questions outside region {}: {}",
            ignored.len(),
            assessment.selection(),
            ignored.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerSet;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    fn write_answers(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("answers.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    fn file_config(dir: &TempDir, region: &str) -> AppConfig {
        AppConfig::builder()
            .region(Some(region.to_string()))
            .output_format(ReportFormat::Json)
            .output_file(Some(dir.path().join("report.json")))
            .build()
    }

    #[test]
    fn test_incomplete_assessment_exits_one() {
        let tmp = TempDir::new().unwrap();
        let options = AssessOptions {
            answers: write_answers(&tmp, r#"{"genAiInventory": "Yes, fully"}"#),
            quiet: true,
            ..AssessOptions::default()
        };
        let code = run_assess(&file_config(&tmp, "EU"), &options).unwrap();
        assert_eq!(code, exit_codes::INCOMPLETE);

        let written = std::fs::read_to_string(tmp.path().join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["assessment"]["answered"], 1);
    }

    #[test]
    fn test_out_of_scope_answers_do_not_recommend() {
        let tmp = TempDir::new().unwrap();
        let options = AssessOptions {
            answers: write_answers(&tmp, r#"{"euAiActApplicability": "Unsure"}"#),
            quiet: true,
            ..AssessOptions::default()
        };
        let code = run_assess(&file_config(&tmp, "USA"), &options).unwrap();
        assert_eq!(code, exit_codes::INCOMPLETE);

        let written = std::fs::read_to_string(tmp.path().join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["assessment"]["answered"], 0);
        assert_eq!(value["assessment"]["recommendations"], serde_json::json!([]));
    }

    #[test]
    fn test_min_score_threshold() {
        let catalog = Catalog::builtin();
        let answers: AnswerSet = catalog
            .questions
            .iter()
            .filter_map(|q| q.options.first().map(|o| (q.id.clone(), o.clone())))
            .collect();
        let report = Assessment::new(&catalog, &answers, RegionSelection::All).snapshot(3);
        assert!(report.complete);
        assert_eq!(report.overall_percent, 100);
        assert_eq!(exit_code_for(&report, None), exit_codes::SUCCESS);
        assert_eq!(exit_code_for(&report, Some(100)), exit_codes::SUCCESS);

        let answers: AnswerSet = catalog
            .questions
            .iter()
            .filter_map(|q| q.last_option().map(|o| (q.id.clone(), o.to_string())))
            .collect();
        let report = Assessment::new(&catalog, &answers, RegionSelection::All).snapshot(3);
        assert_eq!(report.overall_percent, 0);
        assert_eq!(exit_code_for(&report, Some(50)), exit_codes::INCOMPLETE);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config = AppConfig::builder().recommendation_limit(0).build();
        let options = AssessOptions {
            answers: write_answers(&tmp, "{}"),
            quiet: true,
            ..AssessOptions::default()
        };
        let err = run_assess(&config, &options).unwrap_err();
        assert!(err.to_string().contains("assessment.recommendation_limit"));
    }
}
