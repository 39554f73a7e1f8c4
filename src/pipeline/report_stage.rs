//! Report output stage.
//!
//! Renders assessment snapshots and catalog listings and writes them to the
//! configured destination.

use crate::assessment::AssessmentReport;
use crate::config::OutputConfig;
use crate::model::{Catalog, RegionSelection};
use crate::reports::{create_reporter_with_options, ReportConfig, ReportFormat};
use anyhow::{Context, Result};

use super::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Resolve the effective format and color setting for an output config.
fn resolve_output(output: &OutputConfig) -> (OutputTarget, ReportFormat, bool) {
    let target = OutputTarget::from_option(output.file.clone());
    let format = auto_detect_format(output.format, &target);
    // ANSI escapes only make sense on an interactive terminal
    let use_color = should_use_color(output.no_color) && target.is_terminal();
    (target, format, use_color)
}

/// Render an assessment snapshot and write it out.
pub fn output_assessment(
    report: &AssessmentReport,
    output: &OutputConfig,
    report_config: &ReportConfig,
    quiet: bool,
) -> Result<()> {
    let (target, format, use_color) = resolve_output(output);
    tracing::debug!("Rendering assessment as {}", format);

    let reporter = create_reporter_with_options(format, use_color);
    let rendered = reporter
        .generate_assessment_report(report, report_config)
        .context("Failed to render assessment report")?;

    write_output(&rendered, &target, quiet)
}

/// Render the questions applicable to `selection` and write them out.
pub fn output_catalog(
    catalog: &Catalog,
    selection: &RegionSelection,
    output: &OutputConfig,
    report_config: &ReportConfig,
    quiet: bool,
) -> Result<()> {
    let (target, format, use_color) = resolve_output(output);
    tracing::debug!("Rendering catalog as {}", format);

    let reporter = create_reporter_with_options(format, use_color);
    let rendered = reporter
        .generate_catalog_report(catalog, selection, report_config)
        .context("Failed to render catalog")?;

    write_output(&rendered, &target, quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Assessment;
    use crate::model::AnswerSet;
    use tempfile::TempDir;

    #[test]
    fn test_output_assessment_markdown_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.md");
        let catalog = Catalog::builtin();
        let answers = AnswerSet::new();
        let report = Assessment::new(&catalog, &answers, RegionSelection::from_id("EU")).snapshot(3);

        let output = OutputConfig {
            file: Some(path.clone()),
            ..OutputConfig::default()
        };
        output_assessment(&report, &output, &ReportConfig::default(), true).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.starts_with("# "));
        assert!(written.contains("Overall Maturity"));
    }

    #[test]
    fn test_output_catalog_json_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        let output = OutputConfig {
            file: Some(path.clone()),
            ..OutputConfig::default()
        };
        output_catalog(
            &Catalog::builtin(),
            &RegionSelection::All,
            &output,
            &ReportConfig::default(),
            true,
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["question_count"], 41);
    }
}
