//! Markdown report generator.

use super::escape::{
    escape_markdown_inline, escape_markdown_list, escape_markdown_table, escape_markdown_url,
};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::assessment::AssessmentReport;
use crate::filter::filter_questions;
use crate::model::{Catalog, RegionSelection};
use crate::scoring::MaturityLevel;
use std::fmt::Write;

/// Printed when no recommendation was triggered
pub const NO_RECOMMENDATIONS: &str =
    "No specific recommendations triggered based on your assessment.";

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include a table of contents
    include_toc: bool,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { include_toc: false }
    }

    /// Emit a table of contents after the title
    #[must_use]
    pub const fn with_toc(mut self, include_toc: bool) -> Self {
        self.include_toc = include_toc;
        self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_assessment_report(
        &self,
        report: &AssessmentReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();

        writeln!(md, "# {}\n", escape_markdown_inline(&config.title))?;
        writeln!(
            md,
            "_Generated {} by compliance-assessment {}_\n",
            report.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.version
        )?;

        if self.include_toc {
            writeln!(md, "## Contents\n")?;
            writeln!(md, "- [Overall Maturity](#overall-maturity)")?;
            writeln!(md, "- [Domain Insights](#domain-insights)")?;
            writeln!(md, "- [Priority Recommendations](#priority-recommendations)")?;
            if config.include_answers {
                writeln!(md, "- [Assessment Answers](#assessment-answers)")?;
            }
            if config.include_next_steps {
                writeln!(md, "- [Next Steps](#next-steps)")?;
            }
            writeln!(md)?;
        }

        writeln!(md, "**Region:** {}  ", escape_markdown_inline(&report.region_name))?;
        writeln!(md, "**Progress:** {}\n", report.status)?;

        writeln!(md, "## Overall Maturity\n")?;
        writeln!(
            md,
            "**{}** at {}% (stage {} of {})\n",
            report.maturity.tier.name,
            report.overall_percent,
            report.maturity.stage_index + 1,
            MaturityLevel::stage_count()
        )?;
        writeln!(md, "{}\n", report.maturity.tier.description)?;

        writeln!(md, "## Domain Insights\n")?;
        writeln!(md, "| Category | Progress | Insight |")?;
        writeln!(md, "|----------|----------|---------|")?;
        for insight in &report.insights {
            writeln!(
                md,
                "| {} | {}% | {} |",
                escape_markdown_table(&insight.name),
                insight.progress,
                insight.tag
            )?;
        }
        writeln!(md)?;

        writeln!(md, "## Priority Recommendations\n")?;
        if report.recommendations.is_empty() {
            writeln!(md, "{NO_RECOMMENDATIONS}\n")?;
        }
        for (i, rec) in report.recommendations.iter().enumerate() {
            writeln!(
                md,
                "{}. **{}** ({} priority)",
                i + 1,
                escape_markdown_inline(&rec.title),
                rec.priority
            )?;
            writeln!(md, "   {}", escape_markdown_list(&rec.description))?;
            if !rec.link.is_empty() {
                writeln!(md, "   <{}>", escape_markdown_url(&rec.link))?;
            }
            writeln!(md)?;
        }

        if config.include_answers {
            writeln!(md, "## Assessment Answers\n")?;
            for section in &report.sections {
                writeln!(md, "### {}\n", escape_markdown_inline(&section.name))?;
                if section.rows.is_empty() {
                    writeln!(md, "_No questions apply to this region._\n")?;
                    continue;
                }
                for row in &section.rows {
                    writeln!(
                        md,
                        "- {}: **{}**",
                        escape_markdown_list(&row.question),
                        escape_markdown_inline(&row.answer)
                    )?;
                }
                writeln!(md)?;
            }
        }

        if config.include_next_steps {
            writeln!(md, "## Next Steps\n")?;
            for step in &report.next_steps {
                writeln!(md, "- {step}")?;
            }
        }

        Ok(md)
    }

    fn generate_catalog_report(
        &self,
        catalog: &Catalog,
        selection: &RegionSelection,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let filtered = filter_questions(&catalog.questions, selection);
        let mut md = String::new();

        writeln!(md, "# {}\n", escape_markdown_inline(&config.title))?;
        writeln!(
            md,
            "**Region:** {} ({} questions)\n",
            escape_markdown_inline(&selection.display_name()),
            filtered.len()
        )?;

        for category in &catalog.categories {
            writeln!(md, "## {}\n", escape_markdown_inline(&category.name))?;
            if !category.description.is_empty() {
                writeln!(md, "{}\n", escape_markdown_inline(&category.description))?;
            }
            for question in filtered.iter().filter(|q| q.category_id == category.id) {
                write!(md, "- **{}**", escape_markdown_list(&question.text))?;
                if !question.regions.is_empty() {
                    let tags: Vec<String> = question
                        .regions
                        .iter()
                        .map(|r| escape_markdown_inline(r))
                        .collect();
                    write!(md, " _[{}]_", tags.join(", "))?;
                }
                writeln!(md)?;
                for option in &question.options {
                    writeln!(md, "  - {}", escape_markdown_list(option))?;
                }
            }
            writeln!(md)?;
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
