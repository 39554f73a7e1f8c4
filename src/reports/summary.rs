//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::markdown::NO_RECOMMENDATIONS;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::assessment::AssessmentReport;
use crate::filter::filter_questions;
use crate::model::{Catalog, Priority, RegionSelection};
use crate::scoring::MATURITY_TIERS;

/// Width of the per-category progress bar
const BAR_WIDTH: usize = 20;

/// Apply ANSI color formatting if colored output is enabled.
///
/// Accepts the palette names used by tiers and tags as well as plain
/// terminal colors.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" | "amber" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" | "sky" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn stage_track(&self, stage_index: usize) -> String {
        MATURITY_TIERS
            .iter()
            .enumerate()
            .map(|(i, tier)| {
                if i <= stage_index {
                    self.color("■", tier.color)
                } else {
                    self.color("□", "dim")
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_assessment_report(
        &self,
        report: &AssessmentReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        lines.push(self.color(&config.title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!("{}  {}", self.color("Region:", "cyan"), report.region_name));
        lines.push(format!("{}  {}", self.color("Progress:", "cyan"), report.status));

        // Maturity
        lines.push(String::new());
        let tier = &report.maturity.tier;
        lines.push(format!(
            "{}  {} {}  {}",
            self.color("Maturity:", "bold"),
            self.color(tier.name, tier.color),
            self.stage_track(report.maturity.stage_index),
            self.color(&format!("{}%", report.overall_percent), tier.color)
        ));
        lines.push(format!("  {}", self.color(tier.description, "dim")));

        // Insights
        lines.push(String::new());
        lines.push(self.color("Domain insights:", "bold"));
        let name_width = report
            .insights
            .iter()
            .map(|i| i.name.chars().count())
            .max()
            .unwrap_or(0);
        for insight in &report.insights {
            lines.push(format!(
                "  {:<width$}  {} {:>3}%  {}",
                insight.name,
                progress_bar(insight.progress),
                insight.progress,
                self.color(insight.tag.label(), insight.tag.color()),
                width = name_width
            ));
        }

        // Recommendations
        lines.push(String::new());
        lines.push(self.color("Priority recommendations:", "bold"));
        if report.recommendations.is_empty() {
            lines.push(format!("  {}", self.color(NO_RECOMMENDATIONS, "dim")));
        }
        for (i, rec) in report.recommendations.iter().enumerate() {
            let priority_color = match rec.priority {
                Priority::High => "red",
                Priority::Medium => "yellow",
                Priority::Low => "dim",
            };
            lines.push(format!(
                "  {}. {} [{}]",
                i + 1,
                rec.title,
                self.color(rec.priority.as_str(), priority_color)
            ));
            if !rec.link.is_empty() {
                lines.push(format!("     {}", self.color(&rec.link, "dim")));
            }
        }

        if config.include_answers {
            let unanswered: usize = report
                .sections
                .iter()
                .map(|s| s.rows.iter().filter(|r| !r.answered).count())
                .sum();
            if unanswered > 0 {
                lines.push(String::new());
                lines.push(self.color("Unanswered:", "bold"));
                for section in &report.sections {
                    for row in section.rows.iter().filter(|r| !r.answered) {
                        lines.push(format!(
                            "  {} {}",
                            self.color(&format!("[{}]", section.name), "dim"),
                            row.question
                        ));
                    }
                }
            }
        }

        if config.include_next_steps {
            lines.push(String::new());
            lines.push(self.color("Next steps:", "bold"));
            for step in &report.next_steps {
                lines.push(format!("  • {step}"));
            }
        }

        Ok(lines.join("\n"))
    }

    fn generate_catalog_report(
        &self,
        catalog: &Catalog,
        selection: &RegionSelection,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let filtered = filter_questions(&catalog.questions, selection);
        let mut lines = Vec::new();

        lines.push(self.color(&config.title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {} ({} of {} questions)",
            self.color("Region:", "cyan"),
            selection.display_name(),
            filtered.len(),
            catalog.question_count()
        ));

        for category in &catalog.categories {
            let questions: Vec<_> = filtered
                .iter()
                .filter(|q| q.category_id == category.id)
                .collect();
            lines.push(String::new());
            lines.push(format!(
                "{} {}",
                self.color(&category.name, "bold"),
                self.color(&format!("({})", questions.len()), "dim")
            ));
            for question in questions {
                let tags = if question.regions.is_empty() {
                    String::new()
                } else {
                    format!(" {}", self.color(&format!("[{}]", question.regions.join(", ")), "cyan"))
                };
                lines.push(format!("  {}{}", question.id, tags));
                lines.push(format!("    {}", self.color(&question.text, "dim")));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
