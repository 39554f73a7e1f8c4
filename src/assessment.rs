//! A read-only view over a catalog, an answer set and a region choice.
//!
//! [`Assessment`] derives the filtered question set once and answers every
//! engine query against it. [`Assessment::snapshot`] freezes the results into
//! an [`AssessmentReport`] that renderers consume without recomputing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::filter::filter_questions;
use crate::model::{AnswerSet, Catalog, Question, Recommendation, RegionSelection};
use crate::scoring::{self, CategoryInsight, MaturityLevel};

/// Label used in reports for questions without a valid answer
pub const NOT_ANSWERED: &str = "Not Answered";

/// Follow-up actions listed at the end of every report.
pub const NEXT_STEPS: [&str; 5] = [
    "Schedule a comprehensive review of your AI systems",
    "Develop a compliance roadmap based on this assessment",
    "Establish documentation procedures for high-priority areas",
    "Review and update risk management processes",
    "Consider expert consultation for complex compliance requirements",
];

/// Borrowed bundle of everything the engine needs.
#[derive(Debug, Clone)]
pub struct Assessment<'a> {
    catalog: &'a Catalog,
    answers: &'a AnswerSet,
    selection: RegionSelection,
    filtered: Vec<&'a Question>,
}

impl<'a> Assessment<'a> {
    /// Create a view, filtering the catalog for `selection`
    pub fn new(catalog: &'a Catalog, answers: &'a AnswerSet, selection: RegionSelection) -> Self {
        let filtered = filter_questions(&catalog.questions, &selection);
        Self {
            catalog,
            answers,
            selection,
            filtered,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn answers(&self) -> &'a AnswerSet {
        self.answers
    }

    #[must_use]
    pub const fn selection(&self) -> &RegionSelection {
        &self.selection
    }

    /// Questions applicable to the selected region, in catalog order
    #[must_use]
    pub fn filtered(&self) -> &[&'a Question] {
        &self.filtered
    }

    /// Filtered questions of one category
    pub fn questions_in<'s>(
        &'s self,
        category_id: &'s str,
    ) -> impl Iterator<Item = &'a Question> + 's {
        self.filtered
            .iter()
            .copied()
            .filter(move |q| q.category_id == category_id)
    }

    #[must_use]
    pub fn category_progress(&self, category_id: &str) -> u32 {
        scoring::category_progress(category_id, &self.filtered, self.answers)
    }

    #[must_use]
    pub fn overall_progress(&self) -> u32 {
        scoring::overall_progress(&self.filtered, self.answers)
    }

    #[must_use]
    pub fn maturity(&self) -> MaturityLevel {
        scoring::classify(self.overall_progress())
    }

    /// One insight per catalog category, in catalog order
    #[must_use]
    pub fn insights(&self) -> Vec<CategoryInsight> {
        self.catalog
            .categories
            .iter()
            .map(|c| scoring::build_insight(c, self.category_progress(&c.id)))
            .collect()
    }

    /// Recommendations triggered by answers to the filtered questions.
    ///
    /// Answers to questions the region hides never raise a recommendation
    /// (see [`Assessment::out_of_scope_answers`]).
    #[must_use]
    pub fn recommendations(&self, limit: usize) -> Vec<Recommendation> {
        scoring::select_recommendations(
            &self.filtered,
            self.answers,
            &self.catalog.recommendations,
            limit,
        )
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        scoring::is_complete(
            &self.filtered,
            self.answers,
            self.catalog.question_count(),
            &self.selection,
        )
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        scoring::answered_count(&self.filtered, self.answers)
    }

    #[must_use]
    pub fn progress_status(&self) -> String {
        scoring::progress_status(
            &self.filtered,
            self.answers,
            self.catalog.question_count(),
            &self.selection,
        )
    }

    #[must_use]
    pub fn is_category_answered(&self, category_id: &str) -> bool {
        scoring::is_category_answered(category_id, &self.filtered, self.answers)
    }

    /// Category after `current_id`, available once `current_id` is fully answered
    #[must_use]
    pub fn next_category(&self, current_id: &str) -> Option<&'a str> {
        if !self.is_category_answered(current_id) {
            return None;
        }
        self.catalog.next_category(current_id)
    }

    /// Ids of catalog questions that are answered but not applicable to the
    /// current region.
    #[must_use]
    pub fn out_of_scope_answers(&self) -> Vec<&'a str> {
        self.catalog
            .questions
            .iter()
            .filter(|q| self.answers.get(&q.id).is_some())
            .filter(|q| !self.filtered.iter().any(|f| f.id == q.id))
            .map(|q| q.id.as_str())
            .collect()
    }

    /// Freeze the current results into a report snapshot.
    #[must_use]
    pub fn snapshot(&self, recommendation_limit: usize) -> AssessmentReport {
        let overall = self.overall_progress();
        let maturity = scoring::classify(overall);

        let sections = self
            .catalog
            .categories
            .iter()
            .map(|category| CategorySection {
                category_id: category.id.clone(),
                name: category.name.clone(),
                rows: self
                    .filtered
                    .iter()
                    .filter(|q| q.category_id == category.id)
                    .map(|q| AnswerRow::for_question(q, self.answers))
                    .collect(),
            })
            .collect();

        AssessmentReport {
            region: self.selection.clone(),
            region_name: self.selection.display_name(),
            overall_percent: overall,
            maturity,
            insights: self.insights(),
            recommendations: self.recommendations(recommendation_limit),
            answered: self.answered_count(),
            total: self.filtered.len(),
            complete: self.is_complete(),
            status: self.progress_status(),
            sections,
            next_steps: NEXT_STEPS.iter().map(ToString::to_string).collect(),
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// One question and the answer given to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRow {
    pub question_id: String,
    pub question: String,
    /// The selected option, or [`NOT_ANSWERED`]
    pub answer: String,
    pub answered: bool,
}

impl AnswerRow {
    fn for_question(question: &Question, answers: &AnswerSet) -> Self {
        let answered = answers.is_validly_answered(question);
        let answer = if answered {
            answers.get(&question.id).unwrap_or(NOT_ANSWERED).to_string()
        } else {
            NOT_ANSWERED.to_string()
        };
        Self {
            question_id: question.id.clone(),
            question: question.text.clone(),
            answer,
            answered,
        }
    }
}

/// The answer listing of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySection {
    pub category_id: String,
    pub name: String,
    pub rows: Vec<AnswerRow>,
}

/// Frozen assessment results, captured once and rendered by the reporters.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub region: RegionSelection,
    pub region_name: String,
    /// Overall percentage (0-100)
    pub overall_percent: u32,
    pub maturity: MaturityLevel,
    pub insights: Vec<CategoryInsight>,
    pub recommendations: Vec<Recommendation>,
    /// Filtered questions with a valid answer
    pub answered: usize,
    /// Size of the filtered question set
    pub total: usize,
    pub complete: bool,
    pub status: String,
    pub sections: Vec<CategorySection>,
    pub next_steps: Vec<String>,
    pub generated_at: DateTime<Utc>,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Priority};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Category::new("a", "Alpha", "", "#111111"),
                Category::new("b", "Beta", "", "#222222"),
            ],
            vec![
                Question::new("a1", "A1?", "a", ["Yes", "Partly", "No"]).with_last_option_trigger("R"),
                Question::new("a2", "A2?", "a", ["Yes", "No"]),
                Question::new("b1", "B1?", "b", ["Yes", "No"]).with_regions(["EU"]),
            ],
            vec![Recommendation::new("R", "Do R", "", "https://example.com", Priority::High)],
        )
    }

    #[test]
    fn test_filtered_view() {
        let catalog = catalog();
        let answers = AnswerSet::new();
        let unselected = Assessment::new(&catalog, &answers, RegionSelection::Unselected);
        assert_eq!(unselected.filtered().len(), 2);
        assert_eq!(unselected.progress_status(), "0 of 2 questions answered");

        let eu = Assessment::new(&catalog, &answers, RegionSelection::from_id("EU"));
        assert_eq!(eu.filtered().len(), 3);
        assert_eq!(eu.questions_in("b").count(), 1);
    }

    #[test]
    fn test_scores_and_insights() {
        let catalog = catalog();
        let answers = AnswerSet::new().with_answer("a1", "Yes").with_answer("a2", "Yes");
        let view = Assessment::new(&catalog, &answers, RegionSelection::from_id("EU"));

        assert_eq!(view.category_progress("a"), 100);
        assert_eq!(view.category_progress("b"), 0);
        assert_eq!(view.overall_progress(), 67);
        assert_eq!(view.maturity().tier.name, "Managed");

        let insights = view.insights();
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].tag, scoring::InsightTag::Strength);
        assert_eq!(insights[1].tag, scoring::InsightTag::PriorityFocus);
        assert!(!view.is_complete());
    }

    #[test]
    fn test_next_category_is_gated() {
        let catalog = catalog();
        let partial = AnswerSet::new().with_answer("a1", "Yes");
        let view = Assessment::new(&catalog, &partial, RegionSelection::All);
        assert_eq!(view.next_category("a"), None);

        let done = partial.clone().with_answer("a2", "No");
        let view = Assessment::new(&catalog, &done, RegionSelection::All);
        assert_eq!(view.next_category("a"), Some("b"));
        assert_eq!(view.next_category("b"), None);
    }

    #[test]
    fn test_out_of_scope_answers() {
        let catalog = catalog();
        let answers = AnswerSet::new().with_answer("b1", "Yes").with_answer("a1", "No");
        let view = Assessment::new(&catalog, &answers, RegionSelection::from_id("USA"));
        assert_eq!(view.out_of_scope_answers(), vec!["b1"]);
    }

    #[test]
    fn test_hidden_questions_raise_no_recommendations() {
        let catalog = Catalog::new(
            vec![Category::new("a", "Alpha", "", "")],
            vec![
                Question::new("a1", "A1?", "a", ["Yes", "No"]),
                Question::new("eu1", "EU1?", "a", ["Yes", "No"])
                    .with_regions(["EU"])
                    .with_last_option_trigger("R"),
            ],
            vec![Recommendation::new("R", "Do R", "", "", Priority::High)],
        );
        let answers = AnswerSet::new().with_answer("eu1", "No");

        let usa = Assessment::new(&catalog, &answers, RegionSelection::from_id("USA"));
        let report = usa.snapshot(3);
        assert_eq!(report.answered, 0);
        assert!(report.recommendations.is_empty());

        let eu = Assessment::new(&catalog, &answers, RegionSelection::from_id("EU"));
        let ids: Vec<String> = eu.recommendations(3).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["R"]);
    }

    #[test]
    fn test_snapshot() {
        let catalog = catalog();
        let answers = AnswerSet::new()
            .with_answer("a1", "No")
            .with_answer("a2", "stale");
        let view = Assessment::new(&catalog, &answers, RegionSelection::from_id("EU"));
        let report = view.snapshot(3);

        assert_eq!(report.overall_percent, 0);
        assert_eq!(report.maturity.tier.name, "Initial");
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.answered, 1);
        assert_eq!(report.total, 3);
        assert_eq!(report.status, "1 of 3 questions answered");
        assert_eq!(report.next_steps.len(), 5);
        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.sections[0].rows[0].answer, "No");
        assert_eq!(report.sections[0].rows[1].answer, NOT_ANSWERED);
        assert!(!report.sections[0].rows[1].answered);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["maturity"]["tier"]["name"], "Initial");
        assert_eq!(json["region"]["kind"], "region");
    }
}
