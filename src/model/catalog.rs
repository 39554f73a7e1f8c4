//! Categories, questions and the catalog that holds them.

use serde::{Deserialize, Serialize};

use super::{Priority, Recommendation};

/// A named grouping of related questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Display color, usually a `#rrggbb` hex string
    #[serde(default)]
    pub color: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            color: color.into(),
        }
    }
}

/// A single assessment question.
///
/// Options are ordered from most mature (index 0) to least mature (last
/// index). Scoring depends on that ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub category_id: String,
    /// Regions this question is specific to; empty means it applies everywhere
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,
    /// Recommendation raised when this question's trigger fires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_trigger_id: Option<String>,
    /// Answers that fire the trigger. `None` falls back to the last option;
    /// an explicit empty list never fires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_option_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Help text shown next to the question
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Reference article link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
}

impl Question {
    /// Create a region-neutral question without trigger metadata
    pub fn new<I, S>(
        id: impl Into<String>,
        text: impl Into<String>,
        category_id: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            category_id: category_id.into(),
            regions: Vec::new(),
            recommendation_trigger_id: None,
            trigger_option_values: None,
            priority: None,
            info: None,
            article: None,
        }
    }

    /// Restrict the question to the given regions
    #[must_use]
    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Trigger a recommendation on any of the listed answers
    #[must_use]
    pub fn with_trigger<I, S>(mut self, recommendation_id: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommendation_trigger_id = Some(recommendation_id.into());
        self.trigger_option_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Trigger a recommendation on the last (least mature) option only
    #[must_use]
    pub fn with_last_option_trigger(mut self, recommendation_id: impl Into<String>) -> Self {
        self.recommendation_trigger_id = Some(recommendation_id.into());
        self.trigger_option_values = None;
        self
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    #[must_use]
    pub fn with_article(mut self, article: impl Into<String>) -> Self {
        self.article = Some(article.into());
        self
    }

    /// Position of `answer` in the option list
    #[must_use]
    pub fn option_index(&self, answer: &str) -> Option<usize> {
        self.options.iter().position(|o| o == answer)
    }

    /// The least mature option
    #[must_use]
    pub fn last_option(&self) -> Option<&str> {
        self.options.last().map(String::as_str)
    }

    /// Whether the question carries no region restriction
    #[must_use]
    pub fn is_region_neutral(&self) -> bool {
        self.regions.is_empty()
    }

    /// Whether the question is tagged with `region`
    #[must_use]
    pub fn is_tagged_with(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }
}

/// The full question catalog: categories in display order, questions in
/// authoring order and the recommendations their triggers refer to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl Catalog {
    pub fn new(
        categories: Vec<Category>,
        questions: Vec<Question>,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            categories,
            questions,
            recommendations,
        }
    }

    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    #[must_use]
    pub fn recommendation(&self, id: &str) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.id == id)
    }

    /// Id of the category that follows `current_id` in display order
    #[must_use]
    pub fn next_category(&self, current_id: &str) -> Option<&str> {
        let index = self.categories.iter().position(|c| c.id == current_id)?;
        self.categories.get(index + 1).map(|c| c.id.as_str())
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Category::new("a", "Alpha", "", "#fff"),
                Category::new("b", "Beta", "", "#000"),
            ],
            vec![Question::new("q1", "One?", "a", ["Yes", "No"])],
            vec![],
        )
    }

    #[test]
    fn test_next_category() {
        let catalog = catalog();
        assert_eq!(catalog.next_category("a"), Some("b"));
        assert_eq!(catalog.next_category("b"), None);
        assert_eq!(catalog.next_category("missing"), None);
    }

    #[test]
    fn test_question_helpers() {
        let q = Question::new("q", "Text", "a", ["Yes", "Partially", "No"])
            .with_regions(["EU", "UK"])
            .with_last_option_trigger("REC");
        assert_eq!(q.option_index("Partially"), Some(1));
        assert_eq!(q.option_index("partially"), None);
        assert_eq!(q.last_option(), Some("No"));
        assert!(q.is_tagged_with("UK"));
        assert!(!q.is_region_neutral());
        assert!(q.trigger_option_values.is_none());
    }

    #[test]
    fn test_question_deserialize_defaults() {
        let yaml = "id: q\ntext: T\noptions: [A, B]\ncategory_id: a\n";
        let q: Question = serde_yaml::from_str(yaml).unwrap();
        assert!(q.regions.is_empty());
        assert!(q.recommendation_trigger_id.is_none());
        assert!(q.trigger_option_values.is_none());
    }

    #[test]
    fn test_explicit_empty_trigger_list_is_preserved() {
        let yaml = "id: q\ntext: T\noptions: [A, B]\ncategory_id: a\nrecommendation_trigger_id: R\ntrigger_option_values: []\n";
        let q: Question = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(q.trigger_option_values, Some(vec![]));
    }
}
