//! Recommendation definitions and priority ordering.

use serde::{Deserialize, Serialize};

/// Priority shared by questions and recommendations.
///
/// The derived `Ord` follows declaration order, so `High < Medium < Low`
/// and an ascending sort puts the most urgent items first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Lowercase label as used in catalog files
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A statically defined remediation offering that answers can trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Identifier referenced by question triggers
    pub id: String,
    /// Short title
    pub title: String,
    /// Explanation of the gap and the proposed remedy
    pub description: String,
    /// External link to the related service
    pub link: String,
    /// Priority used when ordering the selected list
    pub priority: Priority,
    /// Category this recommendation relates to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl Recommendation {
    /// Create a recommendation without a category association
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            link: link.into(),
            priority,
            category_id: None,
        }
    }

    /// Associate the recommendation with a category
    #[must_use]
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }
}
