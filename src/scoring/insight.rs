//! Per-category insight tags.
//!
//! This three-bucket scale is independent of the five maturity tiers; the
//! thresholds are not shared.

use serde::{Deserialize, Serialize};

use crate::model::Category;

/// Progress at or above which a category is a strength
pub const STRENGTH_THRESHOLD: u32 = 67;
/// Progress at or above which a category is developing
pub const DEVELOPING_THRESHOLD: u32 = 34;

/// Qualitative read of a single category's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum InsightTag {
    /// 67% and above
    Strength,
    /// 34% to 66%
    Developing,
    /// Below 34%
    PriorityFocus,
}

impl InsightTag {
    /// Tag for a category progress percentage
    #[must_use]
    pub const fn from_progress(progress: u32) -> Self {
        if progress >= STRENGTH_THRESHOLD {
            Self::Strength
        } else if progress >= DEVELOPING_THRESHOLD {
            Self::Developing
        } else {
            Self::PriorityFocus
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Developing => "Developing",
            Self::PriorityFocus => "Priority Focus",
        }
    }

    /// Color name used by renderers
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Strength => "green",
            Self::Developing => "amber",
            Self::PriorityFocus => "red",
        }
    }
}

impl std::fmt::Display for InsightTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A category's progress and its qualitative tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInsight {
    pub category_id: String,
    pub name: String,
    pub color: String,
    /// Category progress percentage (0-100)
    pub progress: u32,
    pub tag: InsightTag,
}

/// Build the insight for a category at the given progress.
#[must_use]
pub fn build_insight(category: &Category, progress: u32) -> CategoryInsight {
    CategoryInsight {
        category_id: category.id.clone(),
        name: category.name.clone(),
        color: category.color.clone(),
        progress,
        tag: InsightTag::from_progress(progress),
    }
}
