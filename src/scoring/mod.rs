//! Assessment scoring engine.
//!
//! Converts an answer set and a filtered question set into scores, a
//! maturity tier, per-category insights and a short list of prioritized
//! recommendations. All functions are pure and take the answers explicitly.
//!
//! # Usage
//!
//! ```
//! use compliance_assessment::model::{AnswerSet, Question};
//! use compliance_assessment::scoring::{classify, overall_progress};
//!
//! let questions = vec![Question::new("q1", "Inventoried?", "discovery", ["Yes", "Partially", "No", "Unknown"])];
//! let answers = AnswerSet::new().with_answer("q1", "Partially");
//!
//! let overall = overall_progress(&questions, &answers);
//! assert_eq!(overall, 67);
//! assert_eq!(classify(overall).tier.name, "Managed");
//! ```

mod engine;
mod insight;
mod maturity;
mod recommend;

pub use engine::{
    answered_count, category_progress, is_category_answered, is_complete, overall_progress,
    progress_status, score_question, MAX_QUESTION_SCORE,
};
pub use insight::{
    build_insight, CategoryInsight, InsightTag, DEVELOPING_THRESHOLD, STRENGTH_THRESHOLD,
};
pub use maturity::{classify, MaturityLevel, MaturityTier, MATURITY_TIERS};
pub use recommend::{select_recommendations, trigger_fires, DEFAULT_RECOMMENDATION_LIMIT};
