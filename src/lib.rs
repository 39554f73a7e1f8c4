//! **A scoring engine for GenAI privacy & compliance self-assessments.**
//!
//! `compliance-assessment` takes a question catalog, the answers a user gave
//! and the region they operate in, and derives:
//!
//! - per-category and overall compliance progress (0–100),
//! - a five-stage maturity level,
//! - per-domain insight tags (strength / developing / priority focus),
//! - a short, prioritized list of triggered recommendations.
//!
//! Every engine operation is a pure function of its inputs. Nothing is
//! cached, and stale or malformed answers simply count as unanswered.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Catalog`], [`Question`], [`AnswerSet`] and
//!   [`RegionSelection`].
//! - **[`filter`]**: narrows the catalog to the questions a region sees.
//! - **[`scoring`]**: question scores, progress, maturity tiers, insights and
//!   recommendation selection.
//! - **[`assessment`]**: [`Assessment`], a read-only view over one catalog,
//!   answer set and region, and the [`AssessmentReport`] snapshot it freezes.
//! - **[`catalog`]**: the built-in questionnaire plus YAML/JSON loading and
//!   validation.
//! - **[`reports`]**: JSON, Markdown and terminal summary renderers.
//! - **[`config`]**: YAML configuration files, presets and validation.
//!
//! ## Getting Started
//!
//! ```
//! use compliance_assessment::{AnswerSet, Assessment, Catalog, RegionSelection};
//!
//! let catalog = Catalog::builtin();
//! let answers = AnswerSet::new()
//!     .with_answer("genAiInventory", "Partially")
//!     .with_answer("dataSourcesGenAi", "No");
//!
//! let assessment = Assessment::new(&catalog, &answers, RegionSelection::from_id("EU"));
//! // (66.67 + 0) over five discovery questions
//! assert_eq!(assessment.category_progress("discovery"), 13);
//! assert_eq!(assessment.recommendations(3)[0].id, "REC_DATA_GOVERNANCE");
//! assert!(!assessment.is_complete());
//!
//! for rec in assessment.recommendations(3) {
//!     println!("[{}] {}", rec.priority, rec.title);
//! }
//! ```
//!
//! ## Loading Files
//!
//! ```no_run
//! use std::path::Path;
//! use compliance_assessment::catalog::{load_answers, load_catalog};
//! use compliance_assessment::{Assessment, RegionSelection};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = load_catalog(Path::new("catalog.yaml"))?;
//!     let answers = load_answers(Path::new("answers.json"))?;
//!     let report = Assessment::new(&catalog, &answers, RegionSelection::All).snapshot(3);
//!     println!("{}% - {}", report.overall_percent, report.maturity.tier.name);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Percentages are bounded to 0..=100 before every float/int cast
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    // Builders and query methods take self for API consistency
    clippy::unused_self,
    clippy::similar_names
)]

pub mod assessment;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use assessment::{Assessment, AssessmentReport};
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{AssessmentConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{AssessmentError, ErrorContext, OptionContext, Result};
pub use filter::filter_questions;
pub use model::{AnswerSet, Catalog, Category, Priority, Question, Recommendation, RegionSelection};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{classify, CategoryInsight, InsightTag, MaturityLevel};
