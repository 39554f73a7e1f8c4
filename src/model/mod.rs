//! Data model for the assessment engine.
//!
//! A [`Catalog`] holds the categories, questions and recommendations; an
//! [`AnswerSet`] holds what the user picked; a [`RegionSelection`] narrows
//! which questions apply.

mod answers;
mod catalog;
mod recommendation;
mod region;

pub use answers::AnswerSet;
pub use catalog::{Catalog, Category, Question};
pub use recommendation::{Priority, Recommendation};
pub use region::{region_name, RegionOption, RegionSelection, BUILTIN_REGIONS, SHOW_ALL_REGION_ID};
