//! Question catalogs: the built-in questionnaire, file loading and validation.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use compliance_assessment::catalog::{load_answers, load_catalog};
//! use compliance_assessment::model::Catalog;
//!
//! let builtin = Catalog::builtin();
//! let custom = load_catalog(Path::new("catalog.yaml"))?;
//! let answers = load_answers(Path::new("answers.json"))?;
//! # Ok::<(), compliance_assessment::AssessmentError>(())
//! ```

mod builtin;
mod loader;
mod validation;

pub use loader::{
    load_answers, load_catalog, parse_answers_str, parse_catalog_str, unknown_answer_ids,
    InputFormat,
};
pub use validation::{validate_catalog, CatalogValidation, CatalogWarning};

use std::path::Path;

use crate::error::Result;
use crate::model::Catalog;

/// Load the catalog at `path`, or the built-in one when no path is given.
pub fn load_or_builtin(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => load_catalog(path),
        None => Ok(Catalog::builtin()),
    }
}
