//! Catalog and region command handlers.
//!
//! Implements the `catalog` subcommand (list the questions that apply to a
//! region) and the `regions` subcommand.

use crate::catalog::load_or_builtin;
use crate::config::AppConfig;
use crate::filter::filter_questions;
use crate::model::{region_name, Catalog, RegionSelection, BUILTIN_REGIONS};
use crate::pipeline::{exit_codes, output_catalog, write_output, OutputTarget};
use crate::reports::ReportConfig;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

use super::ensure_valid;

/// Run the catalog command, returning the desired exit code.
pub fn run_catalog(config: &AppConfig, quiet: bool) -> Result<i32> {
    ensure_valid(config)?;

    let catalog = load_catalog_for(config.assessment.catalog.as_deref())?;
    let selection = RegionSelection::from_option(config.assessment.region.as_deref());

    let report_config = ReportConfig::default().with_title("Assessment Questionnaire");
    output_catalog(&catalog, &selection, &config.output, &report_config, quiet)?;

    Ok(exit_codes::SUCCESS)
}

/// Run the regions command: list selectable regions with their question counts.
pub fn run_regions(catalog_path: Option<&Path>) -> Result<i32> {
    let catalog = load_catalog_for(catalog_path)?;
    let listing = format_regions(&catalog);
    write_output(listing.trim_end(), &OutputTarget::Stdout, true)?;
    Ok(exit_codes::SUCCESS)
}

fn load_catalog_for(path: Option<&Path>) -> Result<Catalog> {
    load_or_builtin(path).with_context(|| match path {
        Some(p) => format!("Failed to load catalog: {}", p.display()),
        None => "Failed to load built-in catalog".to_string(),
    })
}

/// One line per built-in region, followed by any extra region tags the
/// catalog uses.
fn format_regions(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:<40} QUESTIONS", "ID", "NAME");

    for region in BUILTIN_REGIONS {
        let count = filter_questions(&catalog.questions, &RegionSelection::from_id(region.id)).len();
        let _ = writeln!(out, "{:<8} {:<40} {}", region.id, region.name, count);
    }

    let mut extra: Vec<&str> = catalog
        .questions
        .iter()
        .flat_map(|q| q.regions.iter().map(String::as_str))
        .filter(|tag| region_name(tag).is_none())
        .collect();
    extra.sort_unstable();
    extra.dedup();
    for tag in extra {
        let count = filter_questions(&catalog.questions, &RegionSelection::from_id(tag)).len();
        let _ = writeln!(out, "{:<8} {:<40} {}", tag, "(catalog tag)", count);
    }

    out
}
