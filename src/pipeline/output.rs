//! Output handling for assessment reports.
//!
//! Provides utilities for auto-detecting output format and writing reports.

use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Target for output - either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Self::File(p),
            None => Self::Stdout,
        }
    }

    /// Check if output is to a terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Auto-detect the output format based on TTY and output target
///
/// File targets pick the format from their extension (`.json`, `.md`).
/// Otherwise an interactive terminal gets the colored summary and
/// everything else gets JSON.
#[must_use]
pub fn auto_detect_format(format: ReportFormat, target: &OutputTarget) -> ReportFormat {
    if format != ReportFormat::Auto {
        return format;
    }
    if let OutputTarget::File(path) = target {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => return ReportFormat::Json,
            Some("md" | "markdown") => return ReportFormat::Markdown,
            _ => {}
        }
    }
    format.resolve(target.is_terminal())
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("Report written to {}", path.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_target_from_option_none() {
        let target = OutputTarget::from_option(None);
        assert!(matches!(target, OutputTarget::Stdout));
    }

    #[test]
    fn test_output_target_from_option_some() {
        let path = PathBuf::from("/tmp/report.json");
        let target = OutputTarget::from_option(Some(path.clone()));
        match target {
            OutputTarget::File(p) => assert_eq!(p, path),
            OutputTarget::Stdout => panic!("Expected File variant"),
        }
    }

    #[test]
    fn test_auto_detect_format_non_auto() {
        let target = OutputTarget::File(PathBuf::from("/tmp/report.md"));
        assert_eq!(
            auto_detect_format(ReportFormat::Summary, &target),
            ReportFormat::Summary
        );
        assert_eq!(
            auto_detect_format(ReportFormat::Json, &OutputTarget::Stdout),
            ReportFormat::Json
        );
    }

    #[test]
    fn test_auto_detect_format_from_extension() {
        let md = OutputTarget::File(PathBuf::from("out/Report.MD"));
        assert_eq!(
            auto_detect_format(ReportFormat::Auto, &md),
            ReportFormat::Markdown
        );
        let json = OutputTarget::File(PathBuf::from("out/report.json"));
        assert_eq!(
            auto_detect_format(ReportFormat::Auto, &json),
            ReportFormat::Json
        );
    }

    #[test]
    fn test_auto_detect_format_unknown_extension() {
        // File targets are never terminals, so Auto -> Json
        let target = OutputTarget::File(PathBuf::from("/tmp/report.txt"));
        assert_eq!(
            auto_detect_format(ReportFormat::Auto, &target),
            ReportFormat::Json
        );
    }

    #[test]
    fn test_should_use_color_with_flag() {
        assert!(!should_use_color(true));
    }

    #[test]
    fn test_should_use_color_without_flag() {
        let expected = std::env::var("NO_COLOR").is_err();
        assert_eq!(should_use_color(false), expected);
    }

    #[test]
    fn test_write_output_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.md");
        write_output("# Report", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# Report");
    }

    #[test]
    fn test_write_output_missing_dir_fails() {
        let target = OutputTarget::File(PathBuf::from("/nonexistent/dir/report.md"));
        let err = write_output("x", &target, true).unwrap_err();
        assert!(err.to_string().contains("Failed to write output"));
    }
}
