//! compliance-assessment: GenAI privacy & compliance self-assessment
//!
//! Scores an answer file against the question catalog and reports maturity,
//! per-domain insights and prioritized recommendations.

#![allow(clippy::struct_excessive_bools)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use compliance_assessment::{
    cli::{self, AssessOptions},
    config::{self, AppConfig, ConfigPreset},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "compliance-assessment")]
#[command(author = "DevSecAI")]
#[command(version)]
#[command(about = "GenAI privacy & compliance self-assessment", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Assessment complete (and at or above --min-score)
    1  Assessment incomplete or below --min-score
    3  Error occurred

EXAMPLES:
    # Assess answers for the EU with the colored terminal summary
    compliance-assessment assess answers.json --region EU

    # Markdown report for the whole questionnaire
    compliance-assessment assess answers.yaml --region Global -o markdown -O report.md

    # CI gate: fail below 60%
    compliance-assessment assess answers.json --region UK -o json --min-score 60

    # Every triggered recommendation as Markdown
    compliance-assessment --preset report assess answers.json --region EU

    # List the questions that apply to the USA
    compliance-assessment catalog --region USA")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "COMPLIANCE_ASSESSMENT_CONFIG")]
    config: Option<PathBuf>,

    /// Configuration preset used instead of any config file (default, ci-cd, report)
    #[arg(long, global = true)]
    preset: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `assess` subcommand
#[derive(Parser)]
struct AssessArgs {
    /// Answer file: JSON or YAML mapping of question id to option label
    answers: PathBuf,

    /// Catalog file to use instead of the built-in questionnaire
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Region (USA, EU, UK, or Global to show every question)
    #[arg(short, long)]
    region: Option<String>,

    /// Output format (auto: summary on a terminal, JSON otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Maximum number of recommendations to show
    #[arg(short, long)]
    limit: Option<usize>,

    /// Exit with code 1 if the overall score is below this percentage
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    min_score: Option<u32>,

    /// Leave the per-question answer listing out of the report
    #[arg(long)]
    results_only: bool,
}

/// Arguments for the `catalog` subcommand
#[derive(Parser)]
struct CatalogArgs {
    /// Catalog file to use instead of the built-in questionnaire
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Region (USA, EU, UK, or Global to show every question)
    #[arg(short, long)]
    region: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an answer file and report maturity and recommendations
    Assess(AssessArgs),

    /// List the questions that apply to a region
    Catalog(CatalogArgs),

    /// List selectable regions and how many questions each one sees
    Regions {
        /// Catalog file to use instead of the built-in questionnaire
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run(cli) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Load the preset or config file (if any) and merge CLI overrides over it.
fn effective_config(cli: &Cli, overrides: &AppConfig) -> Result<AppConfig> {
    if let Some(name) = cli.preset.as_deref() {
        let preset = ConfigPreset::parse(name)?;
        tracing::info!("Using preset: {} ({})", preset, preset.description());
        return Ok(AppConfig::from_preset_with_overrides(preset, overrides));
    }
    let (config, loaded_from) = AppConfig::from_file_with_overrides(cli.config.as_deref(), overrides);
    if let Some(path) = loaded_from {
        tracing::info!("Using config file: {}", path.display());
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Assess(args) => {
            let overrides = AppConfig::builder()
                .region(args.region.clone())
                .catalog(args.catalog.clone())
                .output_format(args.output)
                .output_file(args.output_file.clone())
                .no_color(cli.no_color)
                .build();
            let mut config = effective_config(&cli, &overrides)?;
            // merge skips default-valued fields, so --limit is applied after it
            if let Some(limit) = args.limit {
                config.assessment.recommendation_limit = limit;
            }

            let options = AssessOptions {
                answers: args.answers.clone(),
                min_score: args.min_score,
                results_only: args.results_only,
                quiet: cli.quiet,
            };
            cli::run_assess(&config, &options)
        }

        Commands::Catalog(args) => {
            let overrides = AppConfig::builder()
                .region(args.region.clone())
                .catalog(args.catalog.clone())
                .output_format(args.output)
                .output_file(args.output_file.clone())
                .no_color(cli.no_color)
                .build();
            let config = effective_config(&cli, &overrides)?;
            cli::run_catalog(&config, cli.quiet)
        }

        Commands::Regions { catalog } => {
            let config = effective_config(&cli, &AppConfig::default())?;
            let catalog = catalog.clone().or(config.assessment.catalog);
            cli::run_regions(catalog.as_deref())
        }

        Commands::ConfigSchema { output } => {
            let schema =
                config::generate_json_schema().context("failed to generate config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(
                *shell,
                &mut Cli::command(),
                "compliance-assessment",
                &mut io::stdout(),
            );
            Ok(exit_codes::SUCCESS)
        }
    }
}
