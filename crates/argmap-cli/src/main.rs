//! Argmap CLI - validate and normalize argument-map XML documents.

use anyhow::{bail, Context, Result};
use argmap_normalizer::GraphNormalizer;
use argmap_validator::{SchemaValidator, ValidatorConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Validate and normalize argument-map XML documents.
#[derive(Debug, Parser)]
#[command(name = "argmap")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Structural schema artifact (defaults to the built-in schema)
    #[arg(long, global = true, requires = "rules")]
    structure: Option<PathBuf>,

    /// Business-rule schema artifact (defaults to the built-in rules)
    #[arg(long, global = true, requires = "structure")]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a document and print every diagnostic
    Validate {
        /// Path to the XML document
        file: PathBuf,
    },

    /// Validate and normalize a document, printing the record as JSON
    Parse {
        /// Path to the XML document
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let validator = build_validator(&cli)?;

    match cli.command {
        Command::Validate { file } => {
            let xml = read(&file)?;
            let result = validator.validate(&xml);
            if result.is_valid {
                println!("{}: valid", file.display());
            } else {
                for diagnostic in &result.diagnostics {
                    println!("{}", diagnostic);
                }
                bail!(
                    "{} failed validation with {} error(s)",
                    file.display(),
                    result.diagnostics.len()
                );
            }
        }
        Command::Parse { file } => {
            let xml = read(&file)?;
            let result = validator.validate(&xml);
            if !result.is_valid {
                for diagnostic in &result.diagnostics {
                    println!("{}", diagnostic);
                }
                bail!(
                    "{} failed validation with {} error(s)",
                    file.display(),
                    result.diagnostics.len()
                );
            }
            let map = GraphNormalizer::default_config()
                .parse_str(&xml)
                .context("normalization failed")?;
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
    }
    Ok(())
}

fn build_validator(cli: &Cli) -> Result<SchemaValidator> {
    match (&cli.structure, &cli.rules) {
        (Some(structure), Some(rules)) => {
            let config = ValidatorConfig {
                structure_path: structure.clone(),
                rules_path: rules.clone(),
            };
            SchemaValidator::new(&config).context("failed to load schema artifacts")
        }
        _ => SchemaValidator::builtin().context("built-in schema artifacts failed to compile"),
    }
}

fn read(file: &PathBuf) -> Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}
