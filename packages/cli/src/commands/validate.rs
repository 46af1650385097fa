use crate::diagnostics::format_findings;
use anyhow::{anyhow, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use figcode_validator::{validate as validate_source, Language, Severity, ValidationReport};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Source file or directory to validate
    pub input: PathBuf,

    /// Language to validate as (detected from the extension by default)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Show all findings including info level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileReport {
    path: String,
    language: Language,
    #[serde(flatten)]
    report: ValidationReport,
}

#[derive(Debug, Default)]
struct Totals {
    files: usize,
    findings: usize,
    errors: usize,
    warnings: usize,
}

pub fn validate(args: ValidateArgs, _cwd: &str) -> Result<()> {
    let files = if args.input.is_file() {
        vec![args.input.clone()]
    } else if args.input.is_dir() {
        find_source_files(&args.input)
    } else {
        return Err(anyhow!(
            "Input path does not exist: {}",
            args.input.display()
        ));
    };

    let text = args.format == OutputFormat::Text;
    if text {
        println!("🔍 {} figcode validator", "Starting".green().bold());
        println!("   Input: {}", args.input.display());
        if args.input.is_dir() {
            println!("   Found {} source files", files.len());
        }
        println!();
    }

    let mut totals = Totals::default();
    let mut reports = Vec::new();
    for file in &files {
        let Some(language) = args.language.or_else(|| Language::from_path(&file.to_string_lossy())) else {
            return Err(anyhow!(
                "Cannot tell the language of {}; pass --language",
                file.display()
            ));
        };

        let source = fs::read_to_string(file)?;
        let report = validate_source(&source, language);
        debug!(file = %file.display(), language = %language, findings = report.errors.len(), "Validated file");

        totals.files += 1;
        totals.findings += report.errors.len();
        totals.errors += report.error_count();
        totals.warnings += report.warning_count();

        if text {
            print_file_report(file, &source, &report, args.verbose);
        } else {
            reports.push(FileReport {
                path: file.display().to_string(),
                language,
                report,
            });
        }
    }

    if text {
        print_totals(&totals);
    } else {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    // Exit with error code if there are errors
    if totals.errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn print_file_report(file: &Path, source: &str, report: &ValidationReport, verbose: bool) {
    let shown: Vec<_> = report
        .errors
        .iter()
        .filter(|finding| verbose || finding.severity != Severity::Info)
        .collect();

    if shown.is_empty() {
        if verbose {
            println!("{} {}", "✓".green(), file.display());
        }
        return;
    }

    let filename = file.display().to_string();
    eprint!("{}", format_findings(source, &filename, &shown));
}

fn print_totals(totals: &Totals) {
    println!();
    println!(
        "✨ {} Validation complete!",
        if totals.errors > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Files checked: {}", totals.files);
    println!("   Total findings: {}", totals.findings);

    if totals.errors > 0 {
        println!("   {} {}", "Errors:".red(), totals.errors);
    }
    if totals.warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), totals.warnings);
    }

    if totals.errors == 0 && totals.warnings == 0 {
        println!("   {} No issues found!", "✓".green());
    }
}

/// Files under `dir` with an extension one of the validators understands
fn find_source_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            !entry
                .path()
                .components()
                .any(|part| part.as_os_str() == "node_modules")
        })
        .filter(|entry| Language::from_path(&entry.path().to_string_lossy()).is_some())
        .map(|entry| entry.into_path())
        .collect()
}
