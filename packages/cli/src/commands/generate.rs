use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use figcode_engine::{
    BuildStatus, CodeGenerationEngine, DesignData, Framework, GeneratedResult, GenerationConfig,
    LogLevel, ProgressCallback, Styling,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PREVIEW_FILE_NAME: &str = "preview.html";

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Design file JSON as returned by the Figma files API
    pub design: PathBuf,

    /// Pre-rendered SVG to use instead of extracting from the design
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Target framework (react, vue, angular, svelte)
    #[arg(short, long)]
    pub framework: Option<Framework>,

    /// Emit TypeScript
    #[arg(long, conflicts_with = "no_typescript")]
    pub typescript: bool,

    /// Emit plain JavaScript
    #[arg(long)]
    pub no_typescript: bool,

    /// Styling strategy (css, scss, styled-components, tailwind)
    #[arg(short, long)]
    pub styling: Option<Styling>,

    /// Component name (defaults to the design name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Config file (defaults to figcode.config.json in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with an error status when validation finds errors
    #[arg(long)]
    pub strict: bool,
}

impl GenerateArgs {
    /// Apply command-line overrides on top of the config file
    fn generation_config(&self, base: GenerationConfig) -> GenerationConfig {
        let mut config = base;
        if let Some(framework) = self.framework {
            config.framework = framework;
        }
        if let Some(styling) = self.styling {
            config.styling = styling;
        }
        if self.typescript {
            config.typescript = true;
        }
        if self.no_typescript {
            config.typescript = false;
        }
        if let Some(name) = &self.name {
            config.component_name = Some(name.clone());
        }
        config
    }
}

pub async fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load(cwd)?,
    };
    let generation = args.generation_config(config.generation.clone());

    let source = fs::read_to_string(&args.design)
        .with_context(|| format!("Failed to read {}", args.design.display()))?;
    let raw: serde_json::Value = serde_json::from_str(&source)
        .with_context(|| format!("{} is not valid JSON", args.design.display()))?;

    let mut design = DesignData::from_value(raw);
    if let Some(svg) = &args.svg {
        let markup = fs::read_to_string(svg)
            .with_context(|| format!("Failed to read {}", svg.display()))?;
        design = design.with_markup(markup);
    }

    println!("{}", "🎨 Generating component...".bright_blue().bold());

    let progress: &ProgressCallback = &|percent: u8, status: &str| {
        debug!(percent, status, "Generation progress");
    };
    let engine = CodeGenerationEngine::new();
    let result = engine
        .generate_code(&design, generation, Some(progress))
        .await
        .map_err(|err| {
            let report = err.report();
            anyhow!("{}\n{}", report.message, report.stack.join("\n"))
        })?;

    let out_dir = match &args.out_dir {
        Some(out) => PathBuf::from(cwd).join(out),
        None => config.get_out_dir(cwd),
    };
    write_result(&result, &out_dir)?;
    print_summary(&result, &out_dir);

    if args.strict && !result.validation.is_valid {
        std::process::exit(1);
    }

    Ok(())
}

fn write_result(result: &GeneratedResult, out_dir: &Path) -> Result<()> {
    for file in &result.files {
        let output_file = out_dir.join(&file.path);

        // Create output directory
        if let Some(parent) = output_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_file, &file.content)?;
        println!("  {} {}", "✓".green(), file.path);
    }

    fs::create_dir_all(out_dir)?;
    fs::write(out_dir.join(PREVIEW_FILE_NAME), &result.preview)?;
    println!("  {} {}", "✓".green(), PREVIEW_FILE_NAME);

    Ok(())
}

fn print_summary(result: &GeneratedResult, out_dir: &Path) {
    let errors = result
        .build_logs
        .iter()
        .filter(|log| log.level == LogLevel::Error)
        .count();
    let warnings = result
        .build_logs
        .iter()
        .filter(|log| log.level == LogLevel::Warn)
        .count();

    println!();
    match result.build_status {
        BuildStatus::Success => println!("{} Generated {}", "✅".green(), result.component_name.bold()),
        BuildStatus::Warning => println!(
            "{} Generated {} with {} warnings",
            "⚠️".yellow(),
            result.component_name.bold(),
            warnings
        ),
        BuildStatus::Error => println!(
            "{} Generated {} with {} errors",
            "❌".red(),
            result.component_name.bold(),
            errors
        ),
    }

    for log in &result.build_logs {
        let level = match log.level {
            LogLevel::Error => "error".red().bold(),
            LogLevel::Warn => "warning".yellow().bold(),
            LogLevel::Info => "info".blue().bold(),
        };
        println!("  {} {}", level, log.message);
    }

    let quality = &result.quality;
    println!();
    println!("Quality: {}/100", quality.overall);
    println!(
        "  visual {}  code {}  performance {}  accessibility {}  maintainability {}  security {}",
        quality.categories.visual,
        quality.categories.code,
        quality.categories.performance,
        quality.categories.accessibility,
        quality.categories.maintainability,
        quality.categories.security
    );
    for recommendation in &quality.recommendations {
        println!("  {} {}", "💡".dimmed(), recommendation.dimmed());
    }

    println!();
    println!("Output: {}", out_dir.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GenerateArgs {
        GenerateArgs {
            design: PathBuf::from("design.json"),
            svg: None,
            framework: None,
            typescript: false,
            no_typescript: false,
            styling: None,
            name: None,
            out_dir: None,
            config: None,
            strict: false,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let base = GenerationConfig {
            framework: Framework::Vue,
            typescript: true,
            ..GenerationConfig::default()
        };

        let config = args().generation_config(base.clone());
        assert_eq!(config, base);

        let overridden = GenerateArgs {
            framework: Some(Framework::Svelte),
            no_typescript: true,
            styling: Some(Styling::Tailwind),
            name: Some("Logo".to_string()),
            ..args()
        }
        .generation_config(base);
        assert_eq!(overridden.framework, Framework::Svelte);
        assert!(!overridden.typescript);
        assert_eq!(overridden.styling, Styling::Tailwind);
        assert_eq!(overridden.component_name.as_deref(), Some("Logo"));
    }

    #[tokio::test]
    async fn test_generate_writes_files() {
        let dir = std::env::temp_dir().join("figcode_cli_generate_test");
        fs::create_dir_all(&dir).unwrap();
        let design = dir.join("design.json");
        fs::write(
            &design,
            r#"{
                "name": "Badge",
                "document": {
                    "type": "DOCUMENT",
                    "children": [
                        { "type": "RECTANGLE", "absoluteBoundingBox": { "x": 0, "y": 0, "width": 24, "height": 24 } }
                    ]
                }
            }"#,
        )
        .unwrap();

        let cwd = dir.display().to_string();
        generate(
            GenerateArgs {
                design,
                out_dir: Some("out".to_string()),
                ..args()
            },
            &cwd,
        )
        .await
        .unwrap();

        assert!(dir.join("out/src/components/Badge.tsx").exists());
        assert!(dir.join("out/src/styles/Badge.css").exists());
        assert!(dir.join("out/src/types/Badge.types.ts").exists());
        let preview = fs::read_to_string(dir.join("out").join(PREVIEW_FILE_NAME)).unwrap();
        assert!(preview.starts_with("<!DOCTYPE html>"));

        fs::remove_dir_all(&dir).ok();
    }
}
