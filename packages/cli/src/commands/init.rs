use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use figcode_engine::{Framework, GenerationConfig, Styling};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Target framework (react, vue, angular, svelte)
    #[arg(short, long, default_value = "react")]
    pub framework: Framework,

    /// Styling strategy (css, scss, styled-components, tailwind)
    #[arg(short, long, default_value = "css")]
    pub styling: Styling,

    /// Output directory for generated files
    #[arg(short, long, default_value = "generated")]
    pub out_dir: String,

    /// Force overwrite existing config
    #[arg(long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing figcode project...".bright_blue().bold());

    let config = Config {
        out_dir: args.out_dir.clone(),
        generation: GenerationConfig {
            framework: args.framework,
            styling: args.styling,
            ..GenerationConfig::default()
        },
    };

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Export your design file JSON from Figma");
    println!("  2. Run: figcode generate design.json");
    println!("  3. Check output in {}/", args.out_dir);

    Ok(())
}
