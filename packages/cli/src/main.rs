mod commands;
mod config;
mod diagnostics;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    extract, generate, init, validate, ExtractArgs, GenerateArgs, InitArgs, ValidateArgs,
};
use tracing_subscriber::EnvFilter;

/// figcode CLI - turn Figma designs into component code
#[derive(Parser, Debug)]
#[command(name = "figcode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a figcode.config.json with default settings
    Init(InitArgs),

    /// Generate a component from a design file
    Generate(GenerateArgs),

    /// Validate component, stylesheet and template sources
    Validate(ValidateArgs),

    /// Print the SVG extracted from a design file
    Extract(ExtractArgs),
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Generate(args) => generate(args, &cwd).await,
        Command::Validate(args) => validate(args, &cwd),
        Command::Extract(args) => extract(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
