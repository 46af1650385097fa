use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use figcode_design::{
    extract as extract_markup, list_exportable_node_ids, unwrap_document, DesignNode, FileMetadata,
};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Design file JSON as returned by the Figma files API
    pub design: PathBuf,

    /// Print only the markup
    #[arg(short, long)]
    pub quiet: bool,
}

/// Markup and exportable node ids of a design file
pub fn describe(raw: &Value) -> (String, Vec<String>) {
    let markup = extract_markup(raw);
    let ids = match DesignNode::from_value(unwrap_document(raw)) {
        Ok(root) => list_exportable_node_ids(&root),
        Err(err) => {
            warn!(error = %err, "Design file has no readable document");
            Vec::new()
        }
    };
    (markup, ids)
}

pub fn extract(args: ExtractArgs, _cwd: &str) -> Result<()> {
    let source = fs::read_to_string(&args.design)
        .with_context(|| format!("Failed to read {}", args.design.display()))?;
    let raw: Value = serde_json::from_str(&source)
        .with_context(|| format!("{} is not valid JSON", args.design.display()))?;

    let (markup, ids) = describe(&raw);
    println!("{}", markup);
    if args.quiet {
        return Ok(());
    }

    let metadata = FileMetadata::from_value(&raw);
    println!();
    if let Some(name) = &metadata.name {
        println!("{} {}", "File:".bright_white(), name);
    }
    println!("{} {}", "Components:".bright_white(), metadata.component_count());
    println!("{} {}", "Exportable nodes:".bright_white(), ids.len());
    for id in &ids {
        println!("  {}", id);
    }

    Ok(())
}
