//! Text documents assembled around the generated code: the header comment
//! and the HTML preview.

use crate::config::{ComponentLibrary, GenerationConfig};
use figcode_compiler::Framework;
use figcode_design::FileMetadata;

/// Characters of component source shown in the preview
pub const PREVIEW_EXCERPT_CHARS: usize = 300;

fn header_lines(
    design_name: &str,
    library: ComponentLibrary,
    metadata: Option<&FileMetadata>,
) -> Vec<String> {
    let mut lines = vec![format!("Generated by figcode from \"{}\"", design_name)];
    if library != ComponentLibrary::Custom {
        lines.push(format!("Component library: {}", library));
    }
    let Some(metadata) = metadata else {
        return lines;
    };

    let fields = [
        ("Figma file", &metadata.key),
        ("File name", &metadata.name),
        ("Last modified", &metadata.last_modified),
        ("Version", &metadata.version),
        ("Thumbnail", &metadata.thumbnail_url),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            lines.push(format!("{}: {}", label, value));
        }
    }

    let components = metadata.component_count();
    if components > 0 {
        lines.push(format!("Components: {}", components));
    }
    lines
}

/// Comment block naming the design file, in the syntax of the component file
pub fn header_comment(
    config: &GenerationConfig,
    design_name: &str,
    metadata: Option<&FileMetadata>,
) -> String {
    // Angle brackets would read as tags to the markup validators
    let lines = header_lines(design_name, config.component_library, metadata)
        .into_iter()
        .map(|line| line.replace(['<', '>'], ""));

    let mut out = String::new();
    match config.framework {
        Framework::React | Framework::Angular => {
            out.push_str("/**\n");
            for line in lines {
                out.push_str(&format!(" * {}\n", line.replace("*/", "* /")));
            }
            out.push_str(" */\n");
        }
        Framework::Vue | Framework::Svelte => {
            out.push_str("<!--\n");
            for line in lines {
                let mut line = line;
                while line.contains("--") {
                    line = line.replace("--", "-");
                }
                out.push_str(&format!("  {}\n", line));
            }
            out.push_str("-->\n");
        }
    }
    out
}

/// Standalone HTML page showing the start of the component source
pub fn render_preview(framework: Framework, component_name: &str, component_source: &str) -> String {
    let excerpt: String = component_source.chars().take(PREVIEW_EXCERPT_CHARS).collect();
    let excerpt = html_escape::encode_text(&excerpt);
    let title = html_escape::encode_text(component_name);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title} Preview</title>
    <style>
        body {{ font-family: Arial, sans-serif; padding: 20px; background: #f5f5f5; }}
        .preview {{
          background: white;
          border: 1px solid #ddd;
          padding: 20px;
          border-radius: 8px;
          box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .code-preview {{
          background: #f8f9fa;
          border: 1px solid #e9ecef;
          border-radius: 4px;
          padding: 15px;
          margin-top: 15px;
          font-family: 'Courier New', monospace;
          font-size: 12px;
          overflow-x: auto;
        }}
    </style>
</head>
<body>
    <div class="preview">
        <h2>Component Preview</h2>
        <p>Your Figma design has been converted to a {framework} component.</p>
        <div class="code-preview">
          <strong>Generated Code Preview:</strong><br/>
          <pre>{excerpt}...</pre>
        </div>
        <p><em>Download the complete files to see the full implementation.</em></p>
    </div>
</body>
</html>
"#,
        title = title,
        framework = framework,
        excerpt = excerpt,
    )
}
