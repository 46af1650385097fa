//! Design-file input: accepted shapes, file metadata and the service seam.

use crate::error::{DesignError, DesignResult};
use crate::visitor::list_exportable_node_ids;
use crate::DesignNode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Pick the document root out of any of the accepted input shapes:
/// `{document}`, `{file: {document}}` or a bare node.
pub fn unwrap_document(value: &Value) -> &Value {
    if let Some(document) = value.get("document").filter(|d| !d.is_null()) {
        return document;
    }
    if let Some(document) = value
        .get("file")
        .and_then(|file| file.get("document"))
        .filter(|d| !d.is_null())
    {
        return document;
    }
    value
}

/// File-level data the design service returns next to the node tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub components: Value,
    #[serde(default)]
    pub styles: Value,
}

impl FileMetadata {
    /// Read metadata from either the top level or a nested `file` object.
    /// Fields with unexpected types are left empty.
    pub fn from_value(value: &Value) -> Self {
        let source = match value.get("file") {
            Some(file) if file.is_object() => file,
            _ => value,
        };

        let text = |field: &str| {
            source.get(field).and_then(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
        };

        Self {
            key: text("key"),
            name: text("name"),
            last_modified: text("lastModified"),
            thumbnail_url: text("thumbnailUrl"),
            version: text("version"),
            components: source.get("components").cloned().unwrap_or(Value::Null),
            styles: source.get("styles").cloned().unwrap_or(Value::Null),
        }
    }

    /// Number of entries in the opaque `components` map
    pub fn component_count(&self) -> usize {
        self.components.as_object().map_or(0, |map| map.len())
    }
}

fn file_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:file|design)/([a-zA-Z0-9]+)").unwrap())
}

/// File key from a share URL such as `https://www.figma.com/file/AbC123/Title`
pub fn file_key_from_url(url: &str) -> Option<String> {
    file_key_regex()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// A rendered export of one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgExport {
    pub node_id: String,
    pub svg_url: String,
}

/// The external design-file service
pub trait DesignFileClient {
    /// Fetch the raw file JSON
    fn fetch_file(&self, file_key: &str) -> DesignResult<Value>;

    /// Request SVG renders for the given node ids. Nodes the service cannot
    /// render are left out of the result.
    fn export_svg_urls(&self, file_key: &str, node_ids: &[String]) -> DesignResult<Vec<SvgExport>>;
}

/// Everything fetched for one design file
#[derive(Debug, Clone)]
pub struct FetchedDesign {
    pub file_key: String,
    pub data: Value,
    pub metadata: FileMetadata,
    pub svg_exports: Vec<SvgExport>,
}

/// Resolve a share URL, fetch the file and request exports for its frames
/// and components.
pub fn fetch_design<C: DesignFileClient + ?Sized>(
    client: &C,
    url: &str,
) -> DesignResult<FetchedDesign> {
    let file_key =
        file_key_from_url(url).ok_or_else(|| DesignError::InvalidUrl(url.to_string()))?;

    let data = client.fetch_file(&file_key)?;
    let metadata = FileMetadata::from_value(&data);

    let node_ids = match DesignNode::from_value(unwrap_document(&data)) {
        Ok(root) => list_exportable_node_ids(&root),
        Err(error) => {
            warn!(file_key = %file_key, %error, "Design file has no readable document");
            Vec::new()
        }
    };
    debug!(file_key = %file_key, nodes = node_ids.len(), "Requesting SVG exports");

    let svg_exports = if node_ids.is_empty() {
        Vec::new()
    } else {
        client.export_svg_urls(&file_key, &node_ids)?
    };

    Ok(FetchedDesign {
        file_key,
        data,
        metadata,
        svg_exports,
    })
}

/// In-memory design service for tests and offline use
#[derive(Debug, Default)]
pub struct InMemoryDesignFile {
    pub files: HashMap<String, Value>,
    pub exports: HashMap<String, String>,
}

impl InMemoryDesignFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, key: impl Into<String>, data: Value) {
        self.files.insert(key.into(), data);
    }

    pub fn add_export(&mut self, node_id: impl Into<String>, svg_url: impl Into<String>) {
        self.exports.insert(node_id.into(), svg_url.into());
    }
}

impl DesignFileClient for InMemoryDesignFile {
    fn fetch_file(&self, file_key: &str) -> DesignResult<Value> {
        self.files
            .get(file_key)
            .cloned()
            .ok_or_else(|| DesignError::FileNotFound(file_key.to_string()))
    }

    fn export_svg_urls(&self, file_key: &str, node_ids: &[String]) -> DesignResult<Vec<SvgExport>> {
        if !self.files.contains_key(file_key) {
            return Err(DesignError::FileNotFound(file_key.to_string()));
        }

        Ok(node_ids
            .iter()
            .filter_map(|id| {
                self.exports.get(id).map(|url| SvgExport {
                    node_id: id.clone(),
                    svg_url: url.clone(),
                })
            })
            .collect())
    }
}
