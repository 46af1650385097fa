//! Figma design data: node model, input shapes and SVG extraction

pub mod analysis;
pub mod error;
pub mod extract;
pub mod input;
pub mod node;
pub mod visitor;

pub use analysis::{analyze_design, DesignAnalysis};
pub use error::{DesignError, DesignResult};
pub use extract::{extract, Offset, Primitive, PLACEHOLDER_SVG};
pub use input::{
    fetch_design, file_key_from_url, unwrap_document, DesignFileClient, FetchedDesign,
    FileMetadata, InMemoryDesignFile, SvgExport,
};
pub use node::{BoundingBox, Color, DesignNode, NodeKind, Paint, TextContent, TextStyle};
pub use visitor::{list_exportable_node_ids, walk_node, Visitor};
