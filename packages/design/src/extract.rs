//! Design tree → SVG fragment.

use crate::error::{DesignError, DesignResult};
use crate::input::unwrap_document;
use crate::node::{child_values, BoundingBox, DesignNode, NodeKind};
use crate::visitor::{walk_node, Visitor};
use serde_json::Value;
use tracing::{debug, info, warn};

pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 300;

/// Baseline approximation for text primitives
const TEXT_BASELINE: f64 = 16.0;

/// Returned whenever the design yields nothing to draw
pub const PLACEHOLDER_SVG: &str = "<svg width=\"400\" height=\"300\" viewBox=\"0 0 400 300\" xmlns=\"http://www.w3.org/2000/svg\">\n      <rect x=\"50\" y=\"50\" width=\"300\" height=\"200\" fill=\"#f0f0f0\" stroke=\"#ccc\" stroke-width=\"2\" rx=\"8\"/>\n      <text x=\"200\" y=\"160\" text-anchor=\"middle\" font-family=\"Arial, sans-serif\" font-size=\"16\" fill=\"#666\">Generated from Figma</text>\n    </svg>";

/// Offset handed down to descendants. Passed through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// A drawable shape
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect(BoundingBox),
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
    },
}

impl Primitive {
    fn from_node(node: &DesignNode, offset: Offset) -> DesignResult<Option<Self>> {
        let needs_box = matches!(
            node.kind,
            NodeKind::Rectangle | NodeKind::Ellipse | NodeKind::Text(_)
        );
        if !needs_box {
            return Ok(None);
        }

        let bbox = node
            .bounding_box
            .ok_or_else(|| DesignError::missing_bounding_box(&node.id))?;

        let primitive = match &node.kind {
            NodeKind::Rectangle => Primitive::Rect(BoundingBox {
                x: bbox.x + offset.x,
                y: bbox.y + offset.y,
                ..bbox
            }),
            NodeKind::Ellipse => Primitive::Ellipse {
                cx: bbox.x + bbox.width / 2.0 + offset.x,
                cy: bbox.y + bbox.height / 2.0 + offset.y,
                rx: bbox.width / 2.0,
                ry: bbox.height / 2.0,
            },
            NodeKind::Text(text) => Primitive::Text {
                x: bbox.x + offset.x,
                y: bbox.y + offset.y + TEXT_BASELINE,
                content: text
                    .characters
                    .as_deref()
                    .filter(|c| !c.is_empty())
                    .unwrap_or("Text")
                    .to_string(),
            },
            _ => return Ok(None),
        };

        Ok(Some(primitive))
    }

    pub fn to_markup(&self) -> String {
        match self {
            Primitive::Rect(b) => format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#f0f0f0\" stroke=\"#ccc\" stroke-width=\"1\"/>",
                b.x, b.y, b.width, b.height
            ),
            Primitive::Ellipse { cx, cy, rx, ry } => format!(
                "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" fill=\"#e0e0e0\" stroke=\"#ccc\" stroke-width=\"1\"/>",
                cx, cy, rx, ry
            ),
            Primitive::Text { x, y, content } => format!(
                "<text x=\"{}\" y=\"{}\" font-family=\"Arial, sans-serif\" font-size=\"14\" fill=\"#333\">{}</text>",
                x,
                y,
                escape_text(content)
            ),
        }
    }
}

/// Escape text content so it stays valid both as SVG and as JSX children
pub fn escape_text(text: &str) -> String {
    html_escape::encode_quoted_attribute(text)
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

/// Collects primitives in pre-order
#[derive(Debug, Default)]
pub struct ShapeCollector {
    offset: Offset,
    pub primitives: Vec<Primitive>,
    pub skipped: usize,
}

impl ShapeCollector {
    pub fn new(offset: Offset) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }
}

impl Visitor for ShapeCollector {
    fn visit_node(&mut self, node: &DesignNode, depth: usize) {
        match Primitive::from_node(node, self.offset) {
            Ok(Some(primitive)) => self.primitives.push(primitive),
            Ok(None) => {}
            Err(error) => {
                self.skipped += 1;
                debug!(node = %node.id, depth, %error, "Skipping node");
            }
        }
        walk_node(self, node, depth);
    }
}

/// Synthesize an SVG fragment from design data.
///
/// Accepts a bare node, `{document}` or `{file: {document}}`. Never fails:
/// unusable input yields [`PLACEHOLDER_SVG`].
pub fn extract(input: &Value) -> String {
    let root = unwrap_document(input);

    if !root.is_object() {
        warn!("Design data is not an object, using placeholder");
        return PLACEHOLDER_SVG.to_string();
    }

    let Some(children) = root.get("children").and_then(Value::as_array) else {
        warn!("Design document has no children, using placeholder");
        return PLACEHOLDER_SVG.to_string();
    };

    let mut collector = ShapeCollector::new(Offset::default());
    for (index, child) in child_values(root).iter().enumerate() {
        match DesignNode::from_value(child) {
            Ok(node) => collector.visit_node(&node, 1),
            Err(error) => warn!(index, %error, "Skipping unreadable top-level node"),
        }
    }

    if collector.primitives.is_empty() {
        warn!(
            top_level = children.len(),
            skipped = collector.skipped,
            "No shapes extracted, using placeholder"
        );
        return PLACEHOLDER_SVG.to_string();
    }

    info!(
        shapes = collector.primitives.len(),
        skipped = collector.skipped,
        "Extracted SVG from design"
    );

    let mut svg = format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">",
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT
    );
    for primitive in &collector.primitives {
        svg.push_str(&primitive.to_markup());
    }
    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_emits_shapes_in_pre_order() {
        let svg = extract(&json!({
            "document": {
                "id": "0:0",
                "type": "DOCUMENT",
                "children": [{
                    "id": "1:0",
                    "type": "FRAME",
                    "absoluteBoundingBox": { "x": 0, "y": 0, "width": 400, "height": 300 },
                    "children": [
                        { "id": "1:1", "type": "RECTANGLE",
                          "absoluteBoundingBox": { "x": 10, "y": 20, "width": 30, "height": 40 } },
                        { "id": "1:2", "type": "ELLIPSE",
                          "absoluteBoundingBox": { "x": 0, "y": 0, "width": 10, "height": 20 } },
                        { "id": "1:3", "type": "TEXT", "characters": "Hi",
                          "absoluteBoundingBox": { "x": 5, "y": 5, "width": 10, "height": 10 } }
                    ]
                }]
            }
        }));

        assert!(svg.starts_with("<svg width=\"400\" height=\"300\""));
        assert!(svg.ends_with("</svg>"));
        let rect = svg.find("<rect x=\"10\" y=\"20\" width=\"30\" height=\"40\"").unwrap();
        let ellipse = svg.find("<ellipse cx=\"5\" cy=\"10\" rx=\"5\" ry=\"10\"").unwrap();
        let text = svg.find("<text x=\"5\" y=\"21\"").unwrap();
        assert!(rect < ellipse && ellipse < text);
        assert!(svg.contains(">Hi</text>"));
    }

    #[test]
    fn test_text_without_characters_falls_back() {
        let svg = extract(&json!({
            "children": [{ "id": "1", "type": "TEXT",
                "absoluteBoundingBox": { "x": 0, "y": 0, "width": 1, "height": 1 } }]
        }));
        assert!(svg.contains(">Text</text>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let svg = extract(&json!({
            "children": [{ "id": "1", "type": "TEXT", "characters": "a < b & {c}",
                "absoluteBoundingBox": { "x": 0, "y": 0, "width": 1, "height": 1 } }]
        }));
        assert!(svg.contains(">a &lt; b &amp; &#123;c&#125;</text>"));
    }

    #[test]
    fn test_node_without_box_is_skipped_but_children_visited() {
        let svg = extract(&json!({
            "children": [{
                "id": "1", "type": "RECTANGLE",
                "children": [{ "id": "2", "type": "RECTANGLE",
                    "absoluteBoundingBox": { "x": 1, "y": 2, "width": 3, "height": 4 } }]
            }]
        }));
        assert_eq!(svg.matches("<rect").count(), 1);
        assert!(svg.contains("<rect x=\"1\" y=\"2\""));
    }

    #[test]
    fn test_fractional_coordinates_keep_precision() {
        let svg = extract(&json!({
            "children": [{ "id": "1", "type": "RECTANGLE",
                "absoluteBoundingBox": { "x": 1.5, "y": 0, "width": 2.25, "height": 1 } }]
        }));
        assert!(svg.contains("x=\"1.5\""));
        assert!(svg.contains("width=\"2.25\""));
    }
}
