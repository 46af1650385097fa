//! Typed view over the Figma node graph.
//!
//! Figma hands us loosely shaped JSON. Nodes are converted one at a time so a
//! child that cannot be read is dropped without taking its siblings with it.

use crate::error::{DesignError, DesignResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Absolute position and size of a node on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// RGBA colour with channels in the 0..=1 range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Color {
    /// CSS hex notation, alpha dropped
    pub fn to_hex(&self) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub position: f64,
    pub color: Color,
}

/// Fill or stroke paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid {
        color: Color,
        #[serde(default)]
        opacity: Option<f64>,
    },
    GradientLinear {
        #[serde(default, rename = "gradientStops")]
        gradient_stops: Vec<GradientStop>,
    },
    GradientRadial {
        #[serde(default, rename = "gradientStops")]
        gradient_stops: Vec<GradientStop>,
    },
    GradientAngular {
        #[serde(default, rename = "gradientStops")]
        gradient_stops: Vec<GradientStop>,
    },
    GradientDiamond {
        #[serde(default, rename = "gradientStops")]
        gradient_stops: Vec<GradientStop>,
    },
    Image {
        #[serde(default, rename = "imageRef")]
        image_ref: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

/// Typography of a text node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default)]
    pub font_family: String,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub font_weight: Option<f64>,
}

/// Data that only text nodes carry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextContent {
    pub characters: Option<String>,
    pub style: Option<TextStyle>,
}

/// Node type. Variant-specific data lives on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Document,
    Canvas,
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Rectangle,
    Ellipse,
    Vector,
    Text(TextContent),
    Other(String),
}

impl NodeKind {
    fn from_type(node_type: &str, text: TextContent) -> Self {
        match node_type {
            "DOCUMENT" => NodeKind::Document,
            "CANVAS" => NodeKind::Canvas,
            "FRAME" => NodeKind::Frame,
            "GROUP" => NodeKind::Group,
            "COMPONENT" => NodeKind::Component,
            "COMPONENT_SET" => NodeKind::ComponentSet,
            "INSTANCE" => NodeKind::Instance,
            "RECTANGLE" => NodeKind::Rectangle,
            "ELLIPSE" => NodeKind::Ellipse,
            "VECTOR" => NodeKind::Vector,
            "TEXT" => NodeKind::Text(text),
            other => NodeKind::Other(other.to_string()),
        }
    }

    /// Frames and components are the nodes Figma can render as standalone exports
    pub fn is_exportable(&self) -> bool {
        matches!(self, NodeKind::Frame | NodeKind::Component)
    }
}

/// One node of the design tree. Children are owned; there are no parent links.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub bounding_box: Option<BoundingBox>,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub children: Vec<DesignNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    node_type: String,
    #[serde(default)]
    characters: Option<String>,
}

impl DesignNode {
    /// Build a node (and its subtree) from Figma JSON
    pub fn from_value(value: &Value) -> DesignResult<Self> {
        if !value.is_object() {
            return Err(DesignError::NotAnObject);
        }

        let raw = RawNode::deserialize(value)?;

        let text = TextContent {
            characters: raw.characters,
            style: value
                .get("style")
                .and_then(|style| TextStyle::deserialize(style).ok()),
        };

        let bounding_box = value
            .get("absoluteBoundingBox")
            .and_then(|bbox| BoundingBox::deserialize(bbox).ok());

        let mut children = Vec::new();
        for (index, child) in child_values(value).iter().enumerate() {
            match DesignNode::from_value(child) {
                Ok(node) => children.push(node),
                Err(error) => {
                    warn!(parent = %raw.id, index, %error, "Skipping unreadable design node");
                }
            }
        }

        Ok(Self {
            id: raw.id,
            name: raw.name,
            kind: NodeKind::from_type(&raw.node_type, text),
            bounding_box,
            fills: paints(value.get("fills")),
            strokes: paints(value.get("strokes")),
            children,
        })
    }

    /// Text content for text nodes
    pub fn text(&self) -> Option<&TextContent> {
        match &self.kind {
            NodeKind::Text(content) => Some(content),
            _ => None,
        }
    }

    /// First solid fill colour, if any
    pub fn solid_fill(&self) -> Option<Color> {
        self.fills.iter().find_map(|paint| match paint {
            Paint::Solid { color, .. } => Some(*color),
            _ => None,
        })
    }
}

/// `children` of a raw node, empty when missing or not an array
pub(crate) fn child_values(value: &Value) -> &[Value] {
    value
        .get("children")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn paints(value: Option<&Value>) -> Vec<Paint> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| Paint::deserialize(item).ok())
                .collect()
        })
        .unwrap_or_default()
}
