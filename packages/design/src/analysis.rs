use crate::node::{DesignNode, NodeKind};
use crate::visitor::{walk_node, Visitor};
use serde::Serialize;

/// Layer nesting beyond which a flatter structure is recommended
const DEEP_NESTING: usize = 8;

/// Distinct fill colours beyond which theme tokens are recommended
const LARGE_PALETTE: usize = 6;

/// Advisory summary of a design tree
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignAnalysis {
    pub node_count: usize,
    pub max_depth: usize,
    pub component_names: Vec<String>,
    pub text_nodes: usize,
    pub shape_nodes: usize,
    /// Distinct solid fill colours in first-seen order
    pub palette: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Visitor for DesignAnalysis {
    fn visit_node(&mut self, node: &DesignNode, depth: usize) {
        self.node_count += 1;
        self.max_depth = self.max_depth.max(depth);

        match &node.kind {
            NodeKind::Frame | NodeKind::Component if !node.name.is_empty() => {
                self.component_names.push(node.name.clone());
            }
            NodeKind::Text(_) => self.text_nodes += 1,
            NodeKind::Rectangle | NodeKind::Ellipse | NodeKind::Vector => self.shape_nodes += 1,
            _ => {}
        }

        if let Some(color) = node.solid_fill() {
            let hex = color.to_hex();
            if !self.palette.contains(&hex) {
                self.palette.push(hex);
            }
        }

        walk_node(self, node, depth);
    }
}

/// Walk the tree and derive suggestions for the generated component
pub fn analyze_design(root: &DesignNode) -> DesignAnalysis {
    let mut analysis = DesignAnalysis::default();
    analysis.visit_node(root, 0);

    analysis.suggestions = vec![
        "Consider adding responsive design".to_string(),
        "Implement proper accessibility".to_string(),
    ];
    if analysis.text_nodes == 0 {
        analysis
            .suggestions
            .push("Add a text label or aria-label so the graphic has an accessible name".to_string());
    }
    if analysis.component_names.is_empty() {
        analysis
            .suggestions
            .push("Group reusable layers into Figma components".to_string());
    }
    if analysis.max_depth > DEEP_NESTING {
        analysis.suggestions.push(format!(
            "Flatten layer nesting (depth {}) to simplify the generated markup",
            analysis.max_depth
        ));
    }

    if analysis.palette.len() > LARGE_PALETTE {
        analysis.suggestions.push(format!(
            "Move the {} fill colours into theme tokens",
            analysis.palette.len()
        ));
    }

    analysis
}
