use crate::node::DesignNode;

/// Read-only traversal over a design tree
///
/// The default `visit_node` walks the whole tree in pre-order. Override it to
/// act on nodes, and call `walk_node` to keep descending.
pub trait Visitor: Sized {
    fn visit_node(&mut self, node: &DesignNode, depth: usize) {
        walk_node(self, node, depth);
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &DesignNode, depth: usize) {
    for child in &node.children {
        visitor.visit_node(child, depth + 1);
    }
}

/// Collects ids of nodes that can be exported as standalone renders
#[derive(Debug, Default)]
pub struct ExportableIds {
    pub ids: Vec<String>,
}

impl Visitor for ExportableIds {
    fn visit_node(&mut self, node: &DesignNode, depth: usize) {
        if node.kind.is_exportable() {
            self.ids.push(node.id.clone());
        }
        walk_node(self, node, depth);
    }
}

/// Ids of Frame and Component nodes, in pre-order
pub fn list_exportable_node_ids(root: &DesignNode) -> Vec<String> {
    let mut collector = ExportableIds::default();
    collector.visit_node(root, 0);
    collector.ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exportable_ids_are_pre_order() {
        let root = DesignNode::from_value(&json!({
            "id": "0:0",
            "type": "DOCUMENT",
            "children": [
                {
                    "id": "1:0",
                    "type": "FRAME",
                    "children": [
                        { "id": "1:1", "type": "COMPONENT" },
                        { "id": "1:2", "type": "RECTANGLE" }
                    ]
                },
                { "id": "2:0", "type": "COMPONENT" }
            ]
        }))
        .unwrap();

        assert_eq!(list_exportable_node_ids(&root), vec!["1:0", "1:1", "2:0"]);
    }

    #[test]
    fn test_root_itself_is_considered() {
        let root = DesignNode::from_value(&json!({ "id": "9", "type": "FRAME" })).unwrap();
        assert_eq!(list_exportable_node_ids(&root), vec!["9"]);
    }
}
