use crate::scores;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Class,
    Function,
}

/// Structural facts about one component source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetrics {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub lines: usize,
    pub complexity: u32,
    /// Imported module specifiers in source order
    pub dependencies: Vec<String>,
    pub props: usize,
    pub hooks: usize,
    pub test_coverage: u32,
}

struct Patterns {
    import_from: Regex,
    props: Regex,
    hooks: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        import_from: Regex::new(r#"import\s+.*from\s+['"]([^'"]+)['"]"#).unwrap(),
        props: Regex::new(r"interface\s+\w+Props|type\s+\w+Props").unwrap(),
        hooks: Regex::new(r"use[A-Z]\w*").unwrap(),
    })
}

pub fn analyze_component(code: &str, name: &str) -> ComponentMetrics {
    let p = patterns();
    ComponentMetrics {
        name: name.to_string(),
        kind: if code.contains("class ") {
            ComponentKind::Class
        } else {
            ComponentKind::Function
        },
        lines: scores::line_count(code),
        complexity: scores::complexity(code),
        dependencies: p
            .import_from
            .captures_iter(code)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect(),
        props: p.props.find_iter(code).count(),
        hooks: p.hooks.find_iter(code).count(),
        test_coverage: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_component() {
        let code = "import React, { useState } from 'react';\nimport styled from \"styled-components\";\n\ninterface CardProps {}\n\nconst Card = () => {\n  const [a] = useState(0);\n  useEffect(() => {}, []);\n  return null;\n};\n";
        let metrics = analyze_component(code, "Card");

        assert_eq!(metrics.kind, ComponentKind::Function);
        assert_eq!(metrics.lines, 11);
        assert_eq!(metrics.dependencies, vec!["react", "styled-components"]);
        assert_eq!(metrics.props, 1);
        assert_eq!(metrics.hooks, 3);
        assert_eq!(metrics.test_coverage, 0);
    }

    #[test]
    fn test_class_component() {
        let metrics = analyze_component("export class Icon {}", "Icon");
        assert_eq!(metrics.kind, ComponentKind::Class);
        assert_eq!(serde_json::to_value(&metrics).unwrap()["type"], "class");
    }
}
