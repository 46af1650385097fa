use figcode_metrics::CodeMetrics;
use figcode_validator::{Severity, ValidationReport};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

const VISUAL_WEIGHT: f64 = 0.15;
const CODE_WEIGHT: f64 = 0.25;
const PERFORMANCE_WEIGHT: f64 = 0.15;
const ACCESSIBILITY_WEIGHT: f64 = 0.15;
const MAINTAINABILITY_WEIGHT: f64 = 0.20;
const SECURITY_WEIGHT: f64 = 0.10;

/// Visual score when the design could not be rendered and the placeholder was used
const PLACEHOLDER_VISUAL_SCORE: u32 = 40;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QualityCategories {
    pub visual: u32,
    pub code: u32,
    pub performance: u32,
    pub accessibility: u32,
    pub maintainability: u32,
    pub security: u32,
}

impl QualityCategories {
    pub fn weighted_overall(&self) -> u32 {
        let overall = self.visual as f64 * VISUAL_WEIGHT
            + self.code as f64 * CODE_WEIGHT
            + self.performance as f64 * PERFORMANCE_WEIGHT
            + self.accessibility as f64 * ACCESSIBILITY_WEIGHT
            + self.maintainability as f64 * MAINTAINABILITY_WEIGHT
            + self.security as f64 * SECURITY_WEIGHT;
        overall.round() as u32
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualityReport {
    pub overall: u32,
    pub categories: QualityCategories,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Everything the quality report is derived from
pub struct QualityInputs<'a> {
    pub metrics: &'a CodeMetrics,
    pub component_source: &'a str,
    pub placeholder: bool,
    /// Validation reports keyed by file path
    pub style_reports: Vec<(&'a str, &'a ValidationReport)>,
    pub code_reports: Vec<(&'a str, &'a ValidationReport)>,
    pub design_suggestions: &'a [String],
}

fn unsafe_sinks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"dangerouslySetInnerHTML|innerHTML|outerHTML|\beval\s*\(|new\s+Function\s*\(|v-html|\[innerHTML\]|\{@html").unwrap()
    })
}

/// 100 minus 10 per error and 2 per warning across the reports
fn findings_score(reports: &[(&str, &ValidationReport)]) -> u32 {
    let penalty: usize = reports
        .iter()
        .map(|(_, report)| report.error_count() * 10 + report.warning_count() * 2)
        .sum();
    100u32.saturating_sub(penalty.min(100) as u32)
}

fn security_score(source: &str) -> u32 {
    let sinks = unsafe_sinks().find_iter(source).count().min(5) as u32;
    100 - sinks * 20
}

fn issues(reports: &[(&str, &ValidationReport)]) -> Vec<String> {
    reports
        .iter()
        .flat_map(|(path, report)| {
            report
                .errors
                .iter()
                .filter(|finding| finding.severity == Severity::Error)
                .map(move |finding| {
                    format!("{}:{}:{} {}", path, finding.line, finding.column, finding.message)
                })
        })
        .collect()
}

fn recommendations(categories: &QualityCategories, metrics: &CodeMetrics) -> Vec<String> {
    let mut out = vec!["Add responsive design patterns".to_string()];

    if categories.accessibility < 80 {
        out.push("Implement proper accessibility: label interactive elements and support keyboard input".to_string());
    }
    if categories.performance < 80 {
        out.push("Avoid direct DOM queries and memoize expensive renders".to_string());
    }
    if metrics.complexity > 10 {
        out.push("Reduce branching by splitting the component into smaller parts".to_string());
    }
    if categories.maintainability < 65 {
        out.push("Break long source files into focused modules".to_string());
    }
    if categories.code < 100 || categories.visual < 100 {
        out.push("Review the validation findings in the generated files".to_string());
    }
    if categories.security < 100 {
        out.push("Remove raw HTML injection from the component".to_string());
    }
    out
}

/// Score generated output per category and collect recommendations, merged
/// with the design analysis suggestions
pub fn assess_quality(inputs: &QualityInputs<'_>) -> QualityReport {
    let mut visual = findings_score(&inputs.style_reports);
    if inputs.placeholder {
        visual = visual.min(PLACEHOLDER_VISUAL_SCORE);
    }

    let categories = QualityCategories {
        visual,
        code: findings_score(&inputs.code_reports),
        performance: inputs.metrics.performance,
        accessibility: inputs.metrics.accessibility,
        maintainability: inputs.metrics.maintainability.min(100),
        security: security_score(inputs.component_source),
    };

    let mut recommendations = recommendations(&categories, inputs.metrics);
    for suggestion in inputs.design_suggestions {
        if !recommendations.contains(suggestion) {
            recommendations.push(suggestion.clone());
        }
    }

    let mut issues_found = issues(&inputs.code_reports);
    issues_found.extend(issues(&inputs.style_reports));

    QualityReport {
        overall: categories.weighted_overall(),
        categories,
        issues: issues_found,
        recommendations,
    }
}
