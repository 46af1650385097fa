use crate::scores;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rough bundle estimate. The gzip size is a fixed ratio of the raw size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEstimate {
    pub size: usize,
    pub gzip_size: usize,
    pub modules: usize,
}

/// Outdated and vulnerable counts need package analysis and stay 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencySummary {
    pub count: usize,
    pub outdated: usize,
    pub vulnerabilities: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeMetrics {
    pub complexity: u32,
    pub maintainability: u32,
    pub testability: u32,
    pub performance: u32,
    pub accessibility: u32,
    pub bundle: BundleEstimate,
    pub dependencies: DependencySummary,
}

const GZIP_RATIO: f64 = 0.3;

pub fn bundle_estimate(code: &str) -> BundleEstimate {
    let size = code.len();
    BundleEstimate {
        size,
        gzip_size: (size as f64 * GZIP_RATIO).round() as usize,
        modules: scores::import_count(code),
    }
}

/// Compute every score for `code` from scratch
pub fn generate_report(code: &str) -> CodeMetrics {
    let bundle = bundle_estimate(code);
    let metrics = CodeMetrics {
        complexity: scores::complexity(code),
        maintainability: scores::maintainability(code),
        testability: scores::testability(code),
        performance: scores::performance(code),
        accessibility: scores::accessibility(code),
        bundle,
        dependencies: DependencySummary {
            count: bundle.modules,
            outdated: 0,
            vulnerabilities: 0,
        },
    };
    debug!(
        complexity = metrics.complexity,
        maintainability = metrics.maintainability,
        size = bundle.size,
        "Computed code metrics"
    );
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_estimate() {
        let code = "import React from 'react';\n";
        let bundle = bundle_estimate(code);
        assert_eq!(bundle.size, 27);
        assert_eq!(bundle.gzip_size, 8);
        assert_eq!(bundle.modules, 1);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(generate_report("const a = 1;")).unwrap();
        assert_eq!(json["bundle"]["gzipSize"], 4);
        assert_eq!(json["dependencies"]["outdated"], 0);
    }
}
