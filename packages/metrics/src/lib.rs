//! Heuristic quality scores for component source text.
//!
//! Nothing is cached; every call recomputes from the text it is given.

mod component;
mod report;
mod scores;

pub use component::{analyze_component, ComponentKind, ComponentMetrics};
pub use report::{bundle_estimate, generate_report, BundleEstimate, CodeMetrics, DependencySummary};
pub use scores::{
    accessibility, comment_count, complexity, import_count, line_count, maintainability,
    performance, testability, MAX_COMPLEXITY,
};
