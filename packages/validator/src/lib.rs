//! Heuristic validators for generated component code.
//!
//! Findings are data: every entry point returns a [`ValidationReport`] and
//! never fails.

pub mod checker;
mod diagnostic;
mod error;
mod markup;
mod properties;
mod stylesheet;
mod typescript;
mod validator;

pub use checker::{CheckerDiagnostic, CheckerOptions, DiagnosticCategory, ScriptChecker, TypeChecker};
pub use diagnostic::{DiagnosticCode, Severity, ValidationError, ValidationSource};
pub use error::CheckerError;
pub use markup::{MarkupDialect, MarkupValidator};
pub use properties::{is_known_property, levenshtein, similar_properties, CSS_PROPERTIES};
pub use stylesheet::StylesheetValidator;
pub use typescript::{category_for_code, suggestion_for_code, TypeScriptValidator};
pub use validator::{
    validate, Language, SourceValidator, ValidationReport, ValidationStats, Validator,
};
