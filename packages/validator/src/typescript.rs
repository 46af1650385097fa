use crate::checker::{CheckerDiagnostic, CheckerOptions, DiagnosticCategory, ScriptChecker, TypeChecker};
use crate::diagnostic::{DiagnosticCode, Severity, ValidationError, ValidationSource};
use crate::validator::SourceValidator;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Diagnostics that only say the single-file sandbox cannot see the project
const ENVIRONMENTAL_CODES: [u32; 4] = [2307, 2304, 2339, 2322];
const ENVIRONMENTAL_MESSAGES: [&str; 3] = [
    "Cannot find module",
    "Cannot find name",
    "does not exist on type",
];

pub fn category_for_code(code: u32) -> &'static str {
    match code {
        1002 | 1005 | 1009 | 1127 | 1128 | 1160 | 1161 => "syntax",
        2304 | 2451 => "reference",
        2307 => "module",
        2322 | 2741 | 7006 | 7031 => "type",
        2339 => "property",
        2345 => "argument",
        2554 => "parameter",
        _ => "general",
    }
}

pub fn suggestion_for_code(code: u32) -> &'static str {
    match code {
        1002 => "Close the string literal with a matching quote",
        1005 => "Check for missing brackets, parentheses, or semicolons",
        1010 => "Close the block comment with */",
        1127 => "Remove or escape the invalid character",
        1128 => "Remove the stray closing bracket or add the matching opening bracket",
        1160 => "Close the template literal with a backtick",
        2304 => "Import the missing identifier or check spelling",
        2307 => "Install the missing package or check the import path",
        2322 => "Check the type compatibility between assigned values",
        2339 => "Verify the property exists on the object type",
        2345 => "Check the number and types of function arguments",
        2451 => "Rename one of the declarations or remove the duplicate",
        7006 => "Add explicit type annotations",
        7027 => "Remove the statements after the return",
        7031 => "Add explicit return type annotation",
        _ => "Check TypeScript documentation for this error",
    }
}

fn is_environmental(diagnostic: &CheckerDiagnostic) -> bool {
    ENVIRONMENTAL_CODES.contains(&diagnostic.code)
        && ENVIRONMENTAL_MESSAGES
            .iter()
            .any(|text| diagnostic.message.contains(text))
}

/// Byte offset → 1-based line and column
struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    fn position(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|start| *start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self
            .source
            .get(line_start..offset)
            .map_or(offset - line_start, |text| text.chars().count());
        (line, column + 1)
    }
}

/// Runs a [`TypeChecker`] and maps what it reports into findings
pub struct TypeScriptValidator {
    checker: Box<dyn TypeChecker>,
    options: CheckerOptions,
}

impl Default for TypeScriptValidator {
    fn default() -> Self {
        Self::new(Box::new(ScriptChecker::new()))
    }
}

impl TypeScriptValidator {
    pub fn new(checker: Box<dyn TypeChecker>) -> Self {
        Self {
            checker,
            options: CheckerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CheckerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CheckerOptions {
        &self.options
    }

    fn failure() -> ValidationError {
        ValidationError::warning(
            ValidationSource::TypeScript,
            "system",
            "TypeScript validation failed",
            1,
            1,
        )
        .with_suggestion("Check the checker configuration and try again")
    }
}

impl SourceValidator for TypeScriptValidator {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn description(&self) -> &'static str {
        "Runs a type checker over the source as a single no-emit file"
    }

    fn validate(&self, source: &str) -> Vec<ValidationError> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.checker.check(source, &self.options)
        }));

        let diagnostics = match outcome {
            Ok(Ok(diagnostics)) => diagnostics,
            Ok(Err(err)) => {
                warn!(checker = self.checker.name(), error = %err, "Type checker failed");
                return vec![Self::failure()];
            }
            Err(_) => {
                warn!(checker = self.checker.name(), "Type checker panicked");
                return vec![Self::failure()];
            }
        };

        let index = LineIndex::new(source);
        let total = diagnostics.len();
        let errors: Vec<ValidationError> = diagnostics
            .into_iter()
            .filter(|diagnostic| !is_environmental(diagnostic))
            .map(|diagnostic| {
                let (line, column) = index.position(diagnostic.start);
                let severity = match diagnostic.category {
                    DiagnosticCategory::Error => Severity::Error,
                    _ => Severity::Warning,
                };
                ValidationError::new(
                    severity,
                    ValidationSource::TypeScript,
                    category_for_code(diagnostic.code),
                    diagnostic.message,
                    line,
                    column,
                )
                .with_suggestion(suggestion_for_code(diagnostic.code))
                .with_code(DiagnosticCode::Number(diagnostic.code))
            })
            .collect();

        debug!(
            checker = self.checker.name(),
            reported = total,
            kept = errors.len(),
            "Type check complete"
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckerError;

    struct FixedChecker(Vec<CheckerDiagnostic>);

    impl TypeChecker for FixedChecker {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn check(&self, _: &str, _: &CheckerOptions) -> Result<Vec<CheckerDiagnostic>, CheckerError> {
            Ok(self.0.clone())
        }
    }

    struct FailingChecker;

    impl TypeChecker for FailingChecker {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn check(&self, _: &str, _: &CheckerOptions) -> Result<Vec<CheckerDiagnostic>, CheckerError> {
            Err(CheckerError::Internal("boom".to_string()))
        }
    }

    struct PanickingChecker;

    impl TypeChecker for PanickingChecker {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn check(&self, _: &str, _: &CheckerOptions) -> Result<Vec<CheckerDiagnostic>, CheckerError> {
            panic!("checker crashed")
        }
    }

    #[test]
    fn test_filters_environmental_diagnostics() {
        let checker = FixedChecker(vec![
            CheckerDiagnostic::error(0, 1, 2307, "Cannot find module 'react' or its corresponding type declarations."),
            CheckerDiagnostic::error(0, 1, 2304, "Cannot find name 'styled'."),
            CheckerDiagnostic::error(0, 1, 2339, "Property 'x' does not exist on type 'Y'."),
            CheckerDiagnostic::error(0, 1, 2322, "Type 'number' is not assignable to type 'string'."),
        ]);
        let errors = TypeScriptValidator::new(Box::new(checker)).validate("x");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].category, "type");
        assert_eq!(errors[0].code, Some(DiagnosticCode::Number(2322)));
    }

    #[test]
    fn test_positions_and_tables() {
        let source = "let a = 1;\nlet é = 'x;\n";
        let errors = TypeScriptValidator::default().validate(source);
        assert_eq!(errors.len(), 1);
        assert_eq!((errors[0].line, errors[0].column), (2, 9));
        assert_eq!(errors[0].category, "syntax");
        assert_eq!(
            errors[0].suggestion.as_deref(),
            Some("Close the string literal with a matching quote")
        );
    }

    #[test]
    fn test_checker_failure_becomes_one_warning() {
        for checker in [
            Box::new(FailingChecker) as Box<dyn TypeChecker>,
            Box::new(PanickingChecker),
        ] {
            let errors = TypeScriptValidator::new(checker).validate("x");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].severity, Severity::Warning);
            assert_eq!(errors[0].category, "system");
            assert_eq!(errors[0].message, "TypeScript validation failed");
        }
    }

    #[test]
    fn test_non_error_categories_are_warnings() {
        let checker = FixedChecker(vec![CheckerDiagnostic {
            start: 0,
            length: 0,
            code: 6133,
            message: "'a' is declared but its value is never read.".to_string(),
            category: DiagnosticCategory::Suggestion,
        }]);
        let errors = TypeScriptValidator::new(Box::new(checker)).validate("");
        assert_eq!(errors[0].severity, Severity::Warning);
        assert_eq!(errors[0].category, "general");
        assert_eq!((errors[0].line, errors[0].column), (1, 1));
    }
}
