use crate::checker::{CheckerOptions, TypeChecker};
use crate::diagnostic::{Severity, ValidationError};
use crate::markup::MarkupValidator;
use crate::stylesheet::StylesheetValidator;
use crate::typescript::TypeScriptValidator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Instant;
use tracing::debug;

/// A validation pass over one source text
pub trait SourceValidator: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn validate(&self, source: &str) -> Vec<ValidationError>;
}

/// Which validators a source text goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Css,
    Scss,
    TypeScript,
    JavaScript,
    Template,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Css => "css",
            Language::Scss => "scss",
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Template => "template",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "css" => Some(Language::Css),
            "scss" | "sass" => Some(Language::Scss),
            "ts" | "tsx" | "mts" | "cts" => Some(Language::TypeScript),
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "vue" | "svelte" | "html" | "htm" => Some(Language::Template),
            _ => None,
        }
    }

    /// Language of a file path, going by its last extension
    pub fn from_path(path: &str) -> Option<Self> {
        path.rsplit_once('.')
            .and_then(|(_, extension)| Self::from_extension(extension))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(Language::Css),
            "scss" | "sass" => Ok(Language::Scss),
            "typescript" | "ts" | "tsx" => Ok(Language::TypeScript),
            "javascript" | "js" | "jsx" => Ok(Language::JavaScript),
            "template" | "vue" | "svelte" | "html" => Ok(Language::Template),
            other => Err(format!("Unknown language: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStats {
    pub total_errors: usize,
    pub errors_by_category: BTreeMap<String, usize>,
    pub errors_by_severity: BTreeMap<String, usize>,
    pub validation_time_ms: f64,
}

impl ValidationStats {
    fn collect(errors: &[ValidationError], validation_time_ms: f64) -> Self {
        let mut stats = ValidationStats {
            total_errors: errors.len(),
            validation_time_ms,
            ..Default::default()
        };
        for error in errors {
            *stats.errors_by_category.entry(error.category.clone()).or_default() += 1;
            *stats
                .errors_by_severity
                .entry(error.severity.as_str().to_string())
                .or_default() += 1;
        }
        stats
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub stats: ValidationStats,
}

impl ValidationReport {
    pub fn count(&self, severity: Severity) -> usize {
        self.errors.iter().filter(|e| e.severity == severity).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// No error-severity findings
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }
}

/// Holds one instance of each validator and routes sources by language
pub struct Validator {
    stylesheet: StylesheetValidator,
    jsx: MarkupValidator,
    template: MarkupValidator,
    typescript: TypeScriptValidator,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("checker_options", self.typescript.options())
            .finish()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self {
            stylesheet: StylesheetValidator::new(),
            jsx: MarkupValidator::jsx(),
            template: MarkupValidator::html(),
            typescript: TypeScriptValidator::default(),
        }
    }

    /// Use another type checker for TypeScript sources
    pub fn with_checker(mut self, checker: Box<dyn TypeChecker>) -> Self {
        let options = self.typescript.options().clone();
        self.typescript = TypeScriptValidator::new(checker).with_options(options);
        self
    }

    pub fn with_checker_options(mut self, options: CheckerOptions) -> Self {
        self.typescript = std::mem::take(&mut self.typescript).with_options(options);
        self
    }

    fn passes(&self, language: Language) -> Vec<&dyn SourceValidator> {
        match language {
            Language::Css | Language::Scss => vec![&self.stylesheet],
            Language::TypeScript => vec![&self.typescript, &self.jsx],
            Language::JavaScript => vec![&self.jsx],
            Language::Template => vec![&self.template],
        }
    }

    pub fn validate(&self, source: &str, language: Language) -> ValidationReport {
        let started = Instant::now();
        let mut errors = Vec::new();
        for pass in self.passes(language) {
            let found = pass.validate(source);
            debug!(validator = pass.name(), findings = found.len(), "Validator pass complete");
            errors.extend(found);
        }
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        debug!(
            language = %language,
            findings = errors.len(),
            elapsed_ms,
            "Validation complete"
        );
        ValidationReport {
            stats: ValidationStats::collect(&errors, elapsed_ms),
            errors,
        }
    }
}

/// Validate `source` with the built-in validators
pub fn validate(source: &str, language: Language) -> ValidationReport {
    static DEFAULT: OnceLock<Validator> = OnceLock::new();
    DEFAULT.get_or_init(Validator::new).validate(source, language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parsing() {
        assert_eq!("tsx".parse::<Language>(), Ok(Language::TypeScript));
        assert_eq!("Vue".parse::<Language>(), Ok(Language::Template));
        assert!("cobol".parse::<Language>().is_err());
        assert_eq!(Language::from_path("src/styles/Icon.scss"), Some(Language::Scss));
        assert_eq!(Language::from_path("Icon.component.ts"), Some(Language::TypeScript));
        assert_eq!(Language::from_path("README"), None);
    }

    #[test]
    fn test_stats() {
        let report = validate(".a {\n  colr: red;\n  width: big;\n}", Language::Css);
        assert_eq!(report.stats.total_errors, 2);
        assert_eq!(report.stats.errors_by_category.get("property"), Some(&1));
        assert_eq!(report.stats.errors_by_category.get("value"), Some(&1));
        assert_eq!(report.stats.errors_by_severity.get("warning"), Some(&1));
        assert_eq!(report.stats.errors_by_severity.get("error"), Some(&1));
        assert!(report.stats.validation_time_ms >= 0.0);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_typescript_runs_checker_then_markup() {
        let report = validate("const a = (<div><span></div>;\n", Language::TypeScript);
        let sources: Vec<_> = report.errors.iter().map(|e| e.source).collect();
        assert!(sources.len() >= 2);
        assert_eq!(sources.first(), Some(&crate::ValidationSource::TypeScript));
        assert_eq!(sources.last(), Some(&crate::ValidationSource::Jsx));
    }

    #[test]
    fn test_template_allows_html_attributes() {
        let report = validate("<template>\n  <label class=\"a\" for=\"b\"></label>\n</template>", Language::Template);
        assert!(report.errors.is_empty());

        let report = validate("<label class=\"a\"></label>", Language::JavaScript);
        assert_eq!(report.errors.len(), 1);
    }
}
