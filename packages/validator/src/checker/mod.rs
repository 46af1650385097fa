//! Type-checker interface and the built-in single-file script checker.

mod lexer;
mod script;

pub use lexer::{lex, LexError, ScriptLexer, SpannedToken, Token, TokenSpan};
pub use script::ScriptChecker;

use crate::error::CheckerError;

/// Severity as reported by a checker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCategory {
    Error,
    Warning,
    Suggestion,
    Message,
}

/// One raw checker diagnostic, positioned by byte offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerDiagnostic {
    pub start: usize,
    pub length: usize,
    pub code: u32,
    pub message: String,
    pub category: DiagnosticCategory,
}

impl CheckerDiagnostic {
    pub fn error(start: usize, length: usize, code: u32, message: impl Into<String>) -> Self {
        Self {
            start,
            length,
            code,
            message: message.into(),
            category: DiagnosticCategory::Error,
        }
    }
}

/// Compilation settings for a single-file, no-emit check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerOptions {
    pub file_name: String,
    pub target: String,
    pub module: String,
    pub jsx: String,
    pub module_resolution: String,
    pub strict: bool,
    pub skip_lib_check: bool,
    pub allow_js: bool,
    pub no_emit: bool,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            file_name: "temp.tsx".to_string(),
            target: "ES2020".to_string(),
            module: "ESNext".to_string(),
            jsx: "react-jsx".to_string(),
            module_resolution: "node".to_string(),
            strict: false,
            skip_lib_check: true,
            allow_js: true,
            no_emit: true,
        }
    }
}

impl CheckerOptions {
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    fn extension(&self) -> &str {
        self.file_name.rsplit_once('.').map_or("", |(_, ext)| ext)
    }

    /// Files whose sources may contain JSX elements
    pub fn allows_jsx(&self) -> bool {
        matches!(self.extension(), "tsx" | "jsx" | "js")
    }

    pub fn is_script_file(&self) -> bool {
        match self.extension() {
            "ts" | "tsx" | "mts" | "cts" => true,
            "js" | "jsx" | "mjs" | "cjs" => self.allow_js,
            _ => false,
        }
    }
}

/// An embeddable checker run over one in-memory file
pub trait TypeChecker: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(
        &self,
        source: &str,
        options: &CheckerOptions,
    ) -> Result<Vec<CheckerDiagnostic>, CheckerError>;
}
