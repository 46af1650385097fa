use super::lexer::{lex, Token};
use super::{CheckerDiagnostic, CheckerOptions, DiagnosticCategory, TypeChecker};
use crate::error::CheckerError;
use std::collections::HashMap;
use tracing::trace;

/// Single-file checker that needs no compiler installation.
///
/// Reports unterminated literals, invalid characters, unbalanced brackets,
/// redeclared block-scoped bindings, unresolvable imports and statements
/// after a `return`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptChecker;

impl ScriptChecker {
    pub fn new() -> Self {
        Self
    }
}

impl TypeChecker for ScriptChecker {
    fn name(&self) -> &'static str {
        "script"
    }

    fn check(
        &self,
        source: &str,
        options: &CheckerOptions,
    ) -> Result<Vec<CheckerDiagnostic>, CheckerError> {
        if !options.is_script_file() {
            return Err(CheckerError::UnsupportedFile(options.file_name.clone()));
        }

        let mut pass = CheckPass::new(options.strict);
        for result in lex(source, options.allows_jsx()) {
            match result {
                Ok(spanned) => {
                    let length = spanned.span.end - spanned.span.start;
                    pass.token(spanned.token, spanned.span.start, length, source.len());
                }
                Err(err) => pass.push(CheckerDiagnostic::error(
                    err.span.start,
                    err.span.end - err.span.start,
                    1127,
                    err.message,
                )),
            }
        }
        Ok(pass.finish(source.len()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    Block,
    Var,
}

struct OpenBracket {
    closer: char,
    offset: usize,
}

struct CheckPass<'src> {
    strict: bool,
    diagnostics: Vec<CheckerDiagnostic>,
    brackets: Vec<OpenBracket>,
    /// Declared names per bracket level; index 0 is the file scope
    scopes: Vec<HashMap<&'src str, Binding>>,
    prev: Option<Token<'src>>,
    prev2: Option<Token<'src>>,
    expect_binding: Option<Binding>,
    /// Depth of a `return` whose statement has not ended yet
    open_return: Option<usize>,
    /// Depth at which a completed `return` makes the next statement dead
    after_return: Option<usize>,
}

impl<'src> CheckPass<'src> {
    fn new(strict: bool) -> Self {
        Self {
            strict,
            diagnostics: Vec::new(),
            brackets: Vec::new(),
            scopes: vec![HashMap::new()],
            prev: None,
            prev2: None,
            expect_binding: None,
            open_return: None,
            after_return: None,
        }
    }

    fn push(&mut self, diagnostic: CheckerDiagnostic) {
        trace!(code = diagnostic.code, start = diagnostic.start, "Checker diagnostic");
        self.diagnostics.push(diagnostic);
    }

    fn depth(&self) -> usize {
        self.brackets.len()
    }

    fn token(&mut self, token: Token<'src>, start: usize, length: usize, source_len: usize) {
        if token.is_comment() {
            if token == Token::UnterminatedComment {
                self.push(CheckerDiagnostic::error(source_len, 0, 1010, "'*/' expected."));
            }
            return;
        }
        match token {
            Token::UnterminatedStr => {
                self.push(CheckerDiagnostic::error(start, length, 1002, "Unterminated string literal."))
            }
            Token::UnterminatedTemplate => self.push(CheckerDiagnostic::error(
                start,
                length,
                1160,
                "Unterminated template literal.",
            )),
            _ => {}
        }

        self.check_unreachable(&token, start, length);
        self.check_binding(&token, start, length);
        self.check_import(&token, start, length);

        if let Some(closer) = token.closer() {
            self.brackets.push(OpenBracket {
                closer,
                offset: start,
            });
            self.scopes.push(HashMap::new());
        } else if let Some(closer) = token.as_closer() {
            self.close(closer, start);
        }

        match &token {
            Token::Return if self.starts_statement() => self.open_return = Some(self.depth()),
            Token::Semi => {
                if self.open_return == Some(self.depth()) {
                    self.after_return = self.open_return.take();
                }
            }
            _ => {}
        }
        if self.open_return.is_some_and(|d| d > self.depth()) {
            self.open_return = None;
        }

        self.prev2 = self.prev.replace(token);
    }

    /// A `return` is unconditional only at the start of a statement.
    fn starts_statement(&self) -> bool {
        matches!(
            self.prev,
            None | Some(Token::Semi) | Some(Token::LBrace) | Some(Token::RBrace)
        ) || self.prev == Some(Token::Op(":"))
    }

    fn check_unreachable(&mut self, token: &Token<'src>, start: usize, length: usize) {
        let Some(depth) = self.after_return else {
            return;
        };
        if depth != self.depth() {
            if self.depth() < depth {
                self.after_return = None;
            }
            return;
        }
        self.after_return = None;
        if matches!(
            token,
            Token::RBrace | Token::Case | Token::Default | Token::Function | Token::Semi
        ) {
            return;
        }
        let category = if self.strict {
            DiagnosticCategory::Error
        } else {
            DiagnosticCategory::Warning
        };
        self.push(CheckerDiagnostic {
            start,
            length,
            code: 7027,
            message: "Unreachable code detected.".to_string(),
            category,
        });
    }

    fn check_binding(&mut self, token: &Token<'src>, start: usize, length: usize) {
        let Some(binding) = self.expect_binding.take() else {
            self.expect_binding = match token {
                Token::Let | Token::Const => Some(Binding::Block),
                Token::Var => Some(Binding::Var),
                _ => None,
            };
            return;
        };
        let Token::Ident(name) = token else {
            return;
        };
        let Some(scope) = self.scopes.last_mut() else {
            return;
        };
        // `var` may repeat a `var`; any pairing with `let`/`const` conflicts
        let conflict = match scope.get(name) {
            Some(&existing) => existing == Binding::Block || binding == Binding::Block,
            None => {
                scope.insert(*name, binding);
                false
            }
        };
        if conflict {
            self.push(CheckerDiagnostic::error(
                start,
                length,
                2451,
                format!("Cannot redeclare block-scoped variable '{}'.", name),
            ));
        }
    }

    fn check_import(&mut self, token: &Token<'src>, start: usize, length: usize) {
        let &Token::Str(literal) = token else {
            return;
        };
        let is_specifier = matches!(self.prev, Some(Token::From) | Some(Token::Import))
            || (self.prev == Some(Token::LParen) && self.prev2 == Some(Token::Import));
        if is_specifier {
            let specifier = &literal[1..literal.len() - 1];
            self.push(CheckerDiagnostic::error(
                start,
                length,
                2307,
                format!(
                    "Cannot find module '{}' or its corresponding type declarations.",
                    specifier
                ),
            ));
        }
    }

    fn close(&mut self, closer: char, offset: usize) {
        match self.brackets.last() {
            None => self.push(CheckerDiagnostic::error(
                offset,
                1,
                1128,
                "Declaration or statement expected.",
            )),
            Some(open) if open.closer == closer => {
                self.brackets.pop();
                self.scopes.pop();
            }
            Some(open) => {
                let expected = open.closer;
                self.push(CheckerDiagnostic::error(
                    offset,
                    1,
                    1005,
                    format!("'{}' expected.", expected),
                ));
                // Resynchronise on a matching opener further out, otherwise
                // let the closer end the innermost bracket.
                match self.brackets.iter().rposition(|b| b.closer == closer) {
                    Some(index) => {
                        self.brackets.truncate(index);
                        self.scopes.truncate(index + 1);
                    }
                    None => {
                        self.brackets.pop();
                        self.scopes.pop();
                    }
                }
            }
        }
    }

    fn finish(mut self, source_len: usize) -> Vec<CheckerDiagnostic> {
        while let Some(open) = self.brackets.pop() {
            trace!(offset = open.offset, "Bracket left open");
            self.diagnostics.push(CheckerDiagnostic::error(
                source_len,
                0,
                1005,
                format!("'{}' expected.", open.closer),
            ));
        }
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(source: &str) -> Vec<CheckerDiagnostic> {
        ScriptChecker::new()
            .check(source, &CheckerOptions::default())
            .expect("checker runs")
    }

    fn codes(source: &str) -> Vec<u32> {
        check(source).iter().map(|d| d.code).collect()
    }

    #[test]
    fn test_clean_component() {
        let source = "const Icon = ({ className = 'icon', ...props }) => {\n  return (\n    <svg className={className} {...props}><rect/></svg>\n  );\n};\n\nexport default Icon;\n";
        assert!(check(source).is_empty(), "{:?}", check(source));
    }

    #[test]
    fn test_unterminated_literals() {
        assert_eq!(codes("const a = 'open;\n"), vec![1002]);
        assert_eq!(codes("const a = `open;\n"), vec![1160]);
        assert_eq!(codes("const a = 1; /* open"), vec![1010]);
    }

    #[test]
    fn test_invalid_character() {
        let diagnostics = check("const a = 1 \\ 2;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, 1127);
        assert_eq!(diagnostics[0].start, 12);
    }

    #[test]
    fn test_brackets() {
        let diagnostics = check("function f() {\n  g(1];\n}");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, 1005);
        assert_eq!(diagnostics[0].message, "')' expected.");

        let diagnostics = check("f();\n}");
        assert_eq!(diagnostics[0].code, 1128);

        let diagnostics = check("function f() {\n  if (x) {\n");
        assert_eq!(codes("function f() {\n  if (x) {\n"), vec![1005, 1005]);
        assert!(diagnostics.iter().all(|d| d.message == "'}' expected."));
    }

    #[test]
    fn test_redeclared_binding() {
        let diagnostics = check("let a = 1;\nconst a = 2;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, 2451);
        assert_eq!(diagnostics[0].message, "Cannot redeclare block-scoped variable 'a'.");

        assert_eq!(codes("var a = 1;\nlet a = 2;"), vec![2451]);
        assert!(check("var a = 1;\nvar a = 2;").is_empty());

        assert!(check("let a = 1;\n{ let a = 2; }\nfor (let i = 0; i < 1; i++) {}\nfor (let i = 0; i < 1; i++) {}").is_empty());
    }

    #[test]
    fn test_imports_never_resolve() {
        let diagnostics = check("import React from 'react';\nimport './styles.css';\nconst m = import('lazy');");
        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.iter().all(|d| d.code == 2307));
        assert!(diagnostics[0].message.starts_with("Cannot find module 'react'"));
    }

    #[test]
    fn test_unreachable_after_return() {
        let diagnostics = check("function f() {\n  return 1;\n  g();\n}");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, 7027);
        assert_eq!(diagnostics[0].category, DiagnosticCategory::Warning);

        assert!(check("function f(x) {\n  if (x) return 1;\n  return 2;\n}").is_empty());
        assert!(check("switch (x) {\n  case 1: return 1;\n  default: return 2;\n}").is_empty());

        let strict = CheckerOptions {
            strict: true,
            ..CheckerOptions::default()
        };
        let diagnostics = ScriptChecker::new()
            .check("function f() { return; g(); }", &strict)
            .unwrap();
        assert_eq!(diagnostics[0].category, DiagnosticCategory::Error);
    }

    #[test]
    fn test_unsupported_file() {
        let options = CheckerOptions::default().with_file_name("styles.css");
        assert_eq!(
            ScriptChecker::new().check("a {}", &options),
            Err(CheckerError::UnsupportedFile("styles.css".to_string()))
        );
    }

    #[test]
    fn test_jsx_text_is_not_a_literal() {
        assert!(check("const t = <p>Don't</p>;\n").is_empty());
        assert!(check("const t = (\n  <div title=\"x\">\n    It's `ok` {n > 1 ? 'many' : 'one'}\n  </div>\n);\n").is_empty());

        let plain = CheckerOptions::default().with_file_name("component.ts");
        let diagnostics = ScriptChecker::new()
            .check("const t = <p>Don't</p>;\n", &plain)
            .unwrap();
        assert_eq!(diagnostics[0].code, 1002);
    }
}
