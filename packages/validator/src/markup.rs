//! Tag balance for JSX and HTML-like templates.

use crate::diagnostic::{ValidationError, ValidationSource};
use crate::validator::SourceValidator;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Attribute spelling rules differ between JSX and HTML templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupDialect {
    Jsx,
    Html,
}

#[derive(Debug, Clone, Copy)]
pub struct MarkupValidator {
    dialect: MarkupDialect,
}

impl MarkupValidator {
    pub fn new(dialect: MarkupDialect) -> Self {
        Self { dialect }
    }

    pub fn jsx() -> Self {
        Self::new(MarkupDialect::Jsx)
    }

    pub fn html() -> Self {
        Self::new(MarkupDialect::Html)
    }

    pub fn dialect(&self) -> MarkupDialect {
        self.dialect
    }
}

struct OpenTag {
    name: String,
    line: usize,
    column: usize,
    seq: usize,
}

/// A closer that did not match the innermost open tag
struct StrayCloser {
    name: String,
    seq: usize,
}

fn attribute_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?:^|[^A-Za-z0-9_$:.-])(class|for)=").unwrap())
}

fn is_tag_start(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

fn is_tag_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$' || ch == '.'
}

/// Whether what follows a tag name can continue an opening tag. Tells
/// `n <limit)` in a comparison apart from `<limit>`.
fn continues_as_tag(chars: &[char], name_end: usize) -> bool {
    match chars[name_end..].iter().find(|ch| !ch.is_whitespace()) {
        None => true,
        Some(&ch) => {
            ch.is_alphabetic()
                || matches!(
                    ch,
                    '>' | '/' | '{' | '.' | '-' | ':' | '_' | '$' | '@' | '#' | '*' | '(' | '['
                )
        }
    }
}

/// Whether the opener whose name ends at `from` closes itself with `/>`
/// before the end of the line. Braced expressions and quoted strings are
/// skipped.
fn is_self_closed(chars: &[char], from: usize) -> bool {
    let mut braces = 0usize;
    let mut quote: Option<char> = None;
    let mut i = from;
    while i < chars.len() {
        let ch = chars[i];
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
        } else {
            match ch {
                '"' | '\'' | '`' => quote = Some(ch),
                '{' => braces += 1,
                '}' => braces = braces.saturating_sub(1),
                '>' if braces == 0 => return i > 0 && chars[i - 1] == '/',
                _ => {}
            }
        }
        i += 1;
    }
    false
}

impl SourceValidator for MarkupValidator {
    fn name(&self) -> &'static str {
        match self.dialect {
            MarkupDialect::Jsx => "jsx-markup",
            MarkupDialect::Html => "template-markup",
        }
    }

    fn description(&self) -> &'static str {
        "Checks that opening and closing tags balance"
    }

    fn validate(&self, source: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut stack: Vec<OpenTag> = Vec::new();
        let mut strays: Vec<StrayCloser> = Vec::new();
        let mut seq = 0usize;

        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            let chars: Vec<char> = line.chars().collect();

            let mut i = 0;
            while i < chars.len() {
                if chars[i] != '<' {
                    i += 1;
                    continue;
                }
                let column = i + 1;
                let closing = chars.get(i + 1) == Some(&'/');
                let name_start = if closing { i + 2 } else { i + 1 };
                if !chars.get(name_start).copied().is_some_and(is_tag_start) {
                    i += 1;
                    continue;
                }
                let mut name_end = name_start;
                while name_end < chars.len() && is_tag_char(chars[name_end]) {
                    name_end += 1;
                }
                let name: String = chars[name_start..name_end].iter().collect();
                seq += 1;

                if closing {
                    match stack.pop() {
                        None => errors.push(
                            ValidationError::error(
                                ValidationSource::Jsx,
                                "syntax",
                                format!("Unexpected closing tag: {}", name),
                                line_no,
                                column,
                            )
                            .with_suggestion(
                                "Remove the extra closing tag or add a matching opening tag",
                            ),
                        ),
                        Some(open) if open.name != name => {
                            errors.push(
                                ValidationError::error(
                                    ValidationSource::Jsx,
                                    "syntax",
                                    format!(
                                        "Mismatched tags: expected {}, found {}",
                                        open.name, name
                                    ),
                                    line_no,
                                    column,
                                )
                                .with_suggestion(format!(
                                    "Change to </{}> or fix the opening tag",
                                    open.name
                                )),
                            );
                            strays.push(StrayCloser { name, seq });
                        }
                        Some(_) => {}
                    }
                } else {
                    let preceded_by_identifier = i > 0 && is_identifier_char(chars[i - 1]);
                    if !preceded_by_identifier
                        && continues_as_tag(&chars, name_end)
                        && !is_self_closed(&chars, name_end)
                    {
                        stack.push(OpenTag {
                            name,
                            line: line_no,
                            column,
                            seq,
                        });
                    }
                }
                i = name_end;
            }

            if self.dialect == MarkupDialect::Jsx {
                check_attributes(line, line_no, &mut errors);
            }
        }

        // A leftover opener already named by a mismatched closer after it
        // was reported with that mismatch.
        for open in stack {
            if let Some(pos) = strays
                .iter()
                .position(|stray| stray.name == open.name && stray.seq > open.seq)
            {
                strays.remove(pos);
                continue;
            }
            errors.push(
                ValidationError::error(
                    ValidationSource::Jsx,
                    "syntax",
                    format!("Unclosed tag: {}", open.name),
                    open.line,
                    open.column,
                )
                .with_suggestion(format!("Add closing tag </{}>", open.name)),
            );
        }

        debug!(
            validator = self.name(),
            findings = errors.len(),
            "Markup scan complete"
        );
        errors
    }
}

fn check_attributes(line: &str, line_no: usize, errors: &mut Vec<ValidationError>) {
    for caps in attribute_pattern().captures_iter(line) {
        let Some(attr) = caps.get(1) else { continue };
        let column = line[..attr.start()].chars().count() + 1;
        let (message, suggestion) = match attr.as_str() {
            "class" => (
                "Use 'className' instead of 'class' in JSX",
                "Replace 'class' with 'className'",
            ),
            _ => (
                "Use 'htmlFor' instead of 'for' in JSX",
                "Replace 'for' with 'htmlFor'",
            ),
        };
        errors.push(
            ValidationError::error(ValidationSource::Jsx, "attribute", message, line_no, column)
                .with_suggestion(suggestion),
        );
    }
}
