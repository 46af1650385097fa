//! Stylesheet validation.
//!
//! A single pass over the text, one character at a time, tracking brace
//! depth. Text before a `{` at depth 0 is a selector; text holding a `:`
//! inside a rule is a declaration, ended by `;`, `}` or the end of the line.

use crate::diagnostic::{ValidationError, ValidationSource};
use crate::properties::{is_known_property, similar_properties};
use crate::validator::SourceValidator;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

const NAMED_COLORS: [&str; 10] = [
    "red",
    "blue",
    "green",
    "black",
    "white",
    "transparent",
    "currentcolor",
    "inherit",
    "initial",
    "unset",
];

const LENGTH_KEYWORDS: [&str; 5] = ["auto", "inherit", "initial", "unset", "0"];

const LENGTH_FUNCTIONS: [&str; 5] = ["calc(", "var(", "min(", "max(", "clamp("];

struct Patterns {
    selector: Regex,
    hex: Regex,
    rgb: Regex,
    hsl: Regex,
    var: Regex,
    length: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        selector: Regex::new(r"^[a-zA-Z0-9\-_#.\[\]:(),\s>+~*]+$").unwrap(),
        hex: Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").unwrap(),
        rgb: Regex::new(r"^rgba?\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*(,\s*[\d.]+\s*)?\)$").unwrap(),
        hsl: Regex::new(r"^hsla?\(\s*\d+\s*,\s*\d+%\s*,\s*\d+%\s*(,\s*[\d.]+\s*)?\)$").unwrap(),
        var: Regex::new(r"^var\(\s*--[A-Za-z0-9_-]+\s*(,.*)?\)$").unwrap(),
        length: Regex::new(r"^-?\d+(\.\d+)?(px|em|rem|%|vh|vw|vmin|vmax|ch|ex|cm|mm|in|pt|pc)$")
            .unwrap(),
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StylesheetValidator;

impl StylesheetValidator {
    pub fn new() -> Self {
        Self
    }
}

impl SourceValidator for StylesheetValidator {
    fn name(&self) -> &'static str {
        "stylesheet"
    }

    fn description(&self) -> &'static str {
        "Checks selectors, property names, values and brace balance"
    }

    fn validate(&self, source: &str) -> Vec<ValidationError> {
        let blanked = blank_comments(source);
        let mut scanner = Scanner::default();
        for (index, line) in blanked.split('\n').enumerate() {
            scanner.scan_line(index + 1, line.trim_end_matches('\r'));
        }
        let errors = scanner.finish(source.split('\n').count());
        debug!(findings = errors.len(), "Stylesheet scan complete");
        errors
    }
}

/// Replace `/* … */` with spaces, keeping newlines so positions survive.
/// An unterminated comment runs to the end of the text.
fn blank_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut in_comment = false;
    while let Some(ch) = chars.next() {
        if in_comment {
            if ch == '*' && chars.peek() == Some(&'/') {
                chars.next();
                out.push_str("  ");
                in_comment = false;
            } else {
                out.push(if ch == '\n' { '\n' } else { ' ' });
            }
        } else if ch == '/' && chars.peek() == Some(&'*') {
            chars.next();
            out.push_str("  ");
            in_comment = true;
        } else {
            out.push(ch);
        }
    }
    out
}

#[derive(Default)]
struct Scanner {
    depth: i64,
    /// Pending text with the line and column of every character
    buffer: Vec<(char, usize, usize)>,
    parens: usize,
    quote: Option<char>,
    errors: Vec<ValidationError>,
}

impl Scanner {
    fn scan_line(&mut self, line_no: usize, line: &str) {
        for (index, ch) in line.chars().enumerate() {
            let column = index + 1;

            if let Some(quote) = self.quote {
                if ch == quote {
                    self.quote = None;
                }
                self.buffer.push((ch, line_no, column));
                continue;
            }

            match ch {
                '"' | '\'' => self.quote = Some(ch),
                '(' => self.parens += 1,
                ')' => self.parens = self.parens.saturating_sub(1),
                '{' if self.parens == 0 => {
                    if self.depth == 0 {
                        self.check_selector(line_no, column);
                    }
                    self.depth += 1;
                    self.reset();
                    continue;
                }
                '}' if self.parens == 0 => {
                    if self.depth > 0 {
                        self.flush_declaration();
                    }
                    self.depth -= 1;
                    self.reset();
                    continue;
                }
                ';' if self.parens == 0 => {
                    if self.depth > 0 {
                        self.flush_declaration();
                    }
                    self.reset();
                    continue;
                }
                _ => {}
            }
            self.buffer.push((ch, line_no, column));
        }

        // A declaration still open at the end of a line has no terminator.
        if self.depth > 0
            && self.quote.is_none()
            && self.parens == 0
            && self.buffer.iter().any(|(ch, _, _)| *ch == ':')
        {
            let trailing = line.trim_end().chars().count().max(1);
            if self.flush_declaration() {
                self.errors.push(
                    ValidationError::warning(
                        ValidationSource::Css,
                        "syntax",
                        "Missing semicolon",
                        line_no,
                        trailing,
                    )
                    .with_suggestion("Add semicolon at the end of the declaration"),
                );
            }
            self.reset();
        } else if !self.buffer.is_empty() {
            self.buffer.push(('\n', line_no, line.chars().count() + 1));
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.parens = 0;
    }

    fn text(&self) -> String {
        self.buffer.iter().map(|(ch, _, _)| *ch).collect()
    }

    /// Position of the first non-blank buffered character at or after `from`
    fn position_after(&self, from: usize) -> Option<(usize, usize)> {
        self.buffer[from..]
            .iter()
            .find(|(ch, _, _)| !ch.is_whitespace())
            .map(|(_, line, column)| (*line, *column))
    }

    fn check_selector(&mut self, line_no: usize, column: usize) {
        let text = self.text();
        let selector = text.trim();
        if selector.starts_with('@') {
            return;
        }
        let (line, column) = self.position_after(0).unwrap_or((line_no, column));
        if selector.is_empty() {
            self.errors.push(
                ValidationError::error(
                    ValidationSource::Css,
                    "selector",
                    "Missing CSS selector",
                    line,
                    column,
                )
                .with_suggestion("Add a selector before the opening brace"),
            );
        } else if !patterns().selector.is_match(selector) {
            self.errors.push(
                ValidationError::error(
                    ValidationSource::Css,
                    "selector",
                    format!("Invalid CSS selector: {}", selector),
                    line,
                    column,
                )
                .with_suggestion("Check selector syntax and ensure proper nesting"),
            );
        }
    }

    /// Validate the buffered declaration. Returns false when the buffer
    /// held no declaration.
    fn flush_declaration(&mut self) -> bool {
        let Some(colon) = self.buffer.iter().position(|(ch, _, _)| *ch == ':') else {
            return false;
        };
        let Some((line, column)) = self.position_after(0) else {
            return false;
        };
        let text = self.text();
        let (property, value) = match text.split_once(':') {
            Some(parts) => parts,
            None => return false,
        };

        let property = property.trim();
        if property.starts_with('&') || property.starts_with('@') {
            return false;
        }
        let property_lower = property.to_ascii_lowercase();

        if !is_known_property(&property_lower) {
            let similar = similar_properties(&property_lower);
            let suggestion = if similar.is_empty() {
                "Check the property name for typos".to_string()
            } else {
                format!("Did you mean one of: {}?", similar.join(", "))
            };
            self.errors.push(
                ValidationError::warning(
                    ValidationSource::Css,
                    "property",
                    format!("Unknown CSS property: {}", property),
                    line,
                    column,
                )
                .with_suggestion(suggestion),
            );
        }

        if let Some(message) = check_value(&property_lower, value.trim()) {
            let (value_line, value_column) = self
                .position_after(colon + 1)
                .unwrap_or_else(|| {
                    let (_, l, c) = self.buffer[colon];
                    (l, c + 1)
                });
            self.errors.push(
                ValidationError::error(
                    ValidationSource::Css,
                    "value",
                    message,
                    value_line,
                    value_column,
                )
                .with_suggestion(value_suggestion(&property_lower)),
            );
        }
        true
    }

    /// Unbalanced braces are reported once, on the last line.
    fn finish(mut self, line_count: usize) -> Vec<ValidationError> {
        if self.depth != 0 {
            self.errors.push(
                ValidationError::error(
                    ValidationSource::Css,
                    "syntax",
                    "Unmatched braces in CSS",
                    line_count.max(1),
                    1,
                )
                .with_suggestion("Ensure all opening braces have corresponding closing braces"),
            );
        }
        self.errors
    }
}

fn check_value(property: &str, value: &str) -> Option<&'static str> {
    let value = value
        .strip_suffix("!important")
        .map(str::trim_end)
        .unwrap_or(value);
    if value.is_empty() {
        return Some("Empty value");
    }
    if property.starts_with("--") {
        return None;
    }
    if (property.contains("color") || property == "background") && !is_valid_color(value) {
        return Some("Invalid color value");
    }
    let is_length_property = ["width", "height", "margin", "padding"]
        .iter()
        .any(|key| property.contains(key));
    if is_length_property && !is_valid_length(value) {
        return Some("Invalid length value");
    }
    None
}

fn is_valid_color(value: &str) -> bool {
    let p = patterns();
    p.hex.is_match(value)
        || p.rgb.is_match(value)
        || p.hsl.is_match(value)
        || p.var.is_match(value)
        || NAMED_COLORS.contains(&value.to_ascii_lowercase().as_str())
}

fn is_valid_length(value: &str) -> bool {
    split_components(value).into_iter().all(|component| {
        LENGTH_KEYWORDS.contains(&component)
            || patterns().length.is_match(component)
            || (component.ends_with(')')
                && LENGTH_FUNCTIONS.iter().any(|f| component.starts_with(f)))
    })
}

/// Split on whitespace outside parentheses.
fn split_components(value: &str) -> Vec<&str> {
    let mut components = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;
    for (i, ch) in value.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if ch.is_whitespace() && depth == 0 {
            if let Some(s) = start.take() {
                components.push(&value[s..i]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        components.push(&value[s..]);
    }
    components
}

fn value_suggestion(property: &str) -> &'static str {
    match property {
        "color" | "background-color" => "Use hex (#000000), rgb(0,0,0), or named colors",
        "width" | "height" | "margin" | "padding" => "Use length units like px, em, rem, % or auto",
        "font-size" => "Use length units like px, em, rem or keywords like small, medium, large",
        "display" => "Use values like block, inline, flex, grid, none",
        _ => "Check CSS specification for valid values",
    }
}
