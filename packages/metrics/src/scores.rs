//! Individual scores. Each is a pure function of the source text.

use regex::Regex;
use std::sync::OnceLock;

pub const MAX_COMPLEXITY: u32 = 100;

struct Patterns {
    branches: Vec<Regex>,
    comments: Regex,
    side_effects: Regex,
    purity: Regex,
    slow: Vec<Regex>,
    optimized: Vec<Regex>,
    a11y_attributes: Vec<Regex>,
    imports: Regex,
}

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources.iter().map(|s| Regex::new(s).unwrap()).collect()
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        branches: compile(&[
            r"if\s*\(",
            r"else\s*if\s*\(",
            r"while\s*\(",
            r"for\s*\(",
            r"switch\s*\(",
            r"case\s*.*:",
            r"catch\s*\(",
            r"&&",
            r"\|\|",
            r"\?",
        ]),
        comments: Regex::new(r"(?m)/\*[\s\S]*?\*/|//.*$").unwrap(),
        side_effects: Regex::new(r"useEffect|fetch|axios|localStorage|sessionStorage").unwrap(),
        purity: Regex::new(r"React\.memo|useMemo|useCallback").unwrap(),
        slow: compile(&[
            r"document\.querySelector",
            r"getElementById",
            r"innerHTML",
            r"for\s*\(.*in.*\)",
            r"while\s*\(.*true.*\)",
        ]),
        optimized: compile(&[
            r"React\.memo",
            r"useMemo",
            r"useCallback",
            r"lazy\s*\(",
            r"Suspense",
        ]),
        a11y_attributes: compile(&[
            r"aria-label",
            r"aria-describedby",
            r"role=",
            r"alt=",
            r"tabIndex",
            r"onKeyDown",
            r"onKeyPress",
        ]),
        imports: Regex::new(r"import\s+.*from").unwrap(),
    })
}

fn count_all(patterns: &[Regex], code: &str) -> i64 {
    patterns
        .iter()
        .map(|p| p.find_iter(code).count() as i64)
        .sum()
}

fn clamp_score(value: i64) -> u32 {
    value.clamp(0, 100) as u32
}

/// Number of lines, counting a trailing empty line
pub fn line_count(code: &str) -> usize {
    code.split('\n').count()
}

/// One plus every branch or boolean operator, capped at 100
pub fn complexity(code: &str) -> u32 {
    let count = 1 + count_all(&patterns().branches, code);
    count.min(MAX_COMPLEXITY as i64) as u32
}

pub fn comment_count(code: &str) -> usize {
    patterns().comments.find_iter(code).count()
}

/// Maintainability index with a comment bonus term. Floored at 0 and
/// rounded; very short sources may score above 100.
pub fn maintainability(code: &str) -> u32 {
    let lines = line_count(code) as f64;
    let complexity = complexity(code) as f64;
    let comments = comment_count(code) as f64;

    let index = 171.0 - 5.2 * lines.ln() - 0.23 * complexity - 16.2 * (lines + 1.0).ln()
        + 50.0 * (2.4 * comments).sqrt().sin();
    index.max(0.0).round() as u32
}

pub fn testability(code: &str) -> u32 {
    let p = patterns();
    let side_effects = p.side_effects.find_iter(code).count() as i64;
    let pure = p.purity.find_iter(code).count() as i64;
    clamp_score(100 - side_effects * 5 + pure * 10)
}

pub fn performance(code: &str) -> u32 {
    let p = patterns();
    clamp_score(100 - count_all(&p.slow, code) * 5 + count_all(&p.optimized, code) * 3)
}

/// Occurrences of `needle` whose remaining line contains none of `unless`
fn count_without_followers(code: &str, needle: &str, unless: &[&str]) -> i64 {
    code.match_indices(needle)
        .filter(|(start, _)| {
            let rest = &code[start + needle.len()..];
            let rest_of_line = rest.split('\n').next().unwrap_or_default();
            !unless.iter().any(|follower| rest_of_line.contains(follower))
        })
        .count() as i64
}

pub fn accessibility(code: &str) -> u32 {
    let good = count_all(&patterns().a11y_attributes, code);
    let issues = count_without_followers(code, "onClick", &["onKeyDown"])
        + count_without_followers(code, "<img", &["alt"])
        + count_without_followers(code, "<input", &["aria-label", "id"]);
    clamp_score(50 + good * 5 - issues * 10)
}

pub fn import_count(code: &str) -> usize {
    patterns().imports.find_iter(code).count()
}
