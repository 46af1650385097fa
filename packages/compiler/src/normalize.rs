//! SVG markup → JSX-safe SVG markup.
//!
//! Every rewrite is a plain text substitution. Running the normalizer on its
//! own output changes nothing.

use regex::{Captures, Regex};
use std::sync::OnceLock;

const WRAPPER_OPEN: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\">";

/// Hyphenated presentation attributes and their JSX names
pub const HYPHENATED_ATTRIBUTES: [(&str, &str); 5] = [
    ("stroke-width", "strokeWidth"),
    ("fill-rule", "fillRule"),
    ("clip-rule", "clipRule"),
    ("stroke-linecap", "strokeLinecap"),
    ("stroke-linejoin", "strokeLinejoin"),
];

/// HTML attribute names that JSX spells differently
pub const RENAMED_ATTRIBUTES: [(&str, &str); 3] = [
    ("class", "className"),
    ("for", "htmlFor"),
    ("tabindex", "tabIndex"),
];

struct Patterns {
    xml_declaration: Regex,
    doctype: Regex,
    comment: Regex,
    class_attr: Regex,
    hyphenated: Regex,
    label_attrs: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        xml_declaration: Regex::new(r"<\?xml[^<>]*\?>").unwrap(),
        doctype: Regex::new(r"(?i)<!DOCTYPE[^<>]*>").unwrap(),
        comment: Regex::new(r"(?s)<!--.*?-->").unwrap(),
        class_attr: Regex::new(r"(\s)class=").unwrap(),
        hyphenated: Regex::new(
            r"(\s)(stroke-width|fill-rule|clip-rule|stroke-linecap|stroke-linejoin)(\s*=)",
        )
        .unwrap(),
        label_attrs: Regex::new(r"(\s)(for|tabindex)=").unwrap(),
    })
}

/// Remove XML declarations, doctypes and comments until none are left
fn strip_prolog(markup: &str) -> String {
    let p = patterns();
    let mut current = markup.trim().to_string();
    loop {
        let stripped = p.xml_declaration.replace_all(&current, "");
        let stripped = p.doctype.replace_all(&stripped, "");
        let stripped = p.comment.replace_all(&stripped, "");
        let next = stripped.trim().to_string();
        if next == current {
            return current;
        }
        current = next;
    }
}

pub fn jsx_attribute_name(name: &str) -> &str {
    HYPHENATED_ATTRIBUTES
        .iter()
        .chain(RENAMED_ATTRIBUTES.iter())
        .find(|(html, _)| *html == name)
        .map(|(_, jsx)| *jsx)
        .unwrap_or(name)
}

/// Inverse of [`jsx_attribute_name`], for HTML template dialects
pub fn html_attribute_name(name: &str) -> &str {
    HYPHENATED_ATTRIBUTES
        .iter()
        .chain(RENAMED_ATTRIBUTES.iter())
        .find(|(_, jsx)| *jsx == name)
        .map(|(html, _)| *html)
        .unwrap_or(name)
}

/// Normalize an SVG fragment for use inside component code
pub fn normalize(markup: &str) -> String {
    let p = patterns();

    let mut svg = strip_prolog(markup);
    if !svg.starts_with("<svg") {
        svg = format!("{}{}</svg>", WRAPPER_OPEN, svg);
    }

    let svg = p.class_attr.replace_all(&svg, "${1}className=");
    let svg = p.hyphenated.replace_all(&svg, |caps: &Captures| {
        format!("{}{}{}", &caps[1], jsx_attribute_name(&caps[2]), &caps[3])
    });
    let svg = p.label_attrs.replace_all(&svg, |caps: &Captures| {
        format!("{}{}=", &caps[1], jsx_attribute_name(&caps[2]))
    });

    svg.into_owned()
}

/// Map JSX attribute names back to the HTML spelling used by template dialects
pub fn to_html_dialect(markup: &str) -> String {
    static JSX_ATTRS: OnceLock<Regex> = OnceLock::new();
    let re = JSX_ATTRS.get_or_init(|| {
        Regex::new(
            r"(\s)(className|htmlFor|tabIndex|strokeWidth|fillRule|clipRule|strokeLinecap|strokeLinejoin)(\s*=)",
        )
        .unwrap()
    });
    re.replace_all(markup, |caps: &Captures| {
        format!("{}{}{}", &caps[1], html_attribute_name(&caps[2]), &caps[3])
    })
    .into_owned()
}
