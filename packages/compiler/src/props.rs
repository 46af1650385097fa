//! Props contract derived from the root `<svg>` element.

use regex::Regex;
use std::sync::OnceLock;

/// Kind of value a prop accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    Text,
    Dimension,
}

impl PropKind {
    pub fn typescript(&self) -> &'static str {
        match self {
            PropKind::Text => "string",
            PropKind::Dimension => "number | string",
        }
    }

    /// Vue runtime prop constructor list
    pub fn vue_constructor(&self) -> &'static str {
        match self {
            PropKind::Text => "String",
            PropKind::Dimension => "[Number, String]",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    /// JSX attribute name, also the prop name
    pub name: &'static str,
    pub kind: PropKind,
    pub default: Option<String>,
}

/// Props every component exposes
const BASE_PROPS: [(&str, PropKind); 5] = [
    ("className", PropKind::Text),
    ("width", PropKind::Dimension),
    ("height", PropKind::Dimension),
    ("fill", PropKind::Text),
    ("stroke", PropKind::Text),
];

/// Props exposed only when the root svg carries them
const EXTRA_PROPS: [(&str, PropKind); 3] = [
    ("strokeWidth", PropKind::Dimension),
    ("opacity", PropKind::Dimension),
    ("viewBox", PropKind::Text),
];

#[derive(Debug, Clone, PartialEq)]
pub struct PropsContract {
    pub props: Vec<Prop>,
}

impl PropsContract {
    /// Base props plus any extra attribute present on the root. Static root
    /// values become defaults; `className` falls back to `default_class`.
    pub fn from_root(root: &RootSvg, default_class: &str) -> Self {
        let mut props: Vec<Prop> = BASE_PROPS
            .iter()
            .map(|&(name, kind)| Prop {
                name,
                kind,
                default: root.attribute(name),
            })
            .collect();

        if let Some(class_prop) = props.iter_mut().find(|p| p.name == "className") {
            class_prop.default.get_or_insert_with(|| default_class.to_string());
        }

        props.extend(EXTRA_PROPS.iter().filter_map(|&(name, kind)| {
            root.attribute(name).map(|value| Prop {
                name,
                kind,
                default: Some(value),
            })
        }));

        Self { props }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.props.iter().map(|p| p.name)
    }
}

/// Quote a value as a single-quoted JS string literal
pub fn js_string(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\s+([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
    })
}

/// Offset of the `>` closing an opening tag. Quoted values and braced
/// expressions may contain `>`.
fn tag_end(text: &str) -> Option<usize> {
    let mut quote = None;
    let mut braces = 0usize;
    for (i, ch) in text.char_indices() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                '{' => braces += 1,
                '}' => braces = braces.saturating_sub(1),
                '>' if braces == 0 => return Some(i),
                _ => {}
            },
        }
    }
    None
}

/// Normalized markup split into the root tag's attributes and its body
#[derive(Debug, Clone, PartialEq)]
pub struct RootSvg {
    /// Raw attribute text of the opening tag, leading whitespace included
    pub attributes: String,
    pub self_closing: bool,
    /// Everything after the opening tag
    pub rest: String,
}

impl RootSvg {
    pub fn parse(markup: &str) -> Option<Self> {
        let after = markup.strip_prefix("<svg")?;
        if !after.starts_with(|c: char| c.is_whitespace() || c == '>' || c == '/') {
            return None;
        }
        let end = tag_end(after)?;
        let (mut attributes, rest) = (&after[..end], &after[end + 1..]);

        let self_closing = attributes.ends_with('/');
        if self_closing {
            attributes = &attributes[..attributes.len() - 1];
        }

        Some(Self {
            attributes: attributes.trim_end().to_string(),
            self_closing,
            rest: rest.to_string(),
        })
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        attribute_regex()
            .captures_iter(&self.attributes)
            .find(|caps| &caps[1] == name)
            .and_then(|caps| caps.get(2).or_else(|| caps.get(3)))
            .map(|m| m.as_str().to_string())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Remove static `name="…"` attributes
    pub fn remove_attributes<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        let names: Vec<&str> = names.into_iter().collect();
        let remaining = attribute_regex().replace_all(&self.attributes, |caps: &regex::Captures| {
            if names.contains(&&caps[1]) {
                String::new()
            } else {
                caps[0].to_string()
            }
        });
        self.attributes = remaining.into_owned();
    }

    /// Append raw attribute text such as ` role="img"`
    pub fn push_attribute(&mut self, text: &str) {
        self.attributes.push(' ');
        self.attributes.push_str(text.trim());
    }

    /// Map attribute names in the opening tag and body with `f`
    pub fn map_markup(&mut self, f: impl Fn(&str) -> String) {
        self.attributes = f(&self.attributes);
        self.rest = f(&self.rest);
    }

    pub fn render(&self) -> String {
        let close = if self.self_closing { "/>" } else { ">" };
        format!("<svg{}{}{}", self.attributes, close, self.rest)
    }
}
