/// Standard property names accepted by the stylesheet validator, in
/// suggestion order.
pub const CSS_PROPERTIES: &[&str] = &[
    // Layout
    "display", "position", "top", "right", "bottom", "left", "z-index", "float", "clear",
    "overflow", "overflow-x", "overflow-y", "clip", "visibility", "opacity", "filter",
    // Box model
    "width", "height", "min-width", "min-height", "max-width", "max-height", "margin",
    "margin-top", "margin-right", "margin-bottom", "margin-left", "padding", "padding-top",
    "padding-right", "padding-bottom", "padding-left", "border", "border-width", "border-style",
    "border-color", "border-top", "border-right", "border-bottom", "border-left",
    "border-radius", "box-sizing", "box-shadow",
    // Typography
    "font", "font-family", "font-size", "font-weight", "font-style", "font-variant",
    "line-height", "letter-spacing", "word-spacing", "text-align", "text-decoration",
    "text-transform", "text-indent", "text-shadow", "white-space", "word-wrap", "word-break",
    // Colors and backgrounds
    "color", "background", "background-color", "background-image", "background-repeat",
    "background-position", "background-size", "background-attachment", "background-clip",
    "background-origin",
    // Flexbox
    "flex", "flex-direction", "flex-wrap", "flex-flow", "justify-content", "align-items",
    "align-content", "align-self", "flex-grow", "flex-shrink", "flex-basis", "order",
    // Grid
    "grid", "grid-template", "grid-template-columns", "grid-template-rows",
    "grid-template-areas", "grid-gap", "grid-column-gap", "grid-row-gap", "grid-column",
    "grid-row", "grid-area", "justify-items",
    // Animation and transform
    "transition", "transition-property", "transition-duration", "transition-timing-function",
    "transition-delay", "animation", "animation-name", "animation-duration",
    "animation-timing-function", "animation-delay", "animation-iteration-count",
    "animation-direction", "animation-fill-mode", "animation-play-state", "transform",
    "transform-origin", "transform-style", "perspective", "perspective-origin",
    "backface-visibility",
    // Modern layout
    "gap", "row-gap", "column-gap", "place-items", "place-content", "place-self",
    "aspect-ratio", "object-fit", "object-position", "scroll-behavior", "scroll-snap-type",
    "scroll-snap-align",
];

const VENDOR_PREFIXES: [&str; 4] = ["-webkit-", "-moz-", "-ms-", "-o-"];

pub const MAX_SUGGESTIONS: usize = 3;
pub const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Allow-listed names, vendor-prefixed allow-listed names and custom
/// properties are known.
pub fn is_known_property(property: &str) -> bool {
    if property.starts_with("--") {
        return true;
    }
    let unprefixed = VENDOR_PREFIXES
        .iter()
        .find_map(|prefix| property.strip_prefix(prefix))
        .unwrap_or(property);
    CSS_PROPERTIES.contains(&unprefixed)
}

/// Edit distance over chars, O(n·m) table.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Up to three allow-listed names within distance 2, closest first. Ties
/// keep allow-list order.
pub fn similar_properties(property: &str) -> Vec<&'static str> {
    let mut candidates: Vec<(usize, &'static str)> = CSS_PROPERTIES
        .iter()
        .map(|name| (levenshtein(property, name), *name))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .collect();
    candidates.sort_by_key(|(distance, _)| *distance);
    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, name)| name)
        .collect()
}
