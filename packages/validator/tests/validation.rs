use figcode_compiler::{synthesize, Framework, Styling, SynthesisOptions};
use figcode_design::extract;
use figcode_validator::{
    levenshtein, similar_properties, validate, DiagnosticCode, Language, MarkupValidator, Severity,
    SourceValidator, ValidationSource,
};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_single_line_rule_reports_one_property_warning() {
    let report = validate(".a{colr:#fff}", Language::Css);

    assert_eq!(report.errors.len(), 1);
    let warning = &report.errors[0];
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.category, "property");
    assert_eq!(warning.source, ValidationSource::Css);
    assert!(warning.suggestion.as_deref().unwrap().contains("color"));
    assert_eq!(report.stats.total_errors, 1);
}

#[test]
fn test_mismatched_markup_reports_one_error() {
    let report = validate("<div><span></div>", Language::JavaScript);

    assert_eq!(report.errors.len(), 1);
    let error = &report.errors[0];
    assert_eq!(error.severity, Severity::Error);
    assert_eq!(error.category, "syntax");
    assert!(error.message.contains("expected span"));
    assert!(error.message.contains("found div"));
}

#[test]
fn test_apostrophes_in_jsx_text_are_valid() {
    for language in [Language::TypeScript, Language::JavaScript] {
        let report = validate("const t = <p>Don't</p>;\n", language);
        assert!(report.errors.is_empty(), "{:?}: {:#?}", language, report.errors);
    }

    let source = "export const Note = ({ count }: { count: number }) => (\n  <p className=\"note\">\n    We're at {count > 1 ? 'many' : 'one'} item's `limit`\n  </p>\n);\n";
    let report = validate(source, Language::TypeScript);
    assert!(report.errors.is_empty(), "{:#?}", report.errors);

    let report = validate("const t = 'Don't';\n", Language::TypeScript);
    assert!(report.errors.iter().any(|e| e.code == Some(DiagnosticCode::Number(1002))));
}

#[test]
fn test_comparisons_do_not_open_tags() {
    let report = validate("const ok = a <b;\nif (n <limit) {}\n", Language::TypeScript);
    assert!(report.errors.is_empty(), "{:#?}", report.errors);
}

#[test]
fn test_report_serializes_camel_case() {
    let report = validate(".a { color: red }", Language::Css);
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["stats"].get("totalErrors").is_some());
    assert!(json["stats"].get("errorsByCategory").is_some());
    assert!(json["stats"].get("validationTimeMs").is_some());
}

fn component_language(framework: Framework, typescript: bool) -> Language {
    match (framework, typescript) {
        (Framework::React, true) => Language::TypeScript,
        (Framework::React, false) => Language::JavaScript,
        _ => Language::Template,
    }
}

#[test]
fn test_generated_output_has_no_blocking_findings() {
    let markup = extract(&json!({
        "document": {
            "id": "0:0",
            "type": "DOCUMENT",
            "children": [
                { "id": "1:1", "type": "RECTANGLE", "absoluteBoundingBox": { "x": 0, "y": 0, "width": 40, "height": 20 } },
                { "id": "1:2", "type": "ELLIPSE", "absoluteBoundingBox": { "x": 10, "y": 10, "width": 8, "height": 8 } },
                { "id": "1:3", "type": "TEXT", "characters": "Don't {panic} <now>", "absoluteBoundingBox": { "x": 2, "y": 2, "width": 30, "height": 10 } }
            ]
        }
    }));

    let frameworks = [Framework::React, Framework::Vue, Framework::Angular, Framework::Svelte];
    let stylings = [Styling::Css, Styling::Scss, Styling::Tailwind];

    for framework in frameworks {
        for typescript in [true, false] {
            for styling in stylings {
                for accessible in [true, false] {
                    let options = SynthesisOptions {
                        framework,
                        typescript,
                        styling,
                        accessible,
                        ..SynthesisOptions::default()
                    };
                    let result = synthesize(&markup, "ProfileCard", &options).unwrap();

                    let component = validate(
                        &result.component_source,
                        component_language(framework, typescript),
                    );
                    assert!(
                        component.is_valid(),
                        "{:?} component:\n{}\n{:#?}",
                        options,
                        result.component_source,
                        component.errors
                    );

                    let style_language = match styling {
                        Styling::Scss => Language::Scss,
                        _ => Language::Css,
                    };
                    let styles = validate(&result.style_source, style_language);
                    assert!(
                        styles.errors.is_empty(),
                        "{:?} styles:\n{}\n{:#?}",
                        options,
                        result.style_source,
                        styles.errors
                    );

                    if let Some(types) = &result.types_source {
                        let report = validate(types, Language::TypeScript);
                        assert!(report.is_valid(), "{:?} types:\n{}\n{:#?}", options, types, report.errors);
                    }
                }
            }
        }
    }
}

fn balanced_rule() -> impl Strategy<Value = String> {
    (
        "[a-z]{1,8}",
        prop::sample::select(vec!["color: red;", "width: 10px;", "margin: 0 auto;", "display: block;"]),
    )
        .prop_map(|(class, declaration)| format!(".{} {{\n  {}\n}}\n", class, declaration))
}

#[derive(Debug, Clone)]
enum Tag {
    Leaf { name: String, self_closing: bool },
    Element { name: String, children: Vec<Tag>, multiline: bool },
}

impl Tag {
    fn render(&self) -> String {
        match self {
            Tag::Leaf { name, self_closing: true } => format!("<{} />", name),
            Tag::Leaf { name, self_closing: false } => format!("<{0}>text</{0}>", name),
            Tag::Element {
                name,
                children,
                multiline,
            } => {
                let separator = if *multiline { "\n" } else { "" };
                let inner: Vec<String> = children.iter().map(Tag::render).collect();
                format!(
                    "<{0}>{1}{2}{1}</{0}>",
                    name,
                    separator,
                    inner.join(separator)
                )
            }
        }
    }
}

fn tag_tree() -> impl Strategy<Value = Tag> {
    let name = "[a-z][a-z0-9]{0,5}";
    let leaf = (name, any::<bool>()).prop_map(|(name, self_closing)| Tag::Leaf { name, self_closing });
    leaf.prop_recursive(4, 24, 4, move |inner| {
        (name, prop::collection::vec(inner, 0..4), any::<bool>()).prop_map(
            |(name, children, multiline)| Tag::Element {
                name,
                children,
                multiline,
            },
        )
    })
}

proptest! {
    #[test]
    fn prop_unmatched_open_braces_report_once(
        rules in prop::collection::vec(balanced_rule(), 0..5),
        unmatched in 0usize..5,
    ) {
        let mut css = rules.concat();
        for i in 0..unmatched {
            css.push_str(&format!(".open{} {{\n  color: red;\n", i));
        }

        let report = validate(&css, Language::Css);
        let count = report
            .errors
            .iter()
            .filter(|e| e.message == "Unmatched braces in CSS")
            .count();
        prop_assert_eq!(count, usize::from(unmatched > 0));
    }

    #[test]
    fn prop_brace_report_is_at_most_one(source in "[a-z{};: \n]{0,80}") {
        let report = validate(&source, Language::Css);
        let count = report
            .errors
            .iter()
            .filter(|e| e.message == "Unmatched braces in CSS")
            .count();
        prop_assert!(count <= 1);
    }

    #[test]
    fn prop_well_nested_markup_is_clean(tree in tag_tree()) {
        let markup = tree.render();
        let errors = MarkupValidator::jsx().validate(&markup);
        prop_assert!(errors.is_empty(), "{}\n{:?}", markup, errors);
    }

    #[test]
    fn prop_one_renamed_closer_is_one_mismatch(tree in tag_tree(), pick in any::<prop::sample::Index>()) {
        let markup = tree.render();
        let closers: Vec<usize> = markup.match_indices("</").map(|(i, _)| i).collect();
        prop_assume!(!closers.is_empty());

        let at = closers[pick.index(closers.len())] + 2;
        let end = at + markup[at..].find('>').unwrap();
        let broken = format!("{}renamedtag{}", &markup[..at], &markup[end..]);

        let errors = MarkupValidator::jsx().validate(&broken);
        let mismatches = errors
            .iter()
            .filter(|e| e.message.starts_with("Mismatched tags"))
            .count();
        prop_assert_eq!(mismatches, 1, "{}\n{:?}", broken, errors);
        prop_assert_eq!(errors.len(), 1);
    }

    #[test]
    fn prop_property_suggestions_are_bounded(property in "[a-z-]{1,16}") {
        let similar = similar_properties(&property);
        prop_assert!(similar.len() <= 3);
        let distances: Vec<usize> = similar.iter().map(|name| levenshtein(&property, name)).collect();
        prop_assert!(distances.iter().all(|d| *d <= 2));
        prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }
}
