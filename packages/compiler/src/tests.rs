use crate::{normalize, synthesize, Framework, Styling, SynthesisError, SynthesisOptions};

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn options(framework: Framework, typescript: bool) -> SynthesisOptions {
    SynthesisOptions {
        framework,
        typescript,
        ..SynthesisOptions::default()
    }
}

#[test]
fn test_react_typed_component() {
    let result = synthesize("<svg><rect/></svg>", "Icon", &SynthesisOptions::default())
        .expect("Failed to synthesize");
    let source = &result.component_source;

    println!("Generated code:\n{}", source);

    assert!(source.contains("import React from 'react';"));
    assert!(source.contains("interface IconProps {"));
    assert!(source.contains("  width?: number | string;"));
    assert!(source.contains("  [key: string]: any;"));
    assert!(source.contains("const Icon: React.FC<IconProps> = ({ className = 'icon', width, height, fill, stroke, ...props }) => {"));
    assert!(source.contains(
        "<svg className={className} width={width} height={height} fill={fill} stroke={stroke} {...props}><rect/></svg>"
    ));
    assert!(source.trim_end().ends_with("export default Icon;"));
}

#[test]
fn test_react_untyped_has_no_type_syntax() {
    let result = synthesize("<svg><rect/></svg>", "Icon", &options(Framework::React, false)).unwrap();
    let source = &result.component_source;

    assert!(!source.contains("interface"));
    assert!(!source.contains("React.FC"));
    assert!(!source.contains("?:"));
    assert!(source.contains("const Icon = ({ className = 'icon'"));
    assert!(result.types_source.is_none());
}

#[test]
fn test_react_without_props_keeps_markup() {
    let opts = SynthesisOptions {
        pass_props: false,
        ..SynthesisOptions::default()
    };
    let result = synthesize("<svg width=\"24\"><rect/></svg>", "Icon", &opts).unwrap();

    assert!(result.component_source.contains("const Icon: React.FC<IconProps> = () => {"));
    assert!(result.component_source.contains("<svg width=\"24\"><rect/></svg>"));
}

#[test]
fn test_static_root_attributes_become_defaults() {
    let result = synthesize(
        "<svg width=\"24\" height=\"24\" viewBox=\"0 0 24 24\" fill=\"none\"><path d=\"M0 0\"/></svg>",
        "ArrowIcon",
        &SynthesisOptions::default(),
    )
    .unwrap();
    let source = normalize_whitespace(&result.component_source);

    assert!(source.contains("width = '24', height = '24', fill = 'none', stroke, viewBox = '0 0 24 24', ...props"));
    assert!(source.contains("viewBox?: string;"));
    assert!(!source.contains("width=\"24\""));
    assert!(source.contains("className = 'arrow-icon'"));
}

#[test]
fn test_accessible_root() {
    let opts = SynthesisOptions {
        accessible: true,
        ..SynthesisOptions::default()
    };
    let result = synthesize("<svg><rect/></svg>", "Logo", &opts).unwrap();
    assert!(result.component_source.contains("<svg role=\"img\" aria-label=\"Logo\" className={className}"));
}

#[test]
fn test_vue_maps_back_to_html_attributes() {
    let result = synthesize(
        "<svg class=\"x\"><path stroke-width=\"2\"/></svg>",
        "Icon",
        &options(Framework::Vue, true),
    )
    .unwrap();
    let source = &result.component_source;

    println!("Generated code:\n{}", source);

    assert!(source.starts_with("<template>"));
    assert!(source.contains("<path stroke-width=\"2\"/>"));
    assert!(source.contains(":class=\"className\""));
    assert!(source.contains("<script lang=\"ts\">"));
    assert!(source.contains("import { defineComponent, PropType } from 'vue';"));
    assert!(source.contains("name: 'Icon',"));
    assert!(source.contains("type: String as PropType<string>,"));
    assert!(source.contains("default: 'x',"));
    assert!(!source.contains("className="));
}

#[test]
fn test_vue_untyped() {
    let result = synthesize("<svg><rect/></svg>", "Icon", &options(Framework::Vue, false)).unwrap();
    let source = &result.component_source;

    assert!(source.contains("<script>"));
    assert!(!source.contains("PropType"));
    assert!(source.contains("type: [Number, String],"));
}

#[test]
fn test_angular_component() {
    let result = synthesize("<svg><rect/></svg>", "UserAvatar", &options(Framework::Angular, true)).unwrap();
    let source = &result.component_source;

    println!("Generated code:\n{}", source);

    assert!(source.contains("selector: 'app-user-avatar',"));
    assert!(source.contains("standalone: true,"));
    assert!(source.contains("[attr.class]=\"className\""));
    assert!(source.contains("export class UserAvatar {"));
    assert!(source.contains("@Input() className: string = 'user-avatar';"));
    assert!(source.contains("@Input() fill?: string;"));
    assert!(source.contains("export default UserAvatar;"));
}

#[test]
fn test_angular_untyped_members_have_no_annotations() {
    let result = synthesize("<svg><rect/></svg>", "Icon", &options(Framework::Angular, false)).unwrap();
    assert!(result.component_source.contains("@Input() className = 'icon';"));
    assert!(result.component_source.contains("@Input() fill;"));
}

#[test]
fn test_angular_template_escapes_backticks() {
    let result = synthesize("<svg><text>`${x}`</text></svg>", "Icon", &options(Framework::Angular, true)).unwrap();
    assert!(result.component_source.contains("<text>\\`\\${x}\\`</text>"));
}

#[test]
fn test_svelte_component() {
    let result = synthesize("<svg class=\"a\"><rect/></svg>", "Icon", &options(Framework::Svelte, true)).unwrap();
    let source = &result.component_source;

    println!("Generated code:\n{}", source);

    assert!(source.starts_with("<!-- @component Icon -->"));
    assert!(source.contains("<script lang=\"ts\">"));
    assert!(source.contains("  export let className: string = 'a';"));
    assert!(source.contains("  export let fill: string | undefined = undefined;"));
    assert!(source.contains("class={className}"));
    assert!(source.contains("{...$$restProps}"));
}

#[test]
fn test_types_artifact_per_framework() {
    let react = synthesize("<svg/>", "Icon", &options(Framework::React, true)).unwrap();
    let types = react.types_source.unwrap();
    assert!(types.contains("export interface IconProps {"));
    assert!(types.contains("export declare const Icon: React.FC<IconProps>;"));

    let svelte = synthesize("<svg/>", "Icon", &options(Framework::Svelte, true)).unwrap();
    assert!(svelte
        .types_source
        .unwrap()
        .contains("export declare class Icon extends SvelteComponent<IconProps> {}"));
}

#[test]
fn test_stylesheets() {
    let css = synthesize("<svg/>", "Icon", &SynthesisOptions::default()).unwrap();
    assert!(css.style_source.starts_with(".icon {"));
    assert!(css.style_source.contains(".icon svg {"));

    let scss_opts = SynthesisOptions {
        styling: Styling::Scss,
        ..SynthesisOptions::default()
    };
    let scss = synthesize("<svg/>", "Icon", &scss_opts).unwrap();
    assert!(scss.style_source.contains("  &:hover {"));

    let styled_opts = SynthesisOptions {
        styling: Styling::StyledComponents,
        ..SynthesisOptions::default()
    };
    let styled = synthesize("<svg/>", "Icon", &styled_opts).unwrap();
    assert!(styled.style_source.contains("export const IconWrapper = styled.span`"));

    let tailwind_opts = SynthesisOptions {
        styling: Styling::Tailwind,
        ..SynthesisOptions::default()
    };
    let tailwind = synthesize("<svg/>", "Icon", &tailwind_opts).unwrap();
    assert!(tailwind.style_source.starts_with("@tailwind base;"));
    assert!(tailwind.style_source.contains("@apply inline-block leading-none;"));
}

#[test]
fn test_custom_style_body_passes_through() {
    let opts = SynthesisOptions {
        style_body: Some(".custom { color: red; }".to_string()),
        ..SynthesisOptions::default()
    };
    let result = synthesize("<svg/>", "Icon", &opts).unwrap();
    assert_eq!(result.style_source, ".custom { color: red; }");
}

#[test]
fn test_test_scaffold() {
    let opts = SynthesisOptions {
        unit_tests: true,
        ..SynthesisOptions::default()
    };
    let result = synthesize("<svg/>", "Icon", &opts).unwrap();
    let test = result.test_source.unwrap();
    assert!(test.contains("import { render } from '@testing-library/react';"));
    assert!(test.contains("render(<Icon />)"));

    let angular = synthesize(
        "<svg/>",
        "Icon",
        &SynthesisOptions {
            framework: Framework::Angular,
            unit_tests: true,
            ..SynthesisOptions::default()
        },
    )
    .unwrap();
    assert!(angular.test_source.unwrap().contains("TestBed.createComponent(Icon)"));
}

#[test]
fn test_missing_input() {
    let opts = SynthesisOptions::default();
    assert_eq!(
        synthesize("<svg/>", "  ", &opts),
        Err(SynthesisError::MissingInput("component name"))
    );
    assert_eq!(
        synthesize(" \n ", "Icon", &opts),
        Err(SynthesisError::MissingInput("markup"))
    );
}

#[test]
fn test_prenormalized_markup_gives_same_output() {
    let raw = "<?xml version=\"1.0\"?><svg class=\"a\" stroke-width=\"2\"><rect/></svg>";
    let opts = SynthesisOptions::default();
    assert_eq!(
        synthesize(raw, "Icon", &opts).unwrap(),
        synthesize(&normalize(raw), "Icon", &opts).unwrap()
    );
}
