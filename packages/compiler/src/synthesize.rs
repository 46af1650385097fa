use crate::context::CompilerContext;
use crate::error::SynthesisError;
use crate::normalize::normalize;
use crate::options::{Framework, GeneratedArtifactSet, SynthesisOptions};
use crate::props::{PropsContract, RootSvg};
use crate::{angular, react, scaffold, styles, svelte, types, vue};
use heck::ToKebabCase;
use tracing::debug;

/// Normalized inputs shared by every framework template
#[derive(Debug, Clone)]
pub struct ComponentParts<'a> {
    pub name: &'a str,
    pub class_name: String,
    pub root: RootSvg,
    pub contract: PropsContract,
}

impl<'a> ComponentParts<'a> {
    pub fn new(markup: &str, name: &'a str, options: &SynthesisOptions) -> Self {
        let normalized = normalize(markup);
        let mut root = RootSvg::parse(&normalized).unwrap_or_else(|| RootSvg {
            attributes: " xmlns=\"http://www.w3.org/2000/svg\"".to_string(),
            self_closing: false,
            rest: format!("{}</svg>", normalized),
        });

        let class_name = name.to_kebab_case();
        let contract = PropsContract::from_root(&root, &class_name);

        if options.accessible && !root.has_attribute("role") {
            root.push_attribute(&format!("role=\"img\" aria-label=\"{}\"", name));
        }
        if options.pass_props {
            root.remove_attributes(contract.names());
        }

        Self {
            name,
            class_name,
            root,
            contract,
        }
    }

    pub fn props_name(&self) -> String {
        format!("{}Props", self.name)
    }
}

/// Generate component, stylesheet and optional types/test artifacts from an
/// SVG fragment
pub fn synthesize(
    markup: &str,
    component_name: &str,
    options: &SynthesisOptions,
) -> Result<GeneratedArtifactSet, SynthesisError> {
    let component_name = component_name.trim();
    if component_name.is_empty() {
        return Err(SynthesisError::MissingInput("component name"));
    }
    if markup.trim().is_empty() {
        return Err(SynthesisError::MissingInput("markup"));
    }

    let parts = ComponentParts::new(markup, component_name, options);
    debug!(
        component = component_name,
        framework = %options.framework,
        props = parts.contract.props.len(),
        "Synthesizing component"
    );

    let component = CompilerContext::new(options.clone());
    match options.framework {
        Framework::React => react::render(&component, &parts),
        Framework::Vue => vue::render(&component, &parts),
        Framework::Angular => angular::render(&component, &parts),
        Framework::Svelte => svelte::render(&component, &parts),
    }

    let stylesheet = CompilerContext::new(options.clone());
    styles::compile_stylesheet(&stylesheet, component_name, &parts.class_name);

    let types_source = options.typescript.then(|| {
        let ctx = CompilerContext::new(options.clone());
        types::compile_definitions(&ctx, &parts);
        ctx.get_output()
    });

    let test_source = options.unit_tests.then(|| {
        let ctx = CompilerContext::new(options.clone());
        scaffold::compile_test(&ctx, component_name);
        ctx.get_output()
    });

    Ok(GeneratedArtifactSet {
        component_name: component_name.to_string(),
        component_source: component.get_output(),
        style_source: stylesheet.get_output(),
        types_source,
        test_source,
        framework: options.framework,
        typescript: options.typescript,
        styling: options.styling,
    })
}
