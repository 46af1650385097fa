use crate::context::CompilerContext;
use crate::props::js_string;
use crate::synthesize::ComponentParts;
use crate::types::TypeScriptEmitter;

/// Emit a function component rendering the svg as JSX
pub fn render(ctx: &CompilerContext, parts: &ComponentParts) {
    let name = parts.name;
    let typed = ctx.options.typescript;

    ctx.add_line("import React from 'react';");
    ctx.add_line("");

    if typed {
        let emitter = TypeScriptEmitter::new();
        ctx.add_block(&emitter.generate_interface(&parts.props_name(), &parts.contract, false, true));
        ctx.add_line("");
    }

    let annotation = if typed {
        format!(": React.FC<{}>", parts.props_name())
    } else {
        String::new()
    };

    let mut root = parts.root.clone();
    let params = if ctx.options.pass_props {
        let mut destructured = Vec::new();
        for prop in &parts.contract.props {
            match &prop.default {
                Some(default) => destructured.push(format!("{} = {}", prop.name, js_string(default))),
                None => destructured.push(prop.name.to_string()),
            }
            root.push_attribute(&format!("{0}={{{0}}}", prop.name));
        }
        root.push_attribute("{...props}");
        destructured.push("...props".to_string());
        format!("{{ {} }}", destructured.join(", "))
    } else {
        String::new()
    };

    ctx.add_line(&format!("const {}{} = ({}) => {{", name, annotation, params));
    ctx.indent();
    ctx.add_line("return (");
    ctx.indent();
    ctx.add_block(&root.render());
    ctx.dedent();
    ctx.add_line(");");
    ctx.dedent();
    ctx.add_line("};");
    ctx.add_line("");
    ctx.add_line(&format!("export default {};", name));
}
