use crate::context::CompilerContext;
use crate::normalize::{html_attribute_name, to_html_dialect};
use crate::props::js_string;
use crate::synthesize::ComponentParts;
use heck::ToKebabCase;

/// Escape text for an inline template literal
fn template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Emit a standalone component class with an inline template
pub fn render(ctx: &CompilerContext, parts: &ComponentParts) {
    let name = parts.name;
    let typed = ctx.options.typescript;
    let mut root = parts.root.clone();
    root.map_markup(to_html_dialect);

    if ctx.options.pass_props {
        for prop in &parts.contract.props {
            root.push_attribute(&format!(
                "[attr.{}]=\"{}\"",
                html_attribute_name(prop.name),
                prop.name
            ));
        }
    }

    if ctx.options.pass_props {
        ctx.add_line("import { Component, Input } from '@angular/core';");
    } else {
        ctx.add_line("import { Component } from '@angular/core';");
    }
    ctx.add_line("");

    ctx.add_line("@Component({");
    ctx.indent();
    ctx.add_line(&format!("selector: 'app-{}',", name.to_kebab_case()));
    ctx.add_line("template: `");
    ctx.indent();
    ctx.add_block(&template_literal(&root.render()));
    ctx.dedent();
    ctx.add_line("`,");
    ctx.add_line("standalone: true,");
    ctx.dedent();
    ctx.add_line("})");

    if ctx.options.pass_props {
        ctx.add_line(&format!("export class {} {{", name));
        ctx.indent();
        for prop in &parts.contract.props {
            let member = match (typed, &prop.default) {
                (true, Some(default)) => format!(
                    "{}: {} = {};",
                    prop.name,
                    prop.kind.typescript(),
                    js_string(default)
                ),
                (true, None) => format!("{}?: {};", prop.name, prop.kind.typescript()),
                (false, Some(default)) => format!("{} = {};", prop.name, js_string(default)),
                (false, None) => format!("{};", prop.name),
            };
            ctx.add_line(&format!("@Input() {}", member));
        }
        ctx.dedent();
        ctx.add_line("}");
    } else {
        ctx.add_line(&format!("export class {} {{}}", name));
    }

    ctx.add_line("");
    ctx.add_line(&format!("export default {};", name));
}
