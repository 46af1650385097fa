use crate::context::CompilerContext;
use crate::normalize::{html_attribute_name, to_html_dialect};
use crate::props::js_string;
use crate::synthesize::ComponentParts;

pub fn render(ctx: &CompilerContext, parts: &ComponentParts) {
    let typed = ctx.options.typescript;
    let mut root = parts.root.clone();
    root.map_markup(to_html_dialect);

    ctx.add_line(&format!("<!-- @component {} -->", parts.name));

    if ctx.options.pass_props {
        ctx.add_line(if typed { "<script lang=\"ts\">" } else { "<script>" });
        ctx.indent();
        for prop in &parts.contract.props {
            let default = prop
                .default
                .as_deref()
                .map(js_string)
                .unwrap_or_else(|| "undefined".to_string());
            let annotation = match (typed, &prop.default) {
                (false, _) => String::new(),
                (true, Some(_)) => format!(": {}", prop.kind.typescript()),
                (true, None) => format!(": {} | undefined", prop.kind.typescript()),
            };
            ctx.add_line(&format!("export let {}{} = {};", prop.name, annotation, default));

            root.push_attribute(&format!("{}={{{}}}", html_attribute_name(prop.name), prop.name));
        }
        ctx.dedent();
        ctx.add_line("</script>");

        root.push_attribute("{...$$restProps}");
    }

    ctx.add_line("");
    ctx.add_block(&root.render());
}
