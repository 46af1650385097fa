use crate::context::CompilerContext;
use crate::normalize::{html_attribute_name, to_html_dialect};
use crate::props::js_string;
use crate::synthesize::ComponentParts;

/// Emit a single-file component: template plus a `defineComponent` script
pub fn render(ctx: &CompilerContext, parts: &ComponentParts) {
    let typed = ctx.options.typescript;
    let mut root = parts.root.clone();
    root.map_markup(to_html_dialect);

    if ctx.options.pass_props {
        for prop in &parts.contract.props {
            root.push_attribute(&format!(":{}=\"{}\"", html_attribute_name(prop.name), prop.name));
        }
    }

    ctx.add_line("<template>");
    ctx.indent();
    ctx.add_block(&root.render());
    ctx.dedent();
    ctx.add_line("</template>");
    ctx.add_line("");

    if typed {
        ctx.add_line("<script lang=\"ts\">");
        ctx.add_line("import { defineComponent, PropType } from 'vue';");
    } else {
        ctx.add_line("<script>");
        ctx.add_line("import { defineComponent } from 'vue';");
    }
    ctx.add_line("");

    ctx.add_line("export default defineComponent({");
    ctx.indent();
    ctx.add_line(&format!("name: {},", js_string(parts.name)));

    if ctx.options.pass_props {
        ctx.add_line("props: {");
        ctx.indent();
        for prop in &parts.contract.props {
            let constructor = prop.kind.vue_constructor();
            let kind = if typed {
                format!("{} as PropType<{}>", constructor, prop.kind.typescript())
            } else {
                constructor.to_string()
            };
            let default = prop
                .default
                .as_deref()
                .map(js_string)
                .unwrap_or_else(|| "undefined".to_string());

            ctx.add_line(&format!("{}: {{", prop.name));
            ctx.indent();
            ctx.add_line(&format!("type: {},", kind));
            ctx.add_line(&format!("default: {},", default));
            ctx.dedent();
            ctx.add_line("},");
        }
        ctx.dedent();
        ctx.add_line("},");
    }

    ctx.dedent();
    ctx.add_line("});");
    ctx.add_line("</script>");
}
