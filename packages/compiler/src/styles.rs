use crate::context::CompilerContext;
use crate::options::Styling;
use heck::ToUpperCamelCase;

/// Emit the stylesheet artifact for `class_name`. A caller supplied body is
/// passed through untouched.
pub fn compile_stylesheet(ctx: &CompilerContext, component_name: &str, class_name: &str) {
    if let Some(body) = &ctx.options.style_body {
        ctx.add(body);
        return;
    }

    match ctx.options.styling {
        Styling::Css => {
            ctx.add_line(&format!(".{} {{", class_name));
            ctx.indent();
            base_declarations(ctx);
            ctx.dedent();
            ctx.add_line("}");
            ctx.add_line("");
            ctx.add_line(&format!(".{} svg {{", class_name));
            ctx.indent();
            svg_declarations(ctx);
            ctx.dedent();
            ctx.add_line("}");
        }
        Styling::Scss => {
            ctx.add_line(&format!(".{} {{", class_name));
            ctx.indent();
            base_declarations(ctx);
            ctx.add_line("");
            ctx.add_line("svg {");
            ctx.indent();
            svg_declarations(ctx);
            ctx.dedent();
            ctx.add_line("}");
            ctx.add_line("");
            ctx.add_line("&:hover {");
            ctx.indent();
            ctx.add_line("opacity: 0.9;");
            ctx.dedent();
            ctx.add_line("}");
            ctx.dedent();
            ctx.add_line("}");
        }
        Styling::StyledComponents => {
            ctx.add_line("import styled from 'styled-components';");
            ctx.add_line("");
            ctx.add_line(&format!(
                "export const {}Wrapper = styled.span`",
                component_name.to_upper_camel_case()
            ));
            ctx.indent();
            base_declarations(ctx);
            ctx.add_line("");
            ctx.add_line("svg {");
            ctx.indent();
            svg_declarations(ctx);
            ctx.dedent();
            ctx.add_line("}");
            ctx.dedent();
            ctx.add_line("`;");
        }
        Styling::Tailwind => {
            ctx.add_line("@tailwind base;");
            ctx.add_line("@tailwind components;");
            ctx.add_line("@tailwind utilities;");
            ctx.add_line("");
            ctx.add_line(&format!(".{} {{", class_name));
            ctx.indent();
            ctx.add_line("@apply inline-block leading-none;");
            ctx.dedent();
            ctx.add_line("}");
        }
    }
}

fn base_declarations(ctx: &CompilerContext) {
    ctx.add_line("display: inline-block;");
    ctx.add_line("line-height: 0;");
}

fn svg_declarations(ctx: &CompilerContext) {
    ctx.add_line("max-width: 100%;");
    ctx.add_line("height: auto;");
}
