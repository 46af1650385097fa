//! Render smoke tests. Imports assume the `src/components` + `src/__tests__`
//! layout the generation engine writes.

use crate::context::CompilerContext;
use crate::options::Framework;

pub fn compile_test(ctx: &CompilerContext, component_name: &str) {
    let name = component_name;

    match ctx.options.framework {
        Framework::React => {
            ctx.add_line("import React from 'react';");
            ctx.add_line("import { render } from '@testing-library/react';");
            ctx.add_line(&format!("import {} from '../components/{}';", name, name));
        }
        Framework::Vue => {
            ctx.add_line("import { render } from '@testing-library/vue';");
            ctx.add_line(&format!("import {} from '../components/{}.vue';", name, name));
        }
        Framework::Angular => {
            ctx.add_line("import { TestBed } from '@angular/core/testing';");
            ctx.add_line(&format!("import {{ {} }} from '../components/{}.component';", name, name));
        }
        Framework::Svelte => {
            ctx.add_line("import { render } from '@testing-library/svelte';");
            ctx.add_line(&format!("import {} from '../components/{}.svelte';", name, name));
        }
    }
    ctx.add_line("");

    ctx.add_line(&format!("describe('{}', () => {{", name));
    ctx.indent();

    match ctx.options.framework {
        Framework::Angular => {
            ctx.add_line("it('renders an svg', async () => {");
            ctx.indent();
            ctx.add_line(&format!(
                "await TestBed.configureTestingModule({{ imports: [{}] }}).compileComponents();",
                name
            ));
            ctx.add_line(&format!("const fixture = TestBed.createComponent({});", name));
            ctx.add_line("fixture.detectChanges();");
            ctx.add_line("expect(fixture.nativeElement.querySelector('svg')).not.toBeNull();");
        }
        framework => {
            ctx.add_line("it('renders an svg', () => {");
            ctx.indent();
            let target = if framework == Framework::React {
                format!("<{} />", name)
            } else {
                name.to_string()
            };
            ctx.add_line(&format!("const {{ container }} = render({});", target));
            ctx.add_line("expect(container.querySelector('svg')).not.toBeNull();");
        }
    }

    ctx.dedent();
    ctx.add_line("});");
    ctx.dedent();
    ctx.add_line("});");
}
