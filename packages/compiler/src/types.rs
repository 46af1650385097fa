//! Type declarations for the generated component.

use crate::context::CompilerContext;
use crate::options::Framework;
use crate::props::{Prop, PropsContract};
use crate::synthesize::ComponentParts;

/// Emits TypeScript declarations for a props contract
#[derive(Debug, Default)]
pub struct TypeScriptEmitter;

impl TypeScriptEmitter {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_property(&self, prop: &Prop) -> String {
        format!("{}?: {}", prop.name, prop.kind.typescript())
    }

    /// `interface NameProps { … }`, optionally exported and open to extra keys
    pub fn generate_interface(
        &self,
        name: &str,
        contract: &PropsContract,
        exported: bool,
        index_signature: bool,
    ) -> String {
        let mut parts = Vec::new();
        let export = if exported { "export " } else { "" };
        parts.push(format!("{}interface {} {{", export, name));

        for prop in &contract.props {
            parts.push(format!("  {};", self.generate_property(prop)));
        }
        if index_signature {
            parts.push("  [key: string]: any;".to_string());
        }

        parts.push("}".to_string());
        parts.join("\n")
    }
}

/// Emit the `.types.ts` artifact
pub fn compile_definitions(ctx: &CompilerContext, parts: &ComponentParts) {
    let name = parts.name;
    let props_name = parts.props_name();
    let emitter = TypeScriptEmitter::new();
    let framework = ctx.options.framework;

    match framework {
        Framework::React => ctx.add_line("import React from 'react';"),
        Framework::Vue => ctx.add_line("import type { DefineComponent } from 'vue';"),
        Framework::Svelte => ctx.add_line("import type { SvelteComponent } from 'svelte';"),
        Framework::Angular => {}
    }
    if framework != Framework::Angular {
        ctx.add_line("");
    }

    ctx.add_block(&emitter.generate_interface(
        &props_name,
        &parts.contract,
        true,
        framework == Framework::React,
    ));
    ctx.add_line("");

    match framework {
        Framework::React => {
            ctx.add_line(&format!("export declare const {}: React.FC<{}>;", name, props_name));
        }
        Framework::Vue => {
            ctx.add_line(&format!(
                "export declare const {}: DefineComponent<{}>;",
                name, props_name
            ));
        }
        Framework::Angular => {
            ctx.add_line(&format!("export declare class {} {{", name));
            ctx.indent();
            for prop in &parts.contract.props {
                ctx.add_line(&format!("{};", emitter.generate_property(prop)));
            }
            ctx.dedent();
            ctx.add_line("}");
        }
        Framework::Svelte => {
            ctx.add_line(&format!(
                "export declare class {} extends SvelteComponent<{}> {{}}",
                name, props_name
            ));
        }
    }
}
