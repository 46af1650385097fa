mod angular;
mod context;
mod error;
mod normalize;
mod options;
mod props;
mod react;
mod scaffold;
mod styles;
mod svelte;
mod synthesize;
mod types;
mod vue;

pub use context::CompilerContext;
pub use error::SynthesisError;
pub use normalize::{html_attribute_name, jsx_attribute_name, normalize, to_html_dialect};
pub use options::{Framework, GeneratedArtifactSet, Styling, SynthesisOptions};
pub use props::{Prop, PropKind, PropsContract, RootSvg};
pub use synthesize::{synthesize, ComponentParts};
pub use types::TypeScriptEmitter;

#[cfg(test)]
mod tests;
