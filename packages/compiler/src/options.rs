use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target UI framework
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    React,
    Vue,
    Angular,
    Svelte,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
            Framework::Svelte => "svelte",
        }
    }

    /// Whether component markup is written in JSX (as opposed to an HTML template)
    pub fn uses_jsx(&self) -> bool {
        matches!(self, Framework::React)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "react" => Ok(Framework::React),
            "vue" => Ok(Framework::Vue),
            "angular" => Ok(Framework::Angular),
            "svelte" => Ok(Framework::Svelte),
            other => Err(format!("Unsupported framework: {}", other)),
        }
    }
}

/// Styling strategy for the stylesheet artifact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Styling {
    #[default]
    Css,
    Scss,
    StyledComponents,
    Tailwind,
}

impl Styling {
    pub fn as_str(&self) -> &'static str {
        match self {
            Styling::Css => "css",
            Styling::Scss => "scss",
            Styling::StyledComponents => "styled-components",
            Styling::Tailwind => "tailwind",
        }
    }
}

impl fmt::Display for Styling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Styling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(Styling::Css),
            "scss" | "sass" => Ok(Styling::Scss),
            "styled-components" | "styled" => Ok(Styling::StyledComponents),
            "tailwind" => Ok(Styling::Tailwind),
            other => Err(format!("Unsupported styling: {}", other)),
        }
    }
}

/// Options for one synthesis pass
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisOptions {
    pub framework: Framework,
    /// Emit type annotations and a types artifact
    pub typescript: bool,
    pub styling: Styling,
    /// Expose the root svg attributes as component props
    pub pass_props: bool,
    /// Add `role="img"` and an `aria-label` to the root svg
    pub accessible: bool,
    /// Stylesheet body to use instead of the generated default
    pub style_body: Option<String>,
    /// Emit a render smoke test
    pub unit_tests: bool,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            framework: Framework::React,
            typescript: true,
            styling: Styling::Css,
            pass_props: true,
            accessible: false,
            style_body: None,
            unit_tests: false,
        }
    }
}

/// Output of one synthesis pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifactSet {
    pub component_name: String,
    pub component_source: String,
    pub style_source: String,
    pub types_source: Option<String>,
    pub test_source: Option<String>,
    pub framework: Framework,
    pub typescript: bool,
    pub styling: Styling,
}

impl GeneratedArtifactSet {
    fn script_extension(&self) -> &'static str {
        if self.typescript {
            "ts"
        } else {
            "js"
        }
    }

    pub fn component_file_name(&self) -> String {
        let name = &self.component_name;
        match self.framework {
            Framework::React if self.typescript => format!("{}.tsx", name),
            Framework::React => format!("{}.jsx", name),
            Framework::Vue => format!("{}.vue", name),
            Framework::Angular => format!("{}.component.ts", name),
            Framework::Svelte => format!("{}.svelte", name),
        }
    }

    pub fn style_file_name(&self) -> String {
        let name = &self.component_name;
        match self.styling {
            Styling::Css | Styling::Tailwind => format!("{}.css", name),
            Styling::Scss => format!("{}.scss", name),
            Styling::StyledComponents => format!("{}.styles.{}", name, self.script_extension()),
        }
    }

    pub fn types_file_name(&self) -> String {
        format!("{}.types.ts", self.component_name)
    }

    pub fn test_file_name(&self) -> String {
        let extension = match (self.framework, self.typescript) {
            (Framework::React, true) => "tsx",
            (Framework::React, false) => "jsx",
            _ => self.script_extension(),
        };
        format!("{}.test.{}", self.component_name, extension)
    }
}
