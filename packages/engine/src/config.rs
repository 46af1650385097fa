use figcode_compiler::{Framework, Styling, SynthesisOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Component library the generated code should lean on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentLibrary {
    #[default]
    Custom,
    Mui,
    Antd,
    Chakra,
}

impl ComponentLibrary {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentLibrary::Custom => "custom",
            ComponentLibrary::Mui => "mui",
            ComponentLibrary::Antd => "antd",
            ComponentLibrary::Chakra => "chakra",
        }
    }
}

impl fmt::Display for ComponentLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentLibrary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "custom" => Ok(ComponentLibrary::Custom),
            "mui" => Ok(ComponentLibrary::Mui),
            "antd" => Ok(ComponentLibrary::Antd),
            "chakra" => Ok(ComponentLibrary::Chakra),
            other => Err(format!("Unsupported component library: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    A,
    #[default]
    AA,
    AAA,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationConfig {
    pub treeshaking: bool,
    pub bundle_analysis: bool,
    pub code_splitting: bool,
    pub lazy_loading: bool,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            treeshaking: true,
            bundle_analysis: false,
            code_splitting: false,
            lazy_loading: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilityConfig {
    pub wcag_level: WcagLevel,
    pub screen_reader: bool,
    pub keyboard_navigation: bool,
    pub color_contrast: bool,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            wcag_level: WcagLevel::AA,
            screen_reader: true,
            keyboard_navigation: true,
            color_contrast: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestingConfig {
    pub unit_tests: bool,
    pub integration_tests: bool,
    pub e2e_tests: bool,
    pub visual_regression: bool,
}

/// Options for one generation run. Every missing field falls back to its
/// default when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    pub framework: Framework,
    pub typescript: bool,
    pub styling: Styling,
    pub component_library: ComponentLibrary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    pub pass_props: bool,
    pub optimization: OptimizationConfig,
    pub accessibility: AccessibilityConfig,
    pub testing: TestingConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            framework: Framework::React,
            typescript: true,
            styling: Styling::Css,
            component_library: ComponentLibrary::Custom,
            component_name: None,
            pass_props: true,
            optimization: OptimizationConfig::default(),
            accessibility: AccessibilityConfig::default(),
            testing: TestingConfig::default(),
        }
    }
}

impl GenerationConfig {
    pub fn to_synthesis_options(&self) -> SynthesisOptions {
        SynthesisOptions {
            framework: self.framework,
            typescript: self.typescript,
            styling: self.styling,
            pass_props: self.pass_props,
            accessible: self.accessibility.screen_reader,
            style_body: None,
            unit_tests: self.testing.unit_tests,
        }
    }
}
