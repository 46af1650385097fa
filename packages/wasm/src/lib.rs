use figcode_compiler::{synthesize as synthesize_component, Framework, SynthesisOptions};
use figcode_metrics::generate_report;
use figcode_validator::{validate as validate_source, Language};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct SynthesisResult {
    component: String,
    styles: String,
    types: Option<String>,
}

#[wasm_bindgen]
impl SynthesisResult {
    #[wasm_bindgen(getter)]
    pub fn component(&self) -> String {
        self.component.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn styles(&self) -> String {
        self.styles.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn types(&self) -> Option<String> {
        self.types.clone()
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Validate source text and return the report as JSON
#[wasm_bindgen(js_name = validate)]
pub fn validate_js(source: &str, language: &str) -> Result<String, JsValue> {
    let language: Language = language.parse().map_err(|e: String| JsValue::from_str(&e))?;
    to_json(&validate_source(source, language))
}

/// Generate component, stylesheet and types from an SVG fragment
#[wasm_bindgen(js_name = synthesize)]
pub fn synthesize_js(
    markup: &str,
    name: &str,
    framework: &str,
    typescript: bool,
) -> Result<SynthesisResult, JsValue> {
    let framework: Framework = framework.parse().map_err(|e: String| JsValue::from_str(&e))?;
    let options = SynthesisOptions {
        framework,
        typescript,
        ..SynthesisOptions::default()
    };

    let artifacts = synthesize_component(markup, name, &options)
        .map_err(|e| JsValue::from_str(&format!("Synthesis error: {}", e)))?;

    Ok(SynthesisResult {
        component: artifacts.component_source,
        styles: artifacts.style_source,
        types: artifacts.types_source,
    })
}

/// Code metrics for component source as JSON
#[wasm_bindgen(js_name = metrics)]
pub fn metrics_js(source: &str) -> Result<String, JsValue> {
    to_json(&generate_report(source))
}

/// SVG extracted from design file JSON
#[wasm_bindgen(js_name = extract)]
pub fn extract_js(design_json: &str) -> Result<String, JsValue> {
    let raw: serde_json::Value = serde_json::from_str(design_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid design JSON: {}", e)))?;
    Ok(figcode_design::extract(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><rect x="2" y="2" width="20" height="20"/></svg>"#;

    #[test]
    fn test_synthesize_react() {
        let result = synthesize_js(MARKUP, "Square", "react", true);
        assert!(result.is_ok());

        let generated = result.unwrap();
        assert!(generated.component().contains("Square"));
        assert!(generated.styles().contains(".square"));
        assert!(generated.types().is_some());
    }

    #[test]
    fn test_synthesize_without_types() {
        let generated = synthesize_js(MARKUP, "Square", "vue", false).unwrap();
        assert!(generated.component().contains("<template>"));
        assert!(generated.types().is_none());
    }

    #[test]
    fn test_validate_and_metrics_return_json() {
        let report = validate_js(".a{colr:#fff}", "css").unwrap();
        let report: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(report["stats"]["totalErrors"], 1);

        let metrics = metrics_js("import React from 'react';").unwrap();
        let metrics: serde_json::Value = serde_json::from_str(&metrics).unwrap();
        assert_eq!(metrics["bundle"]["modules"], 1);
    }

    #[test]
    fn test_extract() {
        let svg = extract_js(r#"{"document":{"children":[]}}"#).unwrap();
        assert_eq!(svg, figcode_design::PLACEHOLDER_SVG);
    }
}
