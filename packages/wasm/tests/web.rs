//! Binding tests run in a JS host with `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use figcode_wasm::{extract_js, metrics_js, synthesize_js, validate_js};
use wasm_bindgen_test::*;

const MARKUP: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10"/></svg>"#;

#[wasm_bindgen_test]
fn validate_reports_json() {
    let report = validate_js("const t = <p>Don't</p>;\n", "tsx").unwrap();
    let report: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(report["errors"].as_array().map(Vec::len), Some(0));
    assert_eq!(report["stats"]["totalErrors"], 0);
}

#[wasm_bindgen_test]
fn validate_rejects_unknown_language() {
    let err = validate_js("a {}", "cobol").unwrap_err();
    assert!(err.as_string().is_some());
}

#[wasm_bindgen_test]
fn synthesize_svelte() {
    let generated = synthesize_js(MARKUP, "Dot", "svelte", true).unwrap();
    assert!(generated.component().contains("<script lang=\"ts\">"));
    assert!(generated.types().is_some());
}

#[wasm_bindgen_test]
fn synthesize_rejects_unknown_framework() {
    assert!(synthesize_js(MARKUP, "Dot", "ember", false).is_err());
    assert!(synthesize_js("", "Dot", "react", false).is_err());
}

#[wasm_bindgen_test]
fn metrics_report_json() {
    let metrics = metrics_js("export const Dot = () => <svg/>;").unwrap();
    let metrics: serde_json::Value = serde_json::from_str(&metrics).unwrap();
    assert!(metrics["complexity"].as_u64().is_some());
}

#[wasm_bindgen_test]
fn extract_invalid_json_is_an_error() {
    assert!(extract_js("{").is_err());
}
