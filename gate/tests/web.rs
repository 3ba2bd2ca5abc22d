//! Browser tests for the web-sys bindings
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::collections::HashMap;

use async_trait::async_trait;
use doc_gate::browser::{resolve_elements, BrowserFetcher};
use doc_gate::config::{ERROR_ID, FAILURE_MESSAGE, INPUT_ID};
use doc_gate::{
    check_password, GateConfig, GateController, GateError, PasswordGate, PasswordInput, Region,
    TextFetcher, UnlockOutcome,
};
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Serves fixed bodies so the DOM side can be checked without a server.
struct StaticFetcher(HashMap<&'static str, &'static str>);

#[async_trait(?Send)]
impl TextFetcher for StaticFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, GateError> {
        self.0
            .get(path)
            .map(|body| body.to_string())
            .ok_or_else(|| GateError::Status {
                path: path.to_string(),
                status: 404,
            })
    }
}

fn site(expected: &'static str) -> StaticFetcher {
    StaticFetcher(HashMap::from([
        ("/key.txt", expected),
        ("/section-content-downloads.html", "<ul><li>manual.pdf</li></ul>"),
    ]))
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh gate markup under a unique prefix so tests don't share elements.
fn mount(prefix: &str) -> GateConfig {
    mount_with(GateConfig {
        input_id: format!("{prefix}-input"),
        gate_id: format!("{prefix}-gate"),
        content_id: format!("{prefix}-content"),
        error_id: format!("{prefix}-error"),
        ..GateConfig::default()
    })
}

/// Markup under the site's default ids, added once per page.
fn mount_defaults() {
    if document().get_element_by_id(INPUT_ID).is_none() {
        mount_with(GateConfig::default());
    }
}

fn mount_with(config: GateConfig) -> GateConfig {
    let doc = document();
    let body = doc.body().unwrap();

    let gate: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    gate.set_id(&config.gate_id);

    let input: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
    input.set_id(&config.input_id);
    input.set_type("password");
    gate.append_child(&input).unwrap();

    let error = doc.create_element("p").unwrap();
    error.set_id(&config.error_id);
    gate.append_child(&error).unwrap();

    let content: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    content.set_id(&config.content_id);
    content.style().set_property("display", "none").unwrap();

    body.append_child(&gate).unwrap();
    body.append_child(&content).unwrap();
    config
}

/// JS options object from camelCase key/value pairs.
fn options(pairs: &[(&str, &str)]) -> JsValue {
    let object = Object::new();
    for (key, value) in pairs {
        Reflect::set(&object, &JsValue::from_str(key), &JsValue::from_str(value)).unwrap();
    }
    object.into()
}

fn error_message(err: JsValue) -> String {
    err.dyn_into::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_default()
}

fn type_password(config: &GateConfig, text: &str) {
    document()
        .get_element_by_id(&config.input_id)
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .set_value(text);
}

#[wasm_bindgen_test]
async fn test_unlock_reveals_fragment() {
    let config = mount("unlock");
    type_password(&config, "secret123");

    let elements = resolve_elements(&document(), &config).unwrap();
    assert!(!elements.is_unlocked());

    let gate = GateController::new(config, site("secret123"), elements);
    let outcome = gate.attempt_unlock().await.unwrap();

    assert_eq!(outcome, UnlockOutcome::Unlocked);
    assert!(gate.elements().content.is_visible());
    assert!(!gate.elements().gate.is_visible());
    assert_eq!(gate.elements().content.0.inner_html(), "<ul><li>manual.pdf</li></ul>");
}

#[wasm_bindgen_test]
async fn test_wrong_password_shows_message() {
    let config = mount("reject");
    type_password(&config, "Secret123");

    let elements = resolve_elements(&document(), &config).unwrap();
    let gate = GateController::new(config, site("secret123"), elements);
    let outcome = gate.attempt_unlock().await.unwrap();

    assert_eq!(outcome, UnlockOutcome::Rejected);
    assert_eq!(gate.elements().input.value(), "");
    assert_eq!(
        gate.elements().error.0.text_content().unwrap_or_default(),
        FAILURE_MESSAGE
    );
    assert!(gate.elements().gate.is_visible());
    assert!(!gate.elements().content.is_visible());
}

#[wasm_bindgen_test]
fn test_missing_element() {
    let config = GateConfig {
        gate_id: "no-such-gate".to_string(),
        ..mount("missing")
    };

    match resolve_elements(&document(), &config) {
        Err(GateError::MissingElement(id)) => assert_eq!(id, "no-such-gate"),
        other => panic!("expected MissingElement, got {:?}", other.err()),
    }
}

#[wasm_bindgen_test]
async fn test_fetch_missing_resource() {
    let err = BrowserFetcher
        .fetch_text("/doc-gate-test-no-such-file.txt")
        .await
        .unwrap_err();
    assert!(err.is_network());
}

#[wasm_bindgen_test]
async fn test_unreachable_key_file_is_an_error() {
    let config = GateConfig {
        credential_path: "/doc-gate-test-no-such-key.txt".to_string(),
        ..mount("nokey")
    };
    let error_id = config.error_id.clone();
    type_password(&config, "secret123");

    let gate = doc_gate::browser::browser_gate(config).unwrap();
    let err = gate.attempt_unlock().await.unwrap_err();

    assert!(err.is_network());
    assert!(!gate.elements().is_unlocked());
    let message = document().get_element_by_id(&error_id).unwrap().text_content();
    assert_eq!(message.unwrap_or_default(), "");
}

#[wasm_bindgen_test]
fn test_options_decoding() {
    assert_eq!(GateConfig::from_js(JsValue::UNDEFINED).unwrap(), GateConfig::default());
    assert_eq!(GateConfig::from_js(JsValue::NULL).unwrap(), GateConfig::default());

    let config = GateConfig::from_js(options(&[("failureMessage", "Wrong key")])).unwrap();
    assert_eq!(config.failure_message, "Wrong key");
    assert_eq!(config.credential_path, "/key.txt");

    match GateConfig::from_js(JsValue::from(3)) {
        Err(GateError::Config(_)) => {}
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[wasm_bindgen_test]
async fn test_password_gate_default_options() {
    mount_defaults();
    let gate = PasswordGate::new(JsValue::UNDEFINED).unwrap();
    assert!(!gate.unlocked());

    // The test server has no /key.txt
    let err = JsFuture::from(gate.attempt_unlock()).await.unwrap_err();
    assert!(error_message(err).contains("/key.txt"));
    assert!(!gate.unlocked());
}

#[wasm_bindgen_test]
async fn test_check_password_rejects_without_key_file() {
    mount_defaults();
    type_password(&GateConfig::default(), "secret123");

    let err = check_password().await.unwrap_err();

    assert!(error_message(err).contains("/key.txt"));
    let message = document().get_element_by_id(ERROR_ID).unwrap().text_content();
    assert_eq!(message.unwrap_or_default(), "");
}

#[wasm_bindgen_test]
async fn test_password_gate_configured_ids() {
    let config = mount("options");
    let gate = PasswordGate::new(options(&[
        ("inputId", config.input_id.as_str()),
        ("gateId", config.gate_id.as_str()),
        ("contentId", config.content_id.as_str()),
        ("errorId", config.error_id.as_str()),
        ("credentialPath", "/doc-gate-test-no-such-key.txt"),
    ]))
    .unwrap();

    let err = JsFuture::from(gate.attempt_unlock()).await.unwrap_err();

    assert!(error_message(err).contains("/doc-gate-test-no-such-key.txt"));
    assert!(!gate.unlocked());
}

#[wasm_bindgen_test]
fn test_password_gate_missing_element() {
    mount_defaults();
    let err = PasswordGate::new(options(&[("gateId", "no-such-gate")]))
        .err()
        .unwrap();
    assert_eq!(error_message(err), "element #no-such-gate not found");
}
