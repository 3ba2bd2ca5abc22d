//! Gate configuration
//!
//! Resource paths and element ids default to the ones the documentation
//! site ships with. From JavaScript the config is a plain object with
//! camelCase keys; any key left out keeps its default.

use serde::Deserialize;

pub const CREDENTIAL_PATH: &str = "/key.txt";
pub const CONTENT_PATH: &str = "/section-content-downloads.html";

pub const INPUT_ID: &str = "password-input";
pub const GATE_ID: &str = "password-gate-container";
pub const CONTENT_ID: &str = "protected-content";
pub const ERROR_ID: &str = "password-error";

pub const FAILURE_MESSAGE: &str = "Incorrect password. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GateConfig {
    /// Path of the plaintext password file.
    pub credential_path: String,
    /// Path of the HTML fragment revealed on success.
    pub content_path: String,
    pub input_id: String,
    pub gate_id: String,
    pub content_id: String,
    pub error_id: String,
    /// Text shown when the entered password does not match.
    pub failure_message: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            credential_path: CREDENTIAL_PATH.to_string(),
            content_path: CONTENT_PATH.to_string(),
            input_id: INPUT_ID.to_string(),
            gate_id: GATE_ID.to_string(),
            content_id: CONTENT_ID.to_string(),
            error_id: ERROR_ID.to_string(),
            failure_message: FAILURE_MESSAGE.to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl GateConfig {
    /// Decode an options object passed from JavaScript.
    /// `undefined` and `null` give the defaults.
    pub fn from_js(options: wasm_bindgen::JsValue) -> crate::error::Result<Self> {
        if options.is_undefined() || options.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| crate::error::GateError::Config(e.to_string()))
    }
}
