//! Error types for the password gate
//!
//! A wrong password is not an error: it is handled locally and reported as
//! [`UnlockOutcome::Rejected`](crate::controller::UnlockOutcome::Rejected).
//! Everything here is a failure the caller has to decide how to surface.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GateError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// The request could not be issued or the network failed.
    #[error("fetch {path} failed: {reason}")]
    Fetch { path: String, reason: String },

    /// A response arrived with a non-2xx status.
    #[error("fetch {path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    /// The response body could not be read as text.
    #[error("reading body of {path} failed: {reason}")]
    Body { path: String, reason: String },

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("invalid gate options: {0}")]
    Config(String),
}

impl GateError {
    /// True for failures on the network side (request, status, body).
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            GateError::Fetch { .. } | GateError::Status { .. } | GateError::Body { .. }
        )
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GateError> for wasm_bindgen::JsValue {
    fn from(err: GateError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
