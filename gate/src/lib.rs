//! Doc Gate - client-side password gate for static documentation (browser WASM)
//!
//! Fetches a plaintext key file, compares it with what the visitor typed and,
//! on a match, fetches an HTML fragment and swaps it in for the prompt.
//!
//! This hides content from casual readers only. The key file is public to
//! anyone who requests it; nothing here is a security boundary.
//!
//! From the page:
//! - `checkPassword()`: one attempt with the default paths and element ids
//! - `new PasswordGate(options).attemptUnlock()`: same, with configured ids

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod fingerprint;

#[cfg(target_arch = "wasm32")]
pub mod browser;

// Re-export main types
pub use config::GateConfig;
pub use controller::{GateController, UnlockOutcome};
pub use dom::{ContentRegion, GateElements, MessageDisplay, PasswordInput, Region};
pub use error::GateError;
pub use fetch::TextFetcher;

#[cfg(target_arch = "wasm32")]
pub use entry::{check_password, PasswordGate};

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::browser::{browser_gate, BrowserGate};
    use crate::config::GateConfig;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        // A host page may have installed a subscriber already
        let _ = tracing_wasm::try_set_as_global_default();
    }

    /// One unlock attempt with the site defaults.
    ///
    /// Resolves to `true` when unlocked, `false` on a wrong password.
    /// Network and DOM failures reject the promise.
    ///
    /// All four default elements must exist, `#password-error` included,
    /// even on pages that never show a failure message: a missing one
    /// rejects with `element #password-error not found` before anything
    /// is fetched.
    #[wasm_bindgen(js_name = checkPassword)]
    pub async fn check_password() -> Result<bool, JsValue> {
        let gate = browser_gate(GateConfig::default())?;
        run(&gate).await
    }

    /// A gate bound to configured paths and element ids.
    #[wasm_bindgen]
    pub struct PasswordGate {
        inner: Rc<BrowserGate>,
    }

    #[wasm_bindgen]
    impl PasswordGate {
        /// `options` is an optional object with camelCase `GateConfig` keys.
        #[wasm_bindgen(constructor)]
        pub fn new(options: JsValue) -> Result<PasswordGate, JsValue> {
            let config = GateConfig::from_js(options)?;
            Ok(PasswordGate {
                inner: Rc::new(browser_gate(config)?),
            })
        }

        /// Returns a promise; overlapping calls are not serialized.
        #[wasm_bindgen(js_name = attemptUnlock)]
        pub fn attempt_unlock(&self) -> js_sys::Promise {
            let gate = Rc::clone(&self.inner);
            wasm_bindgen_futures::future_to_promise(async move {
                run(&gate).await.map(JsValue::from)
            })
        }

        #[wasm_bindgen(getter)]
        pub fn unlocked(&self) -> bool {
            self.inner.elements().is_unlocked()
        }
    }

    async fn run(gate: &BrowserGate) -> Result<bool, JsValue> {
        match gate.attempt_unlock().await {
            Ok(outcome) => Ok(outcome.is_unlocked()),
            Err(err) => {
                tracing::error!(%err, "password gate failed");
                Err(err.into())
            }
        }
    }
}
