//! Browser bindings
//!
//! web-sys implementations of the gate's seams: `window.fetch` for
//! [`TextFetcher`], page elements for the DOM traits. Visibility is driven
//! through the inline `display` style, the same switch the site's
//! stylesheet uses to hide the protected region initially.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, HtmlInputElement, Request, RequestInit, RequestMode, Response};

use crate::config::GateConfig;
use crate::controller::GateController;
use crate::dom::{ContentRegion, GateElements, MessageDisplay, PasswordInput, Region};
use crate::error::{GateError, Result};
use crate::fetch::TextFetcher;

pub type BrowserElements = GateElements<BrowserInput, BrowserRegion, BrowserRegion, BrowserMessage>;

pub type BrowserGate =
    GateController<BrowserFetcher, BrowserInput, BrowserRegion, BrowserRegion, BrowserMessage>;

/// Build a gate on the current page from `config`.
pub fn browser_gate(config: GateConfig) -> Result<BrowserGate> {
    let elements = resolve_elements(&document()?, &config)?;
    Ok(GateController::new(config, BrowserFetcher, elements))
}

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| GateError::Dom("no document".to_string()))
}

/// Look up the four gate elements by the ids in `config`.
pub fn resolve_elements(document: &Document, config: &GateConfig) -> Result<BrowserElements> {
    Ok(GateElements::new(
        BrowserInput(element_by_id(document, &config.input_id)?),
        BrowserRegion(element_by_id(document, &config.gate_id)?),
        BrowserRegion(element_by_id(document, &config.content_id)?),
        BrowserMessage(element_by_id(document, &config.error_id)?),
    ))
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GateError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|el| GateError::Dom(format!("#{} is an unexpected <{}>", id, el.tag_name())))
}

/// Readable text for a rejected JS promise or thrown value.
fn js_reason(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// `window.fetch` GET, same origin, body read as text.
pub struct BrowserFetcher;

#[async_trait(?Send)]
impl TextFetcher for BrowserFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let fetch_err = |reason: String| GateError::Fetch {
            path: path.to_string(),
            reason,
        };
        let body_err = |reason: String| GateError::Body {
            path: path.to_string(),
            reason,
        };

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::SameOrigin);

        let request = Request::new_with_str_and_init(path, &opts)
            .map_err(|e| fetch_err(js_reason(&e)))?;

        let window = web_sys::window().ok_or_else(|| fetch_err("no window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| fetch_err(js_reason(&e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| fetch_err("response is not a Response".to_string()))?;

        if !resp.ok() {
            return Err(GateError::Status {
                path: path.to_string(),
                status: resp.status(),
            });
        }

        let text = JsFuture::from(resp.text().map_err(|e| body_err(js_reason(&e)))?)
            .await
            .map_err(|e| body_err(js_reason(&e)))?;

        text.as_string()
            .ok_or_else(|| body_err("body is not a string".to_string()))
    }
}

pub struct BrowserInput(pub HtmlInputElement);

impl PasswordInput for BrowserInput {
    fn value(&self) -> String {
        self.0.value()
    }

    fn clear(&self) -> Result<()> {
        self.0.set_value("");
        Ok(())
    }
}

pub struct BrowserRegion(pub HtmlElement);

impl BrowserRegion {
    fn set_display(&self, display: &str) -> Result<()> {
        self.0
            .style()
            .set_property("display", display)
            .map_err(|e| GateError::Dom(js_reason(&e)))
    }
}

impl Region for BrowserRegion {
    fn show(&self) -> Result<()> {
        self.set_display("block")
    }

    fn hide(&self) -> Result<()> {
        self.set_display("none")
    }

    fn is_visible(&self) -> bool {
        // Computed style so stylesheet rules count, not just inline ones
        let computed = web_sys::window()
            .and_then(|window| window.get_computed_style(&self.0).ok().flatten());
        let display = match computed {
            Some(style) => style.get_property_value("display"),
            None => self.0.style().get_property_value("display"),
        };
        display.map(|d| d != "none").unwrap_or(true)
    }
}

impl ContentRegion for BrowserRegion {
    fn set_html(&self, html: &str) -> Result<()> {
        self.0.set_inner_html(html);
        Ok(())
    }
}

pub struct BrowserMessage(pub HtmlElement);

impl MessageDisplay for BrowserMessage {
    fn set_text(&self, text: &str) -> Result<()> {
        self.0.set_text_content(Some(text));
        Ok(())
    }
}
