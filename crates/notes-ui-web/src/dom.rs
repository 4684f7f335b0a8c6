#![forbid(unsafe_code)]

//! `web-sys` backed [`DocumentHost`].

use notes_ui_core::{DocumentHost, HostError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

fn js_error(err: &JsValue) -> HostError {
    HostError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// The page's `document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Resolve `window.document` from the global scope.
    pub fn from_window() -> Result<Self, HostError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(HostError::NoDocument)?;
        Ok(Self::new(document))
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl DocumentHost for WebDocument {
    type Node = HtmlElement;

    fn create_element(&mut self, tag: &str) -> Result<HtmlElement, HostError> {
        let element = self
            .document
            .create_element(tag)
            .map_err(|err| js_error(&err))?;
        element
            .dyn_into::<HtmlElement>()
            .map_err(|_| HostError::Js(format!("<{tag}> is not an HTML element")))
    }

    fn set_class_name(&mut self, node: &HtmlElement, class_name: &str) -> Result<(), HostError> {
        node.set_class_name(class_name);
        Ok(())
    }

    fn set_id(&mut self, node: &HtmlElement, id: &str) -> Result<(), HostError> {
        node.set_id(id);
        Ok(())
    }

    fn append_to_body(&mut self, node: &HtmlElement) -> Result<(), HostError> {
        let body = self.document.body().ok_or(HostError::NoBody)?;
        body.append_child(node).map_err(|err| js_error(&err))?;
        Ok(())
    }

    fn remove(&mut self, node: &HtmlElement) {
        node.remove();
    }

    fn set_display(&mut self, node: &HtmlElement, value: &str) -> Result<(), HostError> {
        node.style()
            .set_property("display", value)
            .map_err(|err| js_error(&err))
    }
}
