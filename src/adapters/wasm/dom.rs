use crate::domain::alert::error::AlertError;
use crate::ports::{DocumentPort, ElementPort};
use web_sys::{Document, Element};

/// Element lookup over the live DOM of the current window.
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    /// Binds to the current window's document. Worker scopes have no
    /// document, so this fails there.
    pub fn new() -> Result<Self, AlertError> {
        let window = web_sys::window().ok_or(AlertError::DocumentUnavailable)?;
        let document = window.document().ok_or(AlertError::DocumentUnavailable)?;
        Ok(Self { document })
    }
}

impl DocumentPort for DomDocument {
    type Element = DomElement;

    fn find(&self, selector: &str) -> Result<Option<DomElement>, AlertError> {
        self.document
            .query_selector(selector)
            .map(|element| element.map(DomElement::new))
            .map_err(|_| AlertError::invalid_selector(selector))
    }
}

/// Handle to a live DOM element.
#[derive(Debug, Clone)]
pub struct DomElement {
    element: Element,
}

impl DomElement {
    fn new(element: Element) -> Self {
        Self { element }
    }

    /// The wrapped `web_sys` element, for adapters that need the raw handle.
    pub(crate) fn raw(&self) -> &Element {
        &self.element
    }
}

impl ElementPort for DomElement {
    fn find(&self, selector: &str) -> Result<Option<Self>, AlertError> {
        self.element
            .query_selector(selector)
            .map(|element| element.map(DomElement::new))
            .map_err(|_| AlertError::invalid_selector(selector))
    }

    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn text(&self) -> Option<String> {
        self.element.text_content()
    }
}
