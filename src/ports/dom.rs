use crate::domain::alert::error::AlertError;

/// Handle to a single element of a document tree.
///
/// Handles are cheap to clone and refer to the same underlying element.
pub trait ElementPort: Clone {
    /// Finds the first descendant matching `selector`.
    ///
    /// Fails only when the selector itself is unusable; a selector that
    /// matches nothing is `Ok(None)`.
    fn find(&self, selector: &str) -> Result<Option<Self>, AlertError>;

    /// Replaces the element's text content. The text is never interpreted
    /// as markup.
    fn set_text(&self, text: &str);

    /// Current text content of the element.
    fn text(&self) -> Option<String>;
}

/// querySelector-style single-element lookup against a document.
pub trait DocumentPort {
    type Element: ElementPort;

    /// Resolves `selector` to the first matching element, if any.
    fn find(&self, selector: &str) -> Result<Option<Self::Element>, AlertError>;
}
