use crate::adapters::native::{MemoryDocument, MemoryElement, RecordingModal, RecordingToolkit};
use crate::domain::alert::error::AlertError;
use crate::domain::alert::operations;
use crate::domain::alert::types::{AlertBinding, AlertOptions};
use crate::platform::Platform;

/// Headless alert notifier over the in-memory document tree. Same
/// contract as the WASM facade, for native consumers and tests.
pub struct AlertNotifier {
    binding: AlertBinding<MemoryElement, RecordingModal>,
}

impl AlertNotifier {
    /// Binds to the container matching `selector`, with the conventional
    /// `.modal-body` message region.
    pub fn bind(
        document: &MemoryDocument,
        toolkit: &RecordingToolkit,
        selector: &str,
    ) -> Result<Self, AlertError> {
        Self::bind_with_options(document, toolkit, selector, AlertOptions::default())
    }

    pub fn bind_with_options(
        document: &MemoryDocument,
        toolkit: &RecordingToolkit,
        selector: &str,
        options: AlertOptions,
    ) -> Result<Self, AlertError> {
        let platform = Platform::new();
        let binding = operations::bind(&platform, document, toolkit, selector, options)?;
        Ok(Self { binding })
    }

    /// Sets the message body to `message` and requests the show transition.
    pub fn show(&self, message: &str) -> Result<(), AlertError> {
        let platform = Platform::new();
        operations::show(&platform, &self.binding, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{DocumentPort, ElementPort, ModalPort};

    #[test]
    fn test_bind_and_show() {
        let document = MemoryDocument::new();
        document.insert("#alertBox").append(".modal-body");
        let toolkit = RecordingToolkit::new();

        let alert = AlertNotifier::bind(&document, &toolkit, "#alertBox").unwrap();
        alert.show("Save failed").unwrap();

        let body = document
            .find("#alertBox")
            .unwrap()
            .unwrap()
            .find(".modal-body")
            .unwrap()
            .unwrap();
        assert_eq!(body.text().unwrap(), "Save failed");
        assert!(toolkit.last_attached().unwrap().is_visible());
    }

    #[test]
    fn test_show_on_missing_target_fails() {
        let document = MemoryDocument::new();
        let toolkit = RecordingToolkit::new();

        let alert = AlertNotifier::bind(&document, &toolkit, "#missing").unwrap();
        assert!(alert.show("x").is_err());
    }

    #[test]
    fn test_bind_with_options_uses_the_custom_body_selector() {
        let document = MemoryDocument::new();
        document.insert("#toast").append(".toast-text");
        let toolkit = RecordingToolkit::new();

        let alert = AlertNotifier::bind_with_options(
            &document,
            &toolkit,
            "#toast",
            AlertOptions::with_body_selector(".toast-text"),
        )
        .unwrap();
        alert.show("Saved").unwrap();

        let body = document
            .find("#toast")
            .unwrap()
            .unwrap()
            .find(".toast-text")
            .unwrap()
            .unwrap();
        assert_eq!(body.text().unwrap(), "Saved");
    }
}
