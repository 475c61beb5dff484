use crate::domain::alert::error::AlertError;

/// Modal-dialog behavior the toolkit attaches to a container element.
///
/// Transitions are fire-and-forget: `show` and `hide` request the
/// transition and return without waiting for it to complete.
pub trait ModalPort {
    /// Requests the show transition.
    fn show(&self);

    /// Requests the hide transition.
    fn hide(&self);

    /// Last requested visibility state.
    fn is_visible(&self) -> bool;
}

/// Entry point of the modal toolkit: attaches modal behavior to elements.
pub trait ModalToolkitPort<E> {
    type Modal: ModalPort;

    /// Constructs the toolkit's modal controller bound to `container`.
    fn attach(&self, container: &E) -> Result<Self::Modal, AlertError>;
}
