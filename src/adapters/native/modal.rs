use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::dom::MemoryElement;
use crate::domain::alert::error::AlertError;
use crate::ports::{ModalPort, ModalToolkitPort};

/// Modal toolkit stand-in: attachment always succeeds and every controller
/// records the transitions requested of it.
#[derive(Debug, Default)]
pub struct RecordingToolkit {
    last: RefCell<Option<RecordingModal>>,
}

impl RecordingToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    /// The controller most recently attached, if any.
    pub fn last_attached(&self) -> Option<RecordingModal> {
        self.last.borrow().clone()
    }
}

impl ModalToolkitPort<MemoryElement> for RecordingToolkit {
    type Modal = RecordingModal;

    fn attach(&self, _container: &MemoryElement) -> Result<RecordingModal, AlertError> {
        let modal = RecordingModal::new();
        *self.last.borrow_mut() = Some(modal.clone());
        Ok(modal)
    }
}

#[derive(Debug, Default)]
struct ModalState {
    visible: Cell<bool>,
    shows: Cell<u32>,
}

/// Records show/hide requests instead of animating anything. Clones share
/// the recorded state.
#[derive(Debug, Clone, Default)]
pub struct RecordingModal {
    state: Rc<ModalState>,
}

impl RecordingModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of show transitions requested so far.
    pub fn show_count(&self) -> u32 {
        self.state.shows.get()
    }
}

impl ModalPort for RecordingModal {
    fn show(&self) {
        self.state.visible.set(true);
        self.state.shows.set(self.state.shows.get() + 1);
    }

    fn hide(&self) {
        self.state.visible.set(false);
    }

    fn is_visible(&self) -> bool {
        self.state.visible.get()
    }
}
