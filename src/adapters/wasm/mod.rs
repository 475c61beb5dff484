/// WASM adapters - implementations using browser APIs.

pub mod clock;
pub mod console_logger;
pub mod dom;
pub mod modal;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use dom::{DomDocument, DomElement};
pub use modal::{BootstrapModal, BootstrapToolkit};
