/// Native adapters - headless implementations for native Rust (non-WASM).

pub mod clock;
pub mod console_logger;
pub mod dom;
pub mod modal;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use dom::{MemoryDocument, MemoryElement};
pub use modal::{RecordingModal, RecordingToolkit};
