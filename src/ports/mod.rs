/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// This module contains all the port traits that define contracts between the domain layer
/// and the infrastructure adapters. These traits enable the hexagonal architecture by
/// decoupling the notifier logic from platform-specific implementations.

pub mod clock;
pub mod dom;
pub mod logger;
pub mod modal;

pub use clock::ClockPort;
pub use dom::{DocumentPort, ElementPort};
pub use logger::LoggerPort;
pub use modal::{ModalPort, ModalToolkitPort};
