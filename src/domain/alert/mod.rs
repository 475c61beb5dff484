pub mod error;
pub mod operations;
pub mod types;
pub mod validation;

pub use error::AlertError;
pub use operations::{bind, show};
pub use types::{AlertBinding, AlertOptions, BoundTarget, DEFAULT_BODY_SELECTOR};
pub use validation::validate_selector;
