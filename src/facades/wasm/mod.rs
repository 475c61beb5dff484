pub mod alert;
pub mod converters;

pub use alert::AlertModal;
