pub mod alert;

pub use alert::AlertNotifier;
