use serde::{Deserialize, Serialize};

/// Class marker conventionally used for the message region of a modal.
pub const DEFAULT_BODY_SELECTOR: &str = ".modal-body";

/// Per-notifier configuration.
///
/// Deserializes from a camelCase JS object (`{ bodySelector: "…" }`);
/// missing fields fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertOptions {
    /// Sub-selector locating the message region inside the container.
    pub body_selector: String,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            body_selector: DEFAULT_BODY_SELECTOR.to_string(),
        }
    }
}

impl AlertOptions {
    pub fn with_body_selector(body_selector: impl Into<String>) -> Self {
        Self {
            body_selector: body_selector.into(),
        }
    }
}

/// A resolved container element together with the modal controller the
/// toolkit attached to it. The two only ever exist as a pair.
#[derive(Debug)]
pub struct BoundTarget<E, M> {
    pub container: E,
    pub modal: M,
}

/// State of one notifier: the selector it was constructed from, its
/// options, and the target it bound to at construction time.
///
/// `target` is `None` when the selector matched nothing; `show` reports
/// the failure, per the source helper's late failure semantics.
#[derive(Debug)]
pub struct AlertBinding<E, M> {
    pub selector: String,
    pub options: AlertOptions,
    pub target: Option<BoundTarget<E, M>>,
}
