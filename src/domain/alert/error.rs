use std::fmt;

#[derive(Debug, Clone)]
pub enum AlertError {
    TargetNotFound { selector: String },
    InvalidSelector { selector: String },
    DocumentUnavailable,
    ToolkitUnavailable,
    JsError(String),
}

impl fmt::Display for AlertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertError::TargetNotFound { selector } => {
                write!(f, "Target element not found: {selector}")
            }
            AlertError::InvalidSelector { selector } => {
                write!(f, "Invalid selector: {selector:?}")
            }
            AlertError::DocumentUnavailable => {
                write!(f, "No document available in this scope")
            }
            AlertError::ToolkitUnavailable => {
                write!(f, "Modal toolkit (bootstrap) is not loaded")
            }
            AlertError::JsError(msg) => write!(f, "JavaScript Error: {msg}"),
        }
    }
}

impl std::error::Error for AlertError {}

impl AlertError {
    pub fn target_not_found(selector: impl Into<String>) -> Self {
        AlertError::TargetNotFound {
            selector: selector.into(),
        }
    }

    pub fn invalid_selector(selector: impl Into<String>) -> Self {
        AlertError::InvalidSelector {
            selector: selector.into(),
        }
    }

    pub fn js_error(message: impl Into<String>) -> Self {
        AlertError::JsError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_not_found_names_the_selector() {
        let error = AlertError::target_not_found("#alertBox");
        assert_eq!(error.to_string(), "Target element not found: #alertBox");
    }

    #[test]
    fn test_invalid_selector_quotes_the_selector() {
        let error = AlertError::invalid_selector("   ");
        assert_eq!(error.to_string(), "Invalid selector: \"   \"");
    }

    #[test]
    fn test_toolkit_unavailable_display() {
        assert_eq!(
            AlertError::ToolkitUnavailable.to_string(),
            "Modal toolkit (bootstrap) is not loaded"
        );
    }
}
