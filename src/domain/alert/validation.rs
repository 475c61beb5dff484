use super::error::AlertError;

/// Rejects selectors the document lookup itself would refuse. An empty or
/// whitespace-only selector is a syntax error to querySelector.
pub fn validate_selector(selector: &str) -> Result<(), AlertError> {
    if selector.trim().is_empty() {
        return Err(AlertError::invalid_selector(selector));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_selector_valid() {
        assert!(validate_selector("#alertBox").is_ok());
        assert!(validate_selector(".modal").is_ok());
        assert!(validate_selector("div.modal > .modal-body").is_ok());
    }

    #[test]
    fn test_validate_selector_empty() {
        assert!(validate_selector("").is_err());
    }

    #[test]
    fn test_validate_selector_whitespace_only() {
        assert!(validate_selector("   ").is_err());
        assert!(validate_selector("\t").is_err());
        assert!(validate_selector("\n").is_err());
    }
}
