use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for breadcrumb separators
    /// Any printable text, no control characters (newlines, tabs, NUL)
    /// - Valid: " > ", " >> ", "/", " · "
    /// - Invalid: "", "\n", ">\t>"
    pub static ref SEPARATOR_REGEX: Regex = Regex::new(r"^[^\p{Cc}]+$").unwrap();
}

/// `validator` hook for separator fields
pub fn validate_separator(separator: &str) -> Result<(), ValidationError> {
    if SEPARATOR_REGEX.is_match(separator) {
        Ok(())
    } else {
        let mut error = ValidationError::new("separator");
        error.message = Some("must not contain control characters".into());
        Err(error)
    }
}
