//! Error types for the numbering part model.

use thiserror::Error;
use wordml_oxml::OxmlError;

/// Main error type for numbering part operations.
#[derive(Debug, Error)]
pub enum NumberingError {
    /// No concrete numbering instance carries the requested numId.
    #[error("No <w:num> element with numId {num_id}")]
    NumNotFound { num_id: u32 },

    /// The parsed document's root element is not `<w:numbering>`.
    #[error("Unexpected root element <{tag}>, expected <w:numbering>")]
    UnexpectedRoot { tag: String },

    /// Tree or schema error from the element layer.
    #[error(transparent)]
    Oxml(#[from] OxmlError),
}

/// Result type alias for numbering part operations.
pub type Result<T> = std::result::Result<T, NumberingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_not_found_display() {
        let err = NumberingError::NumNotFound { num_id: 9 };
        assert_eq!(err.to_string(), "No <w:num> element with numId 9");
    }

    #[test]
    fn test_oxml_error_passes_through() {
        let err = NumberingError::from(OxmlError::MissingAttribute {
            element: "w:num".to_string(),
            attribute: "w:numId".to_string(),
        });
        assert!(err.to_string().contains("w:numId"));
    }
}
