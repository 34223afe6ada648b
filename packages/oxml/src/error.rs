//! Error types for the schema-constrained element tree.

use thiserror::Error;

/// Main error type for oxml operations.
#[derive(Debug, Error)]
pub enum OxmlError {
    /// Attribute value rejected by its declared simple type.
    #[error("Invalid value '{value}' for attribute {attribute}: expected {expected}")]
    InvalidAttributeValue {
        attribute: String,
        value: String,
        expected: &'static str,
    },

    /// A required singleton child is absent. Construction discipline makes
    /// this unreachable for trees built through the factory operations;
    /// hand-edited or truncated input can still trigger it.
    #[error("Schema violation: <{element}> is missing required child <{child}>")]
    SchemaViolation { element: String, child: String },

    /// A required attribute is absent.
    #[error("Schema violation: <{element}> is missing required attribute {attribute}")]
    MissingAttribute { element: String, attribute: String },

    /// The element schema does not declare the requested child tag.
    #[error("Element <{element}> does not declare child <{child}>")]
    UndeclaredChild { element: String, child: String },

    /// The element schema does not declare the requested attribute.
    #[error("Element <{element}> does not declare attribute {attribute}")]
    UndeclaredAttribute { element: String, attribute: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    Parse(#[from] roxmltree::Error),
}

/// Result type alias for oxml operations.
pub type Result<T> = std::result::Result<T, OxmlError>;
