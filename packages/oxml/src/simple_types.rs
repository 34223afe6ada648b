//! Attribute simple types and their validators.
//!
//! Attribute values are stored as text in the tree; each declared attribute
//! carries one of a closed set of validators that is checked at assignment
//! time, never deferred to a later whole-tree pass.

/// Value type of a declared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    /// Non-negative integer, as the numbering part uses ST_DecimalNumber.
    DecimalNumber,

    /// One of a closed set of string values.
    Enumeration(&'static [&'static str]),

    /// Free-form string, always valid.
    Text,
}

impl AttributeType {
    /// Check whether `value` is acceptable for this type.
    #[must_use]
    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            Self::DecimalNumber => value.parse::<u32>().is_ok(),
            Self::Enumeration(values) => values.iter().any(|&v| v == value),
            Self::Text => true,
        }
    }

    /// Human-readable description of acceptable values, for error messages.
    #[must_use]
    pub fn expected(&self) -> &'static str {
        match self {
            Self::DecimalNumber => "a non-negative integer",
            Self::Enumeration(_) => "one of the declared enumeration values",
            Self::Text => "a string",
        }
    }
}
