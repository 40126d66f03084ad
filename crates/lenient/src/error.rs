//! Conversion errors for the parse primitives

use thiserror::Error;

/// Result type for parse primitives
pub type ConversionResult<T> = Result<T, ConversionError>;

/// A value that cannot be represented as the requested type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The input was absent
    #[error("Cannot convert null to {target}")]
    Null { target: &'static str },

    /// The text does not parse as the target type
    #[error("Cannot parse '{input}' as {target}")]
    Invalid { target: &'static str, input: String },

    /// The text is numeric but outside the target type's range
    #[error("'{input}' is out of range for {target}")]
    OutOfRange { target: &'static str, input: String },

    /// The value's type has no conversion path to the target
    #[error("Cannot convert {from} to {target}")]
    Unsupported {
        from: &'static str,
        target: &'static str,
    },
}

impl ConversionError {
    /// Create a null input error
    pub fn null(target: &'static str) -> Self {
        Self::Null { target }
    }

    /// Create an invalid text error
    pub fn invalid(target: &'static str, input: impl Into<String>) -> Self {
        Self::Invalid {
            target,
            input: input.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(target: &'static str, input: impl Into<String>) -> Self {
        Self::OutOfRange {
            target,
            input: input.into(),
        }
    }

    /// Create an unsupported conversion error
    pub fn unsupported(from: &'static str, target: &'static str) -> Self {
        Self::Unsupported { from, target }
    }

    /// The name of the type the conversion was aimed at
    pub fn target(&self) -> &'static str {
        match self {
            Self::Null { target }
            | Self::Invalid { target, .. }
            | Self::OutOfRange { target, .. }
            | Self::Unsupported { target, .. } => target,
        }
    }
}
