//! Error types for the conversion layer.
//!
//! ```text
//! ConversionError   - a single value could not be converted
//! RegistrationError - a constructor could not be registered
//! ```
//!
//! Dispatch-level failures live in `scriptbridge-registry`.

use thiserror::Error;

use crate::TypeHash;

// ============================================================================
// Conversion Errors
// ============================================================================

/// Errors raised while turning a native value into a script object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The argument storage holds a value of a different native type.
    #[error("type mismatch: argument is not a value of type '{expected}'")]
    TypeMismatch {
        /// Native type the constructor converts.
        expected: String,
    },

    /// The argument storage was a null pointer.
    #[error("null argument passed where '{expected}' was expected")]
    NullArgument {
        /// Native type the constructor converts.
        expected: String,
    },

    /// A return slot was read back before the native call wrote into it.
    #[error("return value of type '{type_name}' was never written")]
    UnwrittenReturn {
        /// Declared type of the slot.
        type_name: String,
    },

    /// The invocation tried to write a value of the wrong type into a return slot.
    #[error("return slot expects a value of type '{expected}'")]
    ReturnTypeMismatch {
        /// Declared type of the slot.
        expected: String,
    },
}

impl ConversionError {
    /// Create a type mismatch error.
    pub fn type_mismatch(expected: impl Into<String>) -> Self {
        ConversionError::TypeMismatch {
            expected: expected.into(),
        }
    }

    /// Create a null argument error.
    pub fn null_argument(expected: impl Into<String>) -> Self {
        ConversionError::NullArgument {
            expected: expected.into(),
        }
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors raised while registering constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A constructor is already registered under this type.
    #[error("duplicate type: '{name}' ({hash}) already has a constructor")]
    DuplicateType {
        /// Type name of the rejected constructor.
        name: String,
        /// Key it was registered under.
        hash: TypeHash,
    },
}
