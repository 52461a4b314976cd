//! Dispatch errors.

use thiserror::Error;

use scriptbridge_core::{ConversionError, TypeHash};

/// Errors raised while routing a signal or a native call through the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No constructor is registered and the registry rejects unregistered types.
    #[error("no constructor registered for type {0}")]
    Unregistered(TypeHash),

    /// The number of arguments does not match the signature.
    #[error("expected {expected} argument(s), got {got}")]
    ArityMismatch {
        /// Parameter count of the signature.
        expected: usize,
        /// Number of arguments supplied.
        got: usize,
    },

    /// A signal or method signature could not be parsed.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// A value could not be converted.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
