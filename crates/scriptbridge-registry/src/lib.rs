//! Constructor lookup and dispatch for the script bridge.
//!
//! - [`ConstructorRegistry`]: native type hash to constructor table
//! - [`RegistryConfig`]: lookup and registration policy
//! - [`Signature`]: `name(type, ...)` signal and method signatures
//! - [`convert_signal_args`] / [`invoke_returning`]: the two conversion paths

mod config;
mod dispatch;
mod error;
mod registry;
mod signature;

pub use config::{RegistryConfig, UnregisteredPolicy};
pub use dispatch::{Converted, convert_signal, convert_signal_args, invoke_returning};
pub use error::DispatchError;
pub use registry::ConstructorRegistry;
pub use signature::Signature;
