//! Core types for marshalling native framework values into a scripting runtime.
//!
//! This crate defines the conversion contract ([`ArgConstructor`]) together with
//! the value models on both sides of it:
//!
//! - [`TypeHash`] / [`PrimitiveKind`]: identity of native types
//! - [`ObjectHeap`] / [`ObjectHandle`]: framework-managed native objects
//! - [`ScriptObject`] / [`ScriptValue`]: reference-counted script values
//! - [`NullConstructor`], [`ValueConstructor`], [`ObjectConstructor`]: the
//!   constructor implementations
//!
//! Lookup tables and dispatch live in `scriptbridge-registry`.

mod constructor;
mod convert;
mod error;
mod primitive_kind;
pub mod runtime;
mod type_hash;

pub use constructor::{
    ArgConstructor, NativeArg, NoConversion, NullConstructor, ObjectConstructor, ReturnArgument,
    ReturnSlot, ValueConstructor,
};
pub use convert::IntoScript;
pub use error::{ConversionError, RegistrationError};
pub use primitive_kind::PrimitiveKind;
pub use runtime::{ObjectHandle, ObjectHeap, ScriptObject, ScriptValue};
pub use type_hash::{TypeHash, hash_constants, primitives};
