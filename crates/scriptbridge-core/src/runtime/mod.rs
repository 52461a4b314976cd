//! The two sides of the bridge.
//!
//! ## Key Types
//!
//! - [`ScriptValue`]: Value model of the scripting runtime
//! - [`ScriptObject`]: Opaque reference-counted script object
//! - [`ObjectHeap`]: Arena for framework-managed native objects
//! - [`ObjectHandle`]: Native reference into the heap

mod object_heap;
mod script_object;

pub use object_heap::{ObjectHandle, ObjectHeap};
pub use script_object::{ScriptObject, ScriptValue};
