//! Constructors that turn native values into script objects.
//!
//! Native values reach the scripting runtime on two paths:
//!
//! 1. **Parameter path** - a signal fired and its arguments already exist in
//!    storage owned by the event delivery. Each one is wrapped with
//!    [`ArgConstructor::convert_parameter`].
//! 2. **Return path** - script invoked a native method. The method writes its
//!    result into storage prepared beforehand with
//!    [`ArgConstructor::prepare_return`], and the result is read back out
//!    with [`ArgConstructor::convert_returned`].
//!
//! Constructors are immutable. The per-call return storage is a separate
//! [`ReturnSlot`] owned by the call site, so reentrant calls through one
//! shared constructor cannot overwrite each other's results.
//!
//! ## Example
//!
//! ```
//! use scriptbridge_core::{ArgConstructor, PrimitiveKind, ScriptValue, ValueConstructor};
//!
//! let ctor = ValueConstructor::<i32>::primitive(PrimitiveKind::Int32);
//!
//! let mut slot = ctor.prepare_return();
//! slot.argument().write(7i32).unwrap();
//! let object = ctor.convert_returned(slot).unwrap();
//! assert_eq!(object.value(), &ScriptValue::Int(7));
//! ```

mod null;
mod object;
mod storage;
mod value;

use std::fmt;

pub use null::{NoConversion, NullConstructor};
pub use object::ObjectConstructor;
pub use storage::{NativeArg, ReturnArgument, ReturnSlot};
pub use value::ValueConstructor;

use crate::TypeHash;
use crate::error::ConversionError;
use crate::runtime::ScriptObject;

/// Converts values of one native type into script objects.
///
/// Call sites only ever hold `dyn ArgConstructor`, so they never need to know
/// which native type they are converting.
pub trait ArgConstructor: fmt::Debug + Send + Sync {
    /// Create a script object from the value a native call wrote into `slot`.
    ///
    /// `slot` must come from [`prepare_return`](Self::prepare_return) on this
    /// constructor or a clone of it. A slot that was never written yields
    /// [`ConversionError::UnwrittenReturn`].
    fn convert_returned(&self, slot: ReturnSlot) -> Result<ScriptObject, ConversionError>;

    /// Create a script object from a value that already exists.
    ///
    /// The argument is only read. The returned object is a new allocation
    /// owned by the caller.
    fn convert_parameter(&self, arg: NativeArg<'_>) -> Result<ScriptObject, ConversionError>;

    /// Return an independently owned copy of this constructor.
    fn clone_box(&self) -> Box<dyn ArgConstructor>;

    /// Native type this constructor converts.
    fn native_type(&self) -> TypeHash;

    /// Native type name, as declared in method and signal signatures.
    fn type_name(&self) -> &str;

    /// Whether the native type is a reference to a framework-managed object.
    ///
    /// Objects produced from such types must be registered with the script
    /// namespace by the caller. This is decided per constructor, not from the
    /// type category: custom object classes answer `true` under their own
    /// type hash.
    fn is_owned_reference(&self) -> bool;

    /// Create empty storage of this constructor's native type for one call.
    fn prepare_return(&self) -> ReturnSlot;
}

impl Clone for Box<dyn ArgConstructor> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimitiveKind;
    use crate::runtime::ScriptValue;

    #[test]
    fn boxed_constructor_clone_keeps_identity() {
        let original: Box<dyn ArgConstructor> =
            Box::new(ValueConstructor::<f64>::primitive(PrimitiveKind::Double));
        let copy = original.clone();

        assert_eq!(copy.native_type(), original.native_type());
        assert_eq!(copy.type_name(), original.type_name());
        assert_eq!(copy.is_owned_reference(), original.is_owned_reference());
    }

    #[test]
    fn clone_slots_are_independent() {
        let original: Box<dyn ArgConstructor> =
            Box::new(ValueConstructor::<i32>::primitive(PrimitiveKind::Int32));
        let copy = original.clone();

        let mut original_slot = original.prepare_return();
        let mut copy_slot = copy.prepare_return();
        copy_slot.argument().write(99i32).unwrap();

        assert!(!original_slot.is_written());
        original_slot.argument().write(1i32).unwrap();

        assert_eq!(
            copy.convert_returned(copy_slot).unwrap().value(),
            &ScriptValue::Int(99)
        );
        assert_eq!(
            original.convert_returned(original_slot).unwrap().value(),
            &ScriptValue::Int(1)
        );
    }

    #[test]
    fn constructors_are_object_safe_and_shareable() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ArgConstructor>();
        assert_send_sync::<Box<dyn ArgConstructor>>();
    }
}
