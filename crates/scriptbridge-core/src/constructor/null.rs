//! The "no conversion" constructor.

use std::sync::Arc;

use super::{ArgConstructor, NativeArg, ReturnSlot};
use crate::TypeHash;
use crate::error::ConversionError;
use crate::primitives;
use crate::runtime::ScriptObject;

/// Constructor for native types that intentionally have no script conversion.
///
/// Both conversion paths return the script runtime's none singleton, whatever
/// the argument or slot holds. Its return slot discards whatever the native
/// call writes, so the result is thrown away. Registering it for a type makes every lookup
/// yield a usable constructor, so call sites never check for absence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullConstructor;

/// Alias used when registering a type as unconvertible.
pub type NoConversion = NullConstructor;

impl NullConstructor {
    /// Create a null constructor.
    pub const fn new() -> Self {
        NullConstructor
    }
}

impl ArgConstructor for NullConstructor {
    fn convert_returned(&self, _slot: ReturnSlot) -> Result<ScriptObject, ConversionError> {
        Ok(ScriptObject::none())
    }

    fn convert_parameter(&self, _arg: NativeArg<'_>) -> Result<ScriptObject, ConversionError> {
        Ok(ScriptObject::none())
    }

    fn clone_box(&self) -> Box<dyn ArgConstructor> {
        Box::new(NullConstructor)
    }

    fn native_type(&self) -> TypeHash {
        primitives::VOID
    }

    fn type_name(&self) -> &str {
        "void"
    }

    fn is_owned_reference(&self) -> bool {
        false
    }

    fn prepare_return(&self) -> ReturnSlot {
        ReturnSlot::discard(primitives::VOID, Arc::from("void"))
    }
}
