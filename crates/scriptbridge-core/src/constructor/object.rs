//! Constructor for references to framework-managed objects.

use std::sync::Arc;

use super::{ArgConstructor, NativeArg, ReturnSlot};
use crate::TypeHash;
use crate::error::ConversionError;
use crate::runtime::{ObjectHandle, ScriptObject, ScriptValue};

/// Converts [`ObjectHandle`]s into script object references.
///
/// Every instance reports [`is_owned_reference`](ArgConstructor::is_owned_reference),
/// including ones registered for a custom class name, so the caller knows to
/// make the object visible in the script namespace.
#[derive(Debug, Clone)]
pub struct ObjectConstructor {
    type_hash: TypeHash,
    class_name: Arc<str>,
}

impl ObjectConstructor {
    /// Generic type name for object references.
    pub const GENERIC_NAME: &'static str = "object";

    /// Constructor for the generic object reference type.
    pub fn new() -> Self {
        Self::for_class(Self::GENERIC_NAME)
    }

    /// Constructor for a custom registered object class.
    pub fn for_class(class_name: &str) -> Self {
        Self {
            type_hash: TypeHash::from_name(class_name),
            class_name: Arc::from(class_name),
        }
    }
}

impl Default for ObjectConstructor {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgConstructor for ObjectConstructor {
    fn convert_returned(&self, slot: ReturnSlot) -> Result<ScriptObject, ConversionError> {
        let handle = slot.take::<ObjectHandle>()?;
        Ok(ScriptObject::new(ScriptValue::Object(handle)))
    }

    fn convert_parameter(&self, arg: NativeArg<'_>) -> Result<ScriptObject, ConversionError> {
        let handle = arg.downcast::<ObjectHandle>(&self.class_name)?;
        Ok(ScriptObject::new(ScriptValue::Object(*handle)))
    }

    fn clone_box(&self) -> Box<dyn ArgConstructor> {
        Box::new(self.clone())
    }

    fn native_type(&self) -> TypeHash {
        self.type_hash
    }

    fn type_name(&self) -> &str {
        &self.class_name
    }

    fn is_owned_reference(&self) -> bool {
        true
    }

    fn prepare_return(&self) -> ReturnSlot {
        ReturnSlot::new::<ObjectHandle>(self.type_hash, Arc::clone(&self.class_name))
    }
}
