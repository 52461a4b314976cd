//! Generic constructor for plain native values.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::{ArgConstructor, NativeArg, ReturnSlot};
use crate::convert::IntoScript;
use crate::error::ConversionError;
use crate::runtime::ScriptObject;
use crate::{PrimitiveKind, TypeHash};

/// Constructor for any native value type with an [`IntoScript`] conversion.
///
/// The parameter path clones the value out of the argument storage, leaving
/// the source untouched. The return path stores a `T` in the slot and moves
/// it out when converting.
pub struct ValueConstructor<T> {
    type_hash: TypeHash,
    type_name: Arc<str>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ValueConstructor<T>
where
    T: IntoScript + Clone + Any + Send,
{
    /// Create a constructor for a native type declared as `type_name`.
    pub fn new(type_name: &str) -> Self {
        Self {
            type_hash: TypeHash::from_name(type_name),
            type_name: Arc::from(type_name),
            _marker: PhantomData,
        }
    }

    /// Create a constructor for a built-in primitive.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::new(kind.name())
    }
}

impl<T> Clone for ValueConstructor<T> {
    fn clone(&self) -> Self {
        Self {
            type_hash: self.type_hash,
            type_name: Arc::clone(&self.type_name),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ValueConstructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueConstructor")
            .field("type_name", &self.type_name)
            .field("rust_type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> ArgConstructor for ValueConstructor<T>
where
    T: IntoScript + Clone + Any + Send,
{
    fn convert_returned(&self, slot: ReturnSlot) -> Result<ScriptObject, ConversionError> {
        let value = slot.take::<T>()?;
        Ok(ScriptObject::new(value.into_script()))
    }

    fn convert_parameter(&self, arg: NativeArg<'_>) -> Result<ScriptObject, ConversionError> {
        let value = arg.downcast::<T>(&self.type_name)?;
        Ok(ScriptObject::new(value.clone().into_script()))
    }

    fn clone_box(&self) -> Box<dyn ArgConstructor> {
        Box::new(self.clone())
    }

    fn native_type(&self) -> TypeHash {
        self.type_hash
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn is_owned_reference(&self) -> bool {
        false
    }

    fn prepare_return(&self) -> ReturnSlot {
        ReturnSlot::new::<T>(self.type_hash, Arc::clone(&self.type_name))
    }
}
