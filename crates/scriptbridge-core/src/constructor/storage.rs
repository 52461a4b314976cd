//! Type-erased argument views and per-call return storage.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::TypeHash;
use crate::error::ConversionError;

/// Borrowed view of argument storage that already holds a native value.
///
/// This is what signal delivery hands to
/// [`ArgConstructor::convert_parameter`](super::ArgConstructor::convert_parameter).
/// It may be null; constructors that need a value report
/// [`ConversionError::NullArgument`].
#[derive(Clone, Copy)]
pub struct NativeArg<'a> {
    value: Option<&'a dyn Any>,
}

impl<'a> NativeArg<'a> {
    /// View an existing value.
    pub fn new<T: Any>(value: &'a T) -> Self {
        Self { value: Some(value) }
    }

    /// A null argument.
    pub fn null() -> Self {
        Self { value: None }
    }

    /// Check whether this argument is null.
    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow the value as a `T`.
    ///
    /// `expected` names the native type in the error if the storage is null
    /// or holds something else.
    pub fn downcast<T: Any>(&self, expected: &str) -> Result<&'a T, ConversionError> {
        let value = self
            .value
            .ok_or_else(|| ConversionError::null_argument(expected))?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| ConversionError::type_mismatch(expected))
    }
}

impl fmt::Debug for NativeArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeArg")
            .field("is_null", &self.is_null())
            .finish()
    }
}

/// Storage for one native call's return value.
///
/// A slot is created by a constructor's
/// [`prepare_return`](super::ArgConstructor::prepare_return), written through
/// [`ReturnSlot::argument`] while the native call runs, and consumed by
/// [`convert_returned`](super::ArgConstructor::convert_returned). Each
/// in-flight call owns its own slot.
///
/// A discarding slot (see [`ReturnSlot::discard`]) accepts a value of any type
/// and drops it.
pub struct ReturnSlot {
    type_hash: TypeHash,
    type_name: Arc<str>,
    storage: Box<dyn Any + Send>,
    discard: bool,
    written: bool,
}

impl ReturnSlot {
    /// Create empty storage for a value of type `T`, tagged with its native type.
    pub fn new<T: Any + Send>(type_hash: TypeHash, type_name: Arc<str>) -> Self {
        Self {
            type_hash,
            type_name,
            storage: Box::new(None::<T>),
            discard: false,
            written: false,
        }
    }

    /// Create storage that takes a value of any type and drops it.
    pub fn discard(type_hash: TypeHash, type_name: Arc<str>) -> Self {
        Self {
            type_hash,
            type_name,
            storage: Box::new(()),
            discard: true,
            written: false,
        }
    }

    /// Check whether written values are dropped instead of stored.
    pub fn is_discarding(&self) -> bool {
        self.discard
    }

    /// Native type this slot stores.
    pub fn type_hash(&self) -> TypeHash {
        self.type_hash
    }

    /// Declared native type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Check whether a value has been written.
    pub fn is_written(&self) -> bool {
        self.written
    }

    /// The (location, type name) pair handed to the invocation mechanism.
    pub fn argument(&mut self) -> ReturnArgument<'_> {
        ReturnArgument {
            type_name: &self.type_name,
            location: self.storage.as_mut(),
            discard: self.discard,
            written: &mut self.written,
        }
    }

    /// Take the written value out of the slot.
    pub fn take<T: Any>(self) -> Result<T, ConversionError> {
        let type_name = self.type_name;
        let stored = self
            .storage
            .downcast::<Option<T>>()
            .map_err(|_| ConversionError::ReturnTypeMismatch {
                expected: type_name.to_string(),
            })?;
        (*stored).ok_or_else(|| ConversionError::UnwrittenReturn {
            type_name: type_name.to_string(),
        })
    }
}

impl fmt::Debug for ReturnSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReturnSlot")
            .field("type_name", &self.type_name)
            .field("type_hash", &self.type_hash)
            .field("written", &self.written)
            .finish()
    }
}

/// Typed write access to a [`ReturnSlot`] for the duration of a native call.
pub struct ReturnArgument<'a> {
    type_name: &'a str,
    location: &'a mut (dyn Any + Send),
    discard: bool,
    written: &'a mut bool,
}

impl ReturnArgument<'_> {
    /// Declared native type name of the location.
    pub fn type_name(&self) -> &str {
        self.type_name
    }

    /// Check whether the location stores values of type `T`.
    pub fn accepts<T: Any>(&self) -> bool {
        self.discard || self.location.is::<Option<T>>()
    }

    /// Write a value by value into the location, replacing any earlier write.
    ///
    /// A discarding location drops the value.
    pub fn write<T: Any>(&mut self, value: T) -> Result<(), ConversionError> {
        if self.discard {
            drop(value);
            *self.written = true;
            return Ok(());
        }
        let type_name = self.type_name;
        let slot = self.location.downcast_mut::<Option<T>>().ok_or_else(|| {
            ConversionError::ReturnTypeMismatch {
                expected: type_name.to_string(),
            }
        })?;
        *slot = Some(value);
        *self.written = true;
        Ok(())
    }
}

impl fmt::Debug for ReturnArgument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReturnArgument")
            .field("type_name", &self.type_name)
            .field("discard", &self.discard)
            .finish_non_exhaustive()
    }
}
