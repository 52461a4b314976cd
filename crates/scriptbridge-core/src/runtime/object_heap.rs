//! Arena for framework-managed native objects.

use std::any::{Any, TypeId};
use std::fmt;

/// Handle to a framework-managed object.
///
/// This is the native side's object reference. It is copyable and carries the
/// Rust type of the stored object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    /// Index into ObjectHeap.objects
    pub index: u32,
    /// Rust TypeId of the stored object
    pub type_id: TypeId,
}

impl ObjectHandle {
    /// Create a new object handle.
    pub fn new(index: u32, type_id: TypeId) -> Self {
        Self { index, type_id }
    }
}

/// Storage for objects that participate in the framework's introspection.
///
/// Every object carries its class name, which is the runtime type metadata the
/// conversion layer uses to pick an object constructor. Object lifetime is the
/// framework's concern; the heap only stores and looks up.
pub struct ObjectHeap {
    objects: Vec<NativeObject>,
}

struct NativeObject {
    class_name: String,
    value: Box<dyn Any + Send + Sync>,
}

impl ObjectHeap {
    /// Create a new empty object heap.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Allocate a new object of the given class.
    pub fn allocate<T: Any + Send + Sync>(
        &mut self,
        class_name: impl Into<String>,
        value: T,
    ) -> ObjectHandle {
        let index = self.objects.len() as u32;
        self.objects.push(NativeObject {
            class_name: class_name.into(),
            value: Box::new(value),
        });
        ObjectHandle::new(index, TypeId::of::<T>())
    }

    fn live(&self, handle: ObjectHandle) -> Option<&NativeObject> {
        self.objects.get(handle.index as usize)
    }

    /// Get immutable reference to an object.
    ///
    /// Returns None if the handle is unknown or the type doesn't match.
    pub fn get<T: Any>(&self, handle: ObjectHandle) -> Option<&T> {
        self.live(handle)?.value.downcast_ref::<T>()
    }

    /// Class name recorded when the object was allocated.
    pub fn class_name(&self, handle: ObjectHandle) -> Option<&str> {
        self.live(handle).map(|object| object.class_name.as_str())
    }

    /// Check whether the handle refers to an object in this heap.
    pub fn contains(&self, handle: ObjectHandle) -> bool {
        self.live(handle).is_some()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for ObjectHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObjectHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectHeap")
            .field("object_count", &self.objects.len())
            .finish()
    }
}
