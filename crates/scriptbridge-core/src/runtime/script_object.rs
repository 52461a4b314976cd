//! Script-side values.

use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;

use super::ObjectHandle;

/// A value as the scripting runtime sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    /// The runtime's none/null value
    None,
    /// Boolean value
    Bool(bool),
    /// Integer value (every native integer width that fits is widened to i64)
    Int(i64),
    /// Unsigned integer above `i64::MAX`
    UInt(u64),
    /// Floating point value (f32 and f64 both stored as f64)
    Float(f64),
    /// String value (owned)
    Str(String),
    /// Reference to a framework-managed native object
    Object(ObjectHandle),
}

impl ScriptValue {
    /// Get a human-readable name for this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScriptValue::None => "none",
            ScriptValue::Bool(_) => "bool",
            ScriptValue::Int(_) | ScriptValue::UInt(_) => "int",
            ScriptValue::Float(_) => "float",
            ScriptValue::Str(_) => "str",
            ScriptValue::Object(_) => "object",
        }
    }

    /// Check if this is the none value.
    pub fn is_none(&self) -> bool {
        matches!(self, ScriptValue::None)
    }
}

lazy_static! {
    static ref NONE: ScriptObject = ScriptObject(Arc::new(ScriptValue::None));
}

/// An opaque, reference-counted scripting runtime object.
///
/// Cloning shares the object. Use [`ScriptObject::ptr_eq`] for identity and
/// `==` for the runtime's value equality.
#[derive(Clone)]
pub struct ScriptObject(Arc<ScriptValue>);

impl ScriptObject {
    /// Allocate a new object holding `value`.
    ///
    /// Every call returns a fresh allocation, including for [`ScriptValue::None`];
    /// use [`ScriptObject::none`] for the shared singleton.
    pub fn new(value: ScriptValue) -> Self {
        ScriptObject(Arc::new(value))
    }

    /// The runtime's none singleton. Every call returns the same object.
    pub fn none() -> Self {
        NONE.clone()
    }

    /// Borrow the wrapped value.
    pub fn value(&self) -> &ScriptValue {
        &self.0
    }

    /// Check if this object holds the none value.
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Check whether two objects are the same allocation.
    pub fn ptr_eq(&self, other: &ScriptObject) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live references to this object.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl PartialEq for ScriptObject {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl From<ScriptValue> for ScriptObject {
    fn from(value: ScriptValue) -> Self {
        ScriptObject::new(value)
    }
}

impl fmt::Debug for ScriptObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScriptObject({:?})", self.0)
    }
}
