//! Marshalling of native framework values into a scripting runtime.
//!
//! This crate re-exports the conversion contract from `scriptbridge-core` and
//! the registry and dispatch helpers from `scriptbridge-registry`.
//!
//! ```
//! use scriptbridge::prelude::*;
//!
//! let registry = ConstructorRegistry::with_primitives();
//!
//! // A signal fired with an int argument
//! let value = 42i32;
//! let args = convert_signal(&registry, "valueChanged(int)", &[NativeArg::new(&value)]).unwrap();
//! assert_eq!(args[0].value.value(), &ScriptValue::Int(42));
//!
//! // Script called a native method returning int
//! let ret = invoke_returning(&registry, primitives::INT32, |mut ret| ret.write(7i32)).unwrap();
//! assert_eq!(ret.value.value(), &ScriptValue::Int(7));
//! ```

pub use scriptbridge_core as core;
pub use scriptbridge_registry as registry;

pub mod prelude {
    pub use scriptbridge_core::{
        ArgConstructor, ConversionError, IntoScript, NativeArg, NoConversion, NullConstructor,
        ObjectConstructor, ObjectHandle, ObjectHeap, PrimitiveKind, RegistrationError,
        ReturnArgument, ReturnSlot, ScriptObject, ScriptValue, TypeHash, ValueConstructor,
        primitives,
    };
    pub use scriptbridge_registry::{
        ConstructorRegistry, Converted, DispatchError, RegistryConfig, Signature,
        UnregisteredPolicy, convert_signal, convert_signal_args, invoke_returning,
    };
}
