//! ConstructorRegistry - native type to constructor lookup.
//!
//! The registry owns one long-lived constructor per native type and hands out
//! shared references for the parameter path and clones for the return path.
//!
//! # Thread Safety
//!
//! Registration takes `&mut self`; lookups take `&self`. Once populated the
//! registry can be shared across threads (`ArgConstructor: Send + Sync`).
//!
//! # Example
//!
//! ```
//! use scriptbridge_core::{primitives, NativeArg, ScriptValue};
//! use scriptbridge_registry::ConstructorRegistry;
//!
//! let registry = ConstructorRegistry::with_primitives();
//! let ctor = registry.lookup(primitives::INT32).unwrap();
//!
//! let value = 42i32;
//! let object = ctor.convert_parameter(NativeArg::new(&value)).unwrap();
//! assert_eq!(object.value(), &ScriptValue::Int(42));
//! ```

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

use scriptbridge_core::{
    ArgConstructor, NullConstructor, ObjectConstructor, PrimitiveKind, RegistrationError,
    TypeHash, ValueConstructor,
};

use crate::config::{RegistryConfig, UnregisteredPolicy};
use crate::error::DispatchError;

/// Table of constructors keyed by native type.
#[derive(Default)]
pub struct ConstructorRegistry {
    constructors: FxHashMap<TypeHash, Box<dyn ArgConstructor>>,
    /// Returned for unregistered types under [`UnregisteredPolicy::NullFallback`].
    fallback: NullConstructor,
    config: RegistryConfig,
}

impl ConstructorRegistry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a registry with constructors for all built-in types.
    pub fn with_primitives() -> Self {
        let mut registry = Self::new();
        registry.register_all_primitives();
        registry
    }

    /// Register constructors for the primitives, `string` and `object`,
    /// and mark `void` as unconvertible.
    ///
    /// Existing registrations for these types are kept.
    pub fn register_all_primitives(&mut self) {
        use PrimitiveKind::{
            Bool, Double, Float, Int8, Int16, Int32, Int64, Uint8, Uint16, Uint32, Uint64,
        };

        let builtins: [Box<dyn ArgConstructor>; 14] = [
            Box::new(NullConstructor::new()),
            Box::new(ValueConstructor::<bool>::primitive(Bool)),
            Box::new(ValueConstructor::<i8>::primitive(Int8)),
            Box::new(ValueConstructor::<i16>::primitive(Int16)),
            Box::new(ValueConstructor::<i32>::primitive(Int32)),
            Box::new(ValueConstructor::<i64>::primitive(Int64)),
            Box::new(ValueConstructor::<u8>::primitive(Uint8)),
            Box::new(ValueConstructor::<u16>::primitive(Uint16)),
            Box::new(ValueConstructor::<u32>::primitive(Uint32)),
            Box::new(ValueConstructor::<u64>::primitive(Uint64)),
            Box::new(ValueConstructor::<f32>::primitive(Float)),
            Box::new(ValueConstructor::<f64>::primitive(Double)),
            Box::new(ValueConstructor::<String>::new("string")),
            Box::new(ObjectConstructor::new()),
        ];

        for ctor in builtins {
            self.constructors.entry(ctor.native_type()).or_insert(ctor);
        }
        debug!(count = self.constructors.len(), "registered built-in constructors");
    }

    /// Register a constructor under its own native type.
    pub fn register<C>(&mut self, ctor: C) -> Result<(), RegistrationError>
    where
        C: ArgConstructor + 'static,
    {
        let hash = ctor.native_type();
        self.register_boxed(hash, Box::new(ctor))
    }

    /// Register a constructor under an explicit type hash.
    ///
    /// Used to map a type to a constructor whose own native type differs,
    /// most commonly the null constructor for an unconvertible type.
    pub fn register_as<C>(&mut self, hash: TypeHash, ctor: C) -> Result<(), RegistrationError>
    where
        C: ArgConstructor + 'static,
    {
        self.register_boxed(hash, Box::new(ctor))
    }

    /// Mark the named native type as having no script conversion.
    pub fn register_unconvertible(&mut self, type_name: &str) -> Result<(), RegistrationError> {
        self.register_as(TypeHash::from_name(type_name), NullConstructor::new())
    }

    /// Register an already boxed constructor.
    pub fn register_boxed(
        &mut self,
        hash: TypeHash,
        ctor: Box<dyn ArgConstructor>,
    ) -> Result<(), RegistrationError> {
        if let Some(existing) = self.constructors.get(&hash) {
            if !self.config.allow_replace {
                return Err(RegistrationError::DuplicateType {
                    name: existing.type_name().to_string(),
                    hash,
                });
            }
            debug!(type_name = ctor.type_name(), %hash, "replacing constructor");
        } else {
            debug!(type_name = ctor.type_name(), %hash, "registered constructor");
        }
        self.constructors.insert(hash, ctor);
        Ok(())
    }

    /// Get the constructor registered for `hash`, if any.
    pub fn get(&self, hash: TypeHash) -> Option<&dyn ArgConstructor> {
        self.constructors.get(&hash).map(|ctor| ctor.as_ref())
    }

    /// Get the constructor for `hash`, applying the unregistered-type policy.
    ///
    /// The returned instance is shared. It is safe to use for the parameter
    /// path; use [`lookup_for_return`](Self::lookup_for_return) for calls.
    pub fn lookup(&self, hash: TypeHash) -> Result<&dyn ArgConstructor, DispatchError> {
        if let Some(ctor) = self.get(hash) {
            return Ok(ctor);
        }
        match self.config.unregistered {
            UnregisteredPolicy::NullFallback => {
                debug!(%hash, "no constructor registered, using null fallback");
                Ok(&self.fallback)
            }
            UnregisteredPolicy::Reject => Err(DispatchError::Unregistered(hash)),
        }
    }

    /// Get a private copy of the constructor for `hash` for one native call.
    pub fn lookup_for_return(
        &self,
        hash: TypeHash,
    ) -> Result<Box<dyn ArgConstructor>, DispatchError> {
        self.lookup(hash).map(|ctor| ctor.clone_box())
    }

    /// Check whether a constructor is registered for `hash`.
    pub fn contains(&self, hash: TypeHash) -> bool {
        self.constructors.contains_key(&hash)
    }

    /// Number of registered constructors.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Check whether no constructors are registered.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// The registry's configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl fmt::Debug for ConstructorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorRegistry")
            .field("constructor_count", &self.constructors.len())
            .field("config", &self.config)
            .finish()
    }
}
