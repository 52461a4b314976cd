//! Routing native values through the registry.
//!
//! - [`convert_signal_args`]: wrap the arguments of a fired signal before a
//!   script callback runs. Uses the registry's shared constructors.
//! - [`invoke_returning`]: run a native call from script and convert its
//!   return value. Clones the constructor and gives the call its own slot.
//!
//! Both return [`Converted`] values that carry the owned-reference flag, so
//! the script namespace can register framework objects without the
//! constructors knowing about it.

use tracing::trace;

use scriptbridge_core::{ConversionError, NativeArg, ReturnArgument, ScriptObject, TypeHash};

use crate::error::DispatchError;
use crate::registry::ConstructorRegistry;
use crate::signature::Signature;

/// A converted value and whether it refers to a framework-managed object.
#[derive(Debug, Clone, PartialEq)]
pub struct Converted {
    /// The new script object.
    pub value: ScriptObject,
    /// The value is a reference to a framework-managed object.
    pub owned_reference: bool,
}

impl Converted {
    /// Whether the script namespace must register this object.
    pub fn needs_registration(&self) -> bool {
        self.owned_reference && !self.value.is_none()
    }

    /// Drop the flag and keep the object.
    pub fn into_value(self) -> ScriptObject {
        self.value
    }
}

/// Convert the arguments of a fired signal.
///
/// `params` are the declared parameter types and `args` the argument storage
/// supplied by the event delivery, in the same order.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn convert_signal_args(
    registry: &ConstructorRegistry,
    params: &[TypeHash],
    args: &[NativeArg<'_>],
) -> Result<Vec<Converted>, DispatchError> {
    if params.len() != args.len() {
        return Err(DispatchError::ArityMismatch {
            expected: params.len(),
            got: args.len(),
        });
    }

    params
        .iter()
        .zip(args)
        .map(|(&param, &arg)| -> Result<Converted, DispatchError> {
            let ctor = registry.lookup(param)?;
            trace!(type_name = ctor.type_name(), "converting signal argument");
            Ok(Converted {
                value: ctor.convert_parameter(arg)?,
                owned_reference: ctor.is_owned_reference(),
            })
        })
        .collect()
}

/// Convert the arguments of a fired signal given its textual signature.
pub fn convert_signal(
    registry: &ConstructorRegistry,
    signature: &str,
    args: &[NativeArg<'_>],
) -> Result<Vec<Converted>, DispatchError> {
    let signature = Signature::parse(signature)?;
    convert_signal_args(registry, &signature.param_types(), args)
}

/// Run a native call and convert the value it returns.
///
/// `invoke` performs the call and writes its result through the supplied
/// [`ReturnArgument`]. The constructor is cloned first and the call gets its
/// own storage, so `invoke` may itself re-enter the dispatcher.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn invoke_returning<F>(
    registry: &ConstructorRegistry,
    return_type: TypeHash,
    invoke: F,
) -> Result<Converted, DispatchError>
where
    F: FnOnce(ReturnArgument<'_>) -> Result<(), ConversionError>,
{
    let ctor = registry.lookup_for_return(return_type)?;
    let mut slot = ctor.prepare_return();

    invoke(slot.argument())?;

    trace!(
        type_name = ctor.type_name(),
        written = slot.is_written(),
        "converting return value"
    );
    Ok(Converted {
        value: ctor.convert_returned(slot)?,
        owned_reference: ctor.is_owned_reference(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptbridge_core::{ObjectConstructor, ObjectHeap, ScriptValue, primitives};

    #[test]
    fn signal_args_convert_in_order() {
        let registry = ConstructorRegistry::with_primitives();
        let (a, b) = (42i32, String::from("x"));

        let converted = convert_signal_args(
            &registry,
            &[primitives::INT32, primitives::STRING],
            &[NativeArg::new(&a), NativeArg::new(&b)],
        )
        .unwrap();

        assert_eq!(converted[0].value.value(), &ScriptValue::Int(42));
        assert_eq!(converted[1].value.value(), &ScriptValue::Str("x".into()));
        assert!(!converted[0].needs_registration());
    }

    #[test]
    fn signal_arity_mismatch() {
        let registry = ConstructorRegistry::with_primitives();
        let a = 1i32;
        let err = convert_signal_args(&registry, &[], &[NativeArg::new(&a)]).unwrap_err();
        assert_eq!(err, DispatchError::ArityMismatch { expected: 0, got: 1 });
    }

    #[test]
    fn signal_by_text() {
        let registry = ConstructorRegistry::with_primitives();
        let v = true;
        let converted = convert_signal(&registry, "toggled(bool)", &[NativeArg::new(&v)]).unwrap();
        assert_eq!(converted[0].value.value(), &ScriptValue::Bool(true));
    }

    #[test]
    fn signal_conversion_error_propagates() {
        let registry = ConstructorRegistry::with_primitives();
        let wrong = 1u8;
        let err = convert_signal(&registry, "toggled(bool)", &[NativeArg::new(&wrong)]).unwrap_err();
        assert_eq!(err, DispatchError::Conversion(ConversionError::type_mismatch("bool")));
    }

    #[test]
    fn object_signal_args_need_registration() {
        let mut registry = ConstructorRegistry::with_primitives();
        registry.register(ObjectConstructor::for_class("Widget")).unwrap();

        let mut heap = ObjectHeap::new();
        let handle = heap.allocate("Widget", ());

        let converted =
            convert_signal(&registry, "created(Widget)", &[NativeArg::new(&handle)]).unwrap();
        assert!(converted[0].owned_reference);
        assert!(converted[0].needs_registration());
        assert_eq!(converted[0].value.value(), &ScriptValue::Object(handle));
    }

    #[test]
    fn invoke_returning_converts_written_value() {
        let registry = ConstructorRegistry::with_primitives();
        let converted = invoke_returning(&registry, primitives::INT32, |mut ret| ret.write(7i32))
            .unwrap();
        assert_eq!(converted.into_value().value(), &ScriptValue::Int(7));
    }

    #[test]
    fn invoke_returning_unwritten_is_an_error() {
        let registry = ConstructorRegistry::with_primitives();
        let err = invoke_returning(&registry, primitives::INT32, |_| Ok(())).unwrap_err();
        assert_eq!(
            err,
            DispatchError::Conversion(ConversionError::UnwrittenReturn {
                type_name: "int".into()
            })
        );
    }

    #[test]
    fn invoke_returning_wrong_write_type() {
        let registry = ConstructorRegistry::with_primitives();
        let err = invoke_returning(&registry, primitives::INT32, |mut ret| ret.write("seven"))
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Conversion(ConversionError::ReturnTypeMismatch { .. })
        ));
    }

    #[test]
    fn reentrant_calls_keep_their_own_results() {
        let registry = ConstructorRegistry::with_primitives();

        let outer = invoke_returning(&registry, primitives::INT32, |mut ret| {
            ret.write(1i32)?;
            let inner =
                invoke_returning(&registry, primitives::INT32, |mut ret| ret.write(2i32))
                    .map_err(|_| ConversionError::type_mismatch("int"))?;
            assert_eq!(inner.value.value(), &ScriptValue::Int(2));
            Ok(())
        })
        .unwrap();

        assert_eq!(outer.value.value(), &ScriptValue::Int(1));
    }

    #[test]
    fn unregistered_return_type_falls_back_to_none() {
        let registry = ConstructorRegistry::new();
        let converted =
            invoke_returning(&registry, TypeHash::from_name("QRect"), |_| Ok(())).unwrap();
        assert!(converted.value.ptr_eq(&ScriptObject::none()));
        assert!(!converted.needs_registration());
    }

    #[test]
    fn unregistered_return_type_discards_written_result() {
        let registry = ConstructorRegistry::with_primitives();
        let converted = invoke_returning(&registry, TypeHash::from_name("QRect"), |mut ret| {
            ret.write((0u32, 0u32, 10u32, 10u32))
        })
        .unwrap();
        assert!(converted.value.ptr_eq(&ScriptObject::none()));
    }

    #[test]
    fn unconvertible_return_type_discards_written_result() {
        let mut registry = ConstructorRegistry::with_primitives();
        registry.register_unconvertible("void*").unwrap();

        let converted =
            invoke_returning(&registry, TypeHash::from_name("void*"), |mut ret| ret.write(0usize))
                .unwrap();
        assert!(converted.value.ptr_eq(&ScriptObject::none()));
        assert!(!converted.owned_reference);
    }

    #[test]
    fn shared_registry_converts_parameters_across_threads() {
        let registry = ConstructorRegistry::with_primitives();

        std::thread::scope(|scope| {
            let workers: Vec<_> = (0..8i32)
                .map(|worker| {
                    let registry = &registry;
                    scope.spawn(move || {
                        (0..100i32)
                            .map(|i| {
                                let value = worker * 1000 + i;
                                let text = value.to_string();
                                let converted = convert_signal_args(
                                    registry,
                                    &[primitives::INT32, primitives::STRING],
                                    &[NativeArg::new(&value), NativeArg::new(&text)],
                                )
                                .unwrap();
                                assert_eq!(
                                    converted[0].value.value(),
                                    &ScriptValue::Int(i64::from(value))
                                );
                                assert_eq!(converted[1].value.value(), &ScriptValue::Str(text));
                            })
                            .count()
                    })
                })
                .collect();

            for worker in workers {
                assert_eq!(worker.join().unwrap(), 100);
            }
        });
    }
}
