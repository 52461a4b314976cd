//! Conversion of native Rust values into script values.
//!
//! [`IntoScript`] is the single per-type hook the generic
//! [`ValueConstructor`](crate::ValueConstructor) needs. Supported types:
//!
//! - Integers: `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64` (lossless;
//!   `u64` above `i64::MAX` becomes [`ScriptValue::UInt`])
//! - Floats: `f32`, `f64`
//! - `bool`, `()`, `String`, `&str`
//! - [`ObjectHandle`] and `Option<T>` (`None` becomes the script none value)

use crate::runtime::{ObjectHandle, ScriptValue};

/// Convert a native value into a script value.
pub trait IntoScript {
    /// Convert this value into a script value.
    fn into_script(self) -> ScriptValue;
}

macro_rules! impl_into_script_int {
    ($($ty:ty),*) => {
        $(
            impl IntoScript for $ty {
                fn into_script(self) -> ScriptValue {
                    ScriptValue::Int(self as i64)
                }
            }
        )*
    };
}

impl_into_script_int!(i8, i16, i32, i64, u8, u16, u32);

impl IntoScript for u64 {
    fn into_script(self) -> ScriptValue {
        match i64::try_from(self) {
            Ok(value) => ScriptValue::Int(value),
            Err(_) => ScriptValue::UInt(self),
        }
    }
}

impl IntoScript for f32 {
    fn into_script(self) -> ScriptValue {
        ScriptValue::Float(self as f64)
    }
}

impl IntoScript for f64 {
    fn into_script(self) -> ScriptValue {
        ScriptValue::Float(self)
    }
}

impl IntoScript for bool {
    fn into_script(self) -> ScriptValue {
        ScriptValue::Bool(self)
    }
}

impl IntoScript for () {
    fn into_script(self) -> ScriptValue {
        ScriptValue::None
    }
}

impl IntoScript for String {
    fn into_script(self) -> ScriptValue {
        ScriptValue::Str(self)
    }
}

impl IntoScript for &str {
    fn into_script(self) -> ScriptValue {
        ScriptValue::Str(self.to_owned())
    }
}

impl IntoScript for ObjectHandle {
    fn into_script(self) -> ScriptValue {
        ScriptValue::Object(self)
    }
}

impl<T: IntoScript> IntoScript for Option<T> {
    fn into_script(self) -> ScriptValue {
        match self {
            Some(value) => value.into_script(),
            None => ScriptValue::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    #[test]
    fn into_script_integers() {
        assert_eq!((-128i8).into_script(), ScriptValue::Int(-128));
        assert_eq!(1000i16.into_script(), ScriptValue::Int(1000));
        assert_eq!(100000i32.into_script(), ScriptValue::Int(100000));
        assert_eq!(i64::MAX.into_script(), ScriptValue::Int(i64::MAX));
        assert_eq!(255u8.into_script(), ScriptValue::Int(255));
        assert_eq!(u32::MAX.into_script(), ScriptValue::Int(4294967295));
    }

    #[test]
    fn into_script_u64_is_lossless() {
        assert_eq!(42u64.into_script(), ScriptValue::Int(42));
        assert_eq!((i64::MAX as u64).into_script(), ScriptValue::Int(i64::MAX));
        assert_eq!(
            (i64::MAX as u64 + 1).into_script(),
            ScriptValue::UInt(i64::MAX as u64 + 1)
        );
        assert_eq!(u64::MAX.into_script(), ScriptValue::UInt(u64::MAX));
        assert_eq!(ScriptValue::UInt(u64::MAX).type_name(), "int");
    }

    #[test]
    fn into_script_floats() {
        match 3.14f32.into_script() {
            ScriptValue::Float(v) => assert!((v - 3.14).abs() < 0.001),
            other => panic!("expected Float, got {other:?}"),
        }
        assert_eq!(2.5f64.into_script(), ScriptValue::Float(2.5));
    }

    #[test]
    fn into_script_bool_unit_and_strings() {
        assert_eq!(true.into_script(), ScriptValue::Bool(true));
        assert_eq!(().into_script(), ScriptValue::None);
        assert_eq!("hi".into_script(), ScriptValue::Str("hi".into()));
        assert_eq!(String::from("yo").into_script(), ScriptValue::Str("yo".into()));
    }

    #[test]
    fn into_script_handles_and_options() {
        let handle = ObjectHandle::new(1, TypeId::of::<u8>());
        assert_eq!(handle.into_script(), ScriptValue::Object(handle));
        assert_eq!(Some(5i32).into_script(), ScriptValue::Int(5));
        assert_eq!(None::<i32>.into_script(), ScriptValue::None);
    }
}
