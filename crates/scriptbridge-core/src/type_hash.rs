//! Deterministic hash-based identity for native types.
//!
//! This module provides [`TypeHash`], a 64-bit hash that identifies a native
//! type by name. Constructors report their native type as a `TypeHash` and the
//! registry keys its table on it, so a type can be referred to before anything
//! for it has been registered.
//!
//! # Hash Computation
//!
//! Uses XXHash64 with domain-specific mixing constants so that a type named
//! `foo` and a signal named `foo` never collide.
//!
//! # Examples
//!
//! ```
//! use scriptbridge_core::TypeHash;
//!
//! let int_hash = TypeHash::from_name("int");
//! assert_eq!(int_hash, TypeHash::from_name("int"));
//!
//! // Signal hashes include their parameter types
//! let sig1 = TypeHash::from_function("valueChanged", &[TypeHash::from_name("int")]);
//! let sig2 = TypeHash::from_function("valueChanged", &[TypeHash::from_name("float")]);
//! assert_ne!(sig1, sig2);
//! ```

use std::fmt;

use xxhash_rust::const_xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Separator constant used when folding parameter hashes.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for type hashes
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for signal and method signature hashes
    pub const FUNCTION: u64 = 0x5ea77ffbcdf5f302;

    /// Parameter position mixing constants.
    /// Each parameter position gets a unique constant so parameter order matters.
    pub const PARAM_MARKERS: [u64; 16] = [
        0x9e3779b97f4a7c15,
        0xbf58476d1ce4e5b9,
        0x94d049bb133111eb,
        0xd6e8feb86659fd93,
        0xe7037ed1a0b428db,
        0xc6a4a7935bd1e995,
        0x8648dbbc94d49b8d,
        0xa2b48b2c69e0d657,
        0x7c3e9f2a5b8d1403,
        0x5d8c7b4a3e9f2106,
        0x3f1e9d8c7b5a4203,
        0x1a2b3c4d5e6f7089,
        0x9f8e7d6c5b4a3210,
        0x2468ace013579bdf,
        0xfdb97531eca86420,
        0x123456789abcdef0,
    ];
}

/// A deterministic 64-bit hash identifying a native type or signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a native type name.
    ///
    /// This is a `const fn` so well-known hashes can be computed at compile time.
    #[inline]
    pub const fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create a signature hash from a name and its parameter type hashes.
    ///
    /// Parameter order matters - `(int, float)` hashes differently than `(float, int)`.
    #[inline]
    pub fn from_function(name: &str, param_hashes: &[TypeHash]) -> Self {
        let mut hash = hash_constants::FUNCTION ^ xxh64(name.as_bytes(), 0);
        for (i, param) in param_hashes.iter().enumerate() {
            let marker = hash_constants::PARAM_MARKERS
                .get(i)
                .copied()
                .unwrap_or_else(|| hash_constants::PARAM_MARKERS[0].wrapping_add(i as u64));
            // wrapping_mul keeps the fold non-commutative
            hash = hash.wrapping_mul(hash_constants::SEP).wrapping_add(marker ^ param.0);
        }
        TypeHash(hash)
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Well-known hashes for the native framework's built-in types.
pub mod primitives {
    use super::TypeHash;

    /// Hash for `void`
    pub const VOID: TypeHash = TypeHash::from_name("void");

    /// Hash for `bool`
    pub const BOOL: TypeHash = TypeHash::from_name("bool");

    /// Hash for `int8`
    pub const INT8: TypeHash = TypeHash::from_name("int8");

    /// Hash for `int16`
    pub const INT16: TypeHash = TypeHash::from_name("int16");

    /// Hash for `int` (32-bit signed integer)
    pub const INT32: TypeHash = TypeHash::from_name("int");

    /// Hash for `int64`
    pub const INT64: TypeHash = TypeHash::from_name("int64");

    /// Hash for `uint8`
    pub const UINT8: TypeHash = TypeHash::from_name("uint8");

    /// Hash for `uint16`
    pub const UINT16: TypeHash = TypeHash::from_name("uint16");

    /// Hash for `uint` (32-bit unsigned integer)
    pub const UINT32: TypeHash = TypeHash::from_name("uint");

    /// Hash for `uint64`
    pub const UINT64: TypeHash = TypeHash::from_name("uint64");

    /// Hash for `float`
    pub const FLOAT: TypeHash = TypeHash::from_name("float");

    /// Hash for `double`
    pub const DOUBLE: TypeHash = TypeHash::from_name("double");

    /// Hash for `string`
    pub const STRING: TypeHash = TypeHash::from_name("string");

    /// Hash for the generic framework object reference.
    /// Custom object classes hash under their own class name.
    pub const OBJECT: TypeHash = TypeHash::from_name("object");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_hash_determinism() {
        assert_eq!(TypeHash::from_name("int"), TypeHash::from_name("int"));
        assert_eq!(
            TypeHash::from_name("Widget"),
            TypeHash::from_name("Widget")
        );
    }

    #[test]
    fn type_hash_uniqueness() {
        let int_hash = TypeHash::from_name("int");
        let float_hash = TypeHash::from_name("float");
        let widget_hash = TypeHash::from_name("Widget");

        assert_ne!(int_hash, float_hash);
        assert_ne!(int_hash, widget_hash);
        assert_ne!(float_hash, widget_hash);
    }

    #[test]
    fn signature_hash_parameter_order_matters() {
        let int_hash = TypeHash::from_name("int");
        let float_hash = TypeHash::from_name("float");

        let sig1 = TypeHash::from_function("moved", &[int_hash, float_hash]);
        let sig2 = TypeHash::from_function("moved", &[float_hash, int_hash]);
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn signature_vs_type_distinction() {
        assert_ne!(
            TypeHash::from_function("clicked", &[]),
            TypeHash::from_name("clicked")
        );
    }

    #[test]
    fn many_parameters_supported() {
        let int_hash = TypeHash::from_name("int");
        let params: Vec<TypeHash> = (0..40).map(|_| int_hash).collect();
        assert!(!TypeHash::from_function("many", &params).is_empty());
    }

    #[test]
    fn primitive_constants_match_from_name() {
        assert_eq!(primitives::VOID, TypeHash::from_name("void"));
        assert_eq!(primitives::INT32, TypeHash::from_name("int"));
        assert_eq!(primitives::DOUBLE, TypeHash::from_name("double"));
        assert_eq!(primitives::OBJECT, TypeHash::from_name("object"));
    }

    #[test]
    fn primitive_constants_are_unique() {
        use std::collections::HashSet;

        let all = [
            primitives::VOID,
            primitives::BOOL,
            primitives::INT8,
            primitives::INT16,
            primitives::INT32,
            primitives::INT64,
            primitives::UINT8,
            primitives::UINT16,
            primitives::UINT32,
            primitives::UINT64,
            primitives::FLOAT,
            primitives::DOUBLE,
            primitives::STRING,
            primitives::OBJECT,
        ];

        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len(), "All primitive hashes should be unique");
    }

    #[test]
    fn hash_formatting() {
        let hash = TypeHash::from_name("int");
        assert!(format!("{}", hash).starts_with("0x"));
        assert!(format!("{:?}", hash).starts_with("TypeHash(0x"));
        assert!(TypeHash::EMPTY.is_empty());
        assert_eq!(TypeHash(0x1234).as_u64(), 0x1234);
    }
}
