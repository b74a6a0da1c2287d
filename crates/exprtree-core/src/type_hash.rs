//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] is a 64-bit hash that identifies types, functions, methods and
//! constructors. Hashes are computed from names and signatures, so a node can
//! refer to a type before (or without) holding a registry borrow, and the same
//! name always yields the same identity.
//!
//! # Examples
//!
//! ```
//! use exprtree_core::TypeHash;
//!
//! let list = TypeHash::from_name("List<int>");
//! assert_eq!(list, TypeHash::from_name("List<int>"));
//!
//! let add_int = TypeHash::from_method(list, "Add", &[TypeHash::from_name("int")]);
//! let add_str = TypeHash::from_method(list, "Add", &[TypeHash::from_name("string")]);
//! assert_ne!(add_int, add_str);
//! ```

use std::fmt;

use xxhash_rust::const_xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
///
/// Types, functions, methods and constructors sharing a name still produce
/// distinct hashes.
pub mod hash_constants {
    /// Separator constant for path components.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for type hashes.
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for free function hashes.
    pub const FUNCTION: u64 = 0x5ea77ffbcdf5f302;

    /// Domain marker for method hashes (instance and static).
    pub const METHOD: u64 = 0x7d3c8b4a92e15f6d;

    /// Domain marker for constructor hashes.
    pub const CONSTRUCTOR: u64 = 0x9a7f3d5e2b8c4601;

    /// Domain marker for variable identities.
    pub const VARIABLE: u64 = 0x1a095090689d4647;

    /// Parameter position mixing constants, so parameter order matters.
    pub const PARAM_MARKERS: [u64; 8] = [
        0x9e3779b97f4a7c15,
        0xbf58476d1ce4e5b9,
        0x94d049bb133111eb,
        0xd6e8feb86659fd93,
        0xe7037ed1a0b428db,
        0xc6a4a7935bd1e995,
        0x8648dbbc94d49b8d,
        0xa2b48b2c69e0d657,
    ];
}

/// A deterministic 64-bit hash identifying a type, function or method.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a qualified type name.
    #[inline]
    pub const fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create a free function hash from name and parameter type hashes.
    #[inline]
    pub fn from_function(name: &str, param_hashes: &[TypeHash]) -> Self {
        let seed = hash_constants::FUNCTION ^ xxh64(name.as_bytes(), 0);
        TypeHash(mix_params(seed, param_hashes))
    }

    /// Create a method hash from owner type, method name and parameter type hashes.
    ///
    /// Static and instance methods share this domain; a type cannot declare both
    /// an instance and a static method with the same signature.
    #[inline]
    pub fn from_method(owner: TypeHash, name: &str, param_hashes: &[TypeHash]) -> Self {
        let seed = hash_constants::METHOD ^ owner.0 ^ xxh64(name.as_bytes(), 0);
        TypeHash(mix_params(seed, param_hashes))
    }

    /// Create a constructor hash from owner type and parameter type hashes.
    #[inline]
    pub fn from_constructor(owner: TypeHash, param_hashes: &[TypeHash]) -> Self {
        TypeHash(mix_params(hash_constants::CONSTRUCTOR ^ owner.0, param_hashes))
    }

    /// Create a variable identity from a sequence number.
    #[inline]
    pub fn from_variable(seq: u64) -> Self {
        TypeHash(hash_constants::VARIABLE ^ seq.wrapping_mul(hash_constants::SEP))
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

fn mix_params(seed: u64, param_hashes: &[TypeHash]) -> u64 {
    let mut hash = seed;
    for (i, param) in param_hashes.iter().enumerate() {
        let marker = hash_constants::PARAM_MARKERS
            .get(i)
            .copied()
            .unwrap_or_else(|| hash_constants::PARAM_MARKERS[0].wrapping_add(i as u64));
        // wrapping_mul keeps the fold non-commutative
        hash = hash
            .wrapping_mul(hash_constants::SEP)
            .wrapping_add(marker ^ param.0);
    }
    hash
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

/// Well-known hashes for the built-in types.
pub mod primitives {
    use super::TypeHash;

    /// Hash for `void`.
    pub const VOID: TypeHash = TypeHash::from_name("void");

    /// Hash for `bool`.
    pub const BOOL: TypeHash = TypeHash::from_name("bool");

    /// Hash for `int` (64-bit signed integer).
    pub const INT: TypeHash = TypeHash::from_name("int");

    /// Hash for `float` (64-bit float).
    pub const FLOAT: TypeHash = TypeHash::from_name("float");

    /// Hash for `string`.
    pub const STRING: TypeHash = TypeHash::from_name("string");

    /// Hash for `object`, the root every type converts to.
    pub const OBJECT: TypeHash = TypeHash::from_name("object");

    /// Hash for the `IEnumerable` interface, the element-enumeration capability.
    pub const IENUMERABLE: TypeHash = TypeHash::from_name("IEnumerable");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_hash() {
        assert_eq!(TypeHash::from_name("int"), TypeHash::from_name("int"));
        assert_ne!(TypeHash::from_name("int"), TypeHash::from_name("float"));
    }

    #[test]
    fn primitive_constants_match_from_name() {
        assert_eq!(primitives::INT, TypeHash::from_name("int"));
        assert_eq!(primitives::STRING, TypeHash::from_name("string"));
        assert_eq!(primitives::IENUMERABLE, TypeHash::from_name("IEnumerable"));
    }

    #[test]
    fn parameter_order_matters() {
        let owner = TypeHash::from_name("Dictionary<string,int>");
        let a = TypeHash::from_method(owner, "Add", &[primitives::STRING, primitives::INT]);
        let b = TypeHash::from_method(owner, "Add", &[primitives::INT, primitives::STRING]);
        assert_ne!(a, b);
    }

    #[test]
    fn domains_do_not_collide() {
        let owner = TypeHash::from_name("List<int>");
        let method = TypeHash::from_method(owner, "Add", &[]);
        let ctor = TypeHash::from_constructor(owner, &[]);
        let func = TypeHash::from_function("Add", &[]);
        assert_ne!(method, ctor);
        assert_ne!(method, func);
        assert_ne!(ctor, func);
    }

    #[test]
    fn owner_distinguishes_methods() {
        let a = TypeHash::from_method(TypeHash::from_name("A"), "Add", &[primitives::INT]);
        let b = TypeHash::from_method(TypeHash::from_name("B"), "Add", &[primitives::INT]);
        assert_ne!(a, b);
    }

    #[test]
    fn variable_ids_are_distinct() {
        assert_ne!(TypeHash::from_variable(1), TypeHash::from_variable(2));
        assert!(!TypeHash::from_variable(0).is_empty());
    }

    #[test]
    fn empty_hash() {
        assert!(TypeHash::EMPTY.is_empty());
        assert!(!primitives::INT.is_empty());
    }

    #[test]
    fn display_is_hex() {
        let text = format!("{}", TypeHash(0xff));
        assert_eq!(text, "0x00000000000000ff");
    }
}
