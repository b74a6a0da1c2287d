//! Core types for exprtree.
//!
//! This crate holds everything the other crates agree on:
//!
//! - [`TypeHash`] identities and the well-known [`primitives`]
//! - registry entries ([`TypeEntry`], [`ClassEntry`], [`InterfaceEntry`],
//!   [`FunctionEntry`]) and signatures ([`FunctionDef`])
//! - runtime [`Value`]s and the [`NativeFn`] calling convention
//! - the [`TypeContext`] capability expression factories validate against
//! - error enums for every phase

mod context;
mod entries;
mod error;
mod function_def;
mod native_fn;
mod type_hash;
mod value;

pub use context::TypeContext;
pub use entries::{
    ClassEntry, FunctionEntry, FunctionImpl, InterfaceEntry, PrimitiveEntry, PrimitiveKind,
    TypeEntry,
};
pub use error::{
    ExprError, ExprErrorKind, ExprTreeError, LookupError, NativeError, RegistrationError,
    RuntimeError,
};
pub use function_def::{FunctionDef, FunctionTraits, Param, Visibility};
pub use native_fn::{CallContext, NativeCallable, NativeFn};
pub use type_hash::{TypeHash, hash_constants, primitives};
pub use value::{ObjectRef, Value};
