//! Type queries needed to validate expression nodes.
//!
//! Expression factories never touch a concrete registry; they ask a
//! [`TypeContext`] whether one type converts to another and which method an
//! implicit call binds to.

use std::sync::Arc;

use crate::{FunctionEntry, LookupError, TypeHash, primitives};

/// Type-introspection capability consumed by expression factories.
pub trait TypeContext {
    /// Display name of a type, falling back to its hash when unknown.
    fn type_name(&self, hash: TypeHash) -> String;

    /// Whether a value of type `from` may be used where `to` is expected
    /// without an explicit conversion.
    fn is_assignable(&self, from: TypeHash, to: TypeHash) -> bool;

    /// Resolve the instance method `name` on `owner` (declared or inherited)
    /// whose parameters best accept `arg_types`.
    ///
    /// Static methods are never candidates.
    fn find_method(
        &self,
        owner: TypeHash,
        name: &str,
        arg_types: &[TypeHash],
    ) -> Result<Arc<FunctionEntry>, LookupError>;

    /// Resolve a constructor of `owner` accepting `arg_types`.
    fn find_constructor(
        &self,
        owner: TypeHash,
        arg_types: &[TypeHash],
    ) -> Result<Arc<FunctionEntry>, LookupError>;

    /// Whether `ty` supports element enumeration.
    fn is_enumerable(&self, ty: TypeHash) -> bool {
        self.is_assignable(ty, primitives::IENUMERABLE)
    }
}
