//! Type and function registry for exprtree.
//!
//! [`TypeRegistry`] stores types and functions by [`TypeHash`](exprtree_core::TypeHash),
//! answers inheritance and assignability questions, and resolves implicit
//! method calls. It is the production implementation of
//! [`TypeContext`](exprtree_core::TypeContext).

mod conversion;
mod overload;
mod registry;

pub use conversion::{Conversion, ConversionKind, find_conversion};
pub use overload::{OverloadMatch, resolve_overload};
pub use registry::TypeRegistry;
