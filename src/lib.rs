//! Immutable list-initialization expression trees.
//!
//! A list initializer is "construct an object, then call `Add` on it for each
//! element". This crate ties together the pieces:
//!
//! - [`core`]: type identities, function entries, values and errors
//! - [`registry`]: the type registry and `Add` resolution
//! - [`expr`]: expression nodes, [`ListInitExpr`](expr::ListInitExpr) and lowering
//! - [`interp`]: evaluation of lowered trees
//! - [`modules`]: `List<T>` and `Dictionary<string,int>`
//!
//! [`Engine`] bundles a populated registry with an interpreter.

mod engine;

pub use exprtree_core as core;
pub use exprtree_expr as expr;
pub use exprtree_interp as interp;
pub use exprtree_modules as modules;
pub use exprtree_registry as registry;

pub use engine::Engine;

/// Commonly used items.
pub mod prelude {
    pub use crate::Engine;
    pub use exprtree_core::{
        ExprError, ExprErrorKind, ExprTreeError, FunctionEntry, TypeContext, TypeHash, Value,
        primitives,
    };
    pub use exprtree_expr::{ConstantExpr, ElementInit, Expr, ListInitExpr, NewExpr, ParameterExpr};
    pub use exprtree_interp::{Interpreter, InterpreterConfig};
    pub use exprtree_registry::TypeRegistry;
}
