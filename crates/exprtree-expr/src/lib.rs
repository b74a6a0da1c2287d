//! Immutable expression trees.
//!
//! Nodes are built through validating factories and shared by `Arc`; nothing
//! mutates a node after construction. The centrepiece is [`ListInitExpr`]:
//! "construct an object, then call `Add` on it for every initializer".
//!
//! ## Modules
//!
//! - [`Expr`]: the node enum, identity, typing and reduction
//! - [`ElementInit`]: one `Add` call of a list initializer
//! - [`ListInitExpr`]: the list initializer factories, `update` and lowering
//! - [`NewExpr`], [`CallExpr`], [`AssignExpr`], [`BlockExpr`], [`ConstantExpr`],
//!   [`ParameterExpr`]: the primitive nodes list initializers lower to
//!
//! Every factory validates against a [`TypeContext`](exprtree_core::TypeContext)
//! and reports [`ExprError`](exprtree_core::ExprError) synchronously.

mod assign;
mod block;
mod call;
mod constant;
mod display;
mod element_init;
mod expr;
mod list_init;
mod new_expr;
mod parameter;
mod validate;

#[cfg(test)]
mod test_support;

pub use assign::AssignExpr;
pub use block::BlockExpr;
pub use call::CallExpr;
pub use constant::ConstantExpr;
pub use element_init::ElementInit;
pub use expr::{Expr, NodeKind};
pub use list_init::ListInitExpr;
pub use new_expr::NewExpr;
pub use parameter::ParameterExpr;

/// Result type for expression factories.
pub type Result<T> = std::result::Result<T, exprtree_core::ExprError>;
