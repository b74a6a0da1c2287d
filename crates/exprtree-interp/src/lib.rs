//! Tree-walking evaluation of expression trees.
//!
//! List initializers are lowered with [`Expr::reduce`](exprtree_expr::Expr::reduce)
//! before they run, so the interpreter only understands the primitive nodes.

mod config;
mod environment;
mod interpreter;

pub use config::InterpreterConfig;
pub use interpreter::Interpreter;
