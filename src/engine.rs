//! Registry plus interpreter in one handle.

use std::sync::Arc;

use exprtree_core::{ExprTreeError, TypeHash, Value};
use exprtree_expr::{Expr, ListInitExpr, NewExpr};
use exprtree_interp::{Interpreter, InterpreterConfig};
use exprtree_registry::TypeRegistry;

/// A registry with the built-in types and collections installed, and an
/// interpreter to run trees built against it.
#[derive(Debug)]
pub struct Engine {
    registry: TypeRegistry,
    interpreter: Interpreter,
}

impl Engine {
    pub fn new() -> Result<Self, ExprTreeError> {
        Self::with_config(InterpreterConfig::default())
    }

    pub fn with_config(config: InterpreterConfig) -> Result<Self, ExprTreeError> {
        let mut registry = TypeRegistry::with_builtins();
        exprtree_modules::install(&mut registry)?;
        tracing::debug!(
            types = registry.type_count(),
            functions = registry.function_count(),
            "engine ready"
        );
        Ok(Self {
            registry,
            interpreter: Interpreter::new(config),
        })
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Mutable access for registering additional types.
    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    /// `new T()` through the parameterless constructor of `ty`.
    pub fn construct(&self, ty: TypeHash) -> Result<Arc<NewExpr>, ExprTreeError> {
        Ok(NewExpr::new(&self.registry, ty, Vec::new())?)
    }

    /// `new T() { items.. }` with `Add` inferred per item.
    pub fn list_init(&self, ty: TypeHash, items: Vec<Expr>) -> Result<Arc<ListInitExpr>, ExprTreeError> {
        let new = self.construct(ty)?;
        Ok(ListInitExpr::new(&self.registry, Some(new), Some(items))?)
    }

    /// `new T() { {a, b}, .. }` with `Add` inferred per group.
    pub fn list_init_groups(
        &self,
        ty: TypeHash,
        groups: Vec<Vec<Expr>>,
    ) -> Result<Arc<ListInitExpr>, ExprTreeError> {
        let new = self.construct(ty)?;
        Ok(ListInitExpr::with_argument_groups(&self.registry, Some(new), Some(groups))?)
    }

    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, ExprTreeError> {
        Ok(self.interpreter.evaluate(expr)?)
    }
}
