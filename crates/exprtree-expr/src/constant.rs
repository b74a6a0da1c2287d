//! Constant values.

use std::sync::Arc;

use exprtree_core::{ExprError, TypeContext, TypeHash, Value};

use crate::{Expr, Result};

/// A literal value.
#[derive(Debug)]
pub struct ConstantExpr {
    value: Value,
    data_type: TypeHash,
}

impl ConstantExpr {
    /// A constant typed by its value.
    pub fn new(value: impl Into<Value>) -> Expr {
        let value = value.into();
        let data_type = value.type_hash();
        Expr::Constant(Arc::new(Self { value, data_type }))
    }

    pub fn int(value: i64) -> Expr {
        Self::new(value)
    }

    pub fn string(value: &str) -> Expr {
        Self::new(value)
    }

    /// A constant with a declared type the value must convert to.
    pub fn typed(ctx: &dyn TypeContext, value: impl Into<Value>, data_type: TypeHash) -> Result<Expr> {
        let value = value.into();
        if !ctx.is_assignable(value.type_hash(), data_type) {
            return Err(ExprError::invalid_argument(
                "type",
                format!(
                    "a value of type '{}' cannot be used as a constant of type '{}'",
                    ctx.type_name(value.type_hash()),
                    ctx.type_name(data_type)
                ),
            ));
        }
        Ok(Expr::Constant(Arc::new(Self { value, data_type })))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn data_type(&self) -> TypeHash {
        self.data_type
    }
}

impl Expr {
    /// Shorthand for [`ConstantExpr::new`].
    pub fn constant(value: impl Into<Value>) -> Expr {
        ConstantExpr::new(value)
    }
}
