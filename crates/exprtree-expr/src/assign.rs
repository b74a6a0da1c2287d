//! Variable assignment.

use std::sync::Arc;

use exprtree_core::{ExprError, TypeContext, TypeHash};

use crate::{Expr, ParameterExpr, Result};

/// Store a value into a variable. Evaluates to the stored value.
#[derive(Debug)]
pub struct AssignExpr {
    target: Arc<ParameterExpr>,
    value: Expr,
}

impl AssignExpr {
    pub fn new(ctx: &dyn TypeContext, target: Arc<ParameterExpr>, value: Expr) -> Result<Arc<Self>> {
        if !ctx.is_assignable(value.data_type(), target.data_type()) {
            return Err(ExprError::invalid_argument(
                "value",
                format!(
                    "expression of type '{}' cannot be assigned to a variable of type '{}'",
                    ctx.type_name(value.data_type()),
                    ctx.type_name(target.data_type())
                ),
            ));
        }
        Ok(Self::new_unchecked(target, value))
    }

    pub(crate) fn new_unchecked(target: Arc<ParameterExpr>, value: Expr) -> Arc<Self> {
        Arc::new(Self { target, value })
    }

    pub fn target(&self) -> &Arc<ParameterExpr> {
        &self.target
    }

    pub fn value(&self) -> &Expr {
        &self.value
    }

    /// The variable's type.
    pub fn data_type(&self) -> TypeHash {
        self.target.data_type()
    }
}

impl Expr {
    pub fn assign(ctx: &dyn TypeContext, target: Arc<ParameterExpr>, value: Expr) -> Result<Expr> {
        AssignExpr::new(ctx, target, value).map(Expr::Assign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstantExpr;
    use crate::test_support::registry;
    use exprtree_core::primitives;

    #[test]
    fn assign_widens_to_object() {
        let reg = registry();
        let var = ParameterExpr::new(primitives::OBJECT, Some("o"));
        let assign = AssignExpr::new(&reg, var, ConstantExpr::int(2)).unwrap();
        assert_eq!(assign.data_type(), primitives::OBJECT);
    }

    #[test]
    fn assign_rejects_incompatible_value() {
        let reg = registry();
        let var = ParameterExpr::new(primitives::INT, Some("i"));
        let err = AssignExpr::new(&reg, var, ConstantExpr::string("no")).unwrap_err();
        assert_eq!(err.param(), Some("value"));
    }
}
