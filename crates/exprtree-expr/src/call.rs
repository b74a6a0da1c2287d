//! Method and function calls.

use std::sync::Arc;

use exprtree_core::{ExprError, FunctionEntry, TypeContext, TypeHash};

use crate::validate::validate_arguments;
use crate::{Expr, Result};

/// A call to a function. Instance methods carry a receiver.
#[derive(Debug)]
pub struct CallExpr {
    object: Option<Expr>,
    method: Arc<FunctionEntry>,
    arguments: Arc<[Expr]>,
}

impl CallExpr {
    /// Build a call, checking the receiver against the method's owner and the
    /// arguments against its parameters.
    pub fn new(
        ctx: &dyn TypeContext,
        object: Option<Expr>,
        method: Arc<FunctionEntry>,
        arguments: Vec<Expr>,
    ) -> Result<Arc<Self>> {
        match (&object, method.def.object_type) {
            (Some(_), _) if method.def.is_static() => {
                return Err(ExprError::invalid_argument(
                    "instance",
                    format!("static method '{}' requires a null instance", method.name()),
                ));
            }
            (Some(instance), Some(owner)) => {
                if !ctx.is_assignable(instance.data_type(), owner) {
                    return Err(ExprError::invalid_argument(
                        "instance",
                        format!(
                            "instance of type '{}' is not valid for method '{}' on type '{}'",
                            ctx.type_name(instance.data_type()),
                            method.name(),
                            ctx.type_name(owner)
                        ),
                    ));
                }
            }
            (Some(_), None) => {
                return Err(ExprError::invalid_argument(
                    "instance",
                    format!("global function '{}' takes no instance", method.name()),
                ));
            }
            (None, _) if method.def.is_instance_method() => {
                return Err(ExprError::null("instance"));
            }
            (None, _) => {}
        }
        if method.def.is_constructor() {
            return Err(ExprError::invalid_argument(
                "method",
                format!("constructor '{}' cannot be called directly", method.name()),
            ));
        }
        validate_arguments(ctx, &method.def, &arguments, "arguments")?;
        Ok(Self::new_unchecked(object, method, arguments))
    }

    /// Build a call whose shape the caller has already validated.
    pub(crate) fn new_unchecked(
        object: Option<Expr>,
        method: Arc<FunctionEntry>,
        arguments: impl Into<Arc<[Expr]>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            object,
            method,
            arguments: arguments.into(),
        })
    }

    pub fn object(&self) -> Option<&Expr> {
        self.object.as_ref()
    }

    pub fn method(&self) -> &Arc<FunctionEntry> {
        &self.method
    }

    pub fn arguments(&self) -> &[Expr] {
        &self.arguments
    }

    /// The method's return type.
    pub fn data_type(&self) -> TypeHash {
        self.method.def.return_type
    }
}

impl Expr {
    /// Shorthand for [`CallExpr::new`] wrapped as an expression.
    pub fn call(
        ctx: &dyn TypeContext,
        object: Option<Expr>,
        method: Arc<FunctionEntry>,
        arguments: Vec<Expr>,
    ) -> Result<Expr> {
        CallExpr::new(ctx, object, method, arguments).map(Expr::Call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bag, bag_add, registry};
    use crate::{ConstantExpr, NewExpr};
    use exprtree_core::{ExprErrorKind, primitives};

    #[test]
    fn instance_call_is_typed_by_return() {
        let reg = registry();
        let target = Expr::New(NewExpr::new(&reg, bag(), Vec::new()).unwrap());
        let call = Expr::call(&reg, Some(target), bag_add(&reg), vec![ConstantExpr::int(1)]).unwrap();
        assert_eq!(call.data_type(), primitives::VOID);
        assert!(call.is_void());
    }

    #[test]
    fn instance_method_needs_receiver() {
        let reg = registry();
        let err = CallExpr::new(&reg, None, bag_add(&reg), vec![ConstantExpr::int(1)]).unwrap_err();
        assert_eq!(err.kind(), ExprErrorKind::ArgumentNull);
        assert_eq!(err.param(), Some("instance"));
    }

    #[test]
    fn receiver_must_match_owner() {
        let reg = registry();
        let err = CallExpr::new(
            &reg,
            Some(ConstantExpr::int(3)),
            bag_add(&reg),
            vec![ConstantExpr::int(1)],
        )
        .unwrap_err();
        assert_eq!(err.param(), Some("instance"));
    }

    #[test]
    fn wrong_argument_type() {
        let reg = registry();
        let target = Expr::New(NewExpr::new(&reg, bag(), Vec::new()).unwrap());
        let err = CallExpr::new(&reg, Some(target), bag_add(&reg), vec![ConstantExpr::string("x")])
            .unwrap_err();
        assert_eq!(err.param(), Some("arguments"));
    }
}
