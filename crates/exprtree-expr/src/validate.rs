//! Checks shared by the call-shaped factories.

use exprtree_core::{ExprError, FunctionDef, TypeContext};

use crate::{Expr, Result};

/// Check that `args` match the parameters of `def` in count and type.
///
/// Failures are reported against `param`.
pub(crate) fn validate_arguments(
    ctx: &dyn TypeContext,
    def: &FunctionDef,
    args: &[Expr],
    param: &'static str,
) -> Result<()> {
    if args.len() != def.param_count() {
        return Err(ExprError::invalid_argument(
            param,
            format!(
                "incorrect number of arguments supplied for call to '{}': expected {}, found {}",
                def.name,
                def.param_count(),
                args.len()
            ),
        ));
    }

    for (index, (arg, expected)) in args.iter().zip(def.param_types()).enumerate() {
        let found = arg.data_type();
        if !ctx.is_assignable(found, expected) {
            return Err(ExprError::invalid_argument(
                param,
                format!(
                    "argument {index} of type '{}' cannot be used for parameter of type '{}' of method '{}'",
                    ctx.type_name(found),
                    ctx.type_name(expected),
                    def.name
                ),
            ));
        }
    }
    Ok(())
}

/// Type names of `args`, comma separated.
pub(crate) fn describe_argument_types(ctx: &dyn TypeContext, args: &[Expr]) -> String {
    args.iter()
        .map(|a| ctx.type_name(a.data_type()))
        .collect::<Vec<_>>()
        .join(", ")
}
