//! Object construction.

use std::sync::Arc;

use exprtree_core::{ExprError, FunctionEntry, TypeContext, TypeHash};

use crate::validate::{describe_argument_types, validate_arguments};
use crate::{Expr, Result};

/// Construction of an object through one of its constructors.
#[derive(Debug)]
pub struct NewExpr {
    constructor: Arc<FunctionEntry>,
    arguments: Arc<[Expr]>,
    data_type: TypeHash,
}

impl NewExpr {
    /// Construct `ty`, resolving the constructor from the argument types.
    pub fn new(ctx: &dyn TypeContext, ty: TypeHash, arguments: Vec<Expr>) -> Result<Arc<Self>> {
        let arg_types: Vec<TypeHash> = arguments.iter().map(Expr::data_type).collect();
        let constructor = ctx.find_constructor(ty, &arg_types).map_err(|err| {
            ExprError::invalid_argument(
                "type",
                format!(
                    "type '{}' has no constructor taking ({}): {err}",
                    ctx.type_name(ty),
                    describe_argument_types(ctx, &arguments)
                ),
            )
        })?;
        Self::with_constructor(ctx, constructor, arguments)
    }

    /// Construct through an explicit constructor.
    pub fn with_constructor(
        ctx: &dyn TypeContext,
        constructor: Arc<FunctionEntry>,
        arguments: Vec<Expr>,
    ) -> Result<Arc<Self>> {
        if !constructor.def.is_constructor() {
            return Err(ExprError::invalid_argument(
                "constructor",
                format!("'{}' is not a constructor", constructor.name()),
            ));
        }
        validate_arguments(ctx, &constructor.def, &arguments, "arguments")?;
        let data_type = constructor.def.return_type;
        Ok(Arc::new(Self {
            constructor,
            arguments: arguments.into(),
            data_type,
        }))
    }

    pub fn constructor(&self) -> &Arc<FunctionEntry> {
        &self.constructor
    }

    pub fn arguments(&self) -> &[Expr] {
        &self.arguments
    }

    /// The constructed type.
    pub fn data_type(&self) -> TypeHash {
        self.data_type
    }
}
