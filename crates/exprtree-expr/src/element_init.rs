//! A single `Add` call of a list initializer.

use std::sync::Arc;

use exprtree_core::{ExprError, FunctionEntry, TypeContext};

use crate::validate::validate_arguments;
use crate::{Expr, Result};

/// Name every insertion method must carry, compared ASCII case-insensitively.
const ADD_METHOD_NAME: &str = "Add";

#[derive(Debug)]
struct ElementInitData {
    add_method: Arc<FunctionEntry>,
    arguments: Arc<[Expr]>,
}

/// An insertion method paired with the arguments of one call to it.
///
/// The arguments always match the method's parameters in count and type.
/// Cloning shares the descriptor; [`ElementInit::ptr_eq`] compares identity.
#[derive(Debug, Clone)]
pub struct ElementInit(Arc<ElementInitData>);

impl ElementInit {
    /// Validate and build a descriptor.
    ///
    /// # Errors
    ///
    /// - `ArgumentNull` naming `addMethod` or `arguments` when either is absent
    /// - `InvalidArgument` naming `addMethod` when the method is static, not
    ///   public, not named `Add`, or takes no parameters
    /// - `InvalidArgument` naming `arguments` when the arguments do not match
    ///   the parameters
    pub fn new<I>(
        ctx: &dyn TypeContext,
        add_method: Option<Arc<FunctionEntry>>,
        arguments: Option<I>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Expr>,
    {
        let add_method = add_method.ok_or(ExprError::null("addMethod"))?;
        let arguments = arguments.ok_or(ExprError::null("arguments"))?;
        Self::create(ctx, add_method, arguments.into_iter().collect())
    }

    pub(crate) fn create(
        ctx: &dyn TypeContext,
        add_method: Arc<FunctionEntry>,
        arguments: Vec<Expr>,
    ) -> Result<Self> {
        validate_add_method(&add_method)?;
        validate_arguments(ctx, &add_method.def, &arguments, "arguments")?;
        Ok(ElementInit(Arc::new(ElementInitData {
            add_method,
            arguments: arguments.into(),
        })))
    }

    pub fn add_method(&self) -> &Arc<FunctionEntry> {
        &self.0.add_method
    }

    pub fn arguments(&self) -> &[Expr] {
        &self.0.arguments
    }

    pub fn argument_count(&self) -> usize {
        self.0.arguments.len()
    }

    pub fn argument(&self, index: usize) -> Option<&Expr> {
        self.0.arguments.get(index)
    }

    /// Whether both handles share one descriptor.
    pub fn ptr_eq(&self, other: &ElementInit) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Same method with new arguments. Returns `self` when every argument is
    /// the identical node.
    pub fn update<I>(&self, ctx: &dyn TypeContext, arguments: I) -> Result<Self>
    where
        I: IntoIterator<Item = Expr>,
    {
        let arguments: Vec<Expr> = arguments.into_iter().collect();
        if same_nodes(&arguments, self.arguments()) {
            return Ok(self.clone());
        }
        Self::create(ctx, Arc::clone(self.add_method()), arguments)
    }

    pub(crate) fn shared_arguments(&self) -> Arc<[Expr]> {
        Arc::clone(&self.0.arguments)
    }
}

/// Element-wise node identity.
pub(crate) fn same_nodes(a: &[Expr], b: &[Expr]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.ptr_eq(y))
}

/// Checks on the insertion method alone, in reporting order.
pub(crate) fn validate_add_method(method: &FunctionEntry) -> Result<()> {
    let def = &method.def;
    if def.is_static() || !def.is_instance_method() {
        return Err(ExprError::invalid_argument(
            "addMethod",
            format!("'{}' must be an instance method", def.name),
        ));
    }
    if !def.name.eq_ignore_ascii_case(ADD_METHOD_NAME) {
        return Err(ExprError::invalid_argument(
            "addMethod",
            format!("'{}' is not an '{ADD_METHOD_NAME}' method", def.name),
        ));
    }
    if !def.is_public() {
        return Err(ExprError::invalid_argument(
            "addMethod",
            format!("'{}' is not accessible", def.name),
        ));
    }
    if def.param_count() == 0 {
        return Err(ExprError::invalid_argument(
            "addMethod",
            format!("'{}' must take at least one parameter", def.name),
        ));
    }
    Ok(())
}
