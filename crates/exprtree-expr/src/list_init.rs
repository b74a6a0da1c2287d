//! List initialization: construct an object, then call `Add` on it once per
//! initializer.
//!
//! ## Factory shapes
//!
//! | factory | insertion method |
//! |---|---|
//! | [`ListInitExpr::new`] | `Add` resolved per element, one argument each |
//! | [`ListInitExpr::with_method`] | the supplied method, one argument each |
//! | [`ListInitExpr::with_elements`] | carried by prebuilt [`ElementInit`]s |
//! | [`ListInitExpr::with_argument_groups`] | `Add` resolved per argument group |
//!
//! All shapes check for missing inputs, normalise into a [`ListInitRequest`]
//! and share one validator.
//!
//! ## Validation order
//!
//! 1. missing constructor node (`newExpression`)
//! 2. missing initializers (`initializers`)
//! 3. `Add` resolution for implicit shapes (invalid operation), or the
//!    explicit method's own checks (`addMethod`)
//! 4. the constructed type must be enumerable (`newExpression`)
//! 5. per-element method and argument checks
//! 6. each method's owner must accept the constructed type (`addMethod`)

use std::sync::Arc;

use exprtree_core::{ExprError, FunctionEntry, TypeContext, TypeHash};
use tracing::{debug, trace};

use crate::element_init::validate_add_method;
use crate::{AssignExpr, BlockExpr, CallExpr, ElementInit, Expr, NewExpr, ParameterExpr, Result};

const ADD: &str = "Add";

/// Name of the temporary a list initializer lowers into.
const TEMP_NAME: &str = "list";

/// A constructor call followed by a sequence of `Add` calls on the result.
#[derive(Debug)]
pub struct ListInitExpr {
    new_expression: Arc<NewExpr>,
    initializers: Arc<[ElementInit]>,
}

/// How the insertion calls were described by the caller.
enum Initializers {
    /// Resolve `Add` per group from the group's argument types.
    Implicit(Vec<Vec<Expr>>),
    /// One call per argument, all through `add_method`.
    Explicit {
        add_method: Arc<FunctionEntry>,
        arguments: Vec<Expr>,
    },
    /// Already-built descriptors.
    Elements(Vec<ElementInit>),
}

/// Normalised input of every factory shape.
struct ListInitRequest {
    new_expression: Arc<NewExpr>,
    initializers: Initializers,
}

impl ListInitExpr {
    /// List initializer whose `Add` method is inferred per element.
    ///
    /// # Errors
    ///
    /// - `ArgumentNull` if either input is `None`
    /// - `InvalidOperation` if no `Add` accepts some element
    /// - `InvalidArgument` naming `newExpression` if the type is not enumerable
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn new<I>(
        ctx: &dyn TypeContext,
        new_expression: Option<Arc<NewExpr>>,
        initializers: Option<I>,
    ) -> Result<Arc<Self>>
    where
        I: IntoIterator<Item = Expr>,
    {
        let new_expression = new_expression.ok_or(ExprError::null("newExpression"))?;
        let initializers = initializers.ok_or(ExprError::null("initializers"))?;
        build(
            ctx,
            ListInitRequest {
                new_expression,
                initializers: Initializers::Implicit(
                    initializers.into_iter().map(|arg| vec![arg]).collect(),
                ),
            },
        )
    }

    /// List initializer calling `add_method` once per element.
    ///
    /// With no method this behaves like [`ListInitExpr::new`].
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn with_method<I>(
        ctx: &dyn TypeContext,
        new_expression: Option<Arc<NewExpr>>,
        add_method: Option<Arc<FunctionEntry>>,
        initializers: Option<I>,
    ) -> Result<Arc<Self>>
    where
        I: IntoIterator<Item = Expr>,
    {
        let Some(add_method) = add_method else {
            return Self::new(ctx, new_expression, initializers);
        };
        let new_expression = new_expression.ok_or(ExprError::null("newExpression"))?;
        let initializers = initializers.ok_or(ExprError::null("initializers"))?;
        build(
            ctx,
            ListInitRequest {
                new_expression,
                initializers: Initializers::Explicit {
                    add_method,
                    arguments: initializers.into_iter().collect(),
                },
            },
        )
    }

    /// List initializer from prebuilt element descriptors.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn with_elements<I>(
        ctx: &dyn TypeContext,
        new_expression: Option<Arc<NewExpr>>,
        initializers: Option<I>,
    ) -> Result<Arc<Self>>
    where
        I: IntoIterator<Item = ElementInit>,
    {
        let new_expression = new_expression.ok_or(ExprError::null("newExpression"))?;
        let initializers = initializers.ok_or(ExprError::null("initializers"))?;
        build(
            ctx,
            ListInitRequest {
                new_expression,
                initializers: Initializers::Elements(initializers.into_iter().collect()),
            },
        )
    }

    /// List initializer whose elements each take several arguments, as in
    /// `{ {"a", 1}, {"b", 2} }`. `Add` is resolved per group.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn with_argument_groups<I>(
        ctx: &dyn TypeContext,
        new_expression: Option<Arc<NewExpr>>,
        groups: Option<I>,
    ) -> Result<Arc<Self>>
    where
        I: IntoIterator<Item = Vec<Expr>>,
    {
        let new_expression = new_expression.ok_or(ExprError::null("newExpression"))?;
        let groups = groups.ok_or(ExprError::null("initializers"))?;
        build(
            ctx,
            ListInitRequest {
                new_expression,
                initializers: Initializers::Implicit(groups.into_iter().collect()),
            },
        )
    }

    pub fn new_expression(&self) -> &Arc<NewExpr> {
        &self.new_expression
    }

    pub fn initializers(&self) -> &[ElementInit] {
        &self.initializers
    }

    /// The constructed type.
    pub fn data_type(&self) -> TypeHash {
        self.new_expression.data_type()
    }

    /// Replace the children. Returns `self` when the constructor node and
    /// every descriptor are the identical instances.
    pub fn update<I>(
        self: &Arc<Self>,
        ctx: &dyn TypeContext,
        new_expression: Arc<NewExpr>,
        initializers: I,
    ) -> Result<Arc<Self>>
    where
        I: IntoIterator<Item = ElementInit>,
    {
        let initializers: Vec<ElementInit> = initializers.into_iter().collect();
        let unchanged = Arc::ptr_eq(&new_expression, &self.new_expression)
            && initializers.len() == self.initializers.len()
            && initializers
                .iter()
                .zip(self.initializers.iter())
                .all(|(a, b)| a.ptr_eq(b));
        if unchanged {
            return Ok(Arc::clone(self));
        }
        Self::with_elements(ctx, Some(new_expression), Some(initializers))
    }

    /// Always true: a list initializer lowers to a block.
    pub fn can_reduce(&self) -> bool {
        true
    }

    /// Lower to `{ list = new T(..); list.Add(..); ..; list }`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn reduce(&self) -> Expr {
        let temp = ParameterExpr::new(self.data_type(), Some(TEMP_NAME));
        let temp_ref = || Expr::Parameter(Arc::clone(&temp));

        let mut expressions = Vec::with_capacity(self.initializers.len() + 2);
        expressions.push(Expr::Assign(AssignExpr::new_unchecked(
            Arc::clone(&temp),
            Expr::New(Arc::clone(&self.new_expression)),
        )));
        for init in self.initializers.iter() {
            expressions.push(Expr::Call(CallExpr::new_unchecked(
                Some(temp_ref()),
                Arc::clone(init.add_method()),
                init.shared_arguments(),
            )));
        }
        expressions.push(temp_ref());

        trace!(calls = self.initializers.len(), "lowered list initializer");
        Expr::Block(BlockExpr::new_unchecked(vec![temp], expressions))
    }
}

#[tracing::instrument(level = "debug", skip_all)]
fn build(ctx: &dyn TypeContext, request: ListInitRequest) -> Result<Arc<ListInitExpr>> {
    let ListInitRequest {
        new_expression,
        initializers,
    } = request;
    let list_type = new_expression.data_type();

    let initializers = match initializers {
        Initializers::Implicit(groups) => {
            let methods = groups
                .iter()
                .map(|args| resolve_add(ctx, list_type, args))
                .collect::<Result<Vec<_>>>()?;
            ensure_enumerable(ctx, list_type)?;
            methods
                .into_iter()
                .zip(groups)
                .map(|(method, args)| ElementInit::create(ctx, method, args))
                .collect::<Result<Vec<_>>>()?
        }
        Initializers::Explicit {
            add_method,
            arguments,
        } => {
            validate_add_method(&add_method)?;
            ensure_enumerable(ctx, list_type)?;
            ensure_owner(ctx, list_type, &add_method)?;
            arguments
                .into_iter()
                .map(|arg| ElementInit::create(ctx, Arc::clone(&add_method), vec![arg]))
                .collect::<Result<Vec<_>>>()?
        }
        Initializers::Elements(elements) => {
            ensure_enumerable(ctx, list_type)?;
            elements
        }
    };

    for init in &initializers {
        ensure_owner(ctx, list_type, init.add_method())?;
    }

    debug!(
        list_type = %ctx.type_name(list_type),
        initializers = initializers.len(),
        "built list initializer"
    );
    Ok(Arc::new(ListInitExpr {
        new_expression,
        initializers: initializers.into(),
    }))
}

/// Resolve the `Add` overload accepting `args`.
fn resolve_add(ctx: &dyn TypeContext, list_type: TypeHash, args: &[Expr]) -> Result<Arc<FunctionEntry>> {
    let arg_types: Vec<TypeHash> = args.iter().map(Expr::data_type).collect();
    let method = ctx.find_method(list_type, ADD, &arg_types)?;
    trace!(method = %method.def.func_hash, "resolved Add");
    Ok(method)
}

fn ensure_enumerable(ctx: &dyn TypeContext, list_type: TypeHash) -> Result<()> {
    if ctx.is_enumerable(list_type) {
        return Ok(());
    }
    Err(ExprError::invalid_argument(
        "newExpression",
        format!(
            "type '{}' used in a list initializer must be enumerable",
            ctx.type_name(list_type)
        ),
    ))
}

/// The constructed value must be a valid receiver for `method`.
fn ensure_owner(ctx: &dyn TypeContext, list_type: TypeHash, method: &FunctionEntry) -> Result<()> {
    match method.def.object_type {
        Some(owner) if ctx.is_assignable(list_type, owner) => Ok(()),
        owner => Err(ExprError::invalid_argument(
            "addMethod",
            format!(
                "method '{}' declared on '{}' cannot be called on type '{}'",
                method.name(),
                owner.map_or_else(|| "<global>".to_string(), |o| ctx.type_name(o)),
                ctx.type_name(list_type)
            ),
        )),
    }
}
