//! The evaluator.

use std::sync::Arc;

use exprtree_core::{CallContext, FunctionEntry, FunctionImpl, RuntimeError, Value};
use exprtree_expr::{AssignExpr, BlockExpr, CallExpr, Expr, NewExpr, ParameterExpr};
use tracing::trace;

use crate::InterpreterConfig;
use crate::environment::Environment;

type EvalResult = Result<Value, RuntimeError>;

/// Evaluates expression trees to values.
///
/// Variables bound with [`Interpreter::bind`] persist across evaluations;
/// block variables live only while their block runs.
#[derive(Debug)]
pub struct Interpreter {
    config: InterpreterConfig,
    env: Environment,
    depth: usize,
}

impl Interpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            config,
            env: Environment::new(),
            depth: 0,
        }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Bind a free variable for later evaluations.
    pub fn bind(&mut self, variable: &ParameterExpr, value: Value) {
        self.env.define_global(variable.id(), value);
    }

    /// Evaluate `expr`.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = ?expr.node_kind()))]
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        self.depth = 0;
        self.eval(expr)
    }

    fn eval(&mut self, expr: &Expr) -> EvalResult {
        if self.depth >= self.config.max_depth {
            return Err(RuntimeError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        self.depth += 1;
        let result = self.eval_node(expr);
        self.depth -= 1;
        result
    }

    fn eval_node(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Constant(c) => Ok(c.value().clone()),
            Expr::Parameter(p) => self.eval_parameter(p),
            Expr::New(n) => self.eval_new(n),
            Expr::Call(c) => self.eval_call(c),
            Expr::Assign(a) => self.eval_assign(a),
            Expr::Block(b) => self.eval_block(b),
            Expr::ListInit(l) => {
                let lowered = l.reduce();
                self.eval(&lowered)
            }
        }
    }

    fn eval_parameter(&self, param: &ParameterExpr) -> EvalResult {
        self.env
            .lookup(param.id())
            .cloned()
            .ok_or_else(|| RuntimeError::UnboundVariable {
                name: param.name().map_or_else(|| param.id().to_string(), str::to_string),
            })
    }

    fn eval_args(&mut self, args: &[Expr]) -> Result<Vec<Value>, RuntimeError> {
        args.iter().map(|arg| self.eval(arg)).collect()
    }

    fn eval_new(&mut self, new: &NewExpr) -> EvalResult {
        let args = self.eval_args(new.arguments())?;
        self.invoke(new.constructor(), None, &args)
    }

    fn eval_call(&mut self, call: &CallExpr) -> EvalResult {
        let receiver = call.object().map(|object| self.eval(object)).transpose()?;
        if let Some(receiver) = &receiver
            && receiver.as_object().is_none()
        {
            return Err(RuntimeError::InvalidReceiver {
                method: call.method().name().to_string(),
                found: receiver.kind_name(),
            });
        }
        let args = self.eval_args(call.arguments())?;
        self.invoke(call.method(), receiver.as_ref(), &args)
    }

    fn eval_assign(&mut self, assign: &AssignExpr) -> EvalResult {
        let value = self.eval(assign.value())?;
        self.env.assign(assign.target().id(), value.clone());
        Ok(value)
    }

    fn eval_block(&mut self, block: &BlockExpr) -> EvalResult {
        self.env.push_scope();
        for var in block.variables() {
            self.env.declare(var.id());
        }
        let result = self.eval_sequence(block.expressions());
        self.env.pop_scope();
        result
    }

    fn eval_sequence(&mut self, exprs: &[Expr]) -> EvalResult {
        let mut last = Value::Void;
        for expr in exprs {
            last = self.eval(expr)?;
        }
        Ok(last)
    }

    fn invoke(&self, function: &Arc<FunctionEntry>, this: Option<&Value>, args: &[Value]) -> EvalResult {
        let native = match &function.implementation {
            FunctionImpl::Native(native) => native,
            FunctionImpl::Abstract => {
                return Err(RuntimeError::AbstractCall {
                    name: function.name().to_string(),
                });
            }
        };
        if self.config.trace_calls {
            trace!(function = function.name(), args = args.len(), "native call");
        }
        native
            .call(&CallContext::new(this, args))
            .map_err(|source| RuntimeError::Native {
                function: function.name().to_string(),
                source,
            })
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}
