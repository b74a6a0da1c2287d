//! Native function storage and calling convention.

use std::fmt;
use std::sync::Arc;

use crate::{NativeError, ObjectRef, Value};

/// Arguments of a native call.
///
/// `this` is present for instance methods and absent for static functions and
/// constructors.
#[derive(Debug, Clone, Copy)]
pub struct CallContext<'a> {
    this: Option<&'a Value>,
    args: &'a [Value],
}

impl<'a> CallContext<'a> {
    pub fn new(this: Option<&'a Value>, args: &'a [Value]) -> Self {
        Self { this, args }
    }

    /// The receiver value.
    pub fn this(&self) -> Result<&'a Value, NativeError> {
        self.this.ok_or(NativeError::NoReceiver)
    }

    /// The receiver as a heap object.
    pub fn this_object(&self) -> Result<&'a ObjectRef, NativeError> {
        match self.this()? {
            Value::Object(obj) => Ok(obj),
            other => Err(NativeError::ReceiverType {
                found: other.kind_name(),
            }),
        }
    }

    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    pub fn args(&self) -> &'a [Value] {
        self.args
    }

    pub fn arg(&self, index: usize) -> Result<&'a Value, NativeError> {
        self.args
            .get(index)
            .ok_or(NativeError::MissingArgument { index })
    }

    pub fn arg_int(&self, index: usize) -> Result<i64, NativeError> {
        let value = self.arg(index)?;
        value.as_int().ok_or(NativeError::ArgumentType {
            index,
            expected: "int",
            found: value.kind_name(),
        })
    }

    pub fn arg_str(&self, index: usize) -> Result<&'a str, NativeError> {
        let value = self.arg(index)?;
        value.as_str().ok_or(NativeError::ArgumentType {
            index,
            expected: "string",
            found: value.kind_name(),
        })
    }
}

/// A callable with the native calling convention.
pub trait NativeCallable {
    fn call(&self, ctx: &CallContext<'_>) -> Result<Value, NativeError>;
}

impl<F> NativeCallable for F
where
    F: Fn(&CallContext<'_>) -> Result<Value, NativeError>,
{
    fn call(&self, ctx: &CallContext<'_>) -> Result<Value, NativeError> {
        self(ctx)
    }
}

/// Type-erased native function.
///
/// The callable is shared through an `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct NativeFn {
    inner: Arc<dyn NativeCallable + Send + Sync>,
}

impl NativeFn {
    pub fn new<F>(f: F) -> Self
    where
        F: NativeCallable + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    pub fn call(&self, ctx: &CallContext<'_>) -> Result<Value, NativeError> {
        self.inner.call(ctx)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn").finish_non_exhaustive()
    }
}
