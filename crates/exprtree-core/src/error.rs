//! Error types for exprtree.
//!
//! One error enum per phase, consolidated by [`ExprTreeError`]:
//!
//! - [`RegistrationError`] - registering types and functions
//! - [`LookupError`] - resolving a method by name and argument types
//! - [`ExprError`] - building expression nodes
//! - [`NativeError`] - raised by native function bodies
//! - [`RuntimeError`] - evaluating expression trees

use thiserror::Error;

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors that occur during type and function registration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// A referenced type was not found.
    #[error("type not found: {0}")]
    TypeNotFound(String),

    /// A type with this name already exists.
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// A function with the same signature already exists.
    #[error("duplicate function: {name} is already registered with this signature")]
    DuplicateFunction {
        /// The function name.
        name: String,
    },

    /// The declaration is invalid.
    #[error("invalid declaration: {0}")]
    InvalidDeclaration(String),
}

// ============================================================================
// Method Lookup Errors
// ============================================================================

/// Failure of implicit method resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// No instance method with a compatible signature exists.
    #[error("no method '{name}' on type '{type_name}' is compatible with the supplied arguments")]
    NotFound {
        /// The requested method name.
        name: String,
        /// The searched type.
        type_name: String,
    },

    /// Several overloads match equally well.
    #[error("more than one method '{name}' on type '{type_name}' is compatible: {candidates}")]
    Ambiguous {
        /// The requested method name.
        name: String,
        /// The searched type.
        type_name: String,
        /// Formatted list of the tied candidates.
        candidates: String,
    },
}

// ============================================================================
// Expression Construction Errors
// ============================================================================

/// Coarse classification of [`ExprError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprErrorKind {
    ArgumentNull,
    InvalidArgument,
    InvalidOperation,
}

/// Errors raised synchronously by expression factories.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    /// A required argument was absent.
    #[error("value cannot be null (parameter '{param}')")]
    ArgumentNull {
        /// Name of the missing parameter.
        param: &'static str,
    },

    /// An argument is present but unusable.
    #[error("{message} (parameter '{param}')")]
    InvalidArgument {
        /// Name of the offending parameter.
        param: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// The request as a whole cannot be satisfied.
    #[error("{message}")]
    InvalidOperation {
        /// What went wrong.
        message: String,
    },
}

impl ExprError {
    pub fn null(param: &'static str) -> Self {
        ExprError::ArgumentNull { param }
    }

    pub fn invalid_argument(param: &'static str, message: impl Into<String>) -> Self {
        ExprError::InvalidArgument {
            param,
            message: message.into(),
        }
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        ExprError::InvalidOperation {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ExprErrorKind {
        match self {
            ExprError::ArgumentNull { .. } => ExprErrorKind::ArgumentNull,
            ExprError::InvalidArgument { .. } => ExprErrorKind::InvalidArgument,
            ExprError::InvalidOperation { .. } => ExprErrorKind::InvalidOperation,
        }
    }

    /// The offending parameter name, if the error implicates one.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            ExprError::ArgumentNull { param } | ExprError::InvalidArgument { param, .. } => {
                Some(*param)
            }
            ExprError::InvalidOperation { .. } => None,
        }
    }
}

impl From<LookupError> for ExprError {
    fn from(err: LookupError) -> Self {
        ExprError::invalid_operation(err.to_string())
    }
}

// ============================================================================
// Native Errors
// ============================================================================

/// Errors raised by native function bodies.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NativeError {
    /// An instance method was called without a receiver.
    #[error("method requires a receiver")]
    NoReceiver,

    /// The receiver is not a heap object.
    #[error("receiver must be an object, found {found}")]
    ReceiverType {
        /// Variant name of the receiver.
        found: &'static str,
    },

    /// The receiver's payload is not what the method expects.
    #[error("receiver payload is not a {expected}")]
    PayloadType {
        /// Expected payload description.
        expected: &'static str,
    },

    /// Fewer arguments than the function reads.
    #[error("missing argument {index}")]
    MissingArgument {
        /// Zero-based argument position.
        index: usize,
    },

    /// An argument has the wrong runtime type.
    #[error("argument {index}: expected {expected}, found {found}")]
    ArgumentType {
        /// Zero-based argument position.
        index: usize,
        /// Expected variant name.
        expected: &'static str,
        /// Actual variant name.
        found: &'static str,
    },

    /// Domain failure reported by the function itself.
    #[error("{0}")]
    Failed(String),
}

// ============================================================================
// Runtime Errors
// ============================================================================

/// Errors that occur while evaluating an expression tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// A variable was read before any assignment in scope.
    #[error("variable '{name}' is not bound")]
    UnboundVariable {
        /// Variable name.
        name: String,
    },

    /// An instance call evaluated its receiver to a non-object.
    #[error("cannot call '{method}' on a {found} value")]
    InvalidReceiver {
        /// Called method.
        method: String,
        /// Variant name of the receiver.
        found: &'static str,
    },

    /// The callee has no implementation.
    #[error("'{name}' has no implementation")]
    AbstractCall {
        /// Called function.
        name: String,
    },

    /// A native function failed.
    #[error("call to '{function}' failed: {source}")]
    Native {
        /// Called function.
        function: String,
        /// Underlying failure.
        #[source]
        source: NativeError,
    },

    /// Nesting exceeded the configured limit.
    #[error("evaluation depth exceeded the limit of {limit}")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// The unified error type for all exprtree operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprTreeError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Expr(#[from] ExprError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl ExprTreeError {
    pub fn is_registration(&self) -> bool {
        matches!(self, ExprTreeError::Registration(_))
    }

    pub fn is_expr(&self) -> bool {
        matches!(self, ExprTreeError::Expr(_))
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, ExprTreeError::Runtime(_))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_null_display() {
        let err = ExprError::null("newExpression");
        assert_eq!(err.to_string(), "value cannot be null (parameter 'newExpression')");
        assert_eq!(err.kind(), ExprErrorKind::ArgumentNull);
        assert_eq!(err.param(), Some("newExpression"));
    }

    #[test]
    fn invalid_argument_display() {
        let err = ExprError::invalid_argument("addMethod", "method must not be static");
        assert_eq!(err.to_string(), "method must not be static (parameter 'addMethod')");
        assert_eq!(err.kind(), ExprErrorKind::InvalidArgument);
        assert_eq!(err.param(), Some("addMethod"));
    }

    #[test]
    fn invalid_operation_has_no_param() {
        let err = ExprError::invalid_operation("no Add");
        assert_eq!(err.kind(), ExprErrorKind::InvalidOperation);
        assert_eq!(err.param(), None);
    }

    #[test]
    fn lookup_error_becomes_invalid_operation() {
        let err: ExprError = LookupError::NotFound {
            name: "Add".to_string(),
            type_name: "Bag".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ExprErrorKind::InvalidOperation);
        assert!(err.to_string().contains("'Add'"));
        assert!(err.to_string().contains("'Bag'"));
    }

    #[test]
    fn runtime_native_display() {
        let err = RuntimeError::Native {
            function: "Add".to_string(),
            source: NativeError::MissingArgument { index: 1 },
        };
        assert_eq!(err.to_string(), "call to 'Add' failed: missing argument 1");
    }

    #[test]
    fn unified_from_conversions() {
        let err: ExprTreeError = RegistrationError::DuplicateType("A".to_string()).into();
        assert!(err.is_registration());

        let err: ExprTreeError = ExprError::null("initializers").into();
        assert!(err.is_expr());

        let err: ExprTreeError = RuntimeError::DepthExceeded { limit: 4 }.into();
        assert!(err.is_runtime());
        assert_eq!(err.to_string(), "evaluation depth exceeded the limit of 4");
    }
}
