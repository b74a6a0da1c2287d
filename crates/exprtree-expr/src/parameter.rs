//! Named variables.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use exprtree_core::TypeHash;

use crate::Expr;

static NEXT_VARIABLE: AtomicU64 = AtomicU64::new(1);

/// A typed variable. Identity, not name, distinguishes variables.
#[derive(Debug)]
pub struct ParameterExpr {
    id: TypeHash,
    name: Option<String>,
    data_type: TypeHash,
}

impl ParameterExpr {
    /// Create a fresh variable of `data_type`.
    pub fn new(data_type: TypeHash, name: Option<&str>) -> Arc<Self> {
        let seq = NEXT_VARIABLE.fetch_add(1, Ordering::Relaxed);
        Arc::new(Self {
            id: TypeHash::from_variable(seq),
            name: name.map(str::to_string),
            data_type,
        })
    }

    /// Create a fresh variable and wrap it as an expression.
    pub fn variable(data_type: TypeHash, name: &str) -> Expr {
        Expr::Parameter(Self::new(data_type, Some(name)))
    }

    /// Unique identity of this variable.
    pub fn id(&self) -> TypeHash {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn data_type(&self) -> TypeHash {
        self.data_type
    }
}

impl Expr {
    /// Shorthand for [`ParameterExpr::variable`].
    pub fn parameter(data_type: TypeHash, name: &str) -> Expr {
        ParameterExpr::variable(data_type, name)
    }
}
