//! The expression node enum.

use std::sync::Arc;

use exprtree_core::{TypeHash, primitives};

use crate::{
    AssignExpr, BlockExpr, CallExpr, ConstantExpr, ListInitExpr, NewExpr, ParameterExpr,
};

/// Discriminant of an [`Expr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Constant,
    Parameter,
    New,
    Call,
    Assign,
    Block,
    ListInit,
}

/// An immutable expression node.
///
/// Cloning an `Expr` clones a pointer; [`Expr::ptr_eq`] tells whether two
/// handles refer to the same node.
#[derive(Debug, Clone)]
pub enum Expr {
    Constant(Arc<ConstantExpr>),
    Parameter(Arc<ParameterExpr>),
    New(Arc<NewExpr>),
    Call(Arc<CallExpr>),
    Assign(Arc<AssignExpr>),
    Block(Arc<BlockExpr>),
    ListInit(Arc<ListInitExpr>),
}

impl Expr {
    /// The static type of the value this node produces.
    pub fn data_type(&self) -> TypeHash {
        match self {
            Expr::Constant(e) => e.data_type(),
            Expr::Parameter(e) => e.data_type(),
            Expr::New(e) => e.data_type(),
            Expr::Call(e) => e.data_type(),
            Expr::Assign(e) => e.data_type(),
            Expr::Block(e) => e.data_type(),
            Expr::ListInit(e) => e.data_type(),
        }
    }

    pub fn node_kind(&self) -> NodeKind {
        match self {
            Expr::Constant(_) => NodeKind::Constant,
            Expr::Parameter(_) => NodeKind::Parameter,
            Expr::New(_) => NodeKind::New,
            Expr::Call(_) => NodeKind::Call,
            Expr::Assign(_) => NodeKind::Assign,
            Expr::Block(_) => NodeKind::Block,
            Expr::ListInit(_) => NodeKind::ListInit,
        }
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Expr) -> bool {
        match (self, other) {
            (Expr::Constant(a), Expr::Constant(b)) => Arc::ptr_eq(a, b),
            (Expr::Parameter(a), Expr::Parameter(b)) => Arc::ptr_eq(a, b),
            (Expr::New(a), Expr::New(b)) => Arc::ptr_eq(a, b),
            (Expr::Call(a), Expr::Call(b)) => Arc::ptr_eq(a, b),
            (Expr::Assign(a), Expr::Assign(b)) => Arc::ptr_eq(a, b),
            (Expr::Block(a), Expr::Block(b)) => Arc::ptr_eq(a, b),
            (Expr::ListInit(a), Expr::ListInit(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Whether [`reduce`](Self::reduce) lowers this node into simpler ones.
    pub fn can_reduce(&self) -> bool {
        match self {
            Expr::ListInit(e) => e.can_reduce(),
            _ => false,
        }
    }

    /// Lower this node one step. Irreducible nodes return themselves.
    pub fn reduce(&self) -> Expr {
        match self {
            Expr::ListInit(e) => e.reduce(),
            _ => self.clone(),
        }
    }

    /// Reduce repeatedly until the node is irreducible.
    pub fn reduce_extensions(&self) -> Expr {
        let mut node = self.clone();
        while node.can_reduce() {
            node = node.reduce();
        }
        node
    }

    /// Whether this node produces no value.
    pub fn is_void(&self) -> bool {
        self.data_type() == primitives::VOID
    }

    pub fn as_block(&self) -> Option<&Arc<BlockExpr>> {
        match self {
            Expr::Block(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&Arc<ConstantExpr>> {
        match self {
            Expr::Constant(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Arc<ConstantExpr>> for Expr {
    fn from(e: Arc<ConstantExpr>) -> Self {
        Expr::Constant(e)
    }
}

impl From<Arc<ParameterExpr>> for Expr {
    fn from(e: Arc<ParameterExpr>) -> Self {
        Expr::Parameter(e)
    }
}

impl From<Arc<NewExpr>> for Expr {
    fn from(e: Arc<NewExpr>) -> Self {
        Expr::New(e)
    }
}

impl From<Arc<CallExpr>> for Expr {
    fn from(e: Arc<CallExpr>) -> Self {
        Expr::Call(e)
    }
}

impl From<Arc<AssignExpr>> for Expr {
    fn from(e: Arc<AssignExpr>) -> Self {
        Expr::Assign(e)
    }
}

impl From<Arc<BlockExpr>> for Expr {
    fn from(e: Arc<BlockExpr>) -> Self {
        Expr::Block(e)
    }
}

impl From<Arc<ListInitExpr>> for Expr {
    fn from(e: Arc<ListInitExpr>) -> Self {
        Expr::ListInit(e)
    }
}
