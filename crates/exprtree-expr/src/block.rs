//! Sequenced expressions with local variables.

use std::sync::Arc;

use exprtree_core::{ExprError, TypeHash, primitives};

use crate::{Expr, ParameterExpr, Result};

/// Evaluates its expressions in order; its value is the last one's.
///
/// `variables` are scoped to the block.
#[derive(Debug)]
pub struct BlockExpr {
    variables: Arc<[Arc<ParameterExpr>]>,
    expressions: Arc<[Expr]>,
}

impl BlockExpr {
    pub fn new(variables: Vec<Arc<ParameterExpr>>, expressions: Vec<Expr>) -> Result<Arc<Self>> {
        if expressions.is_empty() {
            return Err(ExprError::invalid_argument(
                "expressions",
                "a block must contain at least one expression",
            ));
        }
        Ok(Self::new_unchecked(variables, expressions))
    }

    pub(crate) fn new_unchecked(variables: Vec<Arc<ParameterExpr>>, expressions: Vec<Expr>) -> Arc<Self> {
        Arc::new(Self {
            variables: variables.into(),
            expressions: expressions.into(),
        })
    }

    pub fn variables(&self) -> &[Arc<ParameterExpr>] {
        &self.variables
    }

    pub fn expressions(&self) -> &[Expr] {
        &self.expressions
    }

    /// The final expression.
    pub fn result(&self) -> Option<&Expr> {
        self.expressions.last()
    }

    pub fn data_type(&self) -> TypeHash {
        self.result().map_or(primitives::VOID, Expr::data_type)
    }
}

impl Expr {
    pub fn block(variables: Vec<Arc<ParameterExpr>>, expressions: Vec<Expr>) -> Result<Expr> {
        BlockExpr::new(variables, expressions).map(Expr::Block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstantExpr;

    #[test]
    fn empty_block_is_rejected() {
        let err = BlockExpr::new(Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err.param(), Some("expressions"));
    }

    #[test]
    fn block_type_is_last_expression() {
        let block = BlockExpr::new(
            Vec::new(),
            vec![ConstantExpr::int(1), ConstantExpr::string("tail")],
        )
        .unwrap();
        assert_eq!(block.data_type(), primitives::STRING);
        assert_eq!(block.expressions().len(), 2);
    }
}
