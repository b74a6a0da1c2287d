//! Source-like rendering of expression trees, for diagnostics.

use std::fmt;

use crate::{
    AssignExpr, BlockExpr, CallExpr, ConstantExpr, ElementInit, Expr, ListInitExpr, NewExpr,
    ParameterExpr,
};

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expr]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(e) => fmt::Display::fmt(e, f),
            Expr::Parameter(e) => fmt::Display::fmt(e, f),
            Expr::New(e) => fmt::Display::fmt(e, f),
            Expr::Call(e) => fmt::Display::fmt(e, f),
            Expr::Assign(e) => fmt::Display::fmt(e, f),
            Expr::Block(e) => fmt::Display::fmt(e, f),
            Expr::ListInit(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl fmt::Display for ConstantExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl fmt::Display for ParameterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "${}", self.id()),
        }
    }
}

impl fmt::Display for NewExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "new {}(", self.constructor().name())?;
        write_args(f, self.arguments())?;
        f.write_str(")")
    }
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(object) = self.object() {
            write!(f, "{object}.")?;
        }
        write!(f, "{}(", self.method().name())?;
        write_args(f, self.arguments())?;
        f.write_str(")")
    }
}

impl fmt::Display for AssignExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} = {})", self.target(), self.value())
    }
}

impl fmt::Display for BlockExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for var in self.variables() {
            write!(f, "var {var}; ")?;
        }
        for (i, expr) in self.expressions().iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{expr}")?;
        }
        f.write_str(" }")
    }
}

impl fmt::Display for ElementInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.add_method().name())?;
        write_args(f, self.arguments())?;
        f.write_str(")")
    }
}

impl fmt::Display for ListInitExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.new_expression())?;
        for (i, init) in self.initializers().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{init}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bag, pairs, registry};

    #[test]
    fn list_init_display() {
        let reg = registry();
        let new = NewExpr::new(&reg, bag(), Vec::new()).unwrap();
        let node = ListInitExpr::new(&reg, Some(new), Some([ConstantExpr::int(1), ConstantExpr::int(2)]))
            .unwrap();
        assert_eq!(node.to_string(), "new IntBag() {Add(1), Add(2)}");
    }

    #[test]
    fn grouped_display_quotes_strings() {
        let reg = registry();
        let new = NewExpr::new(&reg, pairs(), Vec::new()).unwrap();
        let node = ListInitExpr::with_argument_groups(
            &reg,
            Some(new),
            Some(vec![vec![ConstantExpr::string("a"), ConstantExpr::int(1)]]),
        )
        .unwrap();
        assert_eq!(node.to_string(), "new Pairs() {Add(\"a\", 1)}");
    }

    #[test]
    fn reduced_display() {
        let reg = registry();
        let new = NewExpr::new(&reg, bag(), Vec::new()).unwrap();
        let node = ListInitExpr::new(&reg, Some(new), Some([ConstantExpr::int(3)])).unwrap();
        assert_eq!(
            node.reduce().to_string(),
            "{ var list; (list = new IntBag()); list.Add(3); list }"
        );
    }
}
