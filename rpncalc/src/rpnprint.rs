use crate::operator::{Assoc, Operator};
use crate::parser::RPNExpr;
use crate::rpneval::EvalError;
use crate::stack::Stack;
use lexers::CalcToken;
use std::fmt;

#[derive(Debug, Clone)]
enum AST {
    Leaf(f64),
    Node(Operator, Box<AST>, Box<AST>),
}

impl RPNExpr {
    fn build_ast(&self) -> Result<AST, EvalError> {
        let mut nodes = Stack::new();
        for token in self.0.iter() {
            match *token {
                CalcToken::Number(n) => nodes.push(AST::Leaf(n)),
                CalcToken::Op(c) => {
                    let op = Operator::from_char(c).ok_or(EvalError::UnknownOperator(c))?;
                    if nodes.size() < 2 {
                        return Err(EvalError::NotEnoughOperands);
                    }
                    let rhs = nodes.pop()?;
                    let lhs = nodes.pop()?;
                    nodes.push(AST::Node(op, Box::new(lhs), Box::new(rhs)));
                }
                _ => return Err(EvalError::InvalidToken(token.to_string())),
            }
        }
        if nodes.size() != 1 {
            return Err(EvalError::TooManyOperands);
        }
        Ok(nodes.pop()?)
    }

    /// Renders the expression back to infix with only the parens needed
    /// to preserve its grouping, eg: `5 3 + 2 *` => `(5 + 3) * 2`.
    pub fn to_infix(&self) -> Result<String, EvalError> {
        // numbers never need parens
        const LEAF: (usize, Assoc) = (usize::MAX, Assoc::Left);

        fn printer(root: &AST) -> (String, (usize, Assoc)) {
            match root {
                AST::Leaf(n) => (format!("{}", n), LEAF),
                AST::Node(op, lhs, rhs) => {
                    let (lhs, rhs) = (printer(lhs), printer(rhs));
                    let (prec, assoc) = op.precedence();

                    let lh = if prec > (lhs.1).0 || (prec == (lhs.1).0 && assoc != Assoc::Left) {
                        format!("({})", lhs.0)
                    } else {
                        lhs.0
                    };
                    let rh = if prec > (rhs.1).0 || (prec == (rhs.1).0 && assoc != Assoc::Right) {
                        format!("({})", rhs.0)
                    } else {
                        rhs.0
                    };
                    (format!("{} {} {}", lh, op, rh), (prec, assoc))
                }
            }
        }

        Ok(printer(&self.build_ast()?).0)
    }
}

// Space separated postfix text, the interchange format with the evaluator
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tokens = self.0.iter().map(|t| t.to_string()).collect::<Vec<String>>();
        write!(f, "{}", tokens.join(" "))
    }
}
