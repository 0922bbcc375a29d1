extern crate lexers;

pub use operator::{Assoc, Operator};
pub use parser::{CompileError, RPNExpr, ShuntingParser};
pub use rpneval::{EvalError, RPNEvaluator};
pub use stack::{Stack, StackError};

mod operator;
pub mod parser;

mod rpnprint;
mod rpneval;

mod stack;

use thiserror::Error;

/// Failure of either stage of an infix evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Compiles infix text like `(5 + 3) * 2` to postfix text `5 3 + 2 *`.
pub fn infix_to_postfix(expr: &str) -> Result<String, CompileError> {
    Ok(ShuntingParser::parse_str(expr)?.to_string())
}

/// Evaluates whitespace separated postfix text like `5 3 + 2 *`.
pub fn evaluate_rpn(expr: &str) -> Result<f64, EvalError> {
    RPNEvaluator::eval_str(expr)
}

/// Evaluates infix text by way of its postfix translation.
pub fn evaluate_infix(expr: &str) -> Result<f64, CalcError> {
    let postfix = infix_to_postfix(expr)?;
    Ok(evaluate_rpn(&postfix)?)
}
