use crate::operator::Operator;
use crate::parser::RPNExpr;
use crate::stack::{Stack, StackError};
use lexers::{CalcToken, PostfixTokenizer};
use log::{debug, trace};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("invalid expression: not enough operands")]
    NotEnoughOperands,
    #[error("invalid expression: too many operands")]
    TooManyOperands,
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("unknown operator: {0}")]
    UnknownOperator(char),
}

impl From<StackError> for EvalError {
    fn from(_: StackError) -> Self {
        EvalError::NotEnoughOperands
    }
}

impl EvalError {
    // lone punctuation looks like an operator we don't know, anything
    // else is just garbage
    fn from_lexeme(lexeme: String) -> Self {
        let mut chars = lexeme.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_punctuation() && c != '.' => {
                EvalError::UnknownOperator(c)
            }
            _ => EvalError::InvalidToken(lexeme),
        }
    }
}

pub struct RPNEvaluator;

impl RPNEvaluator {
    pub fn eval_str(expr: &str) -> Result<f64, EvalError> {
        Self::eval(&mut PostfixTokenizer::new(expr.chars()))
    }

    pub fn eval(tokens: &mut impl Iterator<Item = CalcToken>) -> Result<f64, EvalError> {
        let mut operands = Stack::<f64>::new();

        for token in tokens {
            trace!("eval {:?} with {} operands", token, operands.size());
            match token {
                CalcToken::Number(num) => operands.push(num),
                CalcToken::Op(c) => {
                    let op = Operator::from_char(c).ok_or(EvalError::UnknownOperator(c))?;
                    if operands.size() < 2 {
                        return Err(EvalError::NotEnoughOperands);
                    }
                    let r = operands.pop()?;
                    let l = operands.pop()?;
                    operands.push(op.apply(l, r)?);
                }
                CalcToken::OParen => return Err(EvalError::UnknownOperator('(')),
                CalcToken::CParen => return Err(EvalError::UnknownOperator(')')),
                CalcToken::Unknown(lexeme) => return Err(EvalError::from_lexeme(lexeme)),
            }
        }
        if operands.size() != 1 {
            return Err(EvalError::TooManyOperands);
        }
        let result = operands.pop()?;
        debug!("evaluated to {}", result);
        Ok(result)
    }
}

impl RPNExpr {
    pub fn eval(&self) -> Result<f64, EvalError> {
        RPNEvaluator::eval(&mut self.0.iter().cloned())
    }
}
