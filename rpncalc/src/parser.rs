use crate::operator::{Assoc, Operator};
use crate::stack::{Stack, StackError};
use lexers::{CalcToken, InfixTokenizer};
use log::{debug, trace};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("invalid character: {0}")]
    InvalidCharacter(char),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

// the operator stack only ever fails when a paren has no partner
impl From<StackError> for CompileError {
    fn from(_: StackError) -> Self {
        CompileError::MismatchedParentheses
    }
}

// '(' sits below every operator so it's never popped by precedence
fn precedence(stacked: char) -> (usize, Assoc) {
    match Operator::from_char(stacked) {
        Some(op) => op.precedence(),
        None => (0, Assoc::Left),
    }
}

/// A postfix sequence: numbers and operators only, no parens.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct RPNExpr(pub Vec<CalcToken>);

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, CompileError> {
        Self::parse(&mut InfixTokenizer::new(expr.chars()))
    }

    pub fn parse(lex: &mut impl Iterator<Item = CalcToken>) -> Result<RPNExpr, CompileError> {
        let mut out = Vec::new();
        let mut stack = Stack::<char>::new();

        for token in lex {
            trace!("shunting {:?} with {} stacked", token, stack.size());
            match token {
                CalcToken::Number(_) => out.push(token),
                CalcToken::OParen => stack.push('('),
                CalcToken::CParen => {
                    while !stack.is_empty() && *stack.peek()? != '(' {
                        out.push(CalcToken::Op(stack.pop()?));
                    }
                    if stack.is_empty() {
                        return Err(CompileError::MismatchedParentheses);
                    }
                    stack.pop()?; // peel matching '('
                }
                CalcToken::Op(c) => {
                    let (prec_rhs, assoc_rhs) = Operator::from_char(c)
                        .ok_or(CompileError::InvalidCharacter(c))?
                        .precedence();
                    while let Ok(&top) = stack.peek() {
                        let (prec_lhs, _) = precedence(top);
                        if prec_lhs < prec_rhs {
                            break;
                        } else if prec_lhs > prec_rhs {
                            out.push(CalcToken::Op(stack.pop()?));
                        } else {
                            match assoc_rhs {
                                Assoc::Left => out.push(CalcToken::Op(stack.pop()?)),
                                Assoc::Right => break,
                            }
                        }
                    }
                    stack.push(c);
                }
                CalcToken::Unknown(lexeme) => {
                    let mut chars = lexeme.chars();
                    return Err(match (chars.next(), chars.next()) {
                        (Some(bad), None) => CompileError::InvalidCharacter(bad),
                        _ => CompileError::InvalidNumber(lexeme),
                    });
                }
            }
        }
        while let Ok(top) = stack.pop() {
            match top {
                '(' | ')' => return Err(CompileError::MismatchedParentheses),
                op => out.push(CalcToken::Op(op)),
            }
        }
        let rpn = RPNExpr(out);
        debug!("compiled to postfix: {}", rpn);
        Ok(rpn)
    }
}
