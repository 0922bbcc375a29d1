use crate::rpneval::EvalError;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    /// Binding strength and grouping of equal-strength chains.
    /// `^` is the only right associative operator: 2^3^2 == 2^(3^2).
    pub fn precedence(self) -> (usize, Assoc) {
        match self {
            Operator::Add | Operator::Sub => (1, Assoc::Left),
            Operator::Mul | Operator::Div => (2, Assoc::Left),
            Operator::Pow => (3, Assoc::Right),
        }
    }

    /// Computes `lhs OP rhs`. Division fails on an exact zero divisor
    /// instead of yielding inf/NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div if rhs == 0.0 => Err(EvalError::DivisionByZero),
            Operator::Div => Ok(lhs / rhs),
            Operator::Pow => Ok(lhs.powf(rhs)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::{Assoc, Operator};
    use crate::rpneval::EvalError;

    #[test]
    fn operator_table() {
        for c in "+-*/^".chars() {
            let op = Operator::from_char(c).unwrap();
            assert_eq!(op.symbol(), c);
            assert_eq!(op.to_string(), c.to_string());
        }
        assert_eq!(Operator::from_char('%'), None);
        assert_eq!(Operator::from_char('('), None);

        assert_eq!(Operator::Add.precedence(), (1, Assoc::Left));
        assert_eq!(Operator::Sub.precedence(), (1, Assoc::Left));
        assert_eq!(Operator::Mul.precedence(), (2, Assoc::Left));
        assert_eq!(Operator::Div.precedence(), (2, Assoc::Left));
        assert_eq!(Operator::Pow.precedence(), (3, Assoc::Right));
    }

    #[test]
    fn apply_ops() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operator::Sub.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Mul.apply(5.0, 3.0), Ok(15.0));
        assert_eq!(Operator::Div.apply(9.0, 3.0), Ok(3.0));
        assert_eq!(Operator::Pow.apply(2.0, 10.0), Ok(1024.0));
        assert_eq!(Operator::Pow.apply(2.0, -1.0), Ok(0.5));
        assert_eq!(Operator::Div.apply(1.0, 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(Operator::Div.apply(1.0, -0.0), Err(EvalError::DivisionByZero));
    }
}
