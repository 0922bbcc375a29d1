use crate::helpers;
use crate::scanner::Scanner;
use std::fmt;


#[derive(Clone, PartialEq, Debug)]
pub enum CalcToken {
    Unknown(String),
    Number(f64),
    Op(char),
    OParen, CParen,
}

impl fmt::Display for CalcToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcToken::Unknown(lexeme) => write!(f, "{}", lexeme),
            CalcToken::Number(n) => write!(f, "{}", n),
            CalcToken::Op(op) => write!(f, "{}", op),
            CalcToken::OParen => write!(f, "("),
            CalcToken::CParen => write!(f, ")"),
        }
    }
}

// literals past f64::MAX would print as 'inf', which no tokenizer reads back
fn number_or_unknown(lexeme: String) -> CalcToken {
    match lexeme.parse::<f64>() {
        Ok(n) if n.is_finite() => CalcToken::Number(n),
        _ => CalcToken::Unknown(lexeme),
    }
}

///////////////////////////////////////////////////////////////////////////////

// Tokenizes infix text char by char: '1 + 2.5*(3 - -4)'
pub struct InfixTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    prev: Option<CalcToken>
}

impl<I: Iterator<Item=char>> InfixTokenizer<I> {
    pub fn new(source: I) -> Self {
        InfixTokenizer{src: Scanner::new(source), prev: None}
    }

    // a '-' can only be a literal's sign where an operand is expected
    fn expects_operand(prev: &Option<CalcToken>) -> bool {
        match *prev {
            None => true,
            Some(CalcToken::Op(_)) => true,
            Some(CalcToken::OParen) => true,
            _ => false
        }
    }

    fn get_token(&mut self) -> Option<CalcToken> {
        self.src.ignore_ws();
        let number = if Self::expects_operand(&self.prev) {
            helpers::scan_signed_decimal(&mut self.src)
        } else {
            helpers::scan_decimal(&mut self.src)
        };
        if let Some(num) = number {
            Some(number_or_unknown(num))
        } else if let Some(symbol) = helpers::scan_symbol(&mut self.src) {
            match symbol {
                '(' => Some(CalcToken::OParen),
                ')' => Some(CalcToken::CParen),
                op => Some(CalcToken::Op(op)),
            }
        } else if self.src.next().is_some() {
            Some(CalcToken::Unknown(self.src.extract_string()))
        } else {
            None
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for InfixTokenizer<I> {
    type Item = CalcToken;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        self.prev = token.clone();
        token
    }
}

///////////////////////////////////////////////////////////////////////////////

// Tokenizes whitespace separated postfix text: '5 -3 + 2 ^'
pub struct PostfixTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> PostfixTokenizer<I> {
    pub fn new(source: I) -> Self {
        PostfixTokenizer{src: Scanner::new(source)}
    }

    // A whole word must be a literal to count as a number, '12abc' is not
    fn classify(lexeme: String) -> CalcToken {
        let number = {
            let mut s = Scanner::new(lexeme.chars());
            helpers::scan_signed_decimal(&mut s).filter(|_| s.peek().is_none())
        };
        if let Some(num) = number {
            return number_or_unknown(num);
        }
        let mut chars = lexeme.chars();
        match (chars.next(), chars.next()) {
            (Some(op), None) if helpers::OPERATORS.contains(&op) => CalcToken::Op(op),
            _ => CalcToken::Unknown(lexeme),
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for PostfixTokenizer<I> {
    type Item = CalcToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.ignore_ws();
        if !self.src.skip_all_if(|c| !c.is_whitespace()) {
            return None;
        }
        Some(Self::classify(self.src.extract_string()))
    }
}
