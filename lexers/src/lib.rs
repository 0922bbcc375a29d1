mod scanner;
mod helpers;
mod calc_tokenizer;

pub use scanner::Scanner;
pub use calc_tokenizer::{CalcToken, InfixTokenizer, PostfixTokenizer};

pub use helpers::scan_decimal;
pub use helpers::scan_signed_decimal;
pub use helpers::scan_symbol;
pub use helpers::OPERATORS;

#[cfg(test)]
mod calc_tokenizer_test;
