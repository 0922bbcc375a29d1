#![deny(warnings)]

use crate::scanner::Scanner;

/*
 * The caller of these function is expected to setup the scanner for a
 * clear start, ie: call scanner.ignore() to start fresh
 */

pub static OPERATORS: &[char] = &['+', '-', '*', '/', '^'];
pub static PARENS: &[char] = &['(', ')'];

fn is_digit(c: &char) -> bool {
    c.is_ascii_digit()
}

// scan decimals like [0-9]+\.?[0-9]* or \.[0-9]+, at most one '.'
pub fn scan_decimal<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<String> {
    let backtrack = scanner.pos();
    let whole = scanner.skip_all_if(is_digit);
    let fraction = scanner.accept(&'.').is_some() && scanner.skip_all_if(is_digit);
    if !whole && !fraction {
        scanner.set_pos(backtrack);
        return None;
    }
    Some(scanner.extract_string())
}

// scan decimals with an optional leading '-' glued to the digits
pub fn scan_signed_decimal<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<String> {
    let backtrack = scanner.pos();
    scanner.accept(&'-');
    let decimal = scan_decimal(scanner);
    if decimal.is_none() {
        scanner.set_pos(backtrack);
    }
    decimal
}

// a single operator or parenthesis char
pub fn scan_symbol<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<char> {
    let symbol = scanner.accept_any(OPERATORS)
        .or_else(|| scanner.accept_any(PARENS))?;
    scanner.ignore();
    Some(symbol)
}

///////////////////////////////////////////////////////////////////////////////
