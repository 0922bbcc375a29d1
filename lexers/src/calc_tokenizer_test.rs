use crate::calc_tokenizer::{CalcToken, InfixTokenizer, PostfixTokenizer};

#[test]
fn infix_ops() {
    let mut lx = InfixTokenizer::new("3+4*2/-(1-5)^2^3".chars());
    let expect = [
        CalcToken::Number(3.0),
        CalcToken::Op('+'),
        CalcToken::Number(4.0),
        CalcToken::Op('*'),
        CalcToken::Number(2.0),
        CalcToken::Op('/'),
        CalcToken::Op('-'),
        CalcToken::OParen,
        CalcToken::Number(1.0),
        CalcToken::Op('-'),
        CalcToken::Number(5.0),
        CalcToken::CParen,
        CalcToken::Op('^'),
        CalcToken::Number(2.0),
        CalcToken::Op('^'),
        CalcToken::Number(3.0),
    ];
    for exp_token in expect.iter() {
        let token = lx.next().unwrap();
        assert_eq!(*exp_token, token);
    }
    assert_eq!(lx.next(), None);
}

#[test]
fn infix_literal_sign() {
    let tokens: Vec<_> = InfixTokenizer::new("-2.5 * -.5 - 3 -4 (-1)".chars()).collect();
    assert_eq!(tokens, vec![
        CalcToken::Number(-2.5),
        CalcToken::Op('*'),
        CalcToken::Number(-0.5),
        CalcToken::Op('-'),
        CalcToken::Number(3.0),
        CalcToken::Op('-'),
        CalcToken::Number(4.0),
        CalcToken::OParen,
        CalcToken::Number(-1.0),
        CalcToken::CParen,
    ]);
}

#[test]
fn infix_decimals() {
    let tokens: Vec<_> = InfixTokenizer::new("1.2.3 + 7.".chars()).collect();
    assert_eq!(tokens, vec![
        CalcToken::Number(1.2),
        CalcToken::Number(0.3),
        CalcToken::Op('+'),
        CalcToken::Number(7.0),
    ]);
}

#[test]
fn infix_unknown_chars() {
    let tokens: Vec<_> = InfixTokenizer::new("2 % x .".chars()).collect();
    assert_eq!(tokens, vec![
        CalcToken::Number(2.0),
        CalcToken::Unknown("%".to_string()),
        CalcToken::Unknown("x".to_string()),
        CalcToken::Unknown(".".to_string()),
    ]);
}

#[test]
fn infix_blank() {
    assert_eq!(InfixTokenizer::new(" \t\n ".chars()).next(), None);
}

#[test]
fn postfix_tokens() {
    let tokens: Vec<_> = PostfixTokenizer::new("15 7 1.5 + - / .5 ^ ".chars()).collect();
    assert_eq!(tokens, vec![
        CalcToken::Number(15.0),
        CalcToken::Number(7.0),
        CalcToken::Number(1.5),
        CalcToken::Op('+'),
        CalcToken::Op('-'),
        CalcToken::Op('/'),
        CalcToken::Number(0.5),
        CalcToken::Op('^'),
    ]);
}

#[test]
fn postfix_negative_literals() {
    let tokens: Vec<_> = PostfixTokenizer::new("3 -2 + - -.25".chars()).collect();
    assert_eq!(tokens, vec![
        CalcToken::Number(3.0),
        CalcToken::Number(-2.0),
        CalcToken::Op('+'),
        CalcToken::Op('-'),
        CalcToken::Number(-0.25),
    ]);
}

#[test]
fn postfix_malformed_words() {
    let tokens: Vec<_> = PostfixTokenizer::new("12abc ++ % ( 1e5 --3".chars()).collect();
    let expect = ["12abc", "++", "%", "(", "1e5", "--3"];
    assert_eq!(tokens.len(), expect.len());
    for (token, lexeme) in tokens.iter().zip(expect.iter()) {
        assert_eq!(*token, CalcToken::Unknown(lexeme.to_string()));
    }
}

#[test]
fn display_tokens() {
    let shown: Vec<String> = [
        CalcToken::Number(-2.5),
        CalcToken::Number(3.0),
        CalcToken::Op('^'),
        CalcToken::OParen,
        CalcToken::CParen,
        CalcToken::Unknown("abc".to_string()),
    ].iter().map(|t| t.to_string()).collect();
    assert_eq!(shown, vec!["-2.5", "3", "^", "(", ")", "abc"]);
}

#[test]
fn overflowing_literals() {
    let big = format!("-1{}", "0".repeat(400));
    let tokens: Vec<_> = InfixTokenizer::new(format!("{} + 1", big).chars()).collect();
    assert_eq!(tokens, vec![
        CalcToken::Unknown(big.clone()),
        CalcToken::Op('+'),
        CalcToken::Number(1.0),
    ]);
    let tokens: Vec<_> = PostfixTokenizer::new(format!("{} 1 +", big).chars()).collect();
    assert_eq!(tokens[0], CalcToken::Unknown(big));
}
