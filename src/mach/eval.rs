use super::{Function, Operation, Val, Var};
use crate::error;
use crate::lang::{is_ident, is_quoted, split_top_level, Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluator
///
/// Expressions are source text. The first rule that applies decides the value:
///
/// 1. `CHR$(expr)` spanning the whole text.
/// 2. `+` joining segments where at least one is a string literal: concatenation.
/// 3. A single string literal.
/// 4. Names, integers and `+ - * /`, evaluated left to right.
///    A name holding a string makes this rule not apply.
/// 5. An integer literal.
/// 6. A variable name.
/// 7. Anything else is returned as text, unchanged.

pub fn eval(vars: &Var, s: &str) -> Result<Val> {
    let s = s.trim();
    if let Some(inner) = Function::chr_argument(s) {
        return Ok(Function::chr(eval(vars, inner)?));
    }
    let segments = split_top_level(s, '+');
    if segments.len() > 1 && segments.iter().any(|seg| is_quoted(seg.trim())) {
        return concatenate(vars, &segments);
    }
    if is_quoted(s) {
        return Ok(Val::from(&s[1..s.len() - 1]));
    }
    if let Some(result) = arithmetic(vars, s) {
        return result.map(Val::Integer);
    }
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        return match s.parse::<i32>() {
            Ok(n) => Ok(Val::Integer(n)),
            Err(_) => Err(error!(Overflow)),
        };
    }
    if is_ident(s) {
        return Ok(vars.fetch(&s.to_ascii_uppercase()));
    }
    Ok(Val::from(s))
}

fn concatenate(vars: &Var, segments: &[&str]) -> Result<Val> {
    let mut text = String::new();
    for segment in segments {
        let segment = segment.trim();
        if is_quoted(segment) {
            text.push_str(&segment[1..segment.len() - 1]);
        } else {
            text.push_str(&eval(vars, segment)?.to_string());
        }
    }
    Ok(Val::from(text))
}

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Operand(&'a str),
    Operator(Operator),
}

fn tokens(s: &str) -> Option<Vec<Token<'_>>> {
    let bytes = s.as_bytes();
    let mut v = vec![];
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c == ' ' || c == '\t' {
            i += 1;
        } else if let Some(op) = Operator::from_char(c) {
            v.push(Token::Operator(op));
            i += 1;
        } else if c.is_ascii_alphanumeric() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == b'$' {
                i += 1;
            }
            v.push(Token::Operand(&s[start..i]));
        } else {
            return None;
        }
    }
    Some(v)
}

/// Each operand with the operator that applies it and whether it
/// carries a unary minus.
fn terms(s: &str) -> Option<Vec<(Operator, bool, &str)>> {
    let mut v = vec![];
    let mut op = Some(Operator::Plus);
    let mut negated = false;
    for token in tokens(s)? {
        match token {
            Token::Operator(o) => match op {
                None => op = Some(o),
                Some(_) if o == Operator::Minus && !negated => negated = true,
                Some(_) => return None,
            },
            Token::Operand(text) => match op.take() {
                Some(o) => {
                    v.push((o, negated, text));
                    negated = false;
                }
                None => return None,
            },
        }
    }
    if op.is_some() || v.is_empty() {
        return None;
    }
    Some(v)
}

fn operand(vars: &Var, text: &str) -> Option<Result<i32>> {
    if text.starts_with(|c: char| c.is_ascii_digit()) {
        if !text.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        return Some(text.parse::<i32>().map_err(|_| error!(Overflow)));
    }
    if !is_ident(text) {
        return None;
    }
    match vars.fetch(&text.to_ascii_uppercase()) {
        Val::Integer(n) => Some(Ok(n)),
        Val::String(_) => None,
    }
}

fn arithmetic(vars: &Var, s: &str) -> Option<Result<i32>> {
    let mut operands = vec![];
    for (op, negated, text) in terms(s)? {
        operands.push((op, negated, operand(vars, text)?));
    }
    let compute = || -> Result<i32> {
        let mut acc = 0;
        for (op, negated, value) in operands {
            let mut value = value?;
            if negated {
                value = Operation::negate(value)?;
            }
            acc = Operation::apply(op, acc, value)?;
        }
        Ok(acc)
    };
    Some(compute())
}
