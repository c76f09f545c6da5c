// ABOUTME: Recursive-descent parser: token stream -> Value tree (lists, quote, integers, symbols)

use super::lexer::{next_token, Token};
use crate::error::ReadError;
use crate::value::Value;

/// Classifies an atom token: an optional leading `-` followed by at least one
/// digit and nothing else is an Integer; everything else (including the lone
/// token `-`, and the `.` dotted-pair marker this reader doesn't special-case)
/// is a Symbol.
fn classify_atom(text: &str) -> Value {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        // Safe to parse: `digits` is non-empty and all-ASCII-digit, and the
        // only way an `i64` parse still fails here is magnitude overflow.
        if let Ok(n) = text.parse::<i64>() {
            return Value::Integer(n);
        }
    }
    Value::symbol(text)
}

/// Reads one expression, returning the unconsumed remainder of `input`.
pub fn read_expr(input: &str) -> Result<(Value, &str), ReadError> {
    let (rest, tok) = next_token(input).map_err(|_| ReadError::Empty)?;
    match tok {
        None => Err(ReadError::Empty),
        Some(Token::RParen) => Err(ReadError::UnexpectedCloseParen),
        Some(Token::Quote) => {
            let (rest, inner) = read_expr(rest).map_err(|_| ReadError::QuoteMissingExpr)?;
            let quoted = Value::list(vec![Value::symbol("quote"), inner]);
            Ok((quoted, rest))
        }
        Some(Token::LParen) => read_list(rest),
        Some(Token::Atom(text)) => Ok((classify_atom(&text), rest)),
    }
}

/// Reads successive expressions until a matching `)`, building a right-nested
/// chain of pairs. Called with the input just past the opening `(`.
fn read_list(mut input: &str) -> Result<(Value, &str), ReadError> {
    let mut items = Vec::new();
    loop {
        let (rest, tok) = next_token(input).map_err(|_| ReadError::UnexpectedEof)?;
        match tok {
            None => return Err(ReadError::UnexpectedEof),
            Some(Token::RParen) => return Ok((Value::list(items), rest)),
            _ => {
                let (expr, rest) = read_expr(input)?;
                items.push(expr);
                input = rest;
            }
        }
    }
}

/// Parses the first expression in `text`. Public entry point used by the
/// library surface and the console driver alike.
pub fn parse(text: &str) -> Result<Value, ReadError> {
    read_expr(text).map(|(value, _rest)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert!(matches!(parse("42"), Ok(Value::Integer(42))));
        assert!(matches!(parse("-42"), Ok(Value::Integer(-42))));
        assert!(matches!(parse("007"), Ok(Value::Integer(7))));
    }

    #[test]
    fn test_lone_minus_is_symbol() {
        match parse("-").unwrap() {
            Value::Symbol(s) => assert_eq!(&*s, "-"),
            other => panic!("expected symbol, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_symbol() {
        match parse("foo-bar?").unwrap() {
            Value::Symbol(s) => assert_eq!(&*s, "foo-bar?"),
            other => panic!("expected symbol, got {:?}", other),
        }
    }

    #[test]
    fn test_dot_token_is_symbol_not_dotted_pair_syntax() {
        match parse(".").unwrap() {
            Value::Symbol(s) => assert_eq!(&*s, "."),
            other => panic!("expected symbol, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_list_is_nil() {
        assert!(parse("()").unwrap().is_nil());
    }

    #[test]
    fn test_parse_simple_list() {
        let (items, tail) = parse("(1 2 3)").unwrap().to_vec();
        assert_eq!(items.len(), 3);
        assert!(tail.is_nil());
        assert!(matches!(items[0], Value::Integer(1)));
        assert!(matches!(items[2], Value::Integer(3)));
    }

    #[test]
    fn test_parse_nested_list() {
        let (items, _) = parse("(1 (2 3) 4)").unwrap().to_vec();
        assert_eq!(items.len(), 3);
        let (inner, _) = items[1].to_vec();
        assert_eq!(inner.len(), 2);
    }

    #[test]
    fn test_parse_quote_shorthand() {
        let (items, _) = parse("'x").unwrap().to_vec();
        assert_eq!(items.len(), 2);
        match &items[0] {
            Value::Symbol(s) => assert_eq!(&**s, "quote"),
            other => panic!("expected quote symbol, got {:?}", other),
        }
        match &items[1] {
            Value::Symbol(s) => assert_eq!(&**s, "x"),
            other => panic!("expected x, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_quoted_list() {
        let (items, _) = parse("'(1 2)").unwrap().to_vec();
        assert_eq!(items.len(), 2);
        let (inner, _) = items[1].to_vec();
        assert_eq!(inner.len(), 2);
    }

    #[test]
    fn test_parse_comment_then_expr() {
        assert!(matches!(parse("; a comment\n42"), Ok(Value::Integer(42))));
    }

    #[test]
    fn test_parse_comment_inside_list() {
        let (items, _) = parse("(1 2 ; trailing\n 3)").unwrap().to_vec();
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_unclosed_list_is_read_error() {
        assert!(matches!(parse("(1 2"), Err(ReadError::UnexpectedEof)));
    }

    #[test]
    fn test_unexpected_close_paren() {
        assert!(matches!(parse(")"), Err(ReadError::UnexpectedCloseParen)));
    }

    #[test]
    fn test_parse_leaves_trailing_input() {
        let (value, rest) = read_expr("1 2 3").unwrap();
        assert!(matches!(value, Value::Integer(1)));
        assert_eq!(rest.trim(), "2 3");
    }

    #[test]
    fn test_parse_whitespace_padding() {
        assert!(matches!(parse("  42  "), Ok(Value::Integer(42))));
    }

    #[test]
    fn test_parse_define_like_expression() {
        let (items, _) = parse("(defun square (x) (* x x))").unwrap().to_vec();
        assert_eq!(items.len(), 4);
    }
}
