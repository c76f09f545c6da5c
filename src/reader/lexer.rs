// ABOUTME: Tokenizer: skips whitespace/comments, emits '(', ')', '\'', or atom tokens

use nom::{
    branch::alt,
    character::complete::{char, multispace1, none_of},
    combinator::{recognize, value},
    multi::{many0, many1},
    IResult, Parser,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    LParen,
    RParen,
    Quote,
    Atom(String),
}

/// Skips a `;` line comment up to (not including) the newline.
fn line_comment(input: &str) -> IResult<&str, ()> {
    let (input, _) = char(';')(input)?;
    let (input, _) = nom::bytes::complete::take_while(|c| c != '\n')(input)?;
    Ok((input, ()))
}

/// Skips any run of whitespace and comments.
pub fn skip_trivia(input: &str) -> IResult<&str, ()> {
    many0(alt((value((), multispace1), line_comment)))
        .map(|_| ())
        .parse(input)
}

/// An atom token: a maximal run of characters that are neither whitespace,
/// paren, quote, nor the start of a comment.
fn atom(input: &str) -> IResult<&str, Token> {
    recognize(many1(none_of(" \t\r\n()';")))
        .map(|s: &str| Token::Atom(s.to_string()))
        .parse(input)
}

fn one_token(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::LParen, char('(')),
        value(Token::RParen, char(')')),
        value(Token::Quote, char('\'')),
        atom,
    ))
    .parse(input)
}

/// Reads the next token, skipping leading trivia. Returns `None` at end of input.
pub fn next_token(input: &str) -> IResult<&str, Option<Token>> {
    let (input, _) = skip_trivia(input)?;
    if input.is_empty() {
        return Ok((input, None));
    }
    let (input, tok) = one_token(input)?;
    Ok((input, Some(tok)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace_and_comments() {
        let (rest, _) = skip_trivia("   ; comment\n  42").unwrap();
        assert_eq!(rest, "42");
    }

    #[test]
    fn test_next_token_paren() {
        assert_eq!(next_token("(").unwrap().1, Some(Token::LParen));
        assert_eq!(next_token(")").unwrap().1, Some(Token::RParen));
    }

    #[test]
    fn test_next_token_quote() {
        assert_eq!(next_token("'x").unwrap().1, Some(Token::Quote));
    }

    #[test]
    fn test_next_token_atom() {
        let (rest, tok) = next_token("foo-bar rest").unwrap();
        assert_eq!(tok, Some(Token::Atom("foo-bar".to_string())));
        assert_eq!(rest, " rest");
    }

    #[test]
    fn test_next_token_negative_integer_atom() {
        assert_eq!(next_token("-42").unwrap().1, Some(Token::Atom("-42".to_string())));
    }

    #[test]
    fn test_next_token_lone_minus_is_atom() {
        assert_eq!(next_token("-").unwrap().1, Some(Token::Atom("-".to_string())));
    }

    #[test]
    fn test_end_of_input_yields_no_token() {
        assert_eq!(next_token("").unwrap().1, None);
        assert_eq!(next_token("   ; trailing comment").unwrap().1, None);
    }

    #[test]
    fn test_atom_stops_at_paren() {
        let (rest, tok) = next_token("foo)").unwrap();
        assert_eq!(tok, Some(Token::Atom("foo".to_string())));
        assert_eq!(rest, ")");
    }
}
