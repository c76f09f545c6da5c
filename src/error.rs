// ABOUTME: Error types for read and evaluation failures

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("{function}: expected {expected}, got {actual}")]
    TypeMismatch {
        function: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{function}: expected {expected} argument{}, got {actual}", if *expected == "1" { "" } else { "s" })]
    ArityError {
        function: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("{function}: {message}")]
    RuntimeError {
        function: &'static str,
        message: String,
    },

    #[error("{function}: division by zero")]
    DivisionByZero { function: &'static str },

    #[error("Undefined symbol: {0}")]
    UndefinedSymbol(String),

    #[error("Not a function")]
    NotCallable,
}

impl EvalError {
    pub fn type_error(function: &'static str, expected: &'static str, actual: &'static str) -> Self {
        EvalError::TypeMismatch {
            function,
            expected,
            actual,
        }
    }

    pub fn arity_error(function: &'static str, expected: &'static str, actual: usize) -> Self {
        EvalError::ArityError {
            function,
            expected,
            actual,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("Unexpected end of input inside list")]
    UnexpectedEof,

    #[error("Unexpected ')'")]
    UnexpectedCloseParen,

    #[error("Unexpected end of input after quote")]
    QuoteMissingExpr,

    #[error("No expression to read")]
    Empty,
}
