//! Arithmetic: `+`, `-`, `*`, `/` over `Integer` values.
//!
//! `+` and `*` are variadic with identities 0 and 1. `-` negates a single
//! argument and otherwise left-folds subtraction. `/` requires at least one
//! argument and left-folds truncating integer division.

use crate::env::Environment;
use crate::error::EvalError;
use crate::sink::write_diagnostic;
use crate::value::Value;
use std::rc::Rc;

/// `+` aborts on the first non-integer argument, printing a diagnostic and
/// discarding whatever partial sum it had accumulated — matching the
/// source's `builtin_add`, which returns `make_int(0)` on the spot rather
/// than folding over the remaining arguments.
fn add(args: &[Value]) -> Result<Value, EvalError> {
    let mut sum = 0i64;
    for arg in args {
        match *arg {
            Value::Integer(n) => sum += n,
            ref other => {
                write_diagnostic(&EvalError::type_error("+", "integer", other.kind()).to_string());
                return Ok(Value::Integer(0));
            }
        }
    }
    Ok(Value::Integer(sum))
}

/// `-` aborts the same way, but silently: the source's `builtin_sub` never
/// prints a diagnostic on a bad argument, it just returns `make_int(0)`.
fn sub(args: &[Value]) -> Result<Value, EvalError> {
    match args {
        [] => Ok(Value::Integer(0)),
        [only] => match *only {
            Value::Integer(n) => Ok(Value::Integer(-n)),
            _ => Ok(Value::Integer(0)),
        },
        [first, rest @ ..] => {
            let Value::Integer(mut acc) = *first else {
                return Ok(Value::Integer(0));
            };
            for arg in rest {
                match *arg {
                    Value::Integer(n) => acc -= n,
                    _ => return Ok(Value::Integer(0)),
                }
            }
            Ok(Value::Integer(acc))
        }
    }
}

/// `*` aborts silently too, returning its identity (1), matching
/// `builtin_mul`.
fn mul(args: &[Value]) -> Result<Value, EvalError> {
    let mut product = 1i64;
    for arg in args {
        match *arg {
            Value::Integer(n) => product *= n,
            _ => return Ok(Value::Integer(1)),
        }
    }
    Ok(Value::Integer(product))
}

/// `/` requires at least one argument (arity error, not a primitive-level
/// diagnostic). A non-integer operand or a zero divisor aborts with a
/// diagnostic and the identity 0, matching `builtin_div`.
fn div(args: &[Value]) -> Result<Value, EvalError> {
    let [first, rest @ ..] = args else {
        return Err(EvalError::arity_error("/", "at least 1", 0));
    };
    let Value::Integer(mut acc) = *first else {
        write_diagnostic(&EvalError::type_error("/", "integer", first.kind()).to_string());
        return Ok(Value::Integer(0));
    };
    for arg in rest {
        match *arg {
            Value::Integer(0) => {
                write_diagnostic(&EvalError::DivisionByZero { function: "/" }.to_string());
                return Ok(Value::Integer(0));
            }
            Value::Integer(n) => acc /= n,
            ref other => {
                write_diagnostic(&EvalError::type_error("/", "integer", other.kind()).to_string());
                return Ok(Value::Integer(0));
            }
        }
    }
    Ok(Value::Integer(acc))
}

pub fn register(env: &Rc<Environment>) {
    env.define(crate::value::intern("+"), Value::Primitive("+", add));
    env.define(crate::value::intern("-"), Value::Primitive("-", sub));
    env.define(crate::value::intern("*"), Value::Primitive("*", mul));
    env.define(crate::value::intern("/"), Value::Primitive("/", div));
}
