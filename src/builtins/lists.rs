// ABOUTME: List primitives: `car`, `cdr`, `cons` over `Pair` values

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

/// Head of a `Pair`. Non-pair argument is a type error, recovered at the
/// call site to `nil` with a diagnostic, per §4.5's "nil if the argument is
/// not a Pair" contract.
fn car(args: &[Value]) -> Result<Value, EvalError> {
    let Some(arg) = args.first() else {
        return Err(EvalError::arity_error("car", "1", args.len()));
    };
    match arg {
        Value::Pair(head, _) => Ok((**head).clone()),
        _ => Err(EvalError::type_error("car", "pair", arg.kind())),
    }
}

/// Tail of a `Pair`. Same non-pair handling as `car`.
fn cdr(args: &[Value]) -> Result<Value, EvalError> {
    let Some(arg) = args.first() else {
        return Err(EvalError::arity_error("cdr", "1", args.len()));
    };
    match arg {
        Value::Pair(_, tail) => Ok((**tail).clone()),
        _ => Err(EvalError::type_error("cdr", "pair", arg.kind())),
    }
}

/// Builds a new `Pair` from its two arguments. Never fails on well-typed
/// input: any `Value` may be a head or a tail, including another Pair or
/// `nil`, which is how proper lists are built up.
fn cons(args: &[Value]) -> Result<Value, EvalError> {
    match args {
        [head, tail] => Ok(Value::cons(head.clone(), tail.clone())),
        _ => Err(EvalError::arity_error("cons", "2", args.len())),
    }
}

pub fn register(env: &Rc<Environment>) {
    env.define(crate::value::intern("car"), Value::Primitive("car", car));
    env.define(crate::value::intern("cdr"), Value::Primitive("cdr", cdr));
    env.define(crate::value::intern("cons"), Value::Primitive("cons", cons));
}
