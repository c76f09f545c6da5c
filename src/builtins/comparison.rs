// ABOUTME: Comparison primitives: `eq` (name/value/identity equality) and `<` (integer order)

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

/// `t` if both arguments are Integers with equal numeric value, Symbols with
/// equal name, or the same Pair/Closure/Primitive by identity; else `nil`.
///
/// Symbol equality is by name rather than by interned pointer so that `eq`
/// behaves the same whether or not the two symbols happened to come from the
/// same `intern` call — the portable reading §9 mandates over the source's
/// pointer-identity comparison.
pub fn builtin_eq(args: &[Value]) -> Result<Value, EvalError> {
    let [a, b] = args else {
        return Err(EvalError::arity_error("eq", "2", args.len()));
    };
    let result = match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        (Value::Pair(h1, t1), Value::Pair(h2, t2)) => Rc::ptr_eq(h1, h2) && Rc::ptr_eq(t1, t2),
        (Value::Primitive(n1, _), Value::Primitive(n2, _)) => n1 == n2,
        (
            Value::Closure {
                params: p1,
                body: b1,
                env: e1,
            },
            Value::Closure {
                params: p2,
                body: b2,
                env: e2,
            },
        ) => Rc::ptr_eq(p1, p2) && Rc::ptr_eq(b1, b2) && Rc::ptr_eq(e1, e2),
        _ => false,
    };
    Ok(if result { Value::t() } else { Value::nil() })
}

/// `t` if both arguments are Integers and the first is strictly less than
/// the second; `nil` for any other combination of types, with no diagnostic
/// (unlike the arithmetic primitives, §4.5 does not call `<` a type error).
pub fn builtin_lt(args: &[Value]) -> Result<Value, EvalError> {
    let [a, b] = args else {
        return Err(EvalError::arity_error("<", "2", args.len()));
    };
    let result = matches!((a, b), (Value::Integer(x), Value::Integer(y)) if x < y);
    Ok(if result { Value::t() } else { Value::nil() })
}

pub fn register(env: &Rc<Environment>) {
    env.define(crate::value::intern("eq"), Value::Primitive("eq", builtin_eq));
    env.define(crate::value::intern("<"), Value::Primitive("<", builtin_lt));
}
