// ABOUTME: The evaluator: special forms, application, and the infallible public eval entry point

use crate::env::Environment;
use crate::error::EvalError;
use crate::sink::write_diagnostic;
use crate::value::{intern, Value};
use std::rc::Rc;

/// Evaluates `expr` in `env`. This never fails: a malformed subexpression
/// writes a diagnostic and contributes `nil` to its parent rather than
/// unwinding the caller. There is no tail-call optimization; deep recursion
/// grows the Rust call stack along with the Lisp one.
pub fn eval(expr: &Value, env: &Rc<Environment>) -> Value {
    match try_eval(expr, env) {
        Ok(value) => value,
        Err(err) => {
            write_diagnostic(&err.to_string());
            Value::nil()
        }
    }
}

fn try_eval(expr: &Value, env: &Rc<Environment>) -> Result<Value, EvalError> {
    match expr {
        Value::Integer(_) => Ok(expr.clone()),
        Value::Primitive(..) | Value::Closure { .. } => Ok(expr.clone()),
        Value::Symbol(name) => eval_symbol(name, env),
        Value::Pair(..) => eval_form(expr, env),
    }
}

fn eval_symbol(name: &Rc<str>, env: &Rc<Environment>) -> Result<Value, EvalError> {
    match &**name {
        "nil" => Ok(Value::nil()),
        "t" => Ok(Value::t()),
        _ => env
            .lookup(name)
            .ok_or_else(|| EvalError::UndefinedSymbol(name.to_string())),
    }
}

fn eval_form(expr: &Value, env: &Rc<Environment>) -> Result<Value, EvalError> {
    let (items, tail) = expr.to_vec();
    if !tail.is_nil() {
        return Err(EvalError::RuntimeError {
            function: "eval",
            message: "cannot evaluate an improper list".to_string(),
        });
    }
    let Some(head) = items.first() else {
        return Err(EvalError::RuntimeError {
            function: "eval",
            message: "cannot evaluate ()".to_string(),
        });
    };

    if let Value::Symbol(name) = head {
        match &**name {
            "quote" => return eval_quote(&items),
            "if" => return eval_if(&items, env),
            "lambda" => return eval_lambda(&items, env),
            "defun" => return eval_defun(&items, env),
            _ => {}
        }
    }

    // Each operand is evaluated through the infallible `eval`, not `try_eval`:
    // a malformed operand degrades to a diagnostic plus `nil` right here,
    // rather than unwinding this whole application (mirrors the source's
    // `eval_list`, which always returns a value and never an error).
    let operator = eval(head, env);
    let args: Vec<Value> = items[1..].iter().map(|arg| eval(arg, env)).collect();
    apply(&operator, &args)
}

fn eval_quote(items: &[Value]) -> Result<Value, EvalError> {
    match items.get(1) {
        Some(value) => Ok(value.clone()),
        None => Err(EvalError::ArityError {
            function: "quote",
            expected: "1",
            actual: 0,
        }),
    }
}

fn eval_if(items: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    let cond = items.get(1).ok_or(EvalError::ArityError {
        function: "if",
        expected: "2 or 3",
        actual: items.len() - 1,
    })?;
    let test = eval(cond, env);
    if test.is_truthy() {
        match items.get(2) {
            Some(then_branch) => Ok(eval(then_branch, env)),
            None => Ok(Value::nil()),
        }
    } else {
        match items.get(3) {
            Some(else_branch) => Ok(eval(else_branch, env)),
            None => Ok(Value::nil()),
        }
    }
}

fn eval_lambda(items: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    let params = items.get(1).ok_or(EvalError::ArityError {
        function: "lambda",
        expected: "2",
        actual: items.len() - 1,
    })?;
    let body = items.get(2).ok_or(EvalError::ArityError {
        function: "lambda",
        expected: "2",
        actual: items.len() - 1,
    })?;
    Ok(Value::Closure {
        params: Rc::new(params.clone()),
        body: Rc::new(body.clone()),
        env: env.clone(),
    })
}

/// `defun` always installs its binding in the global environment, and the
/// closure it creates captures that same global environment, regardless of
/// where the `defun` form itself was evaluated.
fn eval_defun(items: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    let name = match items.get(1) {
        Some(Value::Symbol(name)) => name.clone(),
        _ => {
            return Err(EvalError::RuntimeError {
                function: "defun",
                message: "expected a symbol name".to_string(),
            })
        }
    };
    let params = items.get(2).ok_or(EvalError::ArityError {
        function: "defun",
        expected: "3",
        actual: items.len() - 1,
    })?;
    let body = items.get(3).ok_or(EvalError::ArityError {
        function: "defun",
        expected: "3",
        actual: items.len() - 1,
    })?;

    let global = env.global();
    let closure = Value::Closure {
        params: Rc::new(params.clone()),
        body: Rc::new(body.clone()),
        env: global.clone(),
    };
    global.define(name.clone(), closure);
    Ok(Value::Symbol(name))
}

fn apply(operator: &Value, args: &[Value]) -> Result<Value, EvalError> {
    match operator {
        Value::Primitive(_, func) => func(args),
        Value::Closure { params, body, env } => apply_closure(params, body, env, args),
        _ => Err(EvalError::NotCallable),
    }
}

/// Binds `args` against `params` positionally. Arity mismatch is not an
/// error: a surplus parameter is left unbound, a surplus argument is
/// silently discarded.
fn apply_closure(
    params: &Value,
    body: &Value,
    closure_env: &Rc<Environment>,
    args: &[Value],
) -> Result<Value, EvalError> {
    let (param_names, _) = params.to_vec();
    let call_env = Environment::with_parent(closure_env.clone());

    for (param, arg) in param_names.iter().zip(args.iter()) {
        if let Value::Symbol(name) = param {
            call_env.define(name.clone(), arg.clone());
        }
    }

    try_eval(body, &call_env)
}

/// Builds the global environment with `nil` and `t` available as ordinary
/// bound symbols, matching the special-cased literals `eval_symbol` also
/// recognizes directly.
pub fn initial_global_env() -> Rc<Environment> {
    let env = Environment::new();
    env.define(intern("nil"), Value::nil());
    env.define(intern("t"), Value::t());
    crate::builtins::register_builtins(&env);
    env
}
