// ABOUTME: Value types representing Lisp data: integers, symbols, pairs, closures, primitives

use crate::env::Environment;
use crate::error::EvalError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// An already-evaluated argument list handed to a built-in.
pub type PrimitiveFn = fn(&[Value]) -> Result<Value, EvalError>;

#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Symbol(Rc<str>),
    Pair(Rc<Value>, Rc<Value>),
    Primitive(&'static str, PrimitiveFn),
    Closure {
        params: Rc<Value>,
        body: Rc<Value>,
        env: Rc<Environment>,
    },
}

thread_local! {
    static INTERNED: RefCell<HashMap<Box<str>, Rc<str>>> = RefCell::new(HashMap::new());
}

/// Returns the same `Rc<str>` for repeated spellings of the same symbol name.
///
/// Two symbols are only ever `eq` by name (see `builtins::comparison::builtin_eq`),
/// but interning keeps that comparison cheap and keeps `nil`/`t` proper singletons.
pub fn intern(name: &str) -> Rc<str> {
    INTERNED.with(|table| {
        let mut table = table.borrow_mut();
        if let Some(existing) = table.get(name) {
            return existing.clone();
        }
        let rc: Rc<str> = Rc::from(name);
        table.insert(name.into(), rc.clone());
        rc
    })
}

impl Value {
    pub fn symbol(name: &str) -> Value {
        Value::Symbol(intern(name))
    }

    pub fn nil() -> Value {
        Value::symbol("nil")
    }

    pub fn t() -> Value {
        Value::symbol("t")
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Symbol(s) if &**s == "nil")
    }

    /// Lisp truthiness: everything except `nil` is true.
    pub fn is_truthy(&self) -> bool {
        !self.is_nil()
    }

    pub fn cons(head: Value, tail: Value) -> Value {
        Value::Pair(Rc::new(head), Rc::new(tail))
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Value::Pair(..))
    }

    /// Builds a proper list from `items`, terminated by `nil`.
    pub fn list(items: Vec<Value>) -> Value {
        items
            .into_iter()
            .rev()
            .fold(Value::nil(), |tail, head| Value::cons(head, tail))
    }

    /// Names this value's variant for diagnostics (`"+: expected integer, got symbol"`).
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Symbol(_) => "symbol",
            Value::Pair(..) => "pair",
            Value::Primitive(..) => "primitive",
            Value::Closure { .. } => "closure",
        }
    }

    /// Collects a proper or dotted list into its elements and final tail.
    /// The tail is `nil` for a proper list.
    pub fn to_vec(&self) -> (Vec<Value>, Value) {
        let mut items = Vec::new();
        let mut cur = self.clone();
        loop {
            match cur {
                Value::Pair(head, tail) => {
                    items.push((*head).clone());
                    cur = (*tail).clone();
                }
                other => return (items, other),
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Primitive(..) => write!(f, "<built-in function>"),
            Value::Closure { .. } => write!(f, "<lambda>"),
            Value::Pair(..) => {
                write!(f, "(")?;
                let mut cur = self;
                let mut first = true;
                loop {
                    match cur {
                        Value::Pair(head, tail) => {
                            if !first {
                                write!(f, " ")?;
                            }
                            first = false;
                            write!(f, "{}", head)?;
                            cur = tail;
                        }
                        other if other.is_nil() => break,
                        other => {
                            write!(f, " . {}", other)?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_display() {
        assert_eq!(format!("{}", Value::Integer(42)), "42");
        assert_eq!(format!("{}", Value::Integer(-7)), "-7");
    }

    #[test]
    fn test_nil_and_t_display() {
        assert_eq!(format!("{}", Value::nil()), "nil");
        assert_eq!(format!("{}", Value::t()), "t");
    }

    #[test]
    fn test_nil_singleton_identity() {
        assert!(Value::nil().is_nil());
        let from_cons = Value::cons(Value::Integer(1), Value::nil());
        let (_, tail) = from_cons.to_vec();
        assert!(tail.is_nil());
    }

    #[test]
    fn test_list_display() {
        let list = Value::list(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
        assert_eq!(format!("{}", list), "(1 2 3)");
    }

    #[test]
    fn test_dotted_pair_display() {
        let pair = Value::cons(Value::Integer(1), Value::Integer(2));
        assert_eq!(format!("{}", pair), "(1 . 2)");
    }

    #[test]
    fn test_nested_list_display() {
        let inner = Value::list(vec![Value::Integer(2), Value::Integer(3)]);
        let outer = Value::list(vec![Value::Integer(1), inner, Value::Integer(4)]);
        assert_eq!(format!("{}", outer), "(1 (2 3) 4)");
    }

    #[test]
    fn test_interning_shares_allocation() {
        let a = intern("foo");
        let b = intern("foo");
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Integer(1).kind(), "integer");
        assert_eq!(Value::symbol("x").kind(), "symbol");
        assert_eq!(Value::cons(Value::Integer(1), Value::nil()).kind(), "pair");
    }

    #[test]
    fn test_to_vec_proper_list() {
        let list = Value::list(vec![Value::Integer(1), Value::Integer(2)]);
        let (items, tail) = list.to_vec();
        assert_eq!(items.len(), 2);
        assert!(tail.is_nil());
    }
}
