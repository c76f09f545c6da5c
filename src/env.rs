// ABOUTME: Lexical environment: parent-linked scope chain with first-binding-wins lookup

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A name-to-value scope, chained to its lexically enclosing scope.
///
/// Represented as a hash map plus parent link rather than the spec's literal
/// cons chain of bindings (sanctioned by spec.md's design notes), since lookup
/// order and immutability-after-construction are what the language actually
/// depends on, not the underlying data structure. Local scopes are populated
/// once at closure-call time and never touched again; only the global
/// environment gains new bindings (from `defun`) after its creation, which is
/// why mutation is confined to a `RefCell`.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<Rc<str>, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
        })
    }

    /// Adds a binding to this scope. Shadows any binding of the same name
    /// visible from here, without disturbing the parent scope's own binding.
    pub fn define(&self, name: Rc<str>, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Scans this scope, then each parent in turn. First match wins.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|p| p.lookup(name))
    }
}

impl Environment {
    /// Walks the parent chain to the outermost (global) scope. `defun`
    /// installs its binding there regardless of which scope it was
    /// evaluated in.
    pub fn global(self: &Rc<Self>) -> Rc<Environment> {
        match &self.parent {
            Some(parent) => parent.global(),
            None => self.clone(),
        }
    }
}
