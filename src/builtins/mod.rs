// ABOUTME: Registers the ten §4.5 primitives into the global environment, one module per category

use crate::env::Environment;
use std::rc::Rc;

pub mod arithmetic;
pub mod comparison;
pub mod console;
pub mod lists;

/// Populates `env` with `car`, `cdr`, `cons`, `+`, `-`, `*`, `/`, `eq`, `<`,
/// and `print` — exactly the primitive table in spec.md §4.5, nothing more.
pub fn register_builtins(env: &Rc<Environment>) {
    arithmetic::register(env);
    comparison::register(env);
    lists::register(env);
    console::register(env);
}
