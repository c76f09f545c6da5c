// ABOUTME: The one I/O primitive, `print`, writing through the injected print sink

use crate::env::Environment;
use crate::error::EvalError;
use crate::printer::print_to_sink;
use crate::value::Value;
use std::rc::Rc;

/// Prints each argument in turn, each followed by its own newline, matching
/// the source's `while (!is_nil(args)) { print_obj(car(args)); printf("\n"); }`
/// loop rather than a single space-joined line. Returns `nil`.
fn print(args: &[Value]) -> Result<Value, EvalError> {
    for arg in args {
        print_to_sink(arg);
    }
    Ok(Value::nil())
}

pub fn register(env: &Rc<Environment>) {
    env.define(crate::value::intern("print"), Value::Primitive("print", print));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{reset_sinks, set_print_sink};
    use serial_test::serial;
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc as StdRc;

    struct CapturingWriter(StdRc<RefCell<Vec<u8>>>);

    impl Write for CapturingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    #[serial]
    fn test_print_no_args_returns_nil() {
        assert!(print(&[]).unwrap().is_nil());
    }

    #[test]
    #[serial]
    fn test_print_writes_each_argument_on_its_own_line() {
        let buf: StdRc<RefCell<Vec<u8>>> = StdRc::default();
        set_print_sink(Box::new(CapturingWriter(buf.clone())));
        print(&[Value::Integer(1), Value::Integer(2)]).unwrap();
        reset_sinks();
        assert_eq!(String::from_utf8(buf.borrow().clone()).unwrap(), "1\n2\n");
    }
}
