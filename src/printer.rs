// ABOUTME: Printer: renders a Value back to its textual form and writes it through the print sink

use crate::sink::write_print;
use crate::value::Value;

/// Renders `value` using the same grammar the reader accepts, so that
/// `parse(&print(eval(parse(text))))` round-trips for self-evaluating values.
pub fn print(value: &Value) -> String {
    format!("{}", value)
}

/// Renders `value` and writes it to the print sink, followed by a newline.
/// This is what the `print` built-in and the REPL's result echo both use.
pub fn print_to_sink(value: &Value) {
    write_print(&print(value));
}
