// ABOUTME: Injected print and diagnostic sinks, following the thread-local storage pattern
// used by the teacher crate's I/O sandbox

use std::cell::RefCell;
use std::io::{self, Write};

thread_local! {
    static PRINT_SINK: RefCell<Option<Box<dyn Write>>> = const { RefCell::new(None) };
    static DIAGNOSTIC_SINK: RefCell<Option<Box<dyn Write>>> = const { RefCell::new(None) };
}

/// Installs a custom print sink for this thread, overriding stdout.
/// Intended for tests that want to capture output.
pub fn set_print_sink(sink: Box<dyn Write>) {
    PRINT_SINK.with(|s| *s.borrow_mut() = Some(sink));
}

/// Installs a custom diagnostic sink for this thread, overriding stderr.
pub fn set_diagnostic_sink(sink: Box<dyn Write>) {
    DIAGNOSTIC_SINK.with(|s| *s.borrow_mut() = Some(sink));
}

/// Restores stdout/stderr as the print and diagnostic sinks.
pub fn reset_sinks() {
    PRINT_SINK.with(|s| *s.borrow_mut() = None);
    DIAGNOSTIC_SINK.with(|s| *s.borrow_mut() = None);
}

/// Writes a line to the print sink (stdout unless overridden).
pub fn write_print(line: &str) {
    PRINT_SINK.with(|s| match &mut *s.borrow_mut() {
        Some(sink) => {
            let _ = writeln!(sink, "{}", line);
        }
        None => {
            println!("{}", line);
        }
    });
}

/// Writes a one-line diagnostic to the diagnostic sink (stderr unless overridden).
pub fn write_diagnostic(line: &str) {
    DIAGNOSTIC_SINK.with(|s| match &mut *s.borrow_mut() {
        Some(sink) => {
            let _ = writeln!(sink, "{}", line);
        }
        None => {
            let _ = writeln!(io::stderr(), "{}", line);
        }
    });
}
