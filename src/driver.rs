// ABOUTME: Paren-balanced multi-line read loop shared by the REPL and script runner
//
// Grounded in original_source/tinylisp.c's repl(): a hand-rolled paren_depth
// counter over successive fgets lines, translated here into a pure helper
// driven by an injected line-reading callback so it can front either
// rustyline (interactive) or a plain string iterator (scripts, tests)
// without depending on either.

/// Running paren-depth contribution of one line, ignoring everything from a
/// `;` to the end of the line. A line is scanned in isolation, so a `;`
/// inside a string is irrelevant here: this language has no strings.
pub fn paren_depth_delta(line: &str) -> i32 {
    let mut depth = 0;
    let mut in_comment = false;
    for ch in line.chars() {
        match ch {
            ';' => in_comment = true,
            '\n' => in_comment = false,
            '(' if !in_comment => depth += 1,
            ')' if !in_comment => depth -= 1,
            _ => {}
        }
    }
    depth
}

/// True if `text` has no content outside whitespace and `;` comments.
pub fn is_blank_or_comment(text: &str) -> bool {
    let mut in_comment = false;
    for ch in text.chars() {
        if ch == ';' {
            in_comment = true;
        }
        if ch == '\n' {
            in_comment = false;
        }
        if !in_comment && !ch.is_whitespace() {
            return false;
        }
    }
    true
}

/// Accumulates successive lines from `read_line` until the parenthesis depth
/// returns to zero and the accumulated text has non-comment content, mirroring
/// the source's `while (paren_depth == 0 && strlen(input) > 0)` exit test.
///
/// `read_line(is_first_line)` is called once per physical line; it should
/// print the matching prompt (`"> "` on the first line, `"  "` on
/// continuations per spec.md §6) before reading, and return `None` at end of
/// input. A blank or comment-only first line ends the read immediately with
/// `Some(String::new())`, matching the source's "empty line at start, skip
/// it" behavior; the caller should treat an empty string as "read again"
/// rather than as an expression to parse.
pub fn read_balanced<F>(mut read_line: F) -> Option<String>
where
    F: FnMut(bool) -> Option<String>,
{
    let mut input = String::new();
    let mut depth = 0i32;
    let mut first_line = true;

    loop {
        let Some(line) = read_line(first_line) else {
            return if input.trim().is_empty() {
                None
            } else {
                Some(input)
            };
        };

        if first_line && is_blank_or_comment(&line) {
            return Some(String::new());
        }

        input.push_str(&line);
        input.push('\n');
        depth += paren_depth_delta(&line);
        first_line = false;

        if depth == 0 && !is_blank_or_comment(&input) {
            return Some(input);
        }
    }
}
