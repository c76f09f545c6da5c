// ABOUTME: CLI entry point: REPL (rustyline, paren-balanced multi-line read) or script runner

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use std::path::PathBuf;
use tinylisp::driver::read_balanced;
use tinylisp::{eval, initial_global_env, parse, print};

/// A small Turing-complete Lisp interpreter.
#[derive(Parser, Debug)]
#[command(name = "tinylisp")]
#[command(version)]
#[command(about = "A small Turing-complete Lisp interpreter")]
struct CliArgs {
    /// Script file to evaluate; if omitted, starts the REPL
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

const HISTORY_FILE: &str = ".tinylisp_history";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    match args.script {
        Some(path) => run_script(&path),
        None => run_repl(),
    }
}

/// Evaluates every top-level expression in `path` against a fresh global
/// environment, in order, discarding each result (scripts print explicitly
/// via the `print` primitive rather than echoing values like the REPL does).
fn run_script(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read script file {}: {}", path.display(), e))?;
    let env = initial_global_env();
    let mut remaining = contents.as_str();

    loop {
        match tinylisp::reader::read_expr(remaining) {
            Ok((expr, rest)) => {
                eval(&expr, &env);
                remaining = rest;
            }
            Err(tinylisp::ReadError::Empty) => break,
            Err(e) => return Err(format!("Parse error: {}", e).into()),
        }
    }

    Ok(())
}

/// Interactive loop: prompt `"> "`, continuation prompt `"  "` while paren
/// depth is unbalanced, per spec.md §6. Each accepted expression is parsed,
/// evaluated, and its printed result echoed; end of input (Ctrl+D) exits 0.
fn run_repl() -> Result<(), Box<dyn std::error::Error>> {
    let env = initial_global_env();
    let config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<(), DefaultHistory> = Editor::with_config(config)?;
    let _ = rl.load_history(HISTORY_FILE);

    println!("tinylisp — Ctrl+D to exit");

    loop {
        let mut interrupted = false;
        let text = read_balanced(|first_line| {
            let prompt = if first_line { "> " } else { "  " };
            match rl.readline(prompt) {
                Ok(line) => Some(line),
                Err(ReadlineError::Interrupted) => {
                    interrupted = true;
                    None
                }
                Err(ReadlineError::Eof) => None,
                Err(e) => {
                    eprintln!("Readline error: {e}");
                    None
                }
            }
        });

        if interrupted {
            println!("^C");
            continue;
        }

        let Some(text) = text else {
            println!();
            break;
        };

        if text.trim().is_empty() {
            continue;
        }

        match parse(&text) {
            Ok(expr) => {
                let result = eval(&expr, &env);
                println!("{}", print(&result));
            }
            Err(e) => eprintln!("Parse error: {}", e),
        }
    }

    let _ = rl.save_history(HISTORY_FILE);
    Ok(())
}
