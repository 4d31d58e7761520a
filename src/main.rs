use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use lispcalc::{get_result_with, interpreter::evaluator::core::Environment};

/// lispcalc evaluates arithmetic S-expressions such as `(* 2 (+ 1 2))`.
///
/// Without arguments it starts an interactive session on standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a file and evaluate each non-blank line of it.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// An expression to evaluate, or a file path when `--file` is given.
    contents: Option<String>,
}

const PROMPT: &str = "lisp> ";

/// Installs a tracing subscriber if `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=lispcalc=debug` or `RUST_LOG=lispcalc=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_level(true)
                                                        .with_writer(io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let env = Environment::new();

    match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            run_lines(&env, script.lines());
        },
        Some(expression) => {
            if !print_result(&env, &expression) {
                std::process::exit(1);
            }
        },
        None => {
            if let Err(e) = repl(&env) {
                eprintln!("Failed to read input: {e}");
                std::process::exit(1);
            }
        },
    }
}

/// Evaluates every non-blank line independently.
fn run_lines<'a>(env: &Environment, lines: impl Iterator<Item = &'a str>) {
    for line in lines.filter(|l| !l.trim().is_empty()) {
        print_result(env, line);
    }
}

/// Reads expressions from stdin until end of input or `exit`/`quit`.
fn repl(env: &Environment) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            return Ok(());
        }
        if input.is_empty() {
            continue;
        }

        print_result(env, input);
    }
}

/// Prints the value of `source`, or reports the error on stderr.
///
/// Returns `true` if evaluation succeeded.
fn print_result(env: &Environment, source: &str) -> bool {
    match get_result_with(source, env) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            tracing::debug!(input = source, error = ?e, "evaluation failed");
            eprintln!("{e}");
            false
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn file_flag_requires_a_path() {
        assert!(Args::try_parse_from(["lispcalc", "-f"]).is_err());
        assert!(Args::try_parse_from(["lispcalc", "--file"]).is_err());

        let args = Args::try_parse_from(["lispcalc", "-f", "script.lisp"]).unwrap();
        assert!(args.file);
        assert_eq!(args.contents.as_deref(), Some("script.lisp"));
    }

    #[test]
    fn contents_are_optional_without_file_flag() {
        let args = Args::try_parse_from(["lispcalc"]).unwrap();
        assert!(!args.file);
        assert!(args.contents.is_none());

        let args = Args::try_parse_from(["lispcalc", "(+ 1 2)"]).unwrap();
        assert_eq!(args.contents.as_deref(), Some("(+ 1 2)"));
    }
}
