use std::{
    io::{self, BufReader},
    process::ExitCode,
};

use clap::Parser;
use lazy_static::lazy_static;
use rdcalc::{
    cursor::{cursor::Cursor, source::Source},
    errors::errors::{Error, ErrorTip},
    evaluator::{environment::Environment, evaluator::evaluate},
    parser::parser::parse,
    render_error,
};
use regex::Regex;

const SAMPLE: &str = "  (abc+5) * (r2d2 * 3 + abc) \n";

lazy_static! {
    static ref BINDING: Regex = Regex::new(r"^([A-Za-z][A-Za-z0-9]*)=(-?[0-9]+)$").unwrap();
}

/// Parse an integer expression and evaluate it against variable bindings.
#[derive(Parser, Debug)]
#[command(name = "rdcalc", version)]
struct Args {
    /// Expression to evaluate, or `-` to read it from stdin.
    /// Defaults to a sample expression over `abc` and `r2d2`.
    expression: Option<String>,

    /// Bind a variable, e.g. `--bind abc=1`. May be repeated.
    #[arg(short, long = "bind", value_name = "NAME=VALUE", value_parser = parse_binding)]
    bindings: Vec<(String, i64)>,
}

fn parse_binding(arg: &str) -> Result<(String, i64), String> {
    let captures = BINDING
        .captures(arg)
        .ok_or_else(|| format!("`{}` is not of the form NAME=VALUE", arg))?;

    let value = captures[2]
        .parse()
        .map_err(|_| format!("`{}` does not fit in a 64-bit integer", &captures[2]))?;

    Ok((captures[1].to_string(), value))
}

fn main() -> ExitCode {
    let args = Args::parse();

    use tracing_subscriber::{fmt, EnvFilter};

    // RUST_LOG controls the level, defaulting to WARN
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut environment: Environment = args.bindings.into_iter().collect();

    match args.expression.as_deref() {
        Some("-") => {
            let cursor = Cursor::from_reader(BufReader::new(io::stdin().lock()));
            run(cursor, &environment, None)
        }
        Some(text) => run(Cursor::from_text(text), &environment, Some(text)),
        None => {
            if environment.is_empty() {
                environment.bind("abc", 1);
                environment.bind("r2d2", 2);
            }
            run(Cursor::from_text(SAMPLE), &environment, Some(SAMPLE))
        }
    }
}

fn run<S: Source>(mut cursor: Cursor<S>, environment: &Environment, source: Option<&str>) -> ExitCode {
    let expr = match parse(&mut cursor) {
        Ok(expr) => expr,
        Err(error) => return report(&error, source),
    };

    if !cursor.at_end() {
        println!("unscanned input after parsing {}", expr);
        return ExitCode::FAILURE;
    }

    println!("Found {}", expr);

    match evaluate(&expr, environment) {
        Ok(value) => {
            println!("Value = {}", value);
            ExitCode::SUCCESS
        }
        Err(error) => report(&error, source),
    }
}

fn report(error: &Error, source: Option<&str>) -> ExitCode {
    match source {
        Some(source) => eprintln!("{}", render_error(error, source)),
        // Input came from a stream, so there is no line to point into
        None => {
            if let ErrorTip::None = error.get_tip() {
                eprintln!("Error: {} at {}", error.get_error_name(), error.get_position().0);
            } else {
                eprintln!(
                    "Error: {} ({}) at {}",
                    error.get_error_name(),
                    error.get_tip(),
                    error.get_position().0
                );
            }
        }
    }

    ExitCode::FAILURE
}
