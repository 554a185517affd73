use log::{debug, warn};
use stackcalc_rs::{evaluate_expression_with, BraceMode, EvaluatorOptions};
use std::io::{self, BufRead, Write};

const BRACE_MODE_VAR: &str = "STACKCALC_BRACES";

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let options = options_from_env();
    debug!("Evaluator options: {:?}", options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let expression = line.trim_end_matches('\r');

        match evaluate_expression_with(expression, &options) {
            Ok(value) => {
                writeln!(out, "\n{}", value)?;
                out.flush()?;
            }
            Err(err) => {
                warn!("{} in {:?}", err.kind(), expression);
                eprintln!("error: {}", err);
            }
        }
    }

    Ok(())
}

fn options_from_env() -> EvaluatorOptions {
    let brace_mode = match std::env::var(BRACE_MODE_VAR) {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            warn!("{} ({}), grouping parentheses", e, BRACE_MODE_VAR);
            BraceMode::default()
        }),
        Err(_) => BraceMode::default(),
    };
    EvaluatorOptions::default().with_brace_mode(brace_mode)
}
