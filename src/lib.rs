pub mod error;
pub mod evaluator;
pub mod lexer;

pub use error::{EvaluationError, Result};
pub use evaluator::{BraceMode, Evaluator, EvaluatorOptions, Operator};
pub use lexer::{Token, TokenKind, Tokenizer};

/// Tokenizes and evaluates one expression with the default options.
pub fn evaluate_expression(expression: &str) -> Result<f64> {
    evaluate_expression_with(expression, &EvaluatorOptions::default())
}

pub fn evaluate_expression_with(expression: &str, options: &EvaluatorOptions) -> Result<f64> {
    let tokens = Tokenizer::tokenize(expression)?;
    Evaluator::with_options(*options).evaluate(&tokens)
}
