use thiserror::Error;

/// Everything that can go wrong while turning an expression string into a number.
///
/// Every variant is terminal for the evaluation that raised it. Positions are
/// 1-based character columns into the original input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// A character that does not start any token.
    #[error("unexpected character '{character}' at position {position}")]
    Lex { character: char, position: usize },

    /// A number token whose text is not a valid floating-point literal.
    #[error("invalid number literal '{text}' at position {position}")]
    NumberFormat { text: String, position: usize },

    /// A division whose result is infinite.
    #[error("division of {dividend} by {divisor} does not have a finite result")]
    Division { dividend: f64, divisor: f64 },

    /// The token sequence does not describe a well-formed expression.
    #[error("malformed expression: {0}")]
    Eval(String),

    /// A token that is lexically valid but has no evaluation rule.
    #[error("unsupported token '{text}' at position {position}")]
    UnsupportedToken { text: String, position: usize },
}

impl EvaluationError {
    /// Stable name of the error kind, independent of the message text.
    pub fn kind(&self) -> &'static str {
        match self {
            EvaluationError::Lex { .. } => "LexError",
            EvaluationError::NumberFormat { .. } => "NumberFormatError",
            EvaluationError::Division { .. } => "DivisionError",
            EvaluationError::Eval(_) => "EvalError",
            EvaluationError::UnsupportedToken { .. } => "UnsupportedTokenError",
        }
    }
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
