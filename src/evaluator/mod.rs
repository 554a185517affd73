use crate::error::{EvaluationError, Result};
use crate::lexer::{Token, TokenKind};
use log::{debug, trace};

mod operator;
mod options;

pub use operator::Operator;
pub use options::{BraceMode, EvaluatorOptions};

/// Operator-precedence evaluator over a token sequence.
///
/// The evaluator only carries its options. Both stacks are created inside
/// [`Evaluator::evaluate`] and dropped when it returns, so one evaluator can be
/// shared between threads and reused for any number of expressions.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    options: EvaluatorOptions,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EvaluatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Evaluates `tokens` in a single pass and returns the remaining value.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` when exactly one value is left and no operator is pending.
    /// * `Err(EvaluationError)` for unparsable numbers, infinite divisions,
    ///   identifiers, and structurally malformed sequences.
    pub fn evaluate(&self, tokens: &[Token]) -> Result<f64> {
        let mut machine = StackMachine::default();

        for token in tokens {
            match token.kind() {
                TokenKind::Number => machine.push_value(parse_number(token)?),
                TokenKind::Operator => machine.push_operator(Operator::try_from(token.text())?)?,
                TokenKind::Brace => match self.options.brace_mode {
                    BraceMode::Group => machine.brace(token)?,
                    BraceMode::Ignore => trace!("Skipping brace '{}'", token.text()),
                },
                TokenKind::Identifier => {
                    return Err(EvaluationError::UnsupportedToken {
                        text: token.text().to_string(),
                        position: token.position(),
                    })
                }
            }
        }

        machine.finish()
    }
}

fn parse_number(token: &Token) -> Result<f64> {
    token
        .text()
        .parse::<f64>()
        .map_err(|_| EvaluationError::NumberFormat {
            text: token.text().to_string(),
            position: token.position(),
        })
}

/// Entry on the operator stack.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Pending {
    Operator(Operator),
    /// An open parenthesis. Reductions never cross it.
    Group,
}

#[derive(Debug, Default)]
struct StackMachine {
    values: Vec<f64>,
    operators: Vec<Pending>,
}

impl StackMachine {
    fn push_value(&mut self, value: f64) {
        trace!("Push value {}", value);
        self.values.push(value);
    }

    fn push_operator(&mut self, op: Operator) -> Result<()> {
        while let Some(&Pending::Operator(top)) = self.operators.last() {
            if !op.yields_to(top) {
                break;
            }
            self.operators.pop();
            self.reduce(top)?;
        }
        trace!("Push operator {}", op.symbol());
        self.operators.push(Pending::Operator(op));
        Ok(())
    }

    fn brace(&mut self, token: &Token) -> Result<()> {
        match token.text() {
            "(" => {
                self.operators.push(Pending::Group);
                Ok(())
            }
            ")" => loop {
                match self.operators.pop() {
                    Some(Pending::Operator(op)) => self.reduce(op)?,
                    Some(Pending::Group) => return Ok(()),
                    None => {
                        return Err(EvaluationError::Eval(format!(
                            "unmatched ')' at position {}",
                            token.position()
                        )))
                    }
                }
            },
            other => Err(EvaluationError::Eval(format!("unknown brace '{}'", other))),
        }
    }

    fn reduce(&mut self, op: Operator) -> Result<()> {
        let (b, a) = (self.pop_operand(op)?, self.pop_operand(op)?);
        let result = op.apply(a, b)?;
        debug!("Reduce {} {} {} = {}", a, op.symbol(), b, result);
        self.values.push(result);
        Ok(())
    }

    fn pop_operand(&mut self, op: Operator) -> Result<f64> {
        self.values.pop().ok_or_else(|| {
            EvaluationError::Eval(format!("operator '{}' is missing an operand", op.symbol()))
        })
    }

    fn finish(mut self) -> Result<f64> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.reduce(op)?,
                Pending::Group => return Err(EvaluationError::Eval("unclosed '('".to_string())),
            }
        }

        match self.values.as_slice() {
            [value] => Ok(*value),
            [] => Err(EvaluationError::Eval("expression has no value".to_string())),
            values => Err(EvaluationError::Eval(format!(
                "{} values left without an operator between them",
                values.len()
            ))),
        }
    }
}
