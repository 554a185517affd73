use crate::error::{EvaluationError, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Binding strength. A higher value reduces first.
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Whether `self`, arriving after `top`, must wait for `top` to be reduced.
    ///
    /// Equal precedence reduces the earlier operator first, which makes every
    /// tier left-associative.
    pub const fn yields_to(self, top: Operator) -> bool {
        self.precedence() <= top.precedence()
    }

    pub fn apply(self, left: f64, right: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                let quotient = left / right;
                if quotient.is_infinite() {
                    Err(EvaluationError::Division {
                        dividend: left,
                        divisor: right,
                    })
                } else {
                    Ok(quotient)
                }
            }
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = EvaluationError;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            _ => Err(EvaluationError::Eval(format!("unknown operator '{}'", value))),
        }
    }
}
