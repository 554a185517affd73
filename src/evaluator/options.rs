use std::str::FromStr;

/// How brace tokens take part in evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BraceMode {
    /// Parentheses group sub-expressions. Unbalanced braces are malformed.
    #[default]
    Group,
    /// Braces are accepted by the tokenizer and then skipped, so `(2+3)*4`
    /// evaluates as `2+3*4`. Matches earlier releases of the calculator.
    Ignore,
}

impl FromStr for BraceMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "group" => Ok(BraceMode::Group),
            "ignore" => Ok(BraceMode::Ignore),
            _ => Err(format!("Unknown brace mode: {}", value)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct EvaluatorOptions {
    pub brace_mode: BraceMode,
}

impl EvaluatorOptions {
    pub fn with_brace_mode(mut self, brace_mode: BraceMode) -> Self {
        self.brace_mode = brace_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_group_braces() {
        assert_eq!(EvaluatorOptions::default().brace_mode, BraceMode::Group);
    }

    #[test]
    fn test_brace_mode_from_str() {
        assert_eq!("ignore".parse::<BraceMode>(), Ok(BraceMode::Ignore));
        assert_eq!(" Group ".parse::<BraceMode>(), Ok(BraceMode::Group));
        assert!("legacy".parse::<BraceMode>().is_err());
    }
}
