use crate::error::{EvaluationError, Result};
use crate::lexer::{Token, TokenKind};
use log::debug;
use pest::error::{Error, InputLocation};
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "token.pest"]
pub struct Tokenizer;

impl Tokenizer {
    /// Splits `input` into tokens in source order.
    ///
    /// Spaces and tabs are skipped. Any other character outside the token
    /// classes fails the whole call with [`EvaluationError::Lex`].
    pub fn tokenize(input: &str) -> Result<Vec<Token>> {
        debug!("Tokenizing expression: {}", input);
        let pairs = Tokenizer::parse(Rule::tokens, input).map_err(|e| lex_error(input, &e))?;

        let mut tokens = Vec::new();
        let mut columns = ColumnCounter::new(input);
        for pair in pairs.flat_map(|pair| pair.into_inner()) {
            let kind = match pair.as_rule() {
                Rule::identifier => TokenKind::Identifier,
                Rule::number => TokenKind::Number,
                Rule::brace => TokenKind::Brace,
                Rule::operator => TokenKind::Operator,
                _ => continue,
            };
            let position = columns.column_of(pair.as_span().start());
            tokens.push(Token::new(kind, pair.as_str(), position));
        }

        debug!("Tokens: {:?}", tokens);
        Ok(tokens)
    }
}

fn lex_error(input: &str, error: &Error<Rule>) -> EvaluationError {
    let offset = match error.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };
    let character = input[offset..]
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER);

    EvaluationError::Lex {
        character,
        position: ColumnCounter::new(input).column_of(offset),
    }
}

/// Converts byte offsets into 1-based character columns.
///
/// Offsets must be queried in non-decreasing order; the count resumes from
/// the previous query so a full scan stays linear.
struct ColumnCounter<'a> {
    input: &'a str,
    offset: usize,
    column: usize,
}

impl<'a> ColumnCounter<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            column: 1,
        }
    }

    fn column_of(&mut self, offset: usize) -> usize {
        self.column += self.input[self.offset..offset].chars().count();
        self.offset = offset;
        self.column
    }
}
