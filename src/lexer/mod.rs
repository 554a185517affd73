mod tokenizer;

pub use tokenizer::Tokenizer;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    Operator,
    Brace,
}

/// A classified slice of the input.
///
/// Number tokens keep their literal text; parsing to `f64` happens during
/// evaluation so malformed literals surface as number-format errors there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based character column of the first character of the token.
    pub fn position(&self) -> usize {
        self.position
    }
}
