use serde::Serialize;

/// Classification of a tokenized raw argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// A flag name, stripped of its `-`/`--` prefix.
    Option,
    /// A bare value.
    Argument,
}

/// One classified unit of input. Produced only by the tokenizer and never
/// mutated afterwards; ordering is preserved from the raw argument list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub(crate) fn option(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Option,
            text: text.into(),
        }
    }

    pub(crate) fn argument(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Argument,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
