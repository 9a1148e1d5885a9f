use crate::error::{Error, Result};
use crate::token::{Token, TokenKind};

/// Tokenized raw arguments plus a single read cursor.
///
/// The token list is append-only and fixed once construction finishes; the
/// cursor is the only mutable state. A form-selection loop that retries
/// alternate grammars calls [`Input::rewind`] between attempts. One `Input`
/// belongs to one parse attempt at a time; parsing the same raw arguments
/// from two threads means building two `Input`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    tokens: Vec<Token>,
    cursor: usize,
}

fn split_inline(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once('=') {
        Some((head, value)) => (head, Some(value)),
        None => (raw, None),
    }
}

impl Input {
    /// Tokenize an ordered sequence of raw strings.
    ///
    /// Rules, applied left to right:
    /// - after a literal `--`, everything is an argument verbatim;
    /// - `--name` is one option token, lower-cased; `--name=value` adds one
    ///   argument token for `value` (which may be empty);
    /// - `-abc` is one option token per character, case preserved;
    ///   `-abc=value` appends one argument token for `value`;
    /// - anything else is one argument token verbatim.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = Vec::new();
        let mut literal = false;
        for item in raw {
            let item = item.as_ref();
            if literal {
                tokens.push(Token::argument(item));
                continue;
            }
            if item == "--" {
                literal = true;
                continue;
            }
            if let Some(rest) = item.strip_prefix("--") {
                let (name, inline) = split_inline(rest);
                tokens.push(Token::option(name.to_lowercase()));
                if let Some(value) = inline {
                    tokens.push(Token::argument(value));
                }
            } else if let Some(rest) = item.strip_prefix('-') {
                let (cluster, inline) = split_inline(rest);
                for flag in cluster.chars() {
                    tokens.push(Token::option(flag.to_string()));
                }
                if let Some(value) = inline {
                    tokens.push(Token::argument(value));
                }
            } else {
                tokens.push(Token::argument(item));
            }
        }
        Self { tokens, cursor: 0 }
    }

    /// Whether any option token remains at or after the cursor.
    ///
    /// Pure lookahead: an option may be separated from the cursor by
    /// argument tokens that a prior flag's consumers declined to take.
    pub fn has_next_option(&self) -> bool {
        self.tokens[self.cursor..]
            .iter()
            .any(|t| t.kind() == TokenKind::Option)
    }

    /// Advance past the next token and return its flag text.
    pub fn pop_option(&mut self) -> Result<String> {
        let Some(token) = self.tokens.get(self.cursor) else {
            return Err(Error::EndOfInput);
        };
        self.cursor += 1;
        match token.kind() {
            TokenKind::Argument => Err(Error::UnexpectedArgument {
                value: token.text().to_string(),
            }),
            TokenKind::Option if token.text().is_empty() => Err(Error::EmptyOption),
            TokenKind::Option => Ok(token.text().to_string()),
        }
    }

    /// Whether the token immediately after the cursor is an argument.
    pub fn has_next_arg(&self) -> bool {
        self.tokens
            .get(self.cursor)
            .is_some_and(|t| t.kind() == TokenKind::Argument)
    }

    /// Take the next token's text if it is an argument.
    ///
    /// Returns `None` without moving the cursor when the next token is
    /// missing or is an option, so consumers can probe without committing.
    pub fn pop_argument(&mut self) -> Option<String> {
        let token = self.tokens.get(self.cursor)?;
        if token.kind() != TokenKind::Argument {
            return None;
        }
        self.cursor += 1;
        Some(token.text().to_string())
    }

    /// Reset the cursor to before the first token.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn next_unconsumed(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Input {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &Input) -> Vec<(TokenKind, String)> {
        input
            .tokens
            .iter()
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    #[test]
    fn plain_values_tokenize_one_to_one() {
        let input = Input::new(["one", "two", "three"]);
        assert_eq!(
            kinds(&input),
            vec![
                (TokenKind::Argument, "one".to_string()),
                (TokenKind::Argument, "two".to_string()),
                (TokenKind::Argument, "three".to_string()),
            ]
        );
    }

    #[test]
    fn double_dash_latches_everything_as_arguments() {
        let input = Input::new(["-a", "--", "-b", "--long", "--"]);
        assert_eq!(
            kinds(&input),
            vec![
                (TokenKind::Option, "a".to_string()),
                (TokenKind::Argument, "-b".to_string()),
                (TokenKind::Argument, "--long".to_string()),
                (TokenKind::Argument, "--".to_string()),
            ]
        );
    }

    #[test]
    fn short_cluster_splits_per_character() {
        let input = Input::new(["-abc"]);
        assert_eq!(
            kinds(&input),
            vec![
                (TokenKind::Option, "a".to_string()),
                (TokenKind::Option, "b".to_string()),
                (TokenKind::Option, "c".to_string()),
            ]
        );
    }

    #[test]
    fn short_cluster_keeps_case() {
        let input = Input::new(["-aA"]);
        assert_eq!(
            kinds(&input),
            vec![
                (TokenKind::Option, "a".to_string()),
                (TokenKind::Option, "A".to_string()),
            ]
        );
    }

    #[test]
    fn inline_value_follows_the_cluster() {
        let input = Input::new(["-ab=out.txt"]);
        assert_eq!(
            kinds(&input),
            vec![
                (TokenKind::Option, "a".to_string()),
                (TokenKind::Option, "b".to_string()),
                (TokenKind::Argument, "out.txt".to_string()),
            ]
        );
    }

    #[test]
    fn long_flag_is_lowercased() {
        let input = Input::new(["--Verbose"]);
        assert_eq!(kinds(&input), vec![(TokenKind::Option, "verbose".to_string())]);
    }

    #[test]
    fn empty_inline_value_is_an_empty_argument() {
        let input = Input::new(["--name="]);
        assert_eq!(
            kinds(&input),
            vec![
                (TokenKind::Option, "name".to_string()),
                (TokenKind::Argument, String::new()),
            ]
        );
    }

    #[test]
    fn pop_option_reports_exhaustion_and_stray_arguments() {
        let mut input = Input::new(Vec::<String>::new());
        assert_eq!(input.pop_option(), Err(Error::EndOfInput));

        let mut input = Input::new(["value"]);
        assert_eq!(
            input.pop_option(),
            Err(Error::UnexpectedArgument {
                value: "value".to_string()
            })
        );
    }

    #[test]
    fn pop_option_rejects_empty_flag_text() {
        // `--=v` yields an option token with empty text.
        let mut input = Input::new(["--=v"]);
        assert_eq!(input.pop_option(), Err(Error::EmptyOption));
    }

    #[test]
    fn pop_argument_probes_without_committing() {
        let mut input = Input::new(["-a", "value"]);
        assert!(input.pop_argument().is_none());
        assert_eq!(input.pop_option().unwrap(), "a");
        assert!(input.has_next_arg());
        assert_eq!(input.pop_argument().as_deref(), Some("value"));
        assert!(input.pop_argument().is_none());
    }

    #[test]
    fn has_next_option_scans_past_pending_arguments() {
        let input = Input::new(["stray", "-a"]);
        assert!(input.has_next_option());
        assert!(input.has_next_arg());
    }

    #[test]
    fn collects_from_an_iterator() {
        let input: Input = "run --fast target".split(' ').collect();
        assert_eq!(input.len(), 3);
        assert!(input.has_next_option());
    }

    #[test]
    fn rewind_resets_the_cursor() {
        let mut input = Input::new(["one", "two"]);
        assert_eq!(input.pop_argument().as_deref(), Some("one"));
        assert_eq!(input.pop_argument().as_deref(), Some("two"));
        input.rewind();
        assert_eq!(input.pop_argument().as_deref(), Some("one"));
    }
}
