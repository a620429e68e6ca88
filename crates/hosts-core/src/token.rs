//! Line tokenizer for hosts-file text.
//!
//! A line is split left to right into:
//! - [`TokenKind::Separator`]: a maximal run of spaces and tabs
//! - [`TokenKind::Text`]: a maximal run of anything but space, tab and `#`
//! - [`TokenKind::Comment`]: `#` and everything after it on the line
//!
//! Concatenating the token texts of a line reproduces the line exactly.

/// Kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    Separator,
    Comment,
}

/// A typed slice of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Text, text)
    }

    pub fn separator(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Separator, text)
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Comment, text)
    }

    pub fn is_text(&self) -> bool {
        self.kind == TokenKind::Text
    }
}

/// The tokens of one line, without its terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub tokens: Vec<Token>,
}

impl Line {
    /// Iterate over the `Text` tokens of this line.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|t| t.is_text())
            .map(|t| t.text.as_str())
    }

    /// Rebuild the original line text.
    pub fn source(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Tokenized lines of a body, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub lines: Vec<Line>,
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Tokenize a single line.
///
/// Never fails. An empty line yields no tokens.
///
/// # Example
/// ```
/// use hosts_core::token::{tokenize, Token};
///
/// let tokens = tokenize("192.0.2.1 host # note");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::text("192.0.2.1"),
///         Token::separator(" "),
///         Token::text("host"),
///         Token::separator(" "),
///         Token::comment("# note"),
///     ]
/// );
/// ```
pub fn tokenize(line: &str) -> Vec<Token> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    // Cursor positions only ever land on ASCII bytes or the end, so slicing
    // `line` at them is always on a char boundary.
    while i < bytes.len() {
        if is_blank(bytes[i]) {
            let end = bytes[i..]
                .iter()
                .position(|&b| !is_blank(b))
                .map_or(bytes.len(), |p| i + p);
            tokens.push(Token::separator(&line[i..end]));
            i = end;
        } else if bytes[i] == b'#' {
            tokens.push(Token::comment(&line[i..]));
            break;
        } else {
            let end = bytes[i..]
                .iter()
                .position(|&b| is_blank(b) || b == b'#')
                .map_or(bytes.len(), |p| i + p);
            tokens.push(Token::text(&line[i..end]));
            i = end;
        }
    }

    tokens
}

/// Split `body` into lines and tokenize each one.
///
/// Lines end at `\n`; a `\r` right before it is dropped. A final terminator
/// does not start an extra empty line, so `"a\n"` and `"a"` both parse to one line.
pub fn parse(body: &str) -> ParseResult {
    let lines = body
        .split_terminator('\n')
        .map(|raw| Line {
            tokens: tokenize(raw.strip_suffix('\r').unwrap_or(raw)),
        })
        .collect();

    ParseResult { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_mixed_line() {
        let tokens = tokenize("192.0.2.0 host001.example\thost002.example# comment");
        assert_eq!(
            tokens,
            vec![
                Token::text("192.0.2.0"),
                Token::separator(" "),
                Token::text("host001.example"),
                Token::separator("\t"),
                Token::text("host002.example"),
                Token::comment("# comment"),
            ]
        );
    }

    #[test]
    fn test_tokenize_separator_run() {
        let tokens = tokenize(" \t  x");
        assert_eq!(tokens, vec![Token::separator(" \t  "), Token::text("x")]);
    }

    #[test]
    fn test_comment_consumes_rest() {
        let tokens = tokenize("#a # b\t#c");
        assert_eq!(tokens, vec![Token::comment("#a # b\t#c")]);
    }

    #[test]
    fn test_tokenize_non_ascii_text() {
        let tokens = tokenize("192.0.2.1 hôte.example");
        assert_eq!(tokens[2], Token::text("hôte.example"));
    }

    #[test]
    fn test_parse_line_terminators() {
        assert!(parse("").lines.is_empty());
        assert_eq!(parse("a").lines.len(), 1);
        assert_eq!(parse("a\n").lines.len(), 1);
        assert_eq!(parse("a\n\nb").lines.len(), 3);
    }

    #[test]
    fn test_parse_strips_carriage_return() {
        let result = parse("192.0.2.1 host\r\n");
        assert_eq!(result.lines[0].source(), "192.0.2.1 host");
    }

    #[test]
    fn test_line_texts() {
        let line = Line {
            tokens: tokenize("  a b # c d"),
        };
        assert_eq!(line.texts().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
