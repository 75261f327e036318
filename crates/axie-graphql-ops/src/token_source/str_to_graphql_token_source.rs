//! A lexer that produces [`GraphQLToken`]s from a `&str` input.
//!
//! Token values borrow directly from the source string. Invalid input never
//! aborts lexing: it produces an [`Error`](GraphQLTokenKind::Error) token and
//! lexing resumes at the next character, so callers decide how loudly to fail.
//!
//! ```rust
//! use axie_graphql_ops::token::GraphQLTokenKind;
//! use axie_graphql_ops::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::Name("name"),
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token::GraphQLTriviaTokenVec;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use smallvec::smallvec;

pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current UTF-8 character column (0-based).
    curr_col: usize,

    /// Whether the previous character was `\r`.
    ///
    /// `\r\n` counts as a single newline: the `\n` of the pair does not bump
    /// the line number again.
    last_char_was_cr: bool,

    /// Trivia (comments, commas) accumulated before the next token.
    pending_trivia: GraphQLTriviaTokenVec<'src>,

    /// Whether the EOF token has been emitted.
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col: 0,
            last_char_was_cr: false,
            pending_trivia: smallvec![],
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_col, self.curr_byte_offset)
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col += 1;
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.curr_position())
    }

    fn make_token(
        &mut self,
        kind: GraphQLTokenKind<'src>,
        span: GraphQLSourceSpan,
    ) -> GraphQLToken<'src> {
        GraphQLToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span,
        }
    }

    fn lex_punctuator(
        &mut self,
        start: SourcePosition,
        kind: GraphQLTokenKind<'src>,
    ) -> GraphQLToken<'src> {
        self.consume();
        let span = self.make_span(start);
        self.make_token(kind, span)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        loop {
            self.skip_whitespace();

            let start = self.curr_position();

            return match self.peek_char() {
                None => {
                    let span = self.make_span(start);
                    self.make_token(GraphQLTokenKind::Eof, span)
                }

                Some('#') => {
                    self.lex_comment(start);
                    continue;
                }

                Some(',') => {
                    self.consume();
                    let span = self.make_span(start);
                    self.pending_trivia.push(GraphQLTriviaToken::Comma { span });
                    continue;
                }

                Some('!') => self.lex_punctuator(start, GraphQLTokenKind::Bang),
                Some('$') => self.lex_punctuator(start, GraphQLTokenKind::Dollar),
                Some('(') => self.lex_punctuator(start, GraphQLTokenKind::ParenOpen),
                Some(')') => self.lex_punctuator(start, GraphQLTokenKind::ParenClose),
                Some(':') => self.lex_punctuator(start, GraphQLTokenKind::Colon),
                Some('=') => self.lex_punctuator(start, GraphQLTokenKind::Equals),
                Some('@') => self.lex_punctuator(start, GraphQLTokenKind::At),
                Some('[') => self.lex_punctuator(start, GraphQLTokenKind::SquareBracketOpen),
                Some(']') => self.lex_punctuator(start, GraphQLTokenKind::SquareBracketClose),
                Some('{') => self.lex_punctuator(start, GraphQLTokenKind::CurlyBraceOpen),
                Some('}') => self.lex_punctuator(start, GraphQLTokenKind::CurlyBraceClose),

                Some('.') => self.lex_dot_or_ellipsis(start),
                Some('"') => self.lex_string(start),
                Some(c) if is_name_start(c) => self.lex_name(start),
                Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start),
                Some(_) => self.lex_invalid_character(start),
            };
        }
    }

    // =========================================================================
    // Whitespace and comments
    // =========================================================================

    /// Skips the GraphQL "ignored tokens" other than commas and comments:
    /// space, tab, line terminators and the Unicode BOM.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | '\u{FEFF}' => {
                    self.consume();
                }
                _ => break,
            }
        }
    }

    /// Lexes a `#` comment up to (not including) the end of the line and adds
    /// it to pending trivia.
    fn lex_comment(&mut self, start: SourcePosition) {
        // Consume the '#'
        self.consume();
        let content_start = self.curr_byte_offset;
        let content_len = memchr::memchr2(b'\n', b'\r', self.remaining().as_bytes())
            .unwrap_or(self.remaining().len());
        let content_end = content_start + content_len;

        // Comments never contain line terminators, so only the column moves.
        let content = &self.source[content_start..content_end];
        self.curr_col += content.chars().count();
        self.curr_byte_offset = content_end;
        self.last_char_was_cr = false;

        let span = self.make_span(start);
        self.pending_trivia.push(GraphQLTriviaToken::Comment {
            value: content,
            span,
        });
    }

    // =========================================================================
    // Dots
    // =========================================================================

    /// Lexes `...` as an `Ellipsis`. Any other run of dots is an error.
    fn lex_dot_or_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("...") {
            self.consume();
            self.consume();
            self.consume();
            let span = self.make_span(start);
            return self.make_token(GraphQLTokenKind::Ellipsis, span);
        }

        let message = if self.remaining().starts_with("..") {
            self.consume();
            self.consume();
            "Unexpected `..` (use `...` for spread operator)"
        } else {
            self.consume();
            "Unexpected `.`"
        };
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::error(message), span)
    }

    // =========================================================================
    // Names and numbers
    // =========================================================================

    /// Lexes a name or keyword.
    ///
    /// Names match the pattern: `/[_A-Za-z][_0-9A-Za-z]*/`. The keywords
    /// `true`, `false`, and `null` are emitted as distinct token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name_start = self.curr_byte_offset;
        self.consume();
        while let Some(ch) = self.peek_char() {
            if !is_name_continue(ch) {
                break;
            }
            self.consume();
        }

        let name = &self.source[name_start..self.curr_byte_offset];
        let span = self.make_span(start);
        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::Name(name),
        };

        self.make_token(kind, span)
    }

    /// Lexes an integer or float literal.
    ///
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional decimal part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if let Some(ch) = self.peek_char()
                    && ch.is_ascii_digit() {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                    );
                }
            }
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_digits();
            }
            Some(_) | None => {
                let span = self.make_span(start);
                return self.make_token(GraphQLTokenKind::error("Unexpected `-`"), span);
            }
        }

        if self.peek_char() == Some('.')
            && let Some(ch) = self.peek_char_nth(1)
            && ch.is_ascii_digit() {
            is_float = true;
            self.consume();
            self.consume_digits();
        }

        if let Some(ch) = self.peek_char()
            && (ch == 'e' || ch == 'E') {
            is_float = true;
            self.consume();

            if let Some(ch) = self.peek_char()
                && (ch == '+' || ch == '-') {
                self.consume();
            }

            if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                );
            }
            self.consume_digits();
        }

        // A number immediately followed by a name character (e.g. `123abc`)
        // is not a valid token boundary.
        if let Some(ch) = self.peek_char()
            && (is_name_start(ch) || ch == '.') {
            return self.lex_number_error(
                start,
                num_start,
                "Invalid number: unexpected character after number",
            );
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let span = self.make_span(start);
        let kind = if is_float {
            GraphQLTokenKind::FloatValue(num_text)
        } else {
            GraphQLTokenKind::IntValue(num_text)
        };

        self.make_token(kind, span)
    }

    fn consume_digits(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.consume();
        }
    }

    /// Creates an error token for an invalid number, consuming the rest of the
    /// number-like run so lexing resumes after it.
    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
    ) -> GraphQLToken<'src> {
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '+' | '-' | '_') {
                self.consume();
            } else {
                break;
            }
        }

        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(
            GraphQLTokenKind::error(format!("{message}: `{invalid_text}`")),
            span,
        )
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Lexes a string literal (single-line or block string).
    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;

        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        // Consume opening "
        self.consume();

        loop {
            match self.peek_char() {
                None => {
                    let span = self.make_span(start);
                    return self.make_token(
                        GraphQLTokenKind::error("Unterminated string literal"),
                        span,
                    );
                }
                Some('\n') | Some('\r') => {
                    self.consume();
                    if self.last_char_was_cr && self.peek_char() == Some('\n') {
                        self.consume();
                    }
                    let span = self.make_span(start);
                    return self.make_token(
                        GraphQLTokenKind::error(
                            "Unterminated string literal (single-line strings \
                            cannot contain unescaped newlines)",
                        ),
                        span,
                    );
                }
                Some('"') => {
                    self.consume();
                    break;
                }
                Some('\\') => {
                    self.consume();
                    if self.peek_char().is_some() {
                        self.consume();
                    }
                }
                Some(_) => {
                    self.consume();
                }
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::StringValue(string_text), span)
    }

    fn lex_block_string(
        &mut self,
        start: SourcePosition,
        str_start: usize,
    ) -> GraphQLToken<'src> {
        // Consume opening """
        self.consume();
        self.consume();
        self.consume();

        loop {
            if self.remaining().starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
                continue;
            }
            if self.remaining().starts_with("\"\"\"") {
                self.consume();
                self.consume();
                self.consume();
                break;
            }
            if self.consume().is_none() {
                let span = self.make_span(start);
                return self.make_token(
                    GraphQLTokenKind::error("Unterminated block string"),
                    span,
                );
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::StringValue(string_text), span)
    }

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let message = match self.consume() {
            Some(ch) if ch.is_control() || (ch.is_whitespace() && ch != ' ') => {
                format!("Unexpected character `{}` (U+{:04X})", ch.escape_default(), ch as u32)
            },
            Some(ch) => format!("Unexpected character `{ch}`"),
            None => "Unexpected end of input".to_string(),
        };
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::error(message), span)
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }

        Some(token)
    }
}

/// Returns `true` if `ch` can start a GraphQL name.
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a GraphQL name.
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}
