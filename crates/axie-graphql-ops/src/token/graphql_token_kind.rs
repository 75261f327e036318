/// The kind of a GraphQL token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`) and names borrow
/// their raw text directly from the source string.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    Name(&'src str),

    /// Raw source text of an integer literal, including optional negative
    /// sign (e.g. `"-123"`).
    IntValue(&'src str),

    /// Raw source text of a float literal (e.g. `"-1.23e-4"`).
    FloatValue(&'src str),

    /// Raw source text of a string literal, including quotes.
    StringValue(&'src str),

    True,
    False,
    Null,

    /// End of input.
    Eof,

    /// A lexer error. Lexing continues after an error token.
    Error {
        message: String,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    pub fn error(message: impl Into<String>) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
        }
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Error { .. } => None,
        }
    }

    /// Returns `true` if this token is a scalar value literal (`IntValue`,
    /// `FloatValue`, `StringValue`, `True`, `False`, or `Null`).
    pub fn is_scalar_value(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::IntValue(_)
                | GraphQLTokenKind::FloatValue(_)
                | GraphQLTokenKind::StringValue(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null
        )
    }

    pub fn is_error(&self) -> bool {
        matches!(self, GraphQLTokenKind::Error { .. })
    }

    /// Returns `Some(name)` if this is a `Name` token.
    pub fn as_name(&self) -> Option<&'src str> {
        match self {
            GraphQLTokenKind::Name(name) => Some(name),
            _ => None,
        }
    }

    /// A short human-readable description, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            GraphQLTokenKind::Name(name) => format!("name `{name}`"),
            GraphQLTokenKind::IntValue(raw)
            | GraphQLTokenKind::FloatValue(raw) => format!("number `{raw}`"),
            GraphQLTokenKind::StringValue(_) => "string literal".to_string(),
            GraphQLTokenKind::True => "`true`".to_string(),
            GraphQLTokenKind::False => "`false`".to_string(),
            GraphQLTokenKind::Null => "`null`".to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            GraphQLTokenKind::Error { message } => message.clone(),
            punctuator => format!(
                "`{}`",
                punctuator.as_punctuator_str().unwrap_or_default(),
            ),
        }
    }
}
