use crate::GraphQLSourceSpan;

/// A "trivia token" is a token that doesn't affect the GraphQL grammar but is
/// still preserved.
///
/// Commas are insignificant to GraphQL itself, but the variable declaration
/// parser uses them to separate parameters, so they are kept here rather than
/// skipped like whitespace.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTriviaToken<'src> {
    /// A `#` comment. `value` excludes the leading `#`.
    Comment {
        value: &'src str,
        span: GraphQLSourceSpan,
    },

    Comma {
        span: GraphQLSourceSpan,
    },
}
