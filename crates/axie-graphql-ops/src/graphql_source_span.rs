use crate::SourcePosition;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// Returns the slice of `source` covered by this span.
    ///
    /// `source` must be the text this span was produced from.
    pub fn slice<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset()]
    }
}
