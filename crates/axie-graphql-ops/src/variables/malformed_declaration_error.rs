use crate::definition_scan::DefinitionScanError;
use crate::token::GraphQLToken;
use crate::SourcePosition;
use thiserror::Error;

/// The header of a document could not be read as a variable definition list.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{message} (at {position})")]
pub struct MalformedDeclarationError {
    pub message: String,
    pub position: SourcePosition,
}

impl MalformedDeclarationError {
    pub(crate) fn at_token(token: &GraphQLToken<'_>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: token.span.start_inclusive,
        }
    }
}

impl From<DefinitionScanError> for MalformedDeclarationError {
    fn from(error: DefinitionScanError) -> Self {
        Self {
            message: error.message,
            position: error.position,
        }
    }
}
