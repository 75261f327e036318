use crate::operation::CatalogLoadError;
use crate::operation::OperationName;
use crate::operation::UnknownOperationError;
use crate::variables::MalformedDeclarationError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PayloadBuildError {
    /// The process-wide catalog failed to load, so no operation can be built.
    #[error("The operation catalog is unavailable: {0}")]
    CatalogUnavailable(CatalogLoadError),

    #[error("Operation `{operation}` has a malformed variable declaration: {error}")]
    MalformedDeclaration {
        operation: OperationName,
        error: MalformedDeclarationError,
    },

    #[error(transparent)]
    UnknownOperation(#[from] UnknownOperationError),
}
