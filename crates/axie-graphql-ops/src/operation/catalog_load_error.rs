use crate::definition_scan::DefinitionScanError;
use crate::fragment::FragmentLibraryBuildError;
use crate::operation::OperationName;
use crate::variables::MalformedDeclarationError;
use thiserror::Error;

/// Every problem found while loading an [`OperationCatalog`](crate::operation::OperationCatalog).
///
/// Loading collects all errors before failing, so a single run reports every
/// broken fragment and operation at once.
#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "Failed to load the operation catalog ({} errors):\n{}",
    .errors.len(),
    format_errors(.errors),
)]
pub struct CatalogLoadError {
    pub errors: Vec<CatalogBuildError>,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CatalogBuildError {
    #[error(transparent)]
    FragmentLibrary(#[from] FragmentLibraryBuildError),

    #[error("Invalid source for operation `{operation}`: {error}")]
    InvalidOperationSource {
        operation: OperationName,
        error: DefinitionScanError,
    },

    #[error("Operation `{operation}` has a malformed variable declaration: {error}")]
    MalformedDeclaration {
        operation: OperationName,
        error: MalformedDeclarationError,
    },

    #[error("No source text was provided for operation `{operation}`")]
    MissingOperationSource {
        operation: OperationName,
    },

    #[error("The source for `{operation}` is a fragment definition, not an operation")]
    NotAnOperationDefinition {
        operation: OperationName,
    },

    #[error(
        "The source for `{operation}` defines an operation named {}",
        describe_found_name(.found),
    )]
    OperationNameMismatch {
        operation: OperationName,
        found: Option<String>,
    },

    #[error("Operation `{operation}` references undefined fragment `{fragment_name}`")]
    UndefinedFragmentReference {
        operation: OperationName,
        fragment_name: String,
    },
}

fn format_errors(errors: &[CatalogBuildError]) -> String {
    errors.iter()
        .map(|error| format!("  * {error}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe_found_name(found: &Option<String>) -> String {
    match found {
        Some(name) => format!("`{name}`"),
        None => "no name (anonymous)".to_string(),
    }
}
