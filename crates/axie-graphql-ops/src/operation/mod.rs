//! The closed catalog of operations and the composition of their documents.

mod builtin_fragments;
mod catalog_load_error;
mod catalog_source;
mod operation_catalog;
mod operation_definition;
mod operation_kind;
mod operation_name;
mod unknown_operation_error;

pub use catalog_load_error::CatalogBuildError;
pub use catalog_load_error::CatalogLoadError;
pub use catalog_source::CatalogSource;
pub use operation_catalog::OperationCatalog;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use operation_name::OperationName;
pub use unknown_operation_error::UnknownOperationError;

#[cfg(test)]
mod tests;
