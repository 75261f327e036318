use crate::operation::OperationCatalog;
use crate::operation::OperationName;
use crate::payload::PayloadBuildError;
use crate::payload::RequestPayload;
use crate::variables::parse_variable_declarations;

/// Builds [`RequestPayload`]s from the operations of one catalog.
///
/// Building never touches the catalog beyond reading it; every call returns
/// a payload the caller owns outright.
#[derive(Clone, Copy, Debug)]
pub struct PayloadBuilder<'cat> {
    catalog: &'cat OperationCatalog,
}

impl<'cat> PayloadBuilder<'cat> {
    pub fn new(catalog: &'cat OperationCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'cat OperationCatalog {
        self.catalog
    }

    /// Builds the payload for the operation named `name`.
    ///
    /// Fails with [`PayloadBuildError::UnknownOperation`] before any parsing
    /// if `name` is not one of [`OperationName::ALL`].
    pub fn build(&self, name: &str) -> Result<RequestPayload, PayloadBuildError> {
        let name: OperationName = name.parse()?;
        self.build_operation(name)
    }

    pub fn build_operation(&self, name: OperationName) -> Result<RequestPayload, PayloadBuildError> {
        let operation = self.catalog.get(name);
        let declaration = parse_variable_declarations(operation.document()).map_err(|error| {
            PayloadBuildError::MalformedDeclaration {
                operation: name,
                error,
            }
        })?;

        log::trace!("Built payload for `{name}` ({} variables).", declaration.len());
        Ok(RequestPayload {
            operation_name: name.as_str().to_string(),
            query: operation.document().to_string(),
            variables: declaration.placeholder_variables(),
        })
    }
}

impl PayloadBuilder<'static> {
    /// A builder over [`OperationCatalog::global()`].
    pub fn global() -> Result<Self, PayloadBuildError> {
        OperationCatalog::global()
            .map(Self::new)
            .map_err(|error| PayloadBuildError::CatalogUnavailable(error.clone()))
    }
}

/// Builds the payload for `name` from the process-wide catalog.
///
/// ```rust
/// let payload = axie_graphql_ops::payload::build_payload("GetExchangeRates").unwrap();
///
/// assert_eq!(payload.operation_name, "GetExchangeRates");
/// assert!(payload.variables.is_empty());
/// ```
pub fn build_payload(name: &str) -> Result<RequestPayload, PayloadBuildError> {
    PayloadBuilder::global()?.build(name)
}
