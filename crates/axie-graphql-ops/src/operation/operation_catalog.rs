use crate::definition_scan;
use crate::fragment::FragmentLibrary;
use crate::fragment::FragmentLibraryBuilder;
use crate::operation::operation_definition::compose_document;
use crate::operation::CatalogBuildError;
use crate::operation::CatalogLoadError;
use crate::operation::CatalogSource;
use crate::operation::OperationDefinition;
use crate::operation::OperationName;
use crate::operation::UnknownOperationError;
use crate::variables::parse_variable_declarations;
use crate::DefinitionKind;
use std::sync::OnceLock;

static GLOBAL_CATALOG: OnceLock<Result<OperationCatalog, CatalogLoadError>> = OnceLock::new();

/// Every supported operation, composed once and then frozen.
///
/// A catalog only exists if loading succeeded for *every*
/// [`OperationName`]; there is no partially loaded state and no way to
/// modify a catalog after it is built.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationCatalog {
    fragment_library: FragmentLibrary,
    /// Indexed by [`OperationName::index()`].
    operations: Vec<OperationDefinition>,
}

impl OperationCatalog {
    /// The process-wide catalog composed from [`CatalogSource::builtin()`].
    ///
    /// Composition happens on first access; later calls return the same
    /// catalog (or the same load error).
    pub fn global() -> Result<&'static OperationCatalog, &'static CatalogLoadError> {
        GLOBAL_CATALOG
            .get_or_init(|| Self::from_source(&CatalogSource::builtin()))
            .as_ref()
    }

    /// Composes a catalog from `source`.
    ///
    /// Builds the fragment library, then for each [`OperationName`] scans its
    /// definition, resolves its fragment closure, composes the document and
    /// checks that its variable declarations parse.
    pub fn from_source(source: &CatalogSource) -> Result<Self, CatalogLoadError> {
        let mut errors = vec![];

        let mut library_builder = FragmentLibraryBuilder::new();
        for fragment_source in source.fragment_sources() {
            if let Err(error) = library_builder.add_from_str(fragment_source) {
                errors.push(CatalogBuildError::FragmentLibrary(error));
            }
        }

        let fragment_library = match library_builder.build() {
            Ok(library) => library,
            Err(library_errors) => {
                errors.extend(library_errors.into_iter().map(CatalogBuildError::FragmentLibrary));
                return Err(CatalogLoadError { errors });
            },
        };

        let mut operations = Vec::with_capacity(OperationName::ALL.len());
        for name in OperationName::ALL {
            match compose_operation(*name, source, &fragment_library) {
                Ok(operation) => operations.push(operation),
                Err(error) => errors.push(error),
            }
        }

        if !errors.is_empty() {
            return Err(CatalogLoadError { errors });
        }

        log::debug!(
            "Composed {} operations from {} fragments.",
            operations.len(),
            fragment_library.len(),
        );
        Ok(Self {
            fragment_library,
            operations,
        })
    }

    /// Looks up an operation by its string name.
    pub fn resolve(&self, name: &str) -> Result<&OperationDefinition, UnknownOperationError> {
        let name: OperationName = name.parse()?;
        Ok(self.get(name))
    }

    pub fn get(&self, name: OperationName) -> &OperationDefinition {
        &self.operations[name.index()]
    }

    pub fn fragment_library(&self) -> &FragmentLibrary {
        &self.fragment_library
    }

    /// All operations, in [`OperationName::ALL`] order.
    pub fn operations(&self) -> impl ExactSizeIterator<Item = &OperationDefinition> {
        self.operations.iter()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

fn compose_operation(
    name: OperationName,
    source: &CatalogSource,
    fragment_library: &FragmentLibrary,
) -> Result<OperationDefinition, CatalogBuildError> {
    let operation_source = source.operation_source(name)
        .ok_or(CatalogBuildError::MissingOperationSource { operation: name })?
        .trim();

    let scanned = definition_scan::scan_definition(operation_source).map_err(|error| {
        CatalogBuildError::InvalidOperationSource {
            operation: name,
            error,
        }
    })?;

    let DefinitionKind::Operation(kind) = scanned.kind else {
        return Err(CatalogBuildError::NotAnOperationDefinition { operation: name });
    };

    if scanned.name != Some(name.as_str()) {
        return Err(CatalogBuildError::OperationNameMismatch {
            operation: name,
            found: scanned.name.map(str::to_string),
        });
    }

    let fragments = fragment_library.closure(&scanned.fragment_spreads).map_err(|error| {
        CatalogBuildError::UndefinedFragmentReference {
            operation: name,
            fragment_name: error.fragment_name,
        }
    })?;

    let document = compose_document(operation_source, &fragments);
    parse_variable_declarations(&document).map_err(|error| {
        CatalogBuildError::MalformedDeclaration {
            operation: name,
            error,
        }
    })?;

    log::trace!(
        "Composed `{name}` with {} fragments ({} bytes).",
        fragments.len(),
        document.len(),
    );

    Ok(OperationDefinition {
        fragment_names: fragments.iter().map(|fragment| fragment.name().to_string()).collect(),
        document,
        kind,
        name,
        operation_source_len: operation_source.len(),
    })
}
