use crate::fragment::FragmentLibraryBuildError;
use crate::operation::CatalogBuildError;
use crate::operation::CatalogSource;
use crate::operation::OperationCatalog;
use crate::operation::OperationKind;
use crate::operation::OperationName;

fn load_errors(source: &CatalogSource) -> Vec<CatalogBuildError> {
    OperationCatalog::from_source(source).unwrap_err().errors
}

#[test]
fn builtin_source_loads() {
    let catalog = OperationCatalog::from_source(&CatalogSource::builtin()).unwrap();
    assert_eq!(catalog.len(), OperationName::ALL.len());
    assert!(!catalog.fragment_library().is_empty());
}

#[test]
fn global_catalog_is_built_once() {
    let first = OperationCatalog::global().unwrap();
    let second = OperationCatalog::global().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn resolve_known_and_unknown_names() {
    let catalog = OperationCatalog::global().unwrap();

    let operation = catalog.resolve("GetAxieBrief").unwrap();
    assert_eq!(operation.name(), OperationName::GetAxieBrief);
    assert_eq!(operation.kind(), OperationKind::Query);

    let error = catalog.resolve("DoesNotExist").unwrap_err();
    assert_eq!(error.name, "DoesNotExist");
}

#[test]
fn operations_are_in_declaration_order() {
    let catalog = OperationCatalog::global().unwrap();
    let names: Vec<_> = catalog.operations().map(|op| op.name()).collect();
    assert_eq!(names, OperationName::ALL);
}

#[test]
fn mutations_are_classified() {
    let catalog = OperationCatalog::global().unwrap();
    assert_eq!(catalog.get(OperationName::CreateOrder).kind(), OperationKind::Mutation);
    assert_eq!(catalog.get(OperationName::RenameAxie).kind(), OperationKind::Mutation);
    assert_eq!(catalog.get(OperationName::GetOverallStats).kind(), OperationKind::Query);
}

#[test]
fn document_is_operation_then_closure() {
    let catalog = OperationCatalog::global().unwrap();
    let operation = catalog.get(OperationName::GetAxieBrief);

    assert_eq!(
        operation.fragment_names(),
        &["AxieBrief", "AxiePart", "AxieBannedStatus", "OrderInfo", "AssetInfo"],
    );
    assert!(operation.document().starts_with(operation.operation_source()));
    assert!(operation.operation_source().starts_with("query GetAxieBrief("));
    assert!(operation.operation_source().ends_with('}'));

    let mut expected = format!("{}\n", operation.operation_source());
    for name in operation.fragment_names() {
        let fragment = catalog.fragment_library().get(name).unwrap();
        expected.push('\n');
        expected.push_str(fragment.source());
        expected.push('\n');
    }
    assert_eq!(operation.document(), expected);
}

#[test]
fn zero_fragment_operation_is_just_its_source() {
    let catalog = OperationCatalog::global().unwrap();
    let operation = catalog.get(OperationName::GetExchangeRates);
    assert!(operation.fragment_names().is_empty());
    assert_eq!(operation.document(), format!("{}\n", operation.operation_source()));
}

#[test]
fn composition_is_deterministic() {
    let first = OperationCatalog::from_source(&CatalogSource::builtin()).unwrap();
    let second = OperationCatalog::from_source(&CatalogSource::builtin()).unwrap();
    for name in OperationName::ALL {
        assert_eq!(first.get(*name).document(), second.get(*name).document());
    }
    assert_eq!(first, second);
}

// =============================================================================
// Load failures
// =============================================================================

#[test]
fn missing_operation_source() {
    let mut source = CatalogSource::builtin();
    source.remove_operation_source(OperationName::GetAxieBrief);
    assert_eq!(
        load_errors(&source),
        vec![CatalogBuildError::MissingOperationSource {
            operation: OperationName::GetAxieBrief,
        }],
    );
}

#[test]
fn operation_name_mismatch() {
    let mut source = CatalogSource::builtin();
    source.set_operation_source(
        OperationName::GetAxieBrief,
        "query GetAxieDetail { axie { id } }",
    );
    source.set_operation_source(
        OperationName::GetLandDetail,
        "{ land { tokenId } }",
    );
    assert_eq!(
        load_errors(&source),
        vec![
            CatalogBuildError::OperationNameMismatch {
                operation: OperationName::GetAxieBrief,
                found: Some("GetAxieDetail".to_string()),
            },
            CatalogBuildError::OperationNameMismatch {
                operation: OperationName::GetLandDetail,
                found: None,
            },
        ],
    );
}

#[test]
fn fragment_in_place_of_operation() {
    let mut source = CatalogSource::builtin();
    source.set_operation_source(
        OperationName::GetAxieBrief,
        "fragment GetAxieBrief on Axie { id }",
    );
    assert_eq!(
        load_errors(&source),
        vec![CatalogBuildError::NotAnOperationDefinition {
            operation: OperationName::GetAxieBrief,
        }],
    );
}

#[test]
fn invalid_operation_source() {
    let mut source = CatalogSource::builtin();
    source.set_operation_source(OperationName::GetAxieBrief, "query GetAxieBrief { axie {");
    assert!(matches!(
        load_errors(&source).as_slice(),
        [CatalogBuildError::InvalidOperationSource {
            operation: OperationName::GetAxieBrief,
            ..
        }],
    ));
}

#[test]
fn operation_spreads_undefined_fragment() {
    let mut source = CatalogSource::builtin();
    source.set_operation_source(
        OperationName::GetAxieBrief,
        "query GetAxieBrief($axieId: ID!) { axie(axieId: $axieId) { ...NoSuchFragment } }",
    );
    assert_eq!(
        load_errors(&source),
        vec![CatalogBuildError::UndefinedFragmentReference {
            operation: OperationName::GetAxieBrief,
            fragment_name: "NoSuchFragment".to_string(),
        }],
    );
}

#[test]
fn malformed_header_fails_the_load() {
    let mut source = CatalogSource::builtin();
    source.set_operation_source(
        OperationName::GetAxieBrief,
        "query GetAxieBrief($axieId: ID!,, $other: Int) { axie(axieId: $axieId) { id } }",
    );
    let errors = load_errors(&source);
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        CatalogBuildError::MalformedDeclaration { operation, error } => {
            assert_eq!(*operation, OperationName::GetAxieBrief);
            assert!(error.message.contains("Empty variable definition"), "{error}");
        },
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn fragment_cycle_fails_the_load() {
    let mut source = CatalogSource::builtin();
    assert!(source.replace_fragment_source(
        "AssetInfo",
        "fragment AssetInfo on Asset { id order { ...OrderInfo } }",
    ));
    let errors = load_errors(&source);
    assert_eq!(
        errors,
        vec![CatalogBuildError::FragmentLibrary(
            FragmentLibraryBuildError::FragmentCycleDetected {
                cycle_path: vec![
                    "AssetInfo".to_string(),
                    "OrderInfo".to_string(),
                    "AssetInfo".to_string(),
                ],
            },
        )],
    );
}

#[test]
fn dangling_fragment_reference_fails_the_load() {
    let mut source = CatalogSource::builtin();
    source.add_fragment_source("fragment Orphan on Axie { id ...Ghost }");
    assert_eq!(
        load_errors(&source),
        vec![CatalogBuildError::FragmentLibrary(
            FragmentLibraryBuildError::UndefinedFragmentReference {
                fragment_name: "Orphan".to_string(),
                undefined_fragment: "Ghost".to_string(),
            },
        )],
    );
}

/// Every broken operation is reported, not just the first.
#[test]
fn all_operation_errors_are_collected() {
    let mut source = CatalogSource::builtin();
    source.remove_operation_source(OperationName::GetAxieBrief);
    source.remove_operation_source(OperationName::GetLandDetail);
    source.set_operation_source(OperationName::GetItemBrief, "query Wrong { item { id } }");

    let error = OperationCatalog::from_source(&source).unwrap_err();
    assert_eq!(error.errors.len(), 3);
    let message = error.to_string();
    assert!(message.contains("(3 errors)"), "{message}");
    assert!(message.contains("`GetLandDetail`"), "{message}");
}

#[test]
fn empty_source_reports_every_operation_missing() {
    let errors = load_errors(&CatalogSource::empty());
    assert_eq!(errors.len(), OperationName::ALL.len());
    assert!(errors.iter().all(|error| matches!(
        error,
        CatalogBuildError::MissingOperationSource { .. }
    )));
}
