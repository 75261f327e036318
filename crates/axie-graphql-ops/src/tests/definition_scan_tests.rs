use crate::definition_scan::scan_definition;
use crate::operation::OperationKind;
use crate::DefinitionKind;

#[test]
fn scans_fragment_definition() {
    let scanned = scan_definition(
        "fragment OrderInfo on Order { id maker assets { ...AssetInfo } }",
    ).unwrap();

    assert_eq!(scanned.kind, DefinitionKind::Fragment);
    assert_eq!(scanned.name, Some("OrderInfo"));
    assert_eq!(scanned.type_condition, Some("Order"));
    assert_eq!(scanned.fragment_spreads, vec!["AssetInfo"]);
}

#[test]
fn scans_operation_keywords() {
    let query = scan_definition("query GetAxieBrief($axieId: ID!) { axie(axieId: $axieId) { id } }")
        .unwrap();
    assert_eq!(query.kind, DefinitionKind::Operation(OperationKind::Query));
    assert_eq!(query.name, Some("GetAxieBrief"));
    assert_eq!(query.type_condition, None);

    let mutation = scan_definition("mutation RenameAxie { renameAxie { result } }").unwrap();
    assert_eq!(mutation.kind, DefinitionKind::Operation(OperationKind::Mutation));

    let subscription = scan_definition("subscription Listings { listings { id } }").unwrap();
    assert_eq!(subscription.kind, DefinitionKind::Operation(OperationKind::Subscription));
}

#[test]
fn anonymous_operation_has_no_name() {
    let scanned = scan_definition("{ exchangeRate { eth { usd } } }").unwrap();
    assert_eq!(scanned.kind, DefinitionKind::Operation(OperationKind::Query));
    assert_eq!(scanned.name, None);

    let scanned = scan_definition("query { exchangeRate { eth { usd } } }").unwrap();
    assert_eq!(scanned.name, None);
}

#[test]
fn inline_fragments_are_not_spreads() {
    let scanned = scan_definition(
        r#"
        fragment Asset on Asset {
            ... on Axie { id }
            ... @include(if: true) { name }
            ...AssetInfo
        }
        "#,
    ).unwrap();
    assert_eq!(scanned.fragment_spreads, vec!["AssetInfo"]);
}

#[test]
fn spreads_are_deduplicated_in_first_appearance_order() {
    let scanned = scan_definition(
        "query Q { a { ...B ...A } b { ...A ...C ...B } }",
    ).unwrap();
    assert_eq!(scanned.fragment_spreads, vec!["B", "A", "C"]);
}

#[test]
fn braces_in_variable_defaults_do_not_open_the_selection_set() {
    let scanned = scan_definition(
        "query Q($criteria: Criteria = { classes: [Beast] }) { axies(criteria: $criteria) { ...AxieBrief } }",
    ).unwrap();
    assert_eq!(scanned.fragment_spreads, vec!["AxieBrief"]);
}

#[test]
fn unbalanced_braces_are_rejected() {
    let error = scan_definition("query Q { axies { total }").unwrap_err();
    assert!(error.message.contains("never closed"), "{error}");
}

#[test]
fn trailing_definition_is_rejected() {
    let error = scan_definition(
        "fragment A on T { id } fragment B on T { id }",
    ).unwrap_err();
    assert!(error.message.contains("single definition"), "{error}");
    assert_eq!(error.position.byte_offset(), 23);
}

#[test]
fn missing_selection_set_is_rejected() {
    assert!(scan_definition("query GetAxieBrief($axieId: ID!)").is_err());
}

#[test]
fn lexer_errors_are_reported_with_position() {
    let error = scan_definition("query Q {\n  axie(name: \"unterminated) { id }\n}").unwrap_err();
    assert!(error.message.contains("Unterminated string"), "{error}");
    assert_eq!(error.position.line(), 1);
    assert_eq!(error.position.col(), 13);
}

#[test]
fn fragment_named_on_is_rejected() {
    assert!(scan_definition("fragment on on T { id }").is_err());
}

#[test]
fn unknown_leading_token_is_rejected() {
    let error = scan_definition("type Query { id: ID }").unwrap_err();
    assert!(error.message.contains("fragment or operation definition"), "{error}");
}
