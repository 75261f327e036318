use crate::variables::parse_variable_declarations;
use crate::variables::MalformedDeclarationError;

fn parse_error(document: &str) -> MalformedDeclarationError {
    match parse_variable_declarations(document) {
        Ok(declaration) => panic!("Expected an error, parsed {declaration:?}"),
        Err(error) => error,
    }
}

fn assert_error_contains(document: &str, expected: &str) {
    let error = parse_error(document);
    assert!(
        error.message.contains(expected),
        "Expected `{expected}` in error for `{document}`, got: {error}",
    );
}

#[test]
fn empty_parentheses() {
    assert_error_contains("query Q() { x }", "cannot be empty");
}

#[test]
fn leading_comma() {
    assert_error_contains("query Q(, $a: Int) { x }", "Empty variable definition");
}

#[test]
fn double_comma_between_definitions() {
    assert_error_contains("query Q($a: Int,, $b: Int) { x }", "Empty variable definition");
    assert_error_contains("query Q($a: Int, , $b: Int) { x }", "Empty variable definition");
}

#[test]
fn more_than_one_trailing_comma() {
    assert_error_contains("query Q($a: Int,,) { x }", "Empty variable definition");
}

#[test]
fn missing_comma_between_definitions() {
    assert_error_contains("query Q($a: Int $b: Int) { x }", "Expected `,` between");
}

#[test]
fn comma_inside_a_definition() {
    assert_error_contains("query Q($a, : Int) { x }", "inside a variable definition");
    assert_error_contains("query Q($a: , Int) { x }", "inside a variable definition");
    assert_error_contains("query Q($a: [Int, ]) { x }", "inside a variable definition");
    assert_error_contains("query Q($a: Int, = 4) { x }", "inside a variable definition");
}

#[test]
fn missing_dollar() {
    assert_error_contains("query Q(a: Int) { x }", "Expected `$`");
}

#[test]
fn missing_name() {
    assert_error_contains("query Q($: Int) { x }", "Expected a variable name");
}

#[test]
fn missing_colon() {
    assert_error_contains("query Q($a Int) { x }", "Expected `:`");
}

#[test]
fn missing_type() {
    assert_error_contains("query Q($a:) { x }", "Expected a type");
    assert_error_contains("query Q($a: = 1) { x }", "Expected a type");
}

#[test]
fn unterminated_list_type() {
    assert_error_contains("query Q($a: [Int) { x }", "Unterminated list type");
}

#[test]
fn unterminated_list_value() {
    assert_error_contains("query Q($a: [Int] = [1, 2) { x }", "Unterminated list value");
}

#[test]
fn unterminated_definition_list() {
    assert_error_contains("query Q($a: Int", "Unterminated variable definitions");
}

#[test]
fn variables_in_default_values() {
    assert_error_contains("query Q($a: Int = $b) { x }", "not allowed in default values");
    assert_error_contains(
        "query Q($a: [Int] = [1, $b]) { x }",
        "not allowed in default values",
    );
    assert_error_contains(
        "query Q($a: In = { x: $b }) { x }",
        "not allowed in default values",
    );
}

#[test]
fn missing_default_value() {
    assert_error_contains("query Q($a: Int =) { x }", "Expected a default value");
}

#[test]
fn duplicate_variable_names() {
    let error = parse_error("query Q($a: Int, $a: String) { x }");
    assert_eq!(error.message, "Duplicate variable `$a`");
    assert_eq!(error.position.col(), 17);
}

#[test]
fn lexical_errors_in_header() {
    assert_error_contains("query Q($a: Int = \"open) { x }", "Unterminated string");
    assert_error_contains("query Q($a: Int = 01) { x }", "leading zeros");
    assert_error_contains("query Q($a: Int?) { x }", "Unexpected character");
}

#[test]
fn no_operation_definition() {
    assert_error_contains("", "No operation definition found");
    assert_error_contains("fragment A on Axie { id }", "No operation definition found");
}

#[test]
fn unexpected_top_level_token() {
    assert_error_contains("type Axie { id: ID }", "fragment or operation definition");
}

#[test]
fn errors_carry_positions() {
    let error = parse_error("query Q(\n  $a: Int\n  $b: Int\n) { x }");
    assert_eq!(error.position.line(), 2);
    assert_eq!(error.position.col(), 2);
    assert_eq!(
        error.to_string(),
        "Expected `,` between variable definitions (at 3:3)",
    );
}

/// Nesting is bounded, so adversarial input fails with an error instead of
/// overflowing the stack.
#[test]
fn deeply_nested_list_type() {
    let document = format!(
        "query Q($a: {}Int{}) {{ x }}",
        "[".repeat(200_000),
        "]".repeat(200_000),
    );
    assert_error_contains(&document, "maximum nesting depth exceeded");
}

#[test]
fn deeply_nested_default_value() {
    let document = format!(
        "query Q($a: Int = {}1{}) {{ x }}",
        "[".repeat(200_000),
        "]".repeat(200_000),
    );
    assert_error_contains(&document, "maximum nesting depth exceeded");

    let document = format!(
        "query Q($a: Filter = {}1{}) {{ x }}",
        "{ f: ".repeat(200_000),
        " }".repeat(200_000),
    );
    assert_error_contains(&document, "maximum nesting depth exceeded");
}

#[test]
fn nesting_within_the_limit_is_accepted() {
    let document = format!(
        "query Q($a: {}Int{} = {}1{}) {{ x }}",
        "[".repeat(64),
        "]".repeat(64),
        "[".repeat(64),
        "]".repeat(64),
    );
    let declaration = match parse_variable_declarations(&document) {
        Ok(declaration) => declaration,
        Err(error) => panic!("Expected 64 levels to parse: {error}"),
    };
    assert_eq!(
        declaration.type_of("a"),
        Some(format!("{}Int{}", "[".repeat(64), "]".repeat(64)).as_str()),
    );
}
