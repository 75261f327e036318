//! Inspects composed documents with `graphql-parser`, independently of this
//! crate's own scanner.

use graphql_parser::query::Definition;
use graphql_parser::query::OperationDefinition;
use graphql_parser::query::Selection;
use graphql_parser::query::SelectionSet;
use std::collections::BTreeSet;

#[derive(Debug, Default)]
pub(crate) struct DocumentSummary {
    pub operation_names: Vec<Option<String>>,
    /// In document order, duplicates included.
    pub fragment_definitions: Vec<String>,
    /// Every fragment spread anywhere in the document.
    pub fragment_spreads: BTreeSet<String>,
    /// `(name, type)` for each variable of the first operation.
    pub variables: Vec<(String, String)>,
}

pub(crate) fn summarize(document: &str) -> DocumentSummary {
    let parsed = graphql_parser::query::parse_query::<String>(document)
        .unwrap_or_else(|error| panic!("graphql-parser rejected:\n{document}\n{error}"));

    let mut summary = DocumentSummary::default();
    for definition in &parsed.definitions {
        match definition {
            Definition::Operation(operation) => {
                let (name, variables, selection_set) = operation_parts(operation);
                if summary.operation_names.is_empty() {
                    summary.variables = variables;
                }
                summary.operation_names.push(name);
                collect_spreads(selection_set, &mut summary.fragment_spreads);
            },
            Definition::Fragment(fragment) => {
                summary.fragment_definitions.push(fragment.name.clone());
                collect_spreads(&fragment.selection_set, &mut summary.fragment_spreads);
            },
        }
    }
    summary
}

fn operation_parts<'a, 'doc>(
    operation: &'a OperationDefinition<'doc, String>,
) -> (Option<String>, Vec<(String, String)>, &'a SelectionSet<'doc, String>) {
    let (name, variable_definitions, selection_set) = match operation {
        OperationDefinition::Query(query) => {
            (query.name.clone(), query.variable_definitions.iter(), &query.selection_set)
        },
        OperationDefinition::Mutation(mutation) => (
            mutation.name.clone(),
            mutation.variable_definitions.iter(),
            &mutation.selection_set,
        ),
        OperationDefinition::Subscription(subscription) => (
            subscription.name.clone(),
            subscription.variable_definitions.iter(),
            &subscription.selection_set,
        ),
        OperationDefinition::SelectionSet(selection_set) => {
            return (None, vec![], selection_set);
        },
    };
    let variables = variable_definitions
        .map(|var| (var.name.clone(), var.var_type.to_string()))
        .collect();
    (name, variables, selection_set)
}

fn collect_spreads(selection_set: &SelectionSet<'_, String>, spreads: &mut BTreeSet<String>) {
    for item in &selection_set.items {
        match item {
            Selection::Field(field) => collect_spreads(&field.selection_set, spreads),
            Selection::FragmentSpread(spread) => {
                spreads.insert(spread.fragment_name.clone());
            },
            Selection::InlineFragment(inline) => collect_spreads(&inline.selection_set, spreads),
        }
    }
}
