use crate::operation::OperationKind;

/// The kind of a single top-level definition in a GraphQL source text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DefinitionKind {
    /// `fragment Name on Type { ... }`
    Fragment,

    /// `query`, `mutation`, `subscription`, or an anonymous `{ ... }` query.
    Operation(OperationKind),
}
