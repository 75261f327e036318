//! Token source implementations.

mod str_to_graphql_token_source;

pub use str_to_graphql_token_source::StrGraphQLTokenSource;
