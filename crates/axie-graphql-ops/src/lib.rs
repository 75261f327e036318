//! A registry of the Axie Infinity marketplace's GraphQL operations.
//!
//! Operations are composed once from a library of reusable fragments: each
//! operation's document carries every fragment it transitively spreads,
//! exactly once. Asking for an operation by name then yields a
//! [`RequestPayload`](payload::RequestPayload) whose `variables` are derived
//! by parsing the operation's header, ready for the caller to fill in and
//! hand to an HTTP transport.
//!
//! ```rust
//! use axie_graphql_ops::payload::build_payload;
//!
//! let payload = build_payload("GetRecentlyListedAxies")
//!     .unwrap()
//!     .with_variable("from", 0)
//!     .with_variable("size", 20);
//!
//! assert_eq!(payload.variables["auctionType"], "AuctionType");
//! assert_eq!(payload.variables["size"], 20);
//! ```

mod definition_kind;
pub mod definition_scan;
pub mod fragment;
mod graphql_source_span;
pub mod operation;
pub mod payload;
mod source_position;
pub mod token;
pub mod token_source;
pub mod variables;

pub use definition_kind::DefinitionKind;
pub use graphql_source_span::GraphQLSourceSpan;
pub use operation::OperationCatalog;
pub use operation::OperationName;
pub use payload::build_payload;
pub use payload::PayloadBuilder;
pub use payload::RequestPayload;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
