//! Derives an operation's declared parameters from its document text.
//!
//! Only the header of the document's operation definition is read: the
//! parenthesised list directly after `query Name`. Field arguments elsewhere in
//! the document never contribute variables.

mod declared_variable;
mod malformed_declaration_error;
mod variable_declaration;
mod variable_declaration_parser;

pub use declared_variable::DeclaredVariable;
pub use malformed_declaration_error::MalformedDeclarationError;
pub use variable_declaration::VariableDeclaration;
pub use variable_declaration_parser::parse_variable_declarations;

#[cfg(test)]
mod tests;
