//! Lightweight scanning of a single fragment or operation definition.
//!
//! This is not a GraphQL parser: it only recovers what composition needs
//! (the definition's keyword, name and type condition, plus the fragments its
//! selection set spreads) and rejects text that is not exactly one
//! brace-balanced, lexically valid definition.

use crate::operation::OperationKind;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use crate::DefinitionKind;
use crate::SourcePosition;
use std::iter::Peekable;
use thiserror::Error;

/// The result of scanning one definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ScannedDefinition<'src> {
    pub kind: DefinitionKind,

    /// `None` only for anonymous operations.
    pub name: Option<&'src str>,

    /// The `on Type` condition of a fragment definition.
    pub type_condition: Option<&'src str>,

    /// Names of fragments spread anywhere in the selection set, in order of
    /// first appearance, without duplicates. Inline fragments (`... on T`,
    /// `... @include(...)`) are not spreads.
    pub fragment_spreads: Vec<&'src str>,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{message} (at {position})")]
pub struct DefinitionScanError {
    pub message: String,
    pub position: SourcePosition,
}

pub(crate) type TokenIter<'src> = Peekable<StrGraphQLTokenSource<'src>>;

/// Scans `source`, which must contain exactly one fragment or operation
/// definition.
pub fn scan_definition(source: &str) -> Result<ScannedDefinition<'_>, DefinitionScanError> {
    let mut tokens = StrGraphQLTokenSource::new(source).peekable();
    let first = next_token(&mut tokens)?;

    let (kind, name, type_condition) = match first.kind {
        GraphQLTokenKind::Name("fragment") => {
            let name = expect_name(&mut tokens, "a fragment name")?;
            if name == "on" {
                return Err(error_at(&first, "Fragment definitions must be named"));
            }
            let on = next_token(&mut tokens)?;
            if on.kind != GraphQLTokenKind::Name("on") {
                return Err(unexpected(&on, "`on`"));
            }
            let type_condition = expect_name(&mut tokens, "a type condition")?;
            skip_to_selection_set(&mut tokens)?;
            (DefinitionKind::Fragment, Some(name), Some(type_condition))
        },

        GraphQLTokenKind::Name(keyword @ ("query" | "mutation" | "subscription")) => {
            let op_kind = match keyword {
                "mutation" => OperationKind::Mutation,
                "subscription" => OperationKind::Subscription,
                _ => OperationKind::Query,
            };
            let name = match tokens.peek().map(|token| &token.kind) {
                Some(GraphQLTokenKind::Name(name)) => {
                    let name = *name;
                    tokens.next();
                    Some(name)
                },
                _ => None,
            };
            skip_to_selection_set(&mut tokens)?;
            (DefinitionKind::Operation(op_kind), name, None)
        },

        GraphQLTokenKind::CurlyBraceOpen => {
            (DefinitionKind::Operation(OperationKind::Query), None, None)
        },

        _ => return Err(unexpected(&first, "a fragment or operation definition")),
    };

    let fragment_spreads = scan_selection_set(&mut tokens)?;

    let trailing = next_token(&mut tokens)?;
    if trailing.kind != GraphQLTokenKind::Eof {
        return Err(error_at(
            &trailing,
            format!(
                "Expected a single definition, but found trailing {}",
                trailing.kind.describe(),
            ),
        ));
    }

    Ok(ScannedDefinition {
        kind,
        name,
        type_condition,
        fragment_spreads,
    })
}

/// Consumes tokens up to and including the `{` that opens the definition's
/// selection set. Parenthesised groups (variable definitions, directive
/// arguments) are skipped as a whole, since object-valued defaults may
/// contain braces of their own.
pub(crate) fn skip_to_selection_set(tokens: &mut TokenIter<'_>) -> Result<(), DefinitionScanError> {
    let mut paren_depth = 0usize;
    loop {
        let token = next_token(tokens)?;
        match token.kind {
            GraphQLTokenKind::ParenOpen => paren_depth += 1,
            GraphQLTokenKind::ParenClose => {
                paren_depth = paren_depth.checked_sub(1).ok_or_else(
                    || error_at(&token, "Unbalanced `)`"),
                )?;
            },
            GraphQLTokenKind::CurlyBraceOpen if paren_depth == 0 => return Ok(()),
            GraphQLTokenKind::Eof => {
                return Err(error_at(&token, "Expected a selection set before end of input"));
            },
            _ => (),
        }
    }
}

/// Scans the body of a selection set whose opening `{` has already been
/// consumed, returning the fragment spreads found inside it.
pub(crate) fn scan_selection_set<'src>(
    tokens: &mut TokenIter<'src>,
) -> Result<Vec<&'src str>, DefinitionScanError> {
    let mut depth = 1usize;
    let mut spreads: Vec<&'src str> = vec![];
    while depth > 0 {
        let token = next_token(tokens)?;
        match token.kind {
            GraphQLTokenKind::CurlyBraceOpen => depth += 1,
            GraphQLTokenKind::CurlyBraceClose => depth -= 1,
            GraphQLTokenKind::Ellipsis => {
                if let Some(GraphQLTokenKind::Name(name)) = tokens.peek().map(|t| &t.kind)
                    && *name != "on"
                    && !spreads.contains(name) {
                    spreads.push(*name);
                }
            },
            GraphQLTokenKind::Eof => {
                return Err(error_at(&token, "Unbalanced `{`: selection set is never closed"));
            },
            _ => (),
        }
    }
    Ok(spreads)
}

/// Returns the next token, converting lexer errors into scan errors.
fn next_token<'src>(
    tokens: &mut TokenIter<'src>,
) -> Result<GraphQLToken<'src>, DefinitionScanError> {
    match tokens.next() {
        Some(token) => match &token.kind {
            GraphQLTokenKind::Error { message } => Err(error_at(&token, message.clone())),
            _ => Ok(token),
        },
        None => Err(DefinitionScanError {
            message: "Unexpected end of input".to_string(),
            position: SourcePosition::default(),
        }),
    }
}

fn expect_name<'src>(
    tokens: &mut TokenIter<'src>,
    expected: &str,
) -> Result<&'src str, DefinitionScanError> {
    let token = next_token(tokens)?;
    token.kind.as_name().ok_or_else(|| unexpected(&token, expected))
}

fn unexpected(token: &GraphQLToken<'_>, expected: &str) -> DefinitionScanError {
    error_at(
        token,
        format!("Expected {expected}, found {}", token.kind.describe()),
    )
}

fn error_at(token: &GraphQLToken<'_>, message: impl Into<String>) -> DefinitionScanError {
    DefinitionScanError {
        message: message.into(),
        position: token.span.start_inclusive,
    }
}
