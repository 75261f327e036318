//! Parser for the variable definition list in an operation's header.
//!
//! Commas are insignificant to GraphQL itself, but here they separate
//! parameters: exactly one comma between two definitions, at most one before
//! the closing `)`, and none inside a definition except within list/object
//! default values and directive arguments.

use crate::definition_scan;
use crate::definition_scan::TokenIter;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use crate::variables::DeclaredVariable;
use crate::variables::MalformedDeclarationError;
use crate::variables::VariableDeclaration;
use crate::SourcePosition;

type ParseResult<T> = Result<T, MalformedDeclarationError>;

/// Parses the variable definitions of the first operation in `document`.
///
/// Fragment definitions before the operation are skipped. An operation with
/// no `(...)` after its name, or an anonymous `{ ... }` operation, declares no
/// variables. A document with no operation definition is malformed.
///
/// ```rust
/// use axie_graphql_ops::variables::parse_variable_declarations;
///
/// let declaration = parse_variable_declarations(
///     "query GetAxies($from: Int, $owners: [String !] !) { axies(from: $from) { total } }",
/// ).unwrap();
///
/// assert_eq!(declaration.names().collect::<Vec<_>>(), vec!["from", "owners"]);
/// assert_eq!(declaration.type_of("owners"), Some("[String!]!"));
/// ```
pub fn parse_variable_declarations(document: &str) -> ParseResult<VariableDeclaration> {
    VariableDeclarationParser::new(document).parse()
}

struct VariableDeclarationParser<'src> {
    recursion_depth: usize,
    source: &'src str,
    tokens: TokenIter<'src>,
}

impl<'src> VariableDeclarationParser<'src> {
    /// Maximum nesting depth of list types and of list/object default
    /// values.
    const MAX_RECURSION_DEPTH: usize = 64;

    fn new(source: &'src str) -> Self {
        Self {
            recursion_depth: 0,
            source,
            tokens: StrGraphQLTokenSource::new(source).peekable(),
        }
    }

    /// Increments the nesting depth, failing at `token` once the limit is
    /// exceeded. Every successful call must be paired with
    /// [`exit_recursion()`](Self::exit_recursion).
    fn enter_recursion(&mut self, token: &GraphQLToken<'_>) -> ParseResult<()> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            return Err(MalformedDeclarationError::at_token(
                token,
                "maximum nesting depth exceeded",
            ));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    fn parse(mut self) -> ParseResult<VariableDeclaration> {
        loop {
            let token = self.next_token()?;
            match token.kind {
                GraphQLTokenKind::Name("fragment") => {
                    definition_scan::skip_to_selection_set(&mut self.tokens)?;
                    definition_scan::scan_selection_set(&mut self.tokens)?;
                },

                GraphQLTokenKind::Name("query" | "mutation" | "subscription") => {
                    return self.parse_operation_header();
                },

                GraphQLTokenKind::CurlyBraceOpen => return Ok(VariableDeclaration::default()),

                GraphQLTokenKind::Eof => {
                    return Err(MalformedDeclarationError::at_token(
                        &token,
                        "No operation definition found",
                    ));
                },

                _ => return Err(unexpected(&token, "a fragment or operation definition")),
            }
        }
    }

    /// Reads the optional operation name and, if present, the variable
    /// definition list that follows it. The operation keyword has already
    /// been consumed.
    fn parse_operation_header(&mut self) -> ParseResult<VariableDeclaration> {
        let mut token = self.next_token()?;
        if token.kind.as_name().is_some() {
            token = self.next_token()?;
        }

        match token.kind {
            GraphQLTokenKind::ParenOpen => self.parse_variable_definitions(),
            _ => Ok(VariableDeclaration::default()),
        }
    }

    // =========================================================================
    // Variable definitions
    // =========================================================================

    /// Parses definitions up to and including the `)` matching an already
    /// consumed `(`.
    fn parse_variable_definitions(&mut self) -> ParseResult<VariableDeclaration> {
        let mut declaration = VariableDeclaration::default();
        let mut token = self.next_token()?;

        if token.kind == GraphQLTokenKind::ParenClose {
            return Err(MalformedDeclarationError::at_token(
                &token,
                "Variable definitions cannot be empty; omit the parentheses instead",
            ));
        }

        loop {
            let expected_commas = usize::from(!declaration.is_empty());
            let commas = token.preceding_comma_count();
            if commas > expected_commas {
                return Err(MalformedDeclarationError::at_token(
                    &token,
                    "Empty variable definition (unexpected `,`)",
                ));
            }
            if commas < expected_commas {
                return Err(MalformedDeclarationError::at_token(
                    &token,
                    "Expected `,` between variable definitions",
                ));
            }

            let (variable, next) = self.parse_variable_definition(token)?;
            if declaration.contains(variable.name()) {
                return Err(MalformedDeclarationError {
                    message: format!("Duplicate variable `${}`", variable.name()),
                    position: variable.position(),
                });
            }
            declaration.variables.insert(variable.name.clone(), variable);

            match next.kind {
                GraphQLTokenKind::ParenClose => {
                    if next.preceding_comma_count() > 1 {
                        return Err(MalformedDeclarationError::at_token(
                            &next,
                            "Empty variable definition (unexpected `,`)",
                        ));
                    }
                    return Ok(declaration);
                },
                GraphQLTokenKind::Dollar => token = next,
                GraphQLTokenKind::Eof => {
                    return Err(MalformedDeclarationError::at_token(
                        &next,
                        "Unterminated variable definitions: expected `)`",
                    ));
                },
                _ => return Err(unexpected(&next, "`,` or `)`")),
            }
        }
    }

    /// Parses `$name: Type = default @directive(args)` starting at `dollar`.
    ///
    /// Returns the definition along with the first token after it, which the
    /// caller inspects for the separating comma.
    fn parse_variable_definition(
        &mut self,
        dollar: GraphQLToken<'src>,
    ) -> ParseResult<(DeclaredVariable, GraphQLToken<'src>)> {
        if dollar.kind != GraphQLTokenKind::Dollar {
            return Err(unexpected(&dollar, "`$`"));
        }
        let position = dollar.span.start_inclusive;

        let name_token = self.next_token_in_definition()?;
        let name = match name_token.kind {
            GraphQLTokenKind::Name(name) => name,
            GraphQLTokenKind::True => "true",
            GraphQLTokenKind::False => "false",
            GraphQLTokenKind::Null => "null",
            _ => return Err(unexpected(&name_token, "a variable name")),
        };

        let colon = self.next_token_in_definition()?;
        if colon.kind != GraphQLTokenKind::Colon {
            return Err(unexpected(&colon, "`:`"));
        }

        let mut type_annotation = String::new();
        self.parse_type_annotation(&mut type_annotation)?;

        let mut next = self.next_token()?;
        let mut default_value = None;
        if next.kind == GraphQLTokenKind::Equals {
            reject_comma_inside_definition(&next)?;
            let value_start = self.next_token_in_definition()?;
            let start = value_start.span.start_inclusive;
            let end = self.parse_const_value(value_start)?;
            default_value = Some(
                self.source[start.byte_offset()..end.byte_offset()].to_string(),
            );
            next = self.next_token()?;
        }

        while next.kind == GraphQLTokenKind::At {
            reject_comma_inside_definition(&next)?;
            next = self.skip_directive_annotation()?;
        }

        Ok((
            DeclaredVariable {
                default_value,
                name: name.to_string(),
                position,
                type_annotation,
            },
            next,
        ))
    }

    /// Appends the type at the current position to `rendered`, without any
    /// whitespace.
    fn parse_type_annotation(&mut self, rendered: &mut String) -> ParseResult<()> {
        let token = self.next_token_in_definition()?;
        match token.kind {
            GraphQLTokenKind::Name(name) => rendered.push_str(name),

            GraphQLTokenKind::SquareBracketOpen => {
                rendered.push('[');
                self.enter_recursion(&token)?;
                let inner = self.parse_type_annotation(rendered);
                self.exit_recursion();
                inner?;
                let close = self.next_token_in_definition()?;
                match close.kind {
                    GraphQLTokenKind::SquareBracketClose => rendered.push(']'),
                    GraphQLTokenKind::ParenClose | GraphQLTokenKind::Eof => {
                        return Err(MalformedDeclarationError::at_token(
                            &close,
                            "Unterminated list type: expected `]`",
                        ));
                    },
                    _ => return Err(unexpected(&close, "`]`")),
                }
            },

            _ => return Err(unexpected(&token, "a type")),
        }

        if self.peek_is(&GraphQLTokenKind::Bang) {
            self.next_token_in_definition()?;
            rendered.push('!');
        }
        Ok(())
    }

    // =========================================================================
    // Default values and directives
    // =========================================================================

    /// Validates a constant value starting at `token` and returns the end
    /// position of its last token.
    fn parse_const_value(&mut self, token: GraphQLToken<'src>) -> ParseResult<SourcePosition> {
        let is_nested = matches!(
            token.kind,
            GraphQLTokenKind::SquareBracketOpen | GraphQLTokenKind::CurlyBraceOpen,
        );
        if !is_nested {
            return self.parse_const_value_impl(token);
        }
        self.enter_recursion(&token)?;
        let result = self.parse_const_value_impl(token);
        self.exit_recursion();
        result
    }

    fn parse_const_value_impl(&mut self, token: GraphQLToken<'src>) -> ParseResult<SourcePosition> {
        match token.kind {
            GraphQLTokenKind::Name(_) => Ok(token.span.end_exclusive),
            ref kind if kind.is_scalar_value() => Ok(token.span.end_exclusive),

            GraphQLTokenKind::Dollar => Err(MalformedDeclarationError::at_token(
                &token,
                "Variables are not allowed in default values",
            )),

            GraphQLTokenKind::SquareBracketOpen => loop {
                let item = self.next_token()?;
                match item.kind {
                    GraphQLTokenKind::SquareBracketClose => return Ok(item.span.end_exclusive),
                    GraphQLTokenKind::ParenClose | GraphQLTokenKind::Eof => {
                        return Err(MalformedDeclarationError::at_token(
                            &item,
                            "Unterminated list value: expected `]`",
                        ));
                    },
                    _ => {
                        self.parse_const_value(item)?;
                    },
                }
            },

            GraphQLTokenKind::CurlyBraceOpen => loop {
                let field = self.next_token()?;
                match field.kind {
                    GraphQLTokenKind::CurlyBraceClose => return Ok(field.span.end_exclusive),
                    GraphQLTokenKind::ParenClose | GraphQLTokenKind::Eof => {
                        return Err(MalformedDeclarationError::at_token(
                            &field,
                            "Unterminated object value: expected `}`",
                        ));
                    },
                    GraphQLTokenKind::Name(_) => {
                        let colon = self.next_token()?;
                        if colon.kind != GraphQLTokenKind::Colon {
                            return Err(unexpected(&colon, "`:`"));
                        }
                        let value = self.next_token()?;
                        self.parse_const_value(value)?;
                    },
                    _ => return Err(unexpected(&field, "an object field name")),
                }
            },

            _ => Err(unexpected(&token, "a default value")),
        }
    }

    /// Skips one `@name(args)` annotation whose `@` has already been consumed
    /// and returns the token after it.
    fn skip_directive_annotation(&mut self) -> ParseResult<GraphQLToken<'src>> {
        let name = self.next_token_in_definition()?;
        if name.kind.as_name().is_none() {
            return Err(unexpected(&name, "a directive name"));
        }

        let next = self.next_token()?;
        if next.kind != GraphQLTokenKind::ParenOpen {
            return Ok(next);
        }
        reject_comma_inside_definition(&next)?;

        let mut depth = 1usize;
        while depth > 0 {
            let token = self.next_token()?;
            match token.kind {
                GraphQLTokenKind::ParenOpen => depth += 1,
                GraphQLTokenKind::ParenClose => depth -= 1,
                GraphQLTokenKind::Eof => {
                    return Err(MalformedDeclarationError::at_token(
                        &token,
                        "Unterminated directive arguments: expected `)`",
                    ));
                },
                _ => (),
            }
        }
        self.next_token()
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek_is(&mut self, kind: &GraphQLTokenKind<'_>) -> bool {
        self.tokens.peek().is_some_and(|token| &token.kind == kind)
    }

    /// Returns the next token, converting lexer errors into declaration
    /// errors.
    fn next_token(&mut self) -> ParseResult<GraphQLToken<'src>> {
        match self.tokens.next() {
            Some(token) => match &token.kind {
                GraphQLTokenKind::Error { message } => {
                    Err(MalformedDeclarationError::at_token(&token, message.clone()))
                },
                _ => Ok(token),
            },
            None => Err(MalformedDeclarationError {
                message: "Unexpected end of input".to_string(),
                position: SourcePosition::default(),
            }),
        }
    }

    /// Like [`next_token()`](Self::next_token), for tokens that must not be
    /// preceded by a comma.
    fn next_token_in_definition(&mut self) -> ParseResult<GraphQLToken<'src>> {
        let token = self.next_token()?;
        reject_comma_inside_definition(&token)?;
        Ok(token)
    }
}

fn reject_comma_inside_definition(token: &GraphQLToken<'_>) -> ParseResult<()> {
    if token.preceding_comma_count() > 0 {
        return Err(MalformedDeclarationError::at_token(
            token,
            format!(
                "Unexpected `,` inside a variable definition (before {})",
                token.kind.describe(),
            ),
        ));
    }
    Ok(())
}

fn unexpected(token: &GraphQLToken<'_>, expected: &str) -> MalformedDeclarationError {
    MalformedDeclarationError::at_token(
        token,
        format!("Expected {expected}, found {}", token.kind.describe()),
    )
}
