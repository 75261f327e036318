use crate::SourcePosition;

/// One `$name: Type = default` entry of an operation header.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeclaredVariable {
    pub(super) default_value: Option<String>,
    pub(super) name: String,
    pub(super) position: SourcePosition,
    pub(super) type_annotation: String,
}

impl DeclaredVariable {
    /// Raw source text of the default value, if one was declared.
    ///
    /// The default is never part of [`type_annotation()`](Self::type_annotation).
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// The variable name without its leading `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Position of the variable's `$` in the document.
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// The declared type with all whitespace removed, e.g. `[String!]!`.
    pub fn type_annotation(&self) -> &str {
        self.type_annotation.as_str()
    }
}
