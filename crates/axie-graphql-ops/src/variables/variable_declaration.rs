use crate::variables::DeclaredVariable;
use indexmap::IndexMap;

/// The ordered parameter list of an operation, keyed by variable name.
///
/// Iteration order is declaration order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VariableDeclaration {
    pub(super) variables: IndexMap<String, DeclaredVariable>,
}

impl VariableDeclaration {
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&DeclaredVariable> {
        self.variables.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DeclaredVariable> {
        self.variables.values()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// Placeholder payload variables: each name mapped to its declared type
    /// as a JSON string, for the caller to overwrite with real values.
    /// Default values are never part of a placeholder: `$isAxie: Boolean =
    /// false` yields `"Boolean"`.
    pub fn placeholder_variables(&self) -> IndexMap<String, serde_json::Value> {
        self.variables
            .iter()
            .map(|(name, variable)| {
                (name.clone(), serde_json::Value::String(variable.type_annotation.clone()))
            })
            .collect()
    }

    pub fn to_type_map(&self) -> IndexMap<String, String> {
        self.variables
            .iter()
            .map(|(name, variable)| (name.clone(), variable.type_annotation.clone()))
            .collect()
    }

    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(DeclaredVariable::type_annotation)
    }
}

impl<'a> IntoIterator for &'a VariableDeclaration {
    type Item = &'a DeclaredVariable;
    type IntoIter = indexmap::map::Values<'a, String, DeclaredVariable>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.values()
    }
}
