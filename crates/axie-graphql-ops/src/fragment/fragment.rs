use crate::definition_scan;
use crate::definition_scan::DefinitionScanError;
use crate::DefinitionKind;
use thiserror::Error;

/// A single `fragment Name on Type { ... }` definition.
///
/// The fragments it references are derived from the `...Name` spreads in its
/// selection set when it is loaded, so they can never drift from the text.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub(crate) name: String,
    pub(crate) references: Vec<String>,
    pub(crate) source: String,
    pub(crate) type_condition: String,
}

impl Fragment {
    /// Loads a fragment from source text containing exactly one fragment
    /// definition.
    pub fn from_source(source: impl AsRef<str>) -> Result<Self, FragmentSourceError> {
        let source = source.as_ref().trim();
        let scanned = definition_scan::scan_definition(source)?;
        if scanned.kind != DefinitionKind::Fragment {
            return Err(FragmentSourceError::NotAFragmentDefinition {
                found: scanned.kind,
            });
        }

        Ok(Self {
            name: scanned.name.unwrap_or_default().to_string(),
            references: scanned.fragment_spreads
                .iter()
                .map(|name| name.to_string())
                .collect(),
            source: source.to_string(),
            type_condition: scanned.type_condition.unwrap_or_default().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Names of the fragments this fragment spreads directly, in order of
    /// first appearance.
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// The fragment's definition text, trimmed of surrounding whitespace.
    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentSourceError {
    #[error("Expected a fragment definition, found a {found:?} definition")]
    NotAFragmentDefinition {
        found: DefinitionKind,
    },

    #[error("Invalid fragment source: {0}")]
    ScanError(#[from] DefinitionScanError),
}
