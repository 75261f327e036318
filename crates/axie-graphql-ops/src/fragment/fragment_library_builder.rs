use crate::fragment::Fragment;
use crate::fragment::FragmentLibrary;
use crate::fragment::FragmentSourceError;
use indexmap::IndexMap;
use std::collections::HashSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<FragmentLibraryBuildError>>;

/// Builder for constructing a [`FragmentLibrary`] with validation.
///
/// Fragments are added one at a time (duplicates are rejected immediately),
/// then [`build()`](Self::build) validates the reference graph as a whole:
/// every spread must name a known fragment and no fragment may reach itself.
///
/// # Example
///
/// ```
/// use axie_graphql_ops::fragment::FragmentLibraryBuilder;
///
/// let mut builder = FragmentLibraryBuilder::new();
/// builder.add_from_str("fragment AssetInfo on Asset { erc address id }").unwrap();
/// builder.add_from_str(
///     "fragment OrderInfo on Order { id assets { ...AssetInfo } }",
/// ).unwrap();
///
/// let library = builder.build().unwrap();
/// assert_eq!(library.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct FragmentLibraryBuilder {
    fragments: IndexMap<String, Fragment>,
}

impl FragmentLibraryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pre-built fragment.
    ///
    /// Returns an error if a fragment with the same name already exists.
    pub fn add_fragment(
        &mut self,
        fragment: Fragment,
    ) -> std::result::Result<(), FragmentLibraryBuildError> {
        if self.fragments.contains_key(fragment.name()) {
            return Err(FragmentLibraryBuildError::DuplicateFragmentDefinition {
                fragment_name: fragment.name,
            });
        }

        self.fragments.insert(fragment.name.clone(), fragment);
        Ok(())
    }

    /// Parse a fragment definition from source text and add it.
    pub fn add_from_str(
        &mut self,
        source: impl AsRef<str>,
    ) -> std::result::Result<(), FragmentLibraryBuildError> {
        let fragment = Fragment::from_source(source.as_ref()).map_err(|error| {
            FragmentLibraryBuildError::InvalidFragmentSource {
                source_prefix: source_prefix(source.as_ref()),
                error,
            }
        })?;
        self.add_fragment(fragment)
    }

    /// Build the immutable [`FragmentLibrary`].
    ///
    /// This method performs the following validations:
    /// - Detects cycles in fragment references
    /// - Deduplicates phase-shifted cycles (e.g., A→B→C→A is the same as B→C→A→B)
    /// - Validates that all fragment references exist
    ///
    /// All errors found are returned at once rather than failing on the first.
    pub fn build(self) -> Result<FragmentLibrary> {
        let mut errors = Vec::new();
        errors.extend(self.validate_no_cycles());
        errors.extend(self.validate_fragment_references());

        if !errors.is_empty() {
            return Err(errors);
        }

        log::debug!("Built fragment library with {} fragments.", self.fragments.len());
        Ok(FragmentLibrary {
            fragments: self.fragments,
        })
    }

    /// Validate that no cycles exist in fragment references.
    ///
    /// Runs a DFS from every fragment not yet reached by an earlier one.
    /// Each fragment is explored at most once, so the cost is linear in the
    /// number of fragments and references. Cycles that are rotations of one
    /// another are reported once.
    fn validate_no_cycles(&self) -> Vec<FragmentLibraryBuildError> {
        let mut all_cycles = Vec::new();
        let mut seen_normalized_cycles = HashSet::new();
        let mut done = HashSet::new();

        for fragment_name in self.fragments.keys() {
            let mut path = Vec::new();
            let mut visiting = HashSet::new();

            self.check_fragment_cycles(
                fragment_name,
                &mut path,
                &mut visiting,
                &mut done,
                &mut all_cycles,
                &mut seen_normalized_cycles,
            );
        }

        all_cycles
    }

    fn check_fragment_cycles<'a>(
        &'a self,
        fragment_name: &'a str,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        done: &mut HashSet<&'a str>,
        errors: &mut Vec<FragmentLibraryBuildError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        if visiting.contains(fragment_name) {
            // The cycle is the tail of the path starting at the revisited
            // fragment, closed by repeating it.
            let cycle_start = path.iter()
                .position(|name| name == fragment_name)
                .unwrap_or(0);
            let mut cycle = path[cycle_start..].to_vec();
            cycle.push(fragment_name.to_string());

            let normalized = Self::normalize_cycle(&cycle);
            if seen_normalized.insert(normalized) {
                errors.push(FragmentLibraryBuildError::FragmentCycleDetected {
                    cycle_path: cycle,
                });
            }
            return;
        }

        // Already fully explored from an earlier root
        if done.contains(fragment_name) {
            return;
        }

        // Fragment doesn't exist - will be caught by reference validation
        let Some(fragment) = self.fragments.get(fragment_name) else {
            return;
        };

        path.push(fragment_name.to_string());
        visiting.insert(fragment_name.to_string());

        for reference in fragment.references() {
            self.check_fragment_cycles(
                reference,
                path,
                visiting,
                done,
                errors,
                seen_normalized,
            );
        }

        path.pop();
        visiting.remove(fragment_name);
        done.insert(fragment_name);
    }

    /// Validate that all fragment references point to existing fragments.
    fn validate_fragment_references(&self) -> Vec<FragmentLibraryBuildError> {
        let mut errors = Vec::new();

        for (fragment_name, fragment) in &self.fragments {
            for reference in fragment.references() {
                if !self.fragments.contains_key(reference) {
                    errors.push(FragmentLibraryBuildError::UndefinedFragmentReference {
                        fragment_name: fragment_name.to_string(),
                        undefined_fragment: reference.to_string(),
                    });
                }
            }
        }

        errors
    }

    /// Normalize a cycle to canonical form for deduplication.
    ///
    /// Cycles that are rotations of each other are considered identical.
    /// For example, `[A, B, C, A]`, `[B, C, A, B]`, and `[C, A, B, C]` are
    /// all the same cycle.
    ///
    /// Normalization rotates the cycle to start with the lexicographically
    /// smallest fragment name.
    fn normalize_cycle(cycle: &[String]) -> Vec<String> {
        if cycle.is_empty() {
            return Vec::new();
        }

        // Remove the duplicate last element: [A, B, C, A] → [A, B, C]
        let cycle_without_repeat = &cycle[..cycle.len() - 1];

        let min_idx = cycle_without_repeat
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        let mut normalized = Vec::with_capacity(cycle.len());
        normalized.extend_from_slice(&cycle_without_repeat[min_idx..]);
        normalized.extend_from_slice(&cycle_without_repeat[..min_idx]);
        if let Some(first) = normalized.first().cloned() {
            normalized.push(first);
        }

        normalized
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentLibraryBuildError {
    #[error("Duplicate fragment definition: '{fragment_name}'")]
    DuplicateFragmentDefinition {
        fragment_name: String,
    },

    #[error("Fragment cycle detected: {}", format_cycle_path(.cycle_path))]
    FragmentCycleDetected {
        cycle_path: Vec<String>,
    },

    #[error("Invalid fragment source starting with `{source_prefix}`: {error}")]
    InvalidFragmentSource {
        source_prefix: String,
        error: FragmentSourceError,
    },

    #[error("Fragment '{fragment_name}' references undefined fragment '{undefined_fragment}'")]
    UndefinedFragmentReference {
        fragment_name: String,
        undefined_fragment: String,
    },
}

fn format_cycle_path(cycle: &[String]) -> String {
    cycle.join(" → ")
}

/// The first line of a source text, for identifying it in error messages.
fn source_prefix(source: &str) -> String {
    source.trim().lines().next().unwrap_or_default().to_string()
}
