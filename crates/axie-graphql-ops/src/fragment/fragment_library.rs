use crate::fragment::Fragment;
use crate::fragment::FragmentNotFoundError;
use indexmap::IndexMap;
use std::collections::HashSet;

/// An immutable, validated set of [`Fragment`]s keyed by name.
///
/// Built by [`FragmentLibraryBuilder`](crate::fragment::FragmentLibraryBuilder),
/// which guarantees that every reference resolves and that the reference
/// graph is acyclic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentLibrary {
    pub(super) fragments: IndexMap<String, Fragment>,
}

impl FragmentLibrary {
    pub fn get(&self, name: &str) -> Result<&Fragment, FragmentNotFoundError> {
        self.fragments.get(name).ok_or_else(|| FragmentNotFoundError {
            fragment_name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    /// All fragments, in the order they were added.
    pub fn fragments(&self) -> impl ExactSizeIterator<Item = &Fragment> {
        self.fragments.values()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns every fragment transitively referenced from `roots`, each
    /// exactly once.
    ///
    /// Traversal is a depth-first pre-order walk: roots in the given order,
    /// and each fragment's references in the order they first appear in its
    /// text. When two branches reach the same fragment, only the first visit
    /// counts, so the result is deterministic and free of duplicates.
    pub fn closure<S: AsRef<str>>(
        &self,
        roots: &[S],
    ) -> Result<Vec<&Fragment>, FragmentNotFoundError> {
        let mut visited = HashSet::new();
        let mut ordered = vec![];
        for root in roots {
            self.visit(root.as_ref(), &mut visited, &mut ordered)?;
        }
        Ok(ordered)
    }

    fn visit<'a>(
        &'a self,
        fragment_name: &str,
        visited: &mut HashSet<&'a str>,
        ordered: &mut Vec<&'a Fragment>,
    ) -> Result<(), FragmentNotFoundError> {
        let fragment = self.get(fragment_name)?;
        if !visited.insert(fragment.name()) {
            return Ok(());
        }

        ordered.push(fragment);
        for reference in fragment.references() {
            self.visit(reference, visited, ordered)?;
        }
        Ok(())
    }
}
