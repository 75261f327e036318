use crate::definition_scan;
use crate::operation::builtin_fragments::BUILTIN_FRAGMENT_SOURCES;
use crate::operation::OperationName;
use indexmap::IndexMap;
use std::borrow::Cow;

/// The raw text an [`OperationCatalog`](crate::operation::OperationCatalog)
/// is loaded from: fragment definitions plus one operation definition per
/// [`OperationName`].
///
/// [`CatalogSource::builtin()`] holds the `.graphql` files shipped with this
/// crate. The mutators exist so alternative or deliberately broken sources
/// can be assembled; they never affect a catalog that was already loaded.
#[derive(Clone, Debug, Default)]
pub struct CatalogSource {
    fragment_sources: Vec<Cow<'static, str>>,
    operation_sources: IndexMap<OperationName, Cow<'static, str>>,
}

impl CatalogSource {
    /// The fragment and operation sources compiled into this crate.
    pub fn builtin() -> Self {
        Self {
            fragment_sources: BUILTIN_FRAGMENT_SOURCES
                .iter()
                .map(|source| Cow::Borrowed(*source))
                .collect(),
            operation_sources: OperationName::ALL
                .iter()
                .map(|name| (*name, Cow::Borrowed(name.builtin_source())))
                .collect(),
        }
    }

    /// A source with no fragments and no operations.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn add_fragment_source(&mut self, source: impl Into<Cow<'static, str>>) {
        self.fragment_sources.push(source.into());
    }

    /// Replaces the source of the fragment named `fragment_name`, keeping its
    /// position. Returns `false` if no fragment source has that name.
    pub fn replace_fragment_source(
        &mut self,
        fragment_name: &str,
        source: impl Into<Cow<'static, str>>,
    ) -> bool {
        let position = self.fragment_sources.iter().position(|existing| {
            definition_scan::scan_definition(existing.trim())
                .is_ok_and(|scanned| scanned.name == Some(fragment_name))
        });
        match position {
            Some(idx) => {
                self.fragment_sources[idx] = source.into();
                true
            },
            None => false,
        }
    }

    /// Sets the source of `name`, returning the source it replaced.
    pub fn set_operation_source(
        &mut self,
        name: OperationName,
        source: impl Into<Cow<'static, str>>,
    ) -> Option<Cow<'static, str>> {
        self.operation_sources.insert(name, source.into())
    }

    pub fn remove_operation_source(
        &mut self,
        name: OperationName,
    ) -> Option<Cow<'static, str>> {
        self.operation_sources.shift_remove(&name)
    }

    pub fn fragment_sources(&self) -> impl Iterator<Item = &str> {
        self.fragment_sources.iter().map(|source| source.as_ref())
    }

    pub fn operation_source(&self, name: OperationName) -> Option<&str> {
        self.operation_sources.get(&name).map(|source| source.as_ref())
    }
}
