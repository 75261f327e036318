//! Named, reusable field-selection snippets and the validated library that
//! holds them.

#[allow(clippy::module_inception)]
mod fragment;
mod fragment_library;
mod fragment_library_builder;
mod fragment_not_found_error;

pub use fragment::Fragment;
pub use fragment::FragmentSourceError;
pub use fragment_library::FragmentLibrary;
pub use fragment_library_builder::FragmentLibraryBuildError;
pub use fragment_library_builder::FragmentLibraryBuilder;
pub use fragment_not_found_error::FragmentNotFoundError;

#[cfg(test)]
mod tests;
