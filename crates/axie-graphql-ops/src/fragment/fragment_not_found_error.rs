use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("Fragment `{fragment_name}` is not defined in the fragment library")]
pub struct FragmentNotFoundError {
    pub fragment_name: String,
}
