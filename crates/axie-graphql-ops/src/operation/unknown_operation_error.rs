use crate::operation::OperationName;
use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error(
    "Operation `{name}` not found. It must be one of the {} known operations.",
    OperationName::ALL.len(),
)]
pub struct UnknownOperationError {
    pub name: String,
}
