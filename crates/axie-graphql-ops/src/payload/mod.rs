//! Instantiates request bodies for catalog operations.

mod payload_build_error;
mod payload_builder;
mod request_payload;

pub use payload_build_error::PayloadBuildError;
pub use payload_builder::build_payload;
pub use payload_builder::PayloadBuilder;
pub use request_payload::RequestPayload;
