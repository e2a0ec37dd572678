pub mod errors;
pub mod telemetry;

pub use errors::{DomainError, DomainResult, ErrorKind, ValidationError};
pub use telemetry::init_tracing;
