//! Utility types for the configuration subsystem.

mod error;
mod field;
mod status;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use status::{FieldStatus, check_field_status};
