use rust_tagged_log::prelude::ErrorCode;

pub mod logger_instance;
pub mod logger_parameters;
pub mod tracing_sink;

/// Helper function to convert `ErrorCode` to `String`.
pub(crate) fn error_code_to_string(e: ErrorCode) -> String {
    format!("ErrorCode::{e:?}")
}
