//! Logger instance test helpers.

use crate::helpers::logger_parameters::{LoggerParameters, MessageParameters};
use crate::helpers::tracing_sink::TracingSink;
use rust_tagged_log::prelude::{
    log_error_global, log_info_global, log_warning_global, ErrorCode, TaggedLogger,
    TaggedLoggerBuilder,
};
use std::sync::Arc;

/// Create logger instance based on provided parameters.
/// Output is traced using `TracingSink`.
pub fn logger_instance(parameters: &LoggerParameters) -> Result<TaggedLogger, ErrorCode> {
    let mut builder = TaggedLoggerBuilder::new(parameters.name.clone()).sink(Arc::new(TracingSink));

    // Set category.
    if let Some(category) = parameters.category {
        builder = builder.category(category);
    }

    // Set build mode.
    if let Some(mode) = parameters.mode {
        builder = builder.build_mode(mode);
    }

    builder.build()
}

/// Emit message using logger instance.
pub fn emit(logger: &TaggedLogger, message: &MessageParameters) -> Result<(), String> {
    match message.level.as_str() {
        "info" => logger.log_info(&message.text),
        "warning" => logger.log_warning(&message.text),
        "error" => logger.log_error(&message.text),
        other => return Err(format!("invalid level: {other}")),
    }
    Ok(())
}

/// Emit message using free functions.
pub fn emit_global(name: &str, message: &MessageParameters) -> Result<(), String> {
    match message.level.as_str() {
        "info" => log_info_global(name, &message.text),
        "warning" => log_warning_global(name, &message.text),
        "error" => log_error_global(name, &message.text),
        other => return Err(format!("invalid level: {other}")),
    }
    Ok(())
}
