// *******************************************************************************
// Copyright (c) 2026 Contributors to the Eclipse Foundation
//
// See the NOTICE file(s) distributed with this work for additional
// information regarding copyright ownership.
//
// This program and the accompanying materials are made available under the
// terms of the Apache License Version 2.0 which is available at
// <https://www.apache.org/licenses/LICENSE-2.0>
//
// SPDX-License-Identifier: Apache-2.0
// *******************************************************************************
use crate::build_mode::{Environment, ProcessEnvironment};
use crate::category::Category;
use crate::color::ColorCode;
use crate::format::format_line;
use crate::sink::{default_sink, Channel, ConsoleSink};
use core::fmt;
use std::sync::Arc;

/// Logger prefixing messages with a name tag.
///
/// Informational messages are colored by the category given at
/// construction. Nothing is written unless the environment reports a
/// development or editor build.
pub struct TaggedLogger {
    /// Display name, rendered as `[name]`.
    name: String,

    /// Color derived from category at construction.
    color: ColorCode,

    /// Bound sink, process-wide default sink if not set.
    sink: Option<Arc<dyn ConsoleSink>>,

    /// Bound environment, process-wide build mode if not set.
    environment: Option<Arc<dyn Environment>>,
}

impl TaggedLogger {
    /// Create logger using the process-wide sink and build mode.
    ///
    /// # Parameters
    ///   * `name`: display name
    ///   * `category`: message category, selects info color
    ///
    /// # Return Values
    ///   * TaggedLogger instance
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self::from_parts(name.into(), category, None, None)
    }

    pub(crate) fn from_parts(
        name: String,
        category: Category,
        sink: Option<Arc<dyn ConsoleSink>>,
        environment: Option<Arc<dyn Environment>>,
    ) -> Self {
        Self {
            name,
            color: ColorCode::from(category.color()),
            sink,
            environment,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Info color.
    pub fn color(&self) -> &ColorCode {
        &self.color
    }

    /// Write colored informational message.
    pub fn log_info(&self, message: &str) {
        self.emit(Channel::Info, message, Some(&self.color));
    }

    /// Write warning message.
    pub fn log_warning(&self, message: &str) {
        self.emit(Channel::Warning, message, None);
    }

    /// Write error message.
    pub fn log_error(&self, message: &str) {
        self.emit(Channel::Error, message, None);
    }

    fn is_development(&self) -> bool {
        match &self.environment {
            Some(environment) => environment.is_development(),
            None => ProcessEnvironment.is_development(),
        }
    }

    fn emit(&self, channel: Channel, message: &str, color: Option<&ColorCode>) {
        if !self.is_development() {
            return;
        }

        match &self.sink {
            Some(sink) => write_line(sink.as_ref(), channel, &self.name, message, color),
            None => write_line(default_sink().as_ref(), channel, &self.name, message, color),
        }
    }
}

impl fmt::Debug for TaggedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedLogger")
            .field("name", &self.name)
            .field("color", &self.color)
            .field("bound_sink", &self.sink.is_some())
            .field("bound_environment", &self.environment.is_some())
            .finish()
    }
}

/// Format and write a single line, markup chosen by the sink.
fn write_line(
    sink: &dyn ConsoleSink,
    channel: Channel,
    name: &str,
    message: &str,
    color: Option<&ColorCode>,
) {
    let line = format_line(name, message, color, sink.markup());
    sink.write(channel, &line);
}

fn emit_global(channel: Channel, name: &str, message: &str) {
    if !ProcessEnvironment.is_development() {
        return;
    }
    write_line(default_sink().as_ref(), channel, name, message, None);
}

/// Write uncolored informational message without a logger instance.
pub fn log_info_global(name: &str, message: &str) {
    emit_global(Channel::Info, name, message);
}

/// Write warning message without a logger instance.
pub fn log_warning_global(name: &str, message: &str) {
    emit_global(Channel::Warning, name, message);
}

/// Write error message without a logger instance.
pub fn log_error_global(name: &str, message: &str) {
    emit_global(Channel::Error, name, message);
}
