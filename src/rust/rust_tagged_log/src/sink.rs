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
use crate::error_code::ErrorCode;
use crate::format::Markup;
use crate::log::debug;
use core::fmt;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// Output channel of a console sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Info => "info",
            Channel::Warning => "warning",
            Channel::Error => "error",
        };
        f.write_str(name)
    }
}

/// Console sink interface.
///
/// Writes must not fail from the caller's perspective, implementations
/// swallow their own I/O errors.
pub trait ConsoleSink: Send + Sync {
    /// Write informational line.
    fn info(&self, line: &str);

    /// Write warning line.
    fn warning(&self, line: &str);

    /// Write error line.
    fn error(&self, line: &str);

    /// Inline color syntax accepted on the info channel.
    fn markup(&self) -> Markup {
        Markup::RichText
    }

    /// Write line to given channel.
    fn write(&self, channel: Channel, line: &str) {
        match channel {
            Channel::Info => self.info(line),
            Channel::Warning => self.warning(line),
            Channel::Error => self.error(line),
        }
    }
}

/// Sink parameters, as provided by configuration.
/// `name` selects the factory, remaining keys are factory-specific.
pub type SinkParameters = HashMap<String, String>;

/// Console sink factory interface.
pub trait ConsoleSinkFactory {
    /// Create sink using provided parameters.
    fn create(&self, parameters: &SinkParameters) -> Result<Arc<dyn ConsoleSink>, ErrorCode>;
}

/// Read optional `markup` parameter.
pub(crate) fn markup_parameter(
    parameters: &SinkParameters,
    default: Markup,
) -> Result<Markup, ErrorCode> {
    match parameters.get("markup") {
        Some(value) => value.parse(),
        None => Ok(default),
    }
}

fn initial_default_sink() -> Arc<dyn ConsoleSink> {
    #[cfg(feature = "logging")]
    {
        Arc::new(crate::log_sink::LogSink::default())
    }
    #[cfg(not(feature = "logging"))]
    {
        Arc::new(crate::stdout_sink::StdoutSink::default())
    }
}

/// Process-wide default sink.
static DEFAULT_SINK: LazyLock<RwLock<Arc<dyn ConsoleSink>>> =
    LazyLock::new(|| RwLock::new(initial_default_sink()));

/// Replace the process-wide default sink.
pub fn set_default_sink(sink: Arc<dyn ConsoleSink>) {
    let mut default = DEFAULT_SINK.write().unwrap_or_else(PoisonError::into_inner);
    *default = sink;
    debug!("default sink replaced");
}

/// Get the process-wide default sink.
pub fn default_sink() -> Arc<dyn ConsoleSink> {
    DEFAULT_SINK
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
pub(crate) fn reset_default_sink() {
    let mut default = DEFAULT_SINK.write().unwrap_or_else(PoisonError::into_inner);
    *default = initial_default_sink();
}
