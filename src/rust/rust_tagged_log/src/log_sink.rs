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
use crate::sink::{markup_parameter, ConsoleSink, ConsoleSinkFactory, SinkParameters};
use std::sync::Arc;

/// Default `log` target of [`LogSink`].
pub const DEFAULT_TARGET: &str = "tagged_log";

/// Sink forwarding lines to the `log` crate.
#[derive(Clone, Debug, PartialEq)]
pub struct LogSink {
    target: String,
    markup: Markup,
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

impl LogSink {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            markup: Markup::Plain,
        }
    }

    /// Set inline color syntax, for `log` backends rendering markup.
    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    /// `log` target used for all records.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl ConsoleSink for LogSink {
    fn info(&self, line: &str) {
        ::log::info!(target: self.target.as_str(), "{line}");
    }

    fn warning(&self, line: &str) {
        ::log::warn!(target: self.target.as_str(), "{line}");
    }

    fn error(&self, line: &str) {
        ::log::error!(target: self.target.as_str(), "{line}");
    }

    fn markup(&self) -> Markup {
        self.markup
    }
}

/// `LogSink` factory.
/// Accepted parameters: `target` (default `tagged_log`), `markup` (default `plain`).
pub(crate) struct LogSinkFactory;

impl ConsoleSinkFactory for LogSinkFactory {
    fn create(&self, parameters: &SinkParameters) -> Result<Arc<dyn ConsoleSink>, ErrorCode> {
        let target = match parameters.get("target") {
            Some(target) if target.is_empty() => return Err(ErrorCode::InvalidSinkParameters),
            Some(target) => target.as_str(),
            None => DEFAULT_TARGET,
        };
        let markup = markup_parameter(parameters, Markup::Plain)?;
        Ok(Arc::new(LogSink::new(target).with_markup(markup)))
    }
}
