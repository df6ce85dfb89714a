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
use std::io::Write;
use std::sync::Arc;

/// Sink writing info lines to stdout, warnings and errors to stderr.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StdoutSink {
    markup: Markup,
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new(Markup::Ansi)
    }
}

impl StdoutSink {
    pub fn new(markup: Markup) -> Self {
        Self { markup }
    }
}

impl ConsoleSink for StdoutSink {
    fn info(&self, line: &str) {
        let _ = writeln!(std::io::stdout().lock(), "{line}");
    }

    fn warning(&self, line: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn error(&self, line: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn markup(&self) -> Markup {
        self.markup
    }
}

/// `StdoutSink` factory.
/// Accepted parameters: `markup` (default `ansi`).
pub(crate) struct StdoutSinkFactory;

impl ConsoleSinkFactory for StdoutSinkFactory {
    fn create(&self, parameters: &SinkParameters) -> Result<Arc<dyn ConsoleSink>, ErrorCode> {
        let markup = markup_parameter(parameters, Markup::Ansi)?;
        Ok(Arc::new(StdoutSink::new(markup)))
    }
}
