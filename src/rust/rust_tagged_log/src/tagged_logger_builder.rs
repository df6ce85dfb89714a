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
use crate::build_mode::{BuildMode, Environment, StaticEnvironment};
use crate::category::Category;
use crate::error_code::ErrorCode;
use crate::sink::{ConsoleSink, SinkParameters};
use crate::sink_registry::SinkRegistry;
use crate::tagged_logger::TaggedLogger;
use std::sync::Arc;

/// Where the logger's sink comes from.
enum SinkSource {
    Instance(Arc<dyn ConsoleSink>),
    Parameters(SinkParameters),
}

/// Tagged logger builder.
pub struct TaggedLoggerBuilder {
    /// Display name.
    name: String,

    /// Message category.
    category: Option<Category>,

    /// Sink, process-wide default sink if not set.
    sink: Option<SinkSource>,

    /// Environment, process-wide build mode if not set.
    environment: Option<Arc<dyn Environment>>,
}

impl TaggedLoggerBuilder {
    /// Create a builder for a logger with given display name.
    ///
    /// All other settings are using default values until changed via the
    /// builder API.
    ///
    /// # Parameters
    ///   * `name`: display name
    ///
    /// # Return Values
    ///   * TaggedLoggerBuilder instance
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            sink: None,
            environment: None,
        }
    }

    /// Configure category.
    ///
    /// # Parameters
    ///   * `category`: message category (default: [`Category::Other`](Category::Other))
    ///
    /// # Return Values
    ///   * TaggedLoggerBuilder instance
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Bind sink instance.
    /// Replaces previously set sink or sink parameters.
    pub fn sink(mut self, sink: Arc<dyn ConsoleSink>) -> Self {
        self.sink = Some(SinkSource::Instance(sink));
        self
    }

    /// Bind sink created from registry using parameters.
    /// Replaces previously set sink or sink parameters.
    pub fn sink_parameters(mut self, parameters: SinkParameters) -> Self {
        self.sink = Some(SinkSource::Parameters(parameters));
        self
    }

    /// Bind environment predicate.
    pub fn environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Bind fixed build mode.
    pub fn build_mode(self, mode: BuildMode) -> Self {
        self.environment(Arc::new(StaticEnvironment(mode)))
    }

    /// Finalize the builder and create the logger.
    ///
    /// # Return Values
    ///   * Ok: TaggedLogger instance
    ///   * `ErrorCode::KeyNotFound`: sink parameters without `name`
    ///   * `ErrorCode::UnknownSink`: sink name not registered
    ///   * `ErrorCode::InvalidMarkup`: invalid `markup` sink parameter
    ///   * `ErrorCode::InvalidSinkParameters`: other sink parameters rejected
    pub fn build(self) -> Result<TaggedLogger, ErrorCode> {
        let sink = match self.sink {
            Some(SinkSource::Instance(sink)) => Some(sink),
            Some(SinkSource::Parameters(parameters)) => Some(SinkRegistry::create(&parameters)?),
            None => None,
        };

        Ok(TaggedLogger::from_parts(
            self.name,
            self.category.unwrap_or_default(),
            sink,
            self.environment,
        ))
    }
}
