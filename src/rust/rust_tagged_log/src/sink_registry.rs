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
use crate::log::{debug, error};
use crate::sink::{ConsoleSink, ConsoleSinkFactory, SinkParameters};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

/// Function providing sink factory.
type ConsoleSinkFactoryFn = fn() -> Box<dyn ConsoleSinkFactory>;

/// Map containing names as strings and factory-creating functions as values.
type SinkMap = HashMap<String, ConsoleSinkFactoryFn>;

/// Provide map containing default sinks.
fn default_sinks() -> SinkMap {
    let mut sinks: SinkMap = HashMap::new();
    // Register stdout sink.
    {
        use crate::stdout_sink::StdoutSinkFactory;
        sinks.insert("stdout".to_string(), || Box::new(StdoutSinkFactory));
    }

    // Register `log` sink.
    #[cfg(feature = "logging")]
    {
        use crate::log_sink::LogSinkFactory;
        sinks.insert("log".to_string(), || Box::new(LogSinkFactory));
    }

    sinks
}

/// Pool containing registered sink factories.
static REGISTERED_SINKS: LazyLock<Mutex<SinkMap>> = LazyLock::new(|| Mutex::new(default_sinks()));

impl From<PoisonError<MutexGuard<'_, SinkMap>>> for ErrorCode {
    fn from(_cause: PoisonError<MutexGuard<'_, SinkMap>>) -> Self {
        ErrorCode::MutexLockFailed
    }
}

/// Console sink registry.
pub struct SinkRegistry;

impl SinkRegistry {
    /// Get registered sink factory using name.
    pub fn from_name(name: &str) -> Result<Box<dyn ConsoleSinkFactory>, ErrorCode> {
        let registered_sinks = REGISTERED_SINKS.lock()?;

        match registered_sinks.get(name) {
            Some(sink_factory_fn) => Ok(sink_factory_fn()),
            None => {
                error!("unknown sink: {name}");
                Err(ErrorCode::UnknownSink)
            }
        }
    }

    /// Create sink using 'name' field from parameters.
    pub fn create(parameters: &SinkParameters) -> Result<Arc<dyn ConsoleSink>, ErrorCode> {
        let name = parameters.get("name").ok_or(ErrorCode::KeyNotFound)?;
        Self::from_name(name)?.create(parameters)
    }

    /// Register new sink factory.
    pub fn register(name: &str, sink_factory_fn: ConsoleSinkFactoryFn) -> Result<(), ErrorCode> {
        let mut registered_sinks = REGISTERED_SINKS.lock()?;

        // Check sink factory already registered.
        if registered_sinks.contains_key(name) {
            return Err(ErrorCode::SinkAlreadyRegistered);
        }

        // Insert sink factory.
        registered_sinks.insert(name.to_string(), sink_factory_fn);
        debug!("sink registered: {name}");
        Ok(())
    }

    /// Names of registered sinks, sorted.
    pub fn names() -> Result<Vec<String>, ErrorCode> {
        let registered_sinks = REGISTERED_SINKS.lock()?;
        let mut names: Vec<String> = registered_sinks.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
pub(crate) fn reset_registry() {
    let mut registry = REGISTERED_SINKS
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *registry = default_sinks();
}
