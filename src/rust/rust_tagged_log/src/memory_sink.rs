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
use crate::format::Markup;
use crate::sink::{Channel, ConsoleSink};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Single line written to a sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkRecord {
    pub channel: Channel,
    pub line: String,
}

/// Sink keeping written lines in memory.
///
/// Clones share the same buffer, so a clone can be handed to a logger and
/// the original inspected afterwards.
#[derive(Clone, Debug)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<SinkRecord>>>,
    markup: Markup,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    pub fn new() -> Self {
        Self::with_markup(Markup::RichText)
    }

    pub fn with_markup(markup: Markup) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            markup,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SinkRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All records, in write order.
    pub fn records(&self) -> Vec<SinkRecord> {
        self.lock().clone()
    }

    /// Lines written to given channel, in write order.
    pub fn lines(&self, channel: Channel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|record| record.channel == channel)
            .map(|record| record.line.clone())
            .collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, channel: Channel, line: &str) {
        self.lock().push(SinkRecord {
            channel,
            line: line.to_string(),
        });
    }
}

impl ConsoleSink for MemorySink {
    fn info(&self, line: &str) {
        self.push(Channel::Info, line);
    }

    fn warning(&self, line: &str) {
        self.push(Channel::Warning, line);
    }

    fn error(&self, line: &str) {
        self.push(Channel::Error, line);
    }

    fn markup(&self) -> Markup {
        self.markup
    }
}
